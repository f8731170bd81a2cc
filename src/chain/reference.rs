//! The eight-rank pyramid from *The Will of the Many*.

use super::builder::HierarchyBuilder;
use super::hierarchy::Hierarchy;
use crate::error::HierarchyError;
use crate::store::Cession;

pub const REFERENCE_TITLE: &str = "The Will of the Many - Pyramid Summary";

/// Base to apex: (name, direct subordinate count, cession).
fn reference_ranks() -> [(&'static str, i64, Cession); 8] {
    [
        ("Octavus", 0, Cession::default()),
        ("Septimus", 8, Cession::default()),
        ("Sextus", 7, Cession::default()),
        ("Quintus", 6, Cession::default()),
        ("Quartus", 5, Cession::default()),
        ("Tertius", 4, Cession::default()),
        ("Dimidius", 3, Cession::default()),
        ("Princeps", 2, Cession::retain_all()),
    ]
}

pub fn try_reference() -> Result<Hierarchy, HierarchyError> {
    let mut builder = HierarchyBuilder::new(REFERENCE_TITLE);
    for (name, count, cession) in reference_ranks() {
        builder.stack(name, count, cession)?;
    }
    Ok(builder.build()?)
}

#[cfg(test)]
impl Hierarchy {
    /// Test fixture: the reference pyramid.
    pub fn reference() -> Self {
        try_reference().unwrap()
    }
}
