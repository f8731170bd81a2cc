use serde::{Serialize, Deserialize};

/// Default fraction of collected resource a rank cedes upward.
pub const DEFAULT_CEDE_FRACTION: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct RankId(pub u32);

impl RankId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

/// How a rank treats what it collects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cession {
    pub must_cede: bool,
    pub fraction: f64,
}

impl Default for Cession {
    fn default() -> Self {
        Self { must_cede: true, fraction: DEFAULT_CEDE_FRACTION }
    }
}

impl Cession {
    /// A rank that keeps everything it collects.
    pub fn retain_all() -> Self {
        Self { must_cede: false, ..Self::default() }
    }

    pub fn fraction(fraction: f64) -> Self {
        Self { must_cede: true, fraction }
    }
}

/// Construction parameters for a single rank.
///
/// `direct_subordinate_count` is signed so that definitions coming from outside
/// the type system (JSON files) can be rejected with a proper error instead of
/// failing to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct RankSpec {
    pub name: String,
    pub direct_subordinate_count: i64,
    pub subordinate: Option<RankId>,
    pub cession: Cession,
}

impl RankSpec {
    pub fn base(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direct_subordinate_count: 0,
            subordinate: None,
            cession: Cession::default(),
        }
    }

    pub fn over(name: impl Into<String>, direct_subordinate_count: i64, subordinate: RankId) -> Self {
        Self {
            name: name.into(),
            direct_subordinate_count,
            subordinate: Some(subordinate),
            cession: Cession::default(),
        }
    }

    pub fn with_cession(mut self, cession: Cession) -> Self {
        self.cession = cession;
        self
    }
}

/// The three derived quantities of a rank.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RankFlow {
    pub collected: f64,
    pub ceded: f64,
    pub usable: f64,
}
