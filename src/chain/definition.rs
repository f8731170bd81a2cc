//! definition.rs
//! Serializable chain definitions, with subordinates referenced by name.

use super::hierarchy::{Hierarchy, DEFAULT_TITLE};
use crate::error::{ConfigurationError, HierarchyError, StructuralError};
use crate::store::{Cession, RankId, RankSpec, Registry, DEFAULT_CEDE_FRACTION};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainDefinition {
    #[serde(default = "default_title")]
    pub title: String,
    pub ranks: Vec<RankDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankDefinition {
    pub name: String,
    pub direct_subordinate_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subordinate: Option<String>,
    #[serde(default = "default_must_cede")]
    pub must_cede: bool,
    #[serde(default = "default_cede_fraction")]
    pub cede_fraction: f64,
}

fn default_title() -> String { DEFAULT_TITLE.to_string() }
fn default_must_cede() -> bool { true }
fn default_cede_fraction() -> f64 { DEFAULT_CEDE_FRACTION }

impl ChainDefinition {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::MalformedDefinition(e.to_string()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigurationError> {
        serde_json::from_reader(reader).map_err(|e| ConfigurationError::MalformedDefinition(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Captures an evaluated hierarchy as a definition, listed base to apex.
    pub fn from_hierarchy(hierarchy: &Hierarchy) -> Self {
        let ranks = hierarchy
            .ranks()
            .map(|view| RankDefinition {
                name: view.name.to_string(),
                direct_subordinate_count: i64::from(view.direct_subordinate_count),
                subordinate: view.subordinate.map(str::to_string),
                must_cede: view.cession.must_cede,
                cede_fraction: view.cession.fraction,
            })
            .collect();
        Self { title: hierarchy.title().to_string(), ranks }
    }

    /// Resolves names to handles, validates every rank and evaluates the chain.
    ///
    /// Ranks may be listed in any order. Handles are assigned by position, so
    /// a subordinate can be referenced before it is listed.
    pub fn build(&self) -> Result<Hierarchy, HierarchyError> {
        let mut positions: HashMap<&str, RankId> = HashMap::with_capacity(self.ranks.len());
        for (i, rank) in self.ranks.iter().enumerate() {
            if positions.insert(rank.name.as_str(), RankId::new(i)).is_some() {
                return Err(ConfigurationError::DuplicateName(rank.name.clone()).into());
            }
        }

        let mut registry = Registry::new();
        for rank in &self.ranks {
            let subordinate = match &rank.subordinate {
                None => None,
                Some(name) => Some(*positions.get(name.as_str()).ok_or_else(|| {
                    StructuralError::DanglingSubordinate { rank: rank.name.clone(), subordinate: name.clone() }
                })?),
            };
            registry.add_rank(RankSpec {
                name: rank.name.clone(),
                direct_subordinate_count: rank.direct_subordinate_count,
                subordinate,
                cession: Cession { must_cede: rank.must_cede, fraction: rank.cede_fraction },
            })?;
        }

        Ok(Hierarchy::from_registry(registry)?.with_title(self.title.clone()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom, Write};

    #[test]
    fn test_defaults_and_any_order() {
        let json = r#"{
            "title": "Tiny",
            "ranks": [
                { "name": "Top", "direct_subordinate_count": 2, "subordinate": "Base", "must_cede": false },
                { "name": "Base", "direct_subordinate_count": 0 }
            ]
        }"#;
        let def = ChainDefinition::from_json_str(json).unwrap();
        assert_eq!(def.ranks[1].cede_fraction, 0.5);
        assert!(def.ranks[1].must_cede);

        let h = def.build().unwrap();
        assert_eq!(h.title(), "Tiny");
        let top = h.find("Top").unwrap();
        assert_eq!(h.apex(), top);
        assert_eq!(h.usable(top).unwrap(), 2.0);
    }

    #[test]
    fn test_two_rank_cycle_is_structural() {
        let json = r#"{ "ranks": [
            { "name": "A", "direct_subordinate_count": 1, "subordinate": "B" },
            { "name": "B", "direct_subordinate_count": 1, "subordinate": "A" }
        ] }"#;
        let err = ChainDefinition::from_json_str(json).unwrap().build().unwrap_err();
        assert!(matches!(err, HierarchyError::Structural(StructuralError::Cycle { .. })), "{:?}", err);
    }

    #[test]
    fn test_dangling_name() {
        let json = r#"{ "ranks": [
            { "name": "A", "direct_subordinate_count": 1, "subordinate": "Ghost" }
        ] }"#;
        let err = ChainDefinition::from_json_str(json).unwrap().build().unwrap_err();
        assert_eq!(
            err,
            HierarchyError::Structural(StructuralError::DanglingSubordinate {
                rank: "A".into(),
                subordinate: "Ghost".into()
            })
        );
    }

    #[test]
    fn test_invalid_parameters_are_configuration_errors() {
        let fraction = r#"{ "ranks": [ { "name": "A", "direct_subordinate_count": 0, "cede_fraction": 1.5 } ] }"#;
        let err = ChainDefinition::from_json_str(fraction).unwrap().build().unwrap_err();
        assert!(matches!(err, HierarchyError::Configuration(ConfigurationError::CedeFractionOutOfRange { .. })));

        let negative = r#"{ "ranks": [ { "name": "A", "direct_subordinate_count": -3 } ] }"#;
        let err = ChainDefinition::from_json_str(negative).unwrap().build().unwrap_err();
        assert!(matches!(err, HierarchyError::Configuration(ConfigurationError::NegativeSubordinateCount { .. })));

        let duplicate = r#"{ "ranks": [
            { "name": "A", "direct_subordinate_count": 0 },
            { "name": "A", "direct_subordinate_count": 0 }
        ] }"#;
        let err = ChainDefinition::from_json_str(duplicate).unwrap().build().unwrap_err();
        assert_eq!(err, HierarchyError::Configuration(ConfigurationError::DuplicateName("A".into())));
    }

    #[test]
    fn test_malformed_json() {
        let err = ChainDefinition::from_json_str(r#"{ "ranks": [ { "name": "A" } ] }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::MalformedDefinition(_)));

        let err = ChainDefinition::from_json_str(r#"{ "ranks": [], "colour": "red" }"#).unwrap_err();
        assert!(err.to_string().contains("colour"), "{}", err);
    }

    #[test]
    fn test_reference_definition_survives_a_file() {
        let original = ChainDefinition::from_hierarchy(&Hierarchy::reference());
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(original.to_json_pretty().unwrap().as_bytes()).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();

        let loaded = ChainDefinition::from_reader(&file).unwrap();
        assert_eq!(loaded, original);

        let h = loaded.build().unwrap();
        assert_eq!(h.collected(h.apex()).unwrap(), 430.25);
    }
}
