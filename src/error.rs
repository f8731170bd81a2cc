//! Error types shared by the model, the definition loader and the CLI surface.
use thiserror::Error;

/// Invalid construction parameters. Raised before any value is computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Cede fraction {value} of rank '{rank}' is outside [0, 1]")]
    CedeFractionOutOfRange { rank: String, value: f64 },
    #[error("Rank '{rank}' has a negative direct subordinate count ({count})")]
    NegativeSubordinateCount { rank: String, count: i64 },
    #[error("Rank name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("Rank names must not be empty")]
    EmptyName,
    #[error("Unknown theme '{0}' (expected one of: sakura, nord, osaka-jade, tokyo-night, system)")]
    UnknownTheme(String),
    #[error("Rank '{rank}' evaluates to a non-finite value (collected={collected}, ceded={ceded})")]
    NonFiniteFlow { rank: String, collected: f64, ceded: f64 },
    #[error("Malformed chain definition: {0}")]
    MalformedDefinition(String),
}

/// Malformed chain topology.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructuralError {
    #[error("Cycle detected involving rank '{rank}'")]
    Cycle { rank: String },
    #[error("Rank '{rank}' references unknown subordinate '{subordinate}'")]
    DanglingSubordinate { rank: String, subordinate: String },
    #[error("Rank '{subordinate}' is the subordinate of both '{first}' and '{second}'")]
    Branching { subordinate: String, first: String, second: String },
    #[error("A chain needs exactly one base rank, found {0}")]
    BaseCount(usize),
    #[error("Rank '{rank}' was scheduled before its subordinate")]
    Unordered { rank: String },
    #[error("Rank handle {0} does not belong to this hierarchy")]
    UnknownRank(u32),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HierarchyError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Structural(#[from] StructuralError),
}
