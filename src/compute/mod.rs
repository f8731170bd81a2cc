//! Evaluates the derived rank values.
pub mod engine;
pub mod kernel;
pub mod ledger;

pub use engine::Engine;
pub use ledger::Ledger;
