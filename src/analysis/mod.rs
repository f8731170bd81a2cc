//! Structural analysis of rank chains.
pub mod topology;
