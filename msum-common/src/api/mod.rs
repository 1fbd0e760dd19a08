//! Shared API types for the msum HTTP surface

pub mod types;
