//! CLI command implementations.

pub(crate) mod catalog;
pub(crate) mod plan;
pub(crate) mod query;
