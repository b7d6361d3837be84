//! Read-only queries over the sharing graph.

pub mod browse;
pub mod grantees;
pub mod risks;
pub mod statistics;
