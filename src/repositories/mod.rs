//! Bound-parameter statements for each table. Handlers never build SQL themselves.

pub mod vendor;
pub mod product;
pub mod service;
pub mod stats;
