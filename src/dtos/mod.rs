pub mod common;
pub mod lenient;
pub mod vendor;
pub mod product;
pub mod service;
pub mod stats;
