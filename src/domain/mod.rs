// Domain module - configuration, errors, and the classification data model
pub mod config;
pub mod error;
pub mod model;
