pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod fit;
pub mod graph;
pub mod metrics;
pub mod record;
pub mod report;
