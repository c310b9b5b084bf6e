pub mod aggregate;
pub mod archive;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod pipeline;
pub mod report;
