//! Library side of the `omeka-csv` tool: settings, logging, and the
//! ingest → map → write pipeline.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
