//! Library side of the `erc` binary: configuration, logging and the pipeline
//! driver.

pub mod config;
pub mod logging;
pub mod pipeline;
