/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod dataset;
pub mod filesystem;
pub mod formatters;
pub mod logging;
