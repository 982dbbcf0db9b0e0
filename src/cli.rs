use clap::Parser;
use measures_ws::application::dto::OutputFormat;
use std::path::PathBuf;

/// Serve measures web service requests against a local dataset
#[derive(Parser, Debug)]
#[command(name = "measures-ws")]
#[command(version)]
#[command(
    about = "Serve measures web service requests (component, component_tree, search, search_history) against a local dataset",
    long_about = None
)]
pub struct Args {
    /// Web service action: component, component_tree, search or search_history
    pub action: String,

    /// Request parameter in the form key=value.
    /// Can be specified multiple times: -P component=my_project -P metricKeys=ncloc,coverage
    #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Path to the JSON dataset (overrides the config file)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output format: json or markdown (overrides the config file, defaults to json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to measures-ws.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
