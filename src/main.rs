mod cli;

use cli::Args;
use measures_ws::adapters::inbound::MeasuresWs;
use measures_ws::adapters::outbound::dataset::{DatasetLoader, DefaultComponentTypes, InMemoryDatabase};
use measures_ws::adapters::outbound::logging::init_logging;
use measures_ws::application::dto::RequestParams;
use measures_ws::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use measures_ws::config::{self, CliOverrides, ConfigFile};
use measures_ws::ports::inbound::MeasuresPort;
use measures_ws::shared::{ExitCode, Result};
use std::process;
use tracing::{debug, info};

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Step 1: Load the explicit config, or discover one in the working directory
    let config_file = load_config(&args)?;

    // Step 2: Logging, once the configured level is known
    init_logging(config_file.as_ref().and_then(|c| c.log_level.as_deref()));
    if let Some(config) = &config_file {
        config::warn_unknown_fields(config);
    }

    // Step 3: CLI options win over the config file
    let settings = config::merge(
        config_file.as_ref(),
        CliOverrides {
            format: args.format,
            data: args.data.clone(),
        },
    )?;
    debug!(?settings, "Effective settings");

    // Step 4: Parse the request before touching the dataset
    let params = RequestParams::from_pairs(&args.params)?;

    // Step 5: Load the dataset and serve the request
    let dataset = DatasetLoader::new(settings.data.clone()).load()?;
    let ws = MeasuresWs::new(
        InMemoryDatabase::new(dataset),
        DefaultComponentTypes::new(),
        settings.limits,
    );
    let response = ws.handle(&args.action, &params)?;
    info!(action = response.action(), "Request served");

    // Step 6: Render and present
    let formatter = FormatterFactory::create(settings.format);
    let output = formatter.format(&response)?;
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&output)?;

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}
