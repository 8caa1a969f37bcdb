use anyhow::Result;
use clap::Parser;
use legacylens::cli::{Cli, Commands};
use legacylens::commands::{self, generate_tests};
use legacylens::config::{self, LegacyLensConfig};
use legacylens::errors::{report_warnings, BatchOutcome, Warning};
use legacylens::output;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Commands::Init { force } = cli.command {
        let path = commands::init_config(force)?;
        println!("Created {} configuration file", path.display());
        return Ok(());
    }

    let config = config::load_config(cli.config.as_deref())?;
    let warnings = run(cli.command, config)?;
    report_warnings(&warnings);
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

// Dispatch a tree command and hand back the warnings it collected.
fn run(command: Commands, config: LegacyLensConfig) -> Result<Vec<Warning>> {
    match command {
        Commands::Analyze { path, scan } => {
            let outcome = commands::handle_analyze(commands::AnalyzeConfig {
                path,
                scan: scan.apply(config.scan),
                prompts_file: config.output.prompts_file,
            })?;
            println!("{}", outcome.value.output_path.display());
            Ok(outcome.warnings)
        }
        Commands::Visualize {
            path,
            format,
            output,
            title,
            scan,
        } => {
            let outcome = commands::handle_visualize(commands::VisualizeConfig {
                path,
                scan: scan.apply(config.scan),
                title: title.unwrap_or(config.diagram.title),
                format,
            })?;
            output::emit(&outcome.value, output.as_deref())?;
            Ok(outcome.warnings)
        }
        Commands::GenTests { path, scan } => {
            let tests_dir = config.output.tests_dir;
            let outcome = commands::handle_generate_tests(commands::GenerateTestsConfig {
                path: path.clone(),
                scan: scan.apply(config.scan),
                tests_dir: tests_dir.clone(),
            })?;
            println!("{}", generate_tests::saved_message(&path, &tests_dir));
            Ok(outcome.warnings)
        }
        Commands::Functions { path, json, scan } => {
            let BatchOutcome { value, warnings } =
                commands::handle_functions(commands::FunctionsConfig {
                    path,
                    scan: scan.apply(config.scan),
                })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!("{}", commands::format_listing(&value));
            }
            Ok(warnings)
        }
        Commands::Init { .. } => Ok(Vec::new()),
    }
}
