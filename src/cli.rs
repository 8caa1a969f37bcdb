use crate::config::ScanConfig;
use crate::diagram::DiagramFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "legacylens")]
#[command(about = "Python 2 codebase inspection and modernization helper", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (skips discovery of .legacylens.toml)
    #[arg(long, global = true, env = "LEGACYLENS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// File selection flags shared by every tree command.
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// File extension to process (repeatable, replaces configured extensions)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// File name to skip wherever it appears (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,
}

impl ScanArgs {
    /// Layer these flags over the configured `[scan]` section.
    pub fn apply(&self, mut scan: ScanConfig) -> ScanConfig {
        if !self.extensions.is_empty() {
            scan.extensions = self
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect();
        }
        scan.exclude_names.extend(self.exclude.iter().cloned());
        scan
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write Python 3 conversion prompts for files using Python 2 idioms
    Analyze {
        /// Root directory to scan
        path: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Render the directory structure as a Mermaid diagram
    Visualize {
        /// Root directory to scan
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "mermaid")]
        format: DiagramFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Label of the outer container
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Scaffold unittest modules for every discovered function
    #[command(name = "gen-tests")]
    GenTests {
        /// Root directory to scan
        path: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// List discovered functions per file
    Functions {
        /// Root directory to scan
        path: PathBuf,

        /// Emit JSON instead of a text listing
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Initialize a .legacylens.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_visualize_flags() {
        let cli = Cli::try_parse_from([
            "legacylens",
            "visualize",
            "src",
            "--format",
            "html",
            "-o",
            "out.html",
            "--ext",
            "pyw",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Visualize {
                format,
                output,
                scan,
                ..
            } => {
                assert_eq!(format, DiagramFormat::Html);
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert_eq!(scan.extensions, vec!["pyw"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_scan_args_override_extensions_and_extend_excludes() {
        let args = ScanArgs {
            extensions: vec![".pyw".to_string()],
            exclude: vec!["setup.py".to_string()],
        };
        let base = ScanConfig {
            exclude_names: vec!["conftest.py".to_string()],
            ..ScanConfig::default()
        };

        let scan = args.apply(base);
        assert_eq!(scan.extensions, vec!["pyw"]);
        assert_eq!(scan.exclude_names, vec!["conftest.py", "setup.py"]);
    }

    #[test]
    fn test_scan_args_keep_configured_extensions_when_absent() {
        let scan = ScanArgs::default().apply(ScanConfig::default());
        assert_eq!(scan.extensions, vec!["py"]);
    }
}
