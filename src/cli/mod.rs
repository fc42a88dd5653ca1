//! CLI argument parsing for licsync.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// licsync: keep a project's license file in sync with a canonical license.
///
/// The canonical license is downloaded into a template file on request
/// (`license-template-update`); the project license file is regenerated from
/// that template on every build (`license-update`, pulled in by `assemble`).
#[derive(Parser, Debug)]
#[command(name = "licsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root directory (default: current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Config file (default: <project-dir>/licsync.yaml).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for licsync.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download configured license into license template file.
    ///
    /// Runs the `licenseTemplateUpdate` task. Performs one network request.
    #[command(alias = "licenseTemplateUpdate")]
    LicenseTemplateUpdate,

    /// Update license file from template.
    ///
    /// Runs the `licenseUpdate` task. No network access.
    #[command(alias = "licenseUpdate")]
    LicenseUpdate,

    /// Update the license file, then run the configured assemble command.
    Assemble,

    /// Run one or more tasks together with their dependencies.
    Run(RunArgs),

    /// List the available tasks.
    Tasks(TasksArgs),

    /// Print the settings for the external license header tool.
    ///
    /// Shows the header file and the exclude globs, in order.
    HeaderConfig(HeaderConfigArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Task names (e.g., licenseTemplateUpdate, license-update, assemble).
    #[arg(required = true)]
    pub tasks: Vec<String>,
}

/// Arguments for the `tasks` command.
#[derive(Parser, Debug)]
pub struct TasksArgs {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `header-config` command.
#[derive(Parser, Debug)]
pub struct HeaderConfigArgs {
    /// Output as JSON instead of YAML.
    #[arg(long)]
    pub json: bool,

    /// Report whether each path (relative to the project root) is excluded.
    #[arg(long, value_name = "PATH")]
    pub check: Vec<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_task_subcommands() {
        let cli = Cli::try_parse_from(["licsync", "license-template-update"]).unwrap();
        assert!(matches!(cli.command, Command::LicenseTemplateUpdate));

        let cli = Cli::try_parse_from(["licsync", "licenseUpdate"]).unwrap();
        assert!(matches!(cli.command, Command::LicenseUpdate));

        let cli = Cli::try_parse_from(["licsync", "assemble"]).unwrap();
        assert!(matches!(cli.command, Command::Assemble));
    }

    #[test]
    fn parse_global_options() {
        let cli = Cli::try_parse_from([
            "licsync",
            "assemble",
            "--project-dir",
            "app",
            "--config",
            "ci/licsync.yaml",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.project_dir, Some(PathBuf::from("app")));
        assert_eq!(cli.config, Some(PathBuf::from("ci/licsync.yaml")));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn parse_run_requires_a_task() {
        assert!(Cli::try_parse_from(["licsync", "run"]).is_err());

        let cli = Cli::try_parse_from(["licsync", "run", "licenseTemplateUpdate", "assemble"])
            .unwrap();
        match cli.command {
            Command::Run(args) => assert_eq!(args.tasks, vec!["licenseTemplateUpdate", "assemble"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_header_config_checks() {
        let cli = Cli::try_parse_from([
            "licsync",
            "header-config",
            "--json",
            "--check",
            "package.json",
            "--check",
            "src/main.rs",
        ])
        .unwrap();

        match cli.command {
            Command::HeaderConfig(args) => {
                assert!(args.json);
                assert_eq!(
                    args.check,
                    vec![PathBuf::from("package.json"), PathBuf::from("src/main.rs")]
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["licsync", "-q", "-v", "tasks"]).is_err());
    }
}
