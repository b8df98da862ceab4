mod apply;
mod build;
mod clear;
mod prepare;
mod run;
mod tools;

use std::{
    io,
    path::{Path, PathBuf},
};

use apply::ApplyCommand;
use build::BuildCommand;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clear::ClearCommand;
use eyre::Result;
use prepare::PrepareCommand;
use run::RunCommand;
use tagforge_manifest::{Project, TagforgeToml};
use tools::ToolsCommand;
use tracing::Level;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tagforge_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tagforge")]
#[command(version)]
#[command(about = "Generate C/C++ boilerplate from tagged declarations")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Path to tagforge.toml; the project root is its directory
    #[arg(short, long, global = true, default_value = TagforgeToml::FILE_NAME)]
    config: PathBuf,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Level {
        match (self.global.quiet, self.global.verbose) {
            (true, _) => Level::WARN,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }

    pub fn run(&self) -> Result<()> {
        let config = &self.global.config;
        match &self.command {
            Commands::Build(cmd) => cmd.run(config),
            Commands::Run(cmd) => cmd.run(config),
            Commands::Apply(cmd) => cmd.run(config),
            Commands::Prepare(cmd) => cmd.run(config),
            Commands::Clear(cmd) => cmd.run(config),
            Commands::Tools(cmd) => cmd.run(config),
            Commands::Completions { shell } => {
                let mut cmd = Cli::command();
                clap_complete::generate(*shell, &mut cmd, "tagforge", &mut io::stdout());
                Ok(())
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the periodic tools, then compile the project
    Build(BuildCommand),

    /// Build, then run the produced binary with the given arguments
    Run(RunCommand),

    /// Run one tool by name, or every manual tool with `.`
    Apply(ApplyCommand),

    /// Create an empty generated header so sources can include it
    Prepare(PrepareCommand),

    /// Delete generated headers and build outputs
    Clear(ClearCommand),

    /// List the available tools
    Tools(ToolsCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Load and resolve the project described by `config`.
///
/// A missing `tagforge.toml` at the default location means every default;
/// an explicit path must exist.
pub(crate) fn load_project(config: &Path) -> Project {
    let file = if !config.exists() && config == Path::new(TagforgeToml::FILE_NAME) {
        TagforgeToml::implicit(config)
    } else {
        TagforgeToml::open(config).unwrap_or_exit()
    };
    Project::resolve(&file, project_root(config)).unwrap_or_exit()
}

fn project_root(config: &Path) -> PathBuf {
    let root = match config.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    root.canonicalize().unwrap_or(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::parse_from(["tagforge", "-vv", "build"]);
        assert_eq!(cli.verbosity(), Level::TRACE);

        let cli = Cli::parse_from(["tagforge", "tools", "-q"]);
        assert_eq!(cli.verbosity(), Level::WARN);

        let cli = Cli::parse_from(["tagforge", "clear"]);
        assert_eq!(cli.verbosity(), Level::INFO);
    }

    #[test]
    fn test_run_takes_trailing_args() {
        let cli = Cli::parse_from(["tagforge", "run", "--", "-x", "input.txt"]);
        let Commands::Run(run) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(run.args, ["-x", "input.txt"]);
    }

    #[test]
    fn test_project_root() {
        assert_eq!(
            project_root(Path::new("/nonexistent/demo/tagforge.toml")),
            Path::new("/nonexistent/demo")
        );
    }
}
