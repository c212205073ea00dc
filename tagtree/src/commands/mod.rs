mod check;
mod completions;
mod import;
mod page;
mod render;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use import::ImportCommand;
use page::PageCommand;
use render::RenderCommand;
use tagtree_jsx::RenderOptions;
use tagtree_manifest::{CONFIG_FILE, Config};

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tagtree_manifest::Result<T> {
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

impl<T> UnwrapOrExit<T> for tagtree_jsx::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tagtree")]
#[command(version)]
#[command(about = "Compile component trees to JSX")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Page(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Import(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON component tree to JSX
    Render(RenderCommand),

    /// Wrap a rendered tree in a component module
    Page(PageCommand),

    /// Validate a JSON component tree without writing output
    Check(CheckCommand),

    /// Print an import statement
    Import(ImportCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// The `--config` flag shared by commands that read tagtree.toml.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to tagtree.toml (defaults to ./tagtree.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load the configuration, exiting with a report when it is invalid.
    pub fn load(&self) -> Config {
        match &self.config {
            Some(path) => Config::open_or_default(path, true),
            None => Config::open_or_default(CONFIG_FILE, false),
        }
        .unwrap_or_exit()
    }
}

/// Render options as configured in tagtree.toml.
pub(crate) fn render_options(config: &Config) -> RenderOptions {
    RenderOptions::default()
        .indent(config.render.indent.indent())
        .focus_ref(config.render.focus_ref.as_str())
        .max_depth(config.render.max_depth)
}
