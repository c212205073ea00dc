use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use serde_json::Value;
use tagtree_jsx::Renderer;
use tagtree_manifest::IndentSetting;
use tracing::info;

use super::{ConfigArgs, UnwrapOrExit, render_options};
use crate::io;

#[derive(Args)]
pub struct RenderCommand {
    /// JSON component tree (`-` reads standard input)
    pub input: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Indentation levels applied to every line
    #[arg(long, default_value_t = 0)]
    pub indent_width: usize,

    /// Spaces per level or "tab" (overrides tagtree.toml)
    #[arg(long)]
    pub indent: Option<IndentSetting>,

    /// Output file (defaults to standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let mut config = self.config.load();
        if let Some(indent) = self.indent {
            config.render.indent = indent;
        }

        let tree: Value = io::read_json(&self.input)?;
        let renderer = Renderer::new(render_options(&config));
        let jsx = renderer
            .render_value(&tree, self.indent_width)
            .unwrap_or_exit();

        info!(input = %self.input.display(), indent = %config.render.indent, "rendered tree");
        io::write_output(self.output.as_ref(), &jsx)
    }
}
