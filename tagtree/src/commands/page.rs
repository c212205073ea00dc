use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tagtree_codegen::naming::to_pascal_case;
use tagtree_jsx::{PageSpec, Renderer};
use tracing::info;

use super::{ConfigArgs, UnwrapOrExit, render_options};
use crate::io;

#[derive(Args)]
pub struct PageCommand {
    /// JSON page document `{name?, imports?, hooks?, root}` (`-` reads
    /// standard input)
    pub input: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Component name, converted to PascalCase (overrides the document and
    /// tagtree.toml)
    #[arg(long)]
    pub name: Option<String>,

    /// Output file (defaults to standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl PageCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load();

        let mut spec: PageSpec = io::read_json(&self.input)?;
        if let Some(name) = &self.name {
            spec.name = Some(to_pascal_case(name));
        }

        let renderer = Renderer::new(render_options(&config));
        let page = spec
            .into_page(&config.page.name, config.render.max_depth)
            .unwrap_or_exit();
        let source = page.render(&renderer).unwrap_or_exit();

        info!(name = page.name(), "composed page");
        io::write_output(self.output.as_ref(), &source)
    }
}
