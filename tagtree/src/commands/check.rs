use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use serde_json::Value;
use tagtree_jsx::{Renderer, classify};

use super::{ConfigArgs, UnwrapOrExit, render_options};
use crate::io;

#[derive(Args)]
pub struct CheckCommand {
    /// JSON component tree (`-` reads standard input)
    pub input: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CheckCommand {
    /// Classify and render the tree, reporting its size. Exits with status 1
    /// when the tree does not compile.
    pub fn run(&self) -> Result<()> {
        let config = self.config.load();

        let tree: Value = io::read_json(&self.input)?;
        let node = classify(&tree, config.render.max_depth).unwrap_or_exit();
        Renderer::new(render_options(&config))
            .render(&node, 0)
            .unwrap_or_exit();

        let count = node.node_count();
        println!("✓ {} is valid\n", self.input.display());
        println!(
            "  {} node{}, depth {}",
            count,
            if count == 1 { "" } else { "s" },
            node.depth()
        );
        if node.uses_autofocus() {
            println!("  uses autofocus");
        }
        Ok(())
    }
}
