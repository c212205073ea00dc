use clap::Args;
use eyre::Result;
use tagtree_ir::ModuleSpec;
use tagtree_jsx::format_import;

#[derive(Args)]
pub struct ImportCommand {
    /// Module to import from
    pub lib: String,

    /// Default binding
    #[arg(long)]
    pub default: Option<String>,

    /// Named binding (repeatable)
    #[arg(long = "named", value_name = "NAME")]
    pub named: Vec<String>,
}

impl ImportCommand {
    pub fn run(&self) -> Result<()> {
        println!("{}", format_import(&self.spec()));
        Ok(())
    }

    fn spec(&self) -> ModuleSpec {
        let spec = self
            .named
            .iter()
            .fold(ModuleSpec::new(self.lib.as_str()), |spec, name| {
                spec.named(name.as_str())
            });
        match &self.default {
            Some(default) => spec.default_binding(default.as_str()),
            None => spec,
        }
    }
}
