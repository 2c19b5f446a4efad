use std::path::PathBuf;

use clap::ValueEnum;

/// When to emit ANSI colors on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
    pub color: ColorMode,
}

impl GlobalFlags {
    /// Repository root: `--root` if given, else the current directory.
    pub fn root_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.root {
            Some(root) if root.is_dir() => Ok(root.clone()),
            Some(root) => anyhow::bail!("invalid --root '{}': directory does not exist", root.display()),
            None => std::env::current_dir()
                .map_err(|error| anyhow::anyhow!("failed to read current directory: {error}")),
        }
    }
}
