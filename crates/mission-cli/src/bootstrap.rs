use anyhow::Context;
use mission_config::MissionConfig;

use crate::cli::GlobalFlags;

/// Load `.env` and the layered config, resolving files against the root.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<MissionConfig> {
    let root = flags.root_dir()?;

    let env_path = root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    } else {
        dotenvy::dotenv().ok();
    }

    if let Some(path) = &flags.config {
        if !path.exists() {
            anyhow::bail!("config file '{}' does not exist", path.display());
        }
    }

    tracing::debug!(root = %root.display(), config = ?flags.config, "loading configuration");
    MissionConfig::load_in(&root, flags.config.as_deref())
        .context("failed to load configuration")
}
