use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chakana_engine::GameConfig;

use crate::{pattern::PatternSource, ui::App};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Pattern image to deal at start (defaults to the built-in chakana)
    #[clap(long)]
    pattern: Option<PathBuf>,
    /// Deal random patterns instead of the built-in one
    #[clap(long, default_value_t = false)]
    random: bool,
    /// Game configuration file (JSON: grid, players, palette)
    #[clap(long)]
    config: Option<PathBuf>,
    /// Mouse pick tolerance, in terminal columns
    #[clap(long, default_value_t = 2.0)]
    tolerance: f64,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let config = match &arg.config {
        Some(path) => read_config_file(path)?,
        None => GameConfig::default(),
    };
    anyhow::ensure!(config.grid > 0, "grid must be at least 1");
    anyhow::ensure!(!config.players.is_empty(), "config needs at least one player");
    let source = if let Some(path) = &arg.pattern {
        PatternSource::Image(path.clone())
    } else if arg.random {
        PatternSource::Random
    } else {
        PatternSource::Builtin
    };

    let mut app = App::new(config, source, arg.tolerance)?;
    ratatui::run(|terminal| app.run(terminal))
}

fn read_config_file(path: &Path) -> anyhow::Result<GameConfig> {
    let file =
        File::open(path).with_context(|| format!("failed to open config {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("failed to parse config {}", path.display()))
}
