use std::path::PathBuf;

use pitris_engine::ShapeSeed;

use crate::{command::play::app::PlayApp, score_file, tui::Tui};

mod app;
mod screen;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// File the best score is read from and written to
    #[clap(long, default_value = "highscore.dat")]
    score_file: PathBuf,
    /// Fixed seed for the shape sequence (32 hex digits)
    #[clap(long)]
    seed: Option<ShapeSeed>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            score_file: PathBuf::from("highscore.dat"),
            seed: None,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { score_file, seed } = arg;

    let best_score = score_file::load(score_file);
    let mut app = PlayApp::new(*seed, best_score);

    Tui::new().run(&mut app)?;

    score_file::store(score_file, app.best_score());
    Ok(())
}
