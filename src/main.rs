mod actor;
mod audio;
mod combat;
mod config;
mod data;
mod intro;
mod maze;
mod render;
mod rng;
mod scene;
mod scripted_input;
mod session;
mod shop;

use std::io;

use config::{ConfigError, GameConfig};
use render::{Frontend, TerminalFrontend, Tone};
use scene::{ContentError, SceneGraph};
use scripted_input::ScriptedInput;
use session::{PlayContext, Session, SessionEnd};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not read input script: {0}")]
    Script(#[from] io::Error),
}

fn main() -> Result<(), AppError> {
    init_tracing();
    let config = GameConfig::from_env()?;
    let graph = SceneGraph::builtin()?;
    info!(scenes = graph.len(), seed = ?config.seed, "forest loaded");

    let mut dice = rng::seeded_dice(config.seed);
    match &config.script {
        Some(path) => {
            let mut script = ScriptedInput::from_file(path)?;
            play(&graph, &mut script, &mut dice);
            info!(unused_answers = script.remaining(), "script finished");
        }
        None => {
            let mut terminal = TerminalFrontend::stdio();
            play(&graph, &mut terminal, &mut dice);
        }
    }
    Ok(())
}

fn play(graph: &SceneGraph, frontend: &mut dyn Frontend, dice: &mut dyn rng::Dice) {
    let mut ctx = PlayContext::new(frontend, dice);
    let Some(hero) = intro::create_character(&mut ctx) else {
        return;
    };
    let mut session = Session::new(hero, graph);
    match session.run(&mut ctx) {
        SessionEnd::Ending(ending) => {
            info!(%ending, "story complete");
            ctx.frontend.narrate(Tone::Title, "\nThank you for playing!");
        }
        SessionEnd::Abandoned => {
            ctx.frontend.narrate(Tone::Dim, "\nThe forest fades away. Farewell.");
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
