#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Tower Climb session in the terminal.

mod config;
mod session;
mod terminal;

use std::{io, path::PathBuf, thread, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tower_climb_rendering::{Frame, RenderingSurface};

use crate::{
    config::GameConfig,
    session::{Flow, Session},
    terminal::TerminalSurface,
};

/// Climb the tower by solving one arithmetic challenge per floor.
#[derive(Debug, Parser)]
#[command(name = "tower-climb", version)]
struct Args {
    /// Number of floors in the tower.
    #[arg(long)]
    floors: Option<u32>,
    /// TOML file with game settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Name shown next to your progress in the ranking.
    #[arg(long)]
    player: Option<String>,
    /// Commit verdicts without waiting for the pacing delay.
    #[arg(long)]
    instant: bool,
}

/// How simulated time follows the wall clock while a verdict is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Clock {
    /// Sleep for the delay before advancing simulated time.
    RealTime,
    /// Advance simulated time immediately.
    Instant,
}

impl Clock {
    fn wait(self, duration: Duration) -> Duration {
        if self == Self::RealTime {
            thread::sleep(duration);
        }
        duration
    }
}

/// Entry point for the Tower Climb command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = GameConfig::load(args.config.as_deref())
        .and_then(|config| config.with_overrides(args.floors, args.player))
        .context("invalid game configuration")?;
    let clock = if args.instant {
        Clock::Instant
    } else {
        Clock::RealTime
    };

    info!(
        "starting climb of {} floors for {}",
        config.total_floors, config.player_name
    );
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut surface = TerminalSurface::new(stdin.lock(), io::stdout());
    run(&mut session, &mut surface, clock)
}

fn run<S>(session: &mut Session, surface: &mut S, clock: Clock) -> Result<()>
where
    S: RenderingSurface,
{
    loop {
        let view = session.view();
        surface.present(&Frame::compose(session.banner(), &view))?;

        if let Some(remaining) = session.remaining() {
            let _ = session.advance(clock.wait(remaining));
            continue;
        }

        let Some(intent) = surface.next_intent(view.screen)? else {
            info!("input closed");
            return Ok(());
        };
        if session.handle_intent(intent) == Flow::Quit {
            info!("player left on floor {}", view.ranking.player_floor);
            return Ok(());
        }
    }
}
