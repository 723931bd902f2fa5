//! Session controller that owns the world and drives systems in FIFO order.

use std::{collections::VecDeque, time::Duration};

use log::debug;
use tower_climb_core::{Command, Event, RankingProvider};
use tower_climb_rendering::Intent;
use tower_climb_system_pacing::Pacing;
use tower_climb_system_view::{self as view, TowerView};
use tower_climb_world::{self as world, query, World};

use crate::config::GameConfig;

/// Outcome of handing an intent to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Keep reading intents.
    Continue,
    /// The player asked to leave.
    Quit,
}

/// Owns the authoritative world together with the systems reacting to it.
pub(crate) struct Session {
    world: World,
    pacing: Pacing,
    ranking: Box<dyn RankingProvider>,
    player_name: String,
}

impl Session {
    /// Starts a fresh climb using the resolved configuration.
    pub(crate) fn new(config: GameConfig) -> Self {
        Self {
            world: World::with_floors(config.total_floors),
            pacing: Pacing::new(config.pacing),
            ranking: Box::new(config.ranking),
            player_name: config.player_name,
        }
    }

    /// Applies a command and every command the systems emit in response.
    pub(crate) fn dispatch(&mut self, command: Command) -> Vec<Event> {
        let mut queue = VecDeque::from([command]);
        let mut emitted = Vec::new();

        while let Some(command) = queue.pop_front() {
            let mut events = Vec::new();
            world::apply(&mut self.world, command, &mut events);

            let mut follow_up = Vec::new();
            self.pacing.handle(&events, &mut follow_up);
            queue.extend(follow_up);
            emitted.extend(events);
        }

        emitted
    }

    /// Translates a player intent into world commands.
    pub(crate) fn handle_intent(&mut self, intent: Intent) -> Flow {
        let command = match intent {
            Intent::Quit => return Flow::Quit,
            Intent::OpenFloor(floor) => Command::OpenChallenge { floor },
            Intent::SubmitAnswer(input) => Command::SubmitAnswer { input },
        };
        let events = self.dispatch(command);
        debug!("intent produced {events:?}");
        Flow::Continue
    }

    /// Advances simulated time by `dt`.
    pub(crate) fn advance(&mut self, dt: Duration) -> Vec<Event> {
        self.dispatch(Command::Tick { dt })
    }

    /// Time left before the pending verdict commits, if one is waiting.
    pub(crate) fn remaining(&self) -> Option<Duration> {
        self.pacing.remaining()
    }

    /// Banner shown at the top of the tower screen.
    pub(crate) fn banner(&self) -> &'static str {
        query::welcome_banner(&self.world)
    }

    /// Derives the current view of the climb.
    pub(crate) fn view(&self) -> TowerView {
        view::select(&self.world, self.ranking.as_ref(), &self.player_name)
    }
}
