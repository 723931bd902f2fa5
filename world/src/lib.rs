#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative climb state management for Tower Climb.
//!
//! The world owns the challenge list, the floor the player may challenge, the
//! set of completed floors and the open challenge flag. It mutates only
//! through [`apply`], and every observable change is reported as an [`Event`].
//! Answers are judged as soon as they arrive, but the resulting transition is
//! held back until a [`Command::CommitVerdict`] releases it, which lets the
//! pacing system insert a short beat between the two.

use std::collections::BTreeSet;

use log::{debug, info};
use tower_climb_core::{
    parse_answer, Command, Event, FloorChallenge, FloorNumber, Verdict, DEFAULT_TOTAL_FLOORS,
    WELCOME_BANNER,
};
use tower_climb_system_challenges::generate;

/// Represents the authoritative Tower Climb world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    total_floors: u32,
    challenges: Vec<FloorChallenge>,
    current_floor: FloorNumber,
    completed_floors: BTreeSet<FloorNumber>,
    in_challenge: bool,
    pending: Option<PendingVerdict>,
}

impl World {
    /// Creates a new world holding a fresh climb on the default tower.
    #[must_use]
    pub fn new() -> Self {
        Self::with_floors(DEFAULT_TOTAL_FLOORS)
    }

    /// Creates a new world holding a fresh climb on a tower of `total_floors`.
    ///
    /// The floor count is fixed for the lifetime of the world.
    #[must_use]
    pub fn with_floors(total_floors: u32) -> Self {
        Self {
            banner: WELCOME_BANNER,
            total_floors,
            challenges: generate(total_floors),
            current_floor: FloorNumber::GROUND,
            completed_floors: BTreeSet::new(),
            in_challenge: false,
            pending: None,
        }
    }

    fn is_finished(&self) -> bool {
        self.current_floor.get() > self.total_floors
    }

    fn active_challenge(&self) -> Option<&FloorChallenge> {
        self.challenges
            .iter()
            .find(|challenge| challenge.floor() == self.current_floor)
    }

    fn open_challenge(&mut self, floor: FloorNumber, out_events: &mut Vec<Event>) {
        if floor != self.current_floor || self.is_finished() {
            debug!(
                "ignoring door of floor {floor}; current floor is {}",
                self.current_floor
            );
            return;
        }

        if !self.in_challenge {
            self.in_challenge = true;
            out_events.push(Event::ChallengeOpened { floor });
        }
    }

    fn submit_answer(&mut self, input: &str, out_events: &mut Vec<Event>) {
        if !self.in_challenge || self.pending.is_some() {
            return;
        }

        let Some(challenge) = self.active_challenge().copied() else {
            return;
        };

        let verdict = match parse_answer(input) {
            Ok(value) => challenge.check(value),
            Err(error) => {
                debug!("treating unreadable answer as incorrect: {error}");
                Verdict::Incorrect
            }
        };

        let floor = challenge.floor();
        self.pending = Some(PendingVerdict { floor, verdict });
        out_events.push(Event::AnswerJudged { floor, verdict });
    }

    fn commit_verdict(&mut self, beat_floor: FloorNumber, out_events: &mut Vec<Event>) {
        let Some(PendingVerdict { floor, verdict }) = self.pending else {
            return;
        };
        if floor != beat_floor {
            debug!("ignoring beat for floor {beat_floor}; pending verdict is for floor {floor}");
            return;
        }
        self.pending = None;

        match verdict {
            Verdict::Correct => {
                if self.completed_floors.insert(floor) {
                    out_events.push(Event::FloorCompleted { floor });
                }
                self.current_floor = self.current_floor.next();
            }
            Verdict::Incorrect => {}
        }

        self.in_challenge = false;
        out_events.push(Event::ChallengeClosed { floor, verdict });
        debug!(
            "committed {verdict:?} for floor {floor}; current floor is {}",
            self.current_floor
        );

        if verdict == Verdict::Correct && self.is_finished() {
            info!("tower of {} floors climbed", self.total_floors);
            out_events.push(Event::TowerFinished {
                total_floors: self.total_floors,
            });
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Verdict judged for an open challenge and not yet committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingVerdict {
    /// Floor whose challenge was answered.
    pub floor: FloorNumber,
    /// Outcome waiting to be committed.
    pub verdict: Verdict,
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => {
            out_events.push(Event::TimeAdvanced { dt });
        }
        Command::OpenChallenge { floor } => world.open_challenge(floor, out_events),
        Command::SubmitAnswer { input } => world.submit_answer(&input, out_events),
        Command::CommitVerdict { floor } => world.commit_verdict(floor, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::collections::BTreeSet;

    use super::{PendingVerdict, World};
    use tower_climb_core::{FloorChallenge, FloorNumber};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Number of floors stacked in the tower.
    #[must_use]
    pub fn total_floors(world: &World) -> u32 {
        world.total_floors
    }

    /// Every challenge of the tower, ordered from the ground floor upwards.
    #[must_use]
    pub fn challenges(world: &World) -> &[FloorChallenge] {
        &world.challenges
    }

    /// Floor the player may currently challenge. One past the top floor once
    /// the climb is finished.
    #[must_use]
    pub fn current_floor(world: &World) -> FloorNumber {
        world.current_floor
    }

    /// Floors whose challenge was answered correctly.
    #[must_use]
    pub fn completed_floors(world: &World) -> &BTreeSet<FloorNumber> {
        &world.completed_floors
    }

    /// Reports whether the challenge overlay is open.
    #[must_use]
    pub fn is_in_challenge(world: &World) -> bool {
        world.in_challenge
    }

    /// Reports whether the player climbed past the top floor.
    #[must_use]
    pub fn is_finished(world: &World) -> bool {
        world.is_finished()
    }

    /// Challenge of the current floor, absent once the climb is finished.
    #[must_use]
    pub fn active_challenge(world: &World) -> Option<&FloorChallenge> {
        world.active_challenge()
    }

    /// Verdict waiting for its pacing beat, if any.
    #[must_use]
    pub fn pending_verdict(world: &World) -> Option<PendingVerdict> {
        world.pending
    }
}
