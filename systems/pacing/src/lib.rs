#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pacing system that delays the commit of judged answers.
//!
//! Every judged answer schedules a beat whose length depends on the verdict.
//! Simulated time reported through [`Event::TimeAdvanced`] drains the beat,
//! and once it has fully elapsed the system emits [`Command::CommitVerdict`]
//! for the floor that was judged. Beats are never cancelled: a scheduled beat
//! always fires once enough time has passed.

use std::{collections::VecDeque, time::Duration};

use tower_climb_core::{Command, Event, FloorNumber, Verdict};

/// Delay before committing a correct verdict when no configuration overrides it.
pub const DEFAULT_CORRECT_DELAY: Duration = Duration::from_millis(700);

/// Delay before committing an incorrect verdict when no configuration overrides it.
pub const DEFAULT_INCORRECT_DELAY: Duration = Duration::from_millis(900);

/// Configuration parameters required to construct the pacing system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    correct_delay: Duration,
    incorrect_delay: Duration,
}

impl Config {
    /// Creates a new configuration using the provided delays.
    #[must_use]
    pub const fn new(correct_delay: Duration, incorrect_delay: Duration) -> Self {
        Self {
            correct_delay,
            incorrect_delay,
        }
    }

    /// Delay applied to the provided verdict.
    #[must_use]
    pub const fn delay_for(&self, verdict: Verdict) -> Duration {
        match verdict {
            Verdict::Correct => self.correct_delay,
            Verdict::Incorrect => self.incorrect_delay,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CORRECT_DELAY, DEFAULT_INCORRECT_DELAY)
    }
}

/// Pure system that turns judged answers into delayed commit commands.
#[derive(Debug)]
pub struct Pacing {
    config: Config,
    beats: VecDeque<Beat>,
}

/// Delay still owed to the verdict judged on a floor.
#[derive(Clone, Copy, Debug)]
struct Beat {
    floor: FloorNumber,
    remaining: Duration,
}

impl Pacing {
    /// Creates a new pacing system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            beats: VecDeque::new(),
        }
    }

    /// Consumes world events and emits commit commands for elapsed beats.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::AnswerJudged { floor, verdict } => {
                    self.beats.push_back(Beat {
                        floor: *floor,
                        remaining: self.config.delay_for(*verdict),
                    });
                }
                Event::TimeAdvanced { dt } => {
                    for beat in self.beats.iter_mut() {
                        beat.remaining = beat.remaining.saturating_sub(*dt);
                    }
                }
                _ => {}
            }
        }

        while let Some(beat) = self.beats.front().copied() {
            if !beat.remaining.is_zero() {
                break;
            }
            let _ = self.beats.pop_front();
            out.push(Command::CommitVerdict { floor: beat.floor });
        }
    }

    /// Reports whether a beat is still waiting for time to pass.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        !self.beats.is_empty()
    }

    /// Time left before the next beat fires, if one is scheduled.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.beats.front().map(|beat| beat.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_depend_on_verdict() {
        let config = Config::default();
        assert_eq!(config.delay_for(Verdict::Correct), DEFAULT_CORRECT_DELAY);
        assert_eq!(config.delay_for(Verdict::Incorrect), DEFAULT_INCORRECT_DELAY);
    }

    #[test]
    fn idle_system_reports_nothing_remaining() {
        let pacing = Pacing::new(Config::default());
        assert!(!pacing.is_waiting());
        assert_eq!(pacing.remaining(), None);
    }
}
