#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Floor, challenge and ranking contracts for Tower Climb.
//!
//! Floors are one-based [`FloorNumber`]s counted from the ground. Each floor
//! is guarded by a [`FloorChallenge`] whose answer is fixed when it is built,
//! and raw player input is read with [`parse_answer`] before being judged into
//! a [`Verdict`]. A climb only moves forward: opening a door, submitting an
//! answer and committing the resulting verdict are the [`Command`]s that drive
//! it, and the [`Event`]s report what changed. Rankings come from a
//! [`RankingProvider`] and are never written back.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "La Torre";

/// Number of floors in the tower when no configuration overrides it.
pub const DEFAULT_TOTAL_FLOORS: u32 = 5;

/// Tallest tower a climb may be configured with.
pub const MAX_TOTAL_FLOORS: u32 = 100;

/// Name shown next to the player's own progress when none is configured.
pub const DEFAULT_PLAYER_NAME: &str = "Tú";

/// Feedback shown while a correct verdict waits to be committed.
pub const CORRECT_FEEDBACK: &str = "Correcto. Subiendo al siguiente piso...";

/// Feedback shown while an incorrect verdict waits to be committed.
pub const INCORRECT_FEEDBACK: &str = "Incorrecto, intenta más tarde";

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests that the challenge behind a floor's door be opened.
    OpenChallenge {
        /// Floor whose door the player activated.
        floor: FloorNumber,
    },
    /// Submits the player's raw answer for the open challenge.
    SubmitAnswer {
        /// Text exactly as entered by the player.
        input: String,
    },
    /// Commits the verdict that is waiting on its pacing beat.
    CommitVerdict {
        /// Floor whose pending verdict the beat belongs to.
        floor: FloorNumber,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that the challenge for a floor is now open.
    ChallengeOpened {
        /// Floor whose challenge was opened.
        floor: FloorNumber,
    },
    /// Reports the verdict for a submitted answer. The transition it implies
    /// is applied once a [`Command::CommitVerdict`] arrives.
    AnswerJudged {
        /// Floor whose challenge was answered.
        floor: FloorNumber,
        /// Outcome of comparing the answer with the stored result.
        verdict: Verdict,
    },
    /// Confirms that a floor joined the completed set.
    FloorCompleted {
        /// Floor that was completed.
        floor: FloorNumber,
    },
    /// Confirms that the challenge overlay closed after a committed verdict.
    ChallengeClosed {
        /// Floor whose challenge was closed.
        floor: FloorNumber,
        /// Verdict that closed the challenge.
        verdict: Verdict,
    },
    /// Announces that the player climbed past the top floor.
    TowerFinished {
        /// Number of floors the player climbed.
        total_floors: u32,
    },
}

/// One-based index of a floor, counted from the ground upwards.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FloorNumber(u32);

impl FloorNumber {
    /// The ground floor, where every climb starts.
    pub const GROUND: Self = Self(1);

    /// Creates a new floor number with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the floor.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Floor directly above this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for FloorNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Arithmetic operator used by a floor challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition of both operands.
    Add,
    /// Subtraction of the right operand from the left one.
    Subtract,
}

impl Operator {
    /// Evaluates the operator for the provided operands.
    #[must_use]
    pub const fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Self::Add => left.saturating_add(right),
            Self::Subtract => left.saturating_sub(right),
        }
    }

    /// Symbol printed between both operands.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Arithmetic question bound to a floor, with its precomputed answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloorChallenge {
    floor: FloorNumber,
    left: i64,
    operator: Operator,
    right: i64,
    answer: i64,
}

impl FloorChallenge {
    /// Creates a challenge and computes its answer once.
    #[must_use]
    pub const fn new(floor: FloorNumber, left: i64, operator: Operator, right: i64) -> Self {
        Self {
            floor,
            left,
            operator,
            right,
            answer: operator.apply(left, right),
        }
    }

    /// Floor the challenge guards.
    #[must_use]
    pub const fn floor(&self) -> FloorNumber {
        self.floor
    }

    /// Left operand.
    #[must_use]
    pub const fn left(&self) -> i64 {
        self.left
    }

    /// Operator applied to both operands.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// Right operand.
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.right
    }

    /// Answer stored when the challenge was generated.
    #[must_use]
    pub const fn answer(&self) -> i64 {
        self.answer
    }

    /// Compares a candidate value with the stored answer.
    #[must_use]
    pub const fn check(&self, value: i64) -> Verdict {
        if value == self.answer {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

/// Outcome of judging a submitted answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The answer matched the stored result.
    Correct,
    /// The answer did not match or could not be read as a number.
    Incorrect,
}

impl Verdict {
    /// Message the player reads while the verdict waits to be committed.
    #[must_use]
    pub const fn feedback(self) -> &'static str {
        match self {
            Self::Correct => CORRECT_FEEDBACK,
            Self::Incorrect => INCORRECT_FEEDBACK,
        }
    }
}

/// Reasons raw player input could not be read as an answer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnswerParseError {
    /// The input was empty or contained only whitespace.
    #[error("answer is empty")]
    Empty,
    /// The input is not a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// The input is a number without an exact integer value.
    #[error("'{0}' is not a whole number")]
    NotAWholeNumber(String),
}

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_DECIMAL: f64 = 9_007_199_254_740_992.0;

/// Reads raw player input as an integer answer.
///
/// Surrounding whitespace is ignored. Decimal notation is accepted when it
/// denotes a whole number, so `"10.0"` and `"1e1"` both read as `10`.
pub fn parse_answer(input: &str) -> Result<i64, AnswerParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnswerParseError::Empty);
    }

    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    let decimal: f64 = trimmed
        .parse()
        .map_err(|_| AnswerParseError::NotANumber(trimmed.to_owned()))?;
    if !decimal.is_finite() {
        return Err(AnswerParseError::NotANumber(trimmed.to_owned()));
    }
    if decimal.fract() != 0.0 || decimal.abs() > MAX_EXACT_DECIMAL {
        return Err(AnswerParseError::NotAWholeNumber(trimmed.to_owned()));
    }

    Ok(decimal as i64)
}

/// Entry of the ranking shown next to the tower.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankingPlayer {
    /// Display name of the player.
    pub name: String,
    /// Highest floor the player reached.
    pub floor_reached: u32,
}

impl RankingPlayer {
    /// Creates a new ranking entry.
    #[must_use]
    pub fn new<T>(name: T, floor_reached: u32) -> Self
    where
        T: Into<String>,
    {
        Self {
            name: name.into(),
            floor_reached,
        }
    }
}

/// External source of ranking entries. The engine only reads from it.
pub trait RankingProvider {
    /// Ordered ranking entries to display.
    fn players(&self) -> Vec<RankingPlayer>;
}

/// Ranking provider backed by a fixed list of players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticRanking {
    players: Vec<RankingPlayer>,
}

impl StaticRanking {
    /// Creates a provider that always yields the provided players.
    #[must_use]
    pub fn new(players: Vec<RankingPlayer>) -> Self {
        Self { players }
    }
}

impl Default for StaticRanking {
    fn default() -> Self {
        Self::new(vec![
            RankingPlayer::new("Luna", 5),
            RankingPlayer::new("Rafa", 4),
            RankingPlayer::new("Mia", 3),
        ])
    }
}

impl RankingProvider for StaticRanking {
    fn players(&self) -> Vec<RankingPlayer> {
        self.players.clone()
    }
}
