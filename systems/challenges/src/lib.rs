#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic generator for the arithmetic challenge guarding each floor.
//!
//! Floors alternate between an addition and a subtraction. Operands grow with
//! the floor number so that higher floors ask for larger results, and the
//! answer is computed once when the challenge is built.

use tower_climb_core::{FloorChallenge, FloorNumber, Operator};

const ADDITION_LEFT_BASE: i64 = 4;
const ADDITION_RIGHT_OFFSET: i64 = 3;
const SUBTRACTION_LEFT_BASE: i64 = 10;
const SUBTRACTION_RIGHT_OFFSET: i64 = 1;

/// Builds the ordered challenge list for a tower with `total_floors` floors.
///
/// A tower without floors yields an empty list.
#[must_use]
pub fn generate(total_floors: u32) -> Vec<FloorChallenge> {
    (1..=total_floors)
        .filter_map(|floor| challenge_for(FloorNumber::new(floor)))
        .collect()
}

/// Builds the challenge guarding a single floor.
///
/// Returns `None` for floor zero, which does not exist.
#[must_use]
pub fn challenge_for(floor: FloorNumber) -> Option<FloorChallenge> {
    if floor.get() == 0 {
        return None;
    }

    let index = i64::from(floor.get());
    let challenge = if floor.get() % 2 == 1 {
        FloorChallenge::new(
            floor,
            ADDITION_LEFT_BASE + 2 * index,
            Operator::Add,
            index + ADDITION_RIGHT_OFFSET,
        )
    } else {
        FloorChallenge::new(
            floor,
            SUBTRACTION_LEFT_BASE + 2 * index,
            Operator::Subtract,
            index + SUBTRACTION_RIGHT_OFFSET,
        )
    };

    Some(challenge)
}
