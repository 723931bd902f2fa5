#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure view selection for Tower Climb.
//!
//! Derives, from an immutable world snapshot, which screen adapters should
//! present, the status of every floor's door and the supporting panels. The
//! derivation never mutates the world and is recomputed after every batch of
//! commands.

use tower_climb_core::{FloorChallenge, FloorNumber, RankingPlayer, RankingProvider};
use tower_climb_world::{query, World};

/// Screen adapters should present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The tower with every floor's door.
    Tower,
    /// The arithmetic challenge of the current floor.
    Challenge,
}

/// Status of a floor's door.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoorStatus {
    /// The floor's challenge was answered correctly.
    Completed,
    /// The floor the player may challenge now.
    Current,
    /// A floor that is not reachable yet.
    Blocked,
}

/// Cosmetic variant used to draw a floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloorStyle {
    /// The ground floor, drawn as the tower base.
    Base,
    /// Even floors.
    A,
    /// Odd floors above the ground.
    B,
}

impl FloorStyle {
    /// Picks the variant for the provided floor.
    #[must_use]
    pub const fn for_floor(floor: FloorNumber) -> Self {
        if floor.get() <= 1 {
            Self::Base
        } else if floor.get() % 2 == 0 {
            Self::A
        } else {
            Self::B
        }
    }
}

/// Derived presentation of a single floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FloorView {
    /// Floor described by the view.
    pub floor: FloorNumber,
    /// Status of the floor's door.
    pub status: DoorStatus,
    /// Whether activating the door has an effect.
    pub interactive: bool,
    /// Cosmetic variant of the floor.
    pub style: FloorStyle,
    /// Whether the player's avatar stands in front of this floor's door.
    pub avatar: bool,
}

/// Ranking panel shown next to the tower.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingView {
    /// Entries supplied by the ranking provider.
    pub players: Vec<RankingPlayer>,
    /// Name shown next to the player's own progress.
    pub player_name: String,
    /// Floor shown as the player's progress, capped at the top floor.
    pub player_floor: u32,
}

/// Complete derived view of the climb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TowerView {
    /// Screen adapters should present.
    pub screen: Screen,
    /// Challenge of the current floor, absent once the climb is finished.
    pub active_challenge: Option<FloorChallenge>,
    /// Floors ordered from the top of the tower down to the ground.
    pub floors: Vec<FloorView>,
    /// Whether the avatar still waits on the ground before the first door.
    pub avatar_on_ground: bool,
    /// Message describing a verdict waiting to be committed.
    pub feedback: Option<&'static str>,
    /// Ranking panel contents.
    pub ranking: RankingView,
    /// Whether the player climbed past the top floor.
    pub finished: bool,
}

impl TowerView {
    /// View of a single floor, if it exists.
    #[must_use]
    pub fn floor(&self, floor: FloorNumber) -> Option<&FloorView> {
        self.floors.iter().find(|view| view.floor == floor)
    }
}

/// Derives the door status of a floor.
#[must_use]
pub fn door_status(world: &World, floor: FloorNumber) -> DoorStatus {
    if query::completed_floors(world).contains(&floor) {
        DoorStatus::Completed
    } else if floor == query::current_floor(world) {
        DoorStatus::Current
    } else {
        DoorStatus::Blocked
    }
}

/// Derives the complete view of the climb.
#[must_use]
pub fn select<R>(world: &World, ranking: &R, player_name: &str) -> TowerView
where
    R: RankingProvider + ?Sized,
{
    let total_floors = query::total_floors(world);
    let current_floor = query::current_floor(world);
    let finished = query::is_finished(world);
    let active_challenge = query::active_challenge(world).copied();

    let screen = if query::is_in_challenge(world) && active_challenge.is_some() {
        Screen::Challenge
    } else {
        Screen::Tower
    };

    let floors = (1..=total_floors)
        .rev()
        .map(FloorNumber::new)
        .map(|floor| {
            let status = door_status(world, floor);
            FloorView {
                floor,
                status,
                interactive: status == DoorStatus::Current && !finished,
                style: FloorStyle::for_floor(floor),
                avatar: floor == current_floor && floor != FloorNumber::GROUND,
            }
        })
        .collect();

    let feedback = query::pending_verdict(world).map(|pending| pending.verdict.feedback());

    TowerView {
        screen,
        active_challenge,
        floors,
        avatar_on_ground: !query::completed_floors(world).contains(&FloorNumber::GROUND),
        feedback,
        ranking: RankingView {
            players: ranking.players(),
            player_name: player_name.to_owned(),
            player_floor: current_floor.get().min(total_floors),
        },
        finished,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_styles_follow_parity() {
        assert_eq!(FloorStyle::for_floor(FloorNumber::new(1)), FloorStyle::Base);
        assert_eq!(FloorStyle::for_floor(FloorNumber::new(2)), FloorStyle::A);
        assert_eq!(FloorStyle::for_floor(FloorNumber::new(3)), FloorStyle::B);
        assert_eq!(FloorStyle::for_floor(FloorNumber::new(8)), FloorStyle::A);
    }
}
