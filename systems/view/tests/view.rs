use tower_climb_core::{
    Command, FloorNumber, RankingPlayer, RankingProvider, StaticRanking, CORRECT_FEEDBACK,
    INCORRECT_FEEDBACK,
};
use tower_climb_system_view::{door_status, select, DoorStatus, Screen};
use tower_climb_world::{self as world, query, World};

const PLAYER: &str = "Javier";

fn floor(value: u32) -> FloorNumber {
    FloorNumber::new(value)
}

fn run(world: &mut World, command: Command) {
    let mut events = Vec::new();
    world::apply(world, command, &mut events);
}

fn submit(world: &mut World, input: &str) {
    run(
        world,
        Command::SubmitAnswer {
            input: input.to_owned(),
        },
    );
}

fn climb_correctly(world: &mut World) {
    let current = query::current_floor(world);
    let expected = query::active_challenge(world)
        .expect("climb should not be finished")
        .answer();
    run(world, Command::OpenChallenge { floor: current });
    submit(world, &expected.to_string());
    run(world, Command::CommitVerdict { floor: current });
}

#[test]
fn fresh_climb_shows_tower_with_ground_door_open() {
    let world = World::new();
    let view = select(&world, &StaticRanking::default(), PLAYER);

    assert_eq!(view.screen, Screen::Tower);
    assert!(!view.finished);
    assert!(view.avatar_on_ground);
    assert!(view.feedback.is_none());

    let floors: Vec<u32> = view.floors.iter().map(|view| view.floor.get()).collect();
    assert_eq!(floors, [5, 4, 3, 2, 1], "floors are listed from the top down");

    let ground = view.floor(floor(1)).expect("ground floor");
    assert_eq!(ground.status, DoorStatus::Current);
    assert!(ground.interactive);
    assert!(!ground.avatar, "the avatar waits on the ground instead");

    for value in 2..=5 {
        let blocked = view.floor(floor(value)).expect("floor exists");
        assert_eq!(blocked.status, DoorStatus::Blocked);
        assert!(!blocked.interactive);
    }
}

#[test]
fn open_challenge_switches_screen() {
    let mut world = World::new();
    run(&mut world, Command::OpenChallenge { floor: floor(1) });

    let view = select(&world, &StaticRanking::default(), PLAYER);

    assert_eq!(view.screen, Screen::Challenge);
    let challenge = view.active_challenge.expect("active challenge");
    assert_eq!(challenge.floor(), floor(1));
    assert_eq!(challenge.answer(), 10);
}

#[test]
fn pending_verdict_surfaces_feedback() {
    let mut world = World::new();
    run(&mut world, Command::OpenChallenge { floor: floor(1) });
    submit(&mut world, "10");

    let view = select(&world, &StaticRanking::default(), PLAYER);
    assert_eq!(view.screen, Screen::Challenge);
    assert_eq!(view.feedback, Some(CORRECT_FEEDBACK));

    run(&mut world, Command::CommitVerdict { floor: floor(1) });
    run(&mut world, Command::OpenChallenge { floor: floor(2) });
    submit(&mut world, "5");

    let view = select(&world, &StaticRanking::default(), PLAYER);
    assert_eq!(view.feedback, Some(INCORRECT_FEEDBACK));

    run(&mut world, Command::CommitVerdict { floor: floor(2) });
    let view = select(&world, &StaticRanking::default(), PLAYER);
    assert_eq!(view.screen, Screen::Tower);
    assert!(view.feedback.is_none());
}

#[test]
fn progress_moves_avatar_and_statuses() {
    let mut world = World::new();
    climb_correctly(&mut world);
    climb_correctly(&mut world);

    let view = select(&world, &StaticRanking::default(), PLAYER);

    assert!(!view.avatar_on_ground);
    assert_eq!(door_status(&world, floor(1)), DoorStatus::Completed);
    assert_eq!(door_status(&world, floor(2)), DoorStatus::Completed);
    assert_eq!(door_status(&world, floor(3)), DoorStatus::Current);
    assert_eq!(door_status(&world, floor(4)), DoorStatus::Blocked);

    let current = view.floor(floor(3)).expect("third floor");
    assert!(current.avatar);
    assert!(current.interactive);
    let avatars = view.floors.iter().filter(|floor| floor.avatar).count();
    assert_eq!(avatars, 1);
}

#[test]
fn finished_climb_renders_completed_tower_only() {
    let mut world = World::new();
    for _ in 0..5 {
        climb_correctly(&mut world);
    }

    let view = select(&world, &StaticRanking::default(), PLAYER);

    assert!(view.finished);
    assert_eq!(view.screen, Screen::Tower);
    assert!(view.active_challenge.is_none());
    assert_eq!(view.floors.len(), 5, "no view for the nonexistent sixth floor");
    assert!(view.floor(floor(6)).is_none());
    for floor_view in &view.floors {
        assert_eq!(floor_view.status, DoorStatus::Completed);
        assert!(!floor_view.interactive);
        assert!(!floor_view.avatar);
    }
    assert_eq!(view.ranking.player_floor, 5, "progress is capped at the top floor");
}

#[test]
fn ranking_panel_reads_provider_and_player_progress() {
    let mut world = World::new();
    climb_correctly(&mut world);
    let ranking = StaticRanking::new(vec![
        RankingPlayer::new("Ana", 9),
        RankingPlayer::new("Leo", 2),
    ]);

    let view = select(&world, &ranking, PLAYER);

    assert_eq!(view.ranking.players, ranking.players());
    assert_eq!(view.ranking.player_name, PLAYER);
    assert_eq!(view.ranking.player_floor, 2);
}
