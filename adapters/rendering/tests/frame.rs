use tower_climb_core::{Command, FloorNumber, StaticRanking, INCORRECT_FEEDBACK};
use tower_climb_rendering::Frame;
use tower_climb_system_view::select;
use tower_climb_world::{self as world, World};

const TITLE: &str = "La Torre";

fn run(world: &mut World, command: Command) {
    let mut events = Vec::new();
    world::apply(world, command, &mut events);
}

fn compose(world: &World) -> Frame {
    Frame::compose(TITLE, &select(world, &StaticRanking::default(), "Javier"))
}

#[test]
fn tower_frame_lists_ranking_and_floors_top_down() {
    let world = World::new();
    let frame = compose(&world);
    let lines = frame.lines();

    assert_eq!(lines[0], TITLE);
    assert!(lines.iter().any(|line| line.contains("Luna") && line.ends_with("Piso 5")));
    assert!(lines.iter().any(|line| line == "Javier: Piso 1"));

    let top = lines
        .iter()
        .position(|line| line.contains("Piso  5 [#]"))
        .expect("top floor line");
    let ground = lines
        .iter()
        .position(|line| line.contains("Piso  1 [ ] (base)"))
        .expect("ground floor line");
    assert!(top < ground, "top floor must be drawn first");
    assert_eq!(lines[ground + 1], "  @", "avatar waits below the ground door");
}

#[test]
fn challenge_frame_asks_the_question() {
    let mut world = World::new();
    run(
        &mut world,
        Command::OpenChallenge {
            floor: FloorNumber::GROUND,
        },
    );

    let text = compose(&world).to_string();

    assert!(text.starts_with("Piso 1\n"));
    assert!(text.contains("¿Cuánto es 6 + 4?"));
}

#[test]
fn challenge_frame_shows_pending_feedback() {
    let mut world = World::new();
    run(
        &mut world,
        Command::OpenChallenge {
            floor: FloorNumber::GROUND,
        },
    );
    run(
        &mut world,
        Command::SubmitAnswer {
            input: "4".to_owned(),
        },
    );

    let frame = compose(&world);

    assert_eq!(frame.lines().last().map(String::as_str), Some(INCORRECT_FEEDBACK));
}
