#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Tower Climb adapters.
//!
//! Adapters receive a [`Frame`] composed from the derived view and report the
//! player's intents back. How input is collected and how frames are painted is
//! left entirely to the surface implementation.

use std::fmt;

use anyhow::Result as AnyResult;
use tower_climb_core::FloorNumber;
use tower_climb_system_view::{DoorStatus, FloorStyle, FloorView, Screen, TowerView};

/// Words that end the session on either screen.
const QUIT_WORDS: [&str; 3] = ["q", "quit", "salir"];

/// Prefixes accepted before a floor number on the tower screen.
const FLOOR_PREFIXES: [&str; 2] = ["piso", "open"];

/// Action reported by a rendering surface on behalf of the player.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// The player activated the door of a floor.
    OpenFloor(FloorNumber),
    /// The player submitted an answer for the open challenge.
    SubmitAnswer(String),
    /// The player asked to leave.
    Quit,
}

/// Interprets one line of raw player input for the provided screen.
///
/// Returns `None` when the line carries no intent, such as a blank line or a
/// tower-screen entry that does not name a floor.
#[must_use]
pub fn parse_intent(screen: Screen, line: &str) -> Option<Intent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if QUIT_WORDS
        .iter()
        .any(|word| trimmed.eq_ignore_ascii_case(word))
    {
        return Some(Intent::Quit);
    }

    match screen {
        Screen::Challenge => Some(Intent::SubmitAnswer(trimmed.to_owned())),
        Screen::Tower => parse_floor(trimmed).map(Intent::OpenFloor),
    }
}

fn parse_floor(text: &str) -> Option<FloorNumber> {
    let lowered = text.to_lowercase();
    let number = FLOOR_PREFIXES
        .iter()
        .find_map(|prefix| lowered.strip_prefix(prefix))
        .unwrap_or(&lowered)
        .trim();
    number.parse::<u32>().ok().map(FloorNumber::new)
}

/// Printable frame composed from the derived view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    /// Composes the frame for the screen selected by the view.
    #[must_use]
    pub fn compose(title: &str, view: &TowerView) -> Self {
        let mut frame = Self::default();
        match (view.screen, view.active_challenge) {
            (Screen::Challenge, Some(challenge)) => {
                frame.push(format!("Piso {}", challenge.floor()));
                frame.push("Resuelve el desafío");
                frame.push(format!(
                    "¿Cuánto es {} {} {}?",
                    challenge.left(),
                    challenge.operator(),
                    challenge.right()
                ));
                match view.feedback {
                    Some(feedback) => frame.push(feedback),
                    None => frame.push("Tu respuesta ('q' para salir):"),
                }
            }
            _ => frame.compose_tower(title, view),
        }
        frame
    }

    fn compose_tower(&mut self, title: &str, view: &TowerView) {
        self.push(title);
        self.push("=".repeat(title.chars().count()));
        self.push("Ranking");
        for player in &view.ranking.players {
            self.push(format!("  {:<12} Piso {}", player.name, player.floor_reached));
        }
        self.push(format!(
            "{}: Piso {}",
            view.ranking.player_name, view.ranking.player_floor
        ));
        self.push("");

        for floor in &view.floors {
            self.push(floor_line(floor));
        }
        if view.avatar_on_ground {
            self.push("  @");
        }
        self.push("");

        if view.finished {
            self.push("Torre completada. ('q' para salir)");
        } else {
            self.push("Elige el piso de la puerta abierta ('q' para salir):");
        }
    }

    fn push<T>(&mut self, line: T)
    where
        T: Into<String>,
    {
        self.lines.push(line.into());
    }

    /// Lines of text in display order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn floor_line(floor: &FloorView) -> String {
    let door = match floor.status {
        DoorStatus::Completed => "[x]",
        DoorStatus::Current => "[ ]",
        DoorStatus::Blocked => "[#]",
    };
    let style = match floor.style {
        FloorStyle::Base => "base",
        FloorStyle::A => "a",
        FloorStyle::B => "b",
    };
    let avatar = if floor.avatar { " @" } else { "" };
    format!("  Piso {:>2} {door} ({style}){avatar}", floor.floor)
}

/// Surface capable of presenting frames and collecting player intents.
pub trait RenderingSurface {
    /// Presents the provided frame to the player.
    fn present(&mut self, frame: &Frame) -> AnyResult<()>;

    /// Waits for the next intent, interpreting input for the provided screen.
    ///
    /// Returns `Ok(None)` once the input source is exhausted.
    fn next_intent(&mut self, screen: Screen) -> AnyResult<Option<Intent>>;
}
