use serde::{Deserialize, Serialize};

/// One of the two players. Player A always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Wire code used in the board array: 1 = A, 2 = B.
    pub fn code(self) -> u8 {
        match self {
            Self::A => 1,
            Self::B => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::A => "Player A",
            Self::B => "Player B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Start,
    About,
    Instructions,
    Placement,
    Movement,
    Win,
}

impl Phase {
    /// Menu screens: no board is shown and no game intents apply.
    pub fn is_menu(self) -> bool {
        matches!(self, Self::Start | Self::About | Self::Instructions)
    }
}

/// A point in board pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle. Containment is half-open on the right and bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn square(top_left: Point, side: f32) -> Self {
        Self {
            left: top_left.x,
            top: top_left.y,
            width: side,
            height: side,
        }
    }

    pub fn centered(center: Point, side: f32) -> Self {
        let half = side / 2.0;
        Self::square(Point::new(center.x - half, center.y - half), side)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left
            && p.x < self.left + self.width
            && p.y >= self.top
            && p.y < self.top + self.height
    }
}

/// Which phase the turn indicator describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndicatorPhase {
    Placement,
    Movement,
}

/// "Who moves next" indicator drawn under the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnIndicator {
    pub player: Player,
    pub phase: IndicatorPhase,
}

/// Logical overlay for the current state. The presentation layer maps each
/// variant to its own image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum Banner {
    StartScreen,
    Instructions,
    About,
    Board(TurnIndicator),
    Winner(Player),
}

/// Per-token view for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenView {
    pub owner: Player,
    pub slot: u8,
    pub destination: Option<u8>,
    pub x: f32,
    pub y: f32,
    pub selected: bool,
    pub moving: bool,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub phase: Phase,
    pub turn: Player,
    pub placed_a: u8,
    pub placed_b: u8,
    pub winner: Option<Player>,
    /// Contract: 9 entries, 0 = empty, 1 = Player A, 2 = Player B.
    /// In-transit tokens are reported on their origin slot.
    pub board: Vec<u8>,
    pub tokens: Vec<TokenView>,
    pub banner: Banner,
}
