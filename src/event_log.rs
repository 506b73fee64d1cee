use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

use chrono::Local;

use crate::types::Player;

const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A game instance was created.
    Launched,
    Started,
    Won(Player),
    Reset,
    Exited,
    Closed,
    AssetsFailed { name: String },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launched | Self::Started => f.write_str("Game started."),
            Self::Won(player) => write!(f, "{} wins!", player.name()),
            Self::Reset => f.write_str("Game reset."),
            Self::Exited => f.write_str("Game exited."),
            Self::Closed => f.write_str("Game closed by user."),
            Self::AssetsFailed { name } => write!(f, "Failed to load assets: {name}"),
        }
    }
}

/// Destination for game events, owned by the game for its whole lifetime.
pub trait EventSink {
    fn record(&mut self, event: &GameEvent);
}

/// Lets the owner keep a handle on a sink it has lent to the game.
impl<S: EventSink + ?Sized> EventSink for Rc<RefCell<S>> {
    fn record(&mut self, event: &GameEvent) {
        self.borrow_mut().record(event);
    }
}

/// Renders a log line, e.g. `[Sat Oct 17 14:03:11 2026] - Player A wins!`.
pub fn format_line(event: &GameEvent) -> String {
    format!("[{}] - {event}", Local::now().format(TIMESTAMP_FORMAT))
}

/// Writes one timestamped line per event to any writer (e.g. `game.log`).
/// Write failures are traced and otherwise dropped; the log is best effort.
pub struct TextLog<W: Write> {
    out: W,
}

impl<W: Write> TextLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for TextLog<W> {
    fn record(&mut self, event: &GameEvent) {
        let result = writeln!(self.out, "{}", format_line(event)).and_then(|_| self.out.flush());
        if let Err(err) = result {
            tracing::warn!(%err, "failed to write game log line");
        }
    }
}

/// Buffers formatted lines until the host drains them.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Vec<String>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl EventSink for MemoryLog {
    fn record(&mut self, event: &GameEvent) {
        self.lines.push(format_line(event));
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &GameEvent) {}
}
