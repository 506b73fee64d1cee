/// Startup failures and registry misuse. Rejected player intents are not
/// errors; the state machine ignores them.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MorrisError {
    /// A required visual resource could not be loaded by the host.
    #[error("Failed to load asset: {name}")]
    AssetLoad { name: String },

    /// Configuration values are unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Slot index {slot} is out of range")]
    SlotOutOfRange { slot: usize },

    #[error("Slot {slot} is occupied or reserved")]
    SlotOccupied { slot: usize },

    #[error("No token with id {id}")]
    NoSuchToken { id: usize },

    #[error("Token {id} is not in transit")]
    NotMoving { id: usize },
}

pub type MorrisResult<T> = Result<T, MorrisError>;
