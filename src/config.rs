use serde::Deserialize;

use crate::error::{MorrisError, MorrisResult};

const DEFAULT_SPEED: f32 = 400.0;
const DEFAULT_SLOT_EXTENT: f32 = 50.0;
const DEFAULT_TOKEN_EXTENT: f32 = 50.0;
/// Distance between neighbouring slot centres; larger click regions would overlap.
const SLOT_SPACING: f32 = 250.0;

/// Tunables supplied by the host. Missing fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MorrisConfig {
    /// Slide speed in pixels per second.
    pub speed: f32,
    /// Side of the square click region around each slot centre.
    pub slot_extent: f32,
    /// Side of a token sprite.
    pub token_extent: f32,
}

impl Default for MorrisConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            slot_extent: DEFAULT_SLOT_EXTENT,
            token_extent: DEFAULT_TOKEN_EXTENT,
        }
    }
}

impl MorrisConfig {
    pub fn validate(&self) -> MorrisResult<()> {
        for (name, value) in [
            ("speed", self.speed),
            ("slot_extent", self.slot_extent),
            ("token_extent", self.token_extent),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MorrisError::InvalidConfig {
                    message: format!("{name} must be a positive number, got {value}"),
                });
            }
        }

        if self.slot_extent >= SLOT_SPACING {
            return Err(MorrisError::InvalidConfig {
                message: format!(
                    "slot_extent must be below {SLOT_SPACING}, got {}",
                    self.slot_extent
                ),
            });
        }

        Ok(())
    }
}
