//! Session configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{StateCodec, STARTING_PLACEMENT};

/// Default pixel size of a board square and its piece.
pub const DEFAULT_PIECE_SIZE: u32 = 64;
/// Largest piece size whose pixel coordinates still fit an `i32` across the
/// whole board.
pub const MAX_PIECE_SIZE: u32 = (i32::MAX / 8) as u32;
/// Default texture drawn for every board square.
pub const DEFAULT_SQUARE_TEXTURE: &str = "boardsquare.png";

/// Options for a chess session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameOptions {
    pub piece_size: u32,
    pub square_texture: String,
    /// Placement imported by `setup`.
    pub start_position: String,
    /// Decoder used when restoring snapshots.
    pub state_codec: StateCodec,
}

impl GameOptions {
    #[must_use]
    pub fn new() -> Self {
        GameOptions {
            piece_size: DEFAULT_PIECE_SIZE,
            square_texture: DEFAULT_SQUARE_TEXTURE.to_string(),
            start_position: STARTING_PLACEMENT.to_string(),
            state_codec: StateCodec::Full,
        }
    }

    /// Update an option by name, ignoring unknown names and bad values.
    ///
    /// Returns `true` when an option changed.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> bool {
        let normalized = name.trim().to_ascii_lowercase();
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            log::debug!("option '{normalized}' given without a value");
            return false;
        };
        match normalized.as_str() {
            "piece size" | "piecesize" => match value.parse::<u32>() {
                Ok(size) if (1..=MAX_PIECE_SIZE).contains(&size) => {
                    self.piece_size = size;
                    true
                }
                _ => {
                    log::debug!("piece size '{value}' outside 1..={MAX_PIECE_SIZE}");
                    false
                }
            },
            "square texture" => {
                self.square_texture = value.to_string();
                true
            }
            "start position" | "startpos" => {
                self.start_position = if value == "startpos" {
                    STARTING_PLACEMENT.to_string()
                } else {
                    value.to_string()
                };
                true
            }
            "state codec" => match value.parse::<StateCodec>() {
                Ok(codec) => {
                    self.state_codec = codec;
                    true
                }
                Err(e) => {
                    log::debug!("{e}");
                    false
                }
            },
            _ => {
                log::debug!("ignoring unknown option '{normalized}'");
                false
            }
        }
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions::new()
    }
}

/// Split the arguments of a `setoption` command into name and value.
///
/// Accepts `<name...> = <value...>` as well as the engine-style
/// `name <name...> value <value...>`. A missing value yields `None`.
#[must_use]
pub fn parse_setoption(args: &[&str]) -> Option<(String, Option<String>)> {
    let (name, value) = match args.iter().position(|a| *a == "=") {
        Some(eq) => (&args[..eq], &args[eq + 1..]),
        None => {
            let body = args.strip_prefix(&["name"]).unwrap_or(args);
            match body.iter().position(|a| *a == "value") {
                Some(split) => (&body[..split], &body[split + 1..]),
                None => (body, &[][..]),
            }
        }
    };
    if name.is_empty() {
        return None;
    }
    let value = (!value.is_empty()).then(|| value.join(" "));
    Some((name.join(" "), value))
}
