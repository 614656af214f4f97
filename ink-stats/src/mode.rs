//! Light/dark mode selection and the refresh request body.

use serde::{Deserialize, Serialize};

/// Colour scheme of the rendered card.
///
/// Deserialisation is lenient: only the exact string `"dark"` selects
/// [`Mode::Dark`], anything else falls back to [`Mode::Light`].
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Mode {
    Dark,
    #[default]
    Light,
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "dark" => Mode::Dark,
            _ => Mode::Light,
        }
    }
}

/// RGB triple.
pub type Rgb = (u8, u8, u8);

/// Background and foreground colours for a mode.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
}

const BLACK: Rgb = (0, 0, 0);
const WHITE: Rgb = (255, 255, 255);

impl Mode {
    pub fn palette(self) -> Palette {
        match self {
            Mode::Dark => Palette {
                background: BLACK,
                text: WHITE,
            },
            Mode::Light => Palette {
                background: WHITE,
                text: BLACK,
            },
        }
    }
}

/// Body of `POST /api/v1/refresh`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub mode: Mode,
}

impl RefreshRequest {
    /// The request the browser button sends.
    pub const fn dark() -> Self {
        RefreshRequest { mode: Mode::Dark }
    }

    /// Parse a raw request body, treating an empty or malformed body as the
    /// default (light) request.
    pub fn from_body(body: &[u8]) -> Self {
        if body.is_empty() {
            return RefreshRequest::default();
        }
        match serde_json::from_slice::<RefreshRequest>(body) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("Ignoring malformed refresh body: {}", e);
                RefreshRequest::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
