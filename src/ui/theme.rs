//! Color sets for the play field.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(0xe8, 0xe8, 0xe0),
                ground: Color::Rgb(0xc4, 0xb5, 0xa0),
                ground_line: Color::Rgb(0xa8, 0x98, 0x82),
                runner_body: Color::Rgb(0x6b, 0x7b, 0x6e),
                runner_arms: Color::Rgb(0x5a, 0x6a, 0x5d),
                runner_eye: Color::Rgb(0x2d, 0x2a, 0x26),
                bone: Color::Rgb(0x8a, 0x80, 0x78),
                bone_stroke: Color::Rgb(0x6b, 0x65, 0x60),
                overlay: Color::Rgb(101, 99, 94),
                overlay_text: Color::Rgb(0xf5, 0xf5, 0xf5),
                text: Color::Rgb(0x2d, 0x2a, 0x26),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(0x1a, 0x1a, 0x1a),
                ground: Color::Rgb(0x2a, 0x2a, 0x2a),
                ground_line: Color::Rgb(0x3a, 0x3a, 0x3a),
                runner_body: Color::Rgb(0x7a, 0x8a, 0x7d),
                runner_arms: Color::Rgb(0x6a, 0x7a, 0x6d),
                runner_eye: Color::Rgb(0xf5, 0xf5, 0xf5),
                bone: Color::Rgb(0xc0, 0xc0, 0xc0),
                bone_stroke: Color::Rgb(0x88, 0x88, 0x88),
                overlay: Color::Rgb(7, 7, 7),
                overlay_text: Color::Rgb(0xf5, 0xf5, 0xf5),
                text: Color::Rgb(0xf5, 0xf5, 0xf5),
            },
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Colors handed to the play field renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub ground: Color,
    pub ground_line: Color,
    pub runner_body: Color,
    pub runner_arms: Color,
    pub runner_eye: Color,
    pub bone: Color,
    pub bone_stroke: Color,
    /// Solid stand-in for the translucent game-over veil.
    pub overlay: Color,
    pub overlay_text: Color,
    pub text: Color,
}
