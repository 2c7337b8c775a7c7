//! Clear colours and their GPU representations.

use crate::outcome::{Maybe, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color with 8-bit components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Background of the demo scene.
    pub const CORAL_PINK: Color = Color::rgb(0xf3, 0x59, 0x7c);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn parse_hex(hex: &str) -> Maybe<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Outcome::none();
        }

        let channel = |i: usize| -> Maybe<u8> {
            Maybe::from_option(digits.get(i..i + 2))
                .and_then(|pair| u8::from_str_radix(pair, 16).map_err(|_| ()))
        };

        match digits.len() {
            6 => channel(0).and_then(|r| {
                channel(2).and_then(|g| channel(4).map(|b| Color::rgb(r, g, b)))
            }),
            8 => channel(0).and_then(|r| {
                channel(2).and_then(|g| {
                    channel(4).and_then(|b| channel(6).map(|a| Color::rgba(r, g, b, a)))
                })
            }),
            _ => Outcome::none(),
        }
    }

    /// Normalized components in RGBA order.
    #[inline]
    pub fn to_f32_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|c| c as f32 / 255.0)
    }

    /// Normalized components in RGBA order, as wgpu clear values expect.
    #[inline]
    pub fn to_f64_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a].map(|c| c as f64 / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::CORAL_PINK
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
