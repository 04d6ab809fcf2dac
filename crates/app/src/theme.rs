//! Owned theme palettes for the presentation layer.
//!
//! A `ThemeContext` is passed by reference into every draw call; switching
//! themes rebuilds the dependent page state from the new palette instead of
//! mutating anything global.

use macroquad::color::Color;

#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    pub name: &'static str,
    pub background: Color,
    pub wall: Color,
    pub gate: Color,
    pub pellet: Color,
    pub energizer: Color,
    pub player: Color,
    pub ghost_normal: Color,
    pub ghost_scared: Color,
    pub ghost_imprisoned: Color,
    pub text: Color,
    pub text_dim: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r: r as f32 / 255.0, g: g as f32 / 255.0, b: b as f32 / 255.0, a: 1.0 }
}

pub const THEMES: [ThemeContext; 3] = [
    ThemeContext {
        name: "Classic",
        background: rgb(0, 0, 0),
        wall: rgb(33, 33, 222),
        gate: rgb(255, 184, 222),
        pellet: rgb(255, 183, 174),
        energizer: rgb(255, 241, 174),
        player: rgb(255, 255, 0),
        ghost_normal: rgb(222, 58, 58),
        ghost_scared: rgb(58, 58, 222),
        ghost_imprisoned: rgb(140, 140, 160),
        text: rgb(255, 255, 255),
        text_dim: rgb(160, 160, 160),
    },
    ThemeContext {
        name: "Midnight",
        background: rgb(8, 8, 24),
        wall: rgb(90, 60, 180),
        gate: rgb(200, 160, 255),
        pellet: rgb(210, 210, 255),
        energizer: rgb(255, 220, 120),
        player: rgb(250, 210, 60),
        ghost_normal: rgb(240, 90, 130),
        ghost_scared: rgb(70, 110, 240),
        ghost_imprisoned: rgb(110, 110, 140),
        text: rgb(235, 235, 255),
        text_dim: rgb(140, 140, 180),
    },
    ThemeContext {
        name: "Emerald",
        background: rgb(4, 18, 10),
        wall: rgb(26, 140, 80),
        gate: rgb(180, 255, 210),
        pellet: rgb(220, 255, 230),
        energizer: rgb(255, 230, 130),
        player: rgb(255, 240, 90),
        ghost_normal: rgb(230, 80, 70),
        ghost_scared: rgb(60, 120, 220),
        ghost_imprisoned: rgb(120, 140, 130),
        text: rgb(230, 255, 240),
        text_dim: rgb(130, 170, 150),
    },
];

/// Theme lookup; out-of-range indices wrap so persisted settings from older
/// builds never panic.
pub fn theme_by_index(index: usize) -> &'static ThemeContext {
    &THEMES[index % THEMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_lookup_wraps_out_of_range_indices() {
        assert_eq!(theme_by_index(0).name, "Classic");
        assert_eq!(theme_by_index(THEMES.len()).name, "Classic");
        assert_eq!(theme_by_index(4).name, "Midnight");
    }

    #[test]
    fn themes_have_distinct_names() {
        for (left_index, left) in THEMES.iter().enumerate() {
            for right in THEMES.iter().skip(left_index + 1) {
                assert_ne!(left.name, right.name);
            }
        }
    }
}
