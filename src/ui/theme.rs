//! Theme system for the torch
//! Supports both dark and light modes with a warm beam accent

use iced::color;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

// ============================================================================
// Slider Colors
// ============================================================================

/// Track fill and stroke (black at 40%)
pub const TRACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.4);

/// Dot tint applied to the mask (white at 60%)
pub const DOT_TINT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);

/// Full-power beam color
pub const BEAM: Color = color!(0xffd35c);

/// Beam color for a brightness level in `[0, 1]`
///
/// Level 0 blends into the surface so an "off" torch reads as empty.
pub fn beam(theme: &Theme, level: f32) -> Color {
    let level = level.clamp(0.0, 1.0);
    let base = surface(theme);
    Color {
        r: base.r + (BEAM.r - base.r) * level,
        g: base.g + (BEAM.g - base.g) * level,
        b: base.b + (BEAM.b - base.b) * level,
        a: 1.0,
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Round glowing beam panel
pub fn beam_panel(theme: &Theme, level: f32, radius: f32) -> container::Style {
    let color = beam(theme, level);
    container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(if level > 0.5 {
            light::TEXT_PRIMARY
        } else {
            text_primary(theme)
        }),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color {
                a: 0.6 * level,
                ..BEAM
            },
            offset: Vector::new(0.0, 0.0),
            blur_radius: 48.0 * level,
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beam_off_matches_surface() {
        let off = beam(&Theme::Dark, 0.0);
        assert_eq!(off, dark::SURFACE);
    }

    #[test]
    fn beam_full_is_beam_color() {
        let full = beam(&Theme::Light, 1.0);
        assert!((full.r - BEAM.r).abs() < 1e-6);
        assert!((full.g - BEAM.g).abs() < 1e-6);
        assert!((full.b - BEAM.b).abs() < 1e-6);
    }

    #[test]
    fn slider_colors_are_translucent() {
        assert_eq!(TRACK.a, 0.4);
        assert_eq!(DOT_TINT.a, 0.6);
    }
}
