//! Palette snapshots

use pulse_core::Color;
use std::collections::HashMap;

/// Named color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    Background,
    Surface,
    Primary,
    Secondary,
    Accent,
}

impl ColorRole {
    pub fn all() -> &'static [ColorRole] {
        const ROLES: [ColorRole; 5] = [
            ColorRole::Background,
            ColorRole::Surface,
            ColorRole::Primary,
            ColorRole::Secondary,
            ColorRole::Accent,
        ];
        &ROLES
    }

    /// Variable name used by [`Palette::to_css_variable_map`]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
        }
    }
}

/// Immutable snapshot of one theme's color roles.
///
/// Palettes are replaced wholesale on a theme switch; nothing mutates one
/// field by field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

impl Palette {
    /// Build a palette from `0xRRGGBB` values in role order
    pub fn from_hex(background: u32, surface: u32, primary: u32, secondary: u32, accent: u32) -> Self {
        Self {
            background: Color::from_hex(background),
            surface: Color::from_hex(surface),
            primary: Color::from_hex(primary),
            secondary: Color::from_hex(secondary),
            accent: Color::from_hex(accent),
        }
    }

    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
        }
    }

    /// Linear interpolation between two palettes
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            background: Color::lerp(&from.background, &to.background, t),
            surface: Color::lerp(&from.surface, &to.surface, t),
            primary: Color::lerp(&from.primary, &to.primary, t),
            secondary: Color::lerp(&from.secondary, &to.secondary, t),
            accent: Color::lerp(&from.accent, &to.accent, t),
        }
    }

    /// Role name to hex string, e.g. `"primary" -> "#1e66f5"`
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        ColorRole::all()
            .iter()
            .map(|role| (role.css_name().to_string(), self.get(*role).to_hex_string()))
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        crate::ThemePreset::Classic.palette()
    }
}
