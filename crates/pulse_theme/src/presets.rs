//! Built-in palette presets.

use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// Light system look with a coral accent.
    Classic,
    /// Dark preset tuned for night use.
    Midnight,
    /// Soft greens.
    Meadow,
    /// Warm oranges on cream.
    Sunset,
}

impl ThemePreset {
    /// Stable preset id for config/persistence.
    pub fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Midnight => "midnight",
            Self::Meadow => "meadow",
            Self::Sunset => "sunset",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Midnight => "Midnight",
            Self::Meadow => "Meadow",
            Self::Sunset => "Sunset",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 4] = [
            ThemePreset::Classic,
            ThemePreset::Midnight,
            ThemePreset::Meadow,
            ThemePreset::Sunset,
        ];
        &PRESETS
    }

    /// Look up a preset by its stable id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    /// The palette this preset paints with.
    pub fn palette(self) -> Palette {
        match self {
            Self::Classic => Palette::from_hex(0xF2F2F7, 0xFFFFFF, 0x1C1C1E, 0x8E8E93, 0xFF375F),
            Self::Midnight => Palette::from_hex(0x000000, 0x1C1C1E, 0xF2F2F7, 0x98989D, 0xFF453A),
            Self::Meadow => Palette::from_hex(0xEEF5EC, 0xFAFDF8, 0x1F3A24, 0x6B8F71, 0x34C759),
            Self::Sunset => Palette::from_hex(0xFFF4E6, 0xFFFBF5, 0x3D2413, 0xA07855, 0xFF9500),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
