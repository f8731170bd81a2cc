use crate::error::ConfigurationError;
use std::fmt;
use std::str::FromStr;

/// 256-color palette indices for the two chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub usable: u8,
    pub ceded: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Cherry blossom tones.
    Sakura,
    /// Subtle blue tones.
    Nord,
    /// Green tones.
    OsakaJade,
    /// Purple and magenta tones.
    TokyoNight,
    /// No override; the terminal's own colors are used.
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 5] = [Theme::Sakura, Theme::Nord, Theme::OsakaJade, Theme::TokyoNight, Theme::System];

    pub fn key(self) -> &'static str {
        match self {
            Theme::Sakura => "sakura",
            Theme::Nord => "nord",
            Theme::OsakaJade => "osaka-jade",
            Theme::TokyoNight => "tokyo-night",
            Theme::System => "system",
        }
    }

    pub fn palette(self) -> Option<Palette> {
        let (usable, ceded) = match self {
            Theme::Sakura => (31, 2),
            Theme::Nord => (67, 9),
            Theme::OsakaJade => (3, 78),
            Theme::TokyoNight => (89, 9),
            Theme::System => return None,
        };
        Some(Palette { usable, ceded })
    }
}

impl FromStr for Theme {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.key() == s)
            .ok_or_else(|| ConfigurationError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
