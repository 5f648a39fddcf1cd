// Site themes, each mapped to the fixed colors used by the animated background

use crate::color::Color;
use crate::error::FieldError;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub dots: Color,
    pub lines: Color,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
    Ferrari,
    Retro8Bit,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Dark, Theme::Ferrari, Theme::Retro8Bit];

    pub fn from_key(key: &str) -> Option<Theme> {
        Theme::ALL.iter().copied().find(|theme| theme.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Ferrari => "ferrari",
            Theme::Retro8Bit => "retro8bit",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
            Theme::Ferrari => "Ferrari Theme",
            Theme::Retro8Bit => "8-Bit Retro",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                dots: Color::rgba(234, 88, 12, 0.6),
                lines: Color::rgba(234, 88, 12, 0.3),
            },
            Theme::Dark => Palette {
                dots: Color::rgba(251, 146, 60, 0.6),
                lines: Color::rgba(251, 146, 60, 0.3),
            },
            Theme::Ferrari => Palette {
                dots: Color::rgba(220, 38, 38, 0.8),
                lines: Color::rgba(220, 38, 38, 0.4),
            },
            Theme::Retro8Bit => Palette {
                dots: Color::rgba(34, 197, 94, 0.8),
                lines: Color::rgba(34, 197, 94, 0.4),
            },
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = FieldError;

    fn from_str(key: &str) -> Result<Theme, FieldError> {
        Theme::from_key(key).ok_or_else(|| FieldError::UnknownTheme(key.to_owned()))
    }
}
