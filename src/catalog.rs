use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Visual descriptor for a theme preset. Terminal colors stand in for the
/// backdrop gradients of the original presets; `control` styles the
/// transport buttons and their borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub control: Color,
}

/// Closed set of theme presets. Lookup is an exhaustive match so a new
/// variant without a descriptor fails to compile instead of falling back
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeId {
    ClassicBlack,
    ClassicWhite,
    CleanPink,
    CherryRed,
    NavyBlue,
    ForestGreen,
    OceanTeal,
    SunsetOrange,
    LavenderDream,
    MidnightPurple,
    /// Reserved for sessions with a generated custom backdrop.
    CustomAi,
}

impl ThemeId {
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeId::ClassicBlack => &CLASSIC_BLACK,
            ThemeId::ClassicWhite => &CLASSIC_WHITE,
            ThemeId::CleanPink => &CLEAN_PINK,
            ThemeId::CherryRed => &CHERRY_RED,
            ThemeId::NavyBlue => &NAVY_BLUE,
            ThemeId::ForestGreen => &FOREST_GREEN,
            ThemeId::OceanTeal => &OCEAN_TEAL,
            ThemeId::SunsetOrange => &SUNSET_ORANGE,
            ThemeId::LavenderDream => &LAVENDER_DREAM,
            ThemeId::MidnightPurple => &MIDNIGHT_PURPLE,
            ThemeId::CustomAi => &CUSTOM_AI,
        }
    }

    /// Presets offered by the settings picker. `CustomAi` is only entered
    /// through background generation, never picked directly.
    pub fn pickable() -> &'static [ThemeId] {
        &[
            ThemeId::ClassicBlack,
            ThemeId::ClassicWhite,
            ThemeId::CleanPink,
            ThemeId::CherryRed,
            ThemeId::NavyBlue,
            ThemeId::ForestGreen,
            ThemeId::OceanTeal,
            ThemeId::SunsetOrange,
            ThemeId::LavenderDream,
            ThemeId::MidnightPurple,
        ]
    }
}

const CLASSIC_BLACK: Theme = Theme {
    name: "Classic Black",
    bg: Color::Rgb(0, 0, 0),
    fg: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(156, 163, 175),
    control: Color::Rgb(229, 231, 235),
};

const CLASSIC_WHITE: Theme = Theme {
    name: "Classic White",
    bg: Color::Rgb(255, 255, 255),
    fg: Color::Rgb(17, 24, 39),
    accent: Color::Rgb(107, 114, 128),
    control: Color::Rgb(17, 24, 39),
};

const CLEAN_PINK: Theme = Theme {
    name: "Clean Pink",
    bg: Color::Rgb(251, 207, 232),
    fg: Color::Rgb(131, 24, 67),
    accent: Color::Rgb(219, 39, 119),
    control: Color::Rgb(131, 24, 67),
};

const CHERRY_RED: Theme = Theme {
    name: "Cherry Red",
    bg: Color::Rgb(153, 27, 27),
    fg: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(254, 202, 202),
    control: Color::Rgb(255, 255, 255),
};

const NAVY_BLUE: Theme = Theme {
    name: "Navy Blue",
    bg: Color::Rgb(30, 58, 138),
    fg: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(147, 197, 253),
    control: Color::Rgb(255, 255, 255),
};

const FOREST_GREEN: Theme = Theme {
    name: "Forest Green",
    bg: Color::Rgb(6, 95, 70),
    fg: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(134, 239, 172),
    control: Color::Rgb(255, 255, 255),
};

const OCEAN_TEAL: Theme = Theme {
    name: "Ocean Teal",
    bg: Color::Rgb(8, 145, 178),
    fg: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(153, 246, 228),
    control: Color::Rgb(255, 255, 255),
};

const SUNSET_ORANGE: Theme = Theme {
    name: "Sunset Orange",
    bg: Color::Rgb(245, 158, 11),
    fg: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(255, 237, 213),
    control: Color::Rgb(255, 255, 255),
};

const LAVENDER_DREAM: Theme = Theme {
    name: "Lavender Dream",
    bg: Color::Rgb(221, 214, 254),
    fg: Color::Rgb(88, 28, 135),
    accent: Color::Rgb(147, 51, 234),
    control: Color::Rgb(88, 28, 135),
};

const MIDNIGHT_PURPLE: Theme = Theme {
    name: "Midnight Purple",
    bg: Color::Rgb(76, 29, 149),
    fg: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(216, 180, 254),
    control: Color::Rgb(255, 255, 255),
};

const CUSTOM_AI: Theme = Theme {
    name: "AI Generated",
    bg: Color::Rgb(0, 0, 0),
    fg: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(156, 163, 175),
    control: Color::Rgb(229, 231, 235),
};

/// Display style for the big countdown digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    pub name: &'static str,
}

/// Closed set of digit clock faces, rendered by `ui::digits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FontId {
    Block,
    Slim,
    Digital,
    Heavy,
    Mono,
}

impl FontId {
    pub fn style(self) -> &'static FontStyle {
        match self {
            FontId::Block => &FontStyle { name: "Block" },
            FontId::Slim => &FontStyle { name: "Slim Line" },
            FontId::Digital => &FontStyle { name: "Digital" },
            FontId::Heavy => &FontStyle { name: "Bold Display" },
            FontId::Mono => &FontStyle { name: "Minimal" },
        }
    }

    pub fn all() -> &'static [FontId] {
        &[
            FontId::Block,
            FontId::Slim,
            FontId::Digital,
            FontId::Heavy,
            FontId::Mono,
        ]
    }
}
