use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe color enum matching the API's color vocabulary.
///
/// Variant names map one-to-one onto the wire names, so serde's
/// snake_case rename produces exactly what the API expects
/// ("gray_background", not "light gray").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    GrayBackground,
    BrownBackground,
    RedBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Color::Default),
            "gray" => Ok(Color::Gray),
            "brown" => Ok(Color::Brown),
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "purple" => Ok(Color::Purple),
            "pink" => Ok(Color::Pink),
            "gray_background" => Ok(Color::GrayBackground),
            "brown_background" => Ok(Color::BrownBackground),
            "red_background" => Ok(Color::RedBackground),
            "orange_background" => Ok(Color::OrangeBackground),
            "yellow_background" => Ok(Color::YellowBackground),
            "green_background" => Ok(Color::GreenBackground),
            "blue_background" => Ok(Color::BlueBackground),
            "purple_background" => Ok(Color::PurpleBackground),
            "pink_background" => Ok(Color::PinkBackground),
            _ => Err(ValidationError::InvalidColor(s.to_string())),
        }
    }
}

impl Color {
    /// The wire name of this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::RedBackground => "red_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
        }
    }

    /// Check if this is a background color
    pub fn is_background(&self) -> bool {
        matches!(
            self,
            Color::GrayBackground
                | Color::BrownBackground
                | Color::RedBackground
                | Color::OrangeBackground
                | Color::YellowBackground
                | Color::GreenBackground
                | Color::BlueBackground
                | Color::PurpleBackground
                | Color::PinkBackground
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Color vocabulary for select, multi-select, and status options.
///
/// Option colors never take the background forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectColor {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

impl fmt::Display for SelectColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectColor::Default => "default",
            SelectColor::Gray => "gray",
            SelectColor::Brown => "brown",
            SelectColor::Red => "red",
            SelectColor::Orange => "orange",
            SelectColor::Yellow => "yellow",
            SelectColor::Green => "green",
            SelectColor::Blue => "blue",
            SelectColor::Purple => "purple",
            SelectColor::Pink => "pink",
        };
        write!(f, "{}", name)
    }
}
