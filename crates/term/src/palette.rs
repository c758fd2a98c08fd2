//! Colors: the known-color table, random colors and the role palette.

use rand::Rng;

use crate::fb::Rgb;
use crate::types::ColorRole;

/// Named colors that can be looked up by string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownColor {
    Red,
    Green,
    Blue,
    White,
    Black,
}

impl KnownColor {
    /// Case-insensitive name lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_term::KnownColor;
    ///
    /// assert_eq!(KnownColor::from_name("red"), Some(KnownColor::Red));
    /// assert_eq!(KnownColor::from_name("White"), Some(KnownColor::White));
    /// assert_eq!(KnownColor::from_name("teal"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "RED" => Some(KnownColor::Red),
            "GREEN" => Some(KnownColor::Green),
            "BLUE" => Some(KnownColor::Blue),
            "WHITE" => Some(KnownColor::White),
            "BLACK" => Some(KnownColor::Black),
            _ => None,
        }
    }

    pub fn rgb(&self) -> Rgb {
        match self {
            KnownColor::Red => Rgb::new(255, 0, 0),
            KnownColor::Green => Rgb::new(0, 255, 0),
            KnownColor::Blue => Rgb::new(0, 0, 255),
            KnownColor::White => Rgb::new(255, 255, 255),
            KnownColor::Black => Rgb::new(0, 0, 0),
        }
    }
}

/// Look up a named color; unknown names give black.
pub fn known_color(name: &str) -> Rgb {
    KnownColor::from_name(name)
        .unwrap_or(KnownColor::Black)
        .rgb()
}

/// Each channel drawn independently and uniformly from 0..=255.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.gen(), rng.gen(), rng.gen())
}

/// Concrete colors for every [`ColorRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub snake: Rgb,
    pub food: Rgb,
    pub title: Rgb,
    pub body: Rgb,
    pub score: Rgb,
    pub high_score: Rgb,
}

impl Palette {
    /// White field, green snake, red food, black text, blue score.
    pub fn classic() -> Self {
        Self {
            background: KnownColor::White.rgb(),
            snake: KnownColor::Green.rgb(),
            food: KnownColor::Red.rgb(),
            title: KnownColor::Black.rgb(),
            body: KnownColor::Black.rgb(),
            score: KnownColor::Blue.rgb(),
            high_score: KnownColor::Green.rgb(),
        }
    }

    pub fn color(&self, role: ColorRole) -> Rgb {
        match role {
            ColorRole::Background => self.background,
            ColorRole::SnakeBody => self.snake,
            ColorRole::Food => self.food,
            ColorRole::TitleText => self.title,
            ColorRole::BodyText => self.body,
            ColorRole::ScoreText => self.score,
            ColorRole::HighScoreText => self.high_score,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
