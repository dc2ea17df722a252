// color.rs - RGB colors parsed from CSS-style hex literals

use std::fmt;
use std::str::FromStr;

use crate::error::LifeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const LIGHT_GRAY: Color = Color::rgb(0xCC, 0xCC, 0xCC);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = LifeError;

    /// Accepts `#RGB` and `#RRGGBB` (the `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LifeError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                // #ABC is shorthand for #AABBCC
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Color::rgb(r * 0x11, g * 0x11, b * 0x11))
            }
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!("#CCC".parse::<Color>().unwrap(), Color::LIGHT_GRAY);
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("000000".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("#1a2B3c".parse::<Color>().unwrap(), Color::rgb(0x1A, 0x2B, 0x3C));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            "#12".parse::<Color>().unwrap_err(),
            LifeError::InvalidColor("#12".to_string())
        );
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
        // from_str_radix alone would take a sign
        assert!("#+1+2+3".parse::<Color>().is_err());
        assert!("+12".parse::<Color>().is_err());
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Color::rgb(1, 0xAB, 255).to_string(), "#01ABFF");
    }
}
