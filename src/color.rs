//! BarColor type — the public color representation for floem-colorbar.
//!
//! Stores RGBA as 8-bit components. The slider bars edit R, G, and B; alpha is
//! carried through every mutation untouched.

use thiserror::Error;

/// A numeric channel index outside `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("channel index out of range: {0}")]
pub struct ChannelIndexError(pub usize);

/// One of the three edited channels, in hit-test priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels, top band first.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Band index: Red = 0, Green = 1, Blue = 2.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl TryFrom<usize> for Channel {
    type Error = ChannelIndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Channel::Red),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Blue),
            other => Err(ChannelIndexError(other)),
        }
    }
}

/// RGBA color with components in 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Default for BarColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl BarColor {
    /// Opaque white, the widget's starting color.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Create from RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create from RGBA values.
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Red component.
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green component.
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue component.
    pub fn b(&self) -> u8 {
        self.b
    }
    /// Alpha component. Never written by the sliders.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Value of one channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Copy with one channel replaced; alpha is preserved.
    pub fn with_channel(&self, channel: Channel, value: u8) -> Self {
        let mut color = *self;
        match channel {
            Channel::Red => color.r = value,
            Channel::Green => color.g = value,
            Channel::Blue => color.b = value,
        }
        color
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match stripped.len() {
            3 => {
                let r = u8::from_str_radix(&stripped[0..1], 16).ok()?;
                let g = u8::from_str_radix(&stripped[1..2], 16).ok()?;
                let b = u8::from_str_radix(&stripped[2..3], 16).ok()?;
                Some(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                Some(Self::from_rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                let a = u8::from_str_radix(&stripped[6..8], 16).ok()?;
                Some(Self::from_rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when fully opaque, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_round_trip() {
        let c = BarColor::from_rgba(10, 20, 30, 40);
        for channel in Channel::ALL {
            let replaced = c.with_channel(channel, 99);
            assert_eq!(replaced.channel(channel), 99);
            assert_eq!(replaced.a(), 40);
            for other in Channel::ALL {
                if other != channel {
                    assert_eq!(replaced.channel(other), c.channel(other));
                }
            }
        }
    }

    #[test]
    fn index_conversion_rejects_out_of_range() {
        assert_eq!(Channel::try_from(0), Ok(Channel::Red));
        assert_eq!(Channel::try_from(2), Ok(Channel::Blue));
        assert_eq!(Channel::try_from(3), Err(ChannelIndexError(3)));
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(BarColor::from_hex("#3B82F6"), Some(BarColor::from_rgb(59, 130, 246)));
        assert_eq!(BarColor::from_hex("fff"), Some(BarColor::WHITE));
        assert_eq!(
            BarColor::from_hex("3B82F680"),
            Some(BarColor::from_rgba(59, 130, 246, 128))
        );
        assert_eq!(BarColor::from_hex("12345"), None);
        assert_eq!(BarColor::from_hex("zzzzzz"), None);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(BarColor::from_rgb(59, 130, 246).to_hex(), "3B82F6");
        assert_eq!(BarColor::from_rgba(0, 0, 0, 128).to_hex(), "00000080");
    }

    #[test]
    fn equality_is_component_wise() {
        let c = BarColor::from_rgba(1, 2, 3, 4);
        assert_eq!(c, BarColor::from_rgba(1, 2, 3, 4));
        assert_ne!(c, BarColor::from_rgba(1, 2, 3, 5));
    }
}
