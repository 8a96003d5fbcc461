//! House colours
//!
//! Bar fills scale in intensity with a house's share of the leading score;
//! accents depend on the house alone.

use serde::{Serialize, Serializer};
use std::fmt;

use super::House;

/// Lowest intensity a bar fill is drawn with (a house on zero points)
pub const MIN_INTENSITY: f64 = 0.45;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1)
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl House {
    /// Full-intensity house colour
    pub fn base_color(&self) -> Rgb {
        match self {
            House::Gryffindor => Rgb::new(0xae, 0x00, 0x01),
            House::Hufflepuff => Rgb::new(0xec, 0xb9, 0x39),
            House::Ravenclaw => Rgb::new(0x22, 0x2f, 0x5b),
            House::Slytherin => Rgb::new(0x2a, 0x62, 0x3d),
        }
    }

    /// Border/accent colour
    pub fn accent_color(&self) -> Rgb {
        match self {
            House::Gryffindor => Rgb::new(0xd3, 0xa6, 0x25),
            House::Hufflepuff => Rgb::new(0x37, 0x2e, 0x29),
            House::Ravenclaw => Rgb::new(0x94, 0x6b, 0x2d),
            House::Slytherin => Rgb::new(0xaa, 0xaa, 0xaa),
        }
    }
}

/// Bar fill for `house` holding `points` out of a leading `max_points`.
pub fn color_for(house: House, points: i64, max_points: i64) -> Rgb {
    let ratio = if max_points > 0 {
        (points as f64 / max_points as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let intensity = MIN_INTENSITY + (1.0 - MIN_INTENSITY) * ratio;
    Rgb::WHITE.mix(house.base_color(), intensity)
}

/// Accent for `house`
pub fn accent_color(house: House) -> Rgb {
    house.accent_color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_display() {
        assert_eq!(Rgb::new(0xae, 0x00, 0x01).to_string(), "#ae0001");
        assert_eq!(
            serde_json::to_string(&Rgb::WHITE).unwrap(),
            "\"#ffffff\""
        );
    }

    #[test]
    fn test_leader_gets_full_colour() {
        for house in House::ALL {
            assert_eq!(color_for(house, 120, 120), house.base_color());
        }
    }

    #[test]
    fn test_intensity_grows_with_points() {
        // Distance from white grows as the total approaches the max
        let distance = |c: Rgb| 765 - (c.r as i32 + c.g as i32 + c.b as i32);
        let low = color_for(House::Gryffindor, 10, 120);
        let mid = color_for(House::Gryffindor, 60, 120);
        let high = color_for(House::Gryffindor, 110, 120);
        assert!(distance(low) < distance(mid));
        assert!(distance(mid) < distance(high));
    }

    #[test]
    fn test_floor_intensity_for_zero_and_negative() {
        let floor = Rgb::WHITE.mix(House::Ravenclaw.base_color(), MIN_INTENSITY);
        assert_eq!(color_for(House::Ravenclaw, 0, 1), floor);
        assert_eq!(color_for(House::Ravenclaw, -30, 80), floor);
    }

    #[test]
    fn test_accent_depends_on_house_only() {
        assert_eq!(accent_color(House::Slytherin), House::Slytherin.accent_color());
        assert_ne!(accent_color(House::Slytherin), accent_color(House::Gryffindor));
    }
}
