//! House identities
//!
//! The fixed set of houses competing for the cup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four houses being scored.
///
/// The wire form is the GraphQL enum name (`GRYFFINDOR`); the title-case
/// name (`Gryffindor`) is accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum House {
    #[serde(rename = "GRYFFINDOR", alias = "Gryffindor")]
    Gryffindor,
    #[serde(rename = "HUFFLEPUFF", alias = "Hufflepuff")]
    Hufflepuff,
    #[serde(rename = "RAVENCLAW", alias = "Ravenclaw")]
    Ravenclaw,
    #[serde(rename = "SLYTHERIN", alias = "Slytherin")]
    Slytherin,
}

impl House {
    /// All houses in declaration order
    pub const ALL: [House; 4] = [
        House::Gryffindor,
        House::Hufflepuff,
        House::Ravenclaw,
        House::Slytherin,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            House::Gryffindor => "Gryffindor",
            House::Hufflepuff => "Hufflepuff",
            House::Ravenclaw => "Ravenclaw",
            House::Slytherin => "Slytherin",
        }
    }

    /// Crest image path, served by the page host under `/images`
    pub fn image_path(&self) -> String {
        format!("/images/{}.png", self.name())
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known house
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown house: {0}")]
pub struct UnknownHouse(pub String);

impl FromStr for House {
    type Err = UnknownHouse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        House::ALL
            .into_iter()
            .find(|house| house.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownHouse(s.to_string()))
    }
}
