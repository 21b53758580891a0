//! Section kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the four independently configurable presentation areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Header,
    Footer,
    Banner,
    HowItWorks,
}

impl SectionKind {
    /// All section kinds in rendering order.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Header,
        SectionKind::Footer,
        SectionKind::Banner,
        SectionKind::HowItWorks,
    ];
}

impl FromStr for SectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "header" => Ok(SectionKind::Header),
            "footer" => Ok(SectionKind::Footer),
            "banner" => Ok(SectionKind::Banner),
            "how-it-works" | "how_it_works" | "howitworks" => Ok(SectionKind::HowItWorks),
            _ => Err(Error::UnknownSection {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Header => write!(f, "header"),
            SectionKind::Footer => write!(f, "footer"),
            SectionKind::Banner => write!(f, "banner"),
            SectionKind::HowItWorks => write!(f, "how-it-works"),
        }
    }
}

/// Whether a section is authored locally or delegated to another market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionMode {
    Custom,
    Reuse,
}

impl fmt::Display for SectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionMode::Custom => write!(f, "custom"),
            SectionMode::Reuse => write!(f, "reuse"),
        }
    }
}
