//! Market identifiers
//!
//! Two keys identify a market. [`MarketId`] is the stable store identifier
//! that reuse references point at. [`MarketCode`] is the short public code
//! (`MY`, `SG`, `AU`) callers use to look a market up.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{2,8}$").expect("market code pattern is valid"));

/// Stable identifier of a market record in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketId(String);

impl MarketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank id is stored by the authoring surface when a reuse
    /// relationship was never picked.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarketId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MarketId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Public market code, always stored and compared in uppercase.
///
/// Parsing trims and uppercases the input, so `" my "` and `"MY"` name the
/// same market.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MarketCode(pub(crate) String);

impl MarketCode {
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let normalized = raw.trim().to_uppercase();
        if CODE_PATTERN.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(Error::InvalidCode {
                code: raw.to_string(),
                reason: "must be 2-8 letters or digits".to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MarketCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MarketCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MarketCode> for String {
    fn from(code: MarketCode) -> Self {
        code.0
    }
}

impl fmt::Display for MarketCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
