use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Upper bound on the instances of one multi-occurrence finding. Larger
/// counts are treated like any other unusable quantity text.
pub const MAX_QUANTITY: usize = 10_000;

/// Side qualifier of a finding occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Laterality {
    Left,
    Right,
    Both,
}

impl Laterality {
    /// Label used in rendered reports.
    pub fn label(&self) -> &'static str {
        match self {
            Laterality::Left => "Esquerdo",
            Laterality::Right => "Direito",
            Laterality::Both => "Bilateral",
        }
    }
}

impl fmt::Display for Laterality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Laterality {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "esquerdo" | "esquerda" => Ok(Laterality::Left),
            "right" | "direito" | "direita" => Ok(Laterality::Right),
            "both" | "bilateral" | "ambos" => Ok(Laterality::Both),
            _ => Err(CoreError::InvalidLaterality(s.to_string())),
        }
    }
}

/// One occurrence of a multi-occurrence finding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FindingInstance {
    /// Free-form, interpreted as millimetres and rendered verbatim.
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub laterality: Option<Laterality>,
}

impl FindingInstance {
    pub const EMPTY: Self = Self {
        size: String::new(),
        laterality: None,
    };

    pub fn new(size: impl Into<String>, laterality: Option<Laterality>) -> Self {
        Self {
            size: size.into(),
            laterality,
        }
    }
}

/// Current selection state of one finding within a session.
///
/// For multi-occurrence findings `instances` holds one entry per occurrence
/// and `size`/`laterality` are unused; otherwise the single occurrence lives
/// in `size`/`laterality` and `instances` stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FindingState {
    pub is_checked: bool,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub laterality: Option<Laterality>,
    /// Quantity exactly as typed, including transient invalid input.
    #[serde(default)]
    pub quantity_text: String,
    #[serde(default)]
    pub instances: Vec<FindingInstance>,
}

impl FindingState {
    pub const EMPTY: Self = Self {
        is_checked: false,
        size: String::new(),
        laterality: None,
        quantity_text: String::new(),
        instances: Vec::new(),
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

/// Parse quantity text typed by the user.
///
/// Returns `None` for blank, non-numeric, zero or negative input, and for
/// counts above [`MAX_QUANTITY`];
/// callers treat that as "no instances", never as an error.
pub fn parse_quantity(text: &str) -> Option<usize> {
    text.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_QUANTITY).contains(n))
}
