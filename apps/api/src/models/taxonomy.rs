//! Closed enumerations shared by the entity types and the query filters.
//!
//! Parsing is exact and case-sensitive: `"Immediate"` is not a phase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SymptomGuides,
    Checklists,
    DownloadableGuides,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::SymptomGuides,
        Category::Checklists,
        Category::DownloadableGuides,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SymptomGuides => "symptom-guides",
            Category::Checklists => "checklists",
            Category::DownloadableGuides => "downloadable-guides",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("category", s))
    }
}

/// Recovery stage used to tag resources and checklist items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Immediate,
    ShortTerm,
    LongTerm,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Immediate, Phase::ShortTerm, Phase::LongTerm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Immediate => "immediate",
            Phase::ShortTerm => "short-term",
            Phase::LongTerm => "long-term",
        }
    }
}

impl FromStr for Phase {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("phase", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    Virtual,
    Local,
    Phone,
}

impl GroupType {
    pub const ALL: [GroupType; 3] = [GroupType::Virtual, GroupType::Local, GroupType::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupType::Virtual => "virtual",
            GroupType::Local => "local",
            GroupType::Phone => "phone",
        }
    }
}

impl FromStr for GroupType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("support group type", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Medium, Urgency::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

impl FromStr for Urgency {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("urgency", s))
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Category, Phase, GroupType, Urgency);
