//! Farm profile vocabulary: agricultural regions and crop families.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Moroccan agricultural region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Region {
    #[default]
    SoussMassa,
    Gharb,
    Doukkala,
    ChaouiaOuardigha,
    BeniAhsen,
    Other,
}

impl Region {
    pub const ALL: &'static [Region] = &[
        Region::SoussMassa,
        Region::Gharb,
        Region::Doukkala,
        Region::ChaouiaOuardigha,
        Region::BeniAhsen,
        Region::Other,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Region::SoussMassa => "souss_massa",
            Region::Gharb => "gharb",
            Region::Doukkala => "doukkala",
            Region::ChaouiaOuardigha => "chaouia_ouardigha",
            Region::BeniAhsen => "beni_ahsen",
            Region::Other => "other",
        }
    }

    /// Arabic display name, as used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Region::SoussMassa => "سوس ماسة",
            Region::Gharb => "الغرب",
            Region::Doukkala => "الدوكالة",
            Region::ChaouiaOuardigha => "الشاوية ورديغة",
            Region::BeniAhsen => "بني أحسن",
            Region::Other => "أخرى",
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.tag() == s.trim())
            .ok_or_else(|| {
                format!(
                    "unknown region '{s}' (expected one of: {})",
                    tag_list(Region::ALL.iter().map(Region::tag))
                )
            })
    }
}

/// Crop family grown on the farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Crop {
    #[default]
    Cereals,
    Olives,
    Citrus,
    Tomatoes,
    Argan,
    Dates,
    Saffron,
}

impl Crop {
    pub const ALL: &'static [Crop] = &[
        Crop::Cereals,
        Crop::Olives,
        Crop::Citrus,
        Crop::Tomatoes,
        Crop::Argan,
        Crop::Dates,
        Crop::Saffron,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Crop::Cereals => "cereals",
            Crop::Olives => "olives",
            Crop::Citrus => "citrus",
            Crop::Tomatoes => "tomatoes",
            Crop::Argan => "argan",
            Crop::Dates => "dates",
            Crop::Saffron => "saffron",
        }
    }

    /// Arabic display name, as used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Crop::Cereals => "الحبوب",
            Crop::Olives => "الزيتون",
            Crop::Citrus => "الحمضيات",
            Crop::Tomatoes => "الطماطم",
            Crop::Argan => "الأرغان",
            Crop::Dates => "التمور",
            Crop::Saffron => "الزعفران",
        }
    }
}

impl FromStr for Crop {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crop::ALL
            .iter()
            .copied()
            .find(|c| c.tag() == s.trim())
            .ok_or_else(|| {
                format!(
                    "unknown crop '{s}' (expected one of: {})",
                    tag_list(Crop::ALL.iter().map(Crop::tag))
                )
            })
    }
}

fn tag_list(tags: impl Iterator<Item = &'static str>) -> String {
    tags.collect::<Vec<_>>().join(", ")
}
