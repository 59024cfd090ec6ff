//! Shared primitive types used across the entire crate.
//!
//! Every categorical attribute is a small `Copy` enum whose declaration
//! order is its ordinal order. Serialized form is the integer code used
//! in the published dataset, not the variant name.

use serde::{Deserialize, Serialize};

/// Sequential record identifier, dense from 1.
pub type RecordId = u64;

pub const GROUP_LEVELS: usize = 2;
pub const HEALTH_LEVELS: usize = 5;
pub const DEPRIVATION_LEVELS: usize = 5;

/// An ordered categorical attribute with a fixed, contiguous code range.
pub trait Level: Copy + Ord + std::fmt::Debug + 'static {
    /// Attribute name, used in error messages and log lines.
    const ATTRIBUTE: &'static str;
    /// Every level in ordinal order.
    const ALL: &'static [Self];

    fn code(self) -> u8;
    fn label(self) -> &'static str;

    fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }

    /// 0-based position within `ALL`.
    fn index(self) -> usize {
        (self.code() - Self::ALL[0].code()) as usize
    }
}

fn unknown_code(attribute: &str, code: u8) -> String {
    format!("unknown {attribute} code {code}")
}

// ── Group ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Group {
    Zero = 0,
    One = 1,
}

impl Level for Group {
    const ATTRIBUTE: &'static str = "group";
    const ALL: &'static [Self] = &[Self::Zero, Self::One];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::Zero => "Group 0",
            Self::One => "Group 1",
        }
    }
}

impl From<Group> for u8 {
    fn from(g: Group) -> u8 {
        g.code()
    }
}

impl TryFrom<u8> for Group {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| unknown_code(Self::ATTRIBUTE, code))
    }
}

// ── Health ────────────────────────────────────────────────────────────

/// Self-rated health, best (1) to worst (5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Health {
    VeryGood = 1,
    Good = 2,
    Fair = 3,
    Poor = 4,
    VeryPoor = 5,
}

impl Level for Health {
    const ATTRIBUTE: &'static str = "health";
    const ALL: &'static [Self] = &[
        Self::VeryGood,
        Self::Good,
        Self::Fair,
        Self::Poor,
        Self::VeryPoor,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }
}

impl From<Health> for u8 {
    fn from(h: Health) -> u8 {
        h.code()
    }
}

impl TryFrom<u8> for Health {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| unknown_code(Self::ATTRIBUTE, code))
    }
}

// ── Deprivation ───────────────────────────────────────────────────────

/// Deprivation quintile, least (1) to most (5) deprived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Deprivation {
    LeastDeprived = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    MostDeprived = 5,
}

impl Level for Deprivation {
    const ATTRIBUTE: &'static str = "deprivation";
    const ALL: &'static [Self] = &[
        Self::LeastDeprived,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::MostDeprived,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::LeastDeprived => "Least Deprived",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
            Self::MostDeprived => "Most Deprived",
        }
    }
}

impl From<Deprivation> for u8 {
    fn from(d: Deprivation) -> u8 {
        d.code()
    }
}

impl TryFrom<u8> for Deprivation {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| unknown_code(Self::ATTRIBUTE, code))
    }
}
