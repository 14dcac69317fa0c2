//! CLI value enums and domain type conversions.
//!
//! This module contains the value enums used for CLI argument parsing
//! and their conversions to/from domain types.

use clap::ValueEnum;

use crate::domain::{FrequencyBucket, SortDirection, VisitorType};

// ============================================================================
// Value Enums
// ============================================================================

/// Visitor type for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitorTypeArg {
    /// Regular member
    Regular,
    /// New member
    New,
    /// Visitor
    Visitor,
    /// First-time convert
    #[value(name = "first-time-convert", alias = "convert")]
    FirstTimeConvert,
}

impl std::fmt::Display for VisitorTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::New => write!(f, "new"),
            Self::Visitor => write!(f, "visitor"),
            Self::FirstTimeConvert => write!(f, "first-time-convert"),
        }
    }
}

impl From<VisitorTypeArg> for VisitorType {
    fn from(arg: VisitorTypeArg) -> Self {
        match arg {
            VisitorTypeArg::Regular => Self::Regular,
            VisitorTypeArg::New => Self::New,
            VisitorTypeArg::Visitor => Self::Visitor,
            VisitorTypeArg::FirstTimeConvert => Self::FirstTimeConvert,
        }
    }
}

/// Frequency bucket for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBucketArg {
    /// Attends most gatherings
    High,
    /// Attends occasionally
    Medium,
    /// Rarely seen
    Low,
}

impl std::fmt::Display for FrequencyBucketArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl From<FrequencyBucketArg> for FrequencyBucket {
    fn from(arg: FrequencyBucketArg) -> Self {
        match arg {
            FrequencyBucketArg::High => Self::High,
            FrequencyBucketArg::Medium => Self::Medium,
            FrequencyBucketArg::Low => Self::Low,
        }
    }
}

/// Sort direction for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirectionArg {
    /// Smallest first
    #[default]
    #[value(name = "asc", alias = "ascending")]
    Ascending,
    /// Largest first
    #[value(name = "desc", alias = "descending")]
    Descending,
}

impl std::fmt::Display for SortDirectionArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl From<SortDirectionArg> for SortDirection {
    fn from(arg: SortDirectionArg) -> Self {
        match arg {
            SortDirectionArg::Ascending => Self::Ascending,
            SortDirectionArg::Descending => Self::Descending,
        }
    }
}
