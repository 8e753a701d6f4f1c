// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The ad format of a placement slot.
///
/// Each format carries conventional pixel dimensions (e.g. a leaderboard
/// is 728x90), but the authoritative dimensions live on the placement
/// record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementType {
    /// Wide horizontal banner, typically across the top of a page.
    Leaderboard,
    /// Tall vertical banner, typically along a page edge.
    Skyscraper,
    /// Medium rectangle, typically inline with content.
    Rectangle,
    /// Half-page unit in a sidebar column.
    Sidebar,
}

impl FromStr for PlacementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leaderboard" => Ok(Self::Leaderboard),
            "skyscraper" => Ok(Self::Skyscraper),
            "rectangle" => Ok(Self::Rectangle),
            "sidebar" => Ok(Self::Sidebar),
            _ => Err(DomainError::InvalidPlacementType(s.to_string())),
        }
    }
}

impl std::fmt::Display for PlacementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PlacementType {
    /// Converts this placement type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Leaderboard => "leaderboard",
            Self::Skyscraper => "skyscraper",
            Self::Rectangle => "rectangle",
            Self::Sidebar => "sidebar",
        }
    }
}

/// Whether a placement slot can currently be booked.
///
/// Availability is derived, never stored: a placement is booked exactly
/// while a non-terminal booking occupies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    /// The placement has no occupying booking.
    Available,
    /// A non-terminal booking occupies the placement.
    Booked,
}

impl FromStr for AvailabilityStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "booked" => Ok(Self::Booked),
            _ => Err(DomainError::InvalidAvailabilityStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AvailabilityStatus {
    /// Converts this availability status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
        }
    }
}

/// Population density classification of a pricing region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopulationDensity {
    /// Rural or sparsely populated region.
    Low,
    /// Suburban or mid-size metro region.
    Medium,
    /// Major metro region.
    High,
    /// Dense urban core.
    VeryHigh,
}

impl FromStr for PopulationDensity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "very_high" => Ok(Self::VeryHigh),
            _ => Err(DomainError::InvalidPopulationDensity(s.to_string())),
        }
    }
}

impl std::fmt::Display for PopulationDensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PopulationDensity {
    /// Converts this population density to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}
