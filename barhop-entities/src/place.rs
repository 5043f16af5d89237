use std::{fmt, str::FromStr};

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{EnumIter, EnumString};
use thiserror::Error;

use crate::{geo::*, id::*, links::*, time::*};

pub type PlaceStatusPrimitive = i16;

/// Lifecycle status of a place recommendation.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlaceStatus {
    Rejected  = -1,
    Archived  =  0,
    Draft     =  1,
    Submitted =  2,
    Approved  =  3,
}

impl PlaceStatus {
    pub const fn default() -> Self {
        Self::Draft
    }

    /// Owners may keep editing drafts, pending submissions and
    /// rejected entries. Approved and archived entries are admin-only.
    pub fn is_owner_editable(self) -> bool {
        matches!(self, Self::Draft | Self::Submitted | Self::Rejected)
    }

    pub fn is_public(self) -> bool {
        self == Self::Approved
    }
}

#[derive(Debug, Error)]
#[error("Invalid place status primitive: {0}")]
pub struct InvalidPlaceStatusPrimitive(PlaceStatusPrimitive);

impl TryFrom<i16> for PlaceStatus {
    type Error = InvalidPlaceStatusPrimitive;
    fn try_from(from: PlaceStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPlaceStatusPrimitive(from))
    }
}

impl From<PlaceStatus> for PlaceStatusPrimitive {
    fn from(from: PlaceStatus) -> Self {
        from.to_i16().expect("Place status primitive")
    }
}

/// Price tier as displayed on the cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceTier {
    #[default]
    Unspecified,
    Budget,
    Moderate,
    Upscale,
}

impl PriceTier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
        }
    }

    /// Collapses anything that is not one of the four literal tiers
    /// to [`Self::Unspecified`].
    pub fn from_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

#[derive(Debug, Error)]
#[error("Invalid price tier")]
pub struct PriceTierParseError;

impl FromStr for PriceTier {
    type Err = PriceTierParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unspecified),
            "$" => Ok(Self::Budget),
            "$$" => Ok(Self::Moderate),
            "$$$" => Ok(Self::Upscale),
            _ => Err(PriceTierParseError),
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A candidate or published bar recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub slug: String,
    pub created_by: Id,
    pub status: PlaceStatus,
    pub title: String,
    pub summary: Option<String>,
    pub story: Option<String>,
    pub signature_move: Option<String>,
    pub best_time: Option<String>,
    pub warnings: Vec<String>,
    pub area: Option<String>,
    pub categories: Vec<String>,
    pub vibes: Vec<String>,
    pub price: PriceTier,
    pub position: Option<MapPoint>,
    pub links: PlaceLinks,
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub submitted_at: Option<Timestamp>,
    pub approved_at: Option<Timestamp>,
}

impl Place {
    /// Moves the place into `status` and maintains the transition
    /// timestamps: submission and approval record the moment of the
    /// transition, a rejection revokes a previous approval.
    pub fn apply_status(&mut self, status: PlaceStatus, at: Timestamp) {
        match status {
            PlaceStatus::Submitted => {
                self.submitted_at = Some(at);
            }
            PlaceStatus::Approved => {
                self.approved_at = Some(at);
            }
            PlaceStatus::Rejected => {
                self.approved_at = None;
            }
            PlaceStatus::Draft | PlaceStatus::Archived => (),
        }
        self.status = status;
        self.updated_at = at;
    }

    pub fn is_owned_by(&self, profile_id: &Id) -> bool {
        self.created_by == *profile_id
    }
}
