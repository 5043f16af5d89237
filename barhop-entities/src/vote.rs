use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::EnumString;
use thiserror::Error;

use crate::{id::*, time::*};

pub type VoteChoicePrimitive = i16;

/// A member's ballot choice.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VoteChoice {
    No  = 0,
    Yes = 1,
}

#[derive(Debug, Error)]
#[error("Invalid vote choice primitive: {0}")]
pub struct InvalidVoteChoicePrimitive(VoteChoicePrimitive);

impl TryFrom<i16> for VoteChoice {
    type Error = InvalidVoteChoicePrimitive;
    fn try_from(from: VoteChoicePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidVoteChoicePrimitive(from))
    }
}

impl From<VoteChoice> for VoteChoicePrimitive {
    fn from(from: VoteChoice) -> Self {
        from.to_i16().expect("Vote choice primitive")
    }
}

/// One member's ballot on one submitted place.
///
/// Invariant: at most one vote per (place, voter) pair. Votes are never
/// mutated or deleted through the normal flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub place_id: Id,
    pub voter_id: Id,
    pub choice: VoteChoice,
    pub created_at: Timestamp,
}
