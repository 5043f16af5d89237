use crate::repositories;
use thiserror::Error;

use super::submit_place::PlaceField;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is required")]
    Title,
    #[error("Save the place as a draft before submitting it")]
    SaveDraftFirst,
    #[error("Missing required field: {0}")]
    MissingField(PlaceField),
    #[error("Invalid email address")]
    Email,
    #[error("Invalid role")]
    Role,
    #[error("Invalid place status")]
    Status,
    #[error("Invalid vote payload")]
    VotePayload,
    #[error("Only submitted places can be voted on")]
    VoteNotOpen,
    #[error("You cannot vote on your own place")]
    SelfVote,
    #[error("You have already voted on this place")]
    AlreadyVoted,
    #[error("This place cannot be edited")]
    NotEditable,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Your account is not yet active")]
    NotInvited,
    #[error("Token invalid")]
    TokenInvalid,
    #[error("Token expired")]
    TokenExpired,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<barhop_entities::place::InvalidPlaceStatusPrimitive> for Error {
    fn from(_: barhop_entities::place::InvalidPlaceStatusPrimitive) -> Self {
        Self::Status
    }
}

impl From<barhop_entities::profile::InvalidRolePrimitive> for Error {
    fn from(_: barhop_entities::profile::InvalidRolePrimitive) -> Self {
        Self::Role
    }
}

impl From<barhop_entities::vote::InvalidVoteChoicePrimitive> for Error {
    fn from(_: barhop_entities::vote::InvalidVoteChoicePrimitive) -> Self {
        Self::VotePayload
    }
}

impl From<barhop_entities::email::EmailAddressParseError> for Error {
    fn from(_: barhop_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<barhop_entities::nonce::InviteNonceDecodingError> for Error {
    fn from(_: barhop_entities::nonce::InviteNonceDecodingError) -> Self {
        Self::TokenInvalid
    }
}
