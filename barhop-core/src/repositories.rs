// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PlaceRepo {
    fn create_place(&self, place: &Place) -> Result<()>;
    fn update_place(&self, place: &Place) -> Result<()>;

    fn get_place(&self, id: &str) -> Result<Place>;
    fn try_get_place_by_slug(&self, slug: &str) -> Result<Option<Place>>;

    fn places_with_status(&self, status: PlaceStatus) -> Result<Vec<Place>>;
    fn places_created_by(&self, profile_id: &str) -> Result<Vec<Place>>;
    fn count_places(&self) -> Result<usize>;

    // Compare-and-swap on the status column: the place is only approved
    // if it is still submitted. Returns the number of updated rows.
    fn approve_place_if_submitted(&self, id: &str, at: Timestamp) -> Result<usize>;
}

pub trait VoteRepo {
    // Fails with `Error::AlreadyExists` if the voter has already cast
    // a ballot on this place.
    fn create_vote(&self, vote: &Vote) -> Result<()>;

    fn count_votes_of_place(&self, place_id: &str, choice: VoteChoice) -> Result<usize>;
}

pub trait ProfileRepo {
    fn create_profile(&self, profile: &Profile) -> Result<()>;
    fn update_profile(&self, profile: &Profile) -> Result<()>;

    fn get_profile(&self, id: &str) -> Result<Profile>;
    fn try_get_profile(&self, id: &str) -> Result<Option<Profile>>;
    fn try_get_profile_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>>;

    fn all_profiles(&self) -> Result<Vec<Profile>>;
    fn count_profiles(&self) -> Result<usize>;
}

pub trait InviteTokenRepo {
    fn replace_invite_token(&self, token: InviteToken) -> Result<InviteNonce>;

    fn consume_invite_token(&self, invite_nonce: &InviteNonce) -> Result<InviteToken>;

    fn delete_expired_invite_tokens(&self, expired_before: Timestamp) -> Result<usize>;
}
