// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use barhop_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod place;
mod profile;
mod profile_token;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}
