mod allocate_slug;
mod authorize;
mod cast_vote;
mod consume_invite;
mod create_place;
mod error;
mod invite_member;
mod load_places;
mod place_form;
mod review_place;
mod submit_place;
mod update_member;
mod update_place;

#[cfg(test)]
pub mod tests;

pub use self::{
    allocate_slug::*, authorize::*, cast_vote::*, consume_invite::*, create_place::*,
    error::Error, invite_member::*, load_places::*, place_form::*, review_place::*,
    submit_place::*, update_member::*, update_place::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, RepoError};
}
