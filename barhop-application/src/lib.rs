#[macro_use]
extern crate log;

mod cast_vote;
mod consume_invite;
mod create_place;
mod invite_member;
mod review_place;
mod submit_place;
mod update_member;
mod update_place;

pub mod prelude {
    pub use super::{
        cast_vote::*, consume_invite::*, create_place::*, invite_member::*, review_place::*,
        submit_place::*, update_member::*, update_place::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use barhop_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use barhop_db_sqlite::Connections;
}
