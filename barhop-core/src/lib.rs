pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use barhop_entities::{
        email::*, geo::*, id::*, links::*, nonce::*, place::*, profile::*, time::*, vote::*,
    };
}

pub use repositories::Error as RepoError;
