use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::EnumString;
use thiserror::Error;

use crate::{email::*, id::*, time::*};

pub type RolePrimitive = i16;

/// Member roles, ordered by privilege.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Bartender = 0,
    Admin     = 1,
}

impl Default for Role {
    fn default() -> Role {
        Role::Bartender
    }
}

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<i16> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().expect("Role primitive")
    }
}

/// An invited member account.
///
/// An inactive profile has no access to any mutating action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Id,
    pub email: EmailAddress,
    pub display_name: String,
    pub handle: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: Timestamp,
}
