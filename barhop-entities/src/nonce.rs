use std::{fmt, ops::Deref, str::FromStr};

use uuid::Uuid;

use crate::{id::*, time::*};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nonce(Uuid);

impl Nonce {
    pub const STR_LEN: usize = 32;

    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for Nonce {
    fn from(from: Uuid) -> Self {
        Self(from)
    }
}

impl From<Nonce> for Uuid {
    fn from(from: Nonce) -> Self {
        from.0
    }
}

impl AsRef<Uuid> for Nonce {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl Deref for Nonce {
    type Target = Uuid;

    fn deref(&self) -> &Uuid {
        &self.0
    }
}

#[derive(Debug)]
pub struct NonceParseError;

impl fmt::Display for NonceParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "Invalid Nonce")
    }
}

impl FromStr for Nonce {
    type Err = NonceParseError;

    fn from_str(nonce_str: &str) -> Result<Self, Self::Err> {
        nonce_str
            .parse::<Uuid>()
            .map(Into::into)
            .map_err(|_| NonceParseError)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0.as_simple())
    }
}

/// Opaque single-use token payload carried by an invite action link.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InviteNonce {
    pub profile_id: Id,
    pub nonce: Nonce,
}

pub type ActualTokenLen = usize;
pub type NonceString = String;

#[derive(Debug)]
pub enum InviteNonceDecodingError {
    Bs58(bs58::decode::Error),
    Utf8(std::string::FromUtf8Error),
    TooShort(ActualTokenLen),
    Parse(NonceString, NonceParseError),
}

impl InviteNonce {
    pub fn encode_to_string(&self) -> String {
        let nonce = self.nonce.to_string();
        debug_assert_eq!(Nonce::STR_LEN, nonce.len());
        let mut concat = String::with_capacity(self.profile_id.as_str().len() + nonce.len());
        concat += self.profile_id.as_str();
        concat += &nonce;
        bs58::encode(concat).into_string()
    }

    pub fn decode_from_str(encoded: &str) -> Result<InviteNonce, InviteNonceDecodingError> {
        let decoded = bs58::decode(encoded)
            .into_vec()
            .map_err(InviteNonceDecodingError::Bs58)?;
        let mut concat = String::from_utf8(decoded).map_err(InviteNonceDecodingError::Utf8)?;
        if concat.len() < Nonce::STR_LEN {
            return Err(InviteNonceDecodingError::TooShort(concat.len()));
        }
        let id_len = concat.len() - Nonce::STR_LEN;
        let nonce_slice: &str = &concat[id_len..];
        let nonce = nonce_slice
            .parse::<Nonce>()
            .map_err(|err| InviteNonceDecodingError::Parse(nonce_slice.into(), err))?;
        concat.truncate(id_len);
        let profile_id = concat.into();
        Ok(Self { profile_id, nonce })
    }
}

/// A pending invite credential with a limited lifetime.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InviteToken {
    pub invite_nonce: InviteNonce,
    pub expires_at: Timestamp,
}
