use super::prelude::*;

/// Redeems an invite action link and returns the profile the session
/// should be established for. The token is single-use: a consumed or
/// expired nonce cannot be redeemed again.
pub fn consume_invite_token<R>(repo: &R, encoded_token: &str, at: Timestamp) -> Result<Profile>
where
    R: InviteTokenRepo + ProfileRepo,
{
    let invite_nonce = InviteNonce::decode_from_str(encoded_token)?;
    let token = match repo.consume_invite_token(&invite_nonce) {
        Err(RepoError::NotFound) => return Err(Error::TokenInvalid),
        other => other?,
    };
    debug_assert_eq!(token.invite_nonce, invite_nonce);
    if token.expires_at < at {
        return Err(Error::TokenExpired);
    }
    let profile = repo.get_profile(invite_nonce.profile_id.as_str())?;
    if !profile.is_active {
        return Err(Error::NotInvited);
    }
    Ok(profile)
}

pub fn delete_expired_invite_tokens<R: InviteTokenRepo>(repo: &R, at: Timestamp) -> Result<usize> {
    Ok(repo.delete_expired_invite_tokens(at)?)
}
