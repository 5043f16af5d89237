use super::*;

impl<'a> InviteTokenRepo for DbReadOnly<'a> {
    fn replace_invite_token(&self, _token: InviteToken) -> Result<InviteNonce> {
        unreachable!();
    }
    fn consume_invite_token(&self, _invite_nonce: &InviteNonce) -> Result<InviteToken> {
        unreachable!();
    }
    fn delete_expired_invite_tokens(&self, _expired_before: Timestamp) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> InviteTokenRepo for DbReadWrite<'a> {
    fn replace_invite_token(&self, token: InviteToken) -> Result<InviteNonce> {
        replace_invite_token(&mut self.conn.borrow_mut(), token)
    }
    fn consume_invite_token(&self, invite_nonce: &InviteNonce) -> Result<InviteToken> {
        consume_invite_token(&mut self.conn.borrow_mut(), invite_nonce)
    }
    fn delete_expired_invite_tokens(&self, expired_before: Timestamp) -> Result<usize> {
        delete_expired_invite_tokens(&mut self.conn.borrow_mut(), expired_before)
    }
}

impl<'a> InviteTokenRepo for DbConnection<'a> {
    fn replace_invite_token(&self, token: InviteToken) -> Result<InviteNonce> {
        replace_invite_token(&mut self.conn.borrow_mut(), token)
    }
    fn consume_invite_token(&self, invite_nonce: &InviteNonce) -> Result<InviteToken> {
        consume_invite_token(&mut self.conn.borrow_mut(), invite_nonce)
    }
    fn delete_expired_invite_tokens(&self, expired_before: Timestamp) -> Result<usize> {
        delete_expired_invite_tokens(&mut self.conn.borrow_mut(), expired_before)
    }
}

fn replace_invite_token(conn: &mut SqliteConnection, token: InviteToken) -> Result<InviteNonce> {
    let new_token = models::NewProfileToken {
        profile_id: token.invite_nonce.profile_id.as_str(),
        nonce: token.invite_nonce.nonce.to_string(),
        expires_at: token.expires_at.into_seconds(),
    };
    // At most one pending invite per profile.
    diesel::replace_into(schema::profile_token::table)
        .values(&new_token)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(token.invite_nonce)
}

fn consume_invite_token(
    conn: &mut SqliteConnection,
    invite_nonce: &InviteNonce,
) -> Result<InviteToken> {
    use schema::profile_token::dsl;
    let entity = dsl::profile_token
        .filter(dsl::profile_id.eq(invite_nonce.profile_id.as_str()))
        .filter(dsl::nonce.eq(invite_nonce.nonce.to_string()))
        .first::<models::ProfileTokenEntity>(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(dsl::profile_token.filter(dsl::profile_id.eq(&entity.profile_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    entity.try_into()
}

fn delete_expired_invite_tokens(
    conn: &mut SqliteConnection,
    expired_before: Timestamp,
) -> Result<usize> {
    use schema::profile_token::dsl;
    let count = diesel::delete(
        dsl::profile_token.filter(dsl::expires_at.lt(expired_before.into_seconds())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    Ok(count)
}
