use super::*;

pub fn consume_invite(connections: &sqlite::Connections, token: &str) -> Result<Profile> {
    let profile = connections.exclusive()?.transaction(|conn| {
        usecases::consume_invite_token(conn, token, Timestamp::now()).map_err(|err| {
            warn!("Failed to redeem invite token: {err}");
            err
        })
    })?;
    Ok(profile)
}

pub fn delete_expired_invite_tokens(connections: &sqlite::Connections) -> Result<usize> {
    let count = connections
        .exclusive()?
        .transaction(|conn| usecases::delete_expired_invite_tokens(conn, Timestamp::now()))?;
    if count > 0 {
        info!("Deleted {count} expired invite tokens");
    }
    Ok(count)
}
