use super::*;

pub fn update_member(
    connections: &sqlite::Connections,
    actor: &usecases::ActorContext,
    update: usecases::MemberUpdate,
) -> Result<Profile> {
    let profile_id = update.profile_id.clone();
    let profile = connections.exclusive()?.transaction(|conn| {
        usecases::update_member(conn, actor, update).map_err(|err| {
            warn!("Failed to update member {profile_id}: {err}");
            err
        })
    })?;
    Ok(profile)
}
