use super::*;

pub fn submit_place(
    connections: &sqlite::Connections,
    actor: &usecases::ActorContext,
    id: &Id,
) -> Result<Place> {
    let place = connections.exclusive()?.transaction(|conn| {
        usecases::submit_place(conn, actor, id, Timestamp::now()).map_err(|err| {
            warn!("Failed to submit place {id}: {err}");
            err
        })
    })?;
    Ok(place)
}
