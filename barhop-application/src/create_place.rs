use super::*;

pub fn create_place(
    connections: &sqlite::Connections,
    actor: &usecases::ActorContext,
    payload: usecases::PlacePayload,
) -> Result<Place> {
    let place = connections.exclusive()?.transaction(|conn| {
        usecases::create_place(conn, actor, payload, Timestamp::now()).map_err(|err| {
            warn!("Failed to create place: {err}");
            err
        })
    })?;
    Ok(place)
}
