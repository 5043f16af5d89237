use super::*;

/// Casts a ballot and, on quorum, approves the place.
///
/// The insert, the recount and the conditional approval run in a single
/// database transaction. Two concurrent borderline votes cannot both
/// miss the quorum or approve twice: the second writer is serialized
/// behind the first and observes its committed counts.
pub fn cast_vote(
    connections: &sqlite::Connections,
    actor: &usecases::ActorContext,
    place_id: &Id,
    choice: VoteChoice,
) -> Result<usecases::VoteTally> {
    let tally = connections.exclusive()?.transaction(|conn| {
        usecases::cast_vote(conn, actor, place_id, choice, Timestamp::now()).map_err(|err| {
            warn!("Failed to cast vote on place {place_id}: {err}");
            err
        })
    })?;
    Ok(tally)
}
