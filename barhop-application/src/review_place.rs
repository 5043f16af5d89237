use super::*;

pub fn review_place(
    connections: &sqlite::Connections,
    actor: &usecases::ActorContext,
    id: &Id,
    status: PlaceStatus,
) -> Result<Place> {
    let place = connections.exclusive()?.transaction(|conn| {
        usecases::review_place(conn, actor, id, status, Timestamp::now()).map_err(|err| {
            warn!("Failed to change status of place {id}: {err}");
            err
        })
    })?;
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn admin_overrides_the_vote() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_member("owner", Role::Bartender);
        let admin = fixture.create_member("boss", Role::Admin);
        let place = fixture.create_submission(&owner, "Neon Garden");

        let rejected = flows::review_place(
            &fixture.db_connections,
            &admin,
            &place.id,
            PlaceStatus::Rejected,
        )
        .unwrap();
        assert_eq!(PlaceStatus::Rejected, rejected.status);
        assert_eq!(None, rejected.approved_at);
    }

    #[test]
    fn bartender_cannot_override() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_member("owner", Role::Bartender);
        let place = fixture.create_submission(&owner, "Neon Garden");

        let result = flows::review_place(
            &fixture.db_connections,
            &owner,
            &place.id,
            PlaceStatus::Approved,
        );
        assert!(matches!(
            result.unwrap_err().parameter_error(),
            Some(usecases::Error::Forbidden)
        ));
    }
}
