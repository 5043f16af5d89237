use super::*;

pub fn update_place(
    connections: &sqlite::Connections,
    actor: &usecases::ActorContext,
    id: &Id,
    payload: usecases::PlacePayload,
) -> Result<Place> {
    let place = connections.exclusive()?.transaction(|conn| {
        usecases::update_place(conn, actor, id, payload, Timestamp::now()).map_err(|err| {
            warn!("Failed to update place {id}: {err}");
            err
        })
    })?;
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn owner_fills_in_a_draft() {
        let fixture = BackendFixture::new();
        let actor = fixture.create_member("owner", Role::Bartender);
        let draft = fixture.create_draft(&actor, "Neon Garden");

        let payload = usecases::PlacePayload {
            title: "Neon Garden".into(),
            area: Some("Old Harbor".into()),
            vibes: vec!["lush".into()],
            ..Default::default()
        };
        let updated =
            flows::update_place(&fixture.db_connections, &actor, &draft.id, payload).unwrap();
        assert_eq!(Some("Old Harbor".to_string()), updated.area);
        assert_eq!(vec!["lush".to_string()], updated.vibes);
        assert_eq!(updated, fixture.get_place(draft.id.as_str()));
    }

    #[test]
    fn stranger_cannot_update() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_member("owner", Role::Bartender);
        let stranger = fixture.create_member("stranger", Role::Bartender);
        let draft = fixture.create_draft(&owner, "Neon Garden");

        let result = flows::update_place(
            &fixture.db_connections,
            &stranger,
            &draft.id,
            usecases::PlacePayload {
                title: "Neon Garden".into(),
                ..Default::default()
            },
        );
        assert!(matches!(
            result.unwrap_err().parameter_error(),
            Some(usecases::Error::Forbidden)
        ));
    }
}
