use super::prelude::*;
use super::{authorize_role, ActorContext};

/// Admin override for the place status, covering approval, rejection and
/// archival outside the voting flow.
pub fn review_place<R: PlaceRepo>(
    repo: &R,
    actor: &ActorContext,
    id: &Id,
    status: PlaceStatus,
    at: Timestamp,
) -> Result<Place> {
    authorize_role(actor, Role::Admin)?;
    let mut place = repo.get_place(id.as_str())?;
    log::info!(
        "Changing status of place {} from {} to {}",
        place.id,
        place.status,
        status
    );
    place.apply_status(status, at);
    repo.update_place(&place)?;
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::fixtures, tests::MockDb, *},
        *,
    };
    use barhop_entities::builders::*;

    #[test]
    fn bartender_cannot_override_status() {
        let db = MockDb::default();
        let actor = fixtures::active_bartender(&db, "owner");
        db.places
            .borrow_mut()
            .push(Place::build().id("p1").created_by("owner").finish());
        let result = review_place(
            &db,
            &actor,
            &"p1".into(),
            PlaceStatus::Approved,
            Timestamp::now(),
        );
        assert!(matches!(result, Err(Error::Forbidden)));
    }

    #[test]
    fn admin_rejects_an_approved_place() {
        let db = MockDb::default();
        let actor = fixtures::active_admin(&db, "boss");
        db.places.borrow_mut().push(
            Place::build()
                .id("p1")
                .created_by("owner")
                .status(PlaceStatus::Submitted)
                .finish(),
        );
        let approved = review_place(
            &db,
            &actor,
            &"p1".into(),
            PlaceStatus::Approved,
            Timestamp::from_seconds(100),
        )
        .unwrap();
        assert_eq!(Some(Timestamp::from_seconds(100)), approved.approved_at);

        let rejected = review_place(
            &db,
            &actor,
            &"p1".into(),
            PlaceStatus::Rejected,
            Timestamp::from_seconds(200),
        )
        .unwrap();
        assert_eq!(PlaceStatus::Rejected, rejected.status);
        assert_eq!(None, rejected.approved_at);
    }

    #[test]
    fn admin_archives_any_place() {
        let db = MockDb::default();
        let actor = fixtures::active_admin(&db, "boss");
        db.places
            .borrow_mut()
            .push(Place::build().id("p1").created_by("owner").finish());
        let place = review_place(
            &db,
            &actor,
            &"p1".into(),
            PlaceStatus::Archived,
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(PlaceStatus::Archived, place.status);
    }
}
