use super::prelude::*;
use super::{allocate_unique_slug, ActorContext, PlacePayload};

/// Creates a new draft from a normalized payload.
///
/// Drafts may be arbitrarily incomplete, but never nameless.
pub fn create_place<R: PlaceRepo>(
    repo: &R,
    actor: &ActorContext,
    payload: PlacePayload,
    at: Timestamp,
) -> Result<Place> {
    if payload.title.is_empty() {
        return Err(Error::Title);
    }
    let slug = allocate_unique_slug(repo, &payload.title, None)?;
    let position = payload.position();
    let PlacePayload {
        title,
        summary,
        story,
        signature_move,
        best_time,
        warnings,
        area,
        categories,
        vibes,
        price,
        links,
        images,
        ..
    } = payload;
    let place = Place {
        id: Id::new(),
        slug,
        created_by: actor.profile_id.clone(),
        status: PlaceStatus::default(),
        title,
        summary,
        story,
        signature_move,
        best_time,
        warnings,
        area,
        categories,
        vibes,
        price,
        position,
        links,
        images,
        created_at: at,
        updated_at: at,
        submitted_at: None,
        approved_at: None,
    };
    log::debug!("Creating draft place {} ({})", place.slug, place.id);
    repo.create_place(&place)?;
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::fixtures, tests::MockDb, *},
        *,
    };

    #[test]
    fn create_draft_with_title_only() {
        let db = MockDb::default();
        let actor = fixtures::active_bartender(&db, "owner");
        let payload = PlacePayload {
            title: "Neon Garden".into(),
            ..Default::default()
        };
        let place = create_place(&db, &actor, payload, Timestamp::now()).unwrap();
        assert_eq!(PlaceStatus::Draft, place.status);
        assert_eq!("neon-garden", place.slug);
        assert_eq!("owner", place.created_by.as_str());
        assert_eq!(None, place.submitted_at);
        assert_eq!(1, db.count_places().unwrap());
    }

    #[test]
    fn reject_nameless_draft() {
        let db = MockDb::default();
        let actor = fixtures::active_bartender(&db, "owner");
        let result = create_place(&db, &actor, PlacePayload::default(), Timestamp::now());
        assert!(matches!(result, Err(Error::Title)));
        assert_eq!(0, db.count_places().unwrap());
    }

    #[test]
    fn second_draft_with_same_title_gets_distinct_slug() {
        let db = MockDb::default();
        let actor = fixtures::active_bartender(&db, "owner");
        let payload = PlacePayload {
            title: "Neon Garden".into(),
            ..Default::default()
        };
        let first = create_place(&db, &actor, payload.clone(), Timestamp::now()).unwrap();
        let second = create_place(&db, &actor, payload, Timestamp::now()).unwrap();
        assert_ne!(first.slug, second.slug);
    }
}
