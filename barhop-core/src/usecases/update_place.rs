use super::prelude::*;
use super::{allocate_unique_slug, authorize_place_mutation, ActorContext, PlacePayload};

/// Saves a normalized payload over an existing place.
///
/// Owners may edit drafts, pending submissions and rejected entries;
/// everything else requires the admin role. A changed title re-allocates
/// the slug, keeping the record's own slug when it still fits.
pub fn update_place<R: PlaceRepo>(
    repo: &R,
    actor: &ActorContext,
    id: &Id,
    payload: PlacePayload,
    at: Timestamp,
) -> Result<Place> {
    let mut place = repo.get_place(id.as_str())?;
    authorize_place_mutation(actor, &place)?;
    if !actor.is_admin() && !place.status.is_owner_editable() {
        return Err(Error::NotEditable);
    }
    if !payload.title.is_empty() && payload.title != place.title {
        place.slug = allocate_unique_slug(repo, &payload.title, Some(&place.id))?;
    }
    payload.apply(&mut place);
    place.updated_at = at;
    repo.update_place(&place)?;
    Ok(place)
}
