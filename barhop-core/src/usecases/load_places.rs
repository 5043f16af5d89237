use super::prelude::*;
use super::{ActorContext, VoteTally};

/// Approved places for the public list and map views.
pub fn load_public_places<R: PlaceRepo>(repo: &R) -> Result<Vec<Place>> {
    Ok(repo.places_with_status(PlaceStatus::Approved)?)
}

/// A single approved place for the public detail page.
pub fn get_public_place_by_slug<R: PlaceRepo>(repo: &R, slug: &str) -> Result<Place> {
    let place = repo
        .try_get_place_by_slug(slug)?
        .ok_or(RepoError::NotFound)?;
    if !place.status.is_public() {
        return Err(Error::Repo(RepoError::NotFound));
    }
    Ok(place)
}

/// The voting pool, visible to every active member.
pub fn load_review_queue<R>(repo: &R) -> Result<Vec<(Place, VoteTally)>>
where
    R: PlaceRepo + VoteRepo,
{
    let places = repo.places_with_status(PlaceStatus::Submitted)?;
    let mut queue = Vec::with_capacity(places.len());
    for place in places {
        let tally = place_tally(repo, &place)?;
        queue.push((place, tally));
    }
    Ok(queue)
}

/// A member's own entries, any status, for the dashboard.
pub fn load_places_of_member<R: PlaceRepo>(repo: &R, actor: &ActorContext) -> Result<Vec<Place>> {
    Ok(repo.places_created_by(actor.profile_id.as_str())?)
}

pub fn place_tally<R: VoteRepo>(repo: &R, place: &Place) -> Result<VoteTally> {
    let yes_count = repo.count_votes_of_place(place.id.as_str(), VoteChoice::Yes)?;
    let no_count = repo.count_votes_of_place(place.id.as_str(), VoteChoice::No)?;
    Ok(VoteTally {
        yes_count,
        no_count,
        status: place.status,
    })
}
