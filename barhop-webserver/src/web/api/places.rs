use super::*;
use barhop_core::repositories::PlaceRepo as _;

/// Public list/map data. Members may additionally filter by status to
/// render their dashboard and the review pages.
#[rocket::get("/places?<status>")]
pub fn get_places(
    db: sqlite::Connections,
    account: Option<Account>,
    status: Option<&str>,
) -> Result<Vec<json::Place>> {
    let places = match status {
        None => {
            let db = db.shared().map_err(Error::Other)?;
            usecases::load_public_places(&db)?
        }
        Some(status) => {
            let account = account.ok_or(Error::from(usecases::Error::Unauthorized))?;
            let actor = resolve_actor(&db, &account)?;
            let status = status
                .parse::<PlaceStatus>()
                .map_err(|_| Error::from(usecases::Error::Status))?;
            let db = db.shared().map_err(Error::Other)?;
            if actor.is_admin() {
                db.places_with_status(status)?
            } else {
                // Members only see their own entries beyond the public set.
                usecases::load_places_of_member(&db, &actor)?
                    .into_iter()
                    .filter(|place| place.status == status)
                    .collect()
            }
        }
    };
    Ok(Json(places.into_iter().map(Into::into).collect()))
}

/// Public detail page data, addressed by slug.
#[rocket::get("/places/<slug>")]
pub fn get_place(db: sqlite::Connections, slug: &str) -> Result<json::Place> {
    let db = db.shared().map_err(Error::Other)?;
    let place = usecases::get_public_place_by_slug(&db, slug)?;
    Ok(Json(place.into()))
}

/// The voting pool with the current tallies, for active members.
#[rocket::get("/review-queue")]
pub fn get_review_queue(
    db: sqlite::Connections,
    account: Option<Account>,
) -> Result<Vec<json::ReviewQueueEntry>> {
    let account = account.ok_or(Error::from(usecases::Error::Unauthorized))?;
    let _actor = resolve_actor(&db, &account)?;
    let db = db.shared().map_err(Error::Other)?;
    let queue = usecases::load_review_queue(&db)?;
    Ok(Json(
        queue
            .into_iter()
            .map(|(place, tally)| json::ReviewQueueEntry {
                place: place.into(),
                tally: tally.into(),
            })
            .collect(),
    ))
}
