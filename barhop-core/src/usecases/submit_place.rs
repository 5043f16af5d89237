use std::fmt;

use super::prelude::*;
use super::{authorize_place_mutation, ActorContext, PlacePayload};

/// A field that must be filled before a place can enter the voting pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceField {
    Title,
    Area,
    Categories,
    Vibes,
    Summary,
    Story,
    SignatureMove,
    BestTime,
    MapsUrl,
    Latitude,
    Longitude,
}

impl PlaceField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Area => "area",
            Self::Categories => "categories",
            Self::Vibes => "vibes",
            Self::Summary => "summary",
            Self::Story => "story",
            Self::SignatureMove => "signature move",
            Self::BestTime => "best time",
            Self::MapsUrl => "maps link",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

impl fmt::Display for PlaceField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks that a payload is complete enough to submit, naming the first
/// missing field. Drafts are exempt from this check.
pub fn validate_for_submit(payload: &PlacePayload) -> Result<()> {
    let missing = if payload.title.is_empty() {
        Some(PlaceField::Title)
    } else if payload.area.is_none() {
        Some(PlaceField::Area)
    } else if payload.categories.is_empty() {
        Some(PlaceField::Categories)
    } else if payload.vibes.is_empty() {
        Some(PlaceField::Vibes)
    } else if payload.summary.is_none() {
        Some(PlaceField::Summary)
    } else if payload.story.is_none() {
        Some(PlaceField::Story)
    } else if payload.signature_move.is_none() {
        Some(PlaceField::SignatureMove)
    } else if payload.best_time.is_none() {
        Some(PlaceField::BestTime)
    } else if payload.links.maps_url.is_empty() {
        Some(PlaceField::MapsUrl)
    } else if payload.lat.is_none() {
        Some(PlaceField::Latitude)
    } else if payload.lng.is_none() {
        Some(PlaceField::Longitude)
    } else {
        None
    };
    match missing {
        Some(field) => Err(Error::MissingField(field)),
        None => Ok(()),
    }
}

/// Moves an editable place into the voting pool.
pub fn submit_place<R: PlaceRepo>(
    repo: &R,
    actor: &ActorContext,
    id: &Id,
    at: Timestamp,
) -> Result<Place> {
    let mut place = repo.get_place(id.as_str())?;
    authorize_place_mutation(actor, &place)?;
    if !place.status.is_owner_editable() {
        return Err(Error::NotEditable);
    }
    log::info!("Submitting place {} for review", place.id);
    place.apply_status(PlaceStatus::Submitted, at);
    repo.update_place(&place)?;
    Ok(place)
}
