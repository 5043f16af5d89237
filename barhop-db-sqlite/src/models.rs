#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use anyhow::anyhow;

use barhop_core::{entities as e, RepoError};

use super::{
    schema::*,
    util::{join_lines, join_list, split_lines, split_list},
};

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = place, treat_none_as_null = true)]
pub struct NewPlace {
    pub id: String,
    pub slug: String,
    pub created_by: String,
    pub status: i16,
    pub title: String,
    pub summary: Option<String>,
    pub story: Option<String>,
    pub signature_move: Option<String>,
    pub best_time: Option<String>,
    pub warnings: Option<String>,
    pub area: Option<String>,
    pub categories: Option<String>,
    pub vibes: Option<String>,
    pub price: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub maps_url: String,
    pub apple_maps_url: Option<String>,
    pub instagram_url: Option<String>,
    pub website_url: Option<String>,
    pub phone: Option<String>,
    pub images: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub submitted_at: Option<i64>,
    pub approved_at: Option<i64>,
}

impl From<&e::Place> for NewPlace {
    fn from(from: &e::Place) -> Self {
        Self {
            id: from.id.to_string(),
            slug: from.slug.clone(),
            created_by: from.created_by.to_string(),
            status: from.status.into(),
            title: from.title.clone(),
            summary: from.summary.clone(),
            story: from.story.clone(),
            signature_move: from.signature_move.clone(),
            best_time: from.best_time.clone(),
            warnings: join_lines(&from.warnings),
            area: from.area.clone(),
            categories: join_list(&from.categories),
            vibes: join_list(&from.vibes),
            price: from.price.as_str().to_string(),
            lat: from.position.map(|pos| pos.lat_deg()),
            lng: from.position.map(|pos| pos.lng_deg()),
            maps_url: from.links.maps_url.clone(),
            apple_maps_url: from.links.apple_maps_url.clone(),
            instagram_url: from.links.instagram_url.clone(),
            website_url: from.links.website_url.clone(),
            phone: from.links.phone.clone(),
            images: join_list(&from.images),
            created_at: from.created_at.into_seconds(),
            updated_at: from.updated_at.into_seconds(),
            submitted_at: from.submitted_at.map(e::Timestamp::into_seconds),
            approved_at: from.approved_at.map(e::Timestamp::into_seconds),
        }
    }
}

#[derive(Queryable)]
pub struct PlaceEntity {
    pub id: String,
    pub slug: String,
    pub created_by: String,
    pub status: i16,
    pub title: String,
    pub summary: Option<String>,
    pub story: Option<String>,
    pub signature_move: Option<String>,
    pub best_time: Option<String>,
    pub warnings: Option<String>,
    pub area: Option<String>,
    pub categories: Option<String>,
    pub vibes: Option<String>,
    pub price: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub maps_url: String,
    pub apple_maps_url: Option<String>,
    pub instagram_url: Option<String>,
    pub website_url: Option<String>,
    pub phone: Option<String>,
    pub images: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub submitted_at: Option<i64>,
    pub approved_at: Option<i64>,
}

impl TryFrom<PlaceEntity> for e::Place {
    type Error = RepoError;

    fn try_from(from: PlaceEntity) -> Result<Self, Self::Error> {
        let PlaceEntity {
            id,
            slug,
            created_by,
            status,
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
            lat,
            lng,
            maps_url,
            apple_maps_url,
            instagram_url,
            website_url,
            phone,
            images,
            created_at,
            updated_at,
            submitted_at,
            approved_at,
        } = from;
        let status = e::PlaceStatus::try_from(status)
            .map_err(|_| RepoError::Other(anyhow!("Invalid place status: {status}")))?;
        let price = price
            .parse::<e::PriceTier>()
            .map_err(|_| RepoError::Other(anyhow!("Invalid price tier: {price}")))?;
        let position = match (lat, lng) {
            (Some(lat), Some(lng)) => {
                let pos = e::MapPoint::try_from_lat_lng_deg(lat, lng);
                if pos.is_none() {
                    log::warn!("Ignoring out-of-range position of place {id}: {lat},{lng}");
                }
                pos
            }
            _ => None,
        };
        Ok(Self {
            id: id.into(),
            slug,
            created_by: created_by.into(),
            status,
            title,
            summary,
            story,
            signature_move,
            best_time,
            warnings: split_lines(warnings),
            area,
            categories: split_list(categories),
            vibes: split_list(vibes),
            price,
            position,
            links: e::PlaceLinks {
                maps_url,
                apple_maps_url,
                instagram_url,
                website_url,
                phone,
            },
            images: split_list(images),
            created_at: e::Timestamp::from_seconds(created_at),
            updated_at: e::Timestamp::from_seconds(updated_at),
            submitted_at: submitted_at.map(e::Timestamp::from_seconds),
            approved_at: approved_at.map(e::Timestamp::from_seconds),
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = profile, treat_none_as_null = true)]
pub struct NewProfile {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub handle: Option<String>,
    pub role: i16,
    pub is_active: bool,
    pub created_at: i64,
}

impl From<&e::Profile> for NewProfile {
    fn from(from: &e::Profile) -> Self {
        Self {
            id: from.id.to_string(),
            email: from.email.as_str().to_string(),
            display_name: from.display_name.clone(),
            handle: from.handle.clone(),
            role: from.role.into(),
            is_active: from.is_active,
            created_at: from.created_at.into_seconds(),
        }
    }
}

#[derive(Queryable)]
pub struct ProfileEntity {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub handle: Option<String>,
    pub role: i16,
    pub is_active: bool,
    pub created_at: i64,
}

impl TryFrom<ProfileEntity> for e::Profile {
    type Error = RepoError;

    fn try_from(from: ProfileEntity) -> Result<Self, Self::Error> {
        let role = e::Role::try_from(from.role)
            .map_err(|_| RepoError::Other(anyhow!("Invalid role: {}", from.role)))?;
        Ok(Self {
            id: from.id.into(),
            email: e::EmailAddress::new_unchecked(from.email),
            display_name: from.display_name,
            handle: from.handle,
            role,
            is_active: from.is_active,
            created_at: e::Timestamp::from_seconds(from.created_at),
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = place_vote)]
pub struct NewPlaceVote<'a> {
    pub place_id: &'a str,
    pub voter_id: &'a str,
    pub vote: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PlaceVoteEntity {
    pub place_id: String,
    pub voter_id: String,
    pub vote: i16,
    pub created_at: i64,
}

impl TryFrom<PlaceVoteEntity> for e::Vote {
    type Error = RepoError;

    fn try_from(from: PlaceVoteEntity) -> Result<Self, Self::Error> {
        let choice = e::VoteChoice::try_from(from.vote)
            .map_err(|_| RepoError::Other(anyhow!("Invalid vote choice: {}", from.vote)))?;
        Ok(Self {
            place_id: from.place_id.into(),
            voter_id: from.voter_id.into(),
            choice,
            created_at: e::Timestamp::from_seconds(from.created_at),
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = profile_token)]
pub struct NewProfileToken<'a> {
    pub profile_id: &'a str,
    pub nonce: String,
    pub expires_at: i64,
}

#[derive(Queryable)]
pub struct ProfileTokenEntity {
    pub profile_id: String,
    pub nonce: String,
    pub expires_at: i64,
}

impl TryFrom<ProfileTokenEntity> for e::InviteToken {
    type Error = RepoError;

    fn try_from(from: ProfileTokenEntity) -> Result<Self, Self::Error> {
        let nonce = from
            .nonce
            .parse::<e::Nonce>()
            .map_err(|_| RepoError::Other(anyhow!("Invalid nonce: {}", from.nonce)))?;
        Ok(Self {
            invite_nonce: e::InviteNonce {
                profile_id: from.profile_id.into(),
                nonce,
            },
            expires_at: e::Timestamp::from_seconds(from.expires_at),
        })
    }
}
