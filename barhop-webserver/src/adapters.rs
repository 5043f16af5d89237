// Serialized representations of the domain entities for the JSON read
// endpoints consumed by the list and map views.

pub mod json {
    use barhop_core::{entities as e, usecases};
    use serde::Serialize;

    #[derive(Debug, Serialize)]
    pub struct Place {
        pub id: String,
        pub slug: String,
        pub status: String,
        pub title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub summary: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub story: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub signature_move: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub best_time: Option<String>,
        pub warnings: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub area: Option<String>,
        pub categories: Vec<String>,
        pub vibes: Vec<String>,
        pub price: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub lat: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub lng: Option<f64>,
        pub links: PlaceLinks,
        pub images: Vec<String>,
        pub created_at: i64,
        pub updated_at: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub submitted_at: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub approved_at: Option<i64>,
    }

    #[derive(Debug, Serialize)]
    pub struct PlaceLinks {
        pub maps_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub apple_maps_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub instagram_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub website_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
    }

    impl From<e::Place> for Place {
        fn from(from: e::Place) -> Self {
            let e::Place {
                id,
                slug,
                created_by: _,
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
                position,
                links,
                images,
                created_at,
                updated_at,
                submitted_at,
                approved_at,
            } = from;
            Self {
                id: id.into(),
                slug,
                status: status.to_string(),
                title,
                summary,
                story,
                signature_move,
                best_time,
                warnings,
                area,
                categories,
                vibes,
                price: price.as_str().to_string(),
                lat: position.map(|pos| pos.lat_deg()),
                lng: position.map(|pos| pos.lng_deg()),
                links: PlaceLinks {
                    maps_url: links.maps_url,
                    apple_maps_url: links.apple_maps_url,
                    instagram_url: links.instagram_url,
                    website_url: links.website_url,
                    phone: links.phone,
                },
                images,
                created_at: created_at.into_seconds(),
                updated_at: updated_at.into_seconds(),
                submitted_at: submitted_at.map(e::Timestamp::into_seconds),
                approved_at: approved_at.map(e::Timestamp::into_seconds),
            }
        }
    }

    #[derive(Debug, Serialize)]
    pub struct VoteTally {
        pub yes_count: usize,
        pub no_count: usize,
        pub status: String,
    }

    impl From<usecases::VoteTally> for VoteTally {
        fn from(from: usecases::VoteTally) -> Self {
            Self {
                yes_count: from.yes_count,
                no_count: from.no_count,
                status: from.status.to_string(),
            }
        }
    }

    #[derive(Debug, Serialize)]
    pub struct ReviewQueueEntry {
        pub place: Place,
        pub tally: VoteTally,
    }

    #[derive(Debug, Serialize)]
    pub struct Member {
        pub id: String,
        pub email: String,
        pub display_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub handle: Option<String>,
        pub role: String,
        pub is_active: bool,
    }

    impl From<e::Profile> for Member {
        fn from(from: e::Profile) -> Self {
            Self {
                id: from.id.into(),
                email: from.email.into_string(),
                display_name: from.display_name,
                handle: from.handle,
                role: from.role.to_string(),
                is_active: from.is_active,
            }
        }
    }
}
