/// External links of a place.
///
/// The links are kept as plain text: form input degrades to "absent"
/// instead of failing, and URL validity is checked when a place is
/// submitted for review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceLinks {
    pub maps_url: String,
    pub apple_maps_url: Option<String>,
    pub instagram_url: Option<String>,
    pub website_url: Option<String>,
    pub phone: Option<String>,
}
