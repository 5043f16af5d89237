use super::prelude::*;

/// Raw place form input as received from the presentation layer.
///
/// Everything is text; multi-select fields arrive as repeated keys.
#[derive(Debug, Clone, Default)]
pub struct PlaceFormData {
    pub title: String,
    pub summary: String,
    pub story: String,
    pub signature_move: String,
    pub best_time: String,
    pub warnings: String,
    pub area: String,
    pub categories: Vec<String>,
    pub vibes: String,
    pub price: String,
    pub lat: String,
    pub lng: String,
    pub images: String,
    pub maps_url: String,
    pub apple_maps_url: String,
    pub instagram_url: String,
    pub website_url: String,
    pub phone: String,
}

/// Typed place payload with explicit absence.
///
/// Optional text fields are `None` when the input was empty, never an
/// empty string. Coordinates that fail to parse are absent, never zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacePayload {
    pub title: String,
    pub summary: Option<String>,
    pub story: Option<String>,
    pub signature_move: Option<String>,
    pub best_time: Option<String>,
    pub warnings: Vec<String>,
    pub area: Option<String>,
    pub categories: Vec<String>,
    pub vibes: Vec<String>,
    pub price: PriceTier,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub links: PlaceLinks,
    pub images: Vec<String>,
}

impl PlacePayload {
    /// Both coordinates present and within range, or nothing.
    pub fn position(&self) -> Option<MapPoint> {
        let (lat, lng) = self.lat.zip(self.lng)?;
        MapPoint::try_from_lat_lng_deg(lat, lng)
    }

    /// Overwrites the content fields of `place`. Identity, ownership,
    /// status and timestamps are left untouched.
    pub fn apply(self, place: &mut Place) {
        let position = self.position();
        let Self {
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
        } = self;
        place.title = title;
        place.summary = summary;
        place.story = story;
        place.signature_move = signature_move;
        place.best_time = best_time;
        place.warnings = warnings;
        place.area = area;
        place.categories = categories;
        place.vibes = vibes;
        place.price = price;
        place.position = position;
        place.links = links;
        place.images = images;
    }
}

/// Pure transform from raw form input to a typed payload.
///
/// Never fails: malformed input degrades to "absent", validity is
/// enforced when the place is submitted.
pub fn normalize_place_form(form: PlaceFormData) -> PlacePayload {
    let PlaceFormData {
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
        images,
        maps_url,
        apple_maps_url,
        instagram_url,
        website_url,
        phone,
    } = form;
    PlacePayload {
        title: parse_text(&title),
        summary: parse_optional(&summary),
        story: parse_optional(&story),
        signature_move: parse_optional(&signature_move),
        best_time: parse_optional(&best_time),
        warnings: parse_warnings(&warnings),
        area: parse_optional(&area),
        categories: parse_multi(categories),
        vibes: parse_delimited_list(&vibes),
        price: PriceTier::from_lossy(&parse_text(&price)),
        lat: parse_number(&lat),
        lng: parse_number(&lng),
        links: PlaceLinks {
            maps_url: parse_text(&maps_url),
            apple_maps_url: parse_optional(&apple_maps_url),
            instagram_url: parse_optional(&instagram_url),
            website_url: parse_optional(&website_url),
            phone: parse_optional(&phone),
        },
        images: parse_delimited_list(&images),
    }
}

fn parse_text(value: &str) -> String {
    value.trim().to_string()
}

fn parse_optional(value: &str) -> Option<String> {
    let text = value.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn parse_number(value: &str) -> Option<f64> {
    let text = value.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

fn parse_delimited_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn parse_warnings(value: &str) -> Vec<String> {
    value
        .split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn parse_multi(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optional_text_becomes_absent() {
        let payload = normalize_place_form(PlaceFormData {
            title: "  Neon Garden  ".into(),
            summary: "   ".into(),
            ..Default::default()
        });
        assert_eq!("Neon Garden", payload.title);
        assert_eq!(None, payload.summary);
    }

    #[test]
    fn lists_are_split_trimmed_and_filtered() {
        let payload = normalize_place_form(PlaceFormData {
            vibes: " cozy , , loud ".into(),
            images: "a.jpg,,b.jpg".into(),
            ..Default::default()
        });
        assert_eq!(vec!["cozy".to_string(), "loud".to_string()], payload.vibes);
        assert_eq!(
            vec!["a.jpg".to_string(), "b.jpg".to_string()],
            payload.images
        );
    }

    #[test]
    fn warnings_split_on_commas_and_newlines() {
        let payload = normalize_place_form(PlaceFormData {
            warnings: "cash only\nqueue after ten, no photos".into(),
            ..Default::default()
        });
        assert_eq!(
            vec![
                "cash only".to_string(),
                "queue after ten".to_string(),
                "no photos".to_string()
            ],
            payload.warnings
        );
    }

    #[test]
    fn multi_select_filters_empties() {
        let payload = normalize_place_form(PlaceFormData {
            categories: vec![" cocktail ".into(), "".into(), "dive".into()],
            ..Default::default()
        });
        assert_eq!(
            vec!["cocktail".to_string(), "dive".to_string()],
            payload.categories
        );
    }

    #[test]
    fn unparsable_coordinates_are_absent_not_zero() {
        let payload = normalize_place_form(PlaceFormData {
            lat: "not a number".into(),
            lng: "".into(),
            ..Default::default()
        });
        assert_eq!(None, payload.lat);
        assert_eq!(None, payload.lng);
        assert_eq!(None, payload.position());
    }

    #[test]
    fn price_collapses_to_known_tiers() {
        let payload = normalize_place_form(PlaceFormData {
            price: "$$".into(),
            ..Default::default()
        });
        assert_eq!(PriceTier::Moderate, payload.price);

        let payload = normalize_place_form(PlaceFormData {
            price: "expensive".into(),
            ..Default::default()
        });
        assert_eq!(PriceTier::Unspecified, payload.price);
    }

    #[test]
    fn position_requires_both_coordinates_in_range() {
        let payload = normalize_place_form(PlaceFormData {
            lat: "48.2".into(),
            lng: "16.37".into(),
            ..Default::default()
        });
        let pos = payload.position().unwrap();
        assert!((pos.lat_deg() - 48.2).abs() < f64::EPSILON);

        let payload = normalize_place_form(PlaceFormData {
            lat: "95.0".into(),
            lng: "16.37".into(),
            ..Default::default()
        });
        assert_eq!(None, payload.position());
    }

    #[test]
    fn maps_url_stays_required_text() {
        let payload = normalize_place_form(PlaceFormData {
            maps_url: "  https://maps.example/x  ".into(),
            ..Default::default()
        });
        assert_eq!("https://maps.example/x", payload.links.maps_url);

        let payload = normalize_place_form(PlaceFormData::default());
        assert_eq!("", payload.links.maps_url);
        assert_eq!(None, payload.links.phone);
    }
}
