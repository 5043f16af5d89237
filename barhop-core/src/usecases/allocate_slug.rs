use super::prelude::*;
use crate::util::slug;

/// Derives a unique slug for a place title.
///
/// If the base slug is taken by another record a single random suffix is
/// appended without further collision checking; the UNIQUE constraint of
/// the store catches the negligible residual race. A record may keep its
/// own slug when it is updated (`current_id`).
pub fn allocate_unique_slug<R: PlaceRepo>(
    repo: &R,
    title: &str,
    current_id: Option<&Id>,
) -> Result<String> {
    let mut base = slug::slugify(title);
    if base.is_empty() {
        base = slug::FALLBACK_SLUG.to_string();
    }
    match repo.try_get_place_by_slug(&base)? {
        None => Ok(base),
        Some(existing) if current_id == Some(&existing.id) => Ok(base),
        Some(_) => {
            let suffix = slug::random_suffix(&mut rand::thread_rng());
            Ok(format!("{base}-{suffix}"))
        }
    }
}
