use std::{cell::RefCell, result};

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for Place {
    fn key(&self) -> &str {
        self.id.as_ref()
    }
}

impl Key for Profile {
    fn key(&self) -> &str {
        self.id.as_ref()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub places: RefCell<Vec<Place>>,
    pub votes: RefCell<Vec<Vote>>,
    pub profiles: RefCell<Vec<Profile>>,
    pub tokens: RefCell<Vec<InviteToken>>,
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    } else {
        objects.push(e);
    }
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

impl PlaceRepo for MockDb {
    fn create_place(&self, place: &Place) -> RepoResult<()> {
        // The store enforces slug uniqueness as well.
        if self
            .places
            .borrow()
            .iter()
            .any(|p| p.slug == place.slug && p.id != place.id)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.places.borrow_mut(), place.clone())
    }

    fn update_place(&self, place: &Place) -> RepoResult<()> {
        update(&mut self.places.borrow_mut(), place)
    }

    fn get_place(&self, id: &str) -> RepoResult<Place> {
        get(&self.places.borrow(), id)
    }

    fn try_get_place_by_slug(&self, slug: &str) -> RepoResult<Option<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    fn places_with_status(&self, status: PlaceStatus) -> RepoResult<Vec<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect())
    }

    fn places_created_by(&self, profile_id: &str) -> RepoResult<Vec<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|p| p.created_by.as_str() == profile_id)
            .cloned()
            .collect())
    }

    fn count_places(&self) -> RepoResult<usize> {
        Ok(self.places.borrow().len())
    }

    fn approve_place_if_submitted(&self, id: &str, at: Timestamp) -> RepoResult<usize> {
        let mut places = self.places.borrow_mut();
        let Some(place) = places.iter_mut().find(|p| p.id.as_str() == id) else {
            return Ok(0);
        };
        if place.status != PlaceStatus::Submitted {
            return Ok(0);
        }
        place.apply_status(PlaceStatus::Approved, at);
        Ok(1)
    }
}

impl VoteRepo for MockDb {
    fn create_vote(&self, vote: &Vote) -> RepoResult<()> {
        let mut votes = self.votes.borrow_mut();
        if votes
            .iter()
            .any(|v| v.place_id == vote.place_id && v.voter_id == vote.voter_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        votes.push(vote.clone());
        Ok(())
    }

    fn count_votes_of_place(&self, place_id: &str, choice: VoteChoice) -> RepoResult<usize> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.place_id.as_str() == place_id && v.choice == choice)
            .count())
    }
}

impl ProfileRepo for MockDb {
    fn create_profile(&self, profile: &Profile) -> RepoResult<()> {
        if self
            .profiles
            .borrow()
            .iter()
            .any(|p| p.email == profile.email && p.id != profile.id)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.profiles.borrow_mut(), profile.clone())
    }

    fn update_profile(&self, profile: &Profile) -> RepoResult<()> {
        update(&mut self.profiles.borrow_mut(), profile)
    }

    fn get_profile(&self, id: &str) -> RepoResult<Profile> {
        get(&self.profiles.borrow(), id)
    }

    fn try_get_profile(&self, id: &str) -> RepoResult<Option<Profile>> {
        Ok(self
            .profiles
            .borrow()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned())
    }

    fn try_get_profile_by_email(&self, email: &EmailAddress) -> RepoResult<Option<Profile>> {
        Ok(self
            .profiles
            .borrow()
            .iter()
            .find(|p| p.email == *email)
            .cloned())
    }

    fn all_profiles(&self) -> RepoResult<Vec<Profile>> {
        Ok(self.profiles.borrow().clone())
    }

    fn count_profiles(&self) -> RepoResult<usize> {
        Ok(self.profiles.borrow().len())
    }
}

impl InviteTokenRepo for MockDb {
    fn replace_invite_token(&self, token: InviteToken) -> RepoResult<InviteNonce> {
        for x in self.tokens.borrow_mut().iter_mut() {
            if x.invite_nonce.profile_id == token.invite_nonce.profile_id {
                *x = token.clone();
                return Ok(token.invite_nonce);
            }
        }
        self.tokens.borrow_mut().push(token.clone());
        Ok(token.invite_nonce)
    }

    fn consume_invite_token(&self, invite_nonce: &InviteNonce) -> RepoResult<InviteToken> {
        let index = self
            .tokens
            .borrow()
            .iter()
            .position(|x| x.invite_nonce == *invite_nonce);
        match index {
            Some(index) => Ok(self.tokens.borrow_mut().swap_remove(index)),
            None => Err(RepoError::NotFound),
        }
    }

    fn delete_expired_invite_tokens(&self, expired_before: Timestamp) -> RepoResult<usize> {
        let len_before = self.tokens.borrow().len();
        self.tokens
            .borrow_mut()
            .retain(|x| x.expires_at >= expired_before);
        let len_after = self.tokens.borrow().len();
        debug_assert!(len_before >= len_after);
        Ok(len_before - len_after)
    }
}

pub mod fixtures {
    use super::*;
    use crate::usecases::{ActorContext, PlacePayload};
    use barhop_entities::builders::*;

    pub fn active_bartender(db: &MockDb, id: &str) -> ActorContext {
        seed_profile(db, id, Role::Bartender)
    }

    pub fn active_admin(db: &MockDb, id: &str) -> ActorContext {
        seed_profile(db, id, Role::Admin)
    }

    fn seed_profile(db: &MockDb, id: &str, role: Role) -> ActorContext {
        let profile = Profile::build()
            .id(id)
            .email(&format!("{id}@bar.tld"))
            .display_name(id)
            .role(role)
            .finish();
        db.profiles.borrow_mut().push(profile);
        ActorContext {
            profile_id: id.into(),
            role,
        }
    }

    pub fn complete_payload() -> PlacePayload {
        PlacePayload {
            title: "Neon Garden".into(),
            summary: Some("Courtyard bar behind a flower shop".into()),
            story: Some("Started as an after-hours hangout for the florists.".into()),
            signature_move: Some("Frozen jasmine sour".into()),
            best_time: Some("Weeknights before ten".into()),
            warnings: vec!["cash only".into()],
            area: Some("Old Harbor".into()),
            categories: vec!["cocktail".into()],
            vibes: vec!["lush".into(), "quiet".into()],
            price: PriceTier::Moderate,
            lat: Some(54.35),
            lng: Some(18.65),
            links: PlaceLinks {
                maps_url: "https://maps.example/neon-garden".into(),
                ..Default::default()
            },
            images: vec![],
        }
    }
}
