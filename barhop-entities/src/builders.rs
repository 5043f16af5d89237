pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{place_builder::*, profile_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{geo::*, id::*, links::*, place::*, time::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn slug(mut self, slug: &str) -> Self {
            self.place.slug = slug.into();
            self
        }
        pub fn created_by(mut self, id: &str) -> Self {
            self.place.created_by = id.into();
            self
        }
        pub fn status(mut self, status: PlaceStatus) -> Self {
            self.place.status = status;
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.place.title = title.into();
            self
        }
        pub fn summary(mut self, summary: &str) -> Self {
            self.place.summary = Some(summary.into());
            self
        }
        pub fn story(mut self, story: &str) -> Self {
            self.place.story = Some(story.into());
            self
        }
        pub fn signature_move(mut self, signature_move: &str) -> Self {
            self.place.signature_move = Some(signature_move.into());
            self
        }
        pub fn best_time(mut self, best_time: &str) -> Self {
            self.place.best_time = Some(best_time.into());
            self
        }
        pub fn area(mut self, area: &str) -> Self {
            self.place.area = Some(area.into());
            self
        }
        pub fn categories(mut self, categories: Vec<impl Into<String>>) -> Self {
            self.place.categories = categories.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn vibes(mut self, vibes: Vec<impl Into<String>>) -> Self {
            self.place.vibes = vibes.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn price(mut self, price: PriceTier) -> Self {
            self.place.price = price;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.position = Some(pos);
            self
        }
        pub fn maps_url(mut self, url: &str) -> Self {
            self.place.links.maps_url = url.into();
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            let now = Timestamp::now();
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    slug: "".into(),
                    created_by: Id::new(),
                    status: PlaceStatus::default(),
                    title: "".into(),
                    summary: None,
                    story: None,
                    signature_move: None,
                    best_time: None,
                    warnings: vec![],
                    area: None,
                    categories: vec![],
                    vibes: vec![],
                    price: PriceTier::default(),
                    position: None,
                    links: PlaceLinks::default(),
                    images: vec![],
                    created_at: now,
                    updated_at: now,
                    submitted_at: None,
                    approved_at: None,
                },
            }
        }
    }
}

pub mod profile_builder {

    use super::*;
    use crate::{email::*, id::*, profile::*, time::*};

    #[derive(Debug)]
    pub struct ProfileBuild {
        profile: Profile,
    }

    impl ProfileBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.profile.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.profile.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn display_name(mut self, name: &str) -> Self {
            self.profile.display_name = name.into();
            self
        }
        pub fn handle(mut self, handle: &str) -> Self {
            self.profile.handle = Some(handle.into());
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.profile.role = role;
            self
        }
        pub fn inactive(mut self) -> Self {
            self.profile.is_active = false;
            self
        }
        pub fn finish(self) -> Profile {
            self.profile
        }
    }

    impl Builder for Profile {
        type Build = ProfileBuild;
        fn build() -> ProfileBuild {
            ProfileBuild {
                profile: Profile {
                    id: Id::new(),
                    email: EmailAddress::new_unchecked("member@example.com".into()),
                    display_name: "".into(),
                    handle: None,
                    role: Role::default(),
                    is_active: true,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
