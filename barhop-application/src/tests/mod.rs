pub mod prelude {

    pub use barhop_core::{
        entities::*,
        repositories::{Error as RepoError, PlaceRepo, ProfileRepo},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub struct DummyNotifyGW;

    impl barhop_core::gateways::notify::NotificationGateway for DummyNotifyGW {
        fn member_invited(&self, _: &Profile, _: &str) {}
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: DummyNotifyGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            barhop_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            );
            Self {
                db_connections,
                notify: DummyNotifyGW,
            }
        }

        pub fn create_member(&self, id: &str, role: Role) -> usecases::ActorContext {
            let profile = Profile {
                id: id.into(),
                email: EmailAddress::new_unchecked(format!("{id}@bar.tld")),
                display_name: id.to_string(),
                handle: None,
                role,
                is_active: true,
                created_at: Timestamp::now(),
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .create_profile(&profile)
                .unwrap();
            usecases::ActorContext {
                profile_id: profile.id,
                role,
            }
        }

        pub fn create_draft(&self, actor: &usecases::ActorContext, title: &str) -> Place {
            flows::create_place(
                &self.db_connections,
                actor,
                usecases::PlacePayload {
                    title: title.into(),
                    ..Default::default()
                },
            )
            .unwrap()
        }

        pub fn create_submission(&self, actor: &usecases::ActorContext, title: &str) -> Place {
            let draft = self.create_draft(actor, title);
            flows::submit_place(&self.db_connections, actor, &draft.id).unwrap()
        }

        pub fn get_place(&self, id: &str) -> Place {
            self.db_connections
                .shared()
                .unwrap()
                .get_place(id)
                .unwrap()
        }

        pub fn count_places(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_places()
                .unwrap()
        }
    }
}
