use core::ops::Deref;

use rocket::{
    self,
    http::Status,
    request::{FromRequest, Outcome, Request},
};

use barhop_core::gateways::notify::NotificationGateway;

pub const COOKIE_PROFILE_KEY: &str = "barhop-profile-id";

/// The signed-in account, taken from the private session cookie.
///
/// Holding an account does not imply an active profile: every action
/// resolves the actor against the profile store before mutating.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn profile_id(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let profile_id = request
            .cookies()
            .get_private(COOKIE_PROFILE_KEY)
            .map(|cookie| cookie.value().to_string());
        match profile_id {
            Some(profile_id) if !profile_id.is_empty() => Outcome::Success(Account(profile_id)),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
