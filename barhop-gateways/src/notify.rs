use std::sync::Arc;

use barhop_core::gateways::{email::EmailGateway, notify::NotificationGateway};
use barhop_entities::profile::Profile;

use crate::user_communication;

#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
}

impl Notify {
    pub fn new<G>(gw: G) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
        }
    }
}

impl NotificationGateway for Notify {
    fn member_invited(&self, profile: &Profile, invite_link: &str) {
        let content = user_communication::invite_email(profile, invite_link);
        log::info!("Sending invite e-mail to {}", profile.email);
        self.email_gw
            .compose_and_send(std::slice::from_ref(&profile.email), &content);
    }
}
