use barhop_core::gateways::email::EmailContent;
use barhop_entities::profile::Profile;

pub fn invite_email(profile: &Profile, invite_link: &str) -> EmailContent {
    let subject = "You have been invited to the barhop crew".to_string();
    let body = format!(
        "Hi {name},\n\n\
         you have been invited to curate places on barhop.\n\
         Follow this link to sign in:\n\n\
         {invite_link}\n\n\
         The link is valid for a limited time and can only be used once.\n",
        name = profile.display_name,
    );
    EmailContent { subject, body }
}
