use super::*;

use barhop_core::gateways::notify::NotificationGateway;

#[derive(Debug, Clone)]
pub struct Invitation {
    pub profile: Profile,
    pub invite_link: String,
}

/// Invites a member and hands the action link both to the notification
/// gateway and back to the caller for inline display.
pub fn invite_member(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    actor: &usecases::ActorContext,
    new_member: usecases::NewMember,
    invite_base_url: &str,
) -> Result<Invitation> {
    let invitation = connections.exclusive()?.transaction(|conn| {
        usecases::invite_member(conn, actor, new_member, Timestamp::now()).map_err(|err| {
            warn!("Failed to invite member: {err}");
            err
        })
    })?;
    let invite_link = format!(
        "{}/invites/accept?token={}",
        invite_base_url.trim_end_matches('/'),
        invitation.token
    );
    notify.member_invited(&invitation.profile, &invite_link);
    Ok(Invitation {
        profile: invitation.profile,
        invite_link,
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_member(email: &str) -> usecases::NewMember {
        usecases::NewMember {
            email: EmailAddress::new_unchecked(email.into()),
            display_name: Some("Sam".into()),
            handle: None,
            role: Role::Bartender,
            is_active: true,
        }
    }

    #[test]
    fn invite_produces_a_usable_action_link() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_member("boss", Role::Admin);

        let invitation = flows::invite_member(
            &fixture.db_connections,
            &fixture.notify,
            &admin,
            new_member("sam@bar.tld"),
            "https://barhop.example",
        )
        .unwrap();
        assert!(invitation
            .invite_link
            .starts_with("https://barhop.example/invites/accept?token="));

        let token = invitation
            .invite_link
            .rsplit_once("token=")
            .map(|(_, token)| token)
            .unwrap();
        let profile =
            flows::consume_invite(&fixture.db_connections, token).unwrap();
        assert_eq!(invitation.profile.id, profile.id);
    }

    #[test]
    fn non_admin_invite_is_rejected() {
        let fixture = BackendFixture::new();
        let member = fixture.create_member("worker", Role::Bartender);
        let result = flows::invite_member(
            &fixture.db_connections,
            &fixture.notify,
            &member,
            new_member("sam@bar.tld"),
            "https://barhop.example",
        );
        assert!(matches!(
            result.unwrap_err().parameter_error(),
            Some(usecases::Error::Forbidden)
        ));
    }
}
