use time::Duration;

use super::prelude::*;
use super::{authorize_role, ActorContext};

pub const INVITE_TOKEN_TTL: Duration = Duration::days(7);

#[derive(Debug, Clone)]
pub struct NewMember {
    pub email: EmailAddress,
    pub display_name: Option<String>,
    pub handle: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct MemberInvitation {
    pub profile: Profile,
    pub token: String,
}

/// Admin invite: upserts the member profile and provisions a single-use
/// login credential. Re-inviting an existing address replaces the
/// pending token and refreshes the profile.
pub fn invite_member<R>(
    repo: &R,
    actor: &ActorContext,
    new_member: NewMember,
    at: Timestamp,
) -> Result<MemberInvitation>
where
    R: ProfileRepo + InviteTokenRepo,
{
    authorize_role(actor, Role::Admin)?;
    let NewMember {
        email,
        display_name,
        handle,
        role,
        is_active,
    } = new_member;
    let display_name = display_name.unwrap_or_else(|| email.as_str().to_string());

    let profile = match repo.try_get_profile_by_email(&email)? {
        Some(mut existing) => {
            existing.display_name = display_name;
            existing.handle = handle;
            existing.role = role;
            existing.is_active = is_active;
            repo.update_profile(&existing)?;
            existing
        }
        None => {
            let profile = Profile {
                id: Id::new(),
                email,
                display_name,
                handle,
                role,
                is_active,
                created_at: at,
            };
            repo.create_profile(&profile)?;
            profile
        }
    };

    let expires_at = Timestamp::from_seconds(at.into_seconds() + INVITE_TOKEN_TTL.whole_seconds());
    let invite_nonce = repo.replace_invite_token(InviteToken {
        invite_nonce: InviteNonce {
            profile_id: profile.id.clone(),
            nonce: Nonce::new(),
        },
        expires_at,
    })?;
    log::info!("Invited member {} ({})", profile.display_name, profile.id);
    Ok(MemberInvitation {
        profile,
        token: invite_nonce.encode_to_string(),
    })
}
