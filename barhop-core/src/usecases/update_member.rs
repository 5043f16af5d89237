use super::prelude::*;
use super::{authorize_role, ActorContext};

#[derive(Debug, Clone)]
pub struct MemberUpdate {
    pub profile_id: Id,
    pub role: Role,
    pub is_active: bool,
}

/// Admin update of a member's role and activation flag.
pub fn update_member<R: ProfileRepo>(
    repo: &R,
    actor: &ActorContext,
    update: MemberUpdate,
) -> Result<Profile> {
    authorize_role(actor, Role::Admin)?;
    let MemberUpdate {
        profile_id,
        role,
        is_active,
    } = update;
    let mut profile = repo.get_profile(profile_id.as_str())?;
    log::info!(
        "Changing member {} to role {} (active: {})",
        profile.id,
        role,
        is_active
    );
    profile.role = role;
    profile.is_active = is_active;
    repo.update_profile(&profile)?;
    Ok(profile)
}
