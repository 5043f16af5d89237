use super::prelude::*;

/// The acting member, resolved once per request at the boundary and
/// passed explicitly into every workflow call.
#[derive(Debug, Clone)]
pub struct ActorContext {
    pub profile_id: Id,
    pub role: Role,
}

impl ActorContext {
    pub fn is_admin(&self) -> bool {
        self.role >= Role::Admin
    }
}

impl From<&Profile> for ActorContext {
    fn from(from: &Profile) -> Self {
        Self {
            profile_id: from.id.clone(),
            role: from.role,
        }
    }
}

/// An authenticated account without an active profile is "not invited",
/// which is a distinct state and not a generic authorization failure.
pub fn resolve_actor<R: ProfileRepo>(repo: &R, profile_id: &str) -> Result<ActorContext> {
    let profile = repo
        .try_get_profile(profile_id)?
        .ok_or(Error::NotInvited)?;
    if !profile.is_active {
        return Err(Error::NotInvited);
    }
    Ok(ActorContext::from(&profile))
}

pub fn authorize_role(actor: &ActorContext, min_required_role: Role) -> Result<()> {
    if actor.role < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(())
}

/// Mutating another member's record requires the admin role.
pub fn authorize_place_mutation(actor: &ActorContext, place: &Place) -> Result<()> {
    if actor.is_admin() || place.is_owned_by(&actor.profile_id) {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}
