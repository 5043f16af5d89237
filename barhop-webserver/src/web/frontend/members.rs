use rocket::{
    form::Form,
    post,
    response::{Flash, Redirect},
    FromForm, State,
};

use super::{app_err_flash, login_required, resolve_actor, ActionResult};
use crate::web::{
    guards::{Account, Notify},
    sqlite, Cfg,
};
use barhop_application::prelude as flows;
use barhop_core::{entities::*, usecases};

#[derive(FromForm)]
pub struct MemberUpdateForm {
    pub profile_id: Option<String>,
    pub role: Option<String>,
    pub is_active: bool,
}

#[post("/members", data = "<form>")]
pub fn post_update_member(
    db: sqlite::Connections,
    account: Option<Account>,
    form: Form<MemberUpdateForm>,
) -> ActionResult {
    let Some(account) = account else {
        return Err(login_required("/members"));
    };
    let form = form.into_inner();
    let profile_id = form.profile_id.unwrap_or_default();
    if profile_id.is_empty() {
        return Err(Flash::error(Redirect::to("/members"), "Missing member."));
    }
    let Ok(role) = form.role.unwrap_or_default().parse::<Role>() else {
        return Err(Flash::error(
            Redirect::to("/members"),
            usecases::Error::Role.to_string(),
        ));
    };
    let actor = resolve_actor(&db, &account)
        .map_err(|err| Flash::error(Redirect::to("/members"), err.to_string()))?;
    let update = usecases::MemberUpdate {
        profile_id: profile_id.into(),
        role,
        is_active: form.is_active,
    };
    flows::update_member(&db, &actor, update).map_err(|err| app_err_flash("/members", err))?;
    Ok(Redirect::to("/members"))
}

#[derive(FromForm)]
pub struct InviteForm {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub handle: Option<String>,
    pub role: Option<String>,
    pub is_active: bool,
}

/// Invites a member. The action link is flashed back so the admin can
/// hand it over directly, in addition to the gateway delivery.
#[post("/members/invites", data = "<form>")]
pub fn post_invite_member(
    db: sqlite::Connections,
    notify: &State<Notify>,
    cfg: &State<Cfg>,
    account: Option<Account>,
    form: Form<InviteForm>,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    let Some(account) = account else {
        return Err(login_required("/members"));
    };
    let form = form.into_inner();
    let email = form
        .email
        .unwrap_or_default()
        .to_lowercase()
        .parse::<EmailAddress>()
        .map_err(|err| Flash::error(Redirect::to("/members"), err.to_string()))?;
    let role = form
        .role
        .unwrap_or_default()
        .parse::<Role>()
        .map_err(|_| {
            Flash::error(Redirect::to("/members"), usecases::Error::Role.to_string())
        })?;
    let actor = resolve_actor(&db, &account)
        .map_err(|err| Flash::error(Redirect::to("/members"), err.to_string()))?;

    let new_member = usecases::NewMember {
        email,
        display_name: form.display_name.filter(|name| !name.trim().is_empty()),
        handle: form.handle.filter(|handle| !handle.trim().is_empty()),
        role,
        is_active: form.is_active,
    };
    let invitation = flows::invite_member(
        &db,
        &**notify.inner(),
        &actor,
        new_member,
        &cfg.invite_base_url,
    )
    .map_err(|err| app_err_flash("/members", err))?;
    Ok(Flash::success(
        Redirect::to("/members"),
        format!(
            "Invite link for {}: {}",
            invitation.profile.email, invitation.invite_link
        ),
    ))
}
