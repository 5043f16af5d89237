use super::*;
use barhop_core::repositories::ProfileRepo as _;

/// Member administration listing, admins only.
#[rocket::get("/members")]
pub fn get_members(
    db: sqlite::Connections,
    account: Option<Account>,
) -> Result<Vec<json::Member>> {
    let account = account.ok_or(Error::from(usecases::Error::Unauthorized))?;
    let actor = resolve_actor(&db, &account)?;
    usecases::authorize_role(&actor, Role::Admin)?;
    let db = db.shared().map_err(Error::Other)?;
    let profiles = db.all_profiles()?;
    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}
