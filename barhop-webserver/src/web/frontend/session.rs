use rocket::{
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    response::{Flash, Redirect},
};

use super::app_err_flash;
use crate::web::{guards::COOKIE_PROFILE_KEY, sqlite};
use barhop_application::prelude as flows;

/// Redeems an invite action link and establishes the session.
#[get("/invites/accept?<token>")]
pub fn get_accept_invite(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    token: &str,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let profile = flows::consume_invite(&db, token).map_err(|err| app_err_flash("/", err))?;
    cookies.add_private(
        Cookie::build((COOKIE_PROFILE_KEY, profile.id.to_string()))
            .http_only(true)
            .same_site(SameSite::Lax),
    );
    Ok(Redirect::to("/dashboard"))
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(Cookie::from(COOKIE_PROFILE_KEY));
    Flash::success(Redirect::to("/"), "You have successfully logged out.")
}
