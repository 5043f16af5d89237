use rocket::{
    self,
    form::Form,
    post,
    response::{Flash, Redirect},
    routes, FromForm, Route,
};

use super::{guards::Account, sqlite};
use barhop_application::{error::AppError, prelude as flows};
use barhop_core::{entities::*, usecases, RepoError};

mod members;
mod session;

type ActionResult = std::result::Result<Redirect, Flash<Redirect>>;

/// Resolves the acting member once at the boundary. Everything below
/// receives the explicit actor context.
pub(crate) fn resolve_actor(
    db: &sqlite::Connections,
    account: &Account,
) -> std::result::Result<usecases::ActorContext, usecases::Error> {
    let db = db
        .shared()
        .map_err(|err| usecases::Error::Repo(RepoError::Other(err)))?;
    usecases::resolve_actor(&db, account.profile_id())
}

pub(crate) fn login_required(to: &str) -> Flash<Redirect> {
    Flash::error(Redirect::to(to.to_string()), "Login required.")
}

/// Converts a workflow failure into a user-visible flash message.
/// Infrastructure errors are logged and reported generically.
pub(crate) fn app_err_flash(to: &str, err: AppError) -> Flash<Redirect> {
    let message = match err.parameter_error() {
        Some(err) => err.to_string(),
        None => {
            error!("Request failed: {err}");
            "Something went wrong. Please try again later.".to_string()
        }
    };
    Flash::error(Redirect::to(to.to_string()), message)
}

#[derive(FromForm)]
pub struct PlaceForm {
    pub intent: Option<String>,
    pub place_id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub story: Option<String>,
    pub signature_move: Option<String>,
    pub best_time: Option<String>,
    pub warnings: Option<String>,
    pub area: Option<String>,
    pub categories: Vec<String>,
    pub vibes: Option<String>,
    pub price: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub images: Option<String>,
    pub maps_url: Option<String>,
    pub apple_maps_url: Option<String>,
    pub instagram_url: Option<String>,
    pub website_url: Option<String>,
    pub phone: Option<String>,
}

impl From<PlaceForm> for usecases::PlaceFormData {
    fn from(from: PlaceForm) -> Self {
        let PlaceForm {
            intent: _,
            place_id: _,
            title,
            summary,
            story,
            signature_move,
            best_time,
            warnings,
            area,
            categories,
            vibes,
            price,
            lat,
            lng,
            images,
            maps_url,
            apple_maps_url,
            instagram_url,
            website_url,
            phone,
        } = from;
        Self {
            title: title.unwrap_or_default(),
            summary: summary.unwrap_or_default(),
            story: story.unwrap_or_default(),
            signature_move: signature_move.unwrap_or_default(),
            best_time: best_time.unwrap_or_default(),
            warnings: warnings.unwrap_or_default(),
            area: area.unwrap_or_default(),
            categories,
            vibes: vibes.unwrap_or_default(),
            price: price.unwrap_or_default(),
            lat: lat.unwrap_or_default(),
            lng: lng.unwrap_or_default(),
            images: images.unwrap_or_default(),
            maps_url: maps_url.unwrap_or_default(),
            apple_maps_url: apple_maps_url.unwrap_or_default(),
            instagram_url: instagram_url.unwrap_or_default(),
            website_url: website_url.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
        }
    }
}

fn edit_page(place_id: &str) -> String {
    format!("/places/{place_id}/edit")
}

/// Saves or submits a place, creating the draft on first save.
#[post("/places", data = "<form>")]
pub fn post_upsert_place(
    db: sqlite::Connections,
    account: Option<Account>,
    form: Form<PlaceForm>,
) -> ActionResult {
    let form = form.into_inner();
    let intent = form.intent.clone().unwrap_or_default();
    let place_id = form.place_id.clone().unwrap_or_default();
    let back = if place_id.is_empty() {
        "/places/new".to_string()
    } else {
        edit_page(&place_id)
    };

    if intent.is_empty() {
        return Err(Flash::error(
            Redirect::to(back),
            "Missing action intent.",
        ));
    }
    let is_submit = intent == "submit";

    let Some(account) = account else {
        return Err(login_required(&back));
    };
    let actor = resolve_actor(&db, &account)
        .map_err(|err| Flash::error(Redirect::to(back.clone()), err.to_string()))?;

    let payload = usecases::normalize_place_form(form.into());

    if is_submit {
        if let Err(err) = usecases::validate_for_submit(&payload) {
            return Err(Flash::error(Redirect::to(back), err.to_string()));
        }
    }

    if place_id.is_empty() {
        if payload.title.is_empty() {
            return Err(Flash::error(
                Redirect::to(back),
                usecases::Error::Title.to_string(),
            ));
        }
        if is_submit {
            return Err(Flash::error(
                Redirect::to(back),
                usecases::Error::SaveDraftFirst.to_string(),
            ));
        }
        let created = flows::create_place(&db, &actor, payload)
            .map_err(|err| app_err_flash(&back, err))?;
        return Ok(Redirect::to(edit_page(created.id.as_str())));
    }

    let id = Id::from(place_id.as_str());
    flows::update_place(&db, &actor, &id, payload).map_err(|err| app_err_flash(&back, err))?;

    if is_submit {
        flows::submit_place(&db, &actor, &id).map_err(|err| app_err_flash(&back, err))?;
        return Ok(Redirect::to("/dashboard"));
    }
    Ok(Redirect::to(back))
}

#[derive(FromForm)]
pub struct VoteForm {
    pub vote: Option<String>,
}

/// Casts a ballot; on quorum the place is published as a side effect of
/// the same transactional flow.
#[post("/places/<id>/vote", data = "<form>")]
pub fn post_cast_vote(
    db: sqlite::Connections,
    account: Option<Account>,
    id: &str,
    form: Form<VoteForm>,
) -> ActionResult {
    let Some(account) = account else {
        return Err(login_required("/review"));
    };
    let choice = form
        .vote
        .as_deref()
        .unwrap_or_default()
        .parse::<VoteChoice>()
        .map_err(|_| {
            Flash::error(
                Redirect::to("/review"),
                usecases::Error::VotePayload.to_string(),
            )
        })?;
    let actor = resolve_actor(&db, &account)
        .map_err(|err| Flash::error(Redirect::to("/review"), err.to_string()))?;
    let tally = flows::cast_vote(&db, &actor, &Id::from(id), choice)
        .map_err(|err| app_err_flash("/review", err))?;
    debug!(
        "Vote on place {id}: {} yes / {} no -> {}",
        tally.yes_count, tally.no_count, tally.status
    );
    Ok(Redirect::to("/review"))
}

#[derive(FromForm)]
pub struct StatusForm {
    pub status: Option<String>,
}

/// Admin override of the place status.
#[post("/places/<id>/status", data = "<form>")]
pub fn post_place_status(
    db: sqlite::Connections,
    account: Option<Account>,
    id: &str,
    form: Form<StatusForm>,
) -> ActionResult {
    let Some(account) = account else {
        return Err(login_required("/review"));
    };
    let status = form
        .status
        .as_deref()
        .unwrap_or_default()
        .parse::<PlaceStatus>()
        .map_err(|_| Flash::error(Redirect::to("/review"), "Missing place or status."))?;
    let actor = resolve_actor(&db, &account)
        .map_err(|err| Flash::error(Redirect::to("/review"), err.to_string()))?;
    flows::review_place(&db, &actor, &Id::from(id), status)
        .map_err(|err| app_err_flash("/review", err))?;
    Ok(Redirect::to("/review"))
}

pub fn routes() -> Vec<Route> {
    routes![
        post_upsert_place,
        post_cast_vote,
        post_place_status,
        members::post_update_member,
        members::post_invite_member,
        session::get_accept_invite,
        session::post_logout,
    ]
}
