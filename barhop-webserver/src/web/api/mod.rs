use std::fmt::Display;

use rocket::{
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::Json,
    Route,
};
use serde::Serialize;

use super::{guards::Account, sqlite};
use crate::adapters::json;
use barhop_core::{entities::*, usecases};

pub mod error;
mod members;
mod places;

use error::Error;

type Result<T> = std::result::Result<Json<T>, Error>;

pub fn routes() -> Vec<Route> {
    routes![
        places::get_places,
        places::get_place,
        places::get_review_queue,
        members::get_members,
    ]
}

#[derive(Debug, Serialize)]
struct JsonErrorResponse {
    http_status: u16,
    message: String,
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Resolves the acting member for the read endpoints.
fn resolve_actor(
    db: &sqlite::Connections,
    account: &Account,
) -> std::result::Result<usecases::ActorContext, Error> {
    let db = db
        .shared()
        .map_err(|err| Error::Other(anyhow::anyhow!(err)))?;
    Ok(usecases::resolve_actor(&db, account.profile_id())?)
}
