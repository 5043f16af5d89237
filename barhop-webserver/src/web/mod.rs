use rocket::{config::Config as RocketCfg, Rocket, Route};

use barhop_core::gateways::notify::NotificationGateway;

pub mod api;
mod frontend;
mod guards;
mod sqlite;

#[cfg(test)]
pub mod tests;

/// Configuration surface of the web layer.
#[derive(Debug, Clone)]
pub struct Cfg {
    /// Base URL used to compose invite action links.
    pub invite_base_url: String,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    notify: Box<dyn NotificationGateway + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    info!("Deleting expired invite tokens...");
    if let Err(err) = barhop_application::prelude::delete_expired_invite_tokens(&db) {
        warn!("Failed to delete expired invite tokens: {err}");
    }

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let notify_gw = guards::Notify(notify);

    let mut instance = r.manage(db).manage(notify_gw).manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(
    db: barhop_db_sqlite::Connections,
    cfg: Cfg,
    notify: Box<dyn NotificationGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db.into(), notify);
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
