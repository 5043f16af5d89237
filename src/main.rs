use clap::Parser;

mod cli;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_deref())?;

    log::info!("Opening database {}", cfg.db.conn_sqlite);
    let connections =
        barhop_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    barhop_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    let notify = barhop_gateways::notify::Notify::new(barhop_gateways::email::LogMailGateway);
    let web_cfg = barhop_webserver::Cfg {
        invite_base_url: cfg.webserver.invite_base_url.clone(),
    };

    barhop_webserver::run(connections, web_cfg, Box::new(notify)).await;
    Ok(())
}
