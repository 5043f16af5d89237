use std::{env, fs, io::ErrorKind, path::Path};

use anyhow::Result;

const DEFAULT_CONFIG_FILE_NAME: &str = "barhop.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

const DEFAULT_DB_URL: &str = "barhop.db";
const DEFAULT_DB_CONNECTION_POOL_SIZE: u8 = 10;
const DEFAULT_INVITE_BASE_URL: &str = "http://localhost:8000";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    /// Base URL used to compose invite action links.
    pub invite_base_url: String,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config { db, webserver } = from;
        let db = db.unwrap_or_default();
        let webserver = webserver.unwrap_or_default();
        Self {
            db: Db {
                conn_sqlite: db.connection.unwrap_or_else(|| DEFAULT_DB_URL.to_string()),
                conn_pool_size: db
                    .connection_pool_size
                    .unwrap_or(DEFAULT_DB_CONNECTION_POOL_SIZE),
            },
            webserver: WebServer {
                invite_base_url: webserver
                    .invite_base_url
                    .unwrap_or_else(|| DEFAULT_INVITE_BASE_URL.to_string()),
            },
        }
    }
}

mod raw {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Config {
        pub db: Option<Db>,
        pub webserver: Option<WebServer>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Db {
        pub connection: Option<String>,
        pub connection_pool_size: Option<u8>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct WebServer {
        pub invite_base_url: Option<String>,
    }
}
