mod app_config;

pub use app_config::{
    AppConfig, ENV_DB_ACQUIRE_TIMEOUT_SECS, ENV_DB_MAX_CONNECTIONS, ENV_DB_PATH, ENV_LOG_DIR,
};
