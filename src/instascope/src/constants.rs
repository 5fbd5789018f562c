pub const DEFAULT_API_BASE_URL: &str = "https://i.instagram.com";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const CONFIG_ENV_PREFIX: &str = "INSTASCOPE";
pub const CONFIG_DIR_NAME: &str = "instascope";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const SESSION_COOKIE_NAME: &str = "sessionid";
