pub const APP_DIRECTORY_NAME: &str = ".rosterdesk";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "rosterdesk.log";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const BASE_URL_ENV_VAR: &str = "ROSTERDESK_API_URL";
/// Wire value meaning "no constraint on this dimension".
pub const ALL_SENTINEL: &str = "all";
pub const NOT_AVAILABLE: &str = "N/A";
