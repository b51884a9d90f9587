/// Base URL the named endpoints are resolved against
pub const DEFAULT_BASE_URL: &str = "https://api.kwork.ru";
/// Application level `Authorization` header sent with every request
pub const DEFAULT_API_KEY: &str = "Basic bW9iaWxlX2FwaTpxRnZmUmw3dw==";
/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("kwork-client/", env!("CARGO_PKG_VERSION"));
/// Endpoint used to obtain a session token
pub const SIGN_IN_ENDPOINT: &str = "signIn";
/// Absolute URL used to mark the account as online
pub const USER_ONLINE_URL: &str = "https://kwork.ru/user_online";
/// Name of the request parameter carrying the session token
pub const TOKEN_PARAM: &str = "token";
/// Name of the request parameter carrying the page number
pub const PAGE_PARAM: &str = "page";
/// Parameters whose values never reach logs or error messages
pub const SENSITIVE_PARAMS: [&str; 2] = ["password", "token"];
/// Replacement text for sensitive values
pub const REDACTED: &str = "***";
/// Message used when a failed response carries no error text
pub const UNKNOWN_ERROR: &str = "Unknown error";
/// Maximum number of body characters kept in protocol errors
pub const BODY_EXCERPT_LEN: usize = 200;
/// Upper bound for the number of pages read from one paginated endpoint
pub const MAX_PAGES: u32 = 1000;
/// Default number of requests allowed per rate limiter period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
/// Default rate limiter period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 1;
/// Default rate limiter burst size
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 50;
