// ============================================================================
// Configuration Constants
// ============================================================================

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

// Redirect targets used by the route access gate
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/";

/// Cookie set by the session-issuing service. Over HTTPS it is sent with a
/// `__Secure-` prefix instead.
pub const DEFAULT_SESSION_COOKIE: &str = "better-auth.session_token";
pub const SECURE_COOKIE_PREFIX: &str = "__Secure-";

/// Pages that require a session
pub(crate) const DEFAULT_PROTECTED_PATHS: &[&str] = &["/"];

/// Pages hidden from callers that already hold a session
pub(crate) const DEFAULT_PUBLIC_PATHS: &[&str] =
    &["/login", "/signup", "/forgot-password", "/reset-password"];
