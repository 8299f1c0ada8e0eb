// ============================================================================
// Route Access Gate
// ============================================================================
//
// Runs ahead of every route and decides, from the request path and whether a
// session cookie is present, to let the request through or to redirect:
//
// 1. protected path, no session      -> login
// 2. public path, session present    -> home
// 3. anything else                   -> allow
//
// Only the cookie's presence is checked. Signature, expiry and revocation are
// the session service's job; a forged cookie with the right name passes here.
//
// ============================================================================

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use portal_config::AccessConfig;
use std::sync::Arc;

use crate::utils::find_cookie;

/// Whether the request carries a non-empty session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPresence {
    Present,
    Absent,
}

impl SessionPresence {
    pub fn from_headers(headers: &HeaderMap, config: &AccessConfig) -> Self {
        let present = config
            .session_cookie_names()
            .iter()
            .any(|name| find_cookie(headers, name).is_some_and(|value| !value.is_empty()));

        if present {
            SessionPresence::Present
        } else {
            SessionPresence::Absent
        }
    }

    pub fn is_present(self) -> bool {
        self == SessionPresence::Present
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Redirect(String),
}

/// Decide what happens to a request for `path`.
pub fn decide(config: &AccessConfig, path: &str, session: SessionPresence) -> AccessDecision {
    if config.is_protected(path) && !session.is_present() {
        return AccessDecision::Redirect(config.login_path.clone());
    }

    if config.is_public(path) && session.is_present() {
        return AccessDecision::Redirect(config.home_path.clone());
    }

    AccessDecision::Allow
}

/// Route access gate middleware
pub async fn route_access_gate(
    State(config): State<Arc<AccessConfig>>,
    req: Request,
    next: Next,
) -> Response {
    let session = SessionPresence::from_headers(req.headers(), &config);

    match decide(&config, req.uri().path(), session) {
        AccessDecision::Allow => next.run(req).await,
        AccessDecision::Redirect(target) => {
            tracing::debug!(
                path = %req.uri().path(),
                session = ?session,
                target = %target,
                "Access gate redirect"
            );
            Redirect::temporary(&target).into_response()
        }
    }
}
