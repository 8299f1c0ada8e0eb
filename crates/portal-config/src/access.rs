// ============================================================================
// Route Access Configuration
// ============================================================================

use anyhow::{bail, Result};

use crate::constants::{
    DEFAULT_HOME_PATH, DEFAULT_LOGIN_PATH, DEFAULT_PROTECTED_PATHS, DEFAULT_PUBLIC_PATHS,
    DEFAULT_SESSION_COOKIE, SECURE_COOKIE_PREFIX,
};

/// Static route lists consumed by the route access gate.
///
/// Paths are matched exactly: no patterns, no trailing-slash normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessConfig {
    /// Paths that require a session; callers without one go to `login_path`
    pub protected_paths: Vec<String>,
    /// Paths hidden from callers with a session; they go to `home_path`
    pub public_paths: Vec<String>,
    pub login_path: String,
    pub home_path: String,
    /// Name of the session cookie whose presence is checked
    pub session_cookie: String,
}

impl AccessConfig {
    pub(crate) fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let protected_paths = match std::env::var("PROTECTED_PATHS") {
            Ok(raw) => parse_path_list("PROTECTED_PATHS", &raw)?,
            Err(_) => defaults.protected_paths,
        };
        let public_paths = match std::env::var("PUBLIC_PATHS") {
            Ok(raw) => parse_path_list("PUBLIC_PATHS", &raw)?,
            Err(_) => defaults.public_paths,
        };

        let login_path = std::env::var("LOGIN_PATH").unwrap_or(defaults.login_path);
        let home_path = std::env::var("HOME_PATH").unwrap_or(defaults.home_path);
        for (name, value) in [("LOGIN_PATH", &login_path), ("HOME_PATH", &home_path)] {
            if !value.starts_with('/') {
                bail!("{} must start with '/', got {:?}", name, value);
            }
        }

        let session_cookie =
            std::env::var("SESSION_COOKIE_NAME").unwrap_or(defaults.session_cookie);
        if session_cookie.trim().is_empty() {
            bail!("SESSION_COOKIE_NAME must not be empty");
        }

        Ok(Self {
            protected_paths,
            public_paths,
            login_path,
            home_path,
            session_cookie,
        })
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_paths.iter().any(|p| p == path)
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| p == path)
    }

    /// Cookie names that count as the session cookie: the configured name and
    /// its `__Secure-` variant.
    pub fn session_cookie_names(&self) -> [String; 2] {
        [
            self.session_cookie.clone(),
            format!("{}{}", SECURE_COOKIE_PREFIX, self.session_cookie),
        ]
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            protected_paths: DEFAULT_PROTECTED_PATHS.iter().map(|p| p.to_string()).collect(),
            public_paths: DEFAULT_PUBLIC_PATHS.iter().map(|p| p.to_string()).collect(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
        }
    }
}

fn parse_path_list(name: &str, raw: &str) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        if !entry.starts_with('/') {
            bail!("{} entries must start with '/', got {:?}", name, entry);
        }
        paths.push(entry.to_string());
    }
    Ok(paths)
}
