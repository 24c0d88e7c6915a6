//! Route-protection configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so overrides are resolved when
//! the crate is compiled (`option_env!`). `from_lookup` holds the parsing so
//! it can be exercised without touching real environment variables.
//!
//! Login and landing paths are fixed: they must match the router's static
//! segments in `app.rs`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::session::Role;

pub const DEFAULT_USER_LOGIN_PATH: &str = "/user/login";
pub const DEFAULT_ADMIN_LOGIN_PATH: &str = "/login";
pub const DEFAULT_USER_HOME_PATH: &str = "/dashboard";
pub const DEFAULT_ADMIN_HOME_PATH: &str = "/admin";
pub const DEFAULT_USER_FLAG_KEY: &str = "userAuth";
pub const DEFAULT_ADMIN_FLAG_KEY: &str = "adminAuth";
pub const DEFAULT_USER_TOKEN_KEY: &str = "userToken";
pub const DEFAULT_ADMIN_TOKEN_KEY: &str = "adminToken";
pub const DEFAULT_LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Errors produced while building an [`AccessConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid gate mode: {0} (expected `flag` or `token`)")]
    InvalidMode(String),
    #[error("{var} must be an absolute path, got {value:?}")]
    InvalidPath { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    EmptyKey { var: &'static str },
}

/// Which predicate backs the access gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateMode {
    /// Literal `"true"` flag per role.
    #[default]
    Flag,
    /// Structured expiring token per role.
    Token,
}

/// Per-role routes and storage keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRoutes {
    pub login_path: String,
    pub home_path: String,
    pub flag_key: String,
    pub token_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessConfig {
    pub user: RoleRoutes,
    pub admin: RoleRoutes,
    pub login_endpoint: String,
    pub mode: GateMode,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            user: RoleRoutes {
                login_path: DEFAULT_USER_LOGIN_PATH.to_owned(),
                home_path: DEFAULT_USER_HOME_PATH.to_owned(),
                flag_key: DEFAULT_USER_FLAG_KEY.to_owned(),
                token_key: DEFAULT_USER_TOKEN_KEY.to_owned(),
            },
            admin: RoleRoutes {
                login_path: DEFAULT_ADMIN_LOGIN_PATH.to_owned(),
                home_path: DEFAULT_ADMIN_HOME_PATH.to_owned(),
                flag_key: DEFAULT_ADMIN_FLAG_KEY.to_owned(),
                token_key: DEFAULT_ADMIN_TOKEN_KEY.to_owned(),
            },
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_owned(),
            mode: GateMode::Flag,
        }
    }
}

impl AccessConfig {
    /// Build config from a variable lookup, falling back to defaults.
    ///
    /// Recognized:
    /// - `FILMFUND_GATE_MODE`: `flag` (default) or `token`
    /// - `FILMFUND_USER_FLAG_KEY`, `FILMFUND_ADMIN_FLAG_KEY`
    /// - `FILMFUND_USER_TOKEN_KEY`, `FILMFUND_ADMIN_TOKEN_KEY`
    /// - `FILMFUND_LOGIN_ENDPOINT`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the endpoint is not absolute, a key is
    /// empty, or the mode is unrecognized.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let key = |var: &'static str, fallback: &str| match lookup(var) {
            Some(value) => parse_key(var, value),
            None => Ok(fallback.to_owned()),
        };

        Ok(Self {
            user: RoleRoutes {
                flag_key: key("FILMFUND_USER_FLAG_KEY", &defaults.user.flag_key)?,
                token_key: key("FILMFUND_USER_TOKEN_KEY", &defaults.user.token_key)?,
                ..defaults.user.clone()
            },
            admin: RoleRoutes {
                flag_key: key("FILMFUND_ADMIN_FLAG_KEY", &defaults.admin.flag_key)?,
                token_key: key("FILMFUND_ADMIN_TOKEN_KEY", &defaults.admin.token_key)?,
                ..defaults.admin.clone()
            },
            login_endpoint: match lookup("FILMFUND_LOGIN_ENDPOINT") {
                Some(value) => parse_path("FILMFUND_LOGIN_ENDPOINT", value)?,
                None => defaults.login_endpoint.clone(),
            },
            mode: parse_mode(lookup("FILMFUND_GATE_MODE").as_deref())?,
        })
    }

    /// Build config from variables captured at compile time.
    ///
    /// # Errors
    ///
    /// See [`AccessConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| {
            let value = match name {
                "FILMFUND_GATE_MODE" => option_env!("FILMFUND_GATE_MODE"),
                "FILMFUND_USER_FLAG_KEY" => option_env!("FILMFUND_USER_FLAG_KEY"),
                "FILMFUND_ADMIN_FLAG_KEY" => option_env!("FILMFUND_ADMIN_FLAG_KEY"),
                "FILMFUND_USER_TOKEN_KEY" => option_env!("FILMFUND_USER_TOKEN_KEY"),
                "FILMFUND_ADMIN_TOKEN_KEY" => option_env!("FILMFUND_ADMIN_TOKEN_KEY"),
                "FILMFUND_LOGIN_ENDPOINT" => option_env!("FILMFUND_LOGIN_ENDPOINT"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    #[must_use]
    pub fn routes(&self, role: Role) -> &RoleRoutes {
        match role {
            Role::User => &self.user,
            Role::Admin => &self.admin,
        }
    }

    #[must_use]
    pub fn login_path(&self, role: Role) -> &str {
        &self.routes(role).login_path
    }

    #[must_use]
    pub fn home_path(&self, role: Role) -> &str {
        &self.routes(role).home_path
    }

    #[must_use]
    pub fn flag_key(&self, role: Role) -> &str {
        &self.routes(role).flag_key
    }

    #[must_use]
    pub fn token_key(&self, role: Role) -> &str {
        &self.routes(role).token_key
    }
}

fn parse_mode(value: Option<&str>) -> Result<GateMode, ConfigError> {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(GateMode::Flag),
        Some(v) if v.is_empty() || v == "flag" => Ok(GateMode::Flag),
        Some(v) if v == "token" => Ok(GateMode::Token),
        Some(other) => Err(ConfigError::InvalidMode(other)),
    }
}

fn parse_path(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.starts_with('/') {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidPath { var, value })
    }
}

fn parse_key(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ConfigError::EmptyKey { var })
    } else {
        Ok(trimmed.to_owned())
    }
}
