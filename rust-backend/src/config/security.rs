//! Request access policy: which requests may reach a handler.
//!
//! The shipped configuration is [`SecurityConfig::permissive`]: every request is allowed and
//! CSRF token validation is off. It is meant for development; route-scoped rules are not
//! modelled yet.

use actix_web::dev::ServiceRequest;
use actix_web::http::Method;
use subtle::ConstantTimeEq;

use crate::config::settings::Settings;

/// Cookie carrying the CSRF token issued to the browser.
pub const CSRF_COOKIE: &str = "XSRF-TOKEN";
/// Header the client must echo the cookie value in.
pub const CSRF_HEADER: &str = "X-XSRF-TOKEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfProtection {
    Disabled,
    Enabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(&'static str),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityConfig {
    pub csrf: CsrfProtection,
}

impl SecurityConfig {
    /// Allow everything, no CSRF check.
    pub fn permissive() -> Self {
        Self {
            csrf: CsrfProtection::Disabled,
        }
    }

    pub fn with_csrf(mut self, csrf: CsrfProtection) -> Self {
        self.csrf = csrf;
        self
    }

    /// Level of the startup notice about this policy. Permit-all outside development is an error.
    pub fn startup_log_level(&self, settings: &Settings) -> log::Level {
        if settings.is_development() {
            log::Level::Warn
        } else {
            log::Level::Error
        }
    }

    pub fn decide(&self, req: &ServiceRequest) -> Decision {
        match self.csrf {
            CsrfProtection::Disabled => Decision::Allow,
            CsrfProtection::Enabled if is_safe_method(req.method()) => Decision::Allow,
            CsrfProtection::Enabled if csrf_token_matches(req) => Decision::Allow,
            CsrfProtection::Enabled => Decision::Deny("invalid CSRF token"),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::permissive()
    }
}

fn is_safe_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

/// Double-submit check: header value must equal the cookie value.
fn csrf_token_matches(req: &ServiceRequest) -> bool {
    let header = match req.headers().get(CSRF_HEADER).and_then(|v| v.to_str().ok()) {
        Some(h) if !h.is_empty() => h.to_owned(),
        _ => {
            log::debug!("{} header missing", CSRF_HEADER);
            return false;
        }
    };
    let cookie = match req.cookie(CSRF_COOKIE) {
        Some(c) => c,
        None => {
            log::debug!("{} cookie missing", CSRF_COOKIE);
            return false;
        }
    };

    header.as_bytes().ct_eq(cookie.value().as_bytes()).into()
}
