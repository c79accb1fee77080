//! Session cookie attributes.
//!
//! Production deployments serve the client from another site, so the
//! cookie must be `SameSite=None; Secure` there. Elsewhere it is
//! `SameSite=Strict` and sent over plain HTTP.

use axum_extra::extract::cookie::{Cookie, SameSite};

#[derive(Debug, Clone)]
pub struct CookiePolicy {
    name: String,
    production: bool,
}

impl CookiePolicy {
    pub fn new(name: impl Into<String>, production: bool) -> Self {
        Self {
            name: name.into(),
            production,
        }
    }

    /// Cookie carrying a freshly issued token.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        self.base(token)
    }

    /// Cookie that makes the browser drop the session (`Max-Age=0`).
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.make_removal();
        cookie
    }

    fn base(&self, value: String) -> Cookie<'static> {
        let same_site = if self.production {
            SameSite::None
        } else {
            SameSite::Strict
        };

        Cookie::build((self.name.clone(), value))
            .path("/")
            .http_only(true)
            .secure(self.production)
            .same_site(same_site)
            .build()
    }
}
