use crate::models::StudentId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_EMAIL_DOMAIN: &str = "@gbpuat.ac.in";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please use your college email ({0})")]
    NotCollegeEmail(String),
    #[error("log in with your college email first")]
    LoggedOut,
}

/// The email suffix that marks a college address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDomain(String);

impl EmailDomain {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self(suffix.into())
    }

    pub fn suffix(&self) -> &str {
        &self.0
    }

    pub fn admits(&self, email: &str) -> bool {
        email.ends_with(&self.0)
    }

    pub fn check(&self, email: &str) -> Result<(), SessionError> {
        if self.admits(email) {
            Ok(())
        } else {
            Err(SessionError::NotCollegeEmail(self.0.clone()))
        }
    }
}

impl Default for EmailDomain {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL_DOMAIN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Feed,
    Search,
    Network,
    Chat,
    Clubs,
    Profile,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    authenticated: bool,
    active_tab: Tab,
    viewing_profile: Option<StudentId>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn viewing_profile(&self) -> Option<&StudentId> {
        self.viewing_profile.as_ref()
    }

    /// Signs in as the current user once `email` passes the domain check.
    /// There is no way back to the logged-out state.
    pub fn log_in(&mut self, domain: &EmailDomain, email: &str) -> Result<StudentId, SessionError> {
        domain.check(email)?;
        self.authenticated = true;
        Ok(StudentId::current())
    }

    pub fn user(&self) -> Result<StudentId, SessionError> {
        if self.authenticated {
            Ok(StudentId::current())
        } else {
            Err(SessionError::LoggedOut)
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if tab != Tab::Profile {
            self.viewing_profile = None;
        }
        self.active_tab = tab;
    }

    pub fn view_profile(&mut self, id: StudentId) {
        self.viewing_profile = Some(id);
        self.active_tab = Tab::Profile;
    }
}
