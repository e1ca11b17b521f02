//! The locally authenticated user.
//!
//! Login and signup fabricate the user in memory after the caller's simulated
//! submission delay; nothing is verified and nothing is persisted. Logout
//! simply drops the user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ResultEngine, error::EngineError};

/// The locally authenticated actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Holds the current user between login and logout.
#[derive(Clone, Debug, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fabricates a user from the email; the password is ignored. The display
    /// name is derived from the email local part.
    pub fn login(&mut self, email: &str, _password: &str) -> ResultEngine<&User> {
        let email = email.trim();
        if email.is_empty() {
            return Err(EngineError::InvalidName("email is empty".to_string()));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: display_name_from_email(email),
            email: email.to_string(),
        };
        Ok(self.user.insert(user))
    }

    /// Fabricates a user with the given display name; the password is
    /// ignored.
    pub fn signup(&mut self, name: &str, email: &str, _password: &str) -> ResultEngine<&User> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidName("name is empty".to_string()));
        }
        if email.is_empty() {
            return Err(EngineError::InvalidName("email is empty".to_string()));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
        };
        Ok(self.user.insert(user))
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// "jane.doe42@example.com" -> "Jane Doe".
///
/// Non-letters in the local part become word breaks and each word is
/// title-cased.
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let spaced: String = local
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect();

    let mut name = String::new();
    for word in spaced.split_whitespace() {
        if !name.is_empty() {
            name.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_derives_display_name() {
        let mut session = Session::new();
        let user = session.login("jane.doe42@example.com", "hunter2").unwrap();

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane.doe42@example.com");
    }

    #[test]
    fn signup_keeps_given_name() {
        let mut session = Session::new();
        let user = session
            .signup("  Jane Doe ", "jane@example.com", "hunter2")
            .unwrap();

        assert_eq!(user.name, "Jane Doe");
        assert!(session.user().is_some());
    }

    #[test]
    fn logout_clears_the_user() {
        let mut session = Session::new();
        session.login("jane@example.com", "hunter2").unwrap();
        session.logout();
        assert!(session.user().is_none());
    }

    #[test]
    #[should_panic(expected = "InvalidName(\"email is empty\")")]
    fn fail_login_empty_email() {
        Session::new().login("  ", "hunter2").unwrap();
    }
}
