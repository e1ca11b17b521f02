//! Phone book contacts used to seed group members.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entry picked from the device phone book.
///
/// `email` is optional. A member seeded from a contact without one gets a
/// placeholder address derived from the phone number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone_number: phone_number.into(),
            email: None,
        }
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The contact email, falling back to `<phone>@phone.com`.
    pub fn email_or_phone_fallback(&self) -> String {
        match &self.email {
            Some(email) => email.clone(),
            None => format!("{}@phone.com", self.phone_number),
        }
    }
}

/// Case-insensitive match on the name, or a literal substring match on the
/// phone number. A blank query returns every contact.
pub fn search<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let query = query.trim();
    if query.is_empty() {
        return contacts.iter().collect();
    }
    let lowered = query.to_lowercase();
    contacts
        .iter()
        .filter(|contact| {
            contact.name.to_lowercase().contains(&lowered)
                || contact.phone_number.contains(query)
        })
        .collect()
}
