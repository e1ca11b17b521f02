//! Participants of a group and their running balances.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact::Contact;

/// A participant within one group.
///
/// `balance` is signed: negative means the member owes money into the group,
/// positive means the group owes the member. In a fully consistent group the
/// balances sum to zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub balance: f64,
}

impl Member {
    /// A member with a zero balance.
    pub fn new(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            balance: 0.0,
        }
    }

    /// Seeds a member from a phone book contact.
    pub fn from_contact(contact: &Contact) -> Self {
        Self::new(
            contact.id,
            contact.name.clone(),
            contact.email_or_phone_fallback(),
        )
    }

    /// Uppercase initials for avatar fallbacks: "Alice Johnson" -> "AJ".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_contact_uses_phone_fallback_email() {
        let contact = Contact::new("Carol Davis", "+91 98765 43212");
        let member = Member::from_contact(&contact);

        assert_eq!(member.id, contact.id);
        assert_eq!(member.email, "+91 98765 43212@phone.com");
        assert_eq!(member.balance, 0.0);
    }

    #[test]
    fn initials() {
        let member = Member::new(Uuid::new_v4(), "alice mary johnson", "a@example.com");
        assert_eq!(member.initials(), "AMJ");

        let single = Member::new(Uuid::new_v4(), "bob", "b@example.com");
        assert_eq!(single.initials(), "B");
    }
}
