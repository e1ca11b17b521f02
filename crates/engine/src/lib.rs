//! In-memory engine for a group expense-splitting app.
//!
//! The engine owns the session's groups and exposes controlled mutation
//! (create group, add expense, add member, update settings) plus the pure
//! views derived from them (balances, cross-group summaries, the filtered /
//! sorted / paginated listing). State lives for the session only; there is no
//! persistence and no network.

use uuid::Uuid;

pub use contact::Contact;
pub use currency::{CURRENCIES, CurrencyInfo};
pub use error::EngineError;
pub use expense::{EXPENSE_CATEGORIES, Expense, ExpenseDraft};
pub use group::{Group, INVITE_CODE_LEN};
pub use member::Member;
pub use query::{GROUPS_PER_PAGE, GroupQuery, Page, SortKey};
pub use session::{Session, User};
pub use summary::{BalanceSummary, GroupOverview};

pub mod contact;
pub mod currency;
mod error;
pub mod expense;
pub mod group;
pub mod member;
pub mod query;
pub mod session;
pub mod summary;

type ResultEngine<T> = Result<T, EngineError>;

/// Owns the session's group collection, most recently created first.
///
/// There is a single writer: every mutation goes through one of the methods
/// below, and each one swaps in a whole replacement `Group` value produced by
/// the group operations.
#[derive(Clone, Debug, Default)]
pub struct Store {
    groups: Vec<Group>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store; callers pass groups newest first, matching the order
    /// `create_group` maintains.
    pub fn with_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// All groups, most recently created first.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Creates a group and prepends it to the collection.
    ///
    /// The creator becomes the first member; each contact becomes a member
    /// with a zero balance.
    pub fn create_group(
        &mut self,
        creator: &User,
        name: &str,
        description: &str,
        currency: &str,
        contacts: &[Contact],
    ) -> ResultEngine<&Group> {
        let group = Group::new(creator, name, description, currency, contacts)?;
        self.groups.insert(0, group);
        Ok(&self.groups[0])
    }

    /// Replaces the stored group with the same id.
    pub fn update_group(&mut self, updated: Group) -> ResultEngine<()> {
        match self.groups.iter_mut().find(|group| group.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                Ok(())
            }
            None => Err(EngineError::KeyNotFound(updated.id.to_string())),
        }
    }

    pub fn find_group(&self, id: Uuid) -> ResultEngine<&Group> {
        self.groups
            .iter()
            .find(|group| group.id == id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    /// Joining by invite code has no lookup behind it yet; the call always
    /// surfaces [`EngineError::Unimplemented`] rather than pretending to
    /// succeed.
    pub fn join_group(&self, invite_code: &str) -> ResultEngine<&Group> {
        Err(EngineError::Unimplemented(format!(
            "join group with code {}",
            invite_code.trim().to_uppercase()
        )))
    }

    /// Records an expense in `group_id` and swaps in the updated group.
    pub fn add_expense(&mut self, group_id: Uuid, draft: ExpenseDraft) -> ResultEngine<&Group> {
        let updated = self.find_group(group_id)?.with_expense(draft)?;
        self.replace(updated)
    }

    /// Appends a member invited by email, balance zero.
    pub fn add_member(&mut self, group_id: Uuid, email: &str) -> ResultEngine<&Group> {
        let updated = self.find_group(group_id)?.with_member(email)?;
        self.replace(updated)
    }

    /// Replaces a group's name, description and currency.
    pub fn update_settings(
        &mut self,
        group_id: Uuid,
        name: &str,
        description: &str,
        currency: &str,
    ) -> ResultEngine<&Group> {
        let updated = self
            .find_group(group_id)?
            .with_settings(name, description, currency)?;
        self.replace(updated)
    }

    fn replace(&mut self, updated: Group) -> ResultEngine<&Group> {
        let id = updated.id;
        self.update_group(updated)?;
        self.find_group(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn create_group_prepends() {
        let creator = user();
        let mut store = Store::new();

        let first = store
            .create_group(&creator, "Roommates", "", "$", &[])
            .unwrap()
            .id;
        let second = store
            .create_group(&creator, "Weekend Trip", "", "$", &[])
            .unwrap()
            .id;

        let ids: Vec<Uuid> = store.groups().iter().map(|group| group.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn add_expense_goes_through_value_replacement() {
        let creator = user();
        let mut store = Store::new();
        let group_id = store
            .create_group(&creator, "Trip", "", "$", &[])
            .unwrap()
            .id;

        let updated = store
            .add_expense(
                group_id,
                ExpenseDraft::new("Fuel", 40.0, creator.id, vec![creator.id], "Transportation"),
            )
            .unwrap();

        assert_eq!(updated.expenses.len(), 1);
        assert_eq!(store.find_group(group_id).unwrap().expenses.len(), 1);
    }

    #[test]
    #[should_panic(expected = "KeyNotFound")]
    fn fail_update_missing_group() {
        let creator = user();
        let mut store = Store::new();
        let group = Group::new(&creator, "Orphan", "", "$", &[]).unwrap();
        store.update_group(group).unwrap();
    }

    #[test]
    fn find_missing_group_is_an_error() {
        let store = Store::new();
        assert!(matches!(
            store.find_group(Uuid::new_v4()),
            Err(EngineError::KeyNotFound(_))
        ));
    }

    #[test]
    fn join_by_code_is_explicitly_unimplemented() {
        let store = Store::new();
        assert!(matches!(
            store.join_group("room24"),
            Err(EngineError::Unimplemented(code)) if code.contains("ROOM24")
        ));
    }
}
