//! The `Group` value type: a shared ledger of expenses among members.
//!
//! Groups are values. Every mutating operation returns a fresh `Group` and
//! the caller swaps it into the [`Store`], so there is a single writer and no
//! shared mutable state.
//!
//! [`Store`]: crate::Store

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    ResultEngine,
    contact::Contact,
    error::EngineError,
    expense::{Expense, ExpenseDraft},
    member::Member,
    session::User,
};

/// Length of generated invite tokens.
pub const INVITE_CODE_LEN: usize = 6;

const INVITE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A shared ledger of expenses among a fixed set of members.
///
/// A group owns its members and expenses exclusively; nothing is shared
/// across groups. `currency` is the bare display symbol, e.g. `₹` or `$`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
    pub currency: String,
    pub invite_code: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Builds a group owned by `creator`, who becomes the first member.
    ///
    /// Every seeded member starts at balance zero. Contacts without an email
    /// get the phone-derived placeholder address. Contacts whose id collides
    /// with an already seeded member are skipped, keeping members unique by
    /// id.
    pub fn new(
        creator: &User,
        name: &str,
        description: &str,
        currency: &str,
        contacts: &[Contact],
    ) -> ResultEngine<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidName("group name is empty".to_string()));
        }
        if currency.trim().is_empty() {
            return Err(EngineError::InvalidName("currency is empty".to_string()));
        }

        let mut members = Vec::with_capacity(contacts.len() + 1);
        members.push(Member::new(
            creator.id,
            creator.name.clone(),
            creator.email.clone(),
        ));
        for contact in contacts {
            if members.iter().any(|member: &Member| member.id == contact.id) {
                continue;
            }
            members.push(Member::from_contact(contact));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.trim().to_string(),
            members,
            expenses: Vec::new(),
            currency: currency.to_string(),
            invite_code: invite_code(),
            created_by: creator.id,
            created_at: Utc::now(),
        })
    }

    pub fn is_member(&self, member_id: Uuid) -> bool {
        self.members.iter().any(|member| member.id == member_id)
    }

    pub fn member(&self, member_id: Uuid) -> Option<&Member> {
        self.members.iter().find(|member| member.id == member_id)
    }

    /// Records `draft` and returns the updated group, newest expense first.
    ///
    /// Validates the description, amount, category, payer and split before
    /// anything changes. Member balances are left untouched: balances are
    /// seeded values, not derived from the ledger.
    pub fn with_expense(&self, draft: ExpenseDraft) -> ResultEngine<Group> {
        let description = draft.description.trim();
        if description.is_empty() {
            return Err(EngineError::InvalidName(
                "expense description is empty".to_string(),
            ));
        }
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be > 0, got {}",
                draft.amount
            )));
        }
        if draft.category.trim().is_empty() {
            return Err(EngineError::InvalidName(
                "expense category is empty".to_string(),
            ));
        }
        if draft.split_between.is_empty() {
            return Err(EngineError::InvalidSplit("split set is empty".to_string()));
        }
        let payer = self
            .member(draft.paid_by)
            .ok_or_else(|| EngineError::UnknownMember(draft.paid_by.to_string()))?;
        for member_id in &draft.split_between {
            if !self.is_member(*member_id) {
                return Err(EngineError::UnknownMember(member_id.to_string()));
            }
        }

        let expense = Expense {
            id: Uuid::new_v4(),
            description: description.to_string(),
            amount: draft.amount,
            paid_by: draft.paid_by,
            paid_by_name: payer.name.clone(),
            split_between: draft.split_between,
            date: draft.date,
            category: draft.category.trim().to_string(),
        };

        let mut updated = self.clone();
        updated.expenses.insert(0, expense);
        Ok(updated)
    }

    /// Appends a member invited by email, balance zero. The display name is
    /// the email local part.
    ///
    /// Existing expense history is not reconciled against the new member.
    pub fn with_member(&self, email: &str) -> ResultEngine<Group> {
        let email = email.trim();
        if email.is_empty() {
            return Err(EngineError::InvalidName("member email is empty".to_string()));
        }
        let name = email.split('@').next().unwrap_or(email);

        let mut updated = self.clone();
        updated.members.push(Member::new(Uuid::new_v4(), name, email));
        Ok(updated)
    }

    /// Replaces name, description and currency; members, expenses and the
    /// invite code stay as they are.
    pub fn with_settings(
        &self,
        name: &str,
        description: &str,
        currency: &str,
    ) -> ResultEngine<Group> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidName("group name is empty".to_string()));
        }
        if currency.trim().is_empty() {
            return Err(EngineError::InvalidName("currency is empty".to_string()));
        }

        let mut updated = self.clone();
        updated.name = name.to_string();
        updated.description = description.trim().to_string();
        updated.currency = currency.to_string();
        Ok(updated)
    }

    /// Sum of all recorded expense amounts.
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }
}

/// Generates a fresh uppercase alphanumeric invite token.
///
/// Tokens are intended to be globally unique but uniqueness is not verified.
pub fn invite_code() -> String {
    let mut rng = rand::thread_rng();
    (0..INVITE_CODE_LEN)
        .map(|_| {
            let index = rng.gen_range(0..INVITE_ALPHABET.len());
            INVITE_ALPHABET[index] as char
        })
        .collect()
}
