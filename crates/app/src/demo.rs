//! Demo dataset: sample groups for the dashboard and a mock phone book.
//!
//! Stands in for the backend the app does not have; everything lives in
//! memory and is rebuilt on every start.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use engine::{Contact, Expense, Group, Member, User, group::invite_code};

/// Sample groups seeded for `user`, newest first.
pub fn sample_groups(user: &User) -> Vec<Group> {
    let mut groups = vec![
        roommates(user),
        weekend_trip(user),
        solo_group(
            user,
            "Office Lunch",
            "Team lunch expenses",
            "$",
            "LUNCH2",
            -15.50,
            created(2024, 2, 1),
        ),
        solo_group(
            user,
            "Family Vacation",
            "Summer trip to Italy",
            "€",
            "ITALY2",
            245.80,
            created(2024, 2, 15),
        ),
        solo_group(
            user,
            "Book Club",
            "Monthly book purchases",
            "$",
            "BOOKS2",
            12.30,
            created(2024, 3, 1),
        ),
        solo_group(
            user,
            "Gym Membership",
            "Shared fitness expenses",
            "$",
            "GYM240",
            -89.99,
            created(2024, 3, 10),
        ),
        solo_group(
            user,
            "Concert Night",
            "Music festival tickets",
            "$",
            "MUSIC2",
            67.50,
            created(2024, 3, 20),
        ),
    ];
    groups.reverse();
    groups
}

/// The "Roommates" group: four members with seeded balances and one recorded
/// expense.
fn roommates(user: &User) -> Group {
    let alice = member("Alice Johnson", "alice@example.com", 45.25);
    let bob = member("Bob Wilson", "bob@example.com", 78.50);
    let carol = member("Carol Davis", "carol@example.com", 0.0);

    let mut me = Member::new(user.id, user.name.clone(), user.email.clone());
    me.balance = -123.75;

    let groceries = Expense {
        id: Uuid::new_v4(),
        description: "Grocery shopping".to_string(),
        amount: 156.80,
        paid_by: alice.id,
        paid_by_name: alice.name.clone(),
        split_between: vec![me.id, alice.id, bob.id, carol.id],
        date: Utc::now(),
        category: "Groceries".to_string(),
    };

    Group {
        id: Uuid::new_v4(),
        name: "Roommates".to_string(),
        description: "Shared apartment expenses".to_string(),
        members: vec![me, alice, bob, carol],
        expenses: vec![groceries],
        currency: "$".to_string(),
        invite_code: invite_code(),
        created_by: user.id,
        created_at: created(2024, 1, 1),
    }
}

fn weekend_trip(user: &User) -> Group {
    let mut me = Member::new(user.id, user.name.clone(), user.email.clone());
    me.balance = 85.25;

    Group {
        id: Uuid::new_v4(),
        name: "Weekend Trip".to_string(),
        description: "Mountain cabin getaway".to_string(),
        members: vec![me, member("David Lee", "david@example.com", -25.75)],
        expenses: Vec::new(),
        currency: "$".to_string(),
        invite_code: "TRIP24".to_string(),
        created_by: user.id,
        created_at: created(2024, 1, 15),
    }
}

/// A group where the demo user is the only member, with a seeded balance.
fn solo_group(
    user: &User,
    name: &str,
    description: &str,
    currency: &str,
    code: &str,
    balance: f64,
    created_at: DateTime<Utc>,
) -> Group {
    let mut me = Member::new(user.id, user.name.clone(), user.email.clone());
    me.balance = balance;

    Group {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        members: vec![me],
        expenses: Vec::new(),
        currency: currency.to_string(),
        invite_code: code.to_string(),
        created_by: user.id,
        created_at,
    }
}

fn member(name: &str, email: &str, balance: f64) -> Member {
    let mut member = Member::new(Uuid::new_v4(), name, email);
    member.balance = balance;
    member
}

fn created(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The mock phone book shown by the contact picker.
pub fn phone_book() -> Vec<Contact> {
    vec![
        Contact::new("Alice Johnson", "+91 98765 43210").email("alice@example.com"),
        Contact::new("Bob Wilson", "+91 98765 43211").email("bob@example.com"),
        Contact::new("Carol Davis", "+91 98765 43212").email("carol@example.com"),
        Contact::new("David Lee", "+91 98765 43213").email("david@example.com"),
        Contact::new("Emma Brown", "+91 98765 43214").email("emma@example.com"),
        Contact::new("Frank Miller", "+91 98765 43215").email("frank@example.com"),
        Contact::new("Grace Taylor", "+91 98765 43216").email("grace@example.com"),
        Contact::new("Henry Anderson", "+91 98765 43217").email("henry@example.com"),
        Contact::new("Ivy Chen", "+91 98765 43218"),
        Contact::new("Jack Smith", "+91 98765 43219"),
    ]
}

#[cfg(test)]
mod tests {
    use engine::summary;

    use super::*;

    fn demo_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn seeds_seven_groups_newest_first() {
        let user = demo_user();
        let groups = sample_groups(&user);

        assert_eq!(groups.len(), 7);
        assert!(
            groups
                .windows(2)
                .all(|pair| pair[0].created_at >= pair[1].created_at)
        );
        assert!(groups.iter().all(|group| group.is_member(user.id)));
    }

    #[test]
    fn roommates_balances_are_consistent() {
        let user = demo_user();
        let groups = sample_groups(&user);
        let roommates = groups
            .iter()
            .find(|group| group.name == "Roommates")
            .unwrap();

        let sum: f64 = roommates.members.iter().map(|member| member.balance).sum();
        assert!(sum.abs() < 1e-9);
        assert_eq!(summary::member_balance(roommates, user.id), -123.75);
        assert_eq!(roommates.expenses[0].split_between.len(), 4);
    }
}
