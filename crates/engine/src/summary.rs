//! Balance views derived at read time; nothing here mutates stored data.

use uuid::Uuid;

use crate::group::Group;

/// The acting user's position across every group.
///
/// `owed` sums what the user owes (absolute values of negative balances),
/// `owing` sums what the user is owed (positive balances), and
/// `net = owing - owed`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BalanceSummary {
    pub net: f64,
    pub owed: f64,
    pub owing: f64,
}

/// The stored balance of `member_id` in `group`, zero when absent.
pub fn member_balance(group: &Group, member_id: Uuid) -> f64 {
    group
        .member(member_id)
        .map_or(0.0, |member| member.balance)
}

/// Recomputed from scratch on every call; groups the user is not a member of
/// contribute zero.
pub fn cross_group_summary(groups: &[Group], user_id: Uuid) -> BalanceSummary {
    let mut summary = BalanceSummary::default();
    for group in groups {
        let balance = member_balance(group, user_id);
        summary.net += balance;
        if balance < 0.0 {
            summary.owed += -balance;
        } else {
            summary.owing += balance;
        }
    }
    summary
}

/// Numbers shown on one group card.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupOverview {
    pub member_count: usize,
    pub expense_count: usize,
    pub total_expenses: f64,
    pub user_balance: f64,
}

pub fn group_overview(group: &Group, user_id: Uuid) -> GroupOverview {
    GroupOverview {
        member_count: group.members.len(),
        expense_count: group.expenses.len(),
        total_expenses: group.total_expenses(),
        user_balance: member_balance(group, user_id),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::member::Member;

    use super::*;

    fn group_with_balances(balances: &[(Uuid, f64)]) -> Group {
        Group {
            id: Uuid::new_v4(),
            name: "Roommates".to_string(),
            description: String::new(),
            members: balances
                .iter()
                .enumerate()
                .map(|(index, (id, balance))| {
                    let mut member =
                        Member::new(*id, format!("Member {index}"), format!("m{index}@example.com"));
                    member.balance = *balance;
                    member
                })
                .collect(),
            expenses: Vec::new(),
            currency: "$".to_string(),
            invite_code: "ROOM24".to_string(),
            created_by: balances.first().map(|(id, _)| *id).unwrap_or_default(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn member_balance_reads_stored_value() {
        let user = Uuid::new_v4();
        let group = group_with_balances(&[
            (user, -123.75),
            (Uuid::new_v4(), 45.25),
            (Uuid::new_v4(), 78.50),
            (Uuid::new_v4(), 0.0),
        ]);

        assert_eq!(member_balance(&group, user), -123.75);
        assert_eq!(member_balance(&group, Uuid::new_v4()), 0.0);
    }

    #[test]
    fn summary_nets_across_groups() {
        let user = Uuid::new_v4();
        let groups = vec![
            group_with_balances(&[(user, -123.75), (Uuid::new_v4(), 123.75)]),
            group_with_balances(&[(user, 85.25)]),
            // Not a member here; contributes nothing.
            group_with_balances(&[(Uuid::new_v4(), 50.0)]),
        ];

        let summary = cross_group_summary(&groups, user);
        assert_eq!(summary.owed, 123.75);
        assert_eq!(summary.owing, 85.25);
        assert!((summary.net - (summary.owing - summary.owed)).abs() < 1e-9);
    }

    #[test]
    fn overview_counts_and_totals() {
        let user = Uuid::new_v4();
        let group = group_with_balances(&[(user, 12.30), (Uuid::new_v4(), -12.30)]);

        let overview = group_overview(&group, user);
        assert_eq!(overview.member_count, 2);
        assert_eq!(overview.expense_count, 0);
        assert_eq!(overview.total_expenses, 0.0);
        assert_eq!(overview.user_balance, 12.30);
    }
}
