use std::time::Duration;

use engine::{ExpenseDraft, GroupQuery, Session, SortKey, Store, contact, currency, summary};
use submission::SubmitGate;

mod demo;
mod settings;
mod submission;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "pratwise={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let mut session = Session::new();
    let user = session
        .login(&settings.demo.email, &settings.demo.password)?
        .clone();
    tracing::info!(name = %user.name, email = %user.email, "logged in");

    let mut store = Store::with_groups(demo::sample_groups(&user));
    let latency = Duration::from_millis(settings.ui.submit_latency_ms);

    // Dashboard totals, derived from stored balances on every read.
    let totals = summary::cross_group_summary(store.groups(), user.id);
    tracing::info!(
        net = %currency::format_balance("$", totals.net),
        you_owe = %currency::format_money("$", totals.owed),
        you_are_owed = %currency::format_money("$", totals.owing),
        "balance summary across {} groups",
        store.groups().len()
    );

    // The group listing: filter, then sort, then paginate.
    let mut query = GroupQuery::new();
    let page = query.run(store.groups(), settings.ui.page_size);
    tracing::info!(page = query.page(), total_pages = page.total_pages, "dashboard");
    for group in &page.items {
        let overview = summary::group_overview(group, user.id);
        tracing::info!(
            name = %group.name,
            members = overview.member_count,
            total = %currency::format_money(&group.currency, overview.total_expenses),
            balance = %currency::format_balance(&group.currency, overview.user_balance),
            "group card"
        );
    }

    query.set_search("trip");
    query.set_sort(SortKey::Name);
    let found = query.run(store.groups(), settings.ui.page_size);
    tracing::info!(
        matches = found.items.len(),
        "search \"{}\"",
        query.search_text()
    );

    // Create a group the way the dialog does: pick contacts from the phone
    // book, then submit through the pending gate.
    let phone_book = demo::phone_book();
    let mut picked: Vec<_> = contact::search(&phone_book, "Alice")
        .into_iter()
        .cloned()
        .collect();
    picked.extend(contact::search(&phone_book, "43218").into_iter().cloned());

    let mut gate = SubmitGate::new(latency);
    let group_id = gate
        .submit(|| {
            store
                .create_group(
                    &user,
                    "Goa Trip",
                    "Flights, stay and food",
                    currency::default_symbol(),
                    &picked,
                )
                .map(|group| group.id)
        })
        .await??;

    let group = store.find_group(group_id)?;
    tracing::info!(
        name = %group.name,
        invite_code = %group.invite_code,
        members = group.members.len(),
        "group created"
    );
    for member in &group.members {
        tracing::debug!(initials = %member.initials(), email = %member.email, "member");
    }

    // Record an expense split across everyone.
    let split: Vec<_> = group.members.iter().map(|member| member.id).collect();
    let draft = ExpenseDraft::new(
        "Beach shack dinner",
        96.0,
        user.id,
        split,
        engine::EXPENSE_CATEGORIES[0],
    );
    gate.submit(|| store.add_expense(group_id, draft).map(|_| ()))
        .await??;

    let group = store.find_group(group_id)?;
    let dinner = &group.expenses[0];
    tracing::info!(
        description = %dinner.description,
        total = %currency::format_money(&group.currency, dinner.amount),
        share = %currency::format_money(&group.currency, dinner.per_head_share()),
        split = dinner.split_between.len(),
        "expense added"
    );

    // Invite one more member by email; they start at a zero balance.
    gate.submit(|| store.add_member(group_id, "henry@example.com").map(|_| ()))
        .await??;

    // Rename the group and switch its currency.
    let euro = currency::by_code("EUR").map_or("€", |info| info.symbol);
    gate.submit(|| {
        store
            .update_settings(group_id, "Goa Trip 2024", "Flights, stay and food", euro)
            .map(|_| ())
    })
    .await??;

    let group = store.find_group(group_id)?;
    tracing::info!(
        name = %group.name,
        currency = %group.currency,
        members = group.members.len(),
        "settings updated"
    );

    // Joining by invite code is a stub; surface that instead of faking it.
    if let Err(err) = store.join_group("ROOM24") {
        tracing::warn!("join group: {err}");
    }

    session.logout();
    tracing::info!("logged out");
    Ok(())
}
