use chrono::NaiveDate;
use fundtrack::db::collections;
use fundtrack::db::*;
use fundtrack::model::*;
use fundtrack::ops::*;
use fundtrack::queries::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn setup() -> MemoryStore {
    let store = MemoryStore::new();
    collections::initialize(&store).unwrap();
    store
}

fn monthly_box(store: &MemoryStore, name: &str, today: NaiveDate) -> Fund {
    fund_ops::add_box(
        store,
        fund_ops::NewFund::new(name, 100.0, Some(Frequency::Monthly)),
        today,
    )
    .unwrap()
}

fn member_in(store: &MemoryStore, name: &str, teams: Vec<Id<Team>>, funds: Vec<Id<Fund>>) -> Member {
    let mut fields = member_ops::NewMember::named(name);
    fields.team_ids = teams;
    fields.fund_ids = funds;
    fields.phone = "0501234567".into();
    member_ops::add_member(store, fields, d(2024, 1, 1)).unwrap()
}

// ==========================================================================
// PAYMENT STATUS
// ==========================================================================

#[test]
fn end_to_end_status_scenario() {
    let store = setup();
    let fund = monthly_box(&store, "A", d(2024, 1, 1));
    assert_eq!(fund.next_due_date, Some(d(2024, 2, 1)));

    let m = member_in(&store, "M", vec![], vec![fund.id]);
    let status = |today| payment_queries::calculate_payment_status(&store, m.id, fund.id, today);

    assert_eq!(status(d(2024, 1, 15)), PaymentStatus::Pending);
    assert_eq!(status(d(2024, 2, 15)), PaymentStatus::Unpaid);

    member_ops::record_payment(&store, m.id, fund.id, d(2024, 1, 20)).unwrap();
    assert_eq!(status(d(2024, 2, 15)), PaymentStatus::Delayed);
}

#[test]
fn payment_after_due_date_completes() {
    let store = setup();
    let fund = monthly_box(&store, "A", d(2024, 1, 1));
    let m = member_in(&store, "M", vec![], vec![fund.id]);
    member_ops::record_payment(&store, m.id, fund.id, d(2024, 2, 10)).unwrap();

    assert_eq!(
        payment_queries::calculate_payment_status(&store, m.id, fund.id, d(2024, 2, 15)),
        PaymentStatus::Completed
    );
}

#[test]
fn first_recorded_payment_is_the_one_consulted() {
    let store = setup();
    let fund = monthly_box(&store, "A", d(2024, 1, 1));
    let m = member_in(&store, "M", vec![], vec![fund.id]);
    member_ops::record_payment(&store, m.id, fund.id, d(2024, 1, 20)).unwrap();
    member_ops::record_payment(&store, m.id, fund.id, d(2024, 2, 3)).unwrap();

    assert_eq!(
        payment_queries::calculate_payment_status(&store, m.id, fund.id, d(2024, 2, 15)),
        PaymentStatus::Delayed
    );
}

#[test]
fn unresolvable_ids_are_unknown() {
    let store = setup();
    let fund = monthly_box(&store, "A", d(2024, 1, 1));
    let m = member_in(&store, "M", vec![], vec![fund.id]);

    assert_eq!(
        payment_queries::calculate_payment_status(&store, Id::generate(), fund.id, d(2024, 1, 2)),
        PaymentStatus::Unknown
    );
    assert_eq!(
        payment_queries::calculate_payment_status(&store, m.id, Id::generate(), d(2024, 1, 2)),
        PaymentStatus::Unknown
    );
    assert_eq!(
        payment_queries::member_overall_status(&store, Id::generate(), d(2024, 1, 2)),
        PaymentStatus::Unknown
    );
}

#[test]
fn member_payment_status_maps_every_enrolled_fund() {
    let store = setup();
    let a = monthly_box(&store, "A", d(2024, 1, 1));
    let b = monthly_box(&store, "B", d(2024, 1, 20));
    let m = member_in(&store, "M", vec![], vec![a.id, b.id]);

    let statuses = payment_queries::member_payment_status(&store, m.id, d(2024, 2, 10));
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[&a.id], PaymentStatus::Unpaid);
    assert_eq!(statuses[&b.id], PaymentStatus::Pending);

    assert_eq!(
        payment_queries::member_overall_status(&store, m.id, d(2024, 2, 10)),
        PaymentStatus::Unpaid
    );
}

#[test]
fn member_with_no_funds_is_completed_overall() {
    let store = setup();
    let m = member_in(&store, "M", vec![], vec![]);
    assert!(payment_queries::member_payment_status(&store, m.id, d(2024, 1, 1)).is_empty());
    assert_eq!(
        payment_queries::member_overall_status(&store, m.id, d(2024, 1, 1)),
        PaymentStatus::Completed
    );
}

// ==========================================================================
// MEMBER FILTERS
// ==========================================================================

struct Fixture {
    store: MemoryStore,
    north: Team,
    a: Fund,
    b: Fund,
    ali: Member,
    sara: Member,
    omar: Member,
}

/// ali: north, A paid before the due date (delayed on Feb 15), B unpaid
/// sara: north, A paid on time (completed)
/// omar: no team, B only (unpaid)
fn fixture() -> Fixture {
    let store = setup();
    let north = team_ops::add_team(&store, "North", d(2024, 1, 1)).unwrap();
    let a = monthly_box(&store, "A", d(2024, 1, 1));
    let b = monthly_box(&store, "B", d(2024, 1, 1));

    let ali = member_in(&store, "Ali", vec![north.id], vec![a.id, b.id]);
    let sara = member_in(&store, "Sara", vec![north.id], vec![a.id]);
    let omar = member_in(&store, "Omar", vec![], vec![b.id]);

    member_ops::record_payment(&store, ali.id, a.id, d(2024, 1, 20)).unwrap();
    member_ops::record_payment(&store, sara.id, a.id, d(2024, 2, 1)).unwrap();

    Fixture { store, north, a, b, ali, sara, omar }
}

fn names(members: &[Member]) -> Vec<&str> {
    members.iter().map(|m| m.name.as_str()).collect()
}

fn today() -> NaiveDate {
    d(2024, 2, 15)
}

#[test]
fn empty_filter_returns_input_unchanged() {
    let f = fixture();
    let members = member_repo::find_all(&f.store);
    let funds = fund_repo::find_all(&f.store);

    let result = member_queries::filter_members(&members, &funds, &member_queries::MemberFilter::default(), today());
    let ids: Vec<Id<Member>> = result.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![f.ali.id, f.sara.id, f.omar.id]);
}

#[test]
fn filter_by_team() {
    let f = fixture();
    let filter = member_queries::MemberFilter {
        team_id: Some(f.north.id),
        ..Default::default()
    };
    let result = member_queries::members_matching(&f.store, &filter, today());
    assert_eq!(names(&result), vec!["Ali", "Sara"]);
}

#[test]
fn filter_by_fund() {
    let f = fixture();
    let filter = member_queries::MemberFilter {
        fund_id: Some(f.b.id),
        ..Default::default()
    };
    let result = member_queries::members_matching(&f.store, &filter, today());
    assert_eq!(names(&result), vec!["Ali", "Omar"]);
}

#[test]
fn status_with_fund_checks_only_that_fund() {
    let f = fixture();
    let filter = member_queries::MemberFilter {
        fund_id: Some(f.a.id),
        status: Some(PaymentStatus::Unpaid),
        ..Default::default()
    };
    // Ali is unpaid in B but delayed in A.
    assert!(member_queries::members_matching(&f.store, &filter, today()).is_empty());

    let filter = member_queries::MemberFilter {
        fund_id: Some(f.a.id),
        status: Some(PaymentStatus::Delayed),
        ..Default::default()
    };
    assert_eq!(names(&member_queries::members_matching(&f.store, &filter, today())), vec!["Ali"]);
}

#[test]
fn status_without_fund_matches_any_fund() {
    let f = fixture();
    let filter = member_queries::MemberFilter {
        status: Some(PaymentStatus::Unpaid),
        ..Default::default()
    };
    assert_eq!(names(&member_queries::members_matching(&f.store, &filter, today())), vec!["Ali", "Omar"]);

    let filter = member_queries::MemberFilter {
        status: Some(PaymentStatus::Completed),
        ..Default::default()
    };
    assert_eq!(names(&member_queries::members_matching(&f.store, &filter, today())), vec!["Sara"]);
}

#[test]
fn filters_combine_with_and() {
    let f = fixture();
    let filter = member_queries::MemberFilter {
        team_id: Some(f.north.id),
        status: Some(PaymentStatus::Unpaid),
        ..Default::default()
    };
    assert_eq!(names(&member_queries::members_matching(&f.store, &filter, today())), vec!["Ali"]);

    let filter = member_queries::MemberFilter {
        team_id: Some(f.north.id),
        fund_id: Some(f.b.id),
        status: Some(PaymentStatus::Completed),
    };
    assert!(member_queries::members_matching(&f.store, &filter, today()).is_empty());
}

#[test]
fn member_lookups() {
    let f = fixture();
    assert_eq!(member_queries::members_in_team(&f.store, f.north.id).len(), 2);
    assert_eq!(member_queries::members_in_fund(&f.store, f.a.id).len(), 2);
    assert_eq!(member_queries::find_by_name(&f.store, "OMA")[0].id, f.omar.id);
}

// ==========================================================================
// DEPOSITS & BALANCES
// ==========================================================================

#[test]
fn filter_deposits_by_team_fund_and_status() {
    let f = fixture();
    ledger_ops::add_deposit(&f.store, f.ali.id, f.a.id, 100.0, d(2024, 1, 20), DepositStatus::Completed, None).unwrap();
    ledger_ops::add_deposit(&f.store, f.sara.id, f.a.id, 100.0, d(2024, 2, 1), DepositStatus::Late, None).unwrap();
    ledger_ops::add_deposit(&f.store, f.omar.id, f.b.id, 100.0, d(2024, 2, 2), DepositStatus::Unpaid, None).unwrap();

    let by_team = deposit_queries::deposits_matching(
        &f.store,
        &deposit_queries::DepositFilter {
            team_id: Some(f.north.id),
            ..Default::default()
        },
    );
    assert_eq!(by_team.len(), 2);

    let late_in_a = deposit_queries::deposits_matching(
        &f.store,
        &deposit_queries::DepositFilter {
            fund_id: Some(f.a.id),
            status: Some(DepositStatus::Late),
            ..Default::default()
        },
    );
    assert_eq!(late_in_a.len(), 1);
    assert_eq!(late_in_a[0].member_id, f.sara.id);

    assert_eq!(deposit_queries::deposits_for_member(&f.store, f.omar.id).len(), 1);
    assert_eq!(deposit_queries::deposits_matching(&f.store, &Default::default()).len(), 3);
}

#[test]
fn box_balance_counts_received_deposits_minus_withdrawals() {
    let f = fixture();
    ledger_ops::add_deposit(&f.store, f.ali.id, f.a.id, 100.0, d(2024, 1, 20), DepositStatus::Completed, None).unwrap();
    ledger_ops::add_deposit(&f.store, f.sara.id, f.a.id, 50.0, d(2024, 2, 1), DepositStatus::Late, None).unwrap();
    ledger_ops::add_deposit(&f.store, f.ali.id, f.a.id, 70.0, d(2024, 2, 1), DepositStatus::Unpaid, None).unwrap();
    ledger_ops::add_withdrawal(&f.store, f.a.id, 30.0, d(2024, 2, 5), None).unwrap();
    ledger_ops::add_withdrawal(&f.store, f.b.id, 40.0, d(2024, 2, 5), None).unwrap();

    assert_eq!(fund_queries::box_balance(&f.store, f.a.id), 120.0);
    assert_eq!(fund_queries::box_balance(&f.store, f.b.id), -40.0);

    let balances = fund_queries::box_balances(&f.store);
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].fund.id, f.a.id);
    assert_eq!(balances[0].deposited, 150.0);
    assert_eq!(balances[0].withdrawn, 30.0);
}

#[test]
fn funds_for_member_skips_deleted_funds() {
    let f = fixture();
    assert_eq!(fund_queries::funds_for_member(&f.store, f.ali.id).len(), 2);
    fund_ops::delete_box(&f.store, f.b.id).unwrap();
    assert_eq!(fund_queries::funds_for_member(&f.store, f.ali.id).len(), 1);
    assert_eq!(fund_repo::find_all(&f.store).len(), 1);
}

// ==========================================================================
// REMINDERS & DASHBOARD
// ==========================================================================

#[test]
fn reminders_list_unpaid_and_delayed_pairs() {
    let f = fixture();
    let reminders = reminder_queries::pending_reminders(&f.store, today());

    let pairs: Vec<(&str, &str, PaymentStatus)> = reminders
        .iter()
        .map(|r| (r.member.name.as_str(), r.fund.name.as_str(), r.status))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Ali", "A", PaymentStatus::Delayed),
            ("Ali", "B", PaymentStatus::Unpaid),
            ("Omar", "B", PaymentStatus::Unpaid),
        ]
    );
    assert!(reminders.iter().all(|r| r.phone == "966501234567"));
    assert!(reminders[0].message.contains("Ali"));
}

#[test]
fn no_reminders_before_due_date() {
    let f = fixture();
    assert!(reminder_queries::pending_reminders(&f.store, d(2024, 1, 25)).is_empty());
}

#[test]
fn dashboard_counts_overall_statuses() {
    let f = fixture();
    group_ops::add_group(&f.store, "Legacy", d(2024, 1, 1)).unwrap();
    ledger_ops::add_deposit(&f.store, f.sara.id, f.a.id, 100.0, d(2024, 2, 1), DepositStatus::Completed, None).unwrap();
    ledger_ops::add_withdrawal(&f.store, f.b.id, 25.0, d(2024, 2, 2), None).unwrap();

    let stats = stats_queries::dashboard(&f.store, today());
    assert_eq!(stats.total_members, 3);
    assert_eq!(stats.total_funds, 2);
    assert_eq!(stats.total_teams, 1);
    assert_eq!(stats.total_groups, 1);
    assert_eq!(stats.members_delayed, 1);
    assert_eq!(stats.members_unpaid, 1);
    assert_eq!(stats.members_completed, 1);
    assert_eq!(stats.members_pending, 0);
    assert_eq!(stats.total_balance, 75.0);
}
