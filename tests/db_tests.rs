use chrono::NaiveDate;
use fundtrack::db::collections::{self, Collection};
use fundtrack::db::*;
use fundtrack::model::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn setup() -> MemoryStore {
    let store = MemoryStore::new();
    collections::initialize(&store).unwrap();
    store
}

// ==========================================================================
// STORE BOUNDARY
// ==========================================================================

#[test]
fn initialize_creates_every_collection_key() {
    let store = setup();
    for collection in Collection::ALL {
        assert_eq!(store.raw(collection.key()), Some("[]".to_string()));
    }
}

#[test]
fn collections_are_stored_under_their_keys() {
    let store = setup();
    member_repo::insert(&store, Member::create("Ali".into(), d(2024, 1, 1))).unwrap();
    fund_repo::insert(&store, Fund::create("Box".into(), 50.0, Some(Frequency::Monthly), d(2024, 1, 1))).unwrap();

    assert!(store.raw("members").unwrap().contains("Ali"));
    assert!(store.raw("boxes").unwrap().contains("Box"));
}

#[test]
fn records_use_camel_case_json() {
    let store = setup();
    let mut fund = Fund::create("Box".into(), 50.0, Some(Frequency::Quarterly), d(2024, 1, 1));
    fund.next_due_date = Some(d(2024, 4, 1));
    fund_repo::insert(&store, fund).unwrap();

    let raw = store.raw("boxes").unwrap();
    assert!(raw.contains("\"nextDueDate\":\"2024-04-01\""));
    assert!(raw.contains("\"frequency\":\"quarterly\""));
    assert!(raw.contains("\"createdAt\":\"2024-01-01\""));
}

#[test]
fn corrupt_collection_degrades_to_empty() {
    let store = setup();
    store.set("members", "[{\"id\": 12").unwrap();
    assert!(member_repo::find_all(&store).is_empty());
}

#[test]
fn failed_write_leaves_store_unchanged() {
    let store = setup();
    let team = team_repo::insert(&store, Team::create("North".into(), d(2024, 1, 1))).unwrap();
    store.set_fail_writes(true);

    assert!(team_repo::insert(&store, Team::create("South".into(), d(2024, 1, 1))).is_err());
    store.set_fail_writes(false);

    let teams = team_repo::find_all(&store);
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, team.id);
}

#[test]
fn sqlite_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("funds.db");

    let member_id = {
        let store = SqliteStore::open(&path).unwrap();
        collections::initialize(&store).unwrap();
        member_repo::insert(&store, Member::create("Huda".into(), d(2024, 1, 1)))
            .unwrap()
            .id
    };

    let store = SqliteStore::open(&path).unwrap();
    let found = member_repo::find_by_id(&store, member_id).unwrap();
    assert_eq!(found.name, "Huda");
}

// ==========================================================================
// LENIENT READS
// ==========================================================================

#[test]
fn unknown_frequency_and_bad_due_date_read_as_unset() {
    let store = setup();
    let id = Id::<Fund>::generate();
    let json = format!(
        "[{{\"id\":\"{}\",\"name\":\"Old\",\"amount\":10,\"frequency\":\"weekly\",\"nextDueDate\":\"\",\"createdAt\":\"2023-05-01\"}}]",
        id
    );
    store.set("boxes", &json).unwrap();

    let fund = fund_repo::find_by_id(&store, id).unwrap();
    assert_eq!(fund.frequency, None);
    assert_eq!(fund.next_due_date, None);
    assert!(fund.team_ids.is_empty());
}

#[test]
fn member_without_optional_fields_reads() {
    let store = setup();
    let id = Id::<Member>::generate();
    let json = format!(
        "[{{\"id\":\"{}\",\"name\":\"Omar\",\"financialStatus\":\"difficult\",\"jobStatus\":\"retired\",\"joinDate\":\"2023-01-01\"}}]",
        id
    );
    store.set("members", &json).unwrap();

    let member = member_repo::find_by_id(&store, id).unwrap();
    assert_eq!(member.financial_status, FinancialStatus::Difficult);
    assert_eq!(member.job_status, JobStatus::Retired);
    assert!(member.payment_history.is_empty());
    assert!(member.team_ids.is_empty());
    assert_eq!(member.birth_date, None);
}

// ==========================================================================
// REPO FINDERS
// ==========================================================================

#[test]
fn member_finders() {
    let store = setup();
    let team = team_repo::insert(&store, Team::create("North".into(), d(2024, 1, 1))).unwrap();
    let fund = fund_repo::insert(&store, Fund::create("Box".into(), 50.0, None, d(2024, 1, 1))).unwrap();

    let mut ali = Member::create("Ali Hassan".into(), d(2024, 1, 1));
    ali.team_ids.push(team.id);
    member_repo::insert(&store, ali).unwrap();

    let mut sara = Member::create("Sara".into(), d(2024, 1, 1));
    sara.fund_ids.push(fund.id);
    member_repo::insert(&store, sara).unwrap();

    assert_eq!(member_repo::find_by_team(&store, team.id).len(), 1);
    assert_eq!(member_repo::find_by_fund(&store, fund.id)[0].name, "Sara");
    assert_eq!(member_repo::find_by_name(&store, "hassan")[0].name, "Ali Hassan");
}

#[test]
fn deposits_for_member_are_newest_first() {
    let store = setup();
    let member = Id::<Member>::generate();
    let fund = Id::<Fund>::generate();
    for day in [3, 10, 1] {
        deposit_repo::insert(
            &store,
            Deposit::create(member, fund, 10.0, d(2024, 1, day), DepositStatus::Completed, None),
        )
        .unwrap();
    }

    let dates: Vec<NaiveDate> = deposit_repo::find_by_member(&store, member)
        .iter()
        .map(|dep| dep.date)
        .collect();
    assert_eq!(dates, vec![d(2024, 1, 10), d(2024, 1, 3), d(2024, 1, 1)]);
}
