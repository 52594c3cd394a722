use std::fs;

use chrono::NaiveDate;
use daybook_core::{SnapshotStorage, Store};
use daybook_domain::{
    Expense, ExpenseCategory, ExpensePeriod, Group, Income, Investment, InvestmentKind, Loan,
    LoanKind, Reminder, SavingsGoal, SavingsTransaction, ShoppingItem, Snapshot,
};
use daybook_storage_json::JsonSnapshotStorage;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn populated_snapshot() -> Snapshot {
    let group = Group::new("Errands").with_color("green");
    let mut period = ExpensePeriod::new(date(2024, 3, 1), date(2024, 4, 1));
    period
        .incomes
        .push(Income::new("Salary", 3000.0, date(2024, 3, 1)));
    period.expenses.push(Expense::new(
        "Groceries",
        120.0,
        ExpenseCategory::Groceries,
        date(2024, 3, 4),
    ));

    let mut goal = SavingsGoal::new("Holiday", 2000.0);
    goal.apply(SavingsTransaction::new(400.0).on(date(2024, 3, 10)));

    Snapshot {
        reminders: vec![Reminder::new("Pay rent").with_group(group.id)],
        groups: vec![group],
        shopping_items: vec![ShoppingItem::new("Desk lamp", "https://example.com/lamp")
            .with_price(45.0)
            .with_quantity(2)],
        periods: vec![period],
        goals: vec![goal],
        investments: vec![Investment::new(
            "Index fund",
            1500.0,
            InvestmentKind::Fund,
            date(2024, 1, 2),
        )
        .with_current_value(1650.0)],
        loans: vec![Loan::new(
            "Car loan",
            12000.0,
            8.5,
            date(2024, 1, 1),
            date(2027, 1, 1),
            LoanKind::Vehicle,
        )],
        expenses: vec![Expense::new(
            "Coffee",
            4.5,
            ExpenseCategory::Personal,
            date(2024, 3, 5),
        )],
    }
}

#[test]
fn save_then_load_round_trips_the_full_document() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSnapshotStorage::in_dir(dir.path()).expect("create storage");

    let snapshot = populated_snapshot();
    storage.save(&snapshot).expect("save snapshot");
    let loaded = storage.load().expect("load snapshot");

    assert_eq!(loaded, snapshot);
}

#[test]
fn save_leaves_no_temporary_file_behind() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSnapshotStorage::in_dir(dir.path()).expect("create storage");
    storage.save(&Snapshot::default()).expect("save snapshot");

    let entries: Vec<_> = fs::read_dir(dir.path())
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("daybook.json")]);
}

#[test]
fn loading_a_missing_file_errors() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSnapshotStorage::new(dir.path().join("missing.json"));
    assert!(storage.load().is_err());
}

#[test]
fn loading_a_corrupt_file_errors() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSnapshotStorage::in_dir(dir.path()).expect("create storage");
    fs::write(storage.path(), "{ not json").expect("write corrupt file");
    assert!(storage.load().is_err());
}

#[test]
fn store_over_corrupt_file_starts_empty_and_recovers_on_save() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSnapshotStorage::in_dir(dir.path()).expect("create storage");
    fs::write(storage.path(), "{ not json").expect("write corrupt file");

    let mut store = Store::open(
        Box::new(storage.clone()),
        Box::new(daybook_core::NullNotifier),
    );
    assert!(store.snapshot().is_empty());

    store.add_group(Group::new("Fresh")).expect("add group");
    let reloaded = storage.load().expect("load repaired snapshot");
    assert_eq!(reloaded.groups.len(), 1);
}

#[test]
fn overwriting_replaces_the_previous_document() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSnapshotStorage::in_dir(dir.path()).expect("create storage");

    storage.save(&populated_snapshot()).expect("first save");
    storage.save(&Snapshot::default()).expect("second save");

    assert!(storage.load().expect("load").is_empty());
}
