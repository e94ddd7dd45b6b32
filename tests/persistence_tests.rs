use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;
use uuid::Uuid;

use lifetrack_core::{
    config::{Config, ConfigManager},
    domain::{Expense, Income, IncomeCategory, Journal},
    errors::TrackerError,
    storage::{JsonStorage, StorageBackend},
};

fn sample_journal(user: Uuid) -> Journal {
    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
    let mut journal = Journal::new(user);
    journal
        .incomes
        .push(Income::new(user, "Salary", 1200.0, date, IncomeCategory::Active));
    journal
        .expenses
        .push(Expense::new(user, "Groceries", 85.5, date, "Food"));
    journal
}

#[test]
fn journal_roundtrips_through_json_storage() {
    let dir = TempDir::new().unwrap();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
    let user = Uuid::new_v4();
    let journal = sample_journal(user);

    storage.save(&journal).unwrap();
    assert!(storage.exists(user));

    let loaded = storage.load(user).unwrap();
    assert_eq!(loaded.user_id, user);
    assert_eq!(loaded.incomes, journal.incomes);
    assert_eq!(loaded.expenses, journal.expenses);
    assert_eq!(loaded.schema_version, journal.schema_version);
}

#[test]
fn missing_journal_is_not_found_but_load_or_create_recovers() {
    let dir = TempDir::new().unwrap();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
    let user = Uuid::new_v4();

    match storage.load(user) {
        Err(TrackerError::NotFound(message)) => assert!(message.contains(&user.to_string())),
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }

    let fresh = storage.load_or_create(user).unwrap();
    assert_eq!(fresh.user_id, user);
    assert!(fresh.incomes.is_empty());
    // load_or_create does not persist implicitly.
    assert!(!storage.exists(user));
}

#[test]
fn corrupt_journal_surfaces_a_serde_error() {
    let dir = TempDir::new().unwrap();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
    let user = Uuid::new_v4();
    fs::write(storage.journal_path(user), "{ not json").unwrap();

    match storage.load(user) {
        Err(TrackerError::Serde(_)) => {}
        other => panic!("expected Serde error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn list_users_only_reports_journal_files() {
    let dir = TempDir::new().unwrap();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    storage.save(&sample_journal(first)).unwrap();
    storage.save(&sample_journal(second)).unwrap();
    fs::write(dir.path().join("journals").join("readme.txt"), "ignore me").unwrap();

    let mut expected = vec![first, second];
    expected.sort();
    assert_eq!(storage.list_users().unwrap(), expected);

    storage.delete(first).unwrap();
    assert_eq!(storage.list_users().unwrap(), vec![second]);
    storage.delete(first).expect_err("double delete should fail");
}

#[test]
fn config_defaults_then_roundtrips() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.locale, "en-US");
    assert_eq!(config.currency, "USD");

    let updated = Config {
        locale: "pt-PT".into(),
        currency: "EUR".into(),
        theme: Some("dark".into()),
    };
    manager.save(&updated).unwrap();

    let reloaded = manager.load().unwrap();
    assert_eq!(reloaded.locale, "pt-PT");
    assert_eq!(reloaded.currency, "EUR");
    assert_eq!(reloaded.theme.as_deref(), Some("dark"));
}
