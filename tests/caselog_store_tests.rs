mod common;
use common::{temp_out, utc};

use rusqlite::Connection;
use shiftlogger::cli::commands::report::{parse_multiplier, resolve_multipliers};
use shiftlogger::config::migrate::{migrate_config_file, missing_keys};
use shiftlogger::config::Config;
use shiftlogger::core::caselog::CaseLog;
use shiftlogger::core::logic::Core;
use shiftlogger::db::initialize::init_db;
use shiftlogger::db::store::{CASE_LOG_KEY, KvStore, REMINDERS_KEY, SCHEDULE_KEY};
use shiftlogger::errors::AppError;
use shiftlogger::models::case_entry::CaseLogEntry;
use shiftlogger::models::category::{CaseCategory, PerCategory};
use std::fs;

fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init db");
    conn
}

fn entry(id: &str, category: CaseCategory) -> CaseLogEntry {
    CaseLogEntry::new(id, category, utc("2025-03-20T10:00:00Z"))
}

#[test]
fn test_category_labels() {
    assert_eq!(
        CaseCategory::from_label("Fab Submission Support New"),
        Some(CaseCategory::NewSubmission)
    );
    assert_eq!(
        CaseCategory::from_label("fab submission support update"),
        Some(CaseCategory::Update)
    );
    assert_eq!(
        CaseCategory::from_label("FAB Support Queue"),
        Some(CaseCategory::FabSupport)
    );
    assert_eq!(
        CaseCategory::from_label("FAB Seller Support"),
        Some(CaseCategory::FabSupport)
    );
    assert_eq!(CaseCategory::from_label(" new "), Some(CaseCategory::NewSubmission));
    assert_eq!(CaseCategory::from_label("UPDATE"), Some(CaseCategory::Update));
    assert_eq!(CaseCategory::from_label("billing"), None);
    assert_eq!(CaseCategory::NewSubmission.to_string(), "NEW SUBMISSIONS");
}

#[test]
fn test_duplicate_case_is_ignored() {
    let mut log = CaseLog::new();

    assert!(log.insert(entry("101", CaseCategory::NewSubmission)));
    assert!(!log.insert(entry("101", CaseCategory::Update)));

    assert_eq!(log.len(), 1);
    assert_eq!(log.entries()[0].category, CaseCategory::NewSubmission);
}

#[test]
fn test_counts_edit_and_delete() {
    let mut log = CaseLog::from_entries(vec![
        entry("101", CaseCategory::NewSubmission),
        entry("102", CaseCategory::Update),
        entry("103", CaseCategory::NewSubmission),
        entry("103", CaseCategory::FabSupport),
    ]);

    assert_eq!(log.len(), 3);
    let counts = log.counts();
    assert_eq!(*counts.get(CaseCategory::NewSubmission), 2);
    assert_eq!(*counts.get(CaseCategory::Update), 1);
    assert_eq!(*counts.get(CaseCategory::FabSupport), 0);

    log.set_category(1, CaseCategory::FabSupport).expect("valid index");
    assert_eq!(*log.counts().get(CaseCategory::FabSupport), 1);

    let removed = log.delete(0).expect("valid index");
    assert_eq!(removed.case_id, "101");
    assert_eq!(log.entries()[0].case_id, "102");

    assert!(matches!(
        log.delete(5),
        Err(AppError::InvalidCaseIndex(6))
    ));
    assert!(matches!(
        log.set_category(2, CaseCategory::Update),
        Err(AppError::InvalidCaseIndex(3))
    ));

    log.clear();
    assert!(log.is_empty());
}

#[test]
fn test_clipboard_summary_groups_ids() {
    let log = CaseLog::from_entries(vec![
        entry("101", CaseCategory::NewSubmission),
        entry("102", CaseCategory::Update),
        entry("103", CaseCategory::NewSubmission),
    ]);

    assert_eq!(
        log.clipboard_summary(),
        "NEW SUBMISSIONS: 101, 103\nUPDATE: 102"
    );
    assert_eq!(CaseLog::new().clipboard_summary(), "");
}

#[test]
fn test_text_listing_layout() {
    let log = CaseLog::from_entries(vec![
        entry("101", CaseCategory::NewSubmission),
        entry("102", CaseCategory::Update),
    ]);

    let text = log.to_text();

    assert!(text.starts_with("Case Number: 101\nCase Type: NEW SUBMISSIONS\nTime: "));
    assert!(text.contains("\n\nCase Number: 102\nCase Type: UPDATE\nTime: "));
}

#[test]
fn test_store_get_set_remove() {
    let conn = memory_db();
    let store = KvStore::new(&conn);

    assert_eq!(store.get("missing").expect("get"), None);

    store.set("k", "one").expect("set");
    store.set("k", "two").expect("overwrite");
    assert_eq!(store.get("k").expect("get").as_deref(), Some("two"));
    assert_eq!(store.keys().expect("keys"), vec!["k".to_string()]);

    assert!(store.remove("k").expect("remove"));
    assert!(!store.remove("k").expect("remove again"));
}

#[test]
fn test_store_flags_default_to_false() {
    let conn = memory_db();
    let store = KvStore::new(&conn);

    assert!(!store.get_flag(REMINDERS_KEY).expect("flag"));
    store.set_flag(REMINDERS_KEY, true).expect("set flag");
    assert!(store.get_flag(REMINDERS_KEY).expect("flag"));
    store.set_flag(REMINDERS_KEY, false).expect("set flag");
    assert!(!store.get_flag(REMINDERS_KEY).expect("flag"));
}

#[test]
fn test_case_log_persists_in_store() {
    let conn = memory_db();
    let store = KvStore::new(&conn);

    assert!(CaseLog::load(&store).expect("load").is_empty());

    let log = CaseLog::from_entries(vec![
        entry("101", CaseCategory::NewSubmission),
        entry("102", CaseCategory::FabSupport),
    ]);
    log.save(&store).expect("save");

    let raw = store.get(CASE_LOG_KEY).expect("get").expect("stored");
    assert!(raw.contains("\"FAB SUPPORT\""));
    assert_eq!(CaseLog::load(&store).expect("load"), log);
}

#[test]
fn test_migrations_are_idempotent() {
    let conn = memory_db();
    init_db(&conn).expect("second init");

    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .expect("count migrations");
    assert_eq!(applied, 2);
}

#[test]
fn test_empty_import_keeps_previous_schedule() {
    let conn = memory_db();
    let store = KvStore::new(&conn);
    let cfg = Config::default();

    assert!(Core::load_schedule(&store, &cfg).expect("load").is_none());

    let text = common::calendar(&[common::vevent(
        "20250310T090000",
        "20250310T170000",
        "Day shift",
    )]);
    let summary = Core::import_schedule(&store, &cfg, &text).expect("import");
    assert_eq!(summary.imported, 1);

    let summary = Core::import_schedule(&store, &cfg, "garbage").expect("import");
    assert_eq!(summary.imported, 0);

    let schedule = Core::load_schedule(&store, &cfg)
        .expect("load")
        .expect("schedule kept");
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].start, utc("2025-03-10T17:00:00Z"));
    assert!(store.get(SCHEDULE_KEY).expect("get").is_some());
}

#[test]
fn test_multiplier_overrides() {
    assert_eq!(
        parse_multiplier("new=1.2").expect("valid override"),
        (CaseCategory::NewSubmission, 1.2)
    );
    assert_eq!(
        parse_multiplier("support = 2").expect("valid override"),
        (CaseCategory::FabSupport, 2.0)
    );
    assert!(matches!(
        parse_multiplier("new"),
        Err(AppError::InvalidMultiplier(_))
    ));
    assert!(matches!(
        parse_multiplier("billing=2"),
        Err(AppError::InvalidMultiplier(_))
    ));
    assert!(matches!(
        parse_multiplier("update=fast"),
        Err(AppError::InvalidMultiplier(_))
    ));

    let resolved = resolve_multipliers(
        PerCategory::default_multipliers(),
        &["update=50".to_string(), "new=2".to_string()],
    )
    .expect("valid overrides");
    assert_eq!(*resolved.get(CaseCategory::Update), 10.0);
    assert_eq!(*resolved.get(CaseCategory::NewSubmission), 2.0);
    assert_eq!(*resolved.get(CaseCategory::FabSupport), 1.0);
}

#[test]
fn test_config_migration_fills_missing_keys() {
    let path = temp_out("config_migration", "conf");
    fs::write(
        &path,
        "database: /tmp/custom.sqlite\ndisplayed_shifts: 6\nmultipliers:\n  update: 2.0\n",
    )
    .expect("write config");
    let path = std::path::Path::new(&path);

    let missing = missing_keys(path).expect("check");
    assert!(missing.contains(&"lookback_days".to_string()));
    assert!(missing.contains(&"multipliers.new_submission".to_string()));
    assert!(!missing.contains(&"multipliers.update".to_string()));
    assert!(!missing.contains(&"database".to_string()));

    let added = migrate_config_file(path).expect("migrate");
    assert_eq!(added, missing);
    assert!(missing_keys(path).expect("re-check").is_empty());

    let cfg: Config =
        serde_yaml::from_str(&fs::read_to_string(path).expect("read")).expect("parse");
    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert_eq!(cfg.displayed_shifts, 6);
    assert_eq!(cfg.multipliers.update, 2.0);
    assert_eq!(cfg.multipliers.new_submission, 1.5);
    assert_eq!(cfg.lookback_days, 3);
}
