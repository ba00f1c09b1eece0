#[path = "../src/data/sessions.rs"]
mod sessions;

use chrono::Utc;
use sessions::{SessionStore, SettingsUpdate, SESSION_MAX_AGE_MS};

#[test]
fn get_or_create_is_idempotent() {
    let store = SessionStore::new();

    let first = store.get_or_create("session-1").unwrap();
    let second = store.get_or_create("session-1").unwrap();

    assert_eq!(first.created_at, second.created_at);
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn new_sessions_get_default_settings() {
    let store = SessionStore::new();
    let settings = store.settings("fresh").unwrap();

    assert!(settings.session_token.is_empty());
    assert!(!settings.auto_refresh);
    assert_eq!(settings.refresh_interval, 30);
}

#[test]
fn refresh_interval_respects_bounds() {
    let store = SessionStore::new();

    let settings = store
        .update_settings(
            "s",
            SettingsUpdate {
                refresh_interval: Some(60),
                ..SettingsUpdate::default()
            },
        )
        .unwrap();
    assert_eq!(settings.refresh_interval, 60);

    // Out-of-range updates retain the prior value.
    for out_of_range in [0, 4, 301, 10_000] {
        let settings = store
            .update_settings(
                "s",
                SettingsUpdate {
                    refresh_interval: Some(out_of_range),
                    ..SettingsUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(settings.refresh_interval, 60);
    }

    for boundary in [5, 300] {
        let settings = store
            .update_settings(
                "s",
                SettingsUpdate {
                    refresh_interval: Some(boundary),
                    ..SettingsUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(settings.refresh_interval, boundary);
    }
}

#[test]
fn partial_updates_keep_other_fields() {
    let store = SessionStore::new();

    store
        .update_settings(
            "s",
            SettingsUpdate {
                session_token: Some("tok".to_string()),
                ..SettingsUpdate::default()
            },
        )
        .unwrap();

    let settings = store
        .update_settings(
            "s",
            SettingsUpdate {
                auto_refresh: Some(true),
                ..SettingsUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(settings.session_token, "tok");
    assert!(settings.auto_refresh);
}

#[test]
fn accounts_keep_insertion_order_and_clear_keeps_session() {
    let store = SessionStore::new();
    let created = store.get_or_create("s").unwrap().created_at;

    for id in ["a1", "a2", "a3"] {
        store
            .append_account(
                "s",
                sessions::Account {
                    id: id.to_string(),
                    email: format!("{}@example.com", id),
                    password: "pw".to_string(),
                    balance: 0,
                    status: sessions::AccountStatus::Active,
                    created_at: Utc::now().to_rfc3339(),
                },
            )
            .unwrap();
    }

    let accounts = store.accounts("s").unwrap();
    let ids: Vec<&str> = accounts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a1", "a2", "a3"]);

    assert_eq!(store.clear_accounts("s").unwrap(), 3);
    assert!(store.accounts("s").unwrap().is_empty());

    // Clearing wipes accounts, not the session itself.
    assert_eq!(store.get_or_create("s").unwrap().created_at, created);
}

#[test]
fn record_balance_returns_previous_total() {
    let store = SessionStore::new();

    assert_eq!(store.last_balance("s").unwrap(), 0);
    assert_eq!(store.record_balance("s", 42).unwrap(), 0);
    assert_eq!(store.record_balance("s", 40).unwrap(), 42);
    assert_eq!(store.last_balance("s").unwrap(), 40);

    // Totals are tracked per session.
    assert_eq!(store.last_balance("other").unwrap(), 0);
}

#[test]
fn sweep_removes_only_expired_sessions() {
    let store = SessionStore::new();
    let now = Utc::now().timestamp_millis();

    store
        .insert_aged("old", now - 25 * 60 * 60 * 1000)
        .unwrap();
    store.insert_aged("young", now - 60 * 60 * 1000).unwrap();

    store.sweep_expired(SESSION_MAX_AGE_MS).unwrap();

    let remaining: Vec<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(remaining, ["young"]);
}
