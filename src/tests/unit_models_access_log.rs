use crate::features::access_log::entry_to_json;
use crate::features::access_log::model::AccessEntry;
use chrono::NaiveDate;

fn sample_entry() -> AccessEntry {
    AccessEntry {
        log_id: 9,
        user_id: Some(3),
        action: Some("check-out".to_string()),
        created_at: NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(12, 30, 45),
    }
}

#[test]
fn test_entry_to_json_formats_timestamp() {
    let json_entry = entry_to_json(&sample_entry(), "%Y-%m-%d %H:%M:%S");

    assert_eq!(json_entry.log_id, 9);
    assert_eq!(json_entry.user_id, Some(3));
    assert_eq!(json_entry.action.as_deref(), Some("check-out"));
    assert_eq!(json_entry.created_at.as_deref(), Some("2024-05-17 12:30:45"));
}

#[test]
fn test_entry_to_json_honors_custom_format() {
    let json_entry = entry_to_json(&sample_entry(), "%Y");

    assert_eq!(json_entry.created_at.as_deref(), Some("2024"));
}

// rows written before the created_at column default existed carry no timestamp
#[test]
fn test_entry_to_json_keeps_missing_timestamp_null() {
    let mut entry = sample_entry();
    entry.created_at = None;

    let json_entry = entry_to_json(&entry, "%Y-%m-%d %H:%M:%S");

    assert_eq!(json_entry.created_at, None);
}
