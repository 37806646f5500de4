use serde_json::json;
use slm_domain::defines::{AlertLevel, EquipmentState, LogEntryType, RinexVersion, SiteLogStatus};

#[test]
fn defines_serialize_as_their_numeric_value() {
    assert_eq!(serde_json::to_value(SiteLogStatus::Published).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(LogEntryType::LogUpload).unwrap(), json!(6));
    assert_eq!(serde_json::to_value(AlertLevel::Error).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(EquipmentState::Active).unwrap(), json!(100));
    assert_eq!(serde_json::to_value(RinexVersion::V3_04).unwrap(), json!(304));
}

#[test]
fn defines_deserialize_from_numeric_values() {
    let status: SiteLogStatus = serde_json::from_value(json!(2)).unwrap();
    assert_eq!(status, SiteLogStatus::Updated);

    let version: RinexVersion = serde_json::from_value(json!(400)).unwrap();
    assert_eq!(version, RinexVersion::V4_00);

    let levels: Vec<AlertLevel> = serde_json::from_value(json!([1, 3])).unwrap();
    assert_eq!(levels, vec![AlertLevel::Notice, AlertLevel::Error]);
}

#[test]
fn defines_deserialize_from_names_and_labels() {
    let status: SiteLogStatus = serde_json::from_value(json!("PUBLISHED")).unwrap();
    assert_eq!(status, SiteLogStatus::Published);

    let status: SiteLogStatus = serde_json::from_value(json!("pending")).unwrap();
    assert_eq!(status, SiteLogStatus::Pending);

    let entry: LogEntryType = serde_json::from_value(json!("Log Upload")).unwrap();
    assert_eq!(entry, LogEntryType::LogUpload);

    let version: RinexVersion = serde_json::from_value(json!("RINEX 2.11")).unwrap();
    assert_eq!(version, RinexVersion::V2_11);

    let state: EquipmentState = serde_json::from_value(json!("legacy")).unwrap();
    assert_eq!(state, EquipmentState::Legacy);
}

#[test]
fn unknown_values_name_the_define_in_the_error() {
    let err = serde_json::from_value::<SiteLogStatus>(json!(42)).unwrap_err();
    assert!(err.to_string().contains("SiteLogStatus"));
    assert!(err.to_string().contains("42"));

    let err = serde_json::from_value::<AlertLevel>(json!("fatal")).unwrap_err();
    assert!(err.to_string().contains("AlertLevel"));

    assert!(serde_json::from_value::<EquipmentState>(json!(1_000_000)).is_err());
}

#[test]
fn optional_defines_round_trip_absence_as_null() {
    let absent: Option<SiteLogStatus> = serde_json::from_value(json!(null)).unwrap();
    assert_eq!(absent, None);

    let present: Option<SiteLogStatus> = serde_json::from_value(json!(4)).unwrap();
    assert_eq!(present, Some(SiteLogStatus::Empty));

    assert_eq!(serde_json::to_value::<Option<AlertLevel>>(None).unwrap(), json!(null));
}
