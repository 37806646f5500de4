use slm_kernel::catalog::{Catalog, CatalogError};
use std::fs;

#[test]
fn builtin_catalog_verifies_clean() {
    let catalog = Catalog::builtin();
    catalog.verify().unwrap();
    assert_eq!(catalog.entry_count(), 28);
    assert_eq!(catalog.site_log_status.len(), 5);
    assert_eq!(catalog.rinex_version.len(), 11);
}

#[test]
fn builtin_catalog_round_trips_through_toml() {
    let rendered = Catalog::builtin().to_toml_string().unwrap();
    let parsed = Catalog::from_toml_str(&rendered).unwrap();

    assert_eq!(parsed, Catalog::builtin());
    parsed.verify().unwrap();
}

#[test]
fn catalog_loads_from_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("defines.toml");
    fs::write(&path, Catalog::builtin().to_toml_string().unwrap()).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog, Catalog::builtin());
}

#[test]
fn catalog_loads_from_a_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("defines.json");
    fs::write(&path, serde_json::to_string_pretty(&Catalog::builtin()).unwrap()).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog, Catalog::builtin());
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Config { .. }));
}

#[test]
fn tampered_label_is_reported_with_the_field() {
    let mut catalog = Catalog::builtin();
    catalog.site_log_status[3].label = "Live".to_owned();

    let err = catalog.verify().unwrap_err();
    match err {
        CatalogError::Mismatch { define, name, field, .. } => {
            assert_eq!(define, "SiteLogStatus");
            assert_eq!(name, "PUBLISHED");
            assert_eq!(field, "label");
        }
        other => panic!("expected mismatch, got {other}"),
    }
}

#[test]
fn renumbered_value_is_a_mismatch() {
    let mut catalog = Catalog::builtin();
    catalog.alert_level[0].value = 7;

    let err = catalog.verify().unwrap_err();
    assert!(matches!(err, CatalogError::Mismatch { define: "AlertLevel", field: "value", .. }));
}

#[test]
fn duplicate_values_are_rejected_before_membership_checks() {
    let mut catalog = Catalog::builtin();
    let mut copy = catalog.log_entry_type[0].clone();
    copy.name = "NEW_SITE_AGAIN".to_owned();
    catalog.log_entry_type.push(copy);

    let err = catalog.verify().unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateValue { define: "LogEntryType", value: 1, .. }));
}

#[test]
fn duplicate_names_are_rejected() {
    let mut catalog = Catalog::builtin();
    let mut copy = catalog.equipment_state[0].clone();
    copy.value = 102;
    catalog.equipment_state.push(copy);

    let err = catalog.verify().unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName { define: "EquipmentState", .. }));
}

#[test]
fn unknown_entries_and_missing_variants_are_reported() {
    let mut catalog = Catalog::builtin();
    let mut rogue = catalog.alert_level[0].clone();
    rogue.name = "FATAL".to_owned();
    rogue.value = 9;
    catalog.alert_level.push(rogue);

    let err = catalog.verify().unwrap_err();
    assert!(matches!(err, CatalogError::UnknownEntry { define: "AlertLevel", .. }));

    let mut catalog = Catalog::builtin();
    catalog.rinex_version.pop();

    let err = catalog.verify().unwrap_err();
    match err {
        CatalogError::MissingVariant { define, name } => {
            assert_eq!(define, "RinexVersion");
            assert_eq!(name, "v4_00");
        }
        other => panic!("expected missing variant, got {other}"),
    }
}

#[test]
fn document_without_every_section_fails_to_parse() {
    let err = Catalog::from_toml_str("[[site_log_status]]\nname = \"PENDING\"\n").unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[test]
fn extra_tags_must_match_the_compiled_defines() {
    let mut catalog = Catalog::builtin();
    catalog.site_log_status[0].color = Some("#000000".to_owned());

    let err = catalog.verify().unwrap_err();
    assert!(matches!(err, CatalogError::Mismatch { field: "color", .. }));

    let mut catalog = Catalog::builtin();
    catalog.log_entry_type[2].css = None;

    let err = catalog.verify().unwrap_err();
    assert!(matches!(err, CatalogError::Mismatch { field: "css", .. }));
}
