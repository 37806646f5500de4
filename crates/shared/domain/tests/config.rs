use serde_json::json;
use slm_domain::config::{FilesConfig, LoggingConfig, SiteConfig, SlmConfig};
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let site = SiteConfig::default();
    assert_eq!(site.org_name, "SLM");
    assert_eq!(site.max_upload_mb, 100);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());

    let cfg = SlmConfig::default();
    assert!(cfg.defines.catalog.is_none());
    assert!(!cfg.files.icons.is_empty());
}

#[test]
fn slm_config_deserializes() {
    let raw = json!({
        "site": { "org_name": "IGS", "max_upload_mb": 25 },
        "defines": { "catalog": "etc/defines.toml" },
        "logging": { "level": "debug", "directory": "/var/log/slm" }
    });

    let cfg: SlmConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.site.org_name, "IGS");
    assert_eq!(cfg.site.max_upload_mb, 25);
    assert_eq!(cfg.defines.catalog, Some(PathBuf::from("etc/defines.toml")));
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.directory, Some(PathBuf::from("/var/log/slm")));
}

#[test]
fn file_icons_fall_back_for_unknown_subtypes() {
    let files = FilesConfig::default();

    assert_eq!(files.icon("application/zip"), "bi bi-file-zip");
    assert_eq!(files.icon("image/jpeg"), "bi bi-filetype-jpg");
    assert_eq!(files.icon("image/svg+xml"), "bi bi-filetype-svg");
    assert_eq!(files.icon("application/x-madeup"), "bi bi-file-earmark");
    assert_eq!(files.icon(""), "bi bi-file-earmark");
}
