use contactbook::config::{Config, LogLevel};
use contactbook::context::{AppContext, StandardContext, TestContext};

#[test]
fn test_missing_config_detected() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));

    let (config, found) = Config::load_or_default(&ctx).unwrap();
    assert_eq!(config, Config::default());
    assert!(!found);
}

#[test]
fn test_load_or_default_reports_existing_file() {
    let ctx = TestContext::new();
    let config = Config {
        history_limit: 7,
        ..Config::default()
    };
    config.save(&ctx).unwrap();
    assert_eq!(Config::load_or_default(&ctx).unwrap(), (config, true));
}

#[test]
fn test_save_then_load() {
    let ctx = TestContext::new();
    let config = Config {
        log_level: LogLevel::Debug,
        history_limit: 3,
        load_sample_data: false,
        prompt: "abook> ".to_string(),
    };
    config.save(&ctx).unwrap();
    assert_eq!(Config::load(&ctx).unwrap(), config);
}

#[test]
fn test_malformed_config_is_not_treated_as_missing() {
    let ctx = TestContext::new();
    std::fs::write(ctx.get_config_file_path().unwrap(), "history_limit = \"many\"").unwrap();
    let err = Config::load(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(Config::load_or_default(&ctx).is_err());
}

#[test]
fn test_override_root_layout() {
    let tmp = TestContext::new();
    let ctx = StandardContext::new(Some(tmp.root.clone()));
    assert_eq!(
        ctx.get_config_file_path().unwrap(),
        tmp.root.join("config").join("config.toml")
    );
    assert_eq!(
        ctx.get_log_file_path().unwrap(),
        tmp.root.join("cache").join("contactbook.log")
    );
}
