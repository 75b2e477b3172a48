use anyhow::Result;
use simple_ei::utils::validation::Validate;
use simple_ei::AppConfig;
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("simple-ei.toml");
    std::fs::write(
        &config_path,
        r#"
[application]
name = "simple-ei"
host = "127.0.0.1"
port = 9000

[source]
base_url = "http://localhost:8081"
postal_code_path = "/postalcode?_code="
discovery_table_id = "region-list"
data_table_id = "eitable"
request_timeout_seconds = 15
concurrent_requests = 2
"#,
    )?;

    let config = AppConfig::from_file(&config_path)?;
    config.validate()?;

    assert_eq!(config.listen_addr(), "127.0.0.1:9000");
    let settings = config.scrape_settings();
    assert_eq!(settings.postal_code_path, "/postalcode?_code=");
    assert_eq!(settings.concurrent_requests, 2);
    assert_eq!(config.request_timeout().map(|d| d.as_secs()), Some(15));
    Ok(())
}

#[test]
fn test_shipped_config_is_valid() -> Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/simple-ei.toml");
    let config = AppConfig::from_file(path)?;
    config.validate()?;
    assert_eq!(config.application.port, 8080);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = AppConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert_eq!(err.code(), "INTERNAL_ERROR");
}
