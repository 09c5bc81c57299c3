use anyhow::Result;
use dynamo_etl::utils::validation::Validate;
use dynamo_etl::{EtlConfig, EtlError};
use tempfile::TempDir;

const CONFIG: &str = r#"
[api]
base_url = "https://api.example.com"
endpoint = "v1/records"

[api.headers]
Authorization = "Bearer ${DYNAMO_ETL_IT_TOKEN}"

[api.params]
limit = "100"

[aws]
access_key = "AKIAEXAMPLE"
secret_key = "secret"
region = "eu-west-1"
db_name = "analytics"
table_name = "api_records"
endpoint_url = "http://localhost:8000"
"#;

#[test]
fn test_load_config_from_file() -> Result<()> {
    std::env::set_var("DYNAMO_ETL_IT_TOKEN", "abc123");
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("etl-config.toml");
    std::fs::write(&path, CONFIG)?;

    let config = EtlConfig::from_file(&path)?;
    config.validate()?;

    assert_eq!(config.api.full_url(), "https://api.example.com/v1/records");
    assert_eq!(
        config.api.headers.get("Authorization").map(String::as_str),
        Some("Bearer abc123")
    );
    assert_eq!(config.api.params.get("limit").map(String::as_str), Some("100"));
    assert_eq!(config.aws.table_name(), "api_records");
    assert_eq!(
        config.aws.target_display(),
        "analytics/api_records on local DynamoDB (http://localhost:8000)"
    );
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    let result = EtlConfig::from_file(&path);

    assert!(matches!(result, Err(EtlError::IoError(_))));
}

#[test]
fn test_invalid_base_url_fails_validation() -> Result<()> {
    let config = EtlConfig::from_toml_str(
        &CONFIG.replace("https://api.example.com", "api.example.com"),
    )?;

    let result = config.validate();

    assert!(matches!(
        result,
        Err(EtlError::InvalidConfigValueError { ref field, .. }) if field == "api.base_url"
    ));
    Ok(())
}

#[test]
fn test_unset_credential_variable_fails_validation() -> Result<()> {
    let config = EtlConfig::from_toml_str(
        &CONFIG.replace("\"secret\"", "\"${DYNAMO_ETL_IT_UNSET_SECRET}\""),
    )?;

    assert_eq!(config.aws.secret_key, "${DYNAMO_ETL_IT_UNSET_SECRET}");
    match config.validate() {
        Err(EtlError::MissingConfigError { field, variable }) => {
            assert_eq!(field, "aws.secret_key");
            assert_eq!(variable, "DYNAMO_ETL_IT_UNSET_SECRET");
        }
        other => panic!("expected MissingConfigError, got {:?}", other),
    }
    Ok(())
}
