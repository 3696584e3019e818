use super::*;

fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<&'a str> + 'a {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[test]
fn missing_vars_give_defaults() {
    let config = AppConfig::from_lookup(vars(&[])).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.title, "AsaanForm");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn log_level_is_case_insensitive() {
    let config = AppConfig::from_lookup(vars(&[(LOG_LEVEL_VAR, " DEBUG ")])).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.log_level, LogLevel::Debug);
    let config = AppConfig::from_lookup(vars(&[(LOG_LEVEL_VAR, "warning")])).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.log_level, LogLevel::Warn);
}

#[test]
fn invalid_log_level_is_reported() {
    let err = AppConfig::from_lookup(vars(&[(LOG_LEVEL_VAR, "loud")])).err();
    assert_eq!(
        err,
        Some(ConfigError::InvalidValue { var: LOG_LEVEL_VAR, value: "loud".to_owned() })
    );
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("invalid ASAANFORM_LOG_LEVEL: \"loud\"".to_owned())
    );
}

#[test]
fn blank_title_falls_back_to_default() {
    let config = AppConfig::from_lookup(vars(&[(TITLE_VAR, "   ")])).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.title, DEFAULT_TITLE);
    let config = AppConfig::from_lookup(vars(&[(TITLE_VAR, " Forms ")])).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.title, "Forms");
}

#[test]
fn build_env_parses() {
    assert!(AppConfig::from_build_env().is_ok());
}
