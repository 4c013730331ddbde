use std::env;

use reqwest::Url;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://dadosabertos.camara.leg.br/api/v2";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();
    load_config_from(|key| env::var(key).ok())
}

pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = lookup("PORT")
        .or_else(|| lookup("CAMARA_GATEWAY_PORT"))
        .map(|value| {
            value
                .trim()
                .parse::<u16>()
                .map_err(|err| AppError::configuration(format!("invalid port: {err}")))
        })
        .transpose()?
        .unwrap_or(DEFAULT_PORT);

    let upstream_base_url = lookup("CAMARA_API_BASE_URL")
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());
    Url::parse(&upstream_base_url).map_err(|err| {
        AppError::configuration(format!(
            "invalid CAMARA_API_BASE_URL {upstream_base_url}: {err}"
        ))
    })?;

    let upstream_timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "invalid UPSTREAM_TIMEOUT_SECS: {value} (expected a positive integer)"
                ))
            })?,
        None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
    };

    let disable_proxy = parse_bool(lookup("HTTP_DISABLE_PROXY"), false);

    Ok(AppConfig {
        port,
        upstream_base_url,
        upstream_timeout_secs,
        disable_proxy,
    })
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        load_config_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = load(&[]).expect("defaults load");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.upstream_base_url, DEFAULT_UPSTREAM_BASE_URL);
        assert_eq!(config.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
        assert!(!config.disable_proxy);
    }

    #[test]
    fn reads_overrides_and_trims_base_url() {
        let config = load(&[
            ("CAMARA_GATEWAY_PORT", "9100"),
            ("CAMARA_API_BASE_URL", "http://localhost:9999/api/v2/"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("HTTP_DISABLE_PROXY", "1"),
        ])
        .expect("overrides load");

        assert_eq!(config.port, 9100);
        assert_eq!(config.upstream_base_url, "http://localhost:9999/api/v2");
        assert_eq!(config.upstream_timeout_secs, 3);
        assert!(config.disable_proxy);
    }

    #[test]
    fn port_takes_precedence_over_alias() {
        let config = load(&[("PORT", "8080"), ("CAMARA_GATEWAY_PORT", "9100")]).expect("load");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            load(&[("PORT", "eighty")]),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            load(&[("CAMARA_API_BASE_URL", "not a url")]),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            load(&[("UPSTREAM_TIMEOUT_SECS", "0")]),
            Err(AppError::Configuration(_))
        ));
    }
}
