use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

pub fn login_endpoint(base_url: &str) -> String {
    format!("{}/login", normalize_base_url(base_url))
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn string_prop(obj: &wasm_bindgen::JsValue, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    /// Reads `window.__CLINICA_ENV = { API_BASE_URL: "..." }` written by env.js.
    pub fn snapshot_from_globals() -> Option<String> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &"__CLINICA_ENV".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        string_prop(&any, &["API_BASE_URL", "api_base_url"])
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use super::RuntimeConfig;

    pub fn snapshot_from_globals() -> Option<String> {
        None
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        None
    }
}

/// Stores the resolved url; a concurrent resolution that lost the race
/// gets the url that was stored first.
fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    if API_BASE_URL.set(value.clone()).is_err() {
        let cached = API_BASE_URL.get().cloned().unwrap_or_default();
        log::debug!("api base url already resolved to {}; ignoring {}", cached, value);
        return cached;
    }
    value
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        log::debug!("api base url taken from window globals");
        return cache_base_url(&existing);
    }
    if let Some(url) = browser::fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
    {
        log::debug!("api base url taken from config.json");
        return cache_base_url(&url);
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("Runtime config initialized (api_base_url={})", url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_local_login_service() {
        assert_eq!(
            login_endpoint(DEFAULT_API_BASE_URL),
            "http://127.0.0.1:8000/api/login"
        );
    }

    #[test]
    fn normalize_base_url_strips_whitespace_and_trailing_slashes() {
        assert_eq!(
            normalize_base_url("  https://clinica.example/api//  "),
            "https://clinica.example/api"
        );
    }

    #[test]
    fn runtime_config_parses_optional_base_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{ "api_base_url": "https://x/api" }"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://x/api"));
        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }

    #[test]
    fn first_cached_base_url_wins() {
        assert_eq!(cache_base_url(DEFAULT_API_BASE_URL), DEFAULT_API_BASE_URL);
        assert_eq!(cache_base_url("http://otro:9000/api/"), DEFAULT_API_BASE_URL);
        assert_eq!(API_BASE_URL.get().map(String::as_str), Some(DEFAULT_API_BASE_URL));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn host_resolution_falls_back_to_default() {
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
    }
}
