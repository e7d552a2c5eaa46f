use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// How long a success banner stays up before it clears itself.
pub const SUCCESS_BANNER_MS: u32 = 3_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Picks the first usable candidate, falling back to the local development backend.
pub fn resolve_base_url<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|candidate| normalize(&candidate))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn build_time_base_url() -> Option<String> {
    option_env!("HRMS_API_BASE_URL").map(str::to_string)
}

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    // Optional global written by env.js: window.__HRMS_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__HRMS_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = reqwest::Url::parse(&href).ok()?.join("config.json").ok()?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json not available ({})", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

/// Resolves the API base URL once per process: `window.__HRMS_ENV`, then the
/// build-time `HRMS_API_BASE_URL`, then `./config.json`, then the default.
pub async fn await_api_base_url() -> String {
    if let Some(url) = API_BASE_URL.get() {
        return url.clone();
    }
    let eager = [get_from_env_js(), build_time_base_url()]
        .into_iter()
        .flatten()
        .find_map(|candidate| normalize(&candidate));
    let resolved = match eager {
        Some(url) => url,
        None => resolve_base_url([fetch_runtime_config()
            .await
            .and_then(|cfg| cfg.api_base_url)]),
    };
    cache_base_url(resolved)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}
