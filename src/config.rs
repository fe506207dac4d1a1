//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and the
//! probe configuration loaded from them.

use std::time::Duration;

/// プローブタイムアウトのデフォルト（ミリ秒）
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5000;

/// Get an environment variable
///
/// # Returns
/// * `Some(value)` - The environment variable value
/// * `None` - The variable is not set
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Get an environment variable, parsing to a specific type
///
/// # Arguments
/// * `name` - The environment variable name
/// * `default` - The default value to return if unset or parsing fails
///
/// # Returns
/// The parsed environment variable value or the default
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    get_env(name).and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// プローブ設定
///
/// タイムアウトはパス内の全プローブに一様に適用される単一値。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    /// プローブ1回あたりのタイムアウト
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Load probe configuration from environment variables.
    ///
    /// 環境変数 `UPCHECK_PROBE_TIMEOUT_MS` から取得し、未設定の場合は
    /// 5000ミリ秒を使用する。
    pub fn from_env() -> Self {
        let timeout_ms =
            get_env_parse("UPCHECK_PROBE_TIMEOUT_MS", DEFAULT_PROBE_TIMEOUT_MS);

        Self {
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// 指定ミリ秒のタイムアウトで設定を作成
    pub fn from_millis(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::from_millis(DEFAULT_PROBE_TIMEOUT_MS)
    }
}
