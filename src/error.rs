//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! レジストリの構築・読み込みだけが呼び出し側に見える失敗になる。
//! プローブ自体は全関数（total function）であり、個々のターゲットの
//! 失敗は`offline`という値に畳み込まれてエラーにはならない。

use thiserror::Error;

/// Registry construction / loading error type
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Registry file could not be read
    #[error("Failed to read registry file '{path}': {source}")]
    Io {
        /// Path that failed to load
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Registry file is not valid JSON
    #[error("Failed to parse registry: {0}")]
    Parse(#[from] serde_json::Error),

    /// Endpoint target is not a probe-able http(s) URL
    #[error("Invalid target for endpoint '{name}': {reason}")]
    InvalidTarget {
        /// Endpoint display name
        name: String,
        /// Why the target was rejected
        reason: String,
    },

    /// Two endpoints share the same display name
    #[error("Duplicate endpoint name: '{0}'")]
    DuplicateName(String),
}

/// Result type alias (registry)
pub type RegistryResult<T> = Result<T, RegistryError>;
