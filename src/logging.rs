//! ロギング初期化ユーティリティ
//!
//! `UPCHECK_LOG_LEVEL` 環境変数でフィルターを制御する（デフォルト: info）。

use tracing_subscriber::EnvFilter;

/// tracingサブスクライバーを初期化する
///
/// 二重初期化は無視する（テストから複数回呼ばれても安全）。
pub fn init() {
    let filter = EnvFilter::try_from_env("UPCHECK_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
