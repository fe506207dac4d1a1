//! upcheck - 並行ヘルスチェックアグリゲーター
//!
//! 登録済みターゲット（認証付きAPIエンドポイント / 通常URL）を並列に
//! 死活確認し、単一の集計レポートを生成する。
//!
//! 1回の呼び出しで全ターゲットを1回ずつチェックする。定期実行は
//! 呼び出し側（スケジューラー）の責務。

#![warn(missing_docs)]

/// エラー型定義
pub mod error;

/// 型定義
pub mod types;

/// エンドポイントレジストリ（静的設定）
pub mod registry;

/// 単一エンドポイントの死活チェック
pub mod probe;

/// 並列ファンアウト・集計
pub mod aggregate;

/// 集計レポートの組み立て
pub mod report;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

pub use aggregate::HealthAggregator;
pub use registry::EndpointRegistry;
pub use types::endpoint::{AuthScheme, EndpointKind, EndpointSpec};
pub use types::report::{AggregateReport, CheckOutcome, ProbeStatus};
