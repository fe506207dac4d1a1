//! 型定義

/// エンドポイント定義（種別・認証方式）
pub mod endpoint;

/// チェック結果・集計レポート型
pub mod report;
