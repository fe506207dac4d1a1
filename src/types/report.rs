//! チェック結果・集計レポート型定義
//!
//! 1回の集計パスで、レジストリの各エントリーにつき必ず1件の
//! [`CheckOutcome`]が生成される（レジストリ順を維持）。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// プローブ結果の状態
///
/// 二値のみ。タイムアウト・DNS失敗・ステータス不一致などの失敗原因は
/// 区別せずすべて`offline`に畳み込む（設計上の合意事項）。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    /// 到達可能
    Online,
    /// 到達不能（原因は区別しない）
    Offline,
}

impl ProbeStatus {
    /// ProbeStatusを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    /// オンラインかどうか
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

impl std::fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 単一エンドポイントのチェック結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckOutcome {
    /// エンドポイント表示名（レジストリからコピー）
    pub name: String,
    /// チェック結果
    pub status: ProbeStatus,
}

impl CheckOutcome {
    /// 新しいチェック結果を作成
    pub fn new(name: impl Into<String>, status: ProbeStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// 1回の集計パスの最終成果物
///
/// 構築後は不変。シリアライズ後は破棄され、何も永続化されない。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    /// API種別エンドポイントの結果（レジストリ内の相対順）
    pub api_results: Vec<CheckOutcome>,
    /// URL種別エンドポイントの結果（レジストリ内の相対順）
    pub url_results: Vec<CheckOutcome>,
    /// オンライン件数
    pub online_count: usize,
    /// 総件数
    pub total_count: usize,
    /// 全件オンラインか（空レジストリでは真）
    pub all_online: bool,
    /// レポート組み立て時刻（個々のプローブ時刻ではない）
    pub generated_at: DateTime<Utc>,
}
