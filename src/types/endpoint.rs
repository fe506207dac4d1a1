//! エンドポイント型定義
//!
//! プローブ対象の静的な記述。レジストリ構築時に一度だけ作られ、
//! 以降は不変。

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// `X-API-KEY`ヘッダー名（Bearer以外の非空クレデンシャル用）
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// エンドポイントの種別
///
/// 種別によってオンライン判定の述語が変わる（[`crate::probe`]参照）。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    /// 認証付きAPIエンドポイント（2xxのみオンライン）
    Api,
    /// 通常のHTTP(S) URL（2xxまたは302でオンライン）
    Url,
}

impl EndpointKind {
    /// EndpointKindを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Url => "url",
        }
    }
}

impl std::fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// EndpointKind のパースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEndpointKindError(pub String);

impl std::fmt::Display for ParseEndpointKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown endpoint kind: '{}'", self.0)
    }
}

impl std::error::Error for ParseEndpointKindError {}

impl FromStr for EndpointKind {
    type Err = ParseEndpointKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "api" => Ok(Self::Api),
            "url" => Ok(Self::Url),
            other => Err(ParseEndpointKindError(other.to_string())),
        }
    }
}

/// 認証方式
///
/// クレデンシャル文字列の形状による分岐はレジストリ構築時の
/// [`AuthScheme::from_credential`]に集約する。プローブ実行時には
/// 既に確定したタグ付きバリアントだけを見る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// 認証ヘッダーなし
    None,
    /// `Authorization`ヘッダー（値はクレデンシャルをそのまま使用）
    Bearer(String),
    /// `X-API-KEY`ヘッダー
    ApiKey(String),
}

impl AuthScheme {
    /// クレデンシャル文字列から認証方式を分類する
    ///
    /// - `"Bearer "`で始まる → [`AuthScheme::Bearer`]（文字列全体をそのまま保持）
    /// - 非空 → [`AuthScheme::ApiKey`]
    /// - 空 → [`AuthScheme::None`]
    ///
    /// 失敗しない。不正な形のクレデンシャルも加工せずそのまま保持する。
    pub fn from_credential(credential: &str) -> Self {
        if credential.starts_with("Bearer ") {
            Self::Bearer(credential.to_string())
        } else if !credential.is_empty() {
            Self::ApiKey(credential.to_string())
        } else {
            Self::None
        }
    }

    /// リクエストビルダーに認証ヘッダーを付与する
    ///
    /// 全関数。ヘッダー値の検証はreqwestが送信時まで遅延するため、
    /// 不正な値はプローブ内で`offline`に畳み込まれる。
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::None => request,
            Self::Bearer(value) => request.header(reqwest::header::AUTHORIZATION, value),
            Self::ApiKey(value) => request.header(API_KEY_HEADER, value),
        }
    }
}

/// プローブ対象1件の記述
///
/// レジストリ内で`name`は一意（構築時に検証される）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    /// 表示名（レジストリ内で一意）
    pub name: String,
    /// エンドポイント種別
    pub kind: EndpointKind,
    /// プローブ対象URL
    pub target: String,
    /// 認証方式
    pub auth: AuthScheme,
}

impl EndpointSpec {
    /// 新しいエンドポイント定義を作成
    pub fn new(
        name: impl Into<String>,
        kind: EndpointKind,
        target: impl Into<String>,
        auth: AuthScheme,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            target: target.into(),
            auth,
        }
    }
}
