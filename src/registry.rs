//! エンドポイントレジストリ
//!
//! プローブ対象の静的な一覧。プロセス起動時（またはリクエスト毎）に
//! 外部の設定コラボレーターから渡され、以降は読み取り専用。
//!
//! クレデンシャル文字列の分類（Bearer / APIキー / なし）はここで
//! 一度だけ行い、プローブ経路には確定済みの[`AuthScheme`]だけを渡す。

use crate::error::{RegistryError, RegistryResult};
use crate::types::endpoint::{AuthScheme, EndpointKind, EndpointSpec};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// レジストリファイル内の1エントリー（クレデンシャルは生文字列）
#[derive(Debug, Clone, Deserialize)]
struct RawEndpoint {
    /// 表示名
    name: String,
    /// 種別
    kind: EndpointKind,
    /// プローブ対象URL
    target: String,
    /// クレデンシャル（省略可、空文字は認証なし）
    #[serde(default)]
    credential: String,
}

/// プローブ対象エンドポイントの順序付き不変レジストリ
///
/// 空レジストリも有効（集計結果は `total_count = 0`, `all_online = true`）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRegistry {
    specs: Vec<EndpointSpec>,
}

impl EndpointRegistry {
    /// エンドポイント定義の列からレジストリを構築する
    ///
    /// 構築時に検証する:
    /// - `name`がレジストリ内で一意であること
    /// - `target`がhttp(s)のURLとしてパースできること
    ///
    /// 検証失敗はシステム全体で唯一の呼び出し側に見えるエラーであり、
    /// 呼び出し1回につき1件だけ報告される。
    pub fn from_specs(specs: Vec<EndpointSpec>) -> RegistryResult<Self> {
        let mut seen = HashSet::new();

        for spec in &specs {
            if !seen.insert(spec.name.clone()) {
                return Err(RegistryError::DuplicateName(spec.name.clone()));
            }

            let url = reqwest::Url::parse(&spec.target).map_err(|e| {
                RegistryError::InvalidTarget {
                    name: spec.name.clone(),
                    reason: e.to_string(),
                }
            })?;

            match url.scheme() {
                "http" | "https" => {}
                other => {
                    return Err(RegistryError::InvalidTarget {
                        name: spec.name.clone(),
                        reason: format!("unsupported scheme '{}'", other),
                    });
                }
            }
        }

        Ok(Self { specs })
    }

    /// JSONファイルからレジストリを読み込む
    ///
    /// ファイル形式は `{name, kind, target, credential}` の配列。
    /// `credential`はここで[`AuthScheme`]に分類される。
    pub fn from_json_file(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RegistryError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let raw: Vec<RawEndpoint> = serde_json::from_str(&contents)?;

        let specs = raw
            .into_iter()
            .map(|entry| {
                let auth = AuthScheme::from_credential(&entry.credential);
                EndpointSpec::new(entry.name, entry.kind, entry.target, auth)
            })
            .collect();

        Self::from_specs(specs)
    }

    /// 登録順のエンドポイント定義スライス
    pub fn specs(&self) -> &[EndpointSpec] {
        &self.specs
    }

    /// 登録件数
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// 登録順のイテレーター
    pub fn iter(&self) -> std::slice::Iter<'_, EndpointSpec> {
        self.specs.iter()
    }
}
