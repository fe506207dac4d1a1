//! 単一エンドポイントの死活チェック
//!
//! 1ターゲットに対する1回の時間制限付きGETリクエスト。
//!
//! [`Prober::probe`]は全関数（total function）であり、エラー・パニックを
//! 呼び出し元に伝播させない。接続拒否・DNS失敗・TLS失敗・タイムアウト・
//! ステータス不一致はすべて`offline`という値に畳み込む。タイムアウトと
//! 伝送路エラーは区別できない（診断情報の損失は合意済みの仕様）。

use crate::types::endpoint::{EndpointKind, EndpointSpec};
use crate::types::report::{CheckOutcome, ProbeStatus};
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// 種別ごとのオンライン判定
///
/// - `Api`: 2xx
/// - `Url`: 2xx または 302
pub fn status_matches(kind: EndpointKind, status: StatusCode) -> bool {
    match kind {
        EndpointKind::Api => status.is_success(),
        EndpointKind::Url => status.is_success() || status == StatusCode::FOUND,
    }
}

/// エンドポイントプローバー
///
/// 共有HTTPクライアント（接続プーリング有効）を保持する。タイムアウトは
/// リクエスト開始からのハードデッドラインで、期限切れは進行中の
/// リクエストをキャンセルして`offline`として解決する。
#[derive(Clone)]
pub struct Prober {
    /// HTTPクライアント
    client: Client,
    /// プローブ1回あたりのタイムアウト
    timeout: Duration,
}

impl Prober {
    /// 新しいプローバーを作成
    pub fn new(timeout: Duration) -> Self {
        // リダイレクトは追跡しない。302はそれ自体が判定対象
        // （URL種別ではオンライン、API種別ではオフライン）。
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, timeout }
    }

    /// プローブ1回あたりのタイムアウト
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 単一エンドポイントをチェックする
    ///
    /// 必ず[`CheckOutcome`]を返す。いかなる失敗もエラーとして伝播しない。
    pub async fn probe(&self, spec: &EndpointSpec) -> CheckOutcome {
        let start = Instant::now();

        let request = spec.auth.apply(self.client.get(&spec.target));

        let status = match request.send().await {
            Ok(response) => {
                if status_matches(spec.kind, response.status()) {
                    debug!(
                        endpoint_name = %spec.name,
                        http_status = %response.status(),
                        latency_ms = start.elapsed().as_millis() as u64,
                        "Probe succeeded"
                    );
                    ProbeStatus::Online
                } else {
                    warn!(
                        endpoint_name = %spec.name,
                        http_status = %response.status(),
                        "Probe returned non-matching status"
                    );
                    ProbeStatus::Offline
                }
            }
            Err(e) => {
                // タイムアウトもここに落ちる（原因は区別しない）
                warn!(
                    endpoint_name = %spec.name,
                    error = %e,
                    "Probe failed"
                );
                ProbeStatus::Offline
            }
        };

        CheckOutcome::new(spec.name.clone(), status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_predicate_accepts_2xx_only() {
        assert!(status_matches(EndpointKind::Api, StatusCode::OK));
        assert!(status_matches(EndpointKind::Api, StatusCode::NO_CONTENT));
        assert!(!status_matches(EndpointKind::Api, StatusCode::FOUND));
        assert!(!status_matches(EndpointKind::Api, StatusCode::NOT_FOUND));
        assert!(!status_matches(
            EndpointKind::Api,
            StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[test]
    fn test_url_predicate_accepts_2xx_and_302() {
        assert!(status_matches(EndpointKind::Url, StatusCode::OK));
        assert!(status_matches(EndpointKind::Url, StatusCode::FOUND));
        // 302以外のリダイレクトは対象外
        assert!(!status_matches(
            EndpointKind::Url,
            StatusCode::MOVED_PERMANENTLY
        ));
        assert!(!status_matches(
            EndpointKind::Url,
            StatusCode::TEMPORARY_REDIRECT
        ));
        assert!(!status_matches(EndpointKind::Url, StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_prober_keeps_timeout() {
        let prober = Prober::new(Duration::from_millis(5000));
        assert_eq!(prober.timeout(), Duration::from_millis(5000));
    }

    #[tokio::test]
    async fn test_probe_connection_refused_is_offline() {
        let prober = Prober::new(Duration::from_millis(500));
        let spec = EndpointSpec::new(
            "unreachable",
            EndpointKind::Api,
            // ポート9（discard）には誰もリッスンしていない前提
            "http://127.0.0.1:9/",
            crate::types::endpoint::AuthScheme::None,
        );

        let outcome = prober.probe(&spec).await;
        assert_eq!(outcome.name, "unreachable");
        assert_eq!(outcome.status, ProbeStatus::Offline);
    }
}
