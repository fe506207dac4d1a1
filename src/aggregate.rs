//! 並列ファンアウト・集計
//!
//! レジストリの全エンドポイントへ同時にプローブタスクを起動し、
//! 全タスクの確定（settle）を待ってからレジストリ順で結果を回収する。
//!
//! - タスク間に依存はなく、共有可変状態もない
//! - 各タスクは自分専用のデッドラインを持つ（相互キャンセルなし）
//! - 1パスの実時間コストは概ねタイムアウト1回分（レイテンシーの合計ではない）
//! - ファンアウト幅はレジストリサイズそのまま（上限なし）。数十件規模を
//!   想定しており、数百件規模では呼び出し側でのバッチ分割が必要
//! - リトライなし。1パスにつき1エンドポイント1プローブ

use crate::probe::Prober;
use crate::registry::EndpointRegistry;
use crate::report::ReportBuilder;
use crate::types::endpoint::{EndpointKind, EndpointSpec};
use crate::types::report::{AggregateReport, CheckOutcome, ProbeStatus};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// ヘルスチェックアグリゲーター
///
/// 1回の`run`呼び出しで1回の集計パスを実行する。定期実行は呼び出し側の
/// 責務（このクレートはスケジューリングしない）。
#[derive(Clone)]
pub struct HealthAggregator {
    /// エンドポイントプローバー（全タスクで共有）
    prober: Prober,
}

impl HealthAggregator {
    /// 指定タイムアウトでアグリゲーターを作成
    pub fn new(timeout: Duration) -> Self {
        Self {
            prober: Prober::new(timeout),
        }
    }

    /// 1回の集計パスを実行する
    ///
    /// レジストリの全エントリーを並列にチェックし、必ず全件分の結果を
    /// 含むレポートを返す。個々のターゲットの失敗・タイムアウト・
    /// タスクパニックはすべて`offline`として畳み込まれ、この関数自体は
    /// 失敗しない。
    pub async fn run(&self, registry: &EndpointRegistry) -> AggregateReport {
        if registry.is_empty() {
            info!("No endpoints to check");
            return ReportBuilder::build(vec![], vec![]);
        }

        info!(
            count = registry.len(),
            timeout_ms = self.prober.timeout().as_millis() as u64,
            "Starting aggregation pass"
        );

        // ファンアウト: エンドポイントごとに独立タスクを起動
        let mut handles = Vec::with_capacity(registry.len());
        for spec in registry.iter().cloned() {
            let prober = self.prober.clone();
            handles.push(tokio::spawn(async move { prober.probe(&spec).await }));
        }

        let (api_results, url_results) = settle(handles, registry.specs()).await;

        let report = ReportBuilder::build(api_results, url_results);

        info!(
            online = report.online_count,
            total = report.total_count,
            all_online = report.all_online,
            "Aggregation pass completed"
        );

        report
    }
}

/// ファンイン: レジストリ順に全タスクの確定（settle）を待ち、
/// 種別ごとの結果リストに振り分ける
///
/// 完了順は問わない。パニックしたタスクはここで吸収し、該当
/// エンドポイントを`offline`として扱う。joinバリアを失敗が
/// すり抜けることはない。
async fn settle(
    handles: Vec<JoinHandle<CheckOutcome>>,
    specs: &[EndpointSpec],
) -> (Vec<CheckOutcome>, Vec<CheckOutcome>) {
    let mut api_results = Vec::new();
    let mut url_results = Vec::new();

    for (handle, spec) in handles.into_iter().zip(specs.iter()) {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    endpoint_name = %spec.name,
                    error = %e,
                    "Probe task panicked"
                );
                CheckOutcome::new(spec.name.clone(), ProbeStatus::Offline)
            }
        };

        match spec.kind {
            EndpointKind::Api => api_results.push(outcome),
            EndpointKind::Url => url_results.push(outcome),
        }
    }

    (api_results, url_results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::endpoint::AuthScheme;

    #[tokio::test]
    async fn test_empty_registry_yields_vacuous_report() {
        let registry = EndpointRegistry::from_specs(vec![]).unwrap();
        let aggregator = HealthAggregator::new(Duration::from_millis(5000));

        let report = aggregator.run(&registry).await;

        assert_eq!(report.total_count, 0);
        assert_eq!(report.online_count, 0);
        assert!(report.all_online);
        assert!(report.api_results.is_empty());
        assert!(report.url_results.is_empty());
    }

    #[tokio::test]
    async fn test_panicking_task_settles_as_offline() {
        let specs = vec![
            EndpointSpec::new(
                "healthy",
                EndpointKind::Api,
                "https://ok.example.com",
                AuthScheme::None,
            ),
            EndpointSpec::new(
                "faulty",
                EndpointKind::Api,
                "https://boom.example.com",
                AuthScheme::None,
            ),
        ];

        let handles = vec![
            tokio::spawn(async { CheckOutcome::new("healthy", ProbeStatus::Online) }),
            tokio::spawn(async { panic!("probe task blew up") }),
        ];

        let (api_results, url_results) = settle(handles, &specs).await;

        // パニックはjoinバリアで吸収され、該当エントリーはoffline
        assert!(url_results.is_empty());
        assert_eq!(api_results.len(), 2);
        assert_eq!(api_results[0], CheckOutcome::new("healthy", ProbeStatus::Online));
        assert_eq!(api_results[1], CheckOutcome::new("faulty", ProbeStatus::Offline));
    }

    #[tokio::test]
    async fn test_settle_partitions_by_kind_in_spec_order() {
        let specs = vec![
            EndpointSpec::new("a-api", EndpointKind::Api, "https://a.example.com", AuthScheme::None),
            EndpointSpec::new("z-url", EndpointKind::Url, "https://z.example.com", AuthScheme::None),
            EndpointSpec::new("b-api", EndpointKind::Api, "https://b.example.com", AuthScheme::None),
        ];

        let handles = specs
            .iter()
            .map(|spec| {
                let name = spec.name.clone();
                tokio::spawn(async move { CheckOutcome::new(name, ProbeStatus::Online) })
            })
            .collect();

        let (api_results, url_results) = settle(handles, &specs).await;

        let api_names: Vec<&str> = api_results.iter().map(|o| o.name.as_str()).collect();
        let url_names: Vec<&str> = url_results.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(api_names, vec!["a-api", "b-api"]);
        assert_eq!(url_names, vec!["z-url"]);
    }
}
