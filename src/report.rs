//! 集計レポートの組み立て
//!
//! 順序付き結果リスト2本から[`AggregateReport`]への純粋な畳み込み。
//! I/Oなし。タイムスタンプは組み立て時点の現在時刻（個々のプローブ
//! 開始時刻ではない）。

use crate::types::report::{AggregateReport, CheckOutcome};
use chrono::Utc;

/// レポートビルダー
pub struct ReportBuilder;

impl ReportBuilder {
    /// 結果リストを集計してレポートを組み立てる
    ///
    /// 不変条件: `0 <= online_count <= total_count`、
    /// `all_online == (online_count == total_count)`（空入力では真）。
    pub fn build(
        api_results: Vec<CheckOutcome>,
        url_results: Vec<CheckOutcome>,
    ) -> AggregateReport {
        let total_count = api_results.len() + url_results.len();
        let online_count = api_results
            .iter()
            .chain(url_results.iter())
            .filter(|outcome| outcome.status.is_online())
            .count();

        AggregateReport {
            api_results,
            url_results,
            online_count,
            total_count,
            all_online: online_count == total_count,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::ProbeStatus;

    fn outcome(name: &str, status: ProbeStatus) -> CheckOutcome {
        CheckOutcome::new(name, status)
    }

    #[test]
    fn test_empty_input_is_vacuously_all_online() {
        let report = ReportBuilder::build(vec![], vec![]);
        assert_eq!(report.online_count, 0);
        assert_eq!(report.total_count, 0);
        assert!(report.all_online);
    }

    #[test]
    fn test_mixed_results_tally() {
        let report = ReportBuilder::build(
            vec![
                outcome("billing", ProbeStatus::Online),
                outcome("search", ProbeStatus::Offline),
            ],
            vec![outcome("homepage", ProbeStatus::Online)],
        );

        assert_eq!(report.total_count, 3);
        assert_eq!(report.online_count, 2);
        assert!(!report.all_online);
    }

    #[test]
    fn test_all_online_when_every_outcome_is_online() {
        let report = ReportBuilder::build(
            vec![outcome("billing", ProbeStatus::Online)],
            vec![outcome("homepage", ProbeStatus::Online)],
        );

        assert_eq!(report.online_count, 2);
        assert!(report.all_online);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let report = ReportBuilder::build(
            vec![
                outcome("b", ProbeStatus::Offline),
                outcome("a", ProbeStatus::Online),
            ],
            vec![
                outcome("z", ProbeStatus::Online),
                outcome("y", ProbeStatus::Offline),
            ],
        );

        let api_names: Vec<&str> = report.api_results.iter().map(|o| o.name.as_str()).collect();
        let url_names: Vec<&str> = report.url_results.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(api_names, vec!["b", "a"]);
        assert_eq!(url_names, vec!["z", "y"]);
    }

    #[test]
    fn test_generated_at_is_build_time() {
        let before = Utc::now();
        let report = ReportBuilder::build(vec![], vec![]);
        let after = Utc::now();

        assert!(report.generated_at >= before);
        assert!(report.generated_at <= after);
    }
}
