use serde::Serialize;
use super::RankedList;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreStats {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    pub median: f64,
}

/// Counts and combined-score statistics of one run, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub scored: usize,
    pub failed: usize,
    pub threshold: f64,
    // scored resumes with combined >= threshold
    pub qualified: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ScoreStats>,
}

impl RunSummary {
    pub fn from_ranked(list: &RankedList, threshold: f64) -> Self {
        let mut scores: Vec<f64> = list.scored().map(|r| r.combined).collect();
        let qualified = scores.iter().filter(|&&s| s >= threshold).count();
        let stats = if scores.is_empty() {
            None
        } else {
            scores.sort_by(|a, b| a.total_cmp(b));
            let n = scores.len();
            let median = if n % 2 == 1 {
                scores[n / 2]
            } else {
                (scores[n / 2 - 1] + scores[n / 2]) / 2.0
            };
            Some(ScoreStats{
                max: scores[n - 1],
                min: scores[0],
                mean: scores.iter().sum::<f64>() / n as f64,
                median,
            })
        };
        RunSummary{
            total: list.len(),
            scored: scores.len(),
            failed: list.len() - scores.len(),
            threshold,
            qualified,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchcore::ranking::{SimilarityResult, FailedResume};
    use crate::matchcore::ranking::ranker::Ranker;

    fn result(id: &str, combined: f64) -> SimilarityResult {
        SimilarityResult{
            resume_id: id.to_string(),
            cosine: combined,
            jaccard: combined,
            combined,
            keyword: None,
            classification: None,
        }
    }

    #[test]
    fn test_summary() {
        let results = vec![result("a", 0.1), result("b", 0.4), result("c", 0.3), result("d", 0.8)];
        let failures = vec![FailedResume{ resume_id: "e".to_string(), error: "empty".to_string() }];
        let list = Ranker::rank(&results, &failures);
        let summary = RunSummary::from_ranked(&list, 0.3);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.scored, 4);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.qualified, 3);
        let stats = summary.stats.unwrap();
        assert_eq!(stats.max, 0.8);
        assert_eq!(stats.min, 0.1);
        assert!((stats.mean - 0.4).abs() < 1e-12);
        assert!((stats.median - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_summary_without_scores() {
        let failures = vec![FailedResume{ resume_id: "e".to_string(), error: "empty".to_string() }];
        let list = Ranker::rank(&[], &failures);
        let summary = RunSummary::from_ranked(&list, 0.3);
        assert_eq!(summary.scored, 0);
        assert_eq!(summary.qualified, 0);
        assert_eq!(summary.stats, None);
    }
}
