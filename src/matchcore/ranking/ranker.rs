use std::cmp::Ordering;
use super::{SimilarityResult, FailedResume, RankedEntry, RankedList};

pub struct Ranker;

impl Ranker {
    /// Best first: combined score, then cosine, then classification confidence
    /// (absent below present), then resume id ascending.
    pub fn compare(a: &SimilarityResult, b: &SimilarityResult) -> Ordering {
        b.combined.total_cmp(&a.combined)
            .then_with(|| b.cosine.total_cmp(&a.cosine))
            .then_with(|| match (a.confidence(), b.confidence()) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.resume_id.cmp(&b.resume_id))
    }

    /// Orders scored resumes, then appends failures sorted by id.
    /// Inputs are left untouched; nothing is dropped.
    pub fn rank(results: &[SimilarityResult], failures: &[FailedResume]) -> RankedList {
        let mut scored: Vec<&SimilarityResult> = results.iter().collect();
        scored.sort_by(|a, b| Self::compare(a, b));
        let mut failed: Vec<&FailedResume> = failures.iter().collect();
        failed.sort_by(|a, b| a.resume_id.cmp(&b.resume_id));
        let entries = scored.into_iter()
            .map(|r| RankedEntry::Scored(r.clone()))
            .chain(failed.into_iter().map(|f| RankedEntry::Failed(f.clone())))
            .collect();
        RankedList{ entries }
    }
}
