use std::collections::HashMap;
use crate::matchcore::error::{MatchError, Result};
use crate::matchcore::vector::FeatureVector;
use super::Classification;
use super::similarity::cosine;

pub struct LabeledVector {
    pub id: String,
    pub vector: FeatureVector,
    pub label: String,
}

/// k-nearest-neighbor vote over labeled examples, using cosine distance
/// in the same TF-IDF space as the scorer.
pub struct KnnClassifier {
    examples: Vec<LabeledVector>,
    k: usize,
}

impl KnnClassifier {
    pub fn check_k(k: usize, available: usize) -> Result<()> {
        if k < 1 || k > available {
            return Err(MatchError::InvalidK { k, available });
        }
        Ok(())
    }

    pub fn new(examples: Vec<LabeledVector>, k: usize) -> Result<Self> {
        Self::check_k(k, examples.len())?;
        Ok(KnnClassifier{ examples, k })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// The k nearest examples as (index, distance), nearest first.
    /// Equal distances keep example input order.
    fn neighbors(&self, vector: &FeatureVector) -> Vec<(usize, f64)> {
        let mut distances: Vec<(usize, f64)> = self.examples.iter()
            .enumerate()
            .map(|(i, ex)| (i, 1.0 - cosine(vector, &ex.vector)))
            .collect();
        distances.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        distances.truncate(self.k);
        distances
    }

    /// Majority label among the neighbors. A tie goes to the tied label seen
    /// nearest, which is the nearest neighbor's label whenever it is tied.
    pub fn classify(&self, vector: &FeatureVector) -> Classification {
        let neighbors = self.neighbors(vector);
        if log::log_enabled!(log::Level::Trace) {
            let ids: Vec<&str> = neighbors.iter().map(|(i, _)| self.examples[*i].id.as_str()).collect();
            log::trace!("nearest examples: {}", ids.join(", "));
        }
        // label -> (votes, rank of its nearest occurrence)
        let mut votes: HashMap<&str, (usize, usize)> = HashMap::new();
        for (rank, (i, _)) in neighbors.iter().enumerate() {
            let entry = votes.entry(self.examples[*i].label.as_str()).or_insert((0, rank));
            entry.0 += 1;
        }
        let (label, (count, _)) = votes.into_iter()
            .max_by(|a, b| (a.1).0.cmp(&(b.1).0).then((b.1).1.cmp(&(a.1).1)))
            .unwrap_or(("", (0, 0)));
        Classification{
            label: label.to_string(),
            confidence: count as f64 / self.k as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchcore::utils::sparse_vector::{SparseVector, SparseVectorOp};

    fn vector(weights: &[(u32, f64)]) -> FeatureVector {
        let mut v = SparseVector::new();
        for &(id, w) in weights {
            v.vec_set(id, w);
        }
        v.vec_normalize();
        v
    }

    fn example(id: &str, weights: &[(u32, f64)], label: &str) -> LabeledVector {
        LabeledVector{ id: id.to_string(), vector: vector(weights), label: label.to_string() }
    }

    fn examples() -> Vec<LabeledVector> {
        vec![
            example("h1", &[(0, 1.0)], "fit"),
            example("h2", &[(0, 1.0), (1, 0.2)], "fit"),
            example("h3", &[(1, 1.0)], "not fit"),
            example("h4", &[(2, 1.0)], "not fit"),
        ]
    }

    #[test]
    fn test_invalid_k() {
        assert!(matches!(KnnClassifier::new(examples(), 0), Err(MatchError::InvalidK { k: 0, available: 4 })));
        assert!(matches!(KnnClassifier::new(examples(), 5), Err(MatchError::InvalidK { k: 5, available: 4 })));
        assert!(matches!(KnnClassifier::check_k(10, 3), Err(MatchError::InvalidK { k: 10, available: 3 })));
        assert!(KnnClassifier::new(examples(), 4).is_ok());
    }

    #[test]
    fn test_k1_returns_nearest() {
        let knn = KnnClassifier::new(examples(), 1).unwrap();
        let c = knn.classify(&vector(&[(1, 1.0), (2, 0.1)]));
        assert_eq!(c.label, "not fit");
        assert_eq!(c.confidence, 1.0);
        let c = knn.classify(&vector(&[(0, 1.0)]));
        assert_eq!(c.label, "fit");
        assert_eq!(c.confidence, 1.0);
    }

    #[test]
    fn test_neighbors_order() {
        let knn = KnnClassifier::new(examples(), 2).unwrap();
        let ids = |v: &FeatureVector| -> Vec<String> {
            knn.neighbors(v).into_iter().map(|(i, _)| knn.examples[i].id.clone()).collect()
        };
        assert_eq!(ids(&vector(&[(0, 1.0)])), vec!["h1", "h2"]);
        // every example is orthogonal, input order breaks the tie
        assert_eq!(ids(&vector(&[(3, 1.0)])), vec!["h1", "h2"]);
        assert_eq!(ids(&vector(&[(2, 1.0)]))[0], "h4");
    }

    #[test]
    fn test_majority_vote() {
        let knn = KnnClassifier::new(examples(), 3).unwrap();
        let c = knn.classify(&vector(&[(0, 1.0), (1, 0.5)]));
        assert_eq!(c.label, "fit");
        assert!((c.confidence - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_goes_to_nearest() {
        let knn = KnnClassifier::new(examples(), 4).unwrap();
        // 2 fit vs 2 not fit, nearest is h4
        let c = knn.classify(&vector(&[(2, 1.0)]));
        assert_eq!(c.label, "not fit");
        assert_eq!(c.confidence, 0.5);
        let c = knn.classify(&vector(&[(0, 1.0)]));
        assert_eq!(c.label, "fit");
        assert_eq!(c.confidence, 0.5);
    }

    #[test]
    fn test_zero_vector_is_deterministic() {
        let knn = KnnClassifier::new(examples(), 1).unwrap();
        // every distance is 1, the first example wins
        let c = knn.classify(&SparseVector::new());
        assert_eq!(c.label, "fit");
        assert_eq!(knn.k(), 1);
    }
}
