use crate::matchcore::TermId;
use std::collections::BTreeMap;

// ordered so sums are accumulated in the same order on every run
pub type SparseVector = BTreeMap<TermId, f64>;

pub trait SparseVectorOp {
    fn vec_len(&self) -> f64;
    fn vec_set(&mut self, id: TermId, value: f64) -> (TermId, f64);
    fn vec_get(&self, id: TermId) -> f64;
    fn vec_normalize(&mut self);
    fn vec_dot(&self, other: &SparseVector) -> f64;
}

impl SparseVectorOp for SparseVector {
    fn vec_len(&self) -> f64 {
        self.values().map(|v| v * v).sum::<f64>().sqrt()
    }
    fn vec_set(&mut self, id: TermId, value: f64) -> (TermId, f64) {
        self.insert(id, value);
        (id, value)
    }
    fn vec_get(&self, id: TermId) -> f64 {
        self.get(&id).copied().unwrap_or_default()
    }
    // a zero vector stays zero
    fn vec_normalize(&mut self) {
        let length = self.vec_len();
        if length == 0.0 {
            return;
        }
        for value in self.values_mut() {
            *value /= length;
        }
    }
    fn vec_dot(&self, other: &SparseVector) -> f64 {
        let (sv1, sv2) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        sv1.iter()
            .filter_map(|(id, v1)| sv2.get(id).map(|v2| v1 * v2))
            .sum()
    }
}
