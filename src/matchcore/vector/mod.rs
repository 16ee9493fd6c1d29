use std::collections::HashMap;
use crate::matchcore::doc::Document;
use crate::matchcore::error::{MatchError, Result};
use crate::matchcore::token::dictionary::Dictionary;
use crate::matchcore::utils::sparse_vector::{SparseVector, SparseVectorOp};
use crate::matchcore::TermId;

/// Sparse TF-IDF weights, L2-normalized. Absent terms weigh zero.
pub type FeatureVector = SparseVector;

/// The documents a model is fitted on: the job first, then the resumes in input order.
pub struct Corpus<'a> {
    job: &'a Document,
    resumes: Vec<&'a Document>,
}

impl<'a> Corpus<'a> {
    pub fn new(job: &'a Document, resumes: Vec<&'a Document>) -> Self {
        Corpus{ job, resumes }
    }
    pub fn len(&self) -> usize {
        self.resumes.len() + 1
    }
    pub fn iter(&self) -> impl Iterator<Item = &'a Document> + '_ {
        std::iter::once(self.job).chain(self.resumes.iter().copied())
    }
}

/// Vocabulary and smoothed IDF table fitted once per run. Read-only afterwards,
/// so scoring workers share it by reference.
#[derive(Debug)]
pub struct TfIdfModel {
    dict: Dictionary,
    // indexed by TermId
    idf: Vec<f64>,
    document_count: usize,
}

pub struct ModelStats {
    pub vocabulary_size: usize,
    pub document_count: usize,
}

impl TfIdfModel {
    // IDF = ln((1 + N) / (1 + df)) + 1
    //   N: number of documents in the corpus
    //   df: number of documents containing the term
    pub fn fit(corpus: &Corpus) -> Result<Self> {
        if corpus.job.is_empty() {
            return Err(MatchError::empty_corpus(corpus.job.get_id(),
                "job description has no tokens after normalization"));
        }
        let mut dict = Dictionary::new();
        let mut document_frequency: Vec<u32> = vec![];
        for doc in corpus.iter() {
            dict.generate_ids(doc.get_tokens());
            document_frequency.resize(dict.get_term_count(), 0);
            for term in doc.get_token_set() {
                if let Some(tid) = dict.get(term) {
                    document_frequency[tid as usize] += 1;
                }
            }
        }
        let n = corpus.len() as f64;
        let idf = document_frequency.iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        Ok(TfIdfModel{
            dict,
            idf,
            document_count: corpus.len(),
        })
    }

    // TF = count of t in d / number of tokens in d
    // Terms outside the vocabulary are ignored.
    pub fn transform(&self, tokens: &[String]) -> FeatureVector {
        let mut vector = FeatureVector::new();
        if tokens.is_empty() {
            return vector;
        }
        let mut counts: HashMap<TermId, u32> = HashMap::new();
        let (known, _) = self.dict.get_ids(tokens);
        for tid in known {
            *counts.entry(tid).or_insert(0) += 1;
        }
        let total = tokens.len() as f64;
        for (tid, count) in counts {
            vector.vec_set(tid, count as f64 / total * self.idf[tid as usize]);
        }
        vector.vec_normalize();
        vector
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.dict.get(term).map(|tid| self.idf[tid as usize])
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.dict.get(term)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.dict.get_term_count()
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats{
            vocabulary_size: self.vocabulary_size(),
            document_count: self.document_count,
        }
    }
}
