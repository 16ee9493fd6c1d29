use rayon::prelude::*;
use rayon::ThreadPool;
use crate::matchcore::config::MatchConfig;
use crate::matchcore::doc::{Document, RawDocument, ResumeSource, LabeledText};
use crate::matchcore::error::{MatchError, Result};
use crate::matchcore::ranking::{SimilarityResult, FailedResume, RankedList};
use crate::matchcore::ranking::knn::{KnnClassifier, LabeledVector};
use crate::matchcore::ranking::ranker::Ranker;
use crate::matchcore::ranking::similarity::{Scorer, keyword_coverage};
use crate::matchcore::token::analyzer::{Analyzer, AnalyzerStats};
use crate::matchcore::vector::{Corpus, TfIdfModel};
use crate::matchcore::JOB_ID;

/// Everything one matching run needs.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub job: RawDocument,
    pub resumes: Vec<ResumeSource>,
    // empty disables classification
    pub labeled: Vec<LabeledText>,
    // empty disables the keyword score
    pub keywords: Vec<String>,
}

impl MatchRequest {
    pub fn new(job_text: &str) -> Self {
        MatchRequest{
            job: RawDocument::new(JOB_ID, job_text),
            resumes: vec![],
            labeled: vec![],
            keywords: vec![],
        }
    }
    pub fn with_resume(mut self, id: &str, text: &str) -> Self {
        self.resumes.push(ResumeSource::text(id, text));
        self
    }
    pub fn with_labeled(mut self, id: &str, text: &str, label: &str) -> Self {
        self.labeled.push(LabeledText{
            id: id.to_string(),
            text: text.to_string(),
            label: label.to_string(),
        });
        self
    }
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keywords.push(keyword.to_string());
        self
    }
}

// labeled example after normalization, before the vocabulary exists
struct AnalyzedExample {
    id: String,
    tokens: Vec<String>,
    label: String,
}

pub struct Engine {
    cfg: MatchConfig,
    analyzer: Analyzer,
    scorer: Scorer,
    pool: ThreadPool,
}

impl Engine {
    pub fn new(cfg: MatchConfig) -> Result<Self> {
        cfg.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(cfg.workers)
            .build()
            .map_err(|e| MatchError::Config(format!("cannot start worker pool: {}", e)))?;
        let analyzer = Analyzer::from_config(&cfg);
        log::debug!("normalization backend: {}", analyzer.stats().backend);
        Ok(Engine{
            scorer: Scorer::from_config(&cfg),
            analyzer,
            cfg,
            pool,
        })
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn stats(&self) -> AnalyzerStats {
        self.analyzer.stats()
    }

    /// Scores every resume against the job and ranks them.
    ///
    /// Fails only when nothing can be compared (no resumes, or a job without
    /// tokens) or when classification is requested with an unusable k.
    /// A resume that cannot be normalized becomes an error entry instead.
    /// Labeled examples that cannot be normalized are skipped and do not
    /// count towards k.
    pub fn run(&self, request: MatchRequest) -> Result<RankedList> {
        let MatchRequest{ job, resumes, labeled, keywords } = request;
        if resumes.is_empty() {
            return Err(MatchError::empty_corpus(&job.id, "no resumes supplied"));
        }
        let classify = !labeled.is_empty();
        let examples = self.analyze_labeled(labeled);
        if classify {
            KnnClassifier::check_k(self.cfg.knn_k, examples.len())?;
        }
        let keywords = self.analyze_keywords(&keywords);
        let job_id = job.id.clone();
        let job = Document::normalize(job, &self.analyzer)
            .map_err(|e| MatchError::empty_corpus(&job_id, &e.to_string()))?;
        if job.is_empty() {
            return Err(MatchError::empty_corpus(&job_id,
                "job description has no tokens after normalization"));
        }

        log::info!("normalizing {} resumes", resumes.len());
        let outcomes: Vec<std::result::Result<Document, FailedResume>> = self.pool.install(|| {
            resumes.into_par_iter()
                .map(|source| self.normalize_resume(source))
                .collect()
        });
        let mut docs = vec![];
        let mut failures = vec![];
        for outcome in outcomes {
            match outcome {
                Ok(doc) => docs.push(doc),
                Err(failed) => failures.push(failed),
            }
        }
        if docs.is_empty() {
            log::warn!("none of {} resumes could be normalized", failures.len());
            return Ok(Ranker::rank(&[], &failures));
        }

        // barrier: the vocabulary needs every document
        let model = TfIdfModel::fit(&Corpus::new(&job, docs.iter().collect()))?;
        let stats = model.stats();
        log::info!("vocabulary of {} terms over {} documents", stats.vocabulary_size, stats.document_count);
        let job_vec = model.transform(job.get_tokens());
        let classifier = if classify {
            Some(self.build_classifier(&model, examples)?)
        } else {
            None
        };

        let results: Vec<SimilarityResult> = self.pool.install(|| {
            docs.par_iter()
                .map(|doc| {
                    let vec = model.transform(doc.get_tokens());
                    let mut result = self.scorer.score(doc.get_id(),
                        &job_vec, job.get_token_set(), &vec, doc.get_token_set());
                    result.keyword = keyword_coverage(&keywords, doc.get_token_set());
                    if let Some(knn) = &classifier {
                        result.classification = Some(knn.classify(&vec));
                    }
                    log::debug!("{}: combined {:.4}", result.resume_id, result.combined);
                    result
                })
                .collect()
        });
        log::info!("{} resumes scored, {} failed", results.len(), failures.len());
        Ok(Ranker::rank(&results, &failures))
    }

    fn normalize_resume(&self, source: ResumeSource) -> std::result::Result<Document, FailedResume> {
        let (id, error) = match source {
            ResumeSource::Unreadable { id, cause } => {
                let error = MatchError::normalization(&id, &cause);
                (id, error)
            },
            ResumeSource::Text(raw) => {
                let id = raw.id.clone();
                match Document::normalize(raw, &self.analyzer) {
                    Ok(doc) if !doc.is_empty() => {
                        log::debug!("{}: {} characters, {} tokens",
                            doc.get_id(), doc.get_text().chars().count(), doc.get_tokens().len());
                        return Ok(doc);
                    },
                    Ok(_) => {
                        let error = MatchError::normalization(&id, "no usable tokens after normalization");
                        (id, error)
                    },
                    Err(e) => (id, e),
                }
            },
        };
        log::warn!("{}", error);
        Err(FailedResume{ resume_id: id, error: error.to_string() })
    }

    fn analyze_labeled(&self, labeled: Vec<LabeledText>) -> Vec<AnalyzedExample> {
        self.pool.install(|| {
            labeled.into_par_iter()
                .filter_map(|ex| match self.analyzer.analyze_checked(&ex.id, &ex.text) {
                    Ok(analyzed) => Some(AnalyzedExample{
                        id: ex.id,
                        tokens: analyzed.tokens,
                        label: ex.label,
                    }),
                    Err(e) => {
                        log::warn!("labeled example skipped: {}", e);
                        None
                    },
                })
                .collect()
        })
    }

    // each keyword becomes the terms it normalizes to
    fn analyze_keywords(&self, keywords: &[String]) -> Vec<Vec<String>> {
        keywords.iter()
            .filter_map(|keyword| {
                let analyzed = self.analyzer.analyze(keyword);
                if analyzed.is_empty() {
                    log::warn!("keyword \"{}\" has no usable terms, ignored", keyword);
                    return None;
                }
                Some(analyzed.tokens)
            })
            .collect()
    }

    fn build_classifier(&self, model: &TfIdfModel, examples: Vec<AnalyzedExample>) -> Result<KnnClassifier> {
        let examples: Vec<LabeledVector> = self.pool.install(|| {
            examples.into_par_iter()
                .map(|ex| LabeledVector{
                    vector: model.transform(&ex.tokens),
                    id: ex.id,
                    label: ex.label,
                })
                .collect()
        });
        let knn = KnnClassifier::new(examples, self.cfg.knn_k)?;
        log::info!("classifying with k={}", knn.k());
        Ok(knn)
    }
}
