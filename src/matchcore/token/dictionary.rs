use std::collections::HashMap;
use crate::matchcore::TermId;

/// Term -> id mapping. Ids are handed out in first-seen order starting at 0,
/// so the same corpus in the same order always yields the same ids.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    term_ids: HashMap<String, TermId>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    pub fn add(&mut self, word: &str) -> TermId {
        if let Some(&id) = self.term_ids.get(word) {
            return id;
        }
        let id = self.term_ids.len() as TermId;
        self.term_ids.insert(word.to_owned(), id);
        id
    }

    pub fn generate_ids<S: AsRef<str>>(&mut self, words: &[S]) -> Vec<TermId> {
        words.iter().map(|w| self.add(w.as_ref())).collect()
    }

    pub fn get(&self, word: &str) -> Option<TermId> {
        self.term_ids.get(word).copied()
    }

    /// Ids of the known words, plus the words that are not in the dictionary.
    pub fn get_ids<S: AsRef<str>>(&self, words: &[S]) -> (Vec<TermId>, Vec<String>) {
        let mut known = vec![];
        let mut unknown = vec![];
        for w in words {
            match self.get(w.as_ref()) {
                Some(id) => known.push(id),
                None => unknown.push(w.as_ref().to_string()),
            }
        }
        (known, unknown)
    }

    pub fn get_term_count(&self) -> usize {
        self.term_ids.len()
    }
}
