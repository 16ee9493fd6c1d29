use std::path::Path;
use serde::{Serialize, Deserialize};
use super::RawDocument;
use super::text::load_text;
use crate::matchcore::error::{MatchError, Result};
use crate::matchcore::JOB_ID;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct JobPosting {
    #[serde(default)]
    pub title: Option<String>,
    pub description: String,
    // skills to look for verbatim, scored apart from the similarity blend
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl JobPosting {
    pub fn into_raw(self) -> RawDocument {
        RawDocument {
            id: JOB_ID.to_string(),
            text: self.description,
        }
    }
}

/// Loads a job description: `.json` files need a `description` field,
/// anything else is read as plain text and titled after the file stem.
pub fn load_job(path: &Path) -> Result<JobPosting> {
    let content = load_text(path)?;
    let is_json = path.extension()
        .map_or(false, |ext| ext.to_string_lossy().eq_ignore_ascii_case("json"));
    let posting = if is_json {
        serde_json::from_str::<JobPosting>(&content)?
    } else {
        let title = path.file_stem()
            .map(|stem| title_case(&stem.to_string_lossy().replace('_', " ")));
        JobPosting {
            title,
            description: content.trim().to_string(),
            keywords: vec![],
        }
    };
    if posting.description.trim().is_empty() {
        return Err(MatchError::empty_corpus(JOB_ID,
            &format!("job description {} is empty", path.display())));
    }
    Ok(posting)
}

// "senior rust DEVELOPER" -> "Senior Rust Developer"
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
