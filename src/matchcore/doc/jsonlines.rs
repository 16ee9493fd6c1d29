use std::path::Path;
use super::LabeledText;
use super::text::load_text;
use crate::matchcore::error::Result;

/// One labeled example per line: `{"id": .., "text": .., "label": ..}`.
/// Blank lines are skipped, malformed ones are logged and skipped.
pub fn parse_jsonlines(source: &str, text: &str) -> Vec<LabeledText> {
    let mut examples = vec![];
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<LabeledText>(line) {
            Ok(example) => examples.push(example),
            Err(e) => log::warn!("{}:{}: {}", source, n + 1, e),
        }
    }
    examples
}

pub fn load_labeled(path: &Path) -> Result<Vec<LabeledText>> {
    let text = load_text(path)?;
    let examples = parse_jsonlines(&path.to_string_lossy(), &text);
    log::info!("{} labeled examples loaded from {}", examples.len(), path.display());
    Ok(examples)
}
