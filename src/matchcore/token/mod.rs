pub mod tokenizer;
pub mod stopwords;
pub mod stemmer;
pub mod analyzer;
pub mod dictionary;
