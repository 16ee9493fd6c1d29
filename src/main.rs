use std::fs;
use std::path::{Path, PathBuf};
use clap::{Parser, Subcommand};
use serde_json::json;
use rmatch::matchcore::config::MatchConfig;
use rmatch::matchcore::doc::dir::load_resumes;
use rmatch::matchcore::doc::job::load_job;
use rmatch::matchcore::doc::jsonlines::load_labeled;
use rmatch::matchcore::engine::{Engine, MatchRequest};
use rmatch::matchcore::error::Result;
use rmatch::matchcore::ranking::RankedList;
use rmatch::matchcore::ranking::export::save_csv;
use rmatch::matchcore::ranking::summary::RunSummary;

#[derive(Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// Rank resumes against a job description
struct Cli {
    #[clap(short, long, value_parser)]
    /// Config file (YAML), defaults to ./.rmatch.yml when present
    config: Option<PathBuf>,
    #[clap(short, long, action)]
    /// Debug logging
    verbose: bool,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[derive(Debug)]
enum Commands {
    /// Match resumes against a job
    Match {
        #[clap(short, long, value_parser)]
        /// Job description (.txt, or .json with description, title and keywords)
        job: PathBuf,
        #[clap(short, long, value_parser)]
        /// Directory of extracted resume texts
        resumes: PathBuf,
        #[clap(short, long, value_parser)]
        /// Labeled examples (JSON lines: id, text, label)
        labels: Option<PathBuf>,
        #[clap(short, long, value_parser, default_value_t = 0.3)]
        /// Minimum combined score for the shortlist
        threshold: f64,
        #[clap(long, value_parser, default_value_t = 10)]
        /// Shortlist size
        top: usize,
        #[clap(short, long, value_parser)]
        /// Write ranked results and summary as JSON
        output: Option<PathBuf>,
        #[clap(long, value_parser)]
        /// Write one CSV row per ranked resume
        csv: Option<PathBuf>,
    },
    /// Print the normalized tokens of a text
    Tokens {
        #[clap(value_parser)]
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let res = match &cli.command {
        Commands::Match { job, resumes, labels, threshold, top, output, csv } =>
            command_match(cli.config.as_deref(), job, resumes, labels.as_deref(), *threshold, *top,
                output.as_deref(), csv.as_deref()),
        Commands::Tokens { text } => command_tokens(cli.config.as_deref(), text),
    };
    if let Err(e) = res {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn command_match(config: Option<&Path>,
    job_path: &Path,
    resume_dir: &Path,
    labels: Option<&Path>,
    threshold: f64,
    top: usize,
    output: Option<&Path>,
    csv: Option<&Path>,
    ) -> Result<()> {
    let cfg = MatchConfig::discover(config)?;
    let engine = Engine::new(cfg)?;
    let job = load_job(job_path)?;
    let title = job.title.clone().unwrap_or_else(|| String::from("Unknown position"));
    let keywords = job.keywords.clone();
    let mut request = MatchRequest {
        job: job.into_raw(),
        resumes: load_resumes(resume_dir)?,
        labeled: vec![],
        keywords,
    };
    if let Some(path) = labels {
        request.labeled = load_labeled(path)?;
    }
    log::info!("matching {} resumes against: {}", request.resumes.len(), title);

    let ranked = engine.run(request)?;
    let summary = RunSummary::from_ranked(&ranked, threshold);
    print_report(&title, &ranked, &summary, top);

    if let Some(path) = output {
        let doc = json!({
            "job_title": title,
            "summary": summary,
            "ranked_resumes": ranked,
        });
        fs::write(path, serde_json::to_string_pretty(&doc)?)?;
        log::info!("results saved to {}", path.display());
    }
    if let Some(path) = csv {
        save_csv(&ranked, path)?;
        log::info!("csv summary saved to {}", path.display());
    }
    Ok(())
}

fn print_report(title: &str, ranked: &RankedList, summary: &RunSummary, top: usize) {
    println!("job: {}", title);
    println!("{} resumes, {} scored, {} failed, {} at or above {}",
        summary.total, summary.scored, summary.failed, summary.qualified, summary.threshold);
    if let Some(stats) = &summary.stats {
        println!("combined score: max {:.3} mean {:.3} median {:.3} min {:.3}",
            stats.max, stats.mean, stats.median, stats.min);
    }
    let shortlist: Vec<_> = ranked.scored()
        .filter(|r| r.combined >= summary.threshold)
        .take(top)
        .collect();
    if !shortlist.is_empty() {
        println!("top {}:", shortlist.len());
    }
    for (i, r) in shortlist.iter().enumerate() {
        let class = match &r.classification {
            Some(c) => format!(" [{} {:.2}]", c.label, c.confidence),
            None => String::new(),
        };
        let keyword = match r.keyword {
            Some(k) => format!(", keywords {:.0}%", k * 100.0),
            None => String::new(),
        };
        println!("{}:{} combined {:.3} (cosine {:.3}, jaccard {:.3}{}){}",
            i + 1, r.resume_id, r.combined, r.cosine, r.jaccard, keyword, class);
    }
    for entry in ranked.failed() {
        println!("failed: {}", entry.error().unwrap_or_default());
    }
}

fn command_tokens(config: Option<&Path>, text: &str) -> Result<()> {
    let cfg = MatchConfig::discover(config)?;
    let engine = Engine::new(cfg)?;
    let stats = engine.stats();
    log::debug!("backend {}, language {}, {} stop words", stats.backend, stats.lang, stats.stop_words);
    let analyzed = engine.analyzer().analyze(text);
    println!("{}", analyzed.tokens.join(" "));
    Ok(())
}
