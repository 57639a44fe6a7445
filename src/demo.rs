use crate::infra::{parse_dimension, parse_likert};
use chrono::{DateTime, Utc};
use clap::Args;
use prism_persona::assessment::domain::{LIKERT_MAX, LIKERT_MIN};
use prism_persona::assessment::insights::bar_percentage;
use prism_persona::assessment::{
    load_answers, question_bank, AnswerSet, Dimension, FileStore, InMemoryStore, KeyValueStore,
    PersonalityResult, ProfileSummary, QuizSession, ResultExport, ResultStore,
};
use prism_persona::config::AppConfig;
use prism_persona::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

const BAR_WIDTH: usize = 20;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Only list questions for one dimension (French label or English name)
    #[arg(long, value_parser = parse_dimension)]
    pub(crate) dimension: Option<Dimension>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answers file: JSON object keyed by question id, saved progress, or CSV
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Write a result_<date>.json export into this directory
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
    /// Keep the result in the configured storage directory
    #[arg(long)]
    pub(crate) save: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Answer every question with this value instead of its intended direction
    #[arg(long, value_parser = parse_likert)]
    pub(crate) value: Option<i32>,
}

pub(crate) fn run_questions(args: QuestionsArgs) {
    let questions = question_bank()
        .iter()
        .filter(|question| args.dimension.map_or(true, |dim| question.dimension == dim));

    for question in questions {
        let marker = if question.reverse { " (R)" } else { "" };
        println!(
            "{:>3}. [{} / {}]{} {}",
            question.id, question.dimension, question.facet, marker, question.text
        );
    }
}

pub(crate) fn run_score(config: &AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        export_dir,
        save,
    } = args;

    let answers = load_answers(&answers)?;
    let min_completion = config.assessment.min_completion;
    let result = if save {
        let store = Arc::new(FileStore::new(config.storage.dir.clone()));
        score_with(store, answers, min_completion)?
    } else {
        score_with(Arc::new(InMemoryStore::new()), answers, min_completion)?
    };

    render_profile(&result);

    if save {
        println!("\nSaved to {}", config.storage.dir.display());
    }
    if let Some(dir) = export_dir {
        let path = ResultExport::from_result(&result)?.write_to(dir)?;
        println!("Exported {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let answers = match args.value {
        Some(value) => uniform_answers(value),
        None => intended_answers(),
    };

    println!("Personality assessment demo");
    match args.value {
        Some(value) => println!("- every question answered with {value}"),
        None => println!("- every question answered in its intended direction"),
    }

    let result = score_with(
        Arc::new(InMemoryStore::new()),
        answers,
        config.assessment.min_completion,
    )?;
    render_profile(&result);
    Ok(())
}

pub(crate) fn run_results(config: &AppConfig) {
    let store = ResultStore::new(Arc::new(FileStore::new(config.storage.dir.clone())));
    match store.load() {
        Some(result) => render_profile(&result),
        None => println!("No saved result in {}", config.storage.dir.display()),
    }
}

fn score_with<S: KeyValueStore>(
    store: Arc<S>,
    answers: AnswerSet,
    min_completion: f64,
) -> Result<PersonalityResult, AppError> {
    let mut session = QuizSession::with_answers(question_bank(), store, answers)
        .with_min_completion(min_completion);
    Ok(session.submit()?)
}

/// Maximal agreement with every item, reverse items included.
pub(crate) fn intended_answers() -> AnswerSet {
    question_bank()
        .iter()
        .map(|question| {
            let value = if question.reverse {
                LIKERT_MIN
            } else {
                LIKERT_MAX
            };
            (question.id, value)
        })
        .collect()
}

pub(crate) fn uniform_answers(value: i32) -> AnswerSet {
    question_bank()
        .iter()
        .map(|question| (question.id, value))
        .collect()
}

fn render_profile(result: &PersonalityResult) {
    let summary = ProfileSummary::from_result(result);
    let scored_at = DateTime::<Utc>::from_timestamp_millis(result.timestamp)
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "unknown time".to_string());

    println!("\nBig Five profile (scored {scored_at})");
    for row in &summary.dimensions {
        println!(
            "- {:<16} {:>4.2} | {:>4}e centile | {:<12} {}",
            row.label,
            row.raw_score,
            row.percentile,
            row.level,
            bar(bar_percentage(row.raw_score))
        );
    }

    println!(
        "\nDominant: {} ({}) | secondary: {}",
        summary.dominant_dimension,
        summary.intensity.label(),
        summary.secondary_dimension
    );
    println!(
        "Archetype: {} ({})",
        summary.archetype.name, summary.archetype.id
    );
    println!("  {}", summary.archetype.description);
    println!("  Strengths: {}", summary.archetype.strengths.join(", "));
    println!("  Challenges: {}", summary.archetype.challenges.join(", "));

    match summary.shadow_trait {
        Some(facet) => println!(
            "Shadow trait: {} ({}) - {}",
            facet.name, facet.dimension, facet.description
        ),
        None => println!("Shadow trait: none"),
    }
    println!(
        "Zodiac: {} ({})",
        summary.zodiac.sign.label(),
        summary.zodiac.element.label()
    );

    let mut facets: Vec<_> = summary.facets.iter().collect();
    facets.sort_by_key(|row| std::cmp::Reverse(row.percentile));
    println!("Top facets:");
    for row in facets.iter().take(3) {
        println!(
            "  - {} ({}): {}e centile, {}",
            row.facet.name, row.facet.dimension, row.percentile, row.level
        );
    }
}

fn bar(percentage: i32) -> String {
    let filled = (percentage.clamp(0, 100) as usize * BAR_WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}
