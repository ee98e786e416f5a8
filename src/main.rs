mod cli;
mod config;
mod engine;
mod error;
mod ident;
mod matching;
mod report;
mod statement;
mod text;
mod types;
mod vocab;

use crate::engine::{Engine, EngineSettings};
use crate::error::{IqcheckError, Result};
use crate::matching::MatchPolicy;
use crate::statement::Statement;
use crate::text::language::Language;
use crate::types::report::{CheckReport, ProgramReport, VocabReport};
use chrono::Utc;
use clap::Parser;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const LOW_COVERAGE: i32 = 1;
    pub const NOTHING_TO_CHECK: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Check(cmd) => run_check(cmd),
        cli::Commands::Vocab(cmd) => run_vocab(cmd),
        cli::Commands::Identifiers(cmd) => run_identifiers(cmd),
    }
}

fn run_check(cmd: cli::CheckCommand) -> Result<i32> {
    let statement = Statement::load(&cmd.statement)?;
    let loaded = config::load_config(&std::env::current_dir()?)?;

    let mut settings = EngineSettings::from_config(loaded.as_ref())?;
    if let Some(policy) = cmd.policy {
        settings.policy = match policy {
            cli::PolicyArg::Any => MatchPolicy::AnyFragment,
            cli::PolicyArg::All => MatchPolicy::AllFragments,
        };
    }
    if let Some(name) = &cmd.language {
        settings.statement_language = Some(Language::from_name(name)?);
    }
    let min_coverage = resolve_min_coverage(cmd.min_coverage, loaded.as_ref())?;

    let engine = Engine::new(settings);
    let (vocabulary, language) = engine.build_vocabulary(&statement.text);

    let mut programs = Vec::new();
    for path in program_files(&cmd.program)? {
        let source = std::fs::read_to_string(&path)?;
        let identifiers = ident::extract::extract_identifiers(&source)?;
        match engine.score(&vocabulary, language, &identifiers) {
            Ok(score) => programs.push(ProgramReport {
                path: path.display().to_string(),
                score,
            }),
            Err(IqcheckError::EmptyProgram) => {
                tracing::warn!(path = %path.display(), "no identifiers to check");
            }
            Err(other) => return Err(other),
        }
    }

    if programs.is_empty() {
        eprintln!("check: nothing to check");
        return Ok(exit_code::NOTHING_TO_CHECK);
    }

    let check_report = CheckReport {
        generated_at: Utc::now(),
        statement_digest: statement.digest(),
        language: language.name().to_string(),
        vocabulary_size: vocabulary.len(),
        policy: engine.policy().name().to_string(),
        programs,
    };

    let format = output_format(cmd.format);
    let rendered = report::render_check(&check_report, format)?;
    println!("{rendered}");

    // Exit 1 is reserved for coverage failures; programs skipped for
    // having no identifiers only warn.
    let below_threshold = check_report
        .programs
        .iter()
        .any(|program| program.score.ratio < min_coverage);
    if below_threshold {
        tracing::warn!(threshold = min_coverage, "coverage below threshold");
        Ok(exit_code::LOW_COVERAGE)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn run_vocab(cmd: cli::VocabCommand) -> Result<i32> {
    let statement = Statement::load(&cmd.statement)?;
    let loaded = config::load_config(&std::env::current_dir()?)?;

    let mut settings = EngineSettings::from_config(loaded.as_ref())?;
    if let Some(name) = &cmd.language {
        settings.statement_language = Some(Language::from_name(name)?);
    }

    let engine = Engine::new(settings);
    let (vocabulary, language) = engine.build_vocabulary(&statement.text);

    let vocab_report = VocabReport {
        statement_digest: statement.digest(),
        language: language.name().to_string(),
        terms: vocabulary.sorted_terms(),
    };
    let rendered = report::render_vocab(&vocab_report, output_format(cmd.format))?;
    println!("{rendered}");
    Ok(exit_code::SUCCESS)
}

fn run_identifiers(cmd: cli::IdentifiersCommand) -> Result<i32> {
    if !cmd.program.exists() {
        return Err(IqcheckError::PathNotFound(cmd.program.display().to_string()));
    }
    let source = std::fs::read_to_string(&cmd.program)?;
    let identifiers = ident::extract::extract_identifiers(&source)?;

    if identifiers.is_empty() {
        eprintln!("identifiers: nothing to check");
        return Ok(exit_code::NOTHING_TO_CHECK);
    }
    for identifier in identifiers {
        println!("{identifier}");
    }
    Ok(exit_code::SUCCESS)
}

fn resolve_min_coverage(
    flag: Option<f64>,
    config: Option<&types::config::IqcheckConfig>,
) -> Result<f64> {
    let min_coverage = flag.unwrap_or_else(|| {
        config
            .map(|cfg| cfg.min_coverage())
            .unwrap_or(0.0)
    });
    if !(0.0..=1.0).contains(&min_coverage) {
        return Err(IqcheckError::ConfigParse(
            "min coverage must be between 0.0 and 1.0".to_string(),
        ));
    }
    Ok(min_coverage)
}

fn program_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(IqcheckError::PathNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|file| {
            file.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "py")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(IqcheckError::NoPrograms(path.display().to_string()));
    }
    Ok(files)
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
