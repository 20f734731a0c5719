//! # StudyLab CLI
//!
//! Terminal front end for study_core: run calculators, browse the formula
//! reference, practise exercises and review progress. Progress is stored in
//! the data directory (`--data-dir`, `STUDYLAB_DATA_DIR` or the settings file).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use study_core::calculators::{self, CalculatorKind, CalculatorResult};
use study_core::catalog::{self, Subject, ALL_SUBJECTS};
use study_core::exercises::AnswerCheck;
use study_core::{FileStore, Settings, StudyError, StudyResult, StudySession};

#[derive(Parser)]
#[command(name = "studylab", version, about = "Formulas, calculators and practice for school science")]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for saved progress (overrides settings)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every calculator
    Calculators,

    /// Evaluate a calculator, e.g. `calc speed 100 20`
    Calc {
        /// Calculator slug or name (e.g. "ohms-law")
        calculator: String,

        /// Input values in the calculator's order; "2,5" and "2.5" are both accepted
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// List reference formulas
    Formulas {
        /// Only this subject: mathematics, physics or chemistry
        #[arg(long)]
        subject: Option<Subject>,
    },

    /// Show one formula and mark it viewed
    Show {
        /// Formula id (e.g. "circle_area")
        formula_id: String,
    },

    /// Generate a practice exercise
    Exercise {
        /// Formula id to practise
        formula_id: String,

        /// Answer to check; prompts on stdin when omitted
        #[arg(long, allow_hyphen_values = true)]
        answer: Option<String>,
    },

    /// Show counters and achievements
    Progress,

    /// Reset all progress
    Reset,
}

fn main() {
    let cli = Cli::parse();

    let settings = Settings::load_or_default(cli.config.as_deref());
    let log_level = settings
        .as_ref()
        .map(|s| s.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with_writer(io::stderr)
        .init();

    let result = settings.and_then(|mut settings| {
        if let Some(dir) = cli.data_dir {
            settings.data_dir = dir;
        }
        debug!(data_dir = %settings.data_dir.display(), key = %settings.progress_key, "Using data directory");
        run(cli.command, &settings, cli.json)
    });

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            if cli.json {
                let body = serde_json::to_string(&e).unwrap_or_else(|_| e.to_string());
                eprintln!("{}", body);
            } else {
                eprintln!("Error [{}]: {}", e.error_code(), e);
            }
            process::exit(1);
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> StudyResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| StudyError::serialization(e.to_string()))
}

/// Execute one command and return the process exit code.
fn run(command: Commands, settings: &Settings, json: bool) -> StudyResult<i32> {
    match command {
        Commands::Calculators => {
            list_calculators();
            Ok(0)
        }
        Commands::Formulas { subject } => {
            list_formulas(subject);
            Ok(0)
        }
        Commands::Calc { calculator, values } => {
            let kind: CalculatorKind = calculator.parse()?;
            let mut session = open_session(settings)?;
            let fields: Vec<&str> = values.iter().map(String::as_str).collect();
            calc(&mut session, kind, &fields, json)
        }
        Commands::Show { formula_id } => {
            let mut session = open_session(settings)?;
            show_formula(&mut session, &formula_id)?;
            Ok(0)
        }
        Commands::Exercise { formula_id, answer } => {
            let mut session = open_session(settings)?;
            exercise(&mut session, &formula_id, answer)
        }
        Commands::Progress => {
            let session = open_session(settings)?;
            print_progress(&session, json)?;
            Ok(0)
        }
        Commands::Reset => {
            let mut session = open_session(settings)?;
            session.reset_progress();
            println!("Progress reset.");
            Ok(0)
        }
    }
}

fn open_session(settings: &Settings) -> StudyResult<StudySession<FileStore>> {
    StudySession::open(settings)
}

fn list_calculators() {
    for definition in calculators::list() {
        let inputs: Vec<String> = definition
            .inputs
            .iter()
            .map(|field| {
                if field.unit.is_empty() {
                    format!("{} ({})", field.name, field.symbol)
                } else {
                    format!("{} ({}, {})", field.name, field.symbol, field.unit)
                }
            })
            .collect();
        println!(
            "{:<22} {:<22} {:<22} {}",
            definition.kind.slug(),
            definition.name,
            definition.formula_display,
            inputs.join(", ")
        );
    }
}

fn calc(session: &mut StudySession<FileStore>, kind: CalculatorKind, fields: &[&str], json: bool) -> StudyResult<i32> {
    let result = session.calculate(kind, fields);
    if json {
        println!("{}", to_json(&result)?);
        return Ok(if result.is_success() { 0 } else { 1 });
    }

    match &result {
        CalculatorResult::Success { .. } => {
            println!("{}", result.display());
            Ok(0)
        }
        CalculatorResult::Failure { message } => {
            eprintln!("{}", message);
            Ok(1)
        }
    }
}

fn list_formulas(subject: Option<Subject>) {
    let subjects: Vec<Subject> = match subject {
        Some(subject) => vec![subject],
        None => ALL_SUBJECTS.to_vec(),
    };

    for subject in subjects {
        println!("{}", subject);
        for formula in catalog::list_by_subject(subject) {
            println!("  {:<32} {:<32} {}", formula.id, formula.name, formula.formula_display);
        }
    }
}

fn show_formula(session: &mut StudySession<FileStore>, formula_id: &str) -> StudyResult<()> {
    let formula = session.open_formula(formula_id)?;

    println!("{} ({})", formula.name, formula.subject);
    println!();
    println!("  {}", formula.formula_display);
    println!();
    println!("{}", formula.description);
    println!();
    for variable in formula.variables {
        println!("  {:<6} {} - {}", variable.symbol, variable.name, variable.description);
    }
    Ok(())
}

fn exercise(session: &mut StudySession<FileStore>, formula_id: &str, answer: Option<String>) -> StudyResult<i32> {
    let exercise = session.new_exercise(formula_id)?;
    println!("{}", exercise.question);

    let answer = match answer {
        Some(answer) => answer,
        None => match prompt_answer()? {
            Some(answer) => answer,
            None => {
                println!("No answer given.");
                return Ok(0);
            }
        },
    };

    match session.submit_answer(&exercise, &answer) {
        AnswerCheck::Correct { explanation, .. } => {
            println!("Correct!");
            println!("{}", explanation);
            Ok(0)
        }
        AnswerCheck::Incorrect { expected, explanation, .. } => {
            println!("Incorrect. The correct answer is {:.2}.", expected);
            println!("{}", explanation);
            Ok(0)
        }
        AnswerCheck::InvalidFormat { input } => {
            eprintln!("'{}' is not a number. Enter a number such as 12.5 or 12,5.", input);
            Ok(1)
        }
    }
}

/// Read one answer line from stdin; `None` on EOF or an empty line.
fn prompt_answer() -> StudyResult<Option<String>> {
    print!("Your answer: ");
    io::stdout()
        .flush()
        .map_err(|e| StudyError::file_error("flush", "<stdout>", e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| StudyError::file_error("read", "<stdin>", e.to_string()))?;

    let line = line.trim();
    Ok((!line.is_empty()).then(|| line.to_string()))
}

fn print_progress(session: &StudySession<FileStore>, json: bool) -> StudyResult<()> {
    let progress = session.progress();
    if json {
        let body = serde_json::json!({
            "progress": progress,
            "achievements": session.achievements(),
        });
        println!("{}", to_json(&body)?);
        return Ok(());
    }

    println!("Formulas viewed:    {}", progress.viewed_formulas_count);
    println!("Calculations:       {}", progress.calculations_count);
    println!("Exercises solved:   {}", progress.solved_exercises_count);
    println!();

    let achievements = session.achievements();
    let earned = achievements.iter().filter(|a| a.is_earned).count();
    println!("Achievements ({}/{}):", earned, achievements.len());
    for achievement in achievements {
        let mark = if achievement.is_earned { "x" } else { " " };
        println!("  [{}] {:<24} {}", mark, achievement.name, achievement.description);
    }
    Ok(())
}
