use std::fmt::{self, Write};

use cv_chain_core::error::ChainError;
use cv_chain_core::io::{LoadedText, TextOrigin};
use cv_chain_core::model::category::CharacterCategory;
use cv_chain_core::model::simulation::Simulation;
use cv_chain_core::model::transition::{TransitionCounts, TransitionProbabilities};

const RULE_WIDTH: usize = 60;
const BANNER_WIDTH: usize = 58;

fn section(out: &mut String, title: &str) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}\n{title}\n{rule}")
}

/// Boxed program title.
pub fn banner() -> Result<String, fmt::Error> {
    let mut out = String::new();
    let blank = " ".repeat(BANNER_WIDTH);
    writeln!(out, "\n╔{}╗", "═".repeat(BANNER_WIDTH))?;
    writeln!(out, "║{blank}║")?;
    writeln!(out, "║{:^width$}║", "  MARKOV CHAIN CHARACTER PREDICTION SIMULATOR", width = BANNER_WIDTH)?;
    writeln!(out, "║{blank}║")?;
    writeln!(out, "╚{}╝", "═".repeat(BANNER_WIDTH))?;
    Ok(out)
}

/// Informational line describing where the text came from.
pub fn source(loaded: &LoadedText) -> String {
    let chars = loaded.text.chars().count();
    match &loaded.origin {
        TextOrigin::File(path) => format!("Loaded text from '{}' ({chars} characters)\n", path.display()),
        TextOrigin::Fallback { missing } => {
            format!("File '{}' not found.\nFalling back to inline text.\n", missing.display())
        }
        TextOrigin::Inline => format!("Using inline text ({chars} characters)\n"),
    }
}

/// Line printed when a text is rejected before or after fitting.
pub fn failure(error: &ChainError) -> String {
    format!("Error: {error}")
}

/// Probability table and raw counts.
pub fn chain(probabilities: &TransitionProbabilities, counts: &TransitionCounts) -> Result<String, fmt::Error> {
    let mut out = String::new();
    section(&mut out, "MARKOV CHAIN TRANSITION PROBABILITIES")?;
    writeln!(out)?;
    writeln!(out, "                Next Character Type")?;
    writeln!(out, "              ┌─────────┬───────────┐")?;
    writeln!(out, "              │  Vowel  │ Consonant │")?;
    writeln!(out, "┌─────────────┼─────────┼───────────┤")?;
    for from in CharacterCategory::TRACKED {
        let [v, c] = probabilities.row(from);
        writeln!(out, "│ {:<11} │ {v:7.4} │  {c:7.4}  │", from.to_string())?;
    }
    writeln!(out, "└─────────────┴─────────┴───────────┘")?;
    writeln!(out)?;

    writeln!(out, "Raw Transition Counts:")?;
    for from in CharacterCategory::TRACKED {
        let total = counts.row_total(from);
        for to in CharacterCategory::TRACKED {
            writeln!(out, "  {from} -> {to}: {} (out of {total})", counts.get(from, to))?;
        }
    }
    Ok(out)
}

pub fn accuracy(simulation: &Simulation) -> Result<String, fmt::Error> {
    let evaluation = &simulation.evaluation;
    let mut out = String::new();
    section(&mut out, "ACCURACY TEST")?;
    writeln!(out)?;
    writeln!(out, "Predictions: {} correct out of {} total", evaluation.correct, evaluation.total)?;
    writeln!(out, "Accuracy: {:.2}%", evaluation.accuracy)?;
    Ok(out)
}

pub fn summary(simulation: &Simulation) -> Result<String, fmt::Error> {
    let summary = &simulation.summary;
    let mut out = String::new();
    section(&mut out, "SUMMARY STATISTICS")?;
    writeln!(out, "Total characters analyzed: {}", summary.total_chars)?;
    writeln!(out, "Alphabetic characters: {}", summary.alphabetic)?;
    writeln!(out, "  Vowels: {} ({:.1}%)", summary.vowels, summary.vowel_share())?;
    writeln!(out, "  Consonants: {} ({:.1}%)", summary.consonants, summary.consonant_share())?;
    writeln!(out, "Total transitions tracked: {}", summary.transitions)?;
    Ok(out)
}

/// Full human-readable report.
pub fn report(simulation: &Simulation) -> Result<String, fmt::Error> {
    Ok([
        chain(&simulation.probabilities, &simulation.counts)?,
        accuracy(simulation)?,
        summary(simulation)?,
    ]
    .join("\n"))
}
