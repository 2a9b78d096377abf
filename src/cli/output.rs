//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classifier::{ClassScore, ModelStats};
use crate::cli::args::{LexisArgs, OutputFormat};
use crate::error::Result;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainResult {
    pub model_path: String,
    pub examples: usize,
    pub classes: usize,
    pub vocabulary_size: usize,
    pub duration_ms: u64,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub sentence: String,
    pub label: Option<String>,
    pub score: f64,
    pub trusted: bool,
    pub scores: Option<Vec<ClassScore>>,
}

/// One normalized word.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizedWord {
    pub word: String,
    pub tag: Option<String>,
    pub base: String,
}

/// Result structure for normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub words: Vec<NormalizedWord>,
}

/// Result structure for model inspection.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectResult {
    pub model_path: String,
    pub stats: ModelStats,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexisArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexisArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    match value.as_object() {
        Some(obj) if obj.contains_key("trusted") => output_classification_human(&value),
        Some(obj) if obj.contains_key("words") => output_normalized_human(&value),
        Some(obj) if obj.contains_key("stats") => output_stats_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output a classification in human format.
fn output_classification_human(value: &serde_json::Value) -> Result<()> {
    let label = value
        .get("label")
        .and_then(|l| l.as_str())
        .unwrap_or("(no match)");
    let score = value.get("score").and_then(|s| s.as_f64()).unwrap_or(0.0);
    let trusted = value
        .get("trusted")
        .and_then(|t| t.as_bool())
        .unwrap_or(true);

    println!("Class:   {label}");
    println!("Score:   {score:.4}");
    println!("Trusted: {}", if trusted { "yes" } else { "no (tie)" });

    if let Some(scores) = value.get("scores").and_then(|s| s.as_array()) {
        println!();
        println!("Class Scores:");
        println!("═════════════");
        for entry in scores {
            let label = entry.get("label").map(format_value).unwrap_or_default();
            let score = entry.get("score").and_then(|s| s.as_f64()).unwrap_or(0.0);
            println!("  {label:<20} {score:.4}");
        }
    }
    Ok(())
}

/// Output normalized words in human format.
fn output_normalized_human(value: &serde_json::Value) -> Result<()> {
    if let Some(words) = value.get("words").and_then(|w| w.as_array()) {
        for entry in words {
            let word = entry.get("word").map(format_value).unwrap_or_default();
            let base = entry.get("base").map(format_value).unwrap_or_default();
            match entry.get("tag").and_then(|t| t.as_str()) {
                Some(tag) => println!("{word}/{tag} -> {base}"),
                None => println!("{word} -> {base}"),
            }
        }
    }
    Ok(())
}

/// Output model statistics in human format.
fn output_stats_human(value: &serde_json::Value) -> Result<()> {
    if let Some(path) = value.get("model_path") {
        println!("Model: {}", format_value(path));
    }
    let Some(stats) = value.get("stats") else {
        return Ok(());
    };

    println!("Model Statistics:");
    println!("═════════════════");
    for key in ["ngram_size", "mode", "vocabulary_size", "total_ngrams"] {
        if let Some(val) = stats.get(key) {
            println!("{key}: {}", format_value(val));
        }
    }

    if let Some(classes) = stats.get("classes").and_then(|c| c.as_array()) {
        println!();
        println!("Classes ({}):", classes.len());
        for class in classes {
            let label = class.get("label").map(format_value).unwrap_or_default();
            let ngrams = class.get("ngrams").map(format_value).unwrap_or_default();
            let distinct = class
                .get("distinct_ngrams")
                .map(format_value)
                .unwrap_or_default();
            println!("  {label:<20} {ngrams} n-grams ({distinct} distinct)");
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexisArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
