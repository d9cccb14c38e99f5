use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use materna_early_warning::models::{AlertOutcome, ControlReading};
use materna_early_warning::{evaluate, Priority};

#[derive(Parser)]
#[command(name = "materna-early-warning")]
#[command(about = "Obstetric early warning evaluator for Materna prenatal controls", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single control reading
    Evaluate {
        #[arg(long)]
        systolic: Option<i32>,
        #[arg(long)]
        diastolic: Option<i32>,
        #[arg(long)]
        heart_rate: Option<i32>,
        #[arg(long)]
        temperature: Option<f64>,
        #[arg(long)]
        weeks: Option<i32>,
        #[arg(long)]
        fetal_movement: Option<bool>,
        #[arg(long)]
        edema: Option<bool>,
        #[arg(long)]
        weight: Option<f64>,
        /// Reported symptom code; repeat the flag for several symptoms
        #[arg(long = "symptom")]
        symptoms: Vec<String>,
        /// Print the full outcome as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Evaluate a CSV of control readings and list the highest-risk cases
    Batch {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            systolic,
            diastolic,
            heart_rate,
            temperature,
            weeks,
            fetal_movement,
            edema,
            weight,
            symptoms,
            json,
        } => {
            let reading = ControlReading {
                systolic_bp: systolic,
                diastolic_bp: diastolic,
                heart_rate,
                temperature_c: temperature,
                gestational_weeks: weeks,
                fetal_movement_present: fetal_movement,
                edema_present: edema,
                weight_kg: weight,
            };
            let outcome = evaluate(&reading, &symptoms);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_outcome(&outcome);
            }
        }
        Commands::Batch { csv, limit } => {
            let cases = evaluate_csv(&csv)
                .with_context(|| format!("failed to evaluate readings from {}", csv.display()))?;

            if cases.is_empty() {
                println!("No readings found in {}.", csv.display());
                return Ok(());
            }

            let critical = count_with_priority(&cases, Priority::Critical);
            let high = count_with_priority(&cases, Priority::High);
            println!(
                "Evaluated {} readings ({critical} critical, {high} high).",
                cases.len()
            );

            let mut ranked = cases;
            ranked.sort_by(|a, b| b.outcome.score.cmp(&a.outcome.score));

            println!("Highest-risk cases:");
            for case in ranked.iter().take(limit) {
                println!(
                    "- {} ({}) score {} priority {} {}",
                    case.patient_name,
                    case.recorded_at,
                    case.outcome.score,
                    case.outcome.priority.map_or("-", |p| p.as_str()),
                    case.outcome.message.as_deref().unwrap_or("sin alerta"),
                );
            }
        }
    }

    Ok(())
}

struct EvaluatedCase {
    patient_name: String,
    recorded_at: NaiveDate,
    outcome: AlertOutcome,
}

fn evaluate_csv(csv_path: &std::path::Path) -> anyhow::Result<Vec<EvaluatedCase>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        patient_name: String,
        recorded_at: NaiveDate,
        systolic_bp: Option<i32>,
        diastolic_bp: Option<i32>,
        heart_rate: Option<i32>,
        temperature_c: Option<f64>,
        gestational_weeks: Option<i32>,
        fetal_movement_present: Option<bool>,
        edema_present: Option<bool>,
        weight_kg: Option<f64>,
        /// Symptom codes separated by `;`
        symptoms: Option<String>,
    }

    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut cases = Vec::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let reading = ControlReading {
            systolic_bp: row.systolic_bp,
            diastolic_bp: row.diastolic_bp,
            heart_rate: row.heart_rate,
            temperature_c: row.temperature_c,
            gestational_weeks: row.gestational_weeks,
            fetal_movement_present: row.fetal_movement_present,
            edema_present: row.edema_present,
            weight_kg: row.weight_kg,
        };
        let symptoms: Vec<String> = row
            .symptoms
            .as_deref()
            .unwrap_or("")
            .split(';')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        cases.push(EvaluatedCase {
            patient_name: row.patient_name,
            recorded_at: row.recorded_at,
            outcome: evaluate(&reading, &symptoms),
        });
    }

    Ok(cases)
}

fn count_with_priority(cases: &[EvaluatedCase], priority: Priority) -> usize {
    cases
        .iter()
        .filter(|case| case.outcome.priority == Some(priority))
        .count()
}

fn print_outcome(outcome: &AlertOutcome) {
    println!(
        "Score {} (priority {})",
        outcome.score,
        outcome.priority.map_or("-", |p| p.as_str()),
    );
    match (&outcome.alert_type, &outcome.message) {
        (Some(alert_type), Some(message)) => {
            println!("Alert: {}", alert_type.as_str());
            println!("Message: {message}");
        }
        _ => println!("No alert."),
    }
    if !outcome.detected_symptoms.is_empty() {
        println!("Detected symptoms: {}", outcome.detected_symptoms.join(", "));
    }
    println!("Recommendations:");
    for rec in &outcome.recommendations {
        println!("- {rec}");
    }
}
