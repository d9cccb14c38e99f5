//! Obstetric early-warning evaluation engine for Materna prenatal controls.
//!
//! Takes a snapshot of a patient's vital signs, gestational age and
//! reported symptom codes and produces a classified, prioritized alert
//! with a 0..=100 risk score and care recommendations. Every entry point
//! is a pure, synchronous function over value types: no I/O, no shared
//! state, safe to call concurrently from any number of threads.
//!
//! ```
//! use materna_early_warning::{evaluate, models::ControlReading};
//!
//! let reading = ControlReading {
//!     gestational_weeks: Some(30),
//!     ..Default::default()
//! };
//! let symptoms = vec!["contracciones_regulares".to_string()];
//! let outcome = evaluate(&reading, &symptoms);
//! assert_eq!(outcome.priority.unwrap().as_str(), "critica");
//! ```

pub mod catalog;
pub mod classify;
pub mod models;
pub mod recommend;
pub mod risk;

pub use classify::{classify, classify_alert_type};
pub use models::{AlertOutcome, AlertType, ControlReading, Priority};
pub use recommend::recommendations;
pub use risk::{calculate_risk_score, priority_for_score};

/// Run the full evaluation for one control reading: classification, risk
/// score and care recommendations in a single result.
///
/// The classifier is authoritative for type, priority and message; the
/// score is computed independently and also feeds the recommendations.
pub fn evaluate(reading: &ControlReading, symptoms: &[String]) -> AlertOutcome {
    let detected = catalog::detect_symptoms(symptoms);
    let classification = classify::classify_detected(reading, &detected);
    let score = risk::score_detected(reading, &detected, &[]);
    let recommendations = recommend::recommend_detected(reading, &detected, score);

    let (alert_type, priority, message) = match classification {
        Some(c) => (Some(c.alert_type), Some(c.priority), Some(c.message)),
        None => (None, None, None),
    };

    AlertOutcome {
        alert_type,
        priority,
        message,
        score,
        detected_symptoms: detected.iter().map(|code| code.as_str().to_string()).collect(),
        recommendations,
    }
}
