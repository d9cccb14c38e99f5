//! Weighted risk scoring over one control reading, its reported symptoms
//! and an optional window of recent readings.
//!
//! Contributions are independent and summed, never maxed: several moderate
//! findings together can land in the critical band even when no single
//! finding would. The final score is clamped to 0..=100.

use crate::catalog;
use crate::models::{ControlReading, Priority, SymptomCode};

// Contribution weights. Tunable, calibrated so that any emergency-set
// symptom alone reaches the critical band and a normal reading scores 0.
const W_SEVERE_HYPERTENSION: i32 = 40;
const W_MODERATE_HYPERTENSION: i32 = 20;
const W_SEVERE_TACHYCARDIA: i32 = 25;
const W_MILD_TACHYCARDIA: i32 = 10;
const W_HIGH_FEVER: i32 = 20;
const W_MILD_FEVER: i32 = 10;
const W_FETAL_MOVEMENT_ABSENT: i32 = 40;
const W_EDEMA: i32 = 5;
const W_EDEMA_WITH_HYPERTENSION: i32 = 15;
const W_EMERGENCY_SYMPTOM: i32 = 90;
const W_WARNING_SYMPTOM: i32 = 20;
const W_LABOR_SYMPTOM: i32 = 15;
const W_SUSTAINED_HYPERTENSION: i32 = 10;

/// Score floor of the medium priority band, also the classifier's cutoff
/// for combined moderate findings.
pub const SCORE_MEDIUM: u8 = 30;
pub const SCORE_HIGH: u8 = 60;
pub const SCORE_CRITICAL: u8 = 80;

/// Compute the 0..=100 risk score for one reading.
///
/// `symptoms` are raw caller codes; unknown codes contribute nothing.
/// `recent_history` is a chronological slice of prior readings; pass an
/// empty slice when no history is available.
pub fn calculate_risk_score(
    reading: &ControlReading,
    symptoms: &[String],
    recent_history: &[ControlReading],
) -> u8 {
    score_detected(reading, &catalog::detect_symptoms(symptoms), recent_history)
}

pub(crate) fn score_detected(
    reading: &ControlReading,
    detected: &[SymptomCode],
    recent_history: &[ControlReading],
) -> u8 {
    let mut score = 0i32;

    if reading.severe_hypertension() {
        score += W_SEVERE_HYPERTENSION;
    } else if reading.hypertension() {
        score += W_MODERATE_HYPERTENSION;
    }

    if reading.severe_tachycardia() {
        score += W_SEVERE_TACHYCARDIA;
    } else if reading.tachycardia() {
        score += W_MILD_TACHYCARDIA;
    }

    if reading.high_fever() {
        score += W_HIGH_FEVER;
    } else if reading.fever() {
        score += W_MILD_FEVER;
    }

    if reading.fetal_movement_absent() {
        score += W_FETAL_MOVEMENT_ABSENT;
    }

    // Edema weighs more when hypertension is present as well.
    if reading.edema() {
        score += if reading.hypertension() {
            W_EDEMA_WITH_HYPERTENSION
        } else {
            W_EDEMA
        };
    }

    let labor_weight = W_LABOR_SYMPTOM * prematurity_multiplier(reading);
    for code in detected {
        if catalog::EMERGENCY_SYMPTOMS.contains(code) {
            score += W_EMERGENCY_SYMPTOM;
        } else if catalog::HEMORRHAGE_SYMPTOMS.contains(code)
            || catalog::SEPSIS_SYMPTOMS.contains(code)
            || catalog::PREECLAMPSIA_SYMPTOMS.contains(code)
        {
            score += W_WARNING_SYMPTOM;
        } else if catalog::LABOR_SYMPTOMS.contains(code) {
            score += labor_weight;
        }
    }

    if sustained_hypertension(recent_history) {
        score += W_SUSTAINED_HYPERTENSION;
    }

    score.clamp(0, 100) as u8
}

/// Labor symptoms weigh more the further the pregnancy is from term.
fn prematurity_multiplier(reading: &ControlReading) -> i32 {
    if reading.very_preterm() {
        3
    } else if reading.preterm() {
        2
    } else {
        1
    }
}

/// Two consecutive readings at or above the moderate hypertension
/// threshold count as a sustained trend; a single spike does not.
fn sustained_hypertension(history: &[ControlReading]) -> bool {
    history
        .windows(2)
        .any(|pair| pair[0].hypertension() && pair[1].hypertension())
}

/// Map a risk score into its priority band.
pub fn priority_for_score(score: u8) -> Priority {
    if score >= SCORE_CRITICAL {
        Priority::Critical
    } else if score >= SCORE_HIGH {
        Priority::High
    } else if score >= SCORE_MEDIUM {
        Priority::Medium
    } else {
        Priority::Low
    }
}
