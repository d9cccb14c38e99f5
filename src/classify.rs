//! Ordered alert classification.
//!
//! The rules form a strict priority chain evaluated top to bottom; the
//! first match wins, so an emergency condition can never be shadowed by a
//! lower tier. Missing vitals simply fail their comparisons and fall
//! through; missing gestational weeks disable the labor rules entirely.

use crate::catalog;
use crate::models::{AlertType, Classification, ControlReading, Priority, SymptomCode};
use crate::risk;

/// Run the rule chain for one reading and its reported symptom codes.
///
/// Returns `None` when no rule fires (no alert).
pub fn classify(reading: &ControlReading, symptoms: &[String]) -> Option<Classification> {
    classify_detected(reading, &catalog::detect_symptoms(symptoms))
}

pub(crate) fn classify_detected(
    reading: &ControlReading,
    detected: &[SymptomCode],
) -> Option<Classification> {
    // 1. Any emergency-set symptom forces the maximum tier, whatever the
    // vitals say. The message names the symptom that fired.
    if let Some(code) = detected
        .iter()
        .find(|code| catalog::EMERGENCY_SYMPTOMS.contains(code))
    {
        return Some(critical(format!(
            "ALERTA CRÍTICA: {}. Requiere atención médica inmediata.",
            code.label()
        )));
    }

    // 2. Active bleeding with hemodynamic compromise.
    if catalog::any_of(detected, catalog::HEMORRHAGE_SYMPTOMS) && hemodynamic_compromise(reading)
    {
        return Some(critical(
            "EMERGENCIA: hemorragia con compromiso hemodinámico. \
             Traslado inmediato a nivel hospitalario."
                .to_string(),
        ));
    }

    // 3. Maternal sepsis pattern.
    if sepsis_pattern(reading, detected) {
        return Some(critical(
            "EMERGENCIA: cuadro compatible con sepsis materna \
             (fiebre alta, taquicardia y síntomas sistémicos)."
                .to_string(),
        ));
    }

    // 4. Severe preeclampsia.
    if catalog::any_of(detected, catalog::PREECLAMPSIA_SYMPTOMS) && reading.severe_hypertension()
    {
        return Some(critical(
            "EMERGENCIA: preeclampsia severa con signos de alarma.".to_string(),
        ));
    }

    // 5-7. Labor symptoms, gated by gestational age. At term, contractions
    // by themselves are physiological, so evaluation falls through and
    // abnormal vitals can still classify below.
    if catalog::any_of(detected, catalog::LABOR_SYMPTOMS) {
        if reading.very_preterm() {
            return Some(critical(
                "EMERGENCIA: trabajo de parto muy prematuro (menos de 32 semanas)."
                    .to_string(),
            ));
        }
        if reading.preterm() {
            return Some(Classification {
                alert_type: AlertType::Labor,
                priority: Priority::High,
                message: "Trabajo de parto prematuro (32 a 36 semanas). \
                          Evaluación obstétrica urgente."
                    .to_string(),
            });
        }
    }

    // 8-10. Single severe findings.
    if reading.severe_hypertension() {
        return Some(high_risk(
            "Hipertensión severa. Evaluar preeclampsia de manera urgente.",
        ));
    }
    if reading.severe_tachycardia() {
        return Some(high_risk(
            "Taquicardia severa. Requiere evaluación médica urgente.",
        ));
    }
    if reading.high_fever() {
        return Some(high_risk(
            "Fiebre alta. Descartar proceso infeccioso de manera urgente.",
        ));
    }

    // 11. Edema on top of at least moderate hypertension.
    if reading.edema() && reading.hypertension() {
        return Some(high_risk(
            "Edema asociado a hipertensión. Control estricto de presión arterial.",
        ));
    }

    // 12. Combined moderate findings, caught by the score.
    let score = risk::score_detected(reading, detected, &[]);
    if score >= risk::SCORE_MEDIUM {
        return Some(Classification {
            alert_type: AlertType::HighRisk,
            priority: Priority::Medium,
            message: "Hallazgos moderados combinados. Requiere control reforzado."
                .to_string(),
        });
    }

    // 13. Nothing fired.
    None
}

/// Coarse, vitals-free classification for callers that only have the
/// reported symptom list.
pub fn classify_alert_type(symptoms: &[String]) -> Option<AlertType> {
    let detected = catalog::detect_symptoms(symptoms);
    if catalog::any_of(&detected, catalog::EMERGENCY_SYMPTOMS)
        || catalog::any_of(&detected, catalog::HEMORRHAGE_SYMPTOMS)
    {
        return Some(AlertType::EmergencyObstetric);
    }
    if catalog::any_of(&detected, catalog::PREECLAMPSIA_SYMPTOMS)
        || catalog::any_of(&detected, catalog::SEPSIS_SYMPTOMS)
    {
        return Some(AlertType::HighRisk);
    }
    if catalog::any_of(&detected, catalog::LABOR_SYMPTOMS) {
        return Some(AlertType::Labor);
    }
    None
}

/// Low blood pressure consistent with significant blood loss. Compensatory
/// tachycardia usually accompanies it but is not required.
fn hemodynamic_compromise(reading: &ControlReading) -> bool {
    reading.hypotension()
}

pub(crate) fn sepsis_pattern(reading: &ControlReading, detected: &[SymptomCode]) -> bool {
    reading.high_fever()
        && reading.severe_tachycardia()
        && catalog::any_of(detected, catalog::SEPSIS_SYMPTOMS)
}

fn critical(message: String) -> Classification {
    Classification {
        alert_type: AlertType::EmergencyObstetric,
        priority: Priority::Critical,
        message,
    }
}

fn high_risk(message: &str) -> Classification {
    Classification {
        alert_type: AlertType::HighRisk,
        priority: Priority::High,
        message: message.to_string(),
    }
}
