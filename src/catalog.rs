//! Clinical cut points and named symptom sets used by the evaluation rules.
//!
//! Boundary values count toward the abnormal side: a systolic of exactly
//! 140 is hypertensive, a temperature of exactly 38.3 is high fever.

use crate::models::SymptomCode;

pub const SYSTOLIC_HIGH: i32 = 140;
pub const SYSTOLIC_SEVERE: i32 = 160;
pub const SYSTOLIC_LOW: i32 = 90;

pub const DIASTOLIC_HIGH: i32 = 90;
pub const DIASTOLIC_SEVERE: i32 = 110;
pub const DIASTOLIC_LOW: i32 = 60;

pub const HEART_RATE_LOW: i32 = 60;
pub const HEART_RATE_HIGH: i32 = 100;
pub const HEART_RATE_SEVERE: i32 = 120;

pub const TEMPERATURE_LOW: f64 = 36.0;
pub const TEMPERATURE_HIGH: f64 = 37.5;
pub const TEMPERATURE_SEVERE: f64 = 38.3;

/// Labor below this many completed weeks is an obstetric emergency.
pub const VERY_PRETERM_WEEKS: i32 = 32;
/// Completed weeks from which contractions are physiological.
pub const TERM_WEEKS: i32 = 37;

/// Any of these forces the maximum severity tier regardless of vitals.
pub const EMERGENCY_SYMPTOMS: &[SymptomCode] = &[
    SymptomCode::Convulsions,
    SymptomCode::LossOfConsciousness,
    SymptomCode::ConfirmedFetalMovementAbsence,
    SymptomCode::MassiveBleeding,
];

pub const HEMORRHAGE_SYMPTOMS: &[SymptomCode] = &[
    SymptomCode::HeavyVaginalBleeding,
    SymptomCode::BleedingWithClots,
];

/// Only meaningful combined with high fever and severe tachycardia.
pub const SEPSIS_SYMPTOMS: &[SymptomCode] = &[
    SymptomCode::Chills,
    SymptomCode::SevereMalaise,
];

pub const PREECLAMPSIA_SYMPTOMS: &[SymptomCode] = &[
    SymptomCode::SevereHeadache,
    SymptomCode::BlurredVision,
    SymptomCode::EpigastricPain,
    SymptomCode::FacialEdema,
];

pub const LABOR_SYMPTOMS: &[SymptomCode] = &[
    SymptomCode::RegularContractions,
    SymptomCode::MembraneRupture,
    SymptomCode::PelvicPressure,
];

/// Map raw caller strings onto canonical codes.
///
/// Unknown strings are dropped, duplicates collapse to their first
/// occurrence, and input order is preserved for the audit trail.
pub fn detect_symptoms(symptoms: &[String]) -> Vec<SymptomCode> {
    let mut detected = Vec::new();
    for raw in symptoms {
        if let Some(code) = SymptomCode::parse(raw.trim()) {
            if !detected.contains(&code) {
                detected.push(code);
            }
        }
    }
    detected
}

pub fn any_of(detected: &[SymptomCode], set: &[SymptomCode]) -> bool {
    detected.iter().any(|code| set.contains(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn severe_thresholds_sit_above_moderate_ones() {
        assert!(SYSTOLIC_SEVERE > SYSTOLIC_HIGH);
        assert!(DIASTOLIC_SEVERE > DIASTOLIC_HIGH);
        assert!(HEART_RATE_SEVERE > HEART_RATE_HIGH);
        assert!(HEART_RATE_HIGH > HEART_RATE_LOW);
        assert!(TEMPERATURE_SEVERE > TEMPERATURE_HIGH);
        assert!(TEMPERATURE_HIGH > TEMPERATURE_LOW);
        assert!(VERY_PRETERM_WEEKS < TERM_WEEKS);
    }

    #[test]
    fn symptom_sets_do_not_overlap() {
        let sets = [
            EMERGENCY_SYMPTOMS,
            HEMORRHAGE_SYMPTOMS,
            SEPSIS_SYMPTOMS,
            PREECLAMPSIA_SYMPTOMS,
            LABOR_SYMPTOMS,
        ];
        for (i, a) in sets.iter().enumerate() {
            for b in sets.iter().skip(i + 1) {
                for code in *a {
                    assert!(
                        !b.contains(code),
                        "{} appears in more than one set",
                        code.as_str()
                    );
                }
            }
        }
    }

    #[test]
    fn every_code_belongs_to_exactly_one_set() {
        let all: Vec<_> = [
            EMERGENCY_SYMPTOMS,
            HEMORRHAGE_SYMPTOMS,
            SEPSIS_SYMPTOMS,
            PREECLAMPSIA_SYMPTOMS,
            LABOR_SYMPTOMS,
        ]
        .concat();
        assert_eq!(all.len(), 15);
    }

    #[test]
    fn detect_preserves_input_order() {
        let detected = detect_symptoms(&codes(&[
            "vision_borrosa",
            "convulsiones",
            "escalofrios",
        ]));
        assert_eq!(
            detected,
            vec![
                SymptomCode::BlurredVision,
                SymptomCode::Convulsions,
                SymptomCode::Chills,
            ]
        );
    }

    #[test]
    fn detect_drops_unknown_codes() {
        let detected = detect_symptoms(&codes(&[
            "mareo_leve",
            "dolor_cabeza_severo",
            "codigo_futuro",
        ]));
        assert_eq!(detected, vec![SymptomCode::SevereHeadache]);
    }

    #[test]
    fn detect_collapses_duplicates() {
        let detected = detect_symptoms(&codes(&[
            "contracciones_regulares",
            "contracciones_regulares",
            "ruptura_membranas",
        ]));
        assert_eq!(
            detected,
            vec![
                SymptomCode::RegularContractions,
                SymptomCode::MembraneRupture,
            ]
        );
    }

    #[test]
    fn detect_trims_whitespace() {
        let detected = detect_symptoms(&codes(&["  convulsiones  "]));
        assert_eq!(detected, vec![SymptomCode::Convulsions]);
    }

    #[test]
    fn any_of_checks_membership() {
        let detected = vec![SymptomCode::Chills, SymptomCode::RegularContractions];
        assert!(any_of(&detected, SEPSIS_SYMPTOMS));
        assert!(any_of(&detected, LABOR_SYMPTOMS));
        assert!(!any_of(&detected, EMERGENCY_SYMPTOMS));
        assert!(!any_of(&[], EMERGENCY_SYMPTOMS));
    }
}
