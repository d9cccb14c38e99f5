//! Care recommendations derived from the detected conditions and the
//! computed risk score.
//!
//! The list is assembled in a fixed order and deduplicated, and each
//! condition always renders the same instruction string, so callers can
//! match on exact text. The list is never empty: a quiet reading still
//! gets routine follow-up guidance.

use crate::catalog;
use crate::classify;
use crate::models::{ControlReading, SymptomCode};
use crate::risk;

const REC_TRANSFER: &str = "Traslado inmediato a centro hospitalario de mayor complejidad";

/// Build the recommendation list for one reading, its reported symptom
/// codes and a risk score already computed for the same inputs.
pub fn recommendations(
    reading: &ControlReading,
    symptoms: &[String],
    score: u8,
) -> Vec<String> {
    recommend_detected(reading, &catalog::detect_symptoms(symptoms), score)
}

pub(crate) fn recommend_detected(
    reading: &ControlReading,
    detected: &[SymptomCode],
    score: u8,
) -> Vec<String> {
    let mut recs: Vec<String> = Vec::new();

    // Emergency-protocol items lead the list when the score is critical.
    if score >= risk::SCORE_CRITICAL {
        push_unique(&mut recs, REC_TRANSFER);
        push_unique(&mut recs, "Activar protocolo de emergencia obstétrica");
    }

    if reading.hypertension() {
        push_unique(&mut recs, "Control de presión arterial cada 4 horas");
        push_unique(&mut recs, "Dieta hiposódica");
        push_unique(&mut recs, "Reposo relativo en decúbito lateral izquierdo");
        if reading.severe_hypertension() {
            push_unique(
                &mut recs,
                "Hospitalización para manejo de hipertensión severa",
            );
            push_unique(
                &mut recs,
                "Administrar sulfato de magnesio según protocolo",
            );
            push_unique(&mut recs, "Evaluación continua del bienestar fetal");
        }
    }

    if reading.fever() {
        push_unique(&mut recs, "Control de temperatura cada 4 horas");
        push_unique(&mut recs, "Administrar antipiréticos según indicación médica");
        if classify::sepsis_pattern(reading, detected) {
            push_unique(&mut recs, "Iniciar antibioticoterapia de manera inmediata");
        }
    }

    if catalog::any_of(detected, catalog::HEMORRHAGE_SYMPTOMS)
        || detected.contains(&SymptomCode::MassiveBleeding)
    {
        push_unique(&mut recs, "Monitoreo hemodinámico continuo");
        push_unique(&mut recs, REC_TRANSFER);
    }

    if catalog::any_of(detected, catalog::LABOR_SYMPTOMS) {
        if reading.very_preterm() {
            push_unique(
                &mut recs,
                "Administración de corticoides para maduración pulmonar fetal",
            );
            push_unique(&mut recs, "Considerar tocólisis según evaluación obstétrica");
            push_unique(&mut recs, "Notificar a la unidad de neonatología");
        } else if reading.preterm() {
            push_unique(
                &mut recs,
                "Evaluación obstétrica urgente por trabajo de parto prematuro",
            );
        }
    }

    if reading.fetal_movement_absent()
        || detected.contains(&SymptomCode::ConfirmedFetalMovementAbsence)
    {
        push_unique(
            &mut recs,
            "Evaluación inmediata del bienestar fetal con monitoreo electrónico",
        );
    }

    if recs.is_empty() {
        push_unique(&mut recs, "Continuar con controles prenatales de rutina");
        push_unique(
            &mut recs,
            "Consultar de inmediato ante la aparición de signos de alarma",
        );
    }

    recs
}

fn push_unique(recs: &mut Vec<String>, rec: &str) {
    if !recs.iter().any(|existing| existing == rec) {
        recs.push(rec.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::calculate_risk_score;

    fn codes(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn recommend(reading: &ControlReading, symptoms: &[String]) -> Vec<String> {
        let score = calculate_risk_score(reading, symptoms, &[]);
        recommendations(reading, symptoms, score)
    }

    #[test]
    fn quiet_reading_gets_routine_guidance() {
        let recs = recommend(&ControlReading::default(), &[]);
        assert_eq!(
            recs,
            vec![
                "Continuar con controles prenatales de rutina".to_string(),
                "Consultar de inmediato ante la aparición de signos de alarma".to_string(),
            ]
        );
    }

    #[test]
    fn critical_score_puts_transfer_first() {
        let recs = recommend(
            &ControlReading::default(),
            &codes(&["convulsiones"]),
        );
        assert_eq!(recs[0], REC_TRANSFER);
        assert_eq!(recs[1], "Activar protocolo de emergencia obstétrica");
    }

    #[test]
    fn severe_hypertension_adds_hospitalization_and_magnesium() {
        let reading = ControlReading {
            systolic_bp: Some(165),
            diastolic_bp: Some(115),
            ..Default::default()
        };
        let recs = recommend(&reading, &[]);
        assert!(recs.contains(&"Control de presión arterial cada 4 horas".to_string()));
        assert!(recs
            .contains(&"Hospitalización para manejo de hipertensión severa".to_string()));
        assert!(recs.contains(&"Administrar sulfato de magnesio según protocolo".to_string()));
    }

    #[test]
    fn moderate_hypertension_stops_at_monitoring() {
        let reading = ControlReading {
            systolic_bp: Some(145),
            diastolic_bp: Some(92),
            ..Default::default()
        };
        let recs = recommend(&reading, &[]);
        assert!(recs.contains(&"Dieta hiposódica".to_string()));
        assert!(!recs
            .contains(&"Hospitalización para manejo de hipertensión severa".to_string()));
    }

    #[test]
    fn sepsis_pattern_adds_antibiotics() {
        let reading = ControlReading {
            temperature_c: Some(38.9),
            heart_rate: Some(125),
            ..Default::default()
        };
        let recs = recommend(&reading, &codes(&["escalofrios"]));
        assert!(recs.contains(&"Iniciar antibioticoterapia de manera inmediata".to_string()));

        // Fever without the full pattern gets antipyretics only.
        let mild = ControlReading {
            temperature_c: Some(37.8),
            ..Default::default()
        };
        let recs = recommend(&mild, &[]);
        assert!(recs.contains(&"Control de temperatura cada 4 horas".to_string()));
        assert!(!recs.contains(&"Iniciar antibioticoterapia de manera inmediata".to_string()));
    }

    #[test]
    fn hemorrhage_adds_monitoring_and_transfer_once() {
        let reading = ControlReading {
            systolic_bp: Some(85),
            diastolic_bp: Some(55),
            heart_rate: Some(115),
            ..Default::default()
        };
        let symptoms = codes(&["sangrado_vaginal_abundante", "sangrado_masivo"]);
        let recs = recommend(&reading, &symptoms);
        assert!(recs.contains(&"Monitoreo hemodinámico continuo".to_string()));
        // The transfer item also appears in the critical-score block; it
        // must not be duplicated.
        let transfers = recs.iter().filter(|r| r.as_str() == REC_TRANSFER).count();
        assert_eq!(transfers, 1);
    }

    #[test]
    fn very_preterm_labor_adds_corticosteroids() {
        let reading = ControlReading {
            gestational_weeks: Some(30),
            ..Default::default()
        };
        let recs = recommend(
            &reading,
            &codes(&["contracciones_regulares", "ruptura_membranas"]),
        );
        assert!(recs.contains(
            &"Administración de corticoides para maduración pulmonar fetal".to_string()
        ));
        assert!(recs.contains(&"Considerar tocólisis según evaluación obstétrica".to_string()));
        assert!(recs.contains(&"Notificar a la unidad de neonatología".to_string()));
    }

    #[test]
    fn preterm_labor_gets_urgent_evaluation_only() {
        let reading = ControlReading {
            gestational_weeks: Some(34),
            ..Default::default()
        };
        let recs = recommend(&reading, &codes(&["contracciones_regulares"]));
        assert!(recs.contains(
            &"Evaluación obstétrica urgente por trabajo de parto prematuro".to_string()
        ));
        assert!(!recs.contains(
            &"Administración de corticoides para maduración pulmonar fetal".to_string()
        ));
    }

    #[test]
    fn absent_fetal_movement_adds_fetal_evaluation() {
        let reading = ControlReading {
            fetal_movement_present: Some(false),
            ..Default::default()
        };
        let recs = recommend(&reading, &[]);
        assert!(recs.contains(
            &"Evaluación inmediata del bienestar fetal con monitoreo electrónico".to_string()
        ));
    }

    #[test]
    fn same_inputs_render_the_same_strings() {
        let reading = ControlReading {
            systolic_bp: Some(165),
            diastolic_bp: Some(115),
            gestational_weeks: Some(32),
            ..Default::default()
        };
        let symptoms = codes(&["dolor_cabeza_severo", "vision_borrosa"]);
        assert_eq!(recommend(&reading, &symptoms), recommend(&reading, &symptoms));
    }

    #[test]
    fn recommendations_are_distinct() {
        let reading = ControlReading {
            systolic_bp: Some(165),
            diastolic_bp: Some(115),
            temperature_c: Some(38.9),
            heart_rate: Some(125),
            gestational_weeks: Some(30),
            fetal_movement_present: Some(false),
            edema_present: Some(true),
            ..Default::default()
        };
        let symptoms = codes(&[
            "convulsiones",
            "sangrado_masivo",
            "escalofrios",
            "contracciones_regulares",
        ]);
        let recs = recommend(&reading, &symptoms);
        let mut sorted = recs.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), recs.len(), "duplicate recommendation in {recs:?}");
    }
}
