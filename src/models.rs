use serde::{Deserialize, Serialize};

use crate::catalog;

/// One snapshot of clinical measurements from a prenatal control.
///
/// Every field is optional: an absent value means the vital was not
/// measured during the control, which disables the rules that read it.
/// Absence is never interpreted as "normal".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlReading {
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    pub heart_rate: Option<i32>,
    pub temperature_c: Option<f64>,
    pub gestational_weeks: Option<i32>,
    pub fetal_movement_present: Option<bool>,
    pub edema_present: Option<bool>,
    /// Tracked for trend follow-up upstream; not scored.
    pub weight_kg: Option<f64>,
}

impl ControlReading {
    /// Systolic >= 160 or diastolic >= 110.
    pub fn severe_hypertension(&self) -> bool {
        self.systolic_bp
            .map_or(false, |s| s >= catalog::SYSTOLIC_SEVERE)
            || self
                .diastolic_bp
                .map_or(false, |d| d >= catalog::DIASTOLIC_SEVERE)
    }

    /// At or above the moderate threshold (140/90). Includes the severe tier.
    pub fn hypertension(&self) -> bool {
        self.systolic_bp
            .map_or(false, |s| s >= catalog::SYSTOLIC_HIGH)
            || self
                .diastolic_bp
                .map_or(false, |d| d >= catalog::DIASTOLIC_HIGH)
    }

    pub fn hypotension(&self) -> bool {
        self.systolic_bp.map_or(false, |s| s < catalog::SYSTOLIC_LOW)
            || self
                .diastolic_bp
                .map_or(false, |d| d < catalog::DIASTOLIC_LOW)
    }

    pub fn severe_tachycardia(&self) -> bool {
        self.heart_rate
            .map_or(false, |hr| hr >= catalog::HEART_RATE_SEVERE)
    }

    /// At or above 100 bpm. Includes the severe tier.
    pub fn tachycardia(&self) -> bool {
        self.heart_rate
            .map_or(false, |hr| hr >= catalog::HEART_RATE_HIGH)
    }

    pub fn high_fever(&self) -> bool {
        self.temperature_c
            .map_or(false, |t| t >= catalog::TEMPERATURE_SEVERE)
    }

    /// At or above 37.5 C. Includes the high-fever tier.
    pub fn fever(&self) -> bool {
        self.temperature_c
            .map_or(false, |t| t >= catalog::TEMPERATURE_HIGH)
    }

    /// True only when movement was checked and reported absent.
    pub fn fetal_movement_absent(&self) -> bool {
        self.fetal_movement_present == Some(false)
    }

    pub fn edema(&self) -> bool {
        self.edema_present == Some(true)
    }

    /// Below 32 completed weeks. False when weeks were not recorded.
    pub fn very_preterm(&self) -> bool {
        self.gestational_weeks
            .map_or(false, |w| w < catalog::VERY_PRETERM_WEEKS)
    }

    /// 32 to 36 completed weeks. False when weeks were not recorded.
    pub fn preterm(&self) -> bool {
        self.gestational_weeks
            .map_or(false, |w| (catalog::VERY_PRETERM_WEEKS..catalog::TERM_WEEKS).contains(&w))
    }

    /// 37 completed weeks or more. False when weeks were not recorded.
    pub fn term(&self) -> bool {
        self.gestational_weeks
            .map_or(false, |w| w >= catalog::TERM_WEEKS)
    }
}

/// Canonical vocabulary of reported symptoms.
///
/// Codes arrive as free strings from the intake flow; each code has exactly
/// one canonical string form. Strings that do not match any code are ignored
/// so that newer caller vocabularies never break evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomCode {
    Convulsions,
    LossOfConsciousness,
    ConfirmedFetalMovementAbsence,
    MassiveBleeding,
    HeavyVaginalBleeding,
    BleedingWithClots,
    Chills,
    SevereMalaise,
    SevereHeadache,
    BlurredVision,
    EpigastricPain,
    FacialEdema,
    RegularContractions,
    MembraneRupture,
    PelvicPressure,
}

impl SymptomCode {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "convulsiones" => Some(SymptomCode::Convulsions),
            "perdida_conciencia" => Some(SymptomCode::LossOfConsciousness),
            "ausencia_movimiento_fetal_confirmada" => {
                Some(SymptomCode::ConfirmedFetalMovementAbsence)
            }
            "sangrado_masivo" => Some(SymptomCode::MassiveBleeding),
            "sangrado_vaginal_abundante" => Some(SymptomCode::HeavyVaginalBleeding),
            "sangrado_vaginal_con_coagulos" => Some(SymptomCode::BleedingWithClots),
            "escalofrios" => Some(SymptomCode::Chills),
            "malestar_general_severo" => Some(SymptomCode::SevereMalaise),
            "dolor_cabeza_severo" => Some(SymptomCode::SevereHeadache),
            "vision_borrosa" => Some(SymptomCode::BlurredVision),
            "dolor_epigastrico" => Some(SymptomCode::EpigastricPain),
            "edema_facial" => Some(SymptomCode::FacialEdema),
            "contracciones_regulares" => Some(SymptomCode::RegularContractions),
            "ruptura_membranas" => Some(SymptomCode::MembraneRupture),
            "presion_pelvica" => Some(SymptomCode::PelvicPressure),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SymptomCode::Convulsions => "convulsiones",
            SymptomCode::LossOfConsciousness => "perdida_conciencia",
            SymptomCode::ConfirmedFetalMovementAbsence => {
                "ausencia_movimiento_fetal_confirmada"
            }
            SymptomCode::MassiveBleeding => "sangrado_masivo",
            SymptomCode::HeavyVaginalBleeding => "sangrado_vaginal_abundante",
            SymptomCode::BleedingWithClots => "sangrado_vaginal_con_coagulos",
            SymptomCode::Chills => "escalofrios",
            SymptomCode::SevereMalaise => "malestar_general_severo",
            SymptomCode::SevereHeadache => "dolor_cabeza_severo",
            SymptomCode::BlurredVision => "vision_borrosa",
            SymptomCode::EpigastricPain => "dolor_epigastrico",
            SymptomCode::FacialEdema => "edema_facial",
            SymptomCode::RegularContractions => "contracciones_regulares",
            SymptomCode::MembraneRupture => "ruptura_membranas",
            SymptomCode::PelvicPressure => "presion_pelvica",
        }
    }

    /// Short clinical label used when an alert message names the symptom.
    pub fn label(self) -> &'static str {
        match self {
            SymptomCode::Convulsions => "convulsiones",
            SymptomCode::LossOfConsciousness => "pérdida de conciencia",
            SymptomCode::ConfirmedFetalMovementAbsence => {
                "ausencia confirmada de movimientos fetales"
            }
            SymptomCode::MassiveBleeding => "sangrado masivo",
            SymptomCode::HeavyVaginalBleeding => "sangrado vaginal abundante",
            SymptomCode::BleedingWithClots => "sangrado vaginal con coágulos",
            SymptomCode::Chills => "escalofríos",
            SymptomCode::SevereMalaise => "malestar general severo",
            SymptomCode::SevereHeadache => "dolor de cabeza severo",
            SymptomCode::BlurredVision => "visión borrosa",
            SymptomCode::EpigastricPain => "dolor epigástrico",
            SymptomCode::FacialEdema => "edema facial",
            SymptomCode::RegularContractions => "contracciones regulares",
            SymptomCode::MembraneRupture => "ruptura de membranas",
            SymptomCode::PelvicPressure => "presión pélvica",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertType {
    #[serde(rename = "emergencia_obstetrica")]
    EmergencyObstetric,
    #[serde(rename = "alto_riesgo")]
    HighRisk,
    #[serde(rename = "trabajo_de_parto")]
    Labor,
}

impl AlertType {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertType::EmergencyObstetric => "emergencia_obstetrica",
            AlertType::HighRisk => "alto_riesgo",
            AlertType::Labor => "trabajo_de_parto",
        }
    }
}

/// Alert priority tiers. Variant order is severity order, so `Ord`
/// comparisons rank priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "baja")]
    Low,
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "alta")]
    High,
    #[serde(rename = "critica")]
    Critical,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "baja",
            Priority::Medium => "media",
            Priority::High => "alta",
            Priority::Critical => "critica",
        }
    }
}

/// Outcome of the ordered rule chain. Produced only when some rule fired;
/// a quiet reading classifies to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub alert_type: AlertType,
    pub priority: Priority,
    pub message: String,
}

/// Full result of evaluating one control reading.
///
/// `alert_type`, `priority` and `message` are either all present or all
/// absent. `score` is always present and independent of whether a
/// classification rule fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertOutcome {
    pub alert_type: Option<AlertType>,
    pub priority: Option<Priority>,
    pub message: Option<String>,
    pub score: u8,
    /// Canonical codes of the input symptoms that matched the catalog,
    /// in input order, deduplicated. Kept for audit.
    pub detected_symptoms: Vec<String>,
    pub recommendations: Vec<String>,
}
