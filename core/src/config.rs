// core/src/config.rs
use serde::{Deserialize, Serialize};

use crate::models::{BodySide, FrameSize, LandmarkId};

/// Antatt gjennomsnittlig kroppshøyde (cm) for hopp-kalibrering.
pub const DEFAULT_BODY_HEIGHT_CM: f64 = 170.0;
/// Antatt hofte→ankel-lengde (cm) for sit-and-reach-kalibrering.
pub const DEFAULT_HIP_TO_ANKLE_CM: f64 = 60.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub pushup: PushupConfig,
    pub situp: SitupConfig,
    pub jump: JumpConfig,
    pub reach: ReachConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushupConfig {
    /// Albuevinkel under denne (strengt) => "down".
    pub down_angle_deg: f64,
    /// Albuevinkel over denne (strengt) fra "down" => rep.
    pub up_angle_deg: f64,
    pub arm: BodySide,
}

impl Default for PushupConfig {
    fn default() -> Self {
        Self {
            down_angle_deg: 90.0,
            up_angle_deg: 160.0,
            arm: BodySide::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitupConfig {
    /// Glattet hoftevinkel ≤ denne fra "down" => "up".
    pub up_angle_deg: f64,
    /// Glattet hoftevinkel ≥ denne fra "up" => rep fullført.
    pub down_angle_deg: f64,
    /// Minste vinkel i repen må være ≤ denne for at repen er gyldig.
    pub valid_max_angle_deg: f64,
    pub smoothing_window: usize,
    /// Pikselrom vinklene regnes i. None => rammens egen størrelse.
    pub analysis_size: Option<FrameSize>,
}

impl Default for SitupConfig {
    fn default() -> Self {
        Self {
            up_angle_deg: 80.0,
            down_angle_deg: 160.0,
            valid_max_angle_deg: 90.0,
            smoothing_window: 5,
            analysis_size: Some(FrameSize::new(640, 480)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackedPoint {
    #[default]
    MidHip,
    #[serde(untagged)]
    Landmark(LandmarkId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    pub tracked_point: TrackedPoint,
    pub body_height_cm: f64,
    /// Persentil av historikken som regnes som "stående" nivå.
    pub baseline_percentile: f64,
    /// Antall siste posisjoner som brukes for minimum (høyeste punkt).
    pub recent_window: usize,
    /// Hopp registreres når diff > denne (px).
    pub takeoff_px: f64,
    /// Tilbake på bakken når diff < denne (px).
    pub landing_px: f64,
    /// Deteksjon starter først når historikken har flere enn dette.
    pub min_history: usize,
    /// Maks antall posisjoner som holdes i minnet.
    pub history_len: usize,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            tracked_point: TrackedPoint::MidHip,
            body_height_cm: DEFAULT_BODY_HEIGHT_CM,
            baseline_percentile: 90.0,
            recent_window: 10,
            takeoff_px: 20.0,
            landing_px: 10.0,
            min_history: 5,
            history_len: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReachConfig {
    pub hip_to_ankle_cm: f64,
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            hip_to_ankle_cm: DEFAULT_HIP_TO_ANKLE_CM,
        }
    }
}
