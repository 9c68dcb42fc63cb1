use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grading::Level;
use crate::session::ExerciseKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushupMetrics {
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitupMetrics {
    pub valid_reps: u32,
    pub total_reps: u32,
}

impl SitupMetrics {
    /// Reps som ble fullført uten full bevegelsesbane.
    pub fn bad_reps(&self) -> u32 {
        self.total_reps.saturating_sub(self.valid_reps)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachMetrics {
    pub max_reach_cm: f64,
    /// false => ingen brukbar hofte→ankel-referanse i hele økten (max_reach_cm = 0).
    pub calibrated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpMetrics {
    pub jump_heights: Vec<f64>,
}

impl JumpMetrics {
    pub fn count(&self) -> usize {
        self.jump_heights.len()
    }

    /// Snitt av registrerte hopp, 0.0 uten hopp.
    pub fn mean_height_cm(&self) -> f64 {
        if self.jump_heights.is_empty() {
            0.0
        } else {
            self.jump_heights.iter().sum::<f64>() / self.jump_heights.len() as f64
        }
    }
}

/// Sluttresultat per øvelse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "exercise", rename_all = "snake_case")]
pub enum ExerciseMetrics {
    Pushups(PushupMetrics),
    Situps(SitupMetrics),
    SitAndReach(ReachMetrics),
    VerticalJump(JumpMetrics),
}

impl ExerciseMetrics {
    pub fn kind(&self) -> ExerciseKind {
        match self {
            ExerciseMetrics::Pushups(_) => ExerciseKind::Pushups,
            ExerciseMetrics::Situps(_) => ExerciseKind::Situps,
            ExerciseMetrics::SitAndReach(_) => ExerciseKind::SitAndReach,
            ExerciseMetrics::VerticalJump(_) => ExerciseKind::VerticalJump,
        }
    }

    /// Primærscore slik den graderes: antall eller cm.
    pub fn primary_score(&self) -> Score {
        match self {
            ExerciseMetrics::Pushups(m) => Score::Reps(m.count),
            ExerciseMetrics::Situps(m) => Score::Reps(m.valid_reps),
            ExerciseMetrics::SitAndReach(m) => Score::Cm(round1(m.max_reach_cm)),
            ExerciseMetrics::VerticalJump(m) => Score::Cm(round1(m.mean_height_cm())),
        }
    }

    /// Verdien som graderes. Rekkevidde graderes urundet; hopp på avrundet snitt.
    pub fn graded_value(&self) -> f64 {
        match self {
            ExerciseMetrics::SitAndReach(m) => m.max_reach_cm,
            other => other.primary_score().value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Reps(u32),
    Cm(f64),
}

impl Score {
    pub fn value(&self) -> f64 {
        match *self {
            Score::Reps(n) => n as f64,
            Score::Cm(cm) => cm,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Reps(n) => write!(f, "{n}"),
            Score::Cm(cm) => write!(f, "{cm:.1} cm"),
        }
    }
}

#[inline]
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub exercise: ExerciseKind,
    pub score_type: String,
    pub score: Score,
    pub level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_score_label: Option<String>,
    pub metrics: ExerciseMetrics,
    pub frames_processed: u64,
    pub frames_without_pose: u64,
    pub analyzed_at: DateTime<Utc>,
}
