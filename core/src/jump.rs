// core/src/jump.rs
use crate::calibration::scale_for;
use crate::config::{JumpConfig, TrackedPoint};
use crate::models::{Frame, LandmarkId, Point2};
use crate::smoothing::RollingHistory;
use crate::types::JumpMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    #[default]
    Ground,
    Air,
}

/// Hoppdetektor på vertikal pikselposisjon (y vokser nedover).
///
/// baseline = persentil av historikken ("stående"), diff = baseline minus
/// laveste y blant de siste `recent_window`. diff > takeoff fra Ground gir ett
/// hopp; diff < landing setter Ground igjen.
///
/// Skalaen (cm/px) regnes på nytt for hver frame fra nese→laveste ankel, i
/// motsetning til sit-and-reach som fryser første måling.
#[derive(Debug, Clone)]
pub struct JumpDetector {
    cfg: JumpConfig,
    history: RollingHistory,
    state: JumpState,
    last_scale: Option<f64>,
    heights_cm: Vec<f64>,
}

impl JumpDetector {
    pub fn new(cfg: JumpConfig) -> Self {
        // historikken må minst dekke minimumsvinduet
        let cap = cfg.history_len.max(cfg.recent_window).max(cfg.min_history + 1);
        Self {
            history: RollingHistory::new(cap),
            cfg,
            state: JumpState::Ground,
            last_scale: None,
            heights_cm: Vec::new(),
        }
    }

    /// cm/px for denne framen fra antatt kroppshøyde.
    pub fn frame_scale(&self, frame: &Frame) -> Option<f64> {
        let lm = frame.landmarks.as_ref()?;
        let size = frame.size();
        let nose_y = lm.px(LandmarkId::Nose, size).y;
        let ankle_y = lm
            .px(LandmarkId::LeftAnkle, size)
            .y
            .max(lm.px(LandmarkId::RightAnkle, size).y);
        scale_for(self.cfg.body_height_cm, ankle_y - nose_y)
    }

    pub fn tracked_y(&self, frame: &Frame) -> Option<f64> {
        let lm = frame.landmarks.as_ref()?;
        let size = frame.size();
        let p = match self.cfg.tracked_point {
            TrackedPoint::MidHip => Point2::midpoint(
                lm.px(LandmarkId::LeftHip, size),
                lm.px(LandmarkId::RightHip, size),
            ),
            TrackedPoint::Landmark(id) => lm.px(id, size),
        };
        Some(p.y)
    }

    pub fn update(&mut self, frame: &Frame) {
        let Some(y) = self.tracked_y(frame) else {
            return;
        };
        if let Some(s) = self.frame_scale(frame) {
            self.last_scale = Some(s);
        }
        self.observe(y, self.last_scale);
    }

    /// Mat inn én posisjon (px) med gjeldende skala. Returnerer hopphøyden (cm)
    /// når et nytt hopp registreres; 0.0 hvis skala aldri har vært tilgjengelig.
    pub fn observe(&mut self, y_px: f64, scale_cm_per_px: Option<f64>) -> Option<f64> {
        if !y_px.is_finite() {
            log::warn!("jump: skipping non-finite position {y_px}");
            return None;
        }
        self.history.push(y_px);
        if self.history.len() <= self.cfg.min_history {
            return None;
        }

        let baseline = self.history.percentile(self.cfg.baseline_percentile)?;
        let peak = self.history.recent_min(self.cfg.recent_window)?;
        let diff = baseline - peak;

        if diff > self.cfg.takeoff_px && self.state == JumpState::Ground {
            self.state = JumpState::Air;
            let height = scale_cm_per_px.map(|s| diff * s).unwrap_or(0.0);
            self.heights_cm.push(height);
            log::debug!(
                "jump #{}: {:.1} px => {:.1} cm",
                self.heights_cm.len(),
                diff,
                height
            );
            return Some(height);
        } else if diff < self.cfg.landing_px {
            self.state = JumpState::Ground;
        }
        None
    }

    pub fn state(&self) -> JumpState {
        self.state
    }

    /// Har minst én frame gitt en brukbar cm/px-skala?
    pub fn is_calibrated(&self) -> bool {
        self.last_scale.is_some()
    }

    pub fn jump_count(&self) -> usize {
        self.heights_cm.len()
    }

    pub fn finalize(&self) -> JumpMetrics {
        JumpMetrics {
            jump_heights: self.heights_cm.clone(),
        }
    }
}

impl Default for JumpDetector {
    fn default() -> Self {
        Self::new(JumpConfig::default())
    }
}
