// core/src/reach.rs
use crate::calibration::Calibrator;
use crate::config::ReachConfig;
use crate::models::{Frame, LandmarkId, Point2};
use crate::types::ReachMetrics;

/// Sit-and-reach: løpende maks horisontal rekkevidde.
///
/// Origo = snitt hofte-x i første gyldige frame. Rekkevidde = snitt
/// håndledd-x minus origo. Skala fra hofte→ankel (fryses ved første måling).
#[derive(Debug, Clone)]
pub struct ReachTracker {
    calibrator: Calibrator,
    origin_x_px: Option<f64>,
    max_reach_px: f64,
}

/// Pikselmål fra én frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReachSample {
    pub hip_x: f64,
    pub wrist_x: f64,
    pub hip_to_ankle_px: f64,
}

impl ReachSample {
    pub fn from_frame(frame: &Frame) -> Option<Self> {
        let lm = frame.landmarks.as_ref()?;
        let size = frame.size();
        let mid = |a, b| Point2::midpoint(lm.px(a, size), lm.px(b, size));

        let hip = mid(LandmarkId::LeftHip, LandmarkId::RightHip);
        let ankle = mid(LandmarkId::LeftAnkle, LandmarkId::RightAnkle);
        let wrist = mid(LandmarkId::LeftWrist, LandmarkId::RightWrist);

        Some(Self {
            hip_x: hip.x,
            wrist_x: wrist.x,
            hip_to_ankle_px: (hip.y - ankle.y).abs(),
        })
    }
}

impl ReachTracker {
    pub fn new(cfg: ReachConfig) -> Self {
        Self {
            calibrator: Calibrator::new(cfg.hip_to_ankle_cm),
            origin_x_px: None,
            max_reach_px: 0.0,
        }
    }

    pub fn update(&mut self, frame: &Frame) -> bool {
        match ReachSample::from_frame(frame) {
            Some(s) => self.observe(s),
            None => false,
        }
    }

    /// Returnerer `true` hvis denne målingen frøs kalibreringen.
    pub fn observe(&mut self, s: ReachSample) -> bool {
        let origin = *self.origin_x_px.get_or_insert(s.hip_x);
        let reach = s.wrist_x - origin;

        let calibrated_now = self.calibrator.offer(s.hip_to_ankle_px);

        if reach > self.max_reach_px {
            self.max_reach_px = reach;
        }
        calibrated_now
    }

    pub fn scale(&self) -> Option<f64> {
        self.calibrator.scale()
    }

    pub fn max_reach_px(&self) -> f64 {
        self.max_reach_px
    }

    pub fn finalize(&self) -> ReachMetrics {
        ReachMetrics {
            max_reach_cm: self.calibrator.to_cm(self.max_reach_px),
            calibrated: self.calibrator.is_calibrated(),
        }
    }
}

impl Default for ReachTracker {
    fn default() -> Self {
        Self::new(ReachConfig::default())
    }
}
