// core/src/situp.rs
use crate::angles::joint_angle;
use crate::config::SitupConfig;
use crate::models::{Frame, LandmarkId};
use crate::smoothing::MovingAverage;
use crate::types::SitupMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SitupPhase {
    #[default]
    Down,
    Up,
}

/// Utfallet av én observasjon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitupEvent {
    None,
    ReachedTop,
    Rep { valid: bool },
}

/// Sit-up-teller på glattet hoftevinkel (snitt av venstre/høyre
/// skulder-hofte-kne).
///
/// Minste glattede vinkel i "up"-fasen avgjør om repen er gyldig; grunne
/// reps telles i total men ikke i gyldige.
#[derive(Debug, Clone)]
pub struct SitupCounter {
    cfg: SitupConfig,
    phase: SitupPhase,
    smoother: MovingAverage,
    min_angle_in_rep: f64,
    reps: u32,
    valid_reps: u32,
}

impl SitupCounter {
    pub fn new(cfg: SitupConfig) -> Self {
        let smoother = MovingAverage::new(cfg.smoothing_window);
        Self {
            cfg,
            phase: SitupPhase::Down,
            smoother,
            min_angle_in_rep: 180.0,
            reps: 0,
            valid_reps: 0,
        }
    }

    pub fn hip_angle(&self, frame: &Frame) -> Option<f64> {
        let lm = frame.landmarks.as_ref()?;
        let size = self.cfg.analysis_size.unwrap_or_else(|| frame.size());
        let px = |id| lm.px(id, size);

        let left = joint_angle(
            px(LandmarkId::LeftShoulder),
            px(LandmarkId::LeftHip),
            px(LandmarkId::LeftKnee),
        );
        let right = joint_angle(
            px(LandmarkId::RightShoulder),
            px(LandmarkId::RightHip),
            px(LandmarkId::RightKnee),
        );
        Some((left + right) / 2.0)
    }

    pub fn update(&mut self, frame: &Frame) {
        if let Some(angle) = self.hip_angle(frame) {
            self.observe_angle(angle);
        }
    }

    pub fn observe_angle(&mut self, hip_angle: f64) -> SitupEvent {
        let smoothed = self.smoother.push(hip_angle);
        self.min_angle_in_rep = self.min_angle_in_rep.min(smoothed);

        match self.phase {
            SitupPhase::Down if smoothed <= self.cfg.up_angle_deg => {
                self.phase = SitupPhase::Up;
                self.min_angle_in_rep = smoothed;
                log::debug!("situp: top at {smoothed:.1}°");
                SitupEvent::ReachedTop
            }
            SitupPhase::Up if smoothed >= self.cfg.down_angle_deg => {
                self.reps += 1;
                let valid = self.min_angle_in_rep <= self.cfg.valid_max_angle_deg;
                if valid {
                    self.valid_reps += 1;
                }
                log::debug!(
                    "situp: rep {} (min {:.1}°, valid={})",
                    self.reps,
                    self.min_angle_in_rep,
                    valid
                );
                self.phase = SitupPhase::Down;
                self.min_angle_in_rep = 180.0;
                SitupEvent::Rep { valid }
            }
            _ => SitupEvent::None,
        }
    }

    pub fn phase(&self) -> SitupPhase {
        self.phase
    }

    pub fn finalize(&self) -> SitupMetrics {
        SitupMetrics {
            valid_reps: self.valid_reps,
            total_reps: self.reps,
        }
    }
}

impl Default for SitupCounter {
    fn default() -> Self {
        Self::new(SitupConfig::default())
    }
}
