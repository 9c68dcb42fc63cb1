// core/src/pushup.rs
use crate::angles::joint_angle;
use crate::config::PushupConfig;
use crate::models::{Frame, LandmarkId};
use crate::types::PushupMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PushupPhase {
    #[default]
    NoDirection,
    Down,
    Up,
}

/// Teller push-ups fra albuevinkel (skulder-albue-håndledd).
///
/// `< down_angle` => Down. `> up_angle` fra Down => rep og Up. Vinkler i
/// mellom endrer ingenting.
#[derive(Debug, Clone)]
pub struct PushupCounter {
    cfg: PushupConfig,
    phase: PushupPhase,
    count: u32,
}

impl PushupCounter {
    pub fn new(cfg: PushupConfig) -> Self {
        Self {
            cfg,
            phase: PushupPhase::NoDirection,
            count: 0,
        }
    }

    /// Albuevinkel for en frame, eller None uten person.
    /// Regnes på normaliserte koordinater.
    pub fn elbow_angle(&self, frame: &Frame) -> Option<f64> {
        let lm = frame.landmarks.as_ref()?;
        let side = self.cfg.arm;
        Some(joint_angle(
            lm.get(LandmarkId::shoulder(side)),
            lm.get(LandmarkId::elbow(side)),
            lm.get(LandmarkId::wrist(side)),
        ))
    }

    pub fn update(&mut self, frame: &Frame) {
        if let Some(angle) = self.elbow_angle(frame) {
            self.observe_angle(angle);
        }
    }

    /// Returnerer `true` når vinkelen fullførte en rep.
    pub fn observe_angle(&mut self, angle: f64) -> bool {
        if angle < self.cfg.down_angle_deg {
            if self.phase != PushupPhase::Down {
                log::debug!("pushup: down at {angle:.1}°");
            }
            self.phase = PushupPhase::Down;
        } else if angle > self.cfg.up_angle_deg && self.phase == PushupPhase::Down {
            self.count += 1;
            self.phase = PushupPhase::Up;
            log::debug!("pushup: rep {} at {angle:.1}°", self.count);
            return true;
        }
        false
    }

    pub fn phase(&self) -> PushupPhase {
        self.phase
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn finalize(&self) -> PushupMetrics {
        PushupMetrics { count: self.count }
    }
}

impl Default for PushupCounter {
    fn default() -> Self {
        Self::new(PushupConfig::default())
    }
}
