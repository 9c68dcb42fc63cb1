// core/src/session.rs
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::error::{FitnessError, Result};
use crate::jump::JumpDetector;
use crate::metrics::Metrics;
use crate::models::Frame;
use crate::pushup::PushupCounter;
use crate::reach::ReachTracker;
use crate::situp::SitupCounter;
use crate::types::ExerciseMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Pushups,
    Situps,
    SitAndReach,
    VerticalJump,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 4] = [
        ExerciseKind::Pushups,
        ExerciseKind::Situps,
        ExerciseKind::SitAndReach,
        ExerciseKind::VerticalJump,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Pushups => "pushups",
            ExerciseKind::Situps => "situps",
            ExerciseKind::SitAndReach => "sit_and_reach",
            ExerciseKind::VerticalJump => "vertical_jump",
        }
    }

    /// Visningsnavn i rapporten.
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseKind::Pushups => "Push-ups",
            ExerciseKind::Situps => "Sit-ups",
            ExerciseKind::SitAndReach => "Sit and Reach",
            ExerciseKind::VerticalJump => "Vertical Jump",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = FitnessError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ExerciseKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| FitnessError::UnknownExercise(s.to_string()))
    }
}

/// Én tilstandsmaskin per øvelse bak samme grensesnitt:
/// `update(frame)` per frame og `finalize()` for resultatet så langt.
#[derive(Debug, Clone)]
pub enum ExerciseTracker {
    Pushup(PushupCounter),
    Situp(SitupCounter),
    Jump(JumpDetector),
    Reach(ReachTracker),
}

impl ExerciseTracker {
    pub fn new(kind: ExerciseKind, cfg: &AnalyzerConfig) -> Self {
        match kind {
            ExerciseKind::Pushups => ExerciseTracker::Pushup(PushupCounter::new(cfg.pushup.clone())),
            ExerciseKind::Situps => ExerciseTracker::Situp(SitupCounter::new(cfg.situp.clone())),
            ExerciseKind::VerticalJump => ExerciseTracker::Jump(JumpDetector::new(cfg.jump.clone())),
            ExerciseKind::SitAndReach => ExerciseTracker::Reach(ReachTracker::new(cfg.reach.clone())),
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        match self {
            ExerciseTracker::Pushup(_) => ExerciseKind::Pushups,
            ExerciseTracker::Situp(_) => ExerciseKind::Situps,
            ExerciseTracker::Jump(_) => ExerciseKind::VerticalJump,
            ExerciseTracker::Reach(_) => ExerciseKind::SitAndReach,
        }
    }

    /// Frames uten person gir ingen observasjon.
    pub fn update(&mut self, frame: &Frame) {
        if !frame.has_pose() {
            return;
        }
        match self {
            ExerciseTracker::Pushup(t) => t.update(frame),
            ExerciseTracker::Situp(t) => t.update(frame),
            ExerciseTracker::Jump(t) => t.update(frame),
            ExerciseTracker::Reach(t) => {
                t.update(frame);
            }
        }
    }

    /// Reach og hopp har en cm/px-skala; tellerne har ingen.
    pub fn is_calibrated(&self) -> bool {
        match self {
            ExerciseTracker::Jump(t) => t.is_calibrated(),
            ExerciseTracker::Reach(t) => t.scale().is_some(),
            ExerciseTracker::Pushup(_) | ExerciseTracker::Situp(_) => false,
        }
    }

    pub fn finalize(&self) -> ExerciseMetrics {
        match self {
            ExerciseTracker::Pushup(t) => ExerciseMetrics::Pushups(t.finalize()),
            ExerciseTracker::Situp(t) => ExerciseMetrics::Situps(t.finalize()),
            ExerciseTracker::Jump(t) => ExerciseMetrics::VerticalJump(t.finalize()),
            ExerciseTracker::Reach(t) => ExerciseMetrics::SitAndReach(t.finalize()),
        }
    }
}

/// Kilde for frames (pose-estimering ligger utenfor kjernen).
pub trait PoseSource {
    /// Feil her er fatal for økten.
    fn open(&mut self) -> Result<()> {
        Ok(())
    }

    /// `Ok(None)` = strømmen er ferdig.
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// Frames fra minnet (tester, innspilte strømmer).
#[derive(Debug, Clone, Default)]
pub struct VecPoseSource {
    frames: VecDeque<Frame>,
}

impl VecPoseSource {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into(),
        }
    }
}

impl PoseSource for VecPoseSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        Ok(self.frames.pop_front())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOutcome {
    pub metrics: ExerciseMetrics,
    pub frames_processed: u64,
    pub frames_without_pose: u64,
}

/// Driver én øvelse over en frame-strøm. Eier all tilstand for økten;
/// `finish` kan kalles når som helst og gir det som er samlet opp.
pub struct SessionRunner<'m> {
    tracker: ExerciseTracker,
    metrics: &'m Metrics,
    last_index: Option<u64>,
    frames_processed: u64,
    frames_without_pose: u64,
}

impl<'m> SessionRunner<'m> {
    pub fn new(kind: ExerciseKind, cfg: &AnalyzerConfig, metrics: &'m Metrics) -> Self {
        Self {
            tracker: ExerciseTracker::new(kind, cfg),
            metrics,
            last_index: None,
            frames_processed: 0,
            frames_without_pose: 0,
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        self.tracker.kind()
    }

    pub fn feed(&mut self, frame: &Frame) -> Result<()> {
        if let Some(prev) = self.last_index {
            if frame.index <= prev {
                return Err(FitnessError::OutOfOrderFrame {
                    index: frame.index,
                    previous: prev,
                });
            }
        }
        self.last_index = Some(frame.index);
        self.frames_processed += 1;
        self.metrics.frames_processed_total.inc();

        if !frame.has_pose() {
            self.frames_without_pose += 1;
            self.metrics.frames_without_pose_total.inc();
            return Ok(());
        }
        self.tracker.update(frame);
        Ok(())
    }

    pub fn snapshot(&self) -> ExerciseMetrics {
        self.tracker.finalize()
    }

    pub fn finish(self) -> SessionOutcome {
        let metrics = self.tracker.finalize();
        match &metrics {
            ExerciseMetrics::Pushups(m) => self.metrics.add_reps(self.kind().as_str(), m.count as u64),
            ExerciseMetrics::Situps(m) => self.metrics.add_reps(self.kind().as_str(), m.total_reps as u64),
            ExerciseMetrics::VerticalJump(m) => self.metrics.jumps_total.inc_by(m.count() as u64),
            ExerciseMetrics::SitAndReach(_) => {}
        }
        if self.tracker.is_calibrated() {
            self.metrics.calibrations_total.inc();
        }
        log::info!(
            "{} session done: {} frames ({} without pose)",
            self.kind(),
            self.frames_processed,
            self.frames_without_pose
        );
        SessionOutcome {
            metrics,
            frames_processed: self.frames_processed,
            frames_without_pose: self.frames_without_pose,
        }
    }
}

/// Kjør én øvelse over hele kilden.
pub fn run_session(
    kind: ExerciseKind,
    source: &mut dyn PoseSource,
    cfg: &AnalyzerConfig,
    metrics: &Metrics,
) -> Result<SessionOutcome> {
    source.open()?;
    let mut runner = SessionRunner::new(kind, cfg, metrics);
    while let Some(frame) = source.next_frame()? {
        runner.feed(&frame)?;
    }
    Ok(runner.finish())
}

/// Kjør alle fire øvelser over samme frames, hver i sin egen tråd.
/// En feil i én øvelse påvirker ikke de andre.
pub fn run_all(
    frames: &[Frame],
    cfg: &AnalyzerConfig,
    metrics: &Metrics,
) -> Vec<(ExerciseKind, Result<SessionOutcome>)> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = ExerciseKind::ALL
            .into_iter()
            .map(|kind| {
                let h = scope.spawn(move || -> Result<SessionOutcome> {
                    let mut runner = SessionRunner::new(kind, cfg, metrics);
                    for f in frames {
                        runner.feed(f)?;
                    }
                    Ok(runner.finish())
                });
                (kind, h)
            })
            .collect();

        handles
            .into_iter()
            .map(|(kind, h)| {
                let res = h.join().unwrap_or_else(|_| {
                    Err(FitnessError::FrameSource(format!("{kind} worker panicked")))
                });
                (kind, res)
            })
            .collect()
    })
}
