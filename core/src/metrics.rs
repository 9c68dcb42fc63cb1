use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

/// Prometheus-tellere for analysekjernen. Holder ingen økt-tilstand.
#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,
    pub frames_processed_total: IntCounter,
    pub frames_without_pose_total: IntCounter,
    pub reps_total: IntCounterVec,
    pub jumps_total: IntCounter,
    pub calibrations_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let frames_processed_total =
            IntCounter::new("frames_processed_total", "Frames fed to exercise trackers")
                .expect("valid counter opts");
        let frames_without_pose_total = IntCounter::new(
            "frames_without_pose_total",
            "Frames where the pose detector found no person",
        )
        .expect("valid counter opts");
        let reps_total = IntCounterVec::new(
            Opts::new("reps_total", "Completed repetitions per exercise"),
            &["exercise"],
        )
        .expect("valid counter opts");
        let jumps_total = IntCounter::new("jumps_total", "Registered vertical jumps")
            .expect("valid counter opts");
        let calibrations_total = IntCounter::new(
            "calibrations_total",
            "Jump and reach sessions where a cm/px scale was found",
        )
        .expect("valid counter opts");

        for c in [
            &frames_processed_total,
            &frames_without_pose_total,
            &jumps_total,
            &calibrations_total,
        ] {
            if let Err(e) = registry.register(Box::new(c.clone())) {
                log::warn!("metrics: could not register counter: {e}");
            }
        }
        if let Err(e) = registry.register(Box::new(reps_total.clone())) {
            log::warn!("metrics: could not register reps_total: {e}");
        }

        Self {
            registry,
            frames_processed_total,
            frames_without_pose_total,
            reps_total,
            jumps_total,
            calibrations_total,
        }
    }

    pub fn add_reps(&self, exercise: &str, n: u64) {
        if n > 0 {
            self.reps_total.with_label_values(&[exercise]).inc_by(n);
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Prosessglobal instans for kall uten egen `Metrics`.
pub static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

pub fn global() -> &'static Metrics {
    &METRICS
}
