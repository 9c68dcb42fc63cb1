//! Fitness test core: pose landmarks per frame → push-ups, sit-ups,
//! vertical jump and sit-and-reach metrics in one forward pass.

pub mod analyze_session;
pub mod angles;
pub mod calibration;
pub mod cli;
pub mod config;
pub mod error;
pub mod grading;
pub mod jump;
pub mod metrics;
pub mod models;
pub mod pushup;
pub mod reach;
pub mod session;
pub mod situp;
pub mod smoothing;
pub mod storage;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use analyze_session::{analyze_session, analyze_session_json, build_report, AnalyzeInputs, AnalyzeRequest};
pub use angles::joint_angle;
pub use calibration::Calibrator;
pub use config::{AnalyzerConfig, JumpConfig, PushupConfig, ReachConfig, SitupConfig, TrackedPoint};
pub use error::FitnessError;
pub use grading::{grade, Gender, Level};
pub use jump::JumpDetector;
pub use models::{BodySide, Frame, FrameSize, LandmarkId, LandmarkSet, Point2};
pub use pushup::PushupCounter;
pub use reach::ReachTracker;
pub use session::{run_all, run_session, ExerciseKind, ExerciseTracker, PoseSource, SessionOutcome, SessionRunner, VecPoseSource};
pub use situp::SitupCounter;
pub use storage::{load_config, save_config, FilePoseSource};
pub use types::{ExerciseMetrics, JumpMetrics, PushupMetrics, ReachMetrics, Score, SessionReport, SitupMetrics};
