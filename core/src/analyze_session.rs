use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_path_to_error as spte;

use crate::config::AnalyzerConfig;
use crate::error::{FitnessError, Result};
use crate::grading::{grade, Gender};
use crate::metrics::Metrics;
use crate::models::Frame;
use crate::session::{run_session, ExerciseKind, SessionOutcome, VecPoseSource};
use crate::storage::parse_frames_json;
use crate::types::{ExerciseMetrics, SessionReport};

/// Hvem som testes og hvilken test.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub test_type: String,
    pub age: u32,
    pub gender: String,
}

pub struct AnalyzeInputs<'a> {
    pub exercise: ExerciseKind,
    pub frames: Vec<Frame>,
    pub age: u32,
    pub gender: Gender,
    pub cfg: &'a AnalyzerConfig,
    pub metrics: &'a Metrics,
    pub analyzed_at: DateTime<Utc>,
}

/// Sett sammen rapport med score, nivå og ev. sekundærscore.
pub fn build_report(
    outcome: SessionOutcome,
    age: u32,
    gender: Gender,
    analyzed_at: DateTime<Utc>,
) -> SessionReport {
    let exercise = outcome.metrics.kind();
    let score = outcome.metrics.primary_score();
    let level = grade(exercise, outcome.metrics.graded_value(), age, gender);

    // Situps: dårlige reps vises ved siden av gyldige
    let (secondary_score, secondary_score_label) = match &outcome.metrics {
        ExerciseMetrics::Situps(m) => (Some(m.bad_reps()), Some("Bad Reps".to_string())),
        _ => (None, None),
    };

    SessionReport {
        exercise,
        score_type: exercise.label().to_string(),
        score,
        level,
        secondary_score,
        secondary_score_label,
        metrics: outcome.metrics,
        frames_processed: outcome.frames_processed,
        frames_without_pose: outcome.frames_without_pose,
        analyzed_at,
    }
}

pub fn analyze_session(inputs: AnalyzeInputs) -> Result<SessionReport> {
    let mut source = VecPoseSource::new(inputs.frames);
    let outcome = run_session(inputs.exercise, &mut source, inputs.cfg, inputs.metrics)?;
    let report = build_report(outcome, inputs.age, inputs.gender, inputs.analyzed_at);
    log::info!(
        "{}: score={} level={}",
        report.exercise,
        report.score,
        report.level
    );
    Ok(report)
}

/// JSON inn → JSON ut. `cfg_json` kan være delvis; manglende felt får standardverdier.
pub fn analyze_session_json(
    frames_json: &str,
    request_json: &str,
    cfg_json: Option<&str>,
) -> Result<String> {
    let mut de = serde_json::Deserializer::from_str(request_json);
    let req: AnalyzeRequest = spte::deserialize(&mut de).map_err(FitnessError::from_path_error)?;
    let exercise: ExerciseKind = req.test_type.parse()?;
    let gender: Gender = req.gender.parse()?;

    let cfg = match cfg_json {
        Some(txt) => {
            let mut de = serde_json::Deserializer::from_str(txt);
            spte::deserialize(&mut de).map_err(FitnessError::from_path_error)?
        }
        None => AnalyzerConfig::default(),
    };

    let frames = parse_frames_json(frames_json)?;
    let report = analyze_session(AnalyzeInputs {
        exercise,
        frames,
        age: req.age,
        gender,
        cfg: &cfg,
        metrics: crate::metrics::global(),
        analyzed_at: Utc::now(),
    })?;

    serde_json::to_string(&report).map_err(|e| FitnessError::Parse {
        path: ".".into(),
        message: e.to_string(),
    })
}
