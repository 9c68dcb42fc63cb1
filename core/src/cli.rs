use std::fmt::Write as _;

use crate::types::{ExerciseMetrics, SessionReport};

/// Tekstrapport for én økt.
pub fn format_report(report: &SessionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {} Report ---", report.score_type);
    let _ = writeln!(out, "Score: {}", report.score);
    let _ = writeln!(out, "Level: {}", report.level);
    if let (Some(v), Some(label)) = (report.secondary_score, &report.secondary_score_label) {
        let _ = writeln!(out, "{label}: {v}");
    }

    match &report.metrics {
        ExerciseMetrics::Pushups(m) => {
            let _ = writeln!(out, "Push-ups: {}", m.count);
        }
        ExerciseMetrics::Situps(m) => {
            let _ = writeln!(out, "Total reps: {} (good {}, bad {})", m.total_reps, m.valid_reps, m.bad_reps());
        }
        ExerciseMetrics::SitAndReach(m) => {
            if m.calibrated {
                let _ = writeln!(out, "Max reach: {:.1} cm", m.max_reach_cm);
            } else {
                let _ = writeln!(out, "Max reach: uncalibrated");
            }
        }
        ExerciseMetrics::VerticalJump(m) => {
            let heights: Vec<String> = m.jump_heights.iter().map(|h| format!("{h:.1}")).collect();
            let _ = writeln!(out, "Jumps: {}", m.count());
            let _ = writeln!(out, "Jump heights (cm): [{}]", heights.join(", "));
        }
    }

    let _ = write!(
        out,
        "Frames: {} ({} without pose)",
        report.frames_processed, report.frames_without_pose
    );
    out
}

pub fn print_report(report: &SessionReport) {
    println!("{}", format_report(report));
}
