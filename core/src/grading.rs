// core/src/grading.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitnessError;
use crate::session::ExerciseKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(FitnessError::UnknownGender(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Poor,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Average,
    #[serde(rename = "Above Average")]
    AboveAverage,
    Excellent,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Poor => "Poor",
            Level::BelowAverage => "Below Average",
            Level::Average => "Average",
            Level::AboveAverage => "Above Average",
            Level::Excellent => "Excellent",
            Level::NotApplicable => "N/A",
        };
        f.write_str(s)
    }
}

/// Tabelloppslag: rå score → nivå for gitt alder og kjønn.
/// Situps graderes på gyldige reps, hopp på snitthøyde (cm).
pub fn grade(exercise: ExerciseKind, score: f64, age: u32, gender: Gender) -> Level {
    match exercise {
        ExerciseKind::Pushups => pushup_level(score, age, gender),
        ExerciseKind::Situps => situp_level(score, age, gender),
        ExerciseKind::SitAndReach => reach_level(score, age, gender),
        ExerciseKind::VerticalJump => jump_level(score, age, gender),
    }
}

// Push-ups har hull mellom "Average"-båndet og "Excellent"; alt utenfor blir Below Average.
fn pushup_level(count: f64, age: u32, gender: Gender) -> Level {
    let (excellent, avg_lo, avg_hi) = match (gender, age) {
        (Gender::Male, 14..=17) => (35.0, 18.0, 25.0),
        (Gender::Male, 18..=19) => (39.0, 22.0, 28.0),
        (Gender::Male, 20..) => (30.0, 17.0, 21.0),
        (Gender::Female, 14..=17) => (28.0, 12.0, 18.0),
        (Gender::Female, 18..=19) => (33.0, 15.0, 20.0),
        (Gender::Female, 20..) => (24.0, 12.0, 17.0),
        _ => return Level::NotApplicable,
    };
    if count >= excellent {
        Level::Excellent
    } else if count >= avg_lo && count <= avg_hi {
        Level::Average
    } else {
        Level::BelowAverage
    }
}

fn situp_level(count: f64, age: u32, gender: Gender) -> Level {
    let t = match (gender, age) {
        (Gender::Male, 16..=19) => [45.0, 36.0, 29.0],
        (Gender::Male, 20..=29) => [49.0, 40.0, 34.0],
        (Gender::Male, 30..=39) => [41.0, 33.0, 27.0],
        (Gender::Female, 16..=19) => [42.0, 32.0, 25.0],
        (Gender::Female, 20..=29) => [44.0, 36.0, 28.0],
        (Gender::Female, 30..=39) => [38.0, 30.0, 24.0],
        _ => return Level::NotApplicable,
    };
    three_band(count, t)
}

fn reach_level(reach_cm: f64, age: u32, gender: Gender) -> Level {
    let t = match (gender, age) {
        (Gender::Male, 16..=19) => [25.0, 20.0, 15.0],
        (Gender::Male, 20..=30) => [20.0, 15.0, 10.0],
        (Gender::Female, 16..=19) => [30.0, 25.0, 20.0],
        (Gender::Female, 20..=30) => [25.0, 20.0, 15.0],
        _ => return Level::NotApplicable,
    };
    three_band(reach_cm, t)
}

fn jump_level(height_cm: f64, age: u32, gender: Gender) -> Level {
    let [ex, above, avg, below] = match (gender, age) {
        (Gender::Male, 16..=19) => [65.0, 50.0, 40.0, 30.0],
        (Gender::Male, 20..) => [70.0, 56.0, 41.0, 31.0],
        (Gender::Female, 16..=19) => [58.0, 47.0, 36.0, 26.0],
        (Gender::Female, 20..) => [60.0, 46.0, 31.0, 21.0],
        _ => return Level::NotApplicable,
    };
    match height_cm {
        h if h >= ex => Level::Excellent,
        h if h >= above => Level::AboveAverage,
        h if h >= avg => Level::Average,
        h if h >= below => Level::BelowAverage,
        _ => Level::Poor,
    }
}

/// Excellent / Above Average / Average, ellers Below Average.
fn three_band(score: f64, [ex, above, avg]: [f64; 3]) -> Level {
    match score {
        s if s >= ex => Level::Excellent,
        s if s >= above => Level::AboveAverage,
        s if s >= avg => Level::Average,
        _ => Level::BelowAverage,
    }
}
