// core/tests/test_grading.rs
use fitnesstest_core::grading::{grade, Gender, Level};
use fitnesstest_core::session::ExerciseKind;
use fitnesstest_core::FitnessError;

#[test]
fn pushup_bands_follow_table() {
    let g = |n: f64, age| grade(ExerciseKind::Pushups, n, age, Gender::Male);
    assert_eq!(g(35.0, 15), Level::Excellent);
    assert_eq!(g(20.0, 15), Level::Average);
    // hullet mellom Average og Excellent faller til Below Average
    assert_eq!(g(30.0, 15), Level::BelowAverage);
    assert_eq!(g(10.0, 25), Level::BelowAverage);
    assert_eq!(g(40.0, 12), Level::NotApplicable);

    assert_eq!(grade(ExerciseKind::Pushups, 24.0, 30, Gender::Female), Level::Excellent);
}

#[test]
fn situp_bands_and_age_limits() {
    assert_eq!(grade(ExerciseKind::Situps, 45.0, 18, Gender::Male), Level::Excellent);
    assert_eq!(grade(ExerciseKind::Situps, 36.0, 18, Gender::Male), Level::AboveAverage);
    assert_eq!(grade(ExerciseKind::Situps, 29.0, 18, Gender::Male), Level::Average);
    assert_eq!(grade(ExerciseKind::Situps, 28.0, 18, Gender::Male), Level::BelowAverage);
    assert_eq!(grade(ExerciseKind::Situps, 50.0, 45, Gender::Female), Level::NotApplicable);
}

#[test]
fn reach_and_jump_bands() {
    assert_eq!(grade(ExerciseKind::SitAndReach, 30.0, 17, Gender::Female), Level::Excellent);
    assert_eq!(grade(ExerciseKind::SitAndReach, 12.0, 25, Gender::Male), Level::Average);
    assert_eq!(grade(ExerciseKind::SitAndReach, 12.0, 40, Gender::Male), Level::NotApplicable);

    assert_eq!(grade(ExerciseKind::VerticalJump, 70.0, 25, Gender::Male), Level::Excellent);
    assert_eq!(grade(ExerciseKind::VerticalJump, 35.0, 17, Gender::Female), Level::BelowAverage);
    assert_eq!(grade(ExerciseKind::VerticalJump, 0.0, 17, Gender::Female), Level::Poor);
}

#[test]
fn gender_parsing_is_case_insensitive() {
    assert_eq!("Male".parse::<Gender>().expect("male"), Gender::Male);
    assert_eq!(" FEMALE ".parse::<Gender>().expect("female"), Gender::Female);
    assert!(matches!("other".parse::<Gender>(), Err(FitnessError::UnknownGender(_))));
}

#[test]
fn level_display_and_wire_names() {
    assert_eq!(Level::BelowAverage.to_string(), "Below Average");
    assert_eq!(serde_json::to_string(&Level::NotApplicable).expect("json"), "\"N/A\"");
    assert_eq!(serde_json::to_string(&Level::AboveAverage).expect("json"), "\"Above Average\"");
}
