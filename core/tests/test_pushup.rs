// core/tests/test_pushup.rs
use fitnesstest_core::models::{Frame, FrameSize, LandmarkId, LandmarkSet, Point2};
use fitnesstest_core::pushup::{PushupCounter, PushupPhase};
use serde::Deserialize;

fn count(angles: &[f64]) -> u32 {
    let mut c = PushupCounter::default();
    for a in angles {
        c.observe_angle(*a);
    }
    c.finalize().count
}

fn arm_frame(index: u64, wrist: Point2) -> Frame {
    let lm = LandmarkSet::default()
        .with(LandmarkId::LeftShoulder, Point2::new(0.5, 0.3))
        .with(LandmarkId::LeftElbow, Point2::new(0.5, 0.5))
        .with(LandmarkId::LeftWrist, wrist);
    Frame::new(index, FrameSize::new(640, 480), Some(lm))
}

#[test]
fn single_rep_down_then_up() {
    assert_eq!(count(&[100.0, 80.0, 170.0]), 1);
}

#[test]
fn dead_zone_does_not_trigger() {
    // 120° ligger mellom tersklene og skal ikke påvirke noe
    assert_eq!(count(&[100.0, 80.0, 120.0, 170.0]), 1);
}

#[test]
fn two_full_cycles_count_twice() {
    assert_eq!(count(&[80.0, 170.0, 80.0, 170.0]), 2);
}

#[test]
fn up_without_down_never_counts() {
    assert_eq!(count(&[170.0, 175.0, 120.0, 179.0]), 0);
}

#[test]
fn thresholds_are_strict() {
    // nøyaktig 90 gir ikke down
    assert_eq!(count(&[90.0, 170.0]), 0);
    // nøyaktig 160 gir ikke up
    assert_eq!(count(&[80.0, 160.0]), 0);
    assert_eq!(count(&[80.0, 160.0, 160.5]), 1);
}

#[test]
fn repeated_up_frames_count_once() {
    let mut c = PushupCounter::default();
    assert!(!c.observe_angle(85.0));
    assert_eq!(c.phase(), PushupPhase::Down);
    assert!(c.observe_angle(170.0));
    assert!(!c.observe_angle(172.0));
    assert_eq!(c.phase(), PushupPhase::Up);
    assert_eq!(c.count(), 1);
}

#[test]
fn counts_from_landmark_frames_and_skips_misses() {
    let size = FrameSize::new(640, 480);
    let frames = vec![
        arm_frame(0, Point2::new(0.5, 0.7)), // rett arm (180°)
        arm_frame(1, Point2::new(0.7, 0.4)), // bøyd (~63°)
        Frame::miss(2, size),
        arm_frame(3, Point2::new(0.5, 0.7)),
        arm_frame(4, Point2::new(0.7, 0.4)),
        Frame::miss(5, size),
        arm_frame(6, Point2::new(0.5, 0.7)),
    ];

    let mut c = PushupCounter::default();
    for f in &frames {
        c.update(f);
    }
    assert_eq!(c.finalize().count, 2);
}

#[derive(Debug, Deserialize)]
struct AngleRow {
    #[allow(dead_code)]
    frame: u64,
    elbow_angle: f64,
}

#[test]
fn counts_recorded_angle_series_from_csv() {
    // tre reps med støy rundt tersklene
    let data = "frame,elbow_angle
0,172.0
1,150.0
2,110.0
3,88.0
4,91.0
5,89.5
6,140.0
7,161.0
8,163.0
9,95.0
10,70.0
11,158.0
12,162.0
13,120.0
14,60.0
15,175.0
";
    let mut rdr = csv::Reader::from_reader(data.as_bytes());
    let angles: Vec<f64> = rdr
        .deserialize::<AngleRow>()
        .map(|r| r.expect("row").elbow_angle)
        .collect();

    assert_eq!(angles.len(), 16);
    assert_eq!(count(&angles), 3);
}
