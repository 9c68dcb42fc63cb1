// core/src/models.rs
use serde::{Deserialize, Serialize};

/// Antall punkter i MediaPipe Pose-vokabularet.
pub const LANDMARK_COUNT: usize = 33;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(a: Point2, b: Point2) -> Point2 {
        Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    /// Normalisert [0,1] → piksler.
    #[inline]
    pub fn to_px(self, size: FrameSize) -> Point2 {
        Point2::new(self.x * size.width as f64, self.y * size.height as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySide {
    #[default]
    Left,
    Right,
}

/// MediaPipe Pose-indekser (33 totalt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(usize)]
pub enum LandmarkId {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkId {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn shoulder(side: BodySide) -> Self {
        match side {
            BodySide::Left => LandmarkId::LeftShoulder,
            BodySide::Right => LandmarkId::RightShoulder,
        }
    }

    pub fn elbow(side: BodySide) -> Self {
        match side {
            BodySide::Left => LandmarkId::LeftElbow,
            BodySide::Right => LandmarkId::RightElbow,
        }
    }

    pub fn wrist(side: BodySide) -> Self {
        match side {
            BodySide::Left => LandmarkId::LeftWrist,
            BodySide::Right => LandmarkId::RightWrist,
        }
    }
}

/// Ett sett normaliserte landemerker for én frame. Endres aldri etter bygging;
/// `with` gir en ny kopi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct LandmarkSet {
    points: [Point2; LANDMARK_COUNT],
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self {
            points: [Point2::default(); LANDMARK_COUNT],
        }
    }
}

impl LandmarkSet {
    pub fn from_points(points: &[Point2]) -> Result<Self, String> {
        if points.len() != LANDMARK_COUNT {
            return Err(format!(
                "expected {} landmarks, got {}",
                LANDMARK_COUNT,
                points.len()
            ));
        }
        let mut out = Self::default();
        out.points.copy_from_slice(points);
        Ok(out)
    }

    #[must_use]
    pub fn with(mut self, id: LandmarkId, p: Point2) -> Self {
        self.points[id.index()] = p;
        self
    }

    #[inline]
    pub fn get(&self, id: LandmarkId) -> Point2 {
        self.points[id.index()]
    }

    #[inline]
    pub fn px(&self, id: LandmarkId, size: FrameSize) -> Point2 {
        self.get(id).to_px(size)
    }
}

impl TryFrom<Vec<[f64; 2]>> for LandmarkSet {
    type Error = String;

    fn try_from(raw: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        let pts: Vec<Point2> = raw.iter().map(|[x, y]| Point2::new(*x, *y)).collect();
        LandmarkSet::from_points(&pts)
    }
}

impl From<LandmarkSet> for Vec<[f64; 2]> {
    fn from(set: LandmarkSet) -> Self {
        set.points.iter().map(|p| [p.x, p.y]).collect()
    }
}

/// Én frame fra pose-kilden. `landmarks == None` betyr "ingen person funnet".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub index: u64,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub landmarks: Option<LandmarkSet>,
}

impl Frame {
    pub fn new(index: u64, size: FrameSize, landmarks: Option<LandmarkSet>) -> Self {
        Self {
            index,
            width: size.width,
            height: size.height,
            landmarks,
        }
    }

    pub fn miss(index: u64, size: FrameSize) -> Self {
        Self::new(index, size, None)
    }

    #[inline]
    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }

    #[inline]
    pub fn has_pose(&self) -> bool {
        self.landmarks.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmark_set_rejects_wrong_length() {
        let raw = vec![[0.5, 0.5]; 12];
        assert!(LandmarkSet::try_from(raw).is_err());
    }

    #[test]
    fn px_scales_by_frame_size() {
        let set = LandmarkSet::default().with(LandmarkId::Nose, Point2::new(0.5, 0.25));
        let p = set.px(LandmarkId::Nose, FrameSize::new(640, 480));
        assert_eq!(p, Point2::new(320.0, 120.0));
    }
}
