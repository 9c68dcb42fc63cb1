use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::config::AnalyzerConfig;
use crate::error::{FitnessError, Result};
use crate::models::{Frame, FrameSize, LandmarkSet};
use crate::session::PoseSource;

/// Leser analysekonfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres standardverdiene.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<AnalyzerConfig> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut de = serde_json::Deserializer::from_str(&contents);
        let cfg: AnalyzerConfig = spte::deserialize(&mut de)
            .map_err(|e| anyhow::anyhow!("config parse at {}: {}", e.path(), e.inner()))?;
        log::info!("config loaded from {}", path.display());
        Ok(cfg)
    } else {
        log::warn!("config {} not found, using defaults", path.display());
        Ok(AnalyzerConfig::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(cfg: &AnalyzerConfig, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json).with_context(|| format!("writing config {}", path.display()))?;
    log::info!("config saved to {}", path.display());
    Ok(())
}

/// Innspilt pose-strøm: felles rammestørrelse og én post per frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedStream {
    pub width: u32,
    pub height: u32,
    pub frames: Vec<RecordedFrame>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Mangler indeks brukes posisjonen i lista.
    #[serde(default)]
    pub index: Option<u64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// null => ingen person i framen. Rå punkter; lengden sjekkes i `into_frames`.
    #[serde(default)]
    pub landmarks: Option<Vec<[f64; 2]>>,
}

impl RecordedStream {
    /// Feil antall landemerker gir `InvalidFrame` med frame-indeksen.
    pub fn into_frames(self) -> Result<Vec<Frame>> {
        let (w, h) = (self.width, self.height);
        self.frames
            .into_iter()
            .enumerate()
            .map(|(i, f)| {
                let index = f.index.unwrap_or(i as u64);
                let size = FrameSize::new(f.width.unwrap_or(w), f.height.unwrap_or(h));
                let landmarks = f
                    .landmarks
                    .map(LandmarkSet::try_from)
                    .transpose()
                    .map_err(|reason| FitnessError::InvalidFrame { index, reason })?;
                Ok(Frame::new(index, size, landmarks))
            })
            .collect()
    }
}

pub fn parse_frames_json(json_in: &str) -> Result<Vec<Frame>> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    let stream: RecordedStream = spte::deserialize(&mut de).map_err(FitnessError::from_path_error)?;
    stream.into_frames()
}

/// Pose-kilde fra en innspilt JSON-fil. Filen leses ved `open`.
#[derive(Debug)]
pub struct FilePoseSource {
    path: PathBuf,
    frames: std::vec::IntoIter<Frame>,
}

impl FilePoseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            frames: Vec::new().into_iter(),
        }
    }
}

impl PoseSource for FilePoseSource {
    fn open(&mut self) -> Result<()> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            FitnessError::FrameSource(format!("{}: {}", self.path.display(), e))
        })?;
        let frames = parse_frames_json(&contents)?;
        log::info!("{}: {} frames", self.path.display(), frames.len());
        self.frames = frames.into_iter();
        Ok(())
    }

    fn next_frame(&mut self) -> Result<Option<Frame>> {
        Ok(self.frames.next())
    }
}
