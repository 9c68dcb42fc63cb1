// core/src/calibration.rs
use serde::{Deserialize, Serialize};

/// cm/px ut fra en antatt fysisk referanselengde og målt pikselavstand.
/// None når pikselavstanden er null, negativ eller ikke-finitt.
pub fn scale_for(reference_cm: f64, pixel_len: f64) -> Option<f64> {
    if !pixel_len.is_finite() || pixel_len <= 0.0 || !reference_cm.is_finite() {
        return None;
    }
    let s = reference_cm / pixel_len;
    if s.is_finite() && s > 0.0 {
        Some(s)
    } else {
        None
    }
}

/// Skalafaktor som settes én gang per økt og deretter fryses.
///
/// Degenererte målinger utsetter kalibreringen til neste brukbare frame.
/// Lykkes den aldri, rapporteres fysiske størrelser som 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calibrator {
    pub reference_cm: f64,
    scale_cm_per_px: Option<f64>,
}

impl Calibrator {
    pub fn new(reference_cm: f64) -> Self {
        Self {
            reference_cm,
            scale_cm_per_px: None,
        }
    }

    /// Tilby en referanselengde i piksler. Returnerer `true` kun når
    /// kalibreringen ble satt nå.
    pub fn offer(&mut self, pixel_len: f64) -> bool {
        if self.scale_cm_per_px.is_some() {
            return false;
        }
        match scale_for(self.reference_cm, pixel_len) {
            Some(s) => {
                log::debug!(
                    "calibration frozen: {:.4} cm/px ({} cm over {:.1} px)",
                    s,
                    self.reference_cm,
                    pixel_len
                );
                self.scale_cm_per_px = Some(s);
                true
            }
            None => {
                log::debug!("calibration deferred: degenerate reference length {pixel_len}");
                false
            }
        }
    }

    pub fn scale(&self) -> Option<f64> {
        self.scale_cm_per_px
    }

    pub fn is_calibrated(&self) -> bool {
        self.scale_cm_per_px.is_some()
    }

    /// Piksler → cm, eller 0.0 hvis ukalibrert.
    pub fn to_cm(&self, px: f64) -> f64 {
        self.scale_cm_per_px.map(|s| px * s).unwrap_or(0.0)
    }
}
