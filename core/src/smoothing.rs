use std::collections::VecDeque;

use ordered_float::OrderedFloat;

/// Glidende gjennomsnitt over de siste `window` verdiene.
/// Før vinduet er fullt brukes snittet av det som finnes.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
    buf: VecDeque<f64>,
    sum: f64,
}

impl MovingAverage {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            buf: VecDeque::with_capacity(window),
            sum: 0.0,
        }
    }

    /// Legg til en verdi og returner nytt snitt.
    pub fn push(&mut self, x: f64) -> f64 {
        self.buf.push_back(x);
        self.sum += x;
        if self.buf.len() > self.window {
            if let Some(old) = self.buf.pop_front() {
                self.sum -= old;
            }
        }
        self.mean().unwrap_or(x)
    }

    pub fn mean(&self) -> Option<f64> {
        if self.buf.is_empty() {
            None
        } else {
            Some(self.sum / self.buf.len() as f64)
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Begrenset historikk (FIFO) med fast kapasitet.
#[derive(Debug, Clone)]
pub struct RollingHistory {
    capacity: usize,
    buf: VecDeque<f64>,
}

impl RollingHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            buf: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, x: f64) {
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(x);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Minste verdi blant de siste `n`.
    pub fn recent_min(&self, n: usize) -> Option<f64> {
        let skip = self.buf.len().saturating_sub(n);
        self.buf
            .iter()
            .skip(skip)
            .copied()
            .map(OrderedFloat)
            .min()
            .map(|m| m.0)
    }

    pub fn percentile(&self, p: f64) -> Option<f64> {
        let xs: Vec<f64> = self.buf.iter().copied().collect();
        percentile(&xs, p)
    }
}

/// Persentil med lineær interpolasjon mellom nærmeste rangeringer
/// (samme konvensjon som numpy sin standard). `p` i [0, 100].
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    let mut xs: Vec<OrderedFloat<f64>> = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .map(OrderedFloat)
        .collect();
    if xs.is_empty() {
        return None;
    }
    xs.sort();

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (xs.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(xs[lo].0 + (xs[hi].0 - xs[lo].0) * frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_average_drops_oldest() {
        let mut ma = MovingAverage::new(3);
        ma.push(3.0);
        ma.push(6.0);
        assert!((ma.push(9.0) - 6.0).abs() < 1e-12);
        assert!((ma.push(12.0) - 9.0).abs() < 1e-12);
        assert_eq!(ma.len(), 3);
    }

    #[test]
    fn percentile_interpolates() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&xs, 50.0), Some(3.0));
        assert!((percentile(&xs, 90.0).unwrap_or(0.0) - 4.6).abs() < 1e-9);
        assert_eq!(percentile(&[], 90.0), None);
    }

    #[test]
    fn rolling_history_is_bounded() {
        let mut h = RollingHistory::new(4);
        for i in 0..10 {
            h.push(i as f64);
        }
        assert_eq!(h.len(), 4);
        assert_eq!(h.recent_min(10), Some(6.0));
        assert_eq!(h.recent_min(2), Some(8.0));
    }
}
