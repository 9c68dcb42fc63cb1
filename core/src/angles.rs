// core/src/angles.rs
use crate::models::Point2;

/// Vinkel ∠abc i grader (b er toppunktet), alltid i [0, 180].
///
/// atan2(|kryss|, prikk) mellom b→a og b→c. Gir 0.0 når en av vektorene
/// har null lengde.
pub fn joint_angle(a: Point2, b: Point2, c: Point2) -> f64 {
    let (ux, uy) = (a.x - b.x, a.y - b.y);
    let (vx, vy) = (c.x - b.x, c.y - b.y);

    let nu = ux.hypot(uy);
    let nv = vx.hypot(vy);
    if nu == 0.0 || nv == 0.0 || !nu.is_finite() || !nv.is_finite() {
        return 0.0;
    }

    let dot = ux * vx + uy * vy;
    let cross = ux * vy - uy * vx;
    let deg = cross.abs().atan2(dot).to_degrees();
    deg.clamp(0.0, 180.0)
}
