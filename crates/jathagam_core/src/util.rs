/// Normalize an angle to [0, 360) degrees.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 + 360 rounds up to 360.0
    if r >= 360.0 { 0.0 } else { r }
}
