use crate::planner::constants::{PORTION_MAX_G, PORTION_MIN_G, portion_steps};

/// Snap a gram amount onto the portion grid.
///
/// The value is clamped to [`PORTION_MIN_G`, `PORTION_MAX_G`] first, then the
/// grid member at minimum absolute distance is returned. Ties go to the lower
/// member; with a 10 g grid a tie only happens at exact midpoints such as
/// 255.0, which resolves to 250. NaN maps to the smallest portion.
pub fn quantize(value: f64) -> u32 {
    if value.is_nan() {
        return PORTION_MIN_G;
    }
    let clamped = value.clamp(PORTION_MIN_G as f64, PORTION_MAX_G as f64);

    let mut best = PORTION_MIN_G;
    let mut best_diff = (clamped - best as f64).abs();
    for step in portion_steps() {
        let diff = (clamped - step as f64).abs();
        // Strict comparison keeps the lower member on ties.
        if diff < best_diff {
            best = step;
            best_diff = diff;
        }
    }
    best
}

/// Whether `grams` is a member of the portion grid.
pub fn is_on_grid(grams: u32) -> bool {
    portion_steps().any(|step| step == grams)
}
