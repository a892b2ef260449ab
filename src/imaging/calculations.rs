//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Apply per-axis scale factors to source dimensions.
///
/// Each edge is rounded to the nearest whole pixel (halves round away from
/// zero). Negative products saturate to 0; the resizer rejects those.
/// Returns `None` when an edge is non-finite or exceeds `u32::MAX`.
///
/// # Examples
/// ```
/// # use thumbmaker::imaging::scaled_dimensions;
/// assert_eq!(scaled_dimensions((200, 200), (0.5, 0.5)), Some((100, 100)));
/// assert_eq!(scaled_dimensions((200, 200), (0.6, 0.4)), Some((120, 80)));
/// assert_eq!(scaled_dimensions((200, 200), (1e12, 1e12)), None);
/// ```
pub fn scaled_dimensions(source: (u32, u32), factors: (f64, f64)) -> Option<(u32, u32)> {
    let (src_w, src_h) = source;
    let (fx, fy) = factors;

    Some((scale_edge(src_w, fx)?, scale_edge(src_h, fy)?))
}

fn scale_edge(edge: u32, factor: f64) -> Option<u32> {
    let scaled = (edge as f64 * factor).round();
    if !scaled.is_finite() || scaled > u32::MAX as f64 {
        return None;
    }
    Some(scaled as u32)
}

/// Largest dimensions with the source aspect ratio that fit inside `target`.
///
/// One edge matches the target exactly, the other is equal or smaller.
/// Neither edge drops below 1 pixel.
pub fn calculate_fit_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    if src_w == 0 || src_h == 0 {
        return target;
    }

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if src_aspect > tgt_aspect {
        // Source is wider: width matches, height shrinks
        let w = tgt_w;
        let h = (w as f64 / src_aspect).round() as u32;
        (w, h.max(1))
    } else {
        // Source is taller: height matches, width shrinks
        let h = tgt_h;
        let w = (h as f64 * src_aspect).round() as u32;
        (w.max(1), h)
    }
}

/// Smallest dimensions with the source aspect ratio that cover `target`.
///
/// One edge matches the target exactly, the other is equal or larger.
pub fn calculate_fill_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    if src_w == 0 || src_h == 0 {
        return target;
    }

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if src_aspect > tgt_aspect {
        // Source is wider: height will match, width will exceed
        let h = tgt_h;
        let w = (h as f64 * src_aspect).round() as u32;
        (w.max(1), h)
    } else {
        // Source is taller: width will match, height will exceed
        let w = tgt_w;
        let h = (w as f64 / src_aspect).round() as u32;
        (w, h.max(1))
    }
}
