/// Ease in out quadratic
///
/// `progress` is expected in `[0, 1]`: `2p²` for the first half,
/// `1 - (-2p + 2)² / 2` for the second.
#[inline]
pub fn ease_in_out_quad(progress: f32) -> f32 {
    if progress < 0.5 {
        2.0 * progress * progress
    } else {
        let tail = -2.0 * progress + 2.0;
        1.0 - (tail * tail) / 2.0
    }
}

/// Normalised progress of `step` out of `steps`
#[inline]
pub fn progress(step: u8, steps: u8) -> f32 {
    if steps == 0 {
        return 1.0;
    }
    f32::from(step) / f32::from(steps)
}

/// Move `current` toward `target` by the `amount` fraction of the distance
///
/// The result is truncated toward zero, the way an 8-bit channel register
/// would store it.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn approach8(current: u8, target: u8, amount: f32) -> u8 {
    let delta = f32::from(target) - f32::from(current);
    (f32::from(current) + delta * amount) as u8
}
