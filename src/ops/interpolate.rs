use crate::config::SeamPolicy;
use crate::error::{LaminationError, Result};
use crate::lamination::Lamination;
use crate::points::{wrap_unit, CirclePoint};

/// Position at `t` on the way from `from` to `to`.
#[inline]
pub fn lerp_position(from: f64, to: f64, t: f64, seam: SeamPolicy) -> f64 {
    match seam {
        SeamPolicy::Shortest => {
            let mut delta = (to - from).rem_euclid(1.0);
            if delta > 0.5 {
                delta -= 1.0;
            }
            wrap_unit(from + t * delta)
        }
        SeamPolicy::Linear => wrap_unit((1.0 - t) * from + t * to),
    }
}

pub(crate) fn check_parameter(t: f64) -> Result<()> {
    if (0.0..=1.0).contains(&t) {
        Ok(())
    } else {
        Err(LaminationError::InvalidParameter(t))
    }
}

/// Blends one point pair. The endpoints of `t` return the original points
/// so that labels survive on the first and last frame.
fn blend(initial: &CirclePoint, target: &CirclePoint, t: f64, seam: SeamPolicy) -> CirclePoint {
    if t == 0.0 {
        initial.clone()
    } else if t == 1.0 {
        target.clone()
    } else {
        CirclePoint::numeric(lerp_position(initial.to_float(), target.to_float(), t, seam))
    }
}

/// Lamination at `t` between two same-shaped laminations, shortest way round.
pub fn interpolate(initial: &Lamination, target: &Lamination, t: f64) -> Result<Lamination> {
    interpolate_with(initial, target, t, SeamPolicy::Shortest)
}

pub fn interpolate_with(
    initial: &Lamination,
    target: &Lamination,
    t: f64,
    seam: SeamPolicy,
) -> Result<Lamination> {
    check_parameter(t)?;
    initial.zip_with(target, |a, b| blend(a, b, t, seam))
}
