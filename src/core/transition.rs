use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Named easing curves used by chart animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    QuadInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => {
                if t <= 0.5 {
                    2.0 * t * t
                } else {
                    let rest = 1.0 - t;
                    1.0 - 2.0 * rest * rest
                }
            }
        }
    }
}

/// Values that can be blended between a start and an end state.
pub trait Interpolate: Clone {
    fn interpolate(&self, target: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

impl<T: Interpolate, const N: usize> Interpolate for [T; N] {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        std::array::from_fn(|index| self[index].interpolate(&target[index], t))
    }
}

impl<T: Interpolate> Interpolate for Vec<T> {
    /// Element-wise blend. Shapes that do not line up jump straight to the
    /// target, since there is nothing to blend them from.
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        if self.len() != target.len() {
            return target.clone();
        }
        self.iter()
            .zip(target)
            .map(|(from, to)| from.interpolate(to, t))
            .collect()
    }
}

/// Start-to-end geometry animation over a fixed duration.
///
/// Sampling is monotonic: an elapsed time earlier than one already sampled
/// is treated as the later one. Once the duration has passed the sample is
/// exactly the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<T: Interpolate> {
    from: T,
    to: T,
    duration_ms: f64,
    easing: Easing,
    elapsed_ms: f64,
}

impl<T: Interpolate> Transition<T> {
    pub fn new(from: T, to: T, duration_ms: f64, easing: Easing) -> ChartResult<Self> {
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            from,
            to,
            duration_ms,
            easing,
            elapsed_ms: 0.0,
        })
    }

    #[must_use]
    pub fn from_state(&self) -> &T {
        &self.from
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.to
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Advances the clock to `elapsed_ms` and returns the frame at that time.
    pub fn sample(&mut self, elapsed_ms: f64) -> T {
        if elapsed_ms.is_finite() && elapsed_ms > self.elapsed_ms {
            self.elapsed_ms = elapsed_ms;
        }
        self.current()
    }

    /// Frame at the last sampled time.
    #[must_use]
    pub fn current(&self) -> T {
        if self.is_finished() {
            return self.to.clone();
        }
        let progress = self.elapsed_ms / self.duration_ms;
        self.from.interpolate(&self.to, self.easing.apply(progress))
    }
}
