//! Min/max ranges driven by a complexity score.
//!
//! ## The Problem
//!
//! A single chunk size is a compromise:
//!
//! - Simple, repetitive prose can afford large chunks
//! - Dense, technical prose needs small chunks to keep embeddings focused
//!
//! The adaptive chunker keeps two ranges instead of two numbers and picks a
//! point inside each from the current complexity:
//!
//! ```text
//! size:    [min ............................. max]
//!                  complexity 1.0 <------ complexity 0.0
//!
//! overlap: [min ............................. max]
//!                  complexity 0.0 ------> complexity 1.0
//! ```
//!
//! Complex text gets smaller chunks and more overlap.

use crate::{Error, Result};

/// An inclusive `min..=max` range with linear interpolation.
///
/// # Examples
///
/// ```rust
/// use adaptive_slabs::Bounds;
///
/// let size = Bounds::new(300, 1000).unwrap();
/// assert_eq!(size.shrink(0.0), 1000.0);
/// assert_eq!(size.shrink(1.0), 300.0);
///
/// let overlap = Bounds::from(30..=150);
/// assert_eq!(overlap.grow(0.0), 30.0);
/// assert_eq!(overlap.grow(0.5), 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: usize,
    max: usize,
}

impl Bounds {
    /// Create a range, rejecting `min > max`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSizeRange`] when `min > max`. Callers building
    /// overlap bounds remap it to [`Error::InvalidOverlapRange`].
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min > max {
            Err(Error::InvalidSizeRange { min, max })
        } else {
            Ok(Self { min, max })
        }
    }

    /// The lower end of the range.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// The upper end of the range.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Width of the range.
    #[must_use]
    pub const fn span(&self) -> usize {
        self.max - self.min
    }

    /// Interpolate from `max` down toward `min` as `t` goes from 0 to 1.
    #[must_use]
    pub fn shrink(&self, t: f64) -> f64 {
        self.max as f64 - t * self.span() as f64
    }

    /// Interpolate from `min` up toward `max` as `t` goes from 0 to 1.
    #[must_use]
    pub fn grow(&self, t: f64) -> f64 {
        self.min as f64 + t * self.span() as f64
    }
}

impl From<std::ops::RangeInclusive<usize>> for Bounds {
    /// A reversed range collapses to its start.
    fn from(range: std::ops::RangeInclusive<usize>) -> Self {
        let min = *range.start();
        Self {
            min,
            max: (*range.end()).max(min),
        }
    }
}
