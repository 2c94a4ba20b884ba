//! Progress reporting for operator assembly.
//!
//! Assembly runs in three phases: validation, per-face accumulation and
//! compression. A [`Progress`] attached to
//! [`LaplacianOptions`](super::laplacian::LaplacianOptions) is told when each
//! phase starts; sequential accumulation also reports how many faces are done.
//!
//! # Example
//!
//! ```
//! use cotlap::algo::{LaplacianBuilder, LaplacianOptions, Progress};
//! use cotlap::mesh::planar_grid;
//!
//! let progress = Progress::new(|current, total, message| {
//!     println!("[{}/{}] {}", current, total, message);
//! });
//!
//! let options = LaplacianOptions::default().with_progress(progress);
//! let laplacian = LaplacianBuilder::new(options).build(&planar_grid(8)).unwrap();
//! assert_eq!(laplacian.nrows(), 81);
//! ```

use std::fmt;
use std::sync::Arc;

/// Shared progress callback.
///
/// The callback receives `(current, total, message)`. Cloning shares the
/// same callback, so options carrying a `Progress` stay cheap to clone.
#[derive(Clone)]
pub struct Progress {
    callback: Arc<dyn Fn(usize, usize, &str) + Send + Sync>,
}

impl Progress {
    /// Create a progress reporter from a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// A reporter that discards every update.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }

    /// Report that `phase` of `phases` has started.
    #[inline]
    pub fn phase(&self, phase: usize, phases: usize, message: &str) {
        (self.callback)(phase, phases, message);
    }

    /// Report `done` of `faces` faces processed inside `phase`.
    ///
    /// Both counters are scaled by 1000 so the position within the phase
    /// survives integer reporting: `phase * 1000 + done * 1000 / faces` out
    /// of `phases * 1000`. Silent when `faces` is zero.
    #[inline]
    pub fn faces(&self, done: usize, faces: usize, phase: usize, phases: usize, message: &str) {
        if faces == 0 {
            return;
        }
        (self.callback)(phase * 1000 + done * 1000 / faces, phases * 1000, message);
    }
}

impl fmt::Debug for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}
