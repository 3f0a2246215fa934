//! A cube shared between threads.
//!
//! A rotation updates a face and its edge ring in two steps, so a reader
//! running alongside a writer could observe a torn state. `SharedCube`
//! serializes writers behind a `RwLock` and lets readers run concurrently.
//! Every mutating call returns the snapshot taken under the same lock.
//!
//! ```
//! use cube_engine::SharedCube;
//!
//! let shared = SharedCube::new();
//! let handle = shared.clone();
//!
//! let after = handle.apply_notation("R").unwrap();
//! assert_eq!(shared.snapshot(), after);
//! ```

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::warn;

use crate::core::{ColorScheme, Cube, CubeResult};

/// Clonable handle to one cube. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct SharedCube {
    inner: Arc<RwLock<Cube>>,
}

impl SharedCube {
    /// Wrap a solved cube.
    #[must_use]
    pub fn new() -> Self {
        Self::from_cube(Cube::new())
    }

    /// Wrap an existing cube.
    #[must_use]
    pub fn from_cube(cube: Cube) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cube)),
        }
    }

    // Any grid is a valid cube, so state behind a poisoned lock is usable.
    fn read(&self) -> RwLockReadGuard<'_, Cube> {
        self.inner.read().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned cube lock");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Cube> {
        self.inner.write().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned cube lock");
            poisoned.into_inner()
        })
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Cube {
        self.read().clone()
    }

    /// Current center colors.
    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        self.read().color_scheme()
    }

    /// Rotate a face by name. Returns the state after the turn.
    pub fn rotate_face(&self, face: &str, clockwise: bool) -> CubeResult<Cube> {
        let mut cube = self.write();
        cube.rotate_face(face, clockwise)?;
        Ok(cube.clone())
    }

    /// Apply a single move. Returns the state after the move.
    pub fn apply_notation(&self, notation: &str) -> CubeResult<Cube> {
        let mut cube = self.write();
        cube.apply_notation(notation)?;
        Ok(cube.clone())
    }

    /// Reset to solved. Returns the solved state.
    pub fn reset(&self) -> Cube {
        let mut cube = self.write();
        cube.reset();
        cube.clone()
    }

    /// Run `f` with exclusive access.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Cube) -> R) -> R {
        f(&mut self.write())
    }
}
