//! Executors for running invocations.
//!
//! Invocations are `!Send` and are handed to a single-threaded executor
//! through [`LocalSpawn`]. `futures::executor::LocalSpawner` works as is; the
//! browser side implements the trait over its own `spawn_local`.

use std::rc::Rc;

pub use futures::task::LocalSpawn;

/// Shared handle to the executor a controller spawns onto.
pub type Spawner = Rc<dyn LocalSpawn>;

pub fn spawner(spawn: impl LocalSpawn + 'static) -> Spawner {
    Rc::new(spawn)
}

#[cfg(feature = "tokio")]
pub use self::tokio_local::TokioLocal;

#[cfg(feature = "tokio")]
mod tokio_local {
    use futures::future::LocalFutureObj;
    use futures::task::{LocalSpawn, SpawnError};

    /// Spawns onto the `tokio::task::LocalSet` the caller is running in.
    ///
    /// Spawning outside of a `LocalSet` panics, as `tokio::task::spawn_local`
    /// does.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TokioLocal;

    impl LocalSpawn for TokioLocal {
        fn spawn_local_obj(
            &self,
            future: LocalFutureObj<'static, ()>,
        ) -> Result<(), SpawnError> {
            tokio::task::spawn_local(future);
            Ok(())
        }
    }
}
