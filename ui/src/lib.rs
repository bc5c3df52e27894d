//! Yew bindings for the portal's fetch layer.
//!
//! Views call the hooks in [`hooks`]; each hook owns a controller from the
//! `fetch` crate for as long as the calling component is mounted.

use fetch::Spawner;
use fetch::spawn::LocalSpawn;
use futures::future::LocalFutureObj;
use futures::task::SpawnError;
use payloads::APIClient;

pub mod hooks;
pub mod logs;

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient::new(address)
}

/// Runs controller invocations on yew's local task queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct YewSpawner;

impl LocalSpawn for YewSpawner {
    fn spawn_local_obj(
        &self,
        future: LocalFutureObj<'static, ()>,
    ) -> Result<(), SpawnError> {
        yew::platform::spawn_local(future);
        Ok(())
    }
}

pub fn spawner() -> Spawner {
    fetch::spawner(YewSpawner)
}
