use std::cell::RefCell;
use std::rc::Rc;

use payloads::{APIClient, ResetResponse};

use crate::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetKind {
    /// Delete study sessions and reviews.
    History,
    /// Reset the whole database.
    Full,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandState {
    pub loading: bool,
    pub error: Option<FetchError>,
    pub success: bool,
}

/// A reset command with its own progress state.
///
/// Resets are side-effecting, so nothing here refetches. Callers await
/// [`ResetCommand::run`] and then refresh whatever views they own.
#[derive(Clone)]
pub struct ResetCommand {
    client: APIClient,
    kind: ResetKind,
    state: Rc<RefCell<CommandState>>,
}

impl ResetCommand {
    pub fn new(client: &APIClient, kind: ResetKind) -> Self {
        Self {
            client: client.clone(),
            kind,
            state: Rc::default(),
        }
    }

    pub fn kind(&self) -> ResetKind {
        self.kind
    }

    pub fn state(&self) -> CommandState {
        self.state.borrow().clone()
    }

    /// Mark the command as loading and return the request.
    ///
    /// The state changes on the call itself, not on first poll, so a view
    /// can re-render into its loading state before awaiting. Dropping the
    /// returned future clears `loading` again.
    pub fn run(
        &self,
    ) -> impl Future<Output = Result<ResetResponse, FetchError>> + use<> {
        *self.state.borrow_mut() = CommandState {
            loading: true,
            error: None,
            success: false,
        };
        tracing::info!(kind = ?self.kind, "running reset");

        let client = self.client.clone();
        let kind = self.kind;
        let state = self.state.clone();
        let guard = LoadingGuard(self.state.clone());
        async move {
            let result = match kind {
                ResetKind::History => client.reset_history().await,
                ResetKind::Full => client.full_reset().await,
            }
            .map_err(FetchError::from);

            {
                let mut state = state.borrow_mut();
                match &result {
                    Ok(_) => state.success = true,
                    Err(e) => state.error = Some(e.clone()),
                }
            }
            drop(guard);
            result
        }
    }
}

/// Clears `loading` when the request finishes or its future is dropped.
struct LoadingGuard(Rc<RefCell<CommandState>>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Ok(mut state) = self.0.try_borrow_mut() {
            state.loading = false;
        }
    }
}
