use fetch::accessors::{CommandState, ResetCommand, ResetKind};
use yew::prelude::*;

use crate::get_api_client;

pub struct ResetHookReturn {
    pub state: CommandState,
    /// Start the reset. A reset already in progress is not restarted.
    pub run: Callback<()>,
}

/// Reset study history. `on_success` runs after the backend confirms, which
/// is where views refresh whatever the reset invalidated.
#[hook]
pub fn use_reset_history(on_success: Callback<()>) -> ResetHookReturn {
    use_reset(ResetKind::History, on_success)
}

/// Reset the whole database to its seeded state.
#[hook]
pub fn use_full_reset(on_success: Callback<()>) -> ResetHookReturn {
    use_reset(ResetKind::Full, on_success)
}

#[hook]
fn use_reset(kind: ResetKind, on_success: Callback<()>) -> ResetHookReturn {
    let update = use_force_update();
    let command =
        use_memo(kind, |kind| ResetCommand::new(&get_api_client(), *kind));

    let run = {
        let command = command.clone();
        Callback::from(move |_| {
            if command.state().loading {
                return;
            }
            let request = command.run();
            update.force_update();
            let on_success = on_success.clone();
            let update = update.clone();
            yew::platform::spawn_local(async move {
                let result = request.await;
                update.force_update();
                if result.is_ok() {
                    on_success.emit(());
                }
            });
        })
    };

    ResetHookReturn {
        state: command.state(),
        run,
    }
}
