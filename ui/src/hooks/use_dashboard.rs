use fetch::accessors::{Dashboard, DashboardSnapshot};
use yew::prelude::*;

use crate::{get_api_client, spawner};

pub struct DashboardHookReturn {
    pub dashboard: DashboardSnapshot,
    /// Refetch every panel, e.g. once a reset has finished.
    pub refresh_all: Callback<()>,
}

/// The dashboard's panels, each fetched independently on mount.
#[hook]
pub fn use_dashboard() -> DashboardHookReturn {
    let update = use_force_update();
    let dashboard = use_memo((), move |_| {
        let dashboard = Dashboard::new(&get_api_client(), &spawner());
        dashboard.subscribe(move || update.force_update());
        dashboard
    });

    {
        let dashboard = dashboard.clone();
        use_effect_with((), move |_| move || dashboard.deactivate());
    }

    let refresh_all = {
        let dashboard = dashboard.clone();
        Callback::from(move |_| dashboard.refresh_all())
    };

    DashboardHookReturn {
        dashboard: dashboard.snapshot(),
        refresh_all,
    }
}
