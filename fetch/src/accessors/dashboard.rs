use std::rc::Rc;

use payloads::{
    APIClient, ContinueLearningSession, LastStudySession,
    PerformanceGraphPoint, QuickStats, StudyProgress,
};

use crate::{FetchController, FetchError, Operation, Spawner};

pub fn last_study_session(client: &APIClient) -> Operation<LastStudySession> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move { client.last_study_session().await.map_err(FetchError::from) }
    })
}

pub fn study_progress(client: &APIClient) -> Operation<StudyProgress> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move { client.study_progress().await.map_err(FetchError::from) }
    })
}

pub fn quick_stats(client: &APIClient) -> Operation<QuickStats> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move { client.quick_stats().await.map_err(FetchError::from) }
    })
}

pub fn performance_graph(
    client: &APIClient,
) -> Operation<Vec<PerformanceGraphPoint>> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move { client.performance_graph().await.map_err(FetchError::from) }
    })
}

pub fn continue_learning(
    client: &APIClient,
) -> Operation<Vec<ContinueLearningSession>> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move { client.continue_learning().await.map_err(FetchError::from) }
    })
}

/// The dashboard's five panels, each with its own independent controller.
pub struct Dashboard {
    pub last_session: FetchController<LastStudySession, ()>,
    pub study_progress: FetchController<StudyProgress, ()>,
    pub quick_stats: FetchController<QuickStats, ()>,
    pub performance_graph: FetchController<Vec<PerformanceGraphPoint>, ()>,
    pub continue_learning: FetchController<Vec<ContinueLearningSession>, ()>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub last_session: Option<LastStudySession>,
    pub study_progress: Option<StudyProgress>,
    pub quick_stats: Option<QuickStats>,
    pub performance_graph: Option<Vec<PerformanceGraphPoint>>,
    pub continue_learning: Option<Vec<ContinueLearningSession>>,
    pub is_loading: bool,
    pub error: Option<FetchError>,
}

impl Dashboard {
    /// Start fetching every panel.
    pub fn new(client: &APIClient, spawner: &Spawner) -> Self {
        Self {
            last_session: FetchController::new(
                (),
                last_study_session(client),
                spawner.clone(),
            ),
            study_progress: FetchController::new(
                (),
                study_progress(client),
                spawner.clone(),
            ),
            quick_stats: FetchController::new(
                (),
                quick_stats(client),
                spawner.clone(),
            ),
            performance_graph: FetchController::new(
                (),
                performance_graph(client),
                spawner.clone(),
            ),
            continue_learning: FetchController::new(
                (),
                continue_learning(client),
                spawner.clone(),
            ),
        }
    }

    /// True while any panel is loading.
    pub fn is_loading(&self) -> bool {
        self.last_session.with_state(|s| s.loading)
            || self.study_progress.with_state(|s| s.loading)
            || self.quick_stats.with_state(|s| s.loading)
            || self.performance_graph.with_state(|s| s.loading)
            || self.continue_learning.with_state(|s| s.loading)
    }

    /// The first panel error, in panel order.
    pub fn error(&self) -> Option<FetchError> {
        self.last_session
            .with_state(|s| s.error.clone())
            .or_else(|| self.study_progress.with_state(|s| s.error.clone()))
            .or_else(|| self.quick_stats.with_state(|s| s.error.clone()))
            .or_else(|| self.performance_graph.with_state(|s| s.error.clone()))
            .or_else(|| self.continue_learning.with_state(|s| s.error.clone()))
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            last_session: self.last_session.state().data,
            study_progress: self.study_progress.state().data,
            quick_stats: self.quick_stats.state().data,
            performance_graph: self.performance_graph.state().data,
            continue_learning: self.continue_learning.state().data,
            is_loading: self.is_loading(),
            error: self.error(),
        }
    }

    /// Refetch every panel, e.g. after a reset has completed.
    pub fn refresh_all(&self) {
        tracing::debug!("refreshing all dashboard panels");
        self.last_session.refresh();
        self.study_progress.refresh();
        self.quick_stats.refresh();
        self.performance_graph.refresh();
        self.continue_learning.refresh();
    }

    /// Run `listener` after a state change on any panel.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        let listener = Rc::new(listener);
        {
            let listener = listener.clone();
            self.last_session.subscribe(move |_| listener());
        }
        {
            let listener = listener.clone();
            self.study_progress.subscribe(move |_| listener());
        }
        {
            let listener = listener.clone();
            self.quick_stats.subscribe(move |_| listener());
        }
        {
            let listener = listener.clone();
            self.performance_graph.subscribe(move |_| listener());
        }
        self.continue_learning.subscribe(move |_| listener());
    }

    pub fn deactivate(&self) {
        self.last_session.deactivate();
        self.study_progress.deactivate();
        self.quick_stats.deactivate();
        self.performance_graph.deactivate();
        self.continue_learning.deactivate();
    }
}
