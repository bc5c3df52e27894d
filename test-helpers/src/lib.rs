pub mod mock;

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use payloads::{
    DEFAULT_PER_PAGE, GroupId, StudyActivityId, StudySessionId, WordId,
    requests,
};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

use crate::mock::{
    Dataset, group_sort_key, paginate, session_sort_key, sort_by_column,
    word_sort_key,
};

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    pub faults: Faults,
    pub state: web::Data<MockState>,
}

impl TestApp {
    /// Lock the backend's dataset, e.g. to assert on or tweak it directly.
    pub fn data(&self) -> MutexGuard<'_, Dataset> {
        self.state.data()
    }
}

pub struct MockConfig {
    /// set to "127.0.0.1" for tests
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// page size used when the request does not send `per_page`
    pub per_page: u32,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".into(),
            port: 0,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Shared state of a running mock backend.
pub struct MockState {
    data: Mutex<Dataset>,
    faults: Faults,
    per_page: u32,
}

impl MockState {
    pub fn data(&self) -> MutexGuard<'_, Dataset> {
        // A panicking handler poisons the lock; the data is still usable.
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Artificial latency and failures, keyed by request path
/// (e.g. `/api/words`).
#[derive(Clone, Default)]
pub struct Faults {
    inner: Arc<Mutex<FaultsInner>>,
}

#[derive(Default)]
struct FaultsInner {
    delays: Vec<(String, Option<u32>, Duration)>,
    failures: HashMap<String, (u16, String)>,
}

impl Faults {
    /// Delay responses for `path`, only for `page` when one is given.
    pub fn delay(&self, path: &str, page: Option<u32>, delay: Duration) {
        self.lock().delays.push((path.to_string(), page, delay));
    }

    /// Answer requests for `path` with `status` and a `message` body.
    pub fn fail(&self, path: &str, status: u16, message: &str) {
        self.lock()
            .failures
            .insert(path.to_string(), (status, message.to_string()));
    }

    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.delays.clear();
        inner.failures.clear();
    }

    fn lock(&self) -> MutexGuard<'_, FaultsInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Sleep for any configured delay, then return the configured failure,
    /// if any.
    async fn apply(
        &self,
        req: &HttpRequest,
        page: Option<u32>,
    ) -> Option<HttpResponse> {
        let (delay, failure) = {
            let inner = self.lock();
            let delay = inner
                .delays
                .iter()
                .find(|(path, p, _)| {
                    path == req.path() && (p.is_none() || *p == page)
                })
                .map(|(_, _, delay)| *delay);
            (delay, inner.failures.get(req.path()).cloned())
        };
        if let Some(delay) = delay {
            tracing::debug!(path = req.path(), ?page, ?delay, "delaying");
            actix_web::rt::time::sleep(delay).await;
        }
        let (status, message) = failure?;
        let status = actix_web::http::StatusCode::from_u16(status)
            .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        Some(HttpResponse::build(status).json(json!({ "message": message })))
    }
}

/// Query parameters of list endpoints. Parsed leniently like the real
/// backend: anything unparsable falls back to the defaults.
#[derive(Debug, Deserialize)]
struct ListParams {
    page: Option<String>,
    per_page: Option<String>,
    sort: Option<String>,
    direction: Option<String>,
}

impl ListParams {
    fn pagination(&self, default_per_page: u32) -> (u32, u32) {
        let page = self
            .page
            .as_deref()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(1);
        let per_page = self
            .per_page
            .as_deref()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(i64::from(default_per_page));
        let page = page.clamp(1, i64::from(u32::MAX)) as u32;
        let per_page = if (1..=1000).contains(&per_page) {
            per_page as u32
        } else {
            DEFAULT_PER_PAGE
        };
        (page, per_page)
    }

    fn descending(&self) -> bool {
        self.direction
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case("desc"))
    }
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": format!("{what} not found") }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}

async fn list_words(
    req: HttpRequest,
    state: web::Data<MockState>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let (page, per_page) = params.pagination(state.per_page);
    if let Some(response) = state.faults.apply(&req, Some(page)).await {
        return response;
    }
    let mut words = state.data().all_words();
    sort_by_column(
        &mut words,
        params.sort.as_deref(),
        params.descending(),
        word_sort_key,
    );
    HttpResponse::Ok().json(paginate(words, page, per_page))
}

async fn get_word(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<i64>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    match state.data().word_detail(WordId(path.into_inner())) {
        Some(word) => HttpResponse::Ok().json(word),
        None => not_found("Word"),
    }
}

async fn list_groups(
    req: HttpRequest,
    state: web::Data<MockState>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let (page, per_page) = params.pagination(state.per_page);
    if let Some(response) = state.faults.apply(&req, Some(page)).await {
        return response;
    }
    let mut groups = state.data().all_groups();
    sort_by_column(
        &mut groups,
        params.sort.as_deref(),
        params.descending(),
        group_sort_key,
    );
    HttpResponse::Ok().json(paginate(groups, page, per_page))
}

async fn get_group(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<i64>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    match state.data().group_detail(GroupId(path.into_inner())) {
        Some(group) => HttpResponse::Ok().json(group),
        None => not_found("Group"),
    }
}

async fn list_group_words(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<i64>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let (page, per_page) = params.pagination(state.per_page);
    if let Some(response) = state.faults.apply(&req, Some(page)).await {
        return response;
    }
    let Some(mut words) = state.data().group_words(GroupId(path.into_inner()))
    else {
        return not_found("Group");
    };
    sort_by_column(
        &mut words,
        params.sort.as_deref(),
        params.descending(),
        word_sort_key,
    );
    HttpResponse::Ok().json(paginate(words, page, per_page))
}

async fn list_group_study_sessions(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<i64>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let (page, per_page) = params.pagination(state.per_page);
    if let Some(response) = state.faults.apply(&req, Some(page)).await {
        return response;
    }
    let sessions =
        state.data().group_study_sessions(GroupId(path.into_inner()));
    HttpResponse::Ok().json(paginate(sessions, page, per_page))
}

async fn list_study_sessions(
    req: HttpRequest,
    state: web::Data<MockState>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let (page, per_page) = params.pagination(state.per_page);
    if let Some(response) = state.faults.apply(&req, Some(page)).await {
        return response;
    }
    let mut sessions = state.data().all_study_sessions();
    sort_by_column(
        &mut sessions,
        params.sort.as_deref(),
        params.descending(),
        session_sort_key,
    );
    HttpResponse::Ok().json(paginate(sessions, page, per_page))
}

async fn start_study_session(
    req: HttpRequest,
    state: web::Data<MockState>,
    body: web::Json<requests::StartStudySession>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    match state
        .data()
        .start_session(body.group_id, body.study_activity_id)
    {
        Some(session) => HttpResponse::Ok().json(session),
        None => HttpResponse::BadRequest()
            .json(json!({ "error": "Unknown group or study activity" })),
    }
}

async fn get_study_session(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<i64>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    match state.data().study_session(StudySessionId(path.into_inner())) {
        Some(session) => HttpResponse::Ok().json(session),
        None => not_found("Study session"),
    }
}

async fn list_study_session_words(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<i64>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let (page, per_page) = params.pagination(state.per_page);
    if let Some(response) = state.faults.apply(&req, Some(page)).await {
        return response;
    }
    let mut words = state
        .data()
        .study_session_words(StudySessionId(path.into_inner()));
    sort_by_column(
        &mut words,
        params.sort.as_deref(),
        params.descending(),
        word_sort_key,
    );
    HttpResponse::Ok().json(paginate(words, page, per_page))
}

async fn record_word_review(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<(i64, i64)>,
    body: web::Json<requests::ReviewWord>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    let (session_id, word_id) = path.into_inner();
    match state.data().record_review(
        StudySessionId(session_id),
        WordId(word_id),
        body.correct,
    ) {
        Some(review) => HttpResponse::Ok().json(review),
        None => not_found("Study session or word"),
    }
}

async fn reset_history(
    req: HttpRequest,
    state: web::Data<MockState>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    state.data().reset_history();
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "History reset successfully",
    }))
}

async fn continue_learning(
    req: HttpRequest,
    state: web::Data<MockState>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    HttpResponse::Ok().json(state.data().continue_learning())
}

async fn list_study_activities(
    req: HttpRequest,
    state: web::Data<MockState>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    HttpResponse::Ok().json(state.data().activities.clone())
}

async fn get_study_activity(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<i64>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    match state.data().activity(StudyActivityId(path.into_inner())) {
        Some(activity) => HttpResponse::Ok().json(activity),
        None => not_found("Study activity"),
    }
}

async fn get_study_activity_launch(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<i64>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    match state
        .data()
        .activity_launch(StudyActivityId(path.into_inner()))
    {
        Some(launch) => HttpResponse::Ok().json(launch),
        None => not_found("Study activity"),
    }
}

async fn list_study_activity_sessions(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<i64>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let (page, per_page) = params.pagination(state.per_page);
    if let Some(response) = state.faults.apply(&req, Some(page)).await {
        return response;
    }
    let sessions = state
        .data()
        .activity_sessions(StudyActivityId(path.into_inner()));
    HttpResponse::Ok().json(paginate(sessions, page, per_page))
}

async fn last_study_session(
    req: HttpRequest,
    state: web::Data<MockState>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    HttpResponse::Ok().json(state.data().last_study_session())
}

async fn study_progress(
    req: HttpRequest,
    state: web::Data<MockState>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    HttpResponse::Ok().json(state.data().study_progress())
}

async fn quick_stats(
    req: HttpRequest,
    state: web::Data<MockState>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    HttpResponse::Ok().json(state.data().quick_stats())
}

async fn performance_graph(
    req: HttpRequest,
    state: web::Data<MockState>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    HttpResponse::Ok().json(state.data().performance_graph())
}

async fn full_reset(
    req: HttpRequest,
    state: web::Data<MockState>,
) -> HttpResponse {
    if let Some(response) = state.faults.apply(&req, None).await {
        return response;
    }
    *state.data() = Dataset::seeded();
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Full database reset completed successfully",
    }))
}

/// Routes of the portal backend. Fixed paths come before `{id}` paths they
/// would otherwise collide with.
fn api_services() -> actix_web::Scope {
    web::scope("/api")
        .route("/health", web::get().to(health))
        .route("/words", web::get().to(list_words))
        .route("/words/{id}", web::get().to(get_word))
        .route("/groups", web::get().to(list_groups))
        .route("/groups/{id}", web::get().to(get_group))
        .route("/groups/{id}/words", web::get().to(list_group_words))
        .route(
            "/groups/{id}/study_sessions",
            web::get().to(list_group_study_sessions),
        )
        .route("/study_sessions", web::get().to(list_study_sessions))
        .route("/study_sessions", web::post().to(start_study_session))
        .route(
            "/study_sessions/reset_history",
            web::post().to(reset_history),
        )
        .route(
            "/study_sessions/continue_learning",
            web::get().to(continue_learning),
        )
        .route("/study_sessions/{id}", web::get().to(get_study_session))
        .route(
            "/study_sessions/{id}/words",
            web::get().to(list_study_session_words),
        )
        .route(
            "/study_sessions/{id}/words/{word_id}/review",
            web::post().to(record_word_review),
        )
        .route("/study_activities", web::get().to(list_study_activities))
        .route("/study_activities/{id}", web::get().to(get_study_activity))
        .route(
            "/study_activities/{id}/launch",
            web::get().to(get_study_activity_launch),
        )
        .route(
            "/study_activities/{id}/study_sessions",
            web::get().to(list_study_activity_sessions),
        )
        .route(
            "/dashboard/last_study_session",
            web::get().to(last_study_session),
        )
        .route("/dashboard/study_progress", web::get().to(study_progress))
        .route("/dashboard/quick_stats", web::get().to(quick_stats))
        .route(
            "/dashboard/performance_graph",
            web::get().to(performance_graph),
        )
        .route("/dashboard/full_reset", web::post().to(full_reset))
}

/// Build the mock server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut MockConfig,
    state: web::Data<MockState>,
) -> std::io::Result<Server> {
    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        App::new().app_data(state.clone()).service(api_services())
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok(server)
}

pub fn get_subscriber(env_filter: String) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let stderr = fmt::Layer::new().with_writer(std::io::stderr).pretty();
    Registry::default().with(env_filter).with(stderr)
}

pub async fn spawn_app_with(mut config: MockConfig) -> TestApp {
    let subscriber = get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let faults = Faults::default();
    let state = web::Data::new(MockState {
        data: Mutex::new(Dataset::seeded()),
        faults: faults.clone(),
        per_page: config.per_page,
    });

    let server = build(&mut config, state.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient::new(format!(
            "http://127.0.0.1:{}",
            config.port
        )),
        faults,
        state,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(MockConfig::default()).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
