//! Shared test helpers: a mock JobBoard backend and a wired client stack.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use jobboard_auth::{FileKeyValueStore, SessionStore};
use jobboard_client::ApiClient;
use jobboard_core::config::ApiConfig;
use jobboard_core::traits::KeyValueStore;

/// Token issued to the employer account.
pub const EMPLOYER_TOKEN: &str = "employer-token";
/// Token issued to the job seeker account.
pub const SEEKER_TOKEN: &str = "seeker-token";
/// Password accepted for every account.
pub const PASSWORD: &str = "secret";

/// Mutable backend state.
#[derive(Default)]
pub struct BackendState {
    /// Stored job documents.
    pub jobs: Mutex<Vec<Value>>,
    /// Stored application documents.
    pub applications: Mutex<Vec<Value>>,
    /// Number of `GET /api/jobs` calls.
    pub list_calls: AtomicUsize,
}

type Shared = Arc<BackendState>;

fn token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"success": false, "message": "Invalid token"})),
    )
        .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    if body["password"] != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "error": "Invalid email or password"})),
        )
            .into_response();
    }
    let (token, role, company) = if email.starts_with("boss") {
        (EMPLOYER_TOKEN, "employer", Some("Acme"))
    } else {
        (SEEKER_TOKEN, "user", None)
    };
    Json(json!({
        "success": true,
        "token": token,
        "user": {"_id": format!("id-{email}"), "email": email, "role": role, "companyName": company}
    }))
    .into_response()
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "User already exists"})),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(json!({"message": "User registered"}))).into_response()
}

async fn list_jobs(State(state): State<Shared>) -> Json<Value> {
    state.list_calls.fetch_add(1, Ordering::SeqCst);
    let jobs = state.jobs.lock().unwrap().clone();
    Json(json!({"success": true, "data": jobs}))
}

async fn get_job(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let jobs = state.jobs.lock().unwrap();
    match jobs.iter().find(|j| j["_id"] == id.as_str()) {
        Some(job) => Json(json!({"success": true, "data": job})).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Job not found"})),
        )
            .into_response(),
    }
}

async fn create_job(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    if token(&headers) != Some(EMPLOYER_TOKEN) {
        return unauthorized();
    }
    let mut jobs = state.jobs.lock().unwrap();
    body["_id"] = json!(format!("new-{}", jobs.len() + 1));
    body["postedBy"] = json!("id-boss@example.com");
    body["createdAt"] = json!("2030-01-01T00:00:00.000Z");
    jobs.push(body.clone());
    (StatusCode::CREATED, Json(json!({"success": true, "data": body}))).into_response()
}

async fn delete_job(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if token(&headers) != Some(EMPLOYER_TOKEN) {
        return unauthorized();
    }
    state.jobs.lock().unwrap().retain(|j| j["_id"] != id.as_str());
    Json(json!({"success": true})).into_response()
}

async fn my_jobs(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if token(&headers) != Some(EMPLOYER_TOKEN) {
        return unauthorized();
    }
    let mine: Vec<Value> = state
        .jobs
        .lock()
        .unwrap()
        .iter()
        .filter(|j| j["postedBy"] == "id-boss@example.com")
        .cloned()
        .collect();
    Json(json!({"success": true, "data": mine})).into_response()
}

async fn save_jobs(State(state): State<Shared>, Json(docs): Json<Vec<Value>>) -> Json<Value> {
    let count = docs.len();
    state.jobs.lock().unwrap().extend(docs);
    Json(json!({"message": format!("{count} jobs saved")}))
}

async fn submit_application(State(state): State<Shared>, mut multipart: Multipart) -> Response {
    let mut doc = serde_json::Map::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if name == "resume" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            doc.insert("resume".into(), json!(format!("uploads\\resumes\\{file_name}")));
        } else {
            doc.insert(name, json!(field.text().await.unwrap_or_default()));
        }
    }
    let mut applications = state.applications.lock().unwrap();
    doc.insert("_id".into(), json!(format!("app-{}", applications.len() + 1)));
    doc.insert("status".into(), json!("pending"));
    let doc = Value::Object(doc);
    applications.push(doc.clone());
    (StatusCode::CREATED, Json(json!({"success": true, "data": doc}))).into_response()
}

async fn job_applications(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(job_id): Path<String>,
) -> Response {
    if token(&headers) != Some(EMPLOYER_TOKEN) {
        return unauthorized();
    }
    let apps: Vec<Value> = state
        .applications
        .lock()
        .unwrap()
        .iter()
        .filter(|a| a["jobId"] == job_id.as_str())
        .cloned()
        .collect();
    Json(json!({"applications": apps})).into_response()
}

async fn update_status(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if token(&headers) != Some(EMPLOYER_TOKEN) {
        return unauthorized();
    }
    let mut apps = state.applications.lock().unwrap();
    match apps.iter_mut().find(|a| a["_id"] == id.as_str()) {
        Some(app) => {
            app["status"] = body["status"].clone();
            Json(app.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn download(headers: HeaderMap, Path(filename): Path<String>) -> Response {
    if token(&headers) != Some(EMPLOYER_TOKEN) {
        return unauthorized();
    }
    format!("%PDF resume {filename}").into_response()
}

/// A running mock backend.
pub struct MockBackend {
    /// Base URL, e.g. `http://127.0.0.1:4321`.
    pub base_url: String,
    /// Backend state.
    pub state: Shared,
}

impl MockBackend {
    /// Start a backend seeded with `jobs`.
    pub async fn start(jobs: Vec<Value>) -> Self {
        let state: Shared = Arc::new(BackendState::default());
        *state.jobs.lock().unwrap() = jobs;

        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/register", post(register))
            .route("/api/jobs", get(list_jobs).post(create_job))
            .route("/api/jobs/{id}", get(get_job).delete(delete_job))
            .route("/api/my-jobs", get(my_jobs))
            .route("/api/save-jobs", post(save_jobs))
            .route("/api/applications", post(submit_application))
            .route("/api/applications/job/{job_id}", get(job_applications))
            .route("/api/applications/{id}/status", patch(update_status))
            .route(
                "/api/applications/resume/download/{filename}",
                get(download),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }
}

/// A job document as the backend stores it.
pub fn job_doc(id: &str, title: &str, types: &[&str], locations: &[&str], created: &str) -> Value {
    json!({
        "_id": id,
        "jobTitle": title,
        "companyName": "Acme",
        "employmentType": types,
        "workMode": ["Hybrid"],
        "jobLocation": locations,
        "minPrice": "4",
        "maxPrice": "8",
        "experience": {"min": "1", "max": "3"},
        "description": format!("{title} role"),
        "createdAt": created,
        "status": "active"
    })
}

/// The standard seed list.
pub fn seed_jobs() -> Vec<Value> {
    vec![
        job_doc("j1", "Backend Engineer", &["Full-time"], &["Mumbai"], "2024-03-01T09:00:00.000Z"),
        job_doc("j2", "Designer", &["Contract"], &["Pune"], "2024-03-05T09:00:00.000Z"),
        job_doc("j3", "Data Engineer", &["Internship"], &["Navi Mumbai", "Delhi"], "2024-03-03T09:00:00.000Z"),
    ]
}

/// Client stack wired to a mock backend with file-backed session storage.
pub struct TestApp {
    /// The mock backend.
    pub backend: MockBackend,
    /// HTTP client.
    pub api: Arc<ApiClient>,
    /// Session store.
    pub sessions: Arc<SessionStore>,
    /// Session file path.
    pub session_path: std::path::PathBuf,
    /// Keeps the temp directory alive.
    pub dir: tempfile::TempDir,
}

impl TestApp {
    /// Start a backend with the standard seed and wire the client stack.
    pub async fn new() -> Self {
        Self::with_jobs(seed_jobs()).await
    }

    /// Start a backend seeded with `jobs`.
    pub async fn with_jobs(jobs: Vec<Value>) -> Self {
        let backend = MockBackend::start(jobs).await;
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("session.json");
        let (api, sessions) = Self::stack(&backend.base_url, &session_path);
        Self {
            backend,
            api,
            sessions,
            session_path,
            dir,
        }
    }

    /// A fresh client stack sharing this app's session file, as a new
    /// process would build it.
    pub fn restart(&self) -> (Arc<ApiClient>, Arc<SessionStore>) {
        Self::stack(&self.backend.base_url, &self.session_path)
    }

    fn stack(base_url: &str, session_path: &std::path::Path) -> (Arc<ApiClient>, Arc<SessionStore>) {
        let api = Arc::new(
            ApiClient::new(&ApiConfig {
                base_url: base_url.to_string(),
                ..ApiConfig::default()
            })
            .unwrap(),
        );
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(session_path));
        let sessions = Arc::new(SessionStore::new(storage, api.clone()));
        (api, sessions)
    }
}
