//! Shared helpers for in-file tests: a scratch database, a throwaway
//! content-server double bound to 127.0.0.1:0, and a base URL that is
//! guaranteed to refuse connections.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_multipart::Multipart;
use actix_web::{web, App, HttpResponse, HttpServer};
use futures::TryStreamExt;
use serde_json::Value;

use crate::config::ContentServerConfig;
use crate::content_server::ContentServerClient;
use crate::database::Database;
use crate::storage::Storage;

#[derive(Default)]
struct RemoteState {
    files: Mutex<HashMap<String, Value>>,
    workspaces: Mutex<Vec<Value>>,
    children: Mutex<HashMap<String, Vec<Value>>>,
}

#[derive(serde::Deserialize)]
struct PathQuery {
    path: String,
}

fn merge_into(target: &mut Value, patch: &Value) {
    if let (Some(target_map), Some(patch_map)) = (target.as_object_mut(), patch.as_object()) {
        for (key, value) in patch_map {
            target_map.insert(key.clone(), value.clone());
        }
    }
}

async fn download_file(
    query: web::Query<PathQuery>,
    state: web::Data<RemoteState>,
) -> HttpResponse {
    match state.files.lock().unwrap().get(&query.path) {
        Some(document) => HttpResponse::Ok().json(document),
        None => HttpResponse::NotFound().finish(),
    }
}

async fn upload_file(
    query: web::Query<PathQuery>,
    mut payload: Multipart,
    state: web::Data<RemoteState>,
) -> HttpResponse {
    while let Ok(Some(mut field)) = payload.try_next().await {
        let file_name = field
            .content_disposition()
            .get_filename()
            .unwrap_or("file.json")
            .to_string();

        let mut bytes = Vec::new();
        while let Ok(Some(chunk)) = field.try_next().await {
            bytes.extend_from_slice(&chunk);
        }

        let document: Value = match serde_json::from_slice(&bytes) {
            Ok(document) => document,
            Err(_) => return HttpResponse::BadRequest().finish(),
        };

        let key = format!("{}/{}", query.path, file_name);
        state.files.lock().unwrap().insert(key, document);
    }

    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}

async fn list_workspaces(state: web::Data<RemoteState>) -> HttpResponse {
    let workspaces = state.workspaces.lock().unwrap();
    HttpResponse::Ok().json(&*workspaces)
}

async fn create_workspace(body: web::Json<Value>, state: web::Data<RemoteState>) -> HttpResponse {
    let workspace = body.into_inner();
    state.workspaces.lock().unwrap().push(workspace.clone());
    HttpResponse::Ok().json(workspace)
}

async fn get_workspace(path: web::Path<String>, state: web::Data<RemoteState>) -> HttpResponse {
    let id = path.into_inner();
    let workspaces = state.workspaces.lock().unwrap();
    match workspaces.iter().find(|w| w["id"] == Value::from(id.clone())) {
        Some(workspace) => HttpResponse::Ok().json(workspace),
        None => HttpResponse::NotFound().finish(),
    }
}

async fn update_workspace(
    path: web::Path<String>,
    body: web::Json<Value>,
    state: web::Data<RemoteState>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut workspaces = state.workspaces.lock().unwrap();
    match workspaces
        .iter_mut()
        .find(|w| w["id"] == Value::from(id.clone()))
    {
        Some(workspace) => {
            merge_into(workspace, &body.into_inner());
            HttpResponse::Ok().json(&*workspace)
        }
        None => HttpResponse::NotFound().finish(),
    }
}

async fn delete_workspace(path: web::Path<String>, state: web::Data<RemoteState>) -> HttpResponse {
    let id = path.into_inner();
    let mut workspaces = state.workspaces.lock().unwrap();
    workspaces.retain(|w| w["id"] != Value::from(id.clone()));
    HttpResponse::Ok().finish()
}

async fn list_children(
    path: web::Path<(String, String)>,
    state: web::Data<RemoteState>,
) -> HttpResponse {
    let (workspace_id, kind) = path.into_inner();
    let children = state.children.lock().unwrap();
    let list = children
        .get(&format!("{}/{}", workspace_id, kind))
        .cloned()
        .unwrap_or_default();
    HttpResponse::Ok().json(list)
}

async fn create_child(
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
    state: web::Data<RemoteState>,
) -> HttpResponse {
    let (workspace_id, kind) = path.into_inner();
    let child = body.into_inner();
    state
        .children
        .lock()
        .unwrap()
        .entry(format!("{}/{}", workspace_id, kind))
        .or_default()
        .push(child.clone());
    HttpResponse::Ok().json(child)
}

async fn update_child(
    path: web::Path<(String, String, String)>,
    body: web::Json<Value>,
    state: web::Data<RemoteState>,
) -> HttpResponse {
    let (workspace_id, kind, child_id) = path.into_inner();
    let mut children = state.children.lock().unwrap();
    let list = match children.get_mut(&format!("{}/{}", workspace_id, kind)) {
        Some(list) => list,
        None => return HttpResponse::NotFound().finish(),
    };
    match list
        .iter_mut()
        .find(|c| c["id"] == Value::from(child_id.clone()))
    {
        Some(child) => {
            merge_into(child, &body.into_inner());
            HttpResponse::Ok().json(&*child)
        }
        None => HttpResponse::NotFound().finish(),
    }
}

async fn delete_child(
    path: web::Path<(String, String, String)>,
    state: web::Data<RemoteState>,
) -> HttpResponse {
    let (workspace_id, kind, child_id) = path.into_inner();
    let mut children = state.children.lock().unwrap();
    if let Some(list) = children.get_mut(&format!("{}/{}", workspace_id, kind)) {
        list.retain(|c| c["id"] != Value::from(child_id.clone()));
    }
    HttpResponse::Ok().finish()
}

/// Start a content-server double on a random port and return its base URL.
/// The server lives until the test runtime shuts down.
pub(crate) async fn spawn_content_server() -> String {
    let state = web::Data::new(RemoteState::default());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/api/files/download", web::get().to(download_file))
            .route("/api/files/upload", web::post().to(upload_file))
            .route("/api/workspaces", web::get().to(list_workspaces))
            .route("/api/workspaces", web::post().to(create_workspace))
            .route("/api/workspaces/{id}", web::get().to(get_workspace))
            .route("/api/workspaces/{id}", web::put().to(update_workspace))
            .route("/api/workspaces/{id}", web::delete().to(delete_workspace))
            .route("/api/workspaces/{id}/{kind}", web::get().to(list_children))
            .route("/api/workspaces/{id}/{kind}", web::post().to(create_child))
            .route(
                "/api/workspaces/{id}/{kind}/{child_id}",
                web::put().to(update_child),
            )
            .route(
                "/api/workspaces/{id}/{kind}/{child_id}",
                web::delete().to(delete_child),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    format!("http://{}", addr)
}

/// Bind then drop a listener so the port is known to refuse connections
pub(crate) fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub(crate) fn scratch_database() -> (Arc<Database>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(&dir.path().join("opsdesk-test.db")).unwrap();
    (Arc::new(db), dir)
}

pub(crate) fn content_config_for(
    base_url: &str,
    data_dir: &std::path::Path,
) -> ContentServerConfig {
    ContentServerConfig {
        base_url: base_url.to_string(),
        username: "opsdesk".to_string(),
        password: "opsdesk-sync".to_string(),
        data_dir: data_dir.display().to_string(),
    }
}

pub(crate) fn content_client_for(base_url: &str) -> ContentServerClient {
    ContentServerClient::new(&content_config_for(base_url, &std::env::temp_dir()))
}

pub(crate) fn storage_with(base_url: &str) -> (Storage, tempfile::TempDir) {
    let (db, dir) = scratch_database();
    let config = content_config_for(base_url, &dir.path().join("server_data"));
    (Storage::new(db, &config), dir)
}
