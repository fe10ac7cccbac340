use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

use opsdesk_api::{config, database, handlers, Storage};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "opsdesk api"
    }))
}

#[get("/health")]
async fn health(storage: web::Data<Arc<Storage>>) -> impl Responder {
    // Test database connection
    match storage.database().connection.lock() {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected"
        })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "unhealthy",
            "database": "disconnected"
        })),
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("opsdesk-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Load config
    let (config, config_path) = config::ApiConfig::load().expect("Failed to load config");
    tracing::info!("Loaded config from {:?}", config_path);

    // Initialize the relational database
    let db_path = database::get_db_path().expect("Could not resolve database path");
    let db = Arc::new(database::Database::new(&db_path).expect("Failed to initialize database"));
    tracing::info!("Database initialized at {:?}", db_path);

    // Build the storage provider once and hand it to every handler
    let content_config = config.content_server.clone().unwrap_or_default();
    let storage = Arc::new(Storage::new(db, &content_config));
    tracing::info!(
        "Content server configured at {} (fallback dir {})",
        content_config.base_url,
        content_config.data_dir
    );

    // Get server config or use defaults
    let (host, port) = if let Some(server_config) = &config.server {
        (server_config.host.clone(), server_config.port)
    } else {
        ("127.0.0.1".to_string(), 8080)
    };

    tracing::info!("Server will listen on {}:{}", host, port);

    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(storage.clone()))
            .service(hello)
            .service(health)
            .route("/api/users", web::post().to(handlers::users::create_user))
            .route("/api/users", web::get().to(handlers::users::list_users))
            .route("/api/users/{id}", web::get().to(handlers::users::get_user))
            .route("/api/users/{id}", web::put().to(handlers::users::update_user))
            .route("/api/users/{id}", web::delete().to(handlers::users::delete_user))
            .route("/api/clients", web::post().to(handlers::clients::create_client))
            .route("/api/clients", web::get().to(handlers::clients::list_clients))
            .route("/api/clients/{id}", web::get().to(handlers::clients::get_client))
            .route("/api/clients/{id}", web::put().to(handlers::clients::update_client))
            .route("/api/clients/{id}", web::delete().to(handlers::clients::delete_client))
            .route("/api/clients/{id}/contacts", web::post().to(handlers::clients::create_contact))
            .route("/api/clients/{id}/contacts", web::get().to(handlers::clients::list_contacts))
            .route("/api/clients/{client_id}/contacts/{id}", web::put().to(handlers::clients::update_contact))
            .route("/api/clients/{client_id}/contacts/{id}", web::delete().to(handlers::clients::delete_contact))
            .route("/api/clients/{client_id}/contacts/{id}/primary", web::post().to(handlers::clients::set_primary_contact))
            .route("/api/projects", web::post().to(handlers::projects::create_project))
            .route("/api/projects", web::get().to(handlers::projects::list_projects))
            .route("/api/projects/{id}", web::get().to(handlers::projects::get_project))
            .route("/api/projects/{id}", web::put().to(handlers::projects::update_project))
            .route("/api/projects/{id}", web::delete().to(handlers::projects::delete_project))
            .route("/api/projects/{id}/tasks", web::get().to(handlers::projects::list_project_tasks))
            .route("/api/projects/{id}/parts", web::post().to(handlers::projects::create_part))
            .route("/api/projects/{id}/parts", web::get().to(handlers::projects::list_parts))
            .route("/api/projects/{project_id}/parts/{id}", web::put().to(handlers::projects::update_part))
            .route("/api/projects/{project_id}/parts/{id}", web::delete().to(handlers::projects::delete_part))
            .route("/api/tasks", web::post().to(handlers::tasks::create_task))
            .route("/api/tasks", web::get().to(handlers::tasks::list_tasks))
            .route("/api/tasks/{id}", web::get().to(handlers::tasks::get_task))
            .route("/api/tasks/{id}", web::put().to(handlers::tasks::update_task))
            .route("/api/tasks/{id}", web::delete().to(handlers::tasks::delete_task))
            .route("/api/time-entries", web::post().to(handlers::time_entries::create_time_entry))
            .route("/api/time-entries", web::get().to(handlers::time_entries::list_time_entries))
            .route("/api/time-entries/{id}", web::get().to(handlers::time_entries::get_time_entry))
            .route("/api/time-entries/{id}", web::put().to(handlers::time_entries::update_time_entry))
            .route("/api/time-entries/{id}", web::delete().to(handlers::time_entries::delete_time_entry))
            .route("/api/invoices", web::post().to(handlers::invoices::create_invoice))
            .route("/api/invoices", web::get().to(handlers::invoices::list_invoices))
            .route("/api/invoices/{id}", web::get().to(handlers::invoices::get_invoice))
            .route("/api/invoices/{id}", web::put().to(handlers::invoices::update_invoice))
            .route("/api/invoices/{id}", web::delete().to(handlers::invoices::delete_invoice))
            .route("/api/invoices/{id}/quickbooks", web::post().to(handlers::invoices::mark_invoice_synced))
            .route("/api/quotes", web::post().to(handlers::quotes::create_quote))
            .route("/api/quotes", web::get().to(handlers::quotes::list_quotes))
            .route("/api/quotes/{id}", web::get().to(handlers::quotes::get_quote))
            .route("/api/quotes/{id}", web::put().to(handlers::quotes::update_quote))
            .route("/api/quotes/{id}", web::delete().to(handlers::quotes::delete_quote))
            .route("/api/employees", web::post().to(handlers::employees::create_employee))
            .route("/api/employees", web::get().to(handlers::employees::list_employees))
            .route("/api/employees/{id}", web::get().to(handlers::employees::get_employee))
            .route("/api/employees/{id}", web::put().to(handlers::employees::update_employee))
            .route("/api/employees/{id}", web::delete().to(handlers::employees::delete_employee))
            .route("/api/departments", web::get().to(handlers::employees::list_departments))
            .route("/api/equipment", web::post().to(handlers::equipment::create_equipment))
            .route("/api/equipment", web::get().to(handlers::equipment::list_equipment))
            .route("/api/equipment/{id}", web::get().to(handlers::equipment::get_equipment))
            .route("/api/equipment/{id}", web::put().to(handlers::equipment::update_equipment))
            .route("/api/equipment/{id}", web::delete().to(handlers::equipment::delete_equipment))
            .route("/api/workspaces", web::post().to(handlers::workspaces::create_workspace))
            .route("/api/workspaces", web::get().to(handlers::workspaces::list_workspaces))
            .route("/api/workspaces/{id}", web::get().to(handlers::workspaces::get_workspace))
            .route("/api/workspaces/{id}", web::put().to(handlers::workspaces::update_workspace))
            .route("/api/workspaces/{id}", web::delete().to(handlers::workspaces::delete_workspace))
            .route("/api/workspaces/{id}/categories", web::get().to(handlers::workspaces::list_categories))
            .route("/api/workspaces/{id}/categories", web::post().to(handlers::workspaces::create_category))
            .route("/api/workspaces/{workspace_id}/categories/{id}", web::put().to(handlers::workspaces::update_category))
            .route("/api/workspaces/{workspace_id}/categories/{id}", web::delete().to(handlers::workspaces::delete_category))
            .route("/api/workspaces/{id}/projects", web::get().to(handlers::workspaces::list_projects))
            .route("/api/workspaces/{id}/projects", web::post().to(handlers::workspaces::create_project))
            .route("/api/workspaces/{workspace_id}/projects/{id}", web::put().to(handlers::workspaces::update_project))
            .route("/api/workspaces/{workspace_id}/projects/{id}", web::delete().to(handlers::workspaces::delete_project))
            .route("/api/workspaces/{id}/tasks", web::get().to(handlers::workspaces::list_tasks))
            .route("/api/workspaces/{id}/tasks", web::post().to(handlers::workspaces::create_task))
            .route("/api/workspaces/{workspace_id}/tasks/{id}", web::put().to(handlers::workspaces::update_task))
            .route("/api/workspaces/{workspace_id}/tasks/{id}", web::delete().to(handlers::workspaces::delete_task))
            .route("/api/settings/category-colors", web::get().to(handlers::colors::get_category_colors))
            .route("/api/settings/category-colors", web::post().to(handlers::colors::set_category_color))
            .route("/api/settings/status-colors", web::get().to(handlers::colors::get_status_colors))
            .route("/api/settings/status-colors", web::post().to(handlers::colors::set_status_color))
            .route("/api/settings/priority-colors", web::get().to(handlers::colors::get_priority_colors))
            .route("/api/settings/priority-colors", web::post().to(handlers::colors::set_priority_color))
            .route("/api/settings/category-positions", web::get().to(handlers::colors::get_category_positions))
            .route("/api/settings/category-positions", web::post().to(handlers::colors::set_category_position))
    })
    .bind((host.as_str(), port))?
    .run();

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }

        tracing::info!("Ctrl+C received, shutting down...");
        handle.stop(true).await;
    });

    println!("Starting server on {}:{}", host, port);

    server.await
}
