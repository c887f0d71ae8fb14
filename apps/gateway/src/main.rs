use actix_web::{web, App, HttpServer};
use gateway::middleware::cors::cors_middleware;
use gateway::middleware::request_trace::RequestTrace;
use gateway::middleware::security_headers::SecurityHeaders;
use gateway::middleware::structured_logger::StructuredLogger;
use gateway::routes;
use gateway::services::origin::OriginClient;
use gateway::state::app_state::AppState;
use gateway::state::security_config::SecurityConfig;
use gateway::OriginConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("GATEWAY_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ GATEWAY_PORT must be a valid port number");
            std::process::exit(1);
        });

    let gate_secret = match std::env::var("GATE_SECRET") {
        Ok(secret) if !secret.trim().is_empty() => secret,
        _ => {
            eprintln!("❌ GATE_SECRET must be set");
            std::process::exit(1);
        }
    };

    let origin_config = match OriginConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Origin configuration error: {e}");
            std::process::exit(1);
        }
    };

    let origin = match OriginClient::new(origin_config) {
        Ok(origin) => origin,
        Err(e) => {
            eprintln!("❌ Failed to build origin client: {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Starting HFW Edge Gateway on http://{}:{}", host, port);

    let app_state = AppState::new(SecurityConfig::new(gate_secret.as_bytes()), origin);
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(SecurityHeaders)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
