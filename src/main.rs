mod config;
mod knowledge;
mod web;

use actix_files as fs;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use log::{error, info};
use tera::Tera;

use config::{Settings, ThinkDelay};
use knowledge::KnowledgeBase;
use web::routes;

// App state structure
pub struct AppState {
    tera: Tera,
    knowledge: &'static KnowledgeBase,
    think_delay: ThinkDelay,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Starting Data Engineering Chatbot API");

    let knowledge = KnowledgeBase::builtin();
    info!(
        "Knowledge base loaded with {} topics (fallback: {})",
        knowledge.topics().len(),
        knowledge.fallback().id
    );

    // Initialize template engine
    let mut tera = match Tera::new(&settings.template_glob) {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    let app_state = Data::new(AppState {
        tera,
        knowledge,
        think_delay: settings.think_delay,
    });

    info!("Available endpoints:");
    info!("  GET  /api/health          - Health check");
    info!("  POST /api/chat            - Send message");
    info!("  GET  /api/topics          - Get all topics");
    info!("  POST /api/suggest         - Get question suggestions");
    info!("  POST /api/contact         - Submit contact form");
    info!("  POST /api/analytics       - Track analytics");
    info!(
        "Think delay {:?}..={:?}, listening on http://{}",
        settings.think_delay.min(),
        settings.think_delay.max(),
        settings.bind
    );

    let static_dir = settings.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(routes::cors())
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", &static_dir))
    })
    .bind(settings.bind)?
    .run()
    .await
}
