use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::{debug, error, info};
use serde::Serialize;
use serde_json::{json, Value};
use tera::Context;

use crate::web::error::ApiError;
use crate::web::models::{
    ChatRequest, ChatResponse, ContactRequest, ContactResponse, SuggestRequest, SuggestResponse,
    TopicSummary, TopicsResponse, DEFAULT_SESSION_ID,
};
use crate::AppState;

const CONTACT_REQUIRED: &[&str] = &["name", "email", "company", "message"];

#[derive(Serialize)]
struct WidgetTopic {
    id: &'static str,
    prompt: &'static str,
}

// Demo chat widget page
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let topics: Vec<WidgetTopic> = data
        .knowledge
        .topics()
        .iter()
        .map(|t| WidgetTopic {
            id: t.id,
            prompt: t.quick_replies.first().copied().unwrap_or(t.id),
        })
        .collect();

    let mut context = Context::new();
    context.insert("topics", &topics);
    context.insert("version", env!("CARGO_PKG_VERSION"));

    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "Data Engineering Chatbot API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let message = req.message.ok_or_else(ApiError::missing_message)?;
    let session_id = req.session_id.unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());

    let delay = data.think_delay.sample();
    debug!("Session {} thinking for {:?}", session_id, delay);
    tokio::time::sleep(delay).await;

    let topic = data.knowledge.find_match(&message);
    info!("Chat request from session {}: {:?} -> {}", session_id, message, topic.id);

    let name = req
        .user_info
        .as_ref()
        .and_then(|u| {
            debug!("User info: company={:?} role={:?}", u.company, u.role);
            u.name.as_deref()
        })
        .filter(|name| !name.is_empty());

    let message = match name {
        Some(name) => format!("Great question, {}! {}", name, topic.response),
        None => topic.response.to_string(),
    };

    Ok(HttpResponse::Ok().json(ChatResponse {
        message,
        quick_replies: topic.quick_replies.iter().map(|r| r.to_string()).collect(),
        timestamp: Utc::now().timestamp_millis() as f64 / 1000.0,
        session_id,
    }))
}

// Topic listing with response previews
pub async fn topics(data: web::Data<AppState>) -> impl Responder {
    let topics: Vec<TopicSummary> = data
        .knowledge
        .topics()
        .iter()
        .map(|t| TopicSummary {
            id: t.id,
            keywords: t.keywords,
            preview: t.preview(),
        })
        .collect();
    let count = topics.len();

    HttpResponse::Ok().json(TopicsResponse { topics, count })
}

// Follow-up question suggestions
pub async fn suggest(req: Option<web::Json<SuggestRequest>>) -> impl Responder {
    let context = req.and_then(|r| r.into_inner().context).unwrap_or_default();
    let suggestions = crate::knowledge::suggestions_for(&context);

    HttpResponse::Ok().json(SuggestResponse { suggestions })
}

// Contact form submission
pub async fn contact(req: web::Json<ContactRequest>) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    let missing: Vec<&'static str> = CONTACT_REQUIRED
        .iter()
        .zip([&req.name, &req.email, &req.company, &req.message])
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| *field)
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::MissingField {
            message: "Missing required fields",
            required: CONTACT_REQUIRED,
            missing,
        });
    }

    // Submissions are not stored; the log line is the hand-off point.
    info!(
        "New contact submission: name={:?} email={:?} company={:?} message={:?} use_case={}",
        req.name.as_deref().unwrap_or_default(),
        req.email.as_deref().unwrap_or_default(),
        req.company.as_deref().unwrap_or_default(),
        req.message.as_deref().unwrap_or_default(),
        req.use_case.as_deref().unwrap_or("Not specified"),
    );

    Ok(HttpResponse::Ok().json(ContactResponse {
        success: true,
        message: "Thank you! Our team will reach out within 24 hours.".to_string(),
        ticket_id: format!("DE-{}", Utc::now().timestamp()),
    }))
}

// Usage analytics sink
pub async fn analytics(req: Option<web::Json<Value>>) -> impl Responder {
    let event_type = req
        .as_ref()
        .and_then(|body| body.get("event_type"))
        .cloned()
        .unwrap_or(Value::Null);
    info!("Analytics event: {}", event_type);

    HttpResponse::Ok().json(json!({ "tracked": true }))
}
