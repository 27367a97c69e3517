use actix_web::{delete, get, post, web, HttpResponse};
use tracing::{info, warn};

use crate::api::error::{lock, ApiError};
use crate::api::models::{ApiResponse, ChatTurn, SendMessageRequest};
use crate::api::validation::validate_message;
use crate::config::AppConfig;
use crate::dates;
use crate::responder::respond;
use crate::store::{ActivityPool, ChatPool};
use crate::summary::summarize;

#[get("/history")]
pub async fn chat_history(chat: web::Data<ChatPool>) -> Result<HttpResponse, ApiError> {
    let chat = lock(&chat, "Error fetching chat history")?;
    Ok(HttpResponse::Ok().json(ApiResponse::data(chat.history())))
}

#[post("/message")]
pub async fn send_message(
    activities: web::Data<ActivityPool>,
    chat: web::Data<ChatPool>,
    config: web::Data<AppConfig>,
    req: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, ApiError> {
    let text = validate_message(req.message.as_deref(), config.tracker.max_message_length)
        .map_err(|e| {
            warn!("Rejected chat message ({}): {}", e.reason(), e);
            ApiError::from(e)
        })?;

    // The activity lock is released before the chat lock is taken.
    let today = {
        let store = lock(&activities, "Error processing chat message")?;
        summarize(store.all(), dates::today())
    };
    let reply = respond(&text, &today);

    let mut chat = lock(&chat, "Error processing chat message")?;
    let (user_message, bot_message) = chat.record_turn(text, reply);
    info!("Answered chat message {}", user_message.id);

    Ok(HttpResponse::Ok().json(ApiResponse::data(ChatTurn {
        user_message,
        bot_message,
    })))
}

#[delete("/history")]
pub async fn clear_chat_history(chat: web::Data<ChatPool>) -> Result<HttpResponse, ApiError> {
    let mut chat = lock(&chat, "Error clearing chat history")?;
    chat.clear();
    Ok(HttpResponse::Ok().json(ApiResponse::message("Chat history cleared successfully")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/chat")
            .service(chat_history)
            .service(send_message)
            .service(clear_chat_history),
    );
}
