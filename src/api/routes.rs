use actix_web::{delete, get, post, web, HttpResponse};
use chrono::{Local, Timelike, Utc};
use serde_json::json;
use tracing::warn;

use crate::api::error::{json_error, lock, not_found, query_error, ApiError};
use crate::api::models::{ActivityQuery, ApiResponse, CreateActivityRequest};
use crate::api::routes_chat;
use crate::api::validation::validate_activity;
use crate::config::AppConfig;
use crate::dates::parse_calendar_date;
use crate::store::ActivityPool;
use crate::summary::{summarize, SummaryReport};

// --- Activities ---

#[get("")]
pub async fn list_activities(
    pool: web::Data<ActivityPool>,
    query: web::Query<ActivityQuery>,
) -> Result<HttpResponse, ApiError> {
    let store = lock(&pool, "Error fetching activities")?;
    let activities = match query.into_inner().into_filter() {
        Some(filter) => store.list(&filter),
        None => Vec::new(),
    };
    let count = activities.len();

    Ok(HttpResponse::Ok().json(ApiResponse::data(activities).with_count(count)))
}

#[get("/pet/{pet_name}")]
pub async fn list_pet_activities(
    pool: web::Data<ActivityPool>,
    pet_name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let pet_name = pet_name.into_inner();

    let store = lock(&pool, "Error fetching pet activities")?;
    let activities = store.list_by_pet(&pet_name);

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": activities.len(),
        "data": activities,
        "petName": pet_name,
    })))
}

#[post("")]
pub async fn create_activity(
    pool: web::Data<ActivityPool>,
    req: web::Json<CreateActivityRequest>,
) -> Result<HttpResponse, ApiError> {
    let new_activity = validate_activity(req.into_inner()).map_err(|errors| {
        warn!("Rejected activity: {}", errors.join("; "));
        ApiError::Validation(errors)
    })?;

    let mut store = lock(&pool, "Error logging activity")?;
    let activity = store.insert(new_activity);

    Ok(HttpResponse::Created()
        .json(ApiResponse::data(activity).with_message("Activity logged successfully")))
}

#[delete("/{id}")]
pub async fn delete_activity(
    pool: web::Data<ActivityPool>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let missing = || ApiError::NotFound("Activity not found".to_string());

    // Strict integer parse: a non-numeric id such as `12abc` cannot name any
    // record and yields 404 rather than being read as its numeric prefix.
    let id: u64 = id.trim().parse().map_err(|_| missing())?;

    let mut store = lock(&pool, "Error deleting activity")?;
    let removed = store.remove(id).ok_or_else(missing)?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::data(removed).with_message("Activity deleted successfully")))
}

// --- Summary ---

#[get("")]
pub async fn today_summary(
    pool: web::Data<ActivityPool>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let now = Local::now();
    let today = now.date_naive();

    let summary = {
        let store = lock(&pool, "Error fetching summary")?;
        summarize(store.all(), today)
    };
    let report = SummaryReport::for_today(
        summary,
        today,
        now.hour(),
        config.tracker.walk_reminder_hour,
    );

    Ok(HttpResponse::Ok().json(ApiResponse::data(report)))
}

#[get("/{date}")]
pub async fn date_summary(
    pool: web::Data<ActivityPool>,
    date: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    // An unparseable date matches no activity and summarizes to zeros.
    let report = match parse_calendar_date(&date) {
        Some(date) => {
            let store = lock(&pool, "Error fetching summary for date")?;
            SummaryReport::for_date(summarize(store.all(), date), date)
        }
        None => SummaryReport::invalid_date(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::data(report)))
}

// --- Health ---

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "status": "OK",
        "message": "Pet Activity Tracker API is running",
        "timestamp": Utc::now(),
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .service(
            web::scope("/api")
                .service(health)
                .service(
                    web::scope("/activities")
                        .service(list_pet_activities)
                        .service(list_activities)
                        .service(create_activity)
                        .service(delete_activity),
                )
                .service(
                    web::scope("/summary")
                        .service(today_summary)
                        .service(date_summary),
                )
                .configure(routes_chat::configure),
        )
        .default_service(web::to(not_found));
}
