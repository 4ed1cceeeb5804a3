use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/metrics/bmi", post(handlers::bmi))
        .route("/api/metrics/body-fat", post(handlers::body_fat))
        .route("/api/metrics/calories", post(handlers::calories))
        .route("/api/metrics/nutrition", post(handlers::nutrition))
        .route("/api/metrics/one-rep-max", post(handlers::one_rep_max))
        .route("/api/nutrition/guide", get(handlers::nutrition_guide))
        .route("/api/exercises", get(handlers::exercises))
        .route("/api/exercises/filters", get(handlers::exercise_filters))
        .route("/api/workouts/plan", get(handlers::workout_plan))
        .route(
            "/api/coach",
            get(handlers::coach_intro).post(handlers::coach),
        )
        .route("/api/overview", get(handlers::overview))
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route("/api/entries/:id", delete(handlers::delete_entry))
        .route(
            "/api/goals",
            get(handlers::list_goals).post(handlers::create_goal),
        )
        .route("/api/goals/:id", delete(handlers::delete_goal))
        .route("/api/goals/:id/progress", put(handlers::update_goal_progress))
        .with_state(state)
}
