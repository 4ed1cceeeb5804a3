use crate::catalog::{
    filter_exercises, meal_plan, plan_for, Exercise, WorkoutPlan, CATEGORIES, DIFFICULTIES,
    FOOD_GROUPS, NUTRITION_TIPS,
};
use crate::coach::{fallback_reply, FALLBACK_SOURCE, GREETING, QUICK_QUESTIONS};
use crate::errors::AppError;
use crate::metrics::{
    calorie_target, compute_bmi, compute_body_fat_percent, compute_bmr, compute_macros,
    compute_one_rep_max, compute_tdee, round_to, CalorieGoal,
};
use crate::models::{
    AssessmentResponse, BmiRequest, BodyFatRequest, CalorieRequest, CalorieResponse, CoachIntro,
    CoachRequest, CoachResponse, ExerciseFilters, ExerciseQuery, GoalProgressRequest, GoalView,
    NewEntry, NewGoal, NutritionGuide, NutritionRequest, NutritionResponse, OneRepMaxRequest,
    OneRepMaxResponse,
    Overview, PlanQuery, ProgressEntry, TrackerData,
};
use crate::state::AppState;
use crate::tracker;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

fn require_positive(name: &str, value: f64) -> Result<f64, AppError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::bad_request(format!("{name} must be a positive number")))
    }
}

const ONE_REP_MAX_ADVICE: &[&str] = &[
    "This is an estimate based on your lift",
    "Always warm up properly before attempting heavy lifts",
    "Use a spotter when attempting max lifts",
    "Progressive overload is key to strength gains",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub async fn bmi(Json(payload): Json<BmiRequest>) -> Result<Json<AssessmentResponse>, AppError> {
    let height = require_positive("height_cm", payload.height_cm)?;
    let weight = require_positive("weight_kg", payload.weight_kg)?;

    let result = compute_bmi(height, weight);
    Ok(Json(AssessmentResponse {
        value: result.value,
        category: result.category.map(|category| category.label().to_string()),
        recommendations: result
            .category
            .map(|category| owned(category.recommendations()))
            .unwrap_or_default(),
    }))
}

pub async fn body_fat(
    Json(payload): Json<BodyFatRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let neck = require_positive("neck_cm", payload.neck_cm)?;
    let waist = require_positive("waist_cm", payload.waist_cm)?;
    let height = require_positive("height_cm", payload.height_cm)?;
    let hip = payload
        .hip_cm
        .map(|hip| require_positive("hip_cm", hip))
        .transpose()?;

    // waist <= neck is left to the formula, which reports no value and no category
    let result = compute_body_fat_percent(payload.sex, neck, waist, hip, height);
    Ok(Json(AssessmentResponse {
        value: round_to(result.value, 1),
        category: result.category.map(|category| category.label().to_string()),
        recommendations: result
            .category
            .map(|category| owned(category.recommendations(payload.sex)))
            .unwrap_or_default(),
    }))
}

fn check_body(body: &CalorieRequest) -> Result<(), AppError> {
    require_positive("weight_kg", body.weight_kg)?;
    require_positive("height_cm", body.height_cm)?;
    require_positive("age_years", body.age_years)?;
    Ok(())
}

pub async fn calories(
    Json(payload): Json<CalorieRequest>,
) -> Result<Json<CalorieResponse>, AppError> {
    check_body(&payload)?;

    let bmr = compute_bmr(payload.sex, payload.weight_kg, payload.height_cm, payload.age_years);
    let tdee = compute_tdee(
        payload.sex,
        payload.weight_kg,
        payload.height_cm,
        payload.age_years,
        payload.activity_level,
    );
    let lose = calorie_target(tdee, CalorieGoal::Lose).round();
    let gain = calorie_target(tdee, CalorieGoal::Gain).round();

    Ok(Json(CalorieResponse {
        bmr: round_to(bmr, 2),
        tdee: tdee.round(),
        lose,
        maintain: tdee.round(),
        gain,
        recommendations: vec![
            format!("For weight loss: {lose} calories/day"),
            format!("For weight gain: {gain} calories/day"),
            "Adjust based on your progress and goals".to_string(),
            "Focus on nutrient-dense whole foods".to_string(),
        ],
    }))
}

pub async fn nutrition(
    Json(payload): Json<NutritionRequest>,
) -> Result<Json<NutritionResponse>, AppError> {
    let body = &payload.body;
    check_body(body)?;

    let tdee = compute_tdee(
        body.sex,
        body.weight_kg,
        body.height_cm,
        body.age_years,
        body.activity_level,
    );
    let calories = calorie_target(tdee, payload.goal);
    let split = compute_macros(calories, body.weight_kg);

    Ok(Json(NutritionResponse {
        calories: calories.round(),
        protein_g: split.protein_g.round(),
        carbs_g: split.carb_g.round(),
        fat_g: split.fat_g.round(),
        meals: meal_plan(calories),
    }))
}

pub async fn nutrition_guide() -> Json<NutritionGuide> {
    Json(NutritionGuide {
        tips: NUTRITION_TIPS,
        food_groups: FOOD_GROUPS,
    })
}

pub async fn one_rep_max(
    Json(payload): Json<OneRepMaxRequest>,
) -> Result<Json<OneRepMaxResponse>, AppError> {
    let weight = require_positive("weight_kg", payload.weight_kg)?;
    if payload.reps == 0 {
        return Err(AppError::bad_request("reps must be at least 1"));
    }

    let estimate = compute_one_rep_max(weight, payload.reps);
    Ok(Json(OneRepMaxResponse {
        estimate_kg: estimate.round(),
        finite: estimate.is_finite(),
        recommendations: owned(ONE_REP_MAX_ADVICE),
    }))
}

pub async fn exercises(Query(query): Query<ExerciseQuery>) -> Json<Vec<&'static Exercise>> {
    Json(filter_exercises(
        query.search.as_deref(),
        query.category.as_deref(),
        query.difficulty.as_deref(),
    ))
}

pub async fn exercise_filters() -> Json<ExerciseFilters> {
    Json(ExerciseFilters {
        categories: CATEGORIES,
        difficulties: DIFFICULTIES,
    })
}

pub async fn workout_plan(Query(query): Query<PlanQuery>) -> Json<WorkoutPlan> {
    Json(plan_for(&query.goal, &query.level, &query.duration))
}

pub async fn coach_intro() -> Json<CoachIntro> {
    Json(CoachIntro {
        greeting: GREETING,
        quick_questions: QUICK_QUESTIONS,
    })
}

pub async fn coach(Json(payload): Json<CoachRequest>) -> Result<Json<CoachResponse>, AppError> {
    if payload.message.trim().is_empty() {
        return Err(AppError::bad_request("message must not be empty"));
    }

    Ok(Json(CoachResponse {
        reply: fallback_reply(&payload.message).to_string(),
        source: FALLBACK_SOURCE.to_string(),
    }))
}

pub async fn overview(State(state): State<AppState>) -> Json<Overview> {
    let data = state.data.lock().await;
    Json(tracker::build_overview(&data))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<ProgressEntry>> {
    let data = state.data.lock().await;
    Json(data.entries.clone())
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntry>,
) -> Result<(StatusCode, Json<ProgressEntry>), AppError> {
    let entry = mutate(&state, |data| {
        Ok(tracker::add_entry(data, payload, Utc::now()))
    })
    .await?;

    info!(id = %entry.id, date = %entry.date, "progress entry added");
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    mutate(&state, |data| {
        if tracker::delete_entry(data, id) {
            Ok(())
        } else {
            Err(AppError::not_found(format!("entry {id} not found")))
        }
    })
    .await?;

    info!(%id, "progress entry deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_goals(State(state): State<AppState>) -> Json<Vec<GoalView>> {
    let now = Utc::now();
    let data = state.data.lock().await;
    Json(data.goals.iter().map(|goal| tracker::goal_view(goal, now)).collect())
}

pub async fn create_goal(
    State(state): State<AppState>,
    Json(payload): Json<NewGoal>,
) -> Result<(StatusCode, Json<GoalView>), AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }
    if !payload.target.is_finite() || !payload.current.is_finite() {
        return Err(AppError::bad_request("target and current must be numbers"));
    }

    let goal = mutate(&state, |data| Ok(tracker::add_goal(data, payload))).await?;

    info!(id = %goal.id, title = %goal.title, "goal added");
    Ok((StatusCode::CREATED, Json(tracker::goal_view(&goal, Utc::now()))))
}

pub async fn update_goal_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GoalProgressRequest>,
) -> Result<Json<GoalView>, AppError> {
    if !payload.current.is_finite() {
        return Err(AppError::bad_request("current must be a number"));
    }

    let goal = mutate(&state, |data| {
        tracker::update_goal_progress(data, id, payload.current)
            .ok_or_else(|| AppError::not_found(format!("goal {id} not found")))
    })
    .await?;

    info!(%id, current = goal.current, "goal progress updated");
    Ok(Json(tracker::goal_view(&goal, Utc::now())))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    mutate(&state, |data| {
        if tracker::delete_goal(data, id) {
            Ok(())
        } else {
            Err(AppError::not_found(format!("goal {id} not found")))
        }
    })
    .await?;

    info!(%id, "goal deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Applies a change to a copy of the document under the lock and writes it back
/// whole. Memory only takes the copy once the save succeeds.
async fn mutate<T>(
    state: &AppState,
    change: impl FnOnce(&mut TrackerData) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let mut data = state.data.lock().await;
    let mut draft = data.clone();
    let output = change(&mut draft)?;
    state.repository.save(&draft).await?;
    *data = draft;
    Ok(output)
}
