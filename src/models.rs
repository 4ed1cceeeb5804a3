use crate::catalog::{FoodGroup, Meal, NutritionTip};
use crate::metrics::{ActivityLevel, CalorieGoal, GoalStatus, Sex};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Measurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thighs: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub body_fat: Option<f64>,
    #[serde(default)]
    pub measurements: Measurements,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    #[default]
    Weight,
    Strength,
    Endurance,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub target: f64,
    pub current: f64,
    #[serde(default)]
    pub unit: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub category: GoalCategory,
}

/// The whole persisted document. Written back in full after every change.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TrackerData {
    #[serde(default)]
    pub entries: Vec<ProgressEntry>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

#[derive(Debug, Deserialize)]
pub struct NewEntry {
    pub date: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    #[serde(default)]
    pub measurements: Measurements,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct NewGoal {
    pub title: String,
    pub target: f64,
    #[serde(default)]
    pub current: f64,
    #[serde(default)]
    pub unit: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub category: GoalCategory,
}

#[derive(Debug, Deserialize)]
pub struct GoalProgressRequest {
    pub current: f64,
}

#[derive(Debug, Serialize)]
pub struct GoalView {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress: f64,
    /// `progress` held to [0, 100] for progress bars.
    pub display_progress: f64,
    pub days_remaining: i64,
    pub status: GoalStatus,
}

#[derive(Debug, Serialize)]
pub struct WeightPoint {
    pub date: NaiveDate,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub total_entries: usize,
    pub active_goals: usize,
    pub current_weight: Option<f64>,
    pub goals_completed: usize,
    pub recent_entries: Vec<ProgressEntry>,
    pub weight_trend: Vec<WeightPoint>,
    pub goals: Vec<GoalView>,
}

#[derive(Debug, Deserialize)]
pub struct BmiRequest {
    pub height_cm: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Deserialize)]
pub struct BodyFatRequest {
    pub sex: Sex,
    pub neck_cm: f64,
    pub waist_cm: f64,
    pub hip_cm: Option<f64>,
    pub height_cm: f64,
}

#[derive(Debug, Deserialize)]
pub struct CalorieRequest {
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Deserialize)]
pub struct NutritionRequest {
    #[serde(flatten)]
    pub body: CalorieRequest,
    #[serde(default)]
    pub goal: CalorieGoal,
}

#[derive(Debug, Deserialize)]
pub struct OneRepMaxRequest {
    pub weight_kg: f64,
    pub reps: u32,
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub value: f64,
    pub category: Option<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CalorieResponse {
    pub bmr: f64,
    pub tdee: f64,
    pub lose: f64,
    pub maintain: f64,
    pub gain: f64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NutritionResponse {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
pub struct NutritionGuide {
    pub tips: &'static [NutritionTip],
    pub food_groups: &'static [FoodGroup],
}

#[derive(Debug, Serialize)]
pub struct OneRepMaxResponse {
    pub estimate_kg: f64,
    pub finite: bool,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CoachIntro {
    pub greeting: &'static str,
    pub quick_questions: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct CoachRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CoachResponse {
    pub reply: String,
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct ExerciseFilters {
    pub categories: &'static [&'static str],
    pub difficulties: &'static [&'static str],
}

#[derive(Debug, Deserialize, Default)]
pub struct ExerciseQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    pub goal: String,
    pub level: String,
    pub duration: String,
}
