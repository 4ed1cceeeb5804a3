//! Fitness calculators. Every function here is pure: no validation, no state.
//! Bad input flows through as NaN or infinity and categories come back `None`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: f64 = 86_400_000.0;
const CALORIE_GOAL_DELTA: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    #[serde(alias = "veryActive")]
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalorieGoal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Underweight => &[
                "Consider consulting with a healthcare provider",
                "Focus on gaining healthy weight through proper nutrition",
                "Include strength training to build muscle mass",
                "Eat nutrient-dense, high-calorie foods",
            ],
            Self::NormalWeight => &[
                "Maintain your current healthy weight",
                "Continue regular exercise and balanced nutrition",
                "Focus on building muscle and improving fitness",
                "Aim for 150 minutes of moderate activity per week",
            ],
            Self::Overweight => &[
                "Consider gradual weight loss of 1-2 lbs per week",
                "Combine cardio and strength training",
                "Focus on portion control and nutrient-dense foods",
                "Increase daily physical activity",
            ],
            Self::Obese => &[
                "Consult with healthcare provider for personalized plan",
                "Start with low-impact exercises like walking",
                "Focus on sustainable dietary changes",
                "Consider working with nutrition and fitness professionals",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFatCategory {
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    AboveAverage,
}

impl BodyFatCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::EssentialFat => "Essential fat",
            Self::Athletes => "Athletes",
            Self::Fitness => "Fitness",
            Self::Average => "Average",
            Self::AboveAverage => "Above average",
        }
    }

    /// Advice differs only in the essential-fat band.
    pub fn recommendations(self, sex: Sex) -> &'static [&'static str] {
        match (self, sex) {
            (Self::EssentialFat, Sex::Male) => &[
                "This is below essential fat levels",
                "Consult a healthcare provider",
            ],
            (Self::EssentialFat, Sex::Female) => &[
                "This may be below healthy levels",
                "Consult a healthcare provider",
            ],
            (Self::Athletes, _) => &[
                "Excellent athletic conditioning",
                "Maintain with proper nutrition and training",
            ],
            (Self::Fitness, _) => &["Good fitness level", "Continue current exercise routine"],
            (Self::Average, _) => &[
                "Average for general population",
                "Consider increasing exercise frequency",
            ],
            (Self::AboveAverage, _) => &[
                "Focus on cardio and strength training",
                "Consider dietary modifications",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    Completed,
    Overdue,
    Urgent,
    OnTrack,
}

// Ladders are ordered upper bounds (exclusive); the first bound above the value wins.
const BMI_LADDER: &[(f64, BmiCategory)] = &[
    (18.5, BmiCategory::Underweight),
    (25.0, BmiCategory::NormalWeight),
    (30.0, BmiCategory::Overweight),
    (f64::INFINITY, BmiCategory::Obese),
];

const MALE_BODY_FAT_LADDER: &[(f64, BodyFatCategory)] = &[
    (6.0, BodyFatCategory::EssentialFat),
    (14.0, BodyFatCategory::Athletes),
    (18.0, BodyFatCategory::Fitness),
    (25.0, BodyFatCategory::Average),
    (f64::INFINITY, BodyFatCategory::AboveAverage),
];

const FEMALE_BODY_FAT_LADDER: &[(f64, BodyFatCategory)] = &[
    (14.0, BodyFatCategory::EssentialFat),
    (21.0, BodyFatCategory::Athletes),
    (25.0, BodyFatCategory::Fitness),
    (32.0, BodyFatCategory::Average),
    (f64::INFINITY, BodyFatCategory::AboveAverage),
];

type StatusRule = fn(f64, i64) -> bool;

const STATUS_LADDER: &[(StatusRule, GoalStatus)] = &[
    (is_complete, GoalStatus::Completed),
    (is_past_deadline, GoalStatus::Overdue),
    (is_within_week, GoalStatus::Urgent),
    (always, GoalStatus::OnTrack),
];

fn is_complete(progress: f64, _days: i64) -> bool {
    progress >= 100.0
}

fn is_past_deadline(_progress: f64, days: i64) -> bool {
    days < 0
}

fn is_within_week(_progress: f64, days: i64) -> bool {
    days <= 7
}

fn always(_progress: f64, _days: i64) -> bool {
    true
}

fn classify<T: Copy>(ladder: &[(f64, T)], value: f64) -> Option<T> {
    ladder
        .iter()
        .find(|(upper, _)| value < *upper)
        .map(|(_, category)| *category)
}

/// Rounds half away from zero, which matches how the figures are displayed.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi {
    /// Rounded to one decimal.
    pub value: f64,
    pub category: Option<BmiCategory>,
}

/// Category is taken from the unrounded index; only the reported value is rounded.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Bmi {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Bmi {
        value: round_to(bmi, 1),
        category: classify(BMI_LADDER, bmi),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFat {
    pub value: f64,
    pub category: Option<BodyFatCategory>,
}

/// US Navy circumference method. A female estimate without a hip measurement,
/// or any non-positive log argument, yields NaN and no category.
pub fn compute_body_fat_percent(
    sex: Sex,
    neck_cm: f64,
    waist_cm: f64,
    hip_cm: Option<f64>,
    height_cm: f64,
) -> BodyFat {
    let (value, ladder) = match sex {
        Sex::Male => (
            navy_percent(1.0324, 0.19077, waist_cm - neck_cm, 0.15456, height_cm),
            MALE_BODY_FAT_LADDER,
        ),
        Sex::Female => {
            let hip_cm = hip_cm.unwrap_or(f64::NAN);
            (
                navy_percent(1.29579, 0.35004, waist_cm + hip_cm - neck_cm, 0.22100, height_cm),
                FEMALE_BODY_FAT_LADDER,
            )
        }
    };

    BodyFat {
        value,
        category: classify(ladder, value),
    }
}

// A zero girth would otherwise come out as a finite -450 via log10(0) = -inf.
fn navy_percent(
    base: f64,
    girth_factor: f64,
    girth_cm: f64,
    height_factor: f64,
    height_cm: f64,
) -> f64 {
    if girth_cm.is_nan() || girth_cm <= 0.0 {
        return f64::NAN;
    }
    let density = base - girth_factor * girth_cm.log10() + height_factor * height_cm.log10();
    495.0 / density - 450.0
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
pub fn compute_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn compute_tdee(
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    activity: ActivityLevel,
) -> f64 {
    compute_bmr(sex, weight_kg, height_cm, age_years) * activity.multiplier()
}

pub fn calorie_target(tdee: f64, goal: CalorieGoal) -> f64 {
    match goal {
        CalorieGoal::Lose => tdee - CALORIE_GOAL_DELTA,
        CalorieGoal::Maintain => tdee,
        CalorieGoal::Gain => tdee + CALORIE_GOAL_DELTA,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub fat_g: f64,
    /// Whatever calories remain; negative when protein alone exceeds the target.
    pub carb_g: f64,
}

pub fn compute_macros(calorie_target: f64, weight_kg: f64) -> MacroSplit {
    let protein_g = weight_kg * 2.2;
    let fat_g = 0.25 * calorie_target / 9.0;
    let carb_g = (calorie_target - protein_g * 4.0 - fat_g * 9.0) / 4.0;
    MacroSplit {
        protein_g,
        fat_g,
        carb_g,
    }
}

/// Brzycki estimate. Infinite at 37 reps and negative beyond.
pub fn compute_one_rep_max(weight_kg: f64, reps: u32) -> f64 {
    weight_kg * 36.0 / (37.0 - f64::from(reps))
}

pub fn compute_goal_progress(current: f64, target: f64) -> f64 {
    let percent = current / target * 100.0;
    // f64::min would turn NaN into 100
    if percent > 100.0 { 100.0 } else { percent }
}

/// Whole days until the deadline (taken at UTC midnight), rounded up.
pub fn days_remaining(deadline: NaiveDate, now: DateTime<Utc>) -> i64 {
    let deadline = deadline.and_time(chrono::NaiveTime::MIN).and_utc();
    let millis = (deadline - now).num_milliseconds() as f64;
    (millis / MS_PER_DAY).ceil() as i64
}

pub fn classify_goal_status(progress: f64, deadline: NaiveDate, now: DateTime<Utc>) -> GoalStatus {
    let days = days_remaining(deadline, now);
    STATUS_LADDER
        .iter()
        .find(|(rule, _)| rule(progress, days))
        .map_or(GoalStatus::OnTrack, |(_, status)| *status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bmi_normal_weight() {
        let bmi = compute_bmi(175.0, 70.0);
        assert_eq!(bmi.value, 22.9);
        assert_eq!(bmi.category, Some(BmiCategory::NormalWeight));
    }

    #[test]
    fn bmi_obese() {
        let bmi = compute_bmi(160.0, 100.0);
        assert_eq!(bmi.value, 39.1);
        assert_eq!(bmi.category, Some(BmiCategory::Obese));
    }

    #[test]
    fn bmi_ladder_boundaries() {
        assert_eq!(classify(BMI_LADDER, 18.49), Some(BmiCategory::Underweight));
        assert_eq!(classify(BMI_LADDER, 18.5), Some(BmiCategory::NormalWeight));
        assert_eq!(classify(BMI_LADDER, 25.0), Some(BmiCategory::Overweight));
        assert_eq!(classify(BMI_LADDER, 30.0), Some(BmiCategory::Obese));
    }

    #[test]
    fn bmi_zero_height_has_no_category() {
        let bmi = compute_bmi(0.0, 70.0);
        assert!(!bmi.value.is_finite());
        assert_eq!(bmi.category, None);
    }

    #[test]
    fn male_body_fat_in_expected_band() {
        let fat = compute_body_fat_percent(Sex::Male, 38.0, 85.0, None, 175.0);
        assert!(fat.value.is_finite());
        assert!((fat.value - 16.9).abs() < 0.1, "got {}", fat.value);
        assert_eq!(fat.category, Some(BodyFatCategory::Fitness));
    }

    #[test]
    fn female_body_fat_uses_hip() {
        let fat = compute_body_fat_percent(Sex::Female, 34.0, 75.0, Some(95.0), 165.0);
        assert!((fat.value - 26.4).abs() < 0.1, "got {}", fat.value);
        assert_eq!(fat.category, Some(BodyFatCategory::Average));
    }

    #[test]
    fn female_without_hip_is_undefined() {
        let fat = compute_body_fat_percent(Sex::Female, 34.0, 75.0, None, 165.0);
        assert!(fat.value.is_nan());
        assert_eq!(fat.category, None);
    }

    #[test]
    fn waist_not_above_neck_is_undefined() {
        let fat = compute_body_fat_percent(Sex::Male, 40.0, 40.0, None, 175.0);
        assert!(fat.value.is_nan());
        assert_eq!(fat.category, None);

        let fat = compute_body_fat_percent(Sex::Female, 40.0, 25.0, Some(15.0), 165.0);
        assert!(fat.value.is_nan());
        assert_eq!(fat.category, None);

        let fat = compute_body_fat_percent(Sex::Male, 40.0, 35.0, None, 175.0);
        assert!(fat.value.is_nan());
    }

    #[test]
    fn body_fat_ladders_differ_by_sex() {
        assert_eq!(
            classify(MALE_BODY_FAT_LADDER, 20.0),
            Some(BodyFatCategory::Average)
        );
        assert_eq!(
            classify(FEMALE_BODY_FAT_LADDER, 20.0),
            Some(BodyFatCategory::Athletes)
        );
        assert_eq!(
            classify(FEMALE_BODY_FAT_LADDER, 32.0),
            Some(BodyFatCategory::AboveAverage)
        );
    }

    #[test]
    fn tdee_moderate_male() {
        let bmr = compute_bmr(Sex::Male, 70.0, 175.0, 30.0);
        assert_eq!(bmr, 1648.75);
        let tdee = compute_tdee(Sex::Male, 70.0, 175.0, 30.0, ActivityLevel::Moderate);
        assert_eq!(tdee.round(), 2556.0);
    }

    #[test]
    fn female_bmr_offset() {
        let male = compute_bmr(Sex::Male, 60.0, 165.0, 25.0);
        let female = compute_bmr(Sex::Female, 60.0, 165.0, 25.0);
        assert_eq!(male - female, 166.0);
    }

    #[test]
    fn calorie_targets_shift_by_goal() {
        assert_eq!(calorie_target(2000.0, CalorieGoal::Lose), 1500.0);
        assert_eq!(calorie_target(2000.0, CalorieGoal::Maintain), 2000.0);
        assert_eq!(calorie_target(2000.0, CalorieGoal::Gain), 2500.0);
    }

    #[test]
    fn macros_split_calories() {
        let split = compute_macros(2000.0, 70.0);
        assert!((split.protein_g - 154.0).abs() < 1e-9);
        assert!((split.fat_g - 500.0 / 9.0).abs() < 1e-9);
        assert!((split.carb_g - 221.0).abs() < 1e-9);
    }

    #[test]
    fn macros_carbs_go_negative() {
        let split = compute_macros(800.0, 120.0);
        assert!(split.carb_g < 0.0);
    }

    #[test]
    fn one_rep_max_brzycki() {
        let orm = compute_one_rep_max(100.0, 5);
        assert_eq!(orm, 112.5);
        assert_eq!(round_to(orm, 0), 113.0);
        assert_eq!(compute_one_rep_max(80.0, 1), 80.0);
    }

    #[test]
    fn one_rep_max_at_37_reps_is_not_finite() {
        let orm = compute_one_rep_max(100.0, 37);
        assert!(!orm.is_finite());
        assert!(compute_one_rep_max(100.0, 40) < 0.0);
    }

    #[test]
    fn goal_progress_clamps_at_100() {
        assert_eq!(compute_goal_progress(50.0, 100.0), 50.0);
        assert_eq!(compute_goal_progress(120.0, 100.0), 100.0);
        assert_eq!(compute_goal_progress(5.0, 0.0), 100.0);
        assert!(compute_goal_progress(0.0, 0.0).is_nan());
    }

    #[test]
    fn days_remaining_rounds_up() {
        let now = noon(2026, 3, 1);
        assert_eq!(days_remaining(date(2026, 3, 2), now), 1);
        assert_eq!(days_remaining(date(2026, 3, 1), now), 0);
        assert_eq!(days_remaining(date(2026, 2, 28), now), -1);
        assert_eq!(days_remaining(date(2026, 2, 27), now), -2);
    }

    #[test]
    fn completed_beats_overdue() {
        let status = classify_goal_status(100.0, date(2020, 1, 1), noon(2026, 3, 1));
        assert_eq!(status, GoalStatus::Completed);
    }

    #[test]
    fn status_ladder_order() {
        let now = noon(2026, 3, 1);
        assert_eq!(
            classify_goal_status(40.0, date(2026, 2, 20), now),
            GoalStatus::Overdue
        );
        assert_eq!(
            classify_goal_status(40.0, date(2026, 3, 8), now),
            GoalStatus::Urgent
        );
        assert_eq!(
            classify_goal_status(40.0, date(2026, 3, 1), now),
            GoalStatus::Urgent
        );
        assert_eq!(
            classify_goal_status(40.0, date(2026, 3, 9), now),
            GoalStatus::OnTrack
        );
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&GoalStatus::OnTrack).unwrap();
        assert_eq!(json, "\"on-track\"");
    }

    #[test]
    fn activity_level_accepts_both_spellings() {
        let snake: ActivityLevel = serde_json::from_str("\"very_active\"").unwrap();
        let camel: ActivityLevel = serde_json::from_str("\"veryActive\"").unwrap();
        assert_eq!(snake, ActivityLevel::VeryActive);
        assert_eq!(camel, ActivityLevel::VeryActive);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn male_body_fat_finite_and_monotonic(
            neck in 30.0f64..45.0,
            gap in 5.0f64..80.0,
            shrink in 0.5f64..4.0,
            height in 150.0f64..210.0
        ) {
            let waist = neck + gap;
            let wide = compute_body_fat_percent(Sex::Male, neck, waist, None, height).value;
            let narrow = compute_body_fat_percent(Sex::Male, neck, waist - shrink, None, height).value;
            prop_assert!(wide.is_finite());
            prop_assert!(narrow < wide, "narrow={} wide={}", narrow, wide);
        }

        #[test]
        fn calculators_are_idempotent(
            height in 120.0f64..220.0,
            weight in 35.0f64..200.0,
            age in 15.0f64..90.0,
            reps in 1u32..36
        ) {
            prop_assert_eq!(compute_bmi(height, weight), compute_bmi(height, weight));
            prop_assert_eq!(
                compute_tdee(Sex::Female, weight, height, age, ActivityLevel::Light),
                compute_tdee(Sex::Female, weight, height, age, ActivityLevel::Light)
            );
            prop_assert_eq!(compute_macros(2200.0, weight), compute_macros(2200.0, weight));
            prop_assert_eq!(compute_one_rep_max(weight, reps), compute_one_rep_max(weight, reps));
        }

        #[test]
        fn goal_progress_never_exceeds_100(current in 0.0f64..1000.0, target in 0.1f64..500.0) {
            let progress = compute_goal_progress(current, target);
            prop_assert!(progress <= 100.0);
            prop_assert!(progress >= 0.0);
        }
    }
}
