use serde::Serialize;

pub const CATEGORIES: &[&str] = &[
    "All", "Chest", "Back", "Shoulders", "Arms", "Legs", "Core", "Cardio", "Full Body",
];
pub const DIFFICULTIES: &[&str] = &["All", "Beginner", "Intermediate", "Advanced"];

const ANY: &str = "All";

#[derive(Debug, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub equipment: &'static str,
    pub primary_muscles: &'static [&'static str],
    pub secondary_muscles: &'static [&'static str],
    pub description: &'static str,
    pub instructions: &'static [&'static str],
    pub tips: &'static [&'static str],
}

pub const EXERCISES: &[Exercise] = &[
    Exercise {
        id: "1",
        name: "Push-ups",
        category: "Chest",
        difficulty: "Beginner",
        equipment: "Bodyweight",
        primary_muscles: &["Chest", "Triceps"],
        secondary_muscles: &["Shoulders", "Core"],
        description: "A fundamental upper body exercise that builds chest, arm, and core strength.",
        instructions: &[
            "Start in a plank position with hands slightly wider than shoulders",
            "Lower your body until your chest nearly touches the floor",
            "Push back up to the starting position",
            "Keep your body in a straight line throughout the movement",
        ],
        tips: &[
            "Keep core engaged to maintain proper form",
            "Control the descent for better muscle activation",
            "Modify by doing knee push-ups if needed",
        ],
    },
    Exercise {
        id: "2",
        name: "Squats",
        category: "Legs",
        difficulty: "Beginner",
        equipment: "Bodyweight",
        primary_muscles: &["Quadriceps", "Glutes"],
        secondary_muscles: &["Hamstrings", "Core"],
        description: "The king of lower body exercises, targeting multiple muscle groups.",
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Lower your body by bending at hips and knees",
            "Go down until thighs are parallel to the floor",
            "Push through heels to return to starting position",
        ],
        tips: &[
            "Keep your chest up and back straight",
            "Knees should track over your toes",
            "Weight should be on your heels",
        ],
    },
    Exercise {
        id: "3",
        name: "Plank",
        category: "Core",
        difficulty: "Beginner",
        equipment: "Bodyweight",
        primary_muscles: &["Core", "Abs"],
        secondary_muscles: &["Shoulders", "Back"],
        description: "An isometric exercise that strengthens the entire core.",
        instructions: &[
            "Start in push-up position on forearms",
            "Keep body in straight line from head to heels",
            "Hold position while breathing normally",
            "Avoid letting hips sag or rise",
        ],
        tips: &[
            "Engage your core by pulling belly button to spine",
            "Keep neck in neutral position",
            "Start with shorter holds and build up time",
        ],
    },
    Exercise {
        id: "4",
        name: "Burpees",
        category: "Full Body",
        difficulty: "Intermediate",
        equipment: "Bodyweight",
        primary_muscles: &["Full Body"],
        secondary_muscles: &["Cardiovascular"],
        description: "A high-intensity full-body exercise that combines strength and cardio.",
        instructions: &[
            "Start in standing position",
            "Drop into squat and place hands on floor",
            "Jump feet back into plank position",
            "Do a push-up, jump feet back to squat, then jump up",
        ],
        tips: &[
            "Maintain proper form even when tired",
            "Modify by stepping back instead of jumping",
            "Land softly on your feet",
        ],
    },
    Exercise {
        id: "5",
        name: "Mountain Climbers",
        category: "Cardio",
        difficulty: "Intermediate",
        equipment: "Bodyweight",
        primary_muscles: &["Core", "Shoulders"],
        secondary_muscles: &["Legs", "Arms"],
        description: "A dynamic cardio exercise that also strengthens the core.",
        instructions: &[
            "Start in plank position",
            "Bring right knee toward chest",
            "Quickly switch legs, bringing left knee to chest",
            "Continue alternating legs rapidly",
        ],
        tips: &[
            "Keep hips level throughout the movement",
            "Land softly on the balls of your feet",
            "Maintain plank position with shoulders over wrists",
        ],
    },
    Exercise {
        id: "6",
        name: "Lunges",
        category: "Legs",
        difficulty: "Beginner",
        equipment: "Bodyweight",
        primary_muscles: &["Quadriceps", "Glutes"],
        secondary_muscles: &["Hamstrings", "Calves"],
        description: "Unilateral leg exercise that improves balance and strength.",
        instructions: &[
            "Stand with feet hip-width apart",
            "Step forward with one leg",
            "Lower body until both knees are at 90 degrees",
            "Push back to starting position and repeat",
        ],
        tips: &[
            "Keep front knee over ankle, not pushed out past toes",
            "Keep torso upright throughout the movement",
            "Push through front heel to return to start",
        ],
    },
];

fn matches_filter(filter: Option<&str>, value: &str) -> bool {
    match filter.map(str::trim) {
        None | Some("") | Some(ANY) => true,
        Some(wanted) => wanted == value,
    }
}

/// Search matches the exercise name or any primary muscle, ignoring case.
pub fn filter_exercises(
    search: Option<&str>,
    category: Option<&str>,
    difficulty: Option<&str>,
) -> Vec<&'static Exercise> {
    let needle = search.unwrap_or_default().trim().to_lowercase();
    EXERCISES
        .iter()
        .filter(|exercise| {
            needle.is_empty()
                || exercise.name.to_lowercase().contains(&needle)
                || exercise
                    .primary_muscles
                    .iter()
                    .any(|muscle| muscle.to_lowercase().contains(&needle))
        })
        .filter(|exercise| matches_filter(category, exercise.category))
        .filter(|exercise| matches_filter(difficulty, exercise.difficulty))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedExercise {
    pub name: &'static str,
    pub sets: &'static str,
    pub reps: &'static str,
    pub rest: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutPlan {
    pub name: String,
    pub duration: String,
    pub difficulty: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub exercises: &'static [PlannedExercise],
}

struct PlanTemplate {
    key: &'static str,
    name: &'static str,
    duration: &'static str,
    difficulty: &'static str,
    kind: &'static str,
    exercises: &'static [PlannedExercise],
}

const fn step(
    name: &'static str,
    sets: &'static str,
    reps: &'static str,
    rest: &'static str,
    description: &'static str,
) -> PlannedExercise {
    PlannedExercise {
        name,
        sets,
        reps,
        rest,
        description,
    }
}

const PLANS: &[PlanTemplate] = &[
    PlanTemplate {
        key: "weight-loss-beginner-15-20-min",
        name: "Beginner Fat Burner",
        duration: "15-20 minutes",
        difficulty: "Beginner",
        kind: "HIIT Cardio",
        exercises: &[
            step("Jumping Jacks", "3", "30 seconds", "30 sec", "Full body cardio movement"),
            step("Bodyweight Squats", "3", "15-20", "45 sec", "Lower body strength and cardio"),
            step("Push-ups (Modified)", "3", "8-12", "45 sec", "Upper body strength"),
            step("Mountain Climbers", "3", "20 seconds", "40 sec", "Core and cardio"),
            step("Plank Hold", "2", "20-30 seconds", "60 sec", "Core strengthening"),
        ],
    },
    PlanTemplate {
        key: "muscle-gain-intermediate-30-45-min",
        name: "Muscle Builder Pro",
        duration: "30-45 minutes",
        difficulty: "Intermediate",
        kind: "Strength Training",
        exercises: &[
            step("Push-ups", "4", "12-15", "60 sec", "Chest, shoulders, triceps"),
            step("Squats", "4", "15-20", "60 sec", "Quads, glutes, hamstrings"),
            step("Pike Push-ups", "3", "8-12", "60 sec", "Shoulders and upper chest"),
            step("Lunges", "3", "12 each leg", "60 sec", "Legs and glutes"),
            step("Tricep Dips", "3", "10-15", "60 sec", "Triceps and shoulders"),
            step("Plank to T", "3", "10 each side", "60 sec", "Core and stability"),
        ],
    },
    PlanTemplate {
        key: "endurance-beginner-30-45-min",
        name: "Cardio Endurance Starter",
        duration: "30-45 minutes",
        difficulty: "Beginner",
        kind: "Cardio Circuit",
        exercises: &[
            step("Marching in Place", "1", "2 minutes", "30 sec", "Warm-up movement"),
            step("Step-ups (Chair)", "3", "1 minute", "60 sec", "Lower body cardio"),
            step("Arm Circles", "2", "30 seconds each", "30 sec", "Shoulder mobility and cardio"),
            step("Modified Burpees", "3", "45 seconds", "75 sec", "Full body cardio"),
            step("Walking/Jogging", "1", "5-10 minutes", "-", "Steady-state cardio"),
        ],
    },
];

const CUSTOM_PLAN: &[PlannedExercise] = &[
    step("Warm-up", "1", "5 minutes", "-", "Light cardio and stretching"),
    step("Squats", "3", "12-15", "60 sec", "Lower body strength"),
    step("Push-ups", "3", "8-12", "60 sec", "Upper body strength"),
    step("Plank", "2", "30 seconds", "60 sec", "Core strengthening"),
    step("Cool-down", "1", "5 minutes", "-", "Stretching and recovery"),
];

/// Lower-cases and turns every non-alphanumeric character into `-`,
/// so "30-45 min" becomes "30-45-min".
fn slug(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Unknown combinations get a generic mixed plan carrying the requested
/// duration and level.
pub fn plan_for(goal: &str, level: &str, duration: &str) -> WorkoutPlan {
    let key = format!("{}-{}-{}", slug(goal), slug(level), slug(duration));
    match PLANS.iter().find(|plan| plan.key == key) {
        Some(plan) => WorkoutPlan {
            name: plan.name.to_string(),
            duration: plan.duration.to_string(),
            difficulty: plan.difficulty.to_string(),
            kind: plan.kind,
            exercises: plan.exercises,
        },
        None => WorkoutPlan {
            name: "Custom Workout Plan".to_string(),
            duration: duration.to_string(),
            difficulty: level.to_string(),
            kind: "Mixed Training",
            exercises: CUSTOM_PLAN,
        },
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub name: &'static str,
    pub time: &'static str,
    pub calories: f64,
    pub items: &'static [&'static str],
    pub tips: &'static [&'static str],
}

struct MealTemplate {
    name: &'static str,
    time: &'static str,
    share: f64,
    items: &'static [&'static str],
    tips: &'static [&'static str],
}

// Shares add up to the whole daily target.
const MEALS: &[MealTemplate] = &[
    MealTemplate {
        name: "Breakfast",
        time: "7:00 AM",
        share: 0.25,
        items: &[
            "3 whole eggs + 2 egg whites scrambled",
            "1 slice whole grain toast",
            "1/2 avocado",
            "1 cup berries",
            "Green tea or coffee",
        ],
        tips: &[
            "High protein start boosts metabolism",
            "Healthy fats keep you satisfied",
            "Fiber from fruits aids digestion",
        ],
    },
    MealTemplate {
        name: "Mid-Morning Snack",
        time: "10:00 AM",
        share: 0.10,
        items: &["1 apple with 2 tbsp almond butter", "Or: Greek yogurt with nuts"],
        tips: &[
            "Prevents mid-morning energy crash",
            "Combines protein and healthy carbs",
        ],
    },
    MealTemplate {
        name: "Lunch",
        time: "1:00 PM",
        share: 0.30,
        items: &[
            "6oz grilled chicken breast",
            "1.5 cups quinoa or brown rice",
            "Large mixed salad with olive oil",
            "1 cup steamed vegetables",
        ],
        tips: &[
            "Lean protein supports muscle building",
            "Complex carbs provide sustained energy",
            "Vegetables add essential micronutrients",
        ],
    },
    MealTemplate {
        name: "Pre-Workout Snack",
        time: "3:30 PM",
        share: 0.05,
        items: &["1 banana with 1 tbsp peanut butter", "Or: handful of dates"],
        tips: &["Quick energy for workouts", "Easy to digest carbohydrates"],
    },
    MealTemplate {
        name: "Dinner",
        time: "7:00 PM",
        share: 0.25,
        items: &[
            "6oz salmon or lean beef",
            "1 large sweet potato",
            "Roasted vegetables with herbs",
            "Side salad with lemon dressing",
        ],
        tips: &[
            "Omega-3 fatty acids support recovery",
            "Post-workout nutrition window",
            "Lighter dinner aids sleep quality",
        ],
    },
    MealTemplate {
        name: "Evening Snack",
        time: "9:00 PM",
        share: 0.05,
        items: &["Casein protein shake", "Or: cottage cheese with berries"],
        tips: &[
            "Slow-digesting protein for overnight recovery",
            "Satisfies late-night cravings healthily",
        ],
    },
];

/// Splits a daily calorie target over six fixed meals, each rounded to whole kcal.
pub fn meal_plan(daily_calories: f64) -> Vec<Meal> {
    MEALS
        .iter()
        .map(|meal| Meal {
            name: meal.name,
            time: meal.time,
            calories: (daily_calories * meal.share).round(),
            items: meal.items,
            tips: meal.tips,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct NutritionTip {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const NUTRITION_TIPS: &[NutritionTip] = &[
    NutritionTip {
        title: "Hydration is Key",
        description: "Drink at least 8-10 glasses of water daily. Proper hydration supports metabolism, digestion, and exercise performance.",
        icon: "💧",
    },
    NutritionTip {
        title: "Protein Timing",
        description: "Consume protein within 30 minutes post-workout to maximize muscle protein synthesis and recovery.",
        icon: "🥩",
    },
    NutritionTip {
        title: "Carb Cycling",
        description: "Time your carbohydrate intake around workouts for optimal energy and recovery while supporting fat loss goals.",
        icon: "🍠",
    },
    NutritionTip {
        title: "Meal Prep Success",
        description: "Prepare meals in advance to ensure consistent nutrition and avoid impulsive food choices.",
        icon: "📦",
    },
    NutritionTip {
        title: "Micronutrients Matter",
        description: "Include a variety of colorful fruits and vegetables to ensure adequate vitamin and mineral intake.",
        icon: "🌈",
    },
    NutritionTip {
        title: "Healthy Fats",
        description: "Include sources like avocados, nuts, and olive oil for hormone production and nutrient absorption.",
        icon: "🥑",
    },
];

#[derive(Debug, Serialize)]
pub struct FoodGroup {
    pub name: &'static str,
    pub foods: &'static [&'static str],
}

pub const FOOD_GROUPS: &[FoodGroup] = &[
    FoodGroup {
        name: "Lean Proteins",
        foods: &["Chicken breast", "Turkey", "Fish", "Eggs", "Greek yogurt", "Tofu", "Legumes"],
    },
    FoodGroup {
        name: "Complex Carbs",
        foods: &["Quinoa", "Brown rice", "Sweet potato", "Oats", "Whole grain bread", "Fruits"],
    },
    FoodGroup {
        name: "Healthy Fats",
        foods: &["Avocado", "Nuts", "Seeds", "Olive oil", "Fatty fish", "Coconut oil"],
    },
    FoodGroup {
        name: "Vegetables",
        foods: &["Spinach", "Broccoli", "Bell peppers", "Carrots", "Tomatoes", "Cucumber"],
    },
];
