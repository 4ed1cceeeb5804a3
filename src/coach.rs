//! Offline coach replies. Used whenever no hosted completion is available.

use tracing::debug;

pub const GREETING: &str = "👋 Hey there! I'm your personal fitness trainer. I'm here to help you with workouts, nutrition, form corrections, and any fitness questions you have. What would you like to work on today?";

pub const QUICK_QUESTIONS: &[&str] = &[
    "Create a beginner workout plan",
    "What should I eat to lose weight?",
    "How to build muscle at home?",
    "Best cardio for fat loss?",
    "Proper squat form tips",
    "Weekly meal prep ideas",
];

pub const FALLBACK_SOURCE: &str = "fallback";

const GENERIC_REPLY: &str = "💯 I'm here to help with all your fitness needs! Whether it's workout planning, nutrition advice, form corrections, or motivation - just ask. What specific area of fitness would you like to focus on today?";

// First matching rule wins, so "start a workout" is answered as a workout question.
const RULES: &[(&[&str], &str)] = &[
    (
        &["workout", "exercise"],
        "💪 Great question about workouts! For effective results, I recommend combining strength training 3-4 times per week with cardio 2-3 times per week. Focus on compound movements like squats, deadlifts, and push-ups. What's your current fitness level?",
    ),
    (
        &["diet", "nutrition", "food"],
        "🥗 Nutrition is crucial for fitness success! Focus on whole foods: lean proteins (chicken, fish, legumes), complex carbs (oats, quinoa, sweet potatoes), and healthy fats (avocado, nuts). Stay hydrated and eat in a slight calorie deficit for weight loss or surplus for muscle gain.",
    ),
    (
        &["weight loss", "lose weight"],
        "🔥 For weight loss, create a calorie deficit through diet and exercise. Combine strength training to preserve muscle mass with cardio for fat burning. Aim for 1-2 lbs per week loss. High-protein diet helps maintain muscle and keeps you full longer.",
    ),
    (
        &["muscle", "gain", "bulk"],
        "💪 To build muscle, focus on progressive overload in your strength training, eat in a slight calorie surplus with adequate protein (0.8-1g per lb bodyweight), and get proper recovery. Compound exercises like squats and deadlifts are most effective.",
    ),
    (
        &["beginner", "start"],
        "🌟 Welcome to your fitness journey! Start with 3 full-body workouts per week focusing on basic movements. Begin with bodyweight exercises or light weights, prioritize proper form over heavy weight, and gradually increase intensity. Consistency is key!",
    ),
];

pub fn fallback_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    for (index, (keywords, reply)) in RULES.iter().enumerate() {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            debug!(rule = index, "coach fallback rule matched");
            return *reply;
        }
    }
    GENERIC_REPLY
}
