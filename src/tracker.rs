use crate::metrics::{classify_goal_status, compute_goal_progress, days_remaining, GoalStatus};
use crate::models::{
    Goal, GoalView, NewEntry, NewGoal, Overview, ProgressEntry, TrackerData, WeightPoint,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

const RECENT_ENTRIES: usize = 3;
const OVERVIEW_GOALS: usize = 3;
const WEIGHT_TREND_POINTS: usize = 5;

/// New entries go to the front; the list is kept newest first.
pub fn add_entry(data: &mut TrackerData, new: NewEntry, now: DateTime<Utc>) -> ProgressEntry {
    let entry = ProgressEntry {
        id: Uuid::new_v4(),
        date: new.date.unwrap_or_else(|| now.date_naive()),
        weight: new.weight,
        body_fat: new.body_fat,
        measurements: new.measurements,
        notes: new.notes,
    };
    data.entries.insert(0, entry.clone());
    entry
}

pub fn add_goal(data: &mut TrackerData, new: NewGoal) -> Goal {
    let goal = Goal {
        id: Uuid::new_v4(),
        title: new.title,
        target: new.target,
        current: new.current,
        unit: new.unit,
        deadline: new.deadline,
        category: new.category,
    };
    data.goals.push(goal.clone());
    goal
}

pub fn update_goal_progress(data: &mut TrackerData, id: Uuid, current: f64) -> Option<Goal> {
    let goal = data.goals.iter_mut().find(|goal| goal.id == id)?;
    goal.current = current;
    Some(goal.clone())
}

pub fn delete_entry(data: &mut TrackerData, id: Uuid) -> bool {
    let before = data.entries.len();
    data.entries.retain(|entry| entry.id != id);
    data.entries.len() != before
}

pub fn delete_goal(data: &mut TrackerData, id: Uuid) -> bool {
    let before = data.goals.len();
    data.goals.retain(|goal| goal.id != id);
    data.goals.len() != before
}

pub fn goal_view(goal: &Goal, now: DateTime<Utc>) -> GoalView {
    let progress = compute_goal_progress(goal.current, goal.target);
    GoalView {
        goal: goal.clone(),
        progress,
        display_progress: progress.clamp(0.0, 100.0),
        days_remaining: days_remaining(goal.deadline, now),
        status: classify_goal_status(progress, goal.deadline, now),
    }
}

pub fn build_overview(data: &TrackerData) -> Overview {
    build_overview_at(Utc::now(), data)
}

pub fn build_overview_at(now: DateTime<Utc>, data: &TrackerData) -> Overview {
    let views: Vec<GoalView> = data.goals.iter().map(|goal| goal_view(goal, now)).collect();
    let goals_completed = views
        .iter()
        .filter(|view| view.status == GoalStatus::Completed)
        .count();

    let mut weight_trend: Vec<WeightPoint> = data
        .entries
        .iter()
        .filter_map(|entry| {
            entry
                .weight
                .filter(|weight| *weight != 0.0)
                .map(|weight| WeightPoint {
                    date: entry.date,
                    weight,
                })
        })
        .take(WEIGHT_TREND_POINTS)
        .collect();
    weight_trend.reverse();

    Overview {
        total_entries: data.entries.len(),
        active_goals: data.goals.len(),
        current_weight: data.entries.first().and_then(|entry| entry.weight),
        goals_completed,
        recent_entries: data.entries.iter().take(RECENT_ENTRIES).cloned().collect(),
        weight_trend,
        goals: views.into_iter().take(OVERVIEW_GOALS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalCategory, Measurements};
    use chrono::{Duration, NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 10, 9, 30, 0).unwrap()
    }

    fn entry(date: NaiveDate, weight: Option<f64>) -> NewEntry {
        NewEntry {
            date: Some(date),
            weight,
            body_fat: None,
            measurements: Measurements::default(),
            notes: String::new(),
        }
    }

    fn goal(title: &str, target: f64, current: f64, deadline: NaiveDate) -> NewGoal {
        NewGoal {
            title: title.to_string(),
            target,
            current,
            unit: "kg".to_string(),
            deadline,
            category: GoalCategory::Strength,
        }
    }

    #[test]
    fn entries_are_kept_newest_first() {
        let mut data = TrackerData::default();
        let today = now().date_naive();
        add_entry(&mut data, entry(today - Duration::days(1), Some(80.0)), now());
        let latest = add_entry(&mut data, entry(today, Some(79.5)), now());

        assert_eq!(data.entries.len(), 2);
        assert_eq!(data.entries[0].id, latest.id);
    }

    #[test]
    fn entry_without_date_uses_today() {
        let mut data = TrackerData::default();
        let mut new = entry(now().date_naive(), None);
        new.date = None;
        let created = add_entry(&mut data, new, now());
        assert_eq!(created.date, NaiveDate::from_ymd_opt(2026, 5, 10).unwrap());
    }

    #[test]
    fn update_and_delete_goal() {
        let mut data = TrackerData::default();
        let deadline = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let created = add_goal(&mut data, goal("Bench 100", 100.0, 60.0, deadline));

        let updated = update_goal_progress(&mut data, created.id, 85.0).expect("goal exists");
        assert_eq!(updated.current, 85.0);
        assert!(update_goal_progress(&mut data, Uuid::new_v4(), 1.0).is_none());

        assert!(delete_goal(&mut data, created.id));
        assert!(!delete_goal(&mut data, created.id));
        assert!(data.goals.is_empty());
    }

    #[test]
    fn delete_missing_entry_reports_false() {
        let mut data = TrackerData::default();
        assert!(!delete_entry(&mut data, Uuid::new_v4()));
    }

    #[test]
    fn goal_view_clamps_display_progress() {
        let mut data = TrackerData::default();
        let deadline = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let created = add_goal(&mut data, goal("Lose it", 10.0, -2.0, deadline));

        let view = goal_view(&created, now());
        assert_eq!(view.progress, -20.0);
        assert_eq!(view.display_progress, 0.0);
        assert_eq!(view.status, GoalStatus::Overdue);
    }

    #[test]
    fn overview_counts_and_trend() {
        let mut data = TrackerData::default();
        let today = now().date_naive();
        for offset in (0..7).rev() {
            let weight = if offset == 3 { None } else { Some(80.0 - offset as f64) };
            add_entry(&mut data, entry(today - Duration::days(offset), weight), now());
        }
        let far = today + Duration::days(60);
        add_goal(&mut data, goal("Done", 100.0, 100.0, far));
        add_goal(&mut data, goal("Half", 100.0, 50.0, far));
        add_goal(&mut data, goal("Soon", 100.0, 10.0, today + Duration::days(3)));
        add_goal(&mut data, goal("Later", 100.0, 10.0, far));

        let overview = build_overview_at(now(), &data);
        assert_eq!(overview.total_entries, 7);
        assert_eq!(overview.active_goals, 4);
        assert_eq!(overview.goals_completed, 1);
        assert_eq!(overview.current_weight, Some(80.0));
        assert_eq!(overview.recent_entries.len(), 3);
        assert_eq!(overview.goals.len(), 3);
        assert_eq!(overview.goals[2].status, GoalStatus::Urgent);

        let trend: Vec<f64> = overview.weight_trend.iter().map(|p| p.weight).collect();
        assert_eq!(trend, vec![75.0, 76.0, 78.0, 79.0, 80.0]);
    }
}
