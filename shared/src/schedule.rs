//! Growth schedule calculator
//!
//! Elapsed-day, growth-stage and upcoming-task math, all pure over the
//! project's creation date and a caller-supplied "today".

use chrono::NaiveDate;

use crate::models::Task;

/// Look-ahead window for surfacing near-term tasks
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 3;

/// A named growth phase, active from its progress threshold onward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthStage {
    pub name: &'static str,
    /// Percentage of the growth cycle at which this stage begins
    pub threshold_percent: f64,
    pub color_token: &'static str,
}

/// Growth stages, ascending by threshold
pub const GROWTH_STAGES: [GrowthStage; 4] = [
    GrowthStage { name: "Germination", threshold_percent: 0.0, color_token: "text-lime-500" },
    GrowthStage { name: "Croissance", threshold_percent: 15.0, color_token: "text-green-500" },
    GrowthStage { name: "Floraison", threshold_percent: 60.0, color_token: "text-yellow-500" },
    GrowthStage { name: "Récolte", threshold_percent: 90.0, color_token: "text-orange-500" },
];

/// Whole days elapsed since the project started, clamped into `[0, total_days]`
pub fn days_passed(created_on: NaiveDate, today: NaiveDate, total_days: u32) -> u32 {
    let elapsed = (today - created_on).num_days();
    elapsed.clamp(0, i64::from(total_days)) as u32
}

/// Cycle progress as a percentage; a zero-length cycle is 0 %, never a division
pub fn progress_percent(days_passed: u32, total_days: u32) -> f64 {
    if total_days == 0 {
        return 0.0;
    }
    f64::from(days_passed) / f64::from(total_days) * 100.0
}

/// The last stage whose threshold does not exceed the given progress
pub fn current_stage(progress_percent: f64) -> &'static GrowthStage {
    let mut current = &GROWTH_STAGES[0];
    for stage in &GROWTH_STAGES {
        if progress_percent >= stage.threshold_percent {
            current = stage;
        }
    }
    current
}

/// Tasks starting within the look-ahead window, ascending by start day.
///
/// A re-derivable view: recomputed whenever the project or today's date
/// changes, never persisted.
pub fn upcoming_tasks(calendar: &[Task], days_passed: u32, window_days: u32) -> Vec<Task> {
    let mut upcoming: Vec<Task> = calendar
        .iter()
        .filter(|task| {
            let days_until = i64::from(task.start_day) - i64::from(days_passed);
            days_until >= 0 && days_until <= i64::from(window_days)
        })
        .cloned()
        .collect();
    upcoming.sort_by_key(|task| task.start_day);
    upcoming
}

/// How far away a task's start day is, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartLabel {
    Late,
    Today,
    Tomorrow,
    InDays(u32),
}

pub fn start_label(start_day: u32, days_passed: u32) -> StartLabel {
    let days_until = i64::from(start_day) - i64::from(days_passed);
    match days_until {
        n if n < 0 => StartLabel::Late,
        0 => StartLabel::Today,
        1 => StartLabel::Tomorrow,
        n => StartLabel::InDays(n as u32),
    }
}

impl std::fmt::Display for StartLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartLabel::Late => write!(f, "en retard"),
            StartLabel::Today => write!(f, "commence aujourd'hui"),
            StartLabel::Tomorrow => write!(f, "commence dans 1 jour"),
            StartLabel::InDays(n) => write!(f, "commence dans {n} jours"),
        }
    }
}
