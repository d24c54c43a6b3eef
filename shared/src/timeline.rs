//! Task timeline rendering math and category classification

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Categories used for timeline coloring and icons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    MaintenancePrep,
    Irrigation,
    Weeding,
    TreatmentFertilization,
    Harvest,
    Other,
}

impl TaskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::MaintenancePrep => "Entretien / Préparation",
            TaskCategory::Irrigation => "Irrigation",
            TaskCategory::Weeding => "Désherbage",
            TaskCategory::TreatmentFertilization => "Traitement / Fertilisation",
            TaskCategory::Harvest => "Récolte",
            TaskCategory::Other => "Autre",
        }
    }

    pub fn color_token(&self) -> &'static str {
        match self {
            TaskCategory::MaintenancePrep => "bg-blue-500",
            TaskCategory::Irrigation => "bg-cyan-400",
            TaskCategory::Weeding => "bg-yellow-500",
            TaskCategory::TreatmentFertilization => "bg-purple-500",
            TaskCategory::Harvest => "bg-green-600",
            TaskCategory::Other => "bg-gray-400",
        }
    }
}

/// Ordered keyword table; first match wins
const CATEGORY_RULES: &[(&[&str], TaskCategory)] = &[
    (&["entretien", "préparation"], TaskCategory::MaintenancePrep),
    (&["arrosage", "irrigation"], TaskCategory::Irrigation),
    (&["désherbage"], TaskCategory::Weeding),
    (&["traitement", "fertilisation"], TaskCategory::TreatmentFertilization),
    (&["récolte"], TaskCategory::Harvest),
];

/// Infer a task's category from its free-text name
pub fn classify_task(task_name: &str) -> TaskCategory {
    let lowered = task_name.to_lowercase();
    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *category;
        }
    }
    TaskCategory::Other
}

/// Smallest rendered width so short tasks remain visible
pub const MIN_SEGMENT_WIDTH_PERCENT: f64 = 0.5;

/// A task's horizontal placement on the timeline bar, in percent of the cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineSegment {
    pub left_percent: f64,
    pub width_percent: f64,
}

impl TimelineSegment {
    /// Placement for one task over a cycle of `total_days`.
    ///
    /// Producer-side invariant violations (end before start, days beyond the
    /// cycle, a zero-length cycle) render clamped instead of failing.
    pub fn for_task(task: &Task, total_days: u32) -> Self {
        if total_days == 0 {
            return Self {
                left_percent: 0.0,
                width_percent: MIN_SEGMENT_WIDTH_PERCENT,
            };
        }
        let total = f64::from(total_days);
        let left = (f64::from(task.start_day) / total * 100.0).clamp(0.0, 100.0);
        let span = f64::from(task.end_day.saturating_sub(task.start_day)) / total * 100.0;
        let mut width = span.max(MIN_SEGMENT_WIDTH_PERCENT);
        if left + width > 100.0 {
            width = (100.0 - left).max(MIN_SEGMENT_WIDTH_PERCENT);
        }
        Self {
            left_percent: left,
            width_percent: width,
        }
    }
}

/// Legend entries for a calendar: unique categories in first-appearance order
pub fn legend(tasks: &[Task]) -> Vec<TaskCategory> {
    let mut categories = Vec::new();
    for task in tasks {
        let category = classify_task(&task.task);
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, start_day: u32, end_day: u32) -> Task {
        Task {
            task: name.to_string(),
            start_day,
            end_day,
            description: String::new(),
        }
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify_task("Préparation du sol"), TaskCategory::MaintenancePrep);
        assert_eq!(classify_task("ARROSAGE régulier"), TaskCategory::Irrigation);
        assert_eq!(classify_task("Désherbage manuel"), TaskCategory::Weeding);
        assert_eq!(classify_task("Fertilisation NPK"), TaskCategory::TreatmentFertilization);
        assert_eq!(classify_task("Récolte des tubercules"), TaskCategory::Harvest);
        assert_eq!(classify_task("Plantation"), TaskCategory::Other);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // mentions both maintenance and irrigation; the earlier rule applies
        assert_eq!(
            classify_task("Entretien du système d'irrigation"),
            TaskCategory::MaintenancePrep
        );
    }

    #[test]
    fn test_segment_placement() {
        let segment = TimelineSegment::for_task(&task("Désherbage", 20, 30), 100);
        assert_eq!(segment.left_percent, 20.0);
        assert_eq!(segment.width_percent, 10.0);
    }

    #[test]
    fn test_segment_clamps_degenerate_input() {
        // zero-length task still visible
        let dot = TimelineSegment::for_task(&task("Visite", 50, 50), 100);
        assert_eq!(dot.width_percent, MIN_SEGMENT_WIDTH_PERCENT);

        // end before start is tolerated
        let inverted = TimelineSegment::for_task(&task("Erreur", 30, 10), 100);
        assert_eq!(inverted.left_percent, 30.0);
        assert_eq!(inverted.width_percent, MIN_SEGMENT_WIDTH_PERCENT);

        // start beyond the cycle clamps to the right edge
        let overflow = TimelineSegment::for_task(&task("Tard", 150, 160), 100);
        assert_eq!(overflow.left_percent, 100.0);

        // zero-length cycle never divides
        let empty = TimelineSegment::for_task(&task("Rien", 0, 10), 0);
        assert_eq!(empty.left_percent, 0.0);
    }

    #[test]
    fn test_legend_preserves_first_appearance_order() {
        let calendar = vec![
            task("Récolte", 80, 90),
            task("Arrosage", 10, 70),
            task("Récolte tardive", 90, 95),
            task("Plantation", 0, 5),
        ];
        assert_eq!(
            legend(&calendar),
            vec![TaskCategory::Harvest, TaskCategory::Irrigation, TaskCategory::Other]
        );
    }
}
