//! Project lifecycle and dashboard aggregation

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use shared::metrics::FieldMetrics;
use shared::models::{EstimateRequest, Project, Task};
use shared::schedule::{self, GrowthStage};
use shared::types::{IrrigationSystem, SoilType};
use shared::validation::validate_estimate_request;

use crate::error::{AppError, AppResult};
use crate::external::estimate::EstimateProvider;
use crate::store::ProjectRepository;

/// Input of the creation wizard
#[derive(Debug, Clone)]
pub struct NewProject {
    pub crop_name: String,
    pub field_size_hectares: Decimal,
    pub soil_type: SoilType,
    pub irrigation_system: IrrigationSystem,
}

/// Everything a dashboard needs for one project on a given day.
///
/// Re-derivable from the project and "today"; never persisted.
#[derive(Debug, Clone)]
pub struct ProjectOverview {
    pub metrics: FieldMetrics,
    pub days_passed: u32,
    pub total_days: u32,
    pub progress_percent: f64,
    pub stage: &'static GrowthStage,
    pub upcoming_tasks: Vec<Task>,
}

pub struct ProjectService {
    repository: ProjectRepository,
    estimates: Arc<dyn EstimateProvider>,
    upcoming_window_days: u32,
}

impl ProjectService {
    pub fn new(
        repository: ProjectRepository,
        estimates: Arc<dyn EstimateProvider>,
        upcoming_window_days: u32,
    ) -> Self {
        Self {
            repository,
            estimates,
            upcoming_window_days,
        }
    }

    /// Run the wizard flow: validate, request the estimate, persist.
    ///
    /// The estimate is embedded once at creation and never mutated.
    pub async fn create_project(&self, input: NewProject) -> AppResult<Project> {
        let request = EstimateRequest {
            crop_name: input.crop_name,
            field_size_hectares: input.field_size_hectares,
            soil_type: input.soil_type,
            irrigation_system: input.irrigation_system,
        };
        validate_estimate_request(&request).map_err(|msg| AppError::Validation(msg.to_string()))?;

        let calculated_data = self.estimates.generate(&request).await?;
        let project = Project::new(
            request.crop_name,
            request.field_size_hectares,
            request.soil_type,
            request.irrigation_system,
            chrono::Local::now().date_naive(),
            calculated_data,
        );
        self.repository.append(&project)?;
        tracing::info!(project_id = %project.id, crop = %project.crop_name, "project created");
        Ok(project)
    }

    pub fn list_projects(&self) -> AppResult<Vec<Project>> {
        self.repository.list()
    }

    pub fn find_project(&self, project_id: &str) -> AppResult<Project> {
        self.repository
            .find(project_id)?
            .ok_or_else(|| AppError::ProjectNotFound(project_id.to_string()))
    }

    /// Remove a project and, through the repository, its zone record
    pub fn delete_project(&self, project_id: &str) -> AppResult<Project> {
        let removed = self.repository.remove(project_id)?;
        tracing::info!(project_id = %removed.id, "project deleted");
        Ok(removed)
    }

    /// Dashboard aggregation for one project as of `today`
    pub fn overview(&self, project: &Project, today: NaiveDate) -> ProjectOverview {
        let data = &project.calculated_data;
        let total_days = data.estimated_growth_time_days;
        let days_passed = schedule::days_passed(project.created_on, today, total_days);
        let progress_percent = schedule::progress_percent(days_passed, total_days);
        ProjectOverview {
            metrics: FieldMetrics::compute(data, project.field_size_hectares),
            days_passed,
            total_days,
            progress_percent,
            stage: schedule::current_stage(progress_percent),
            upcoming_tasks: schedule::upcoming_tasks(
                &data.task_calendar,
                days_passed,
                self.upcoming_window_days,
            ),
        }
    }
}
