//! Agri-Pro - agricultural planning CLI
//!
//! Terminal front end over the planning core: creates projects via the
//! estimate provider, lists them, and renders a project overview with the
//! growth schedule, upcoming tasks and the local forecast.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agri_pro_app::config::Config;
use agri_pro_app::external::estimate::MockEstimateProvider;
use agri_pro_app::external::geolocation::{FixedLocationProvider, GeolocationProvider};
use agri_pro_app::external::weather::{irrigation_advice, MockWeatherProvider, WeatherProvider};
use agri_pro_app::services::projects::{NewProject, ProjectService};
use agri_pro_app::store::{JsonFileStore, KeyValueStore, ProjectRepository};
use shared::models::Project;
use shared::schedule::start_label;
use shared::timeline::legend;
use shared::types::{IrrigationSystem, SoilType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri_pro=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;
    tracing::info!("Starting Agri-Pro planner");
    tracing::info!("Environment: {}", config.environment);

    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&config.store.path)?);
    let service = ProjectService::new(
        ProjectRepository::new(store),
        Arc::new(MockEstimateProvider),
        config.schedule.upcoming_window_days,
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("list") => list_projects(&service)?,
        Some("create") => create_project(&service, &args[1..]).await?,
        Some("show") => show_project(&service, &config, &args[1..]).await?,
        Some("delete") => delete_project(&service, &args[1..])?,
        Some(other) => {
            eprintln!("unknown command: {other}");
            print_usage();
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("usage: agri-pro [list]");
    eprintln!("       agri-pro create <crop> <hectares> <soil> <irrigation>");
    eprintln!("       agri-pro show <project-id>");
    eprintln!("       agri-pro delete <project-id>");
}

fn list_projects(service: &ProjectService) -> anyhow::Result<()> {
    let projects = service.list_projects()?;
    if projects.is_empty() {
        println!("Aucun projet. Créez-en un avec `agri-pro create`.");
        return Ok(());
    }
    for project in projects {
        println!(
            "{}  {} - {} ha, sol {}, créé le {}",
            project.id,
            project.crop_name,
            project.field_size_hectares,
            project.soil_type,
            project.creation_date_display()
        );
    }
    Ok(())
}

async fn create_project(service: &ProjectService, args: &[String]) -> anyhow::Result<()> {
    let [crop, hectares, soil, irrigation] = args else {
        print_usage();
        anyhow::bail!("create expects <crop> <hectares> <soil> <irrigation>");
    };
    let input = NewProject {
        crop_name: crop.clone(),
        field_size_hectares: Decimal::from_str(hectares)
            .map_err(|e| anyhow::anyhow!("invalid field size '{hectares}': {e}"))?,
        soil_type: SoilType::from_str(soil).map_err(anyhow::Error::msg)?,
        irrigation_system: IrrigationSystem::from_str(irrigation).map_err(anyhow::Error::msg)?,
    };
    let project = service.create_project(input).await?;
    println!("Projet créé: {} ({})", project.crop_name, project.id);
    Ok(())
}

fn delete_project(service: &ProjectService, args: &[String]) -> anyhow::Result<()> {
    let Some(project_id) = args.first() else {
        print_usage();
        anyhow::bail!("delete expects <project-id>");
    };
    let removed = service.delete_project(project_id)?;
    println!("Projet supprimé: {} ({})", removed.crop_name, removed.id);
    Ok(())
}

async fn show_project(
    service: &ProjectService,
    config: &Config,
    args: &[String],
) -> anyhow::Result<()> {
    let Some(project_id) = args.first() else {
        print_usage();
        anyhow::bail!("show expects <project-id>");
    };
    let project = service.find_project(project_id)?;
    let overview = service.overview(&project, chrono::Local::now().date_naive());

    print_header(&project);
    println!(
        "Rendement total estimé : {} t",
        overview.metrics.total_yield_tonnes.round_dp(1)
    );
    println!(
        "Main-d'œuvre totale    : {} h",
        overview.metrics.total_labor_hours.round_dp(0)
    );
    println!(
        "Plants nécessaires     : {}",
        overview.metrics.total_plants.round_dp(0)
    );
    println!(
        "Eau sur le cycle       : {} m³",
        overview.metrics.total_water_m3.round_dp(0)
    );
    println!(
        "Jour {} / {} - {} ({:.0} %)",
        overview.days_passed, overview.total_days, overview.stage.name, overview.progress_percent
    );

    if overview.upcoming_tasks.is_empty() {
        println!("Aucune tâche dans les {} prochains jours.", config.schedule.upcoming_window_days);
    } else {
        println!("Tâches à venir :");
        for task in &overview.upcoming_tasks {
            println!(
                "  - {} ({}) : {}",
                task.task,
                start_label(task.start_day, overview.days_passed),
                task.description
            );
        }
    }

    let categories = legend(&project.calculated_data.task_calendar);
    let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();
    println!("Catégories du calendrier : {}", labels.join(", "));

    show_weather(config).await;
    Ok(())
}

fn print_header(project: &Project) {
    println!(
        "{} - {} ha, sol {}, irrigation {}",
        project.crop_name, project.field_size_hectares, project.soil_type, project.irrigation_system
    );
    println!("Créé le {}", project.creation_date_display());
}

/// Weather is best-effort: a location or fetch failure prints an inline
/// message and the forecast is simply omitted.
async fn show_weather(config: &Config) {
    let provider = match FixedLocationProvider::new(config.location.latitude, config.location.longitude)
    {
        Ok(provider) => provider,
        Err(e) => {
            println!("Météo indisponible : {e}");
            return;
        }
    };
    let location = match provider.locate().await {
        Ok(location) => location,
        Err(e) => {
            println!("Météo indisponible : {e}");
            return;
        }
    };
    match MockWeatherProvider.forecast(&location).await {
        Ok(forecasts) => {
            println!("Prévisions :");
            for forecast in &forecasts {
                println!(
                    "  {} {} : {}°C / {}°C, pluie {} %, {}",
                    forecast.day,
                    forecast.date,
                    forecast.temp_min,
                    forecast.temp_max,
                    forecast.precipitation_chance,
                    forecast.condition
                );
            }
            println!("{}", irrigation_advice(forecasts.first()));
        }
        Err(e) => println!("Météo indisponible : {e}"),
    }
}
