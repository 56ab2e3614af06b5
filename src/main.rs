mod catalog;
mod constants;
mod propagation;
mod risk;
mod web;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;

use crate::catalog::{Catalog, CatalogFetcher};
use crate::propagation::Sgp4Propagator;
use crate::risk::{
    assess_launch, assess_orbit, compute_occupancy, parse_launch_time, LaunchRiskQuery,
    LaunchSite, OccupancyWindow, OrbitRiskQuery,
};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "orbit-risk")]
#[command(about = "Collision risk and insurance estimates for satellites and launches")]
struct Cli {
    /// Configuration file (YAML)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve,
    /// Assess a satellite operating at a fixed altitude
    Orbit {
        /// Operational altitude (km)
        #[arg(long)]
        height: f64,
        /// Effective cross-section (m²)
        #[arg(long)]
        area: f64,
        /// Mission duration (years)
        #[arg(long)]
        years: f64,
        #[arg(long)]
        full_cost: f64,
        #[arg(long)]
        lost_revenue: f64,
        /// Relative velocity (km/s)
        #[arg(long)]
        velocity: Option<f64>,
    },
    /// Assess a vertical ascent from a launch site
    Launch {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS, UTC
        #[arg(long)]
        date: String,
        /// Ascent altitude (km)
        #[arg(long)]
        ascent_altitude: f64,
        /// Ascent duration (s)
        #[arg(long)]
        ascent_duration: f64,
        /// Rocket cross-section (m²)
        #[arg(long)]
        rocket_area: f64,
        #[arg(long)]
        total_loss: f64,
        /// Corridor radius (m)
        #[arg(long)]
        radius: Option<f64>,
        /// Relative velocity (km/s)
        #[arg(long)]
        velocity: Option<f64>,
    },
    /// Count catalog objects inside an altitude/inclination window
    Occupancy {
        #[arg(long)]
        min_altitude: f64,
        #[arg(long)]
        max_altitude: f64,
        #[arg(long, default_value_t = 0.0)]
        min_inclination: f64,
        #[arg(long, default_value_t = 180.0)]
        max_inclination: f64,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Serve => match runtime.block_on(web::run_server(config)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Server error: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Orbit {
            height,
            area,
            years,
            full_cost,
            lost_revenue,
            velocity,
        } => {
            let query = OrbitRiskQuery {
                height_km: height,
                effective_area_m2: area,
                mission_years: years,
                full_cost,
                lost_revenue,
                relative_velocity_km_s: velocity
                    .unwrap_or(config.risk.default_relative_velocity_km_s),
            };
            let Some(catalog) = fetch(&runtime, &config) else {
                return ExitCode::FAILURE;
            };
            match assess_orbit(&catalog.into_records(), &query) {
                Ok(assessment) => print_json(&assessment),
                Err(e) => {
                    eprintln!("Assessment failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Launch {
            lat,
            lon,
            date,
            ascent_altitude,
            ascent_duration,
            rocket_area,
            total_loss,
            radius,
            velocity,
        } => {
            let launch_time = match parse_launch_time(&date) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                }
            };
            let query = LaunchRiskQuery {
                site: LaunchSite {
                    lat_deg: lat,
                    lon_deg: lon,
                },
                launch_time,
                ascent_altitude_km: ascent_altitude,
                ascent_duration_seconds: ascent_duration,
                rocket_area_m2: rocket_area,
                total_loss_cost: total_loss,
                corridor_radius_m: radius.unwrap_or(config.risk.default_corridor_radius_m),
                relative_velocity_km_s: velocity
                    .unwrap_or(config.risk.default_relative_velocity_km_s),
            };
            let Some(catalog) = fetch(&runtime, &config) else {
                return ExitCode::FAILURE;
            };
            let result = assess_launch(
                &catalog.into_records(),
                &Sgp4Propagator::new(),
                &query,
                config.risk.time_step_seconds,
            );
            match result {
                Ok(assessment) => {
                    log::info!(
                        "{} of {} candidates inside {:.0} km³ ({} samples, {} failed propagations)",
                        assessment.scan.danger_count(),
                        assessment.candidates,
                        assessment.corridor_volume_km3,
                        assessment.scan.samples,
                        assessment.scan.failures.len()
                    );
                    print_json(&assessment.report)
                }
                Err(e) => {
                    eprintln!("Assessment failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Occupancy {
            min_altitude,
            max_altitude,
            min_inclination,
            max_inclination,
        } => {
            let window =
                OccupancyWindow::new(min_altitude, max_altitude, min_inclination, max_inclination);
            if !window.is_valid() {
                eprintln!("Empty occupancy window: {:?}", window);
                return ExitCode::FAILURE;
            }
            let Some(catalog) = fetch(&runtime, &config) else {
                return ExitCode::FAILURE;
            };
            let records = catalog.into_records();
            let result = compute_occupancy(&records, &window);
            print_json(&serde_json::json!({
                "buckets": result.buckets,
                "skipped": result.skipped,
            }))
        }
    }
}

fn fetch(runtime: &tokio::runtime::Runtime, config: &Config) -> Option<Catalog> {
    match CatalogFetcher::new(config.catalog.clone()) {
        Ok(fetcher) => Some(runtime.block_on(fetcher.fetch_catalog())),
        Err(e) => {
            eprintln!("Error creating catalog client: {}", e);
            None
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error encoding output: {}", e);
            ExitCode::FAILURE
        }
    }
}
