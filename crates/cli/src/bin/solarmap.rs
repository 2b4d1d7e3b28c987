use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{Parser, ValueEnum};
use mapper_provider::PlanetClient;
use solar_system_mapper::body::{Body, PositionedBody};
use solar_system_mapper::calendar::Date;
use solar_system_mapper::catalog::{self, Catalog};
use solar_system_mapper::kepler::KeplerSolver;
use solar_system_mapper::render;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "ASCII top-down map of the solar system for a given date"
)]
struct Cli {
    /// Target date in dd/mm/yyyy format (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// YAML catalog overriding the built-in solar system
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Skip the planet API and use the catalog's stored period/semi-major axis
    #[arg(long, default_value_t = false)]
    offline: bool,

    /// Strategy for Kepler's equation
    #[arg(long, value_enum, default_value_t = SolverMode::FirstOrder)]
    solver: SolverMode,

    /// Print each planet's computed orbital state before the map
    #[arg(long, default_value_t = false)]
    positions: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum SolverMode {
    FirstOrder,
    Newton,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => catalog::load(path)?,
        None => Catalog::solar_system(),
    };

    let date = match &cli.date {
        Some(text) => Date::parse(text)?,
        None => today(),
    };

    let solver = match cli.solver {
        SolverMode::FirstOrder => KeplerSolver::FirstOrder,
        SolverMode::Newton => KeplerSolver::newton(),
    };

    let bodies = if cli.offline {
        offline_bodies(&catalog)?
    } else {
        fetched_bodies(&catalog)?
    };

    let positioned = bodies
        .into_iter()
        .map(|body| body.position_on(date, solver))
        .collect::<Result<Vec<PositionedBody>, _>>()?;

    if cli.positions {
        for p in &positioned {
            println!(
                "{:<8} E = {:+.6} rad  r = {:.4} AU  position = ({:+.4}, {:+.4}) AU",
                p.body.name,
                p.state.eccentric_anomaly,
                p.state.radial_distance_au,
                p.state.position.x_au,
                p.state.position.y_au,
            );
        }
    }

    print!(
        "{}",
        render::render_views(&positioned, &catalog.scenes, &date.to_string())
    );

    Ok(())
}

fn today() -> Date {
    let now = Local::now().date_naive();
    Date::new(now.day(), now.month(), now.year())
}

fn offline_bodies(catalog: &Catalog) -> anyhow::Result<Vec<Body>> {
    Ok(catalog
        .bodies
        .iter()
        .map(|cfg| cfg.to_body_offline())
        .collect::<Result<Vec<Body>, _>>()?)
}

fn fetched_bodies(catalog: &Catalog) -> anyhow::Result<Vec<Body>> {
    let client = PlanetClient::from_env()?;
    catalog
        .bodies
        .iter()
        .map(|cfg| {
            let facts = client.fetch(&cfg.name)?;
            Ok(cfg.to_body(facts.period, facts.semi_major_axis)?)
        })
        .collect()
}
