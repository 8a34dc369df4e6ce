mod cli;

use agroadvisor::config::Config;
use agroadvisor::logic::weather_risk::{assess_weather, WeatherOutlook};
use agroadvisor::logic::{ExpertEngine, TelemetryAggregator};
use agroadvisor::models::{AnalysisInput, AnalysisResult, Crop, FarmSnapshot};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const UNAVAILABLE_NOTICE: &str =
    "Advisory temporarily unavailable. Please check back once fresh farm data arrives.";

#[derive(Serialize)]
struct Report<'a> {
    farm: &'a str,
    crop: &'a str,
    analysis: &'a AnalysisResult,
    weather: WeatherOutlook,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            file,
            crop,
            raw,
            text,
        } => {
            let config = Config::load_or_default(cli.config)?;
            analyze(&config, &file, crop, raw, text)
        }
        Commands::Crops => {
            print_crops();
            Ok(())
        }
        Commands::Check => {
            let config = Config::load(cli.config)?;
            println!("Config OK: farm '{}'", config.farm.name);
            for (crop, overrides) in &config.crops {
                println!("  {}: {}", crop, serde_json::to_string(overrides)?);
            }
            Ok(())
        }
    }
}

fn analyze(
    config: &Config,
    file: &Path,
    crop: Option<String>,
    raw: bool,
    text: bool,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut input = if raw {
        AnalysisInput::from_json(&content).context("Failed to parse engine input")?
    } else {
        let snapshot = FarmSnapshot::from_json(&content).context("Failed to parse farm snapshot")?;
        TelemetryAggregator::new(config.aggregation.clone())
            .from_snapshot(&snapshot, config.farm.crop.as_deref())
    };

    if crop.is_some() {
        input.crop = crop;
    }
    let crop_name = input.crop.clone().unwrap_or_else(|| "Generic".into());
    let overrides = config.overrides_for(&crop_name);

    let engine = ExpertEngine::new();
    let analysis = match engine.analyze(&input, &overrides) {
        Ok(a) => a,
        Err(e) => {
            println!("{}", UNAVAILABLE_NOTICE);
            return Err(anyhow::Error::new(e).context("Analysis failed"));
        }
    };
    tracing::info!(
        crop = %crop_name,
        score = analysis.risk_score,
        level = %analysis.risk_level,
        "analysis finished"
    );

    let weather = input
        .weather
        .as_ref()
        .map(assess_weather)
        .context("weather record missing after validation")?;

    let report = Report {
        farm: &config.farm.name,
        crop: &crop_name,
        analysis: &analysis,
        weather,
    };

    if text {
        print_text(&report);
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn print_text(report: &Report) {
    let analysis = report.analysis;
    println!("{} / {}", report.farm, report.crop);
    println!("{}", analysis.summary);
    println!();
    println!(
        "Risk: {} (score {}){}",
        analysis.risk_level,
        analysis.risk_score,
        if analysis.has_critical_alert() {
            " - act now"
        } else {
            ""
        }
    );
    for alert in &analysis.alerts {
        println!("  {} {}", alert.severity.symbol(), alert.message);
    }
    if !analysis.actions.is_empty() {
        println!();
        println!("Actions:");
        for action in &analysis.actions {
            println!("  - {}", action);
        }
    }
    println!();
    println!(
        "Chilling hours ahead: {} | Spraying: {}",
        analysis.details.chilling_hours,
        if report.weather.spraying_suitable {
            "suitable"
        } else {
            "not advised"
        }
    );
}

fn print_crops() {
    println!(
        "{:<10} {:>8} {:>10} {:>10}",
        "Crop", "Base °C", "Lethal °C", "Stress °C"
    );
    for crop in Crop::ALL {
        let profile = crop.profile();
        println!(
            "{:<10} {:>8.1} {:>10.1} {:>10.1}",
            crop.as_str(),
            profile.base_temp,
            profile.lethal_min,
            profile.stress_temp_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_returns_error_instead_of_exiting() {
        let path = std::env::temp_dir().join("agroadvisor-no-weather.json");
        std::fs::write(&path, r#"{"crop": "Corn"}"#).unwrap();

        let result = analyze(&Config::default(), &path, None, true, false);
        let _ = std::fs::remove_file(&path);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Analysis failed"));
    }
}
