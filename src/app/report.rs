use crate::domain::model::{Behavior, Child, Delivery, Place, RoutePlan};
use crate::utils::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub const ALL: [&'static str; 3] = ["table", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(PlannerError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Allowed values: {}", Self::ALL.join(", ")),
            }),
        }
    }
}

fn csv_to_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| PlannerError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| PlannerError::StorageError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

pub fn render_deliveries(deliveries: &[Delivery], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "message": "Deliveries",
            "deliveries": deliveries,
        }))?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["rank", "place_id", "place", "latitude", "longitude", "good_children", "names"])?;
            for (rank, d) in deliveries.iter().enumerate() {
                let names: Vec<&str> = d.matching_children.iter().map(|c| c.name.as_str()).collect();
                writer.write_record([
                    (rank + 1).to_string(),
                    d.place.id.to_string(),
                    d.place.name.clone(),
                    d.place.coordinates.latitude.to_string(),
                    d.place.coordinates.longitude.to_string(),
                    d.count.to_string(),
                    names.join(";"),
                ])?;
            }
            csv_to_string(writer)
        }
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(out, "{:>4}  {:<24} {:>6}  children", "rank", "place", "good");
            for (rank, d) in deliveries.iter().enumerate() {
                let names: Vec<&str> = d.matching_children.iter().map(|c| c.name.as_str()).collect();
                let _ = writeln!(
                    out,
                    "{:>4}  {:<24} {:>6}  {}",
                    rank + 1,
                    d.place.name,
                    d.count,
                    names.join(", ")
                );
            }
            Ok(out)
        }
    }
}

pub fn render_route(plan: &RoutePlan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "message": "Total distance for the delivery route",
            "distanceKm": plan.total_distance_km,
            "stops": plan.stops,
            "legs": plan.legs,
        }))?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["leg", "from", "to", "distance_km"])?;
            for (i, leg) in plan.legs.iter().enumerate() {
                writer.write_record([
                    (i + 1).to_string(),
                    leg.from.to_string(),
                    leg.to.to_string(),
                    format!("{:.3}", leg.distance_km),
                ])?;
            }
            csv_to_string(writer)
        }
        OutputFormat::Table => {
            let mut out = String::new();
            let names: Vec<&str> = plan.stops.iter().map(|p| p.name.as_str()).collect();
            if !names.is_empty() {
                let _ = writeln!(out, "{}", names.join(" -> "));
            }
            let _ = writeln!(
                out,
                "{} stops, {} legs, total {:.3} km",
                plan.stops.len(),
                plan.legs.len(),
                plan.total_distance_km
            );
            Ok(out)
        }
    }
}

pub fn render_places(places: &[Place], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(places)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["id", "name", "latitude", "longitude"])?;
            for p in places {
                writer.write_record([
                    p.id.to_string(),
                    p.name.clone(),
                    p.coordinates.latitude.to_string(),
                    p.coordinates.longitude.to_string(),
                ])?;
            }
            csv_to_string(writer)
        }
        OutputFormat::Table => {
            let mut out = String::new();
            for p in places {
                let _ = writeln!(
                    out,
                    "{}  {:<24} [{}, {}]",
                    p.id, p.name, p.coordinates.latitude, p.coordinates.longitude
                );
            }
            Ok(out)
        }
    }
}

pub fn render_children(
    children: &[Child],
    behavior: Option<Behavior>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let message = match behavior {
                Some(Behavior::Good) => "Good children",
                Some(Behavior::Bad) => "Bad children",
                None => "Children",
            };
            Ok(serde_json::to_string_pretty(&serde_json::json!({
                "message": message,
                "children": children,
            }))?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["id", "name", "behavior", "place_id"])?;
            for c in children {
                writer.write_record([
                    c.id.as_str(),
                    c.name.as_str(),
                    c.behavior.as_str(),
                    c.place_id.as_str(),
                ])?;
            }
            csv_to_string(writer)
        }
        OutputFormat::Table => {
            let mut out = String::new();
            for c in children {
                let _ = writeln!(out, "{}  {:<24} {:<4} {}", c.id, c.name, c.behavior, c.place_id);
            }
            Ok(out)
        }
    }
}
