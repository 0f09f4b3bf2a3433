use crate::app::report::OutputFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "sleigh-planner")]
#[command(about = "Rank places by good children and measure the delivery route")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "JSON data file holding places and children")]
    pub data_file: Option<String>,

    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manage places
    #[command(subcommand)]
    Place(PlaceCommand),
    /// Manage children
    #[command(subcommand)]
    Child(ChildCommand),
    /// Places ranked by number of good children
    Deliveries,
    /// Distance of visiting the ranked places in order
    Route,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PlaceCommand {
    Add(AddPlaceArgs),
    List,
    Show {
        /// Place id or name
        key: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ChildCommand {
    Add(AddChildArgs),
    List {
        /// "good" or "bad"; all children when omitted
        #[arg(long)]
        behavior: Option<String>,
    },
}

// Fields stay optional so that absent values reach the payload checks.
#[derive(Debug, Clone, Args)]
pub struct AddPlaceArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct AddChildArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub behavior: Option<String>,
    #[arg(long)]
    pub place_id: Option<String>,
}

impl AddPlaceArgs {
    pub fn to_payload(&self) -> serde_json::Value {
        let mut payload = serde_json::Map::new();
        if let Some(name) = &self.name {
            payload.insert("name".to_string(), name.clone().into());
        }
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            payload.insert("coordinates".to_string(), serde_json::json!([lat, lon]));
        }
        serde_json::Value::Object(payload)
    }
}

impl AddChildArgs {
    pub fn to_payload(&self) -> serde_json::Value {
        let mut payload = serde_json::Map::new();
        for (key, value) in [
            ("name", &self.name),
            ("behavior", &self.behavior),
            ("placeId", &self.place_id),
        ] {
            if let Some(value) = value {
                payload.insert(key.to_string(), value.clone().into());
            }
        }
        serde_json::Value::Object(payload)
    }
}
