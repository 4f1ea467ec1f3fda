use crate::config::{ClientConfig, ConfigProvider, API_KEY_ENV, BASE_URL_ENV};
use crate::domain::model::{Farm, FarmPatch};
use crate::utils::error::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "agri")]
#[command(about = "Manage farms and farmer profiles through the farm API")]
pub struct CliConfig {
    /// API base URL; `/api` is appended
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// TOML file with an [api] table; flags and environment take precedence
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Farm records
    #[command(subcommand)]
    Farms(FarmCommand),
    /// A single farmer profile
    #[command(subcommand)]
    Farmer(FarmerCommand),
    /// All farmers
    #[command(subcommand)]
    Farmers(FarmersCommand),
    /// Estimate yield (t/ha) from average conditions
    Yield {
        #[arg(long)]
        crop: String,
        #[arg(long)]
        temperature: f64,
        #[arg(long)]
        moisture: f64,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FarmCommand {
    List {
        #[arg(long)]
        farmer: Option<i64>,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        farmer: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        crop: String,
        #[arg(long)]
        area: f64,
        #[command(flatten)]
        details: FarmDetails,
    },
    Update {
        id: i64,
        #[arg(long)]
        farmer: Option<i64>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        crop: Option<String>,
        #[arg(long)]
        area: Option<f64>,
        #[command(flatten)]
        details: FarmDetails,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FarmDetails {
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,
    #[arg(long)]
    pub soil: Option<String>,
    #[arg(long)]
    pub irrigation: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub last_planted: Option<NaiveDate>,
    #[arg(long)]
    pub expected_yield: Option<f64>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FarmerCommand {
    Get {
        id: i64,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FarmersCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
    },
}

impl CliConfig {
    /// 旗標/環境變數 > 設定檔 > 預設值
    pub fn client_config(&self) -> Result<ClientConfig> {
        let file = match &self.config {
            Some(path) => Some(ClientConfig::from_file(path)?),
            None => None,
        };

        let base_url = self
            .base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| file.as_ref().map(|f| f.base_url()));
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .or_else(|| file.as_ref().and_then(|f| f.api_key()));

        Ok(ClientConfig::new(base_url, api_key))
    }
}

impl FarmDetails {
    fn apply_to(self, farm: &mut Farm) {
        farm.latitude = self.latitude;
        farm.longitude = self.longitude;
        farm.soil_type = self.soil;
        farm.irrigation_type = self.irrigation;
        farm.last_planted = self.last_planted;
        farm.expected_yield = self.expected_yield;
    }
}

pub fn new_farm(farmer: i64, name: String, crop: String, area: f64, details: FarmDetails) -> Farm {
    let mut farm = Farm::new(farmer, name, crop, area);
    details.apply_to(&mut farm);
    farm
}

pub fn farm_patch(
    farmer: Option<i64>,
    name: Option<String>,
    crop: Option<String>,
    area: Option<f64>,
    details: FarmDetails,
) -> FarmPatch {
    FarmPatch {
        farmer_id: farmer,
        name,
        crop_type: crop,
        area,
        latitude: details.latitude,
        longitude: details.longitude,
        soil_type: details.soil,
        irrigation_type: details.irrigation,
        last_planted: details.last_planted,
        expected_yield: details.expected_yield,
    }
}
