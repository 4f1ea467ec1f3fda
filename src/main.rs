use agri_client::config::cli::{
    farm_patch, new_farm, CliConfig, Command, FarmCommand, FarmerCommand, FarmersCommand,
};
use agri_client::domain::services::estimate_yield;
use agri_client::utils::{logger, validation::Validate};
use agri_client::{
    ApiClient, ClientError, ConfigProvider, FarmRepository, Farmer, FarmerPatch,
    FarmerRepository,
};
use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli.command);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ {} (Category: {:?}, operation: {:?})",
            e,
            e.category(),
            e.operation()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);

        let exit_code = if e.is_not_found() { 2 } else { 1 };
        std::process::exit(exit_code);
    }
}

async fn run(cli: CliConfig) -> Result<(), ClientError> {
    if let Command::Yield {
        crop,
        temperature,
        moisture,
    } = &cli.command
    {
        let estimate = estimate_yield(crop, *temperature, *moisture);
        println!("{:.2}", estimate);
        return Ok(());
    }

    let config = cli.client_config()?;
    config.validate()?;
    tracing::debug!("Using API at {}", config.api_root());

    let client = ApiClient::new(config);

    match cli.command {
        Command::Farms(command) => run_farm_command(&client, command).await,
        Command::Farmer(command) => run_farmer_command(&client, command).await,
        Command::Farmers(command) => run_farmers_command(&client, command).await,
        Command::Yield { .. } => Ok(()),
    }
}

async fn run_farm_command<R: FarmRepository>(
    repo: &R,
    command: FarmCommand,
) -> Result<(), ClientError> {
    match command {
        FarmCommand::List { farmer: None } => print_json(&repo.list_farms().await?),
        FarmCommand::List {
            farmer: Some(farmer_id),
        } => print_json(&repo.list_farms_by_farmer(farmer_id).await?),
        FarmCommand::Get { id } => print_json(&repo.get_farm(id).await?),
        FarmCommand::Create {
            farmer,
            name,
            crop,
            area,
            details,
        } => {
            let farm = new_farm(farmer, name, crop, area, details);
            print_json(&repo.create_farm(&farm).await?)
        }
        FarmCommand::Update {
            id,
            farmer,
            name,
            crop,
            area,
            details,
        } => {
            let patch = farm_patch(farmer, name, crop, area, details);
            if patch.is_empty() {
                tracing::warn!("No fields given; sending an empty update for farm {}", id);
            }
            print_json(&repo.update_farm(id, &patch).await?)
        }
        FarmCommand::Delete { id } => {
            repo.delete_farm(id).await?;
            println!("Deleted farm {}", id);
            Ok(())
        }
    }
}

async fn run_farmer_command<R: FarmerRepository>(
    repo: &R,
    command: FarmerCommand,
) -> Result<(), ClientError> {
    match command {
        FarmerCommand::Get { id } => print_json(&repo.get_farmer(id).await?),
        FarmerCommand::Update { id, name, location } => {
            let patch = FarmerPatch { name, location };
            if patch.is_empty() {
                tracing::warn!("No fields given; sending an empty update for farmer {}", id);
            }
            print_json(&repo.update_farmer(id, &patch).await?)
        }
    }
}

async fn run_farmers_command<R: FarmerRepository>(
    repo: &R,
    command: FarmersCommand,
) -> Result<(), ClientError> {
    match command {
        FarmersCommand::List => print_json(&repo.list_farmers().await?),
        FarmersCommand::Create { name, location } => {
            let farmer = Farmer::new(name, location);
            print_json(&repo.create_farmer(&farmer).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ClientError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
