mod api;
mod cli_messages;
mod config;
mod consts;
mod error_classifier;
mod events;
mod food;
mod logging;
mod session;
mod ui;

use crate::api::ApiClient;
use crate::config::{Config, get_config_path, resolve_api_url};
use crate::food::FoodInput;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for a restaurant menu API
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the menu dashboard
    Start {
        /// Base URL of the menu API (overrides RESTAURANT_API_URL and the config file)
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Disable background colors
        #[arg(long = "no-background-color", action = clap::ArgAction::SetTrue)]
        no_background_color: bool,
    },
    /// Print every dish on the menu
    List {
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Add a dish to the menu
    Add {
        #[arg(long)]
        name: String,

        /// Image URL
        #[arg(long, default_value = "")]
        image: String,

        /// Decimal price, e.g. 12.50
        #[arg(long)]
        price: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Remove a dish from the menu
    Delete {
        /// ID of the dish to remove
        id: u64,

        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Save the menu API URL to the config file
    SetApi {
        /// Base URL of the menu API
        url: String,
    },
    /// Delete the config file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();

    let result: Result<(), Box<dyn Error>> = match args.command {
        Command::Start {
            api_url,
            no_background_color,
        } => {
            let api_url = resolve_api_url(api_url, &config_path);
            session::run_tui_mode(api_url, !no_background_color).await
        }
        Command::List { api_url } => {
            let client = ApiClient::new(resolve_api_url(api_url, &config_path));
            session::list_menu(&client).await.map(|_| ())
        }
        Command::Add {
            name,
            image,
            price,
            description,
            api_url,
        } => {
            let client = ApiClient::new(resolve_api_url(api_url, &config_path));
            let input = FoodInput::new(&name, &image, &price, &description);
            session::add_dish(&client, input).await.map(|_| ())
        }
        Command::Delete { id, api_url } => {
            let client = ApiClient::new(resolve_api_url(api_url, &config_path));
            session::delete_dish(&client, id).await
        }
        Command::SetApi { url } => {
            let config = Config::new(url.trim().to_string());
            config
                .save(&config_path)
                .map(|()| {
                    crate::print_cmd_success!(
                        "API URL saved",
                        "{} -> {}",
                        config.api_url,
                        config_path.display()
                    )
                })
                .map_err(Into::into)
        }
        Command::Reset => {
            crate::print_cmd_info!("Resetting configuration", "{}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    };

    // Reported once here; returning the error would print it again
    if let Err(e) = result {
        crate::print_cmd_error!("Command failed", &e.to_string());
        std::process::exit(1);
    }
    Ok(())
}
