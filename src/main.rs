// Standard library imports
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// External crate imports
use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use log::{debug, error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::select;

// Internal crate imports
use ars_price_calculator::calculator::{validation, PriceCalculator, RateState};
use ars_price_calculator::config_loader::AppConfig;
use ars_price_calculator::domain::enums::RateSource;
use ars_price_calculator::domain::model::quote::Calculation;
use ars_price_calculator::domain::model::rate::Rates;
use ars_price_calculator::domain::traits::RateProvider;
use ars_price_calculator::infrastructure::dolarapi::DolarApiClient;
use ars_price_calculator::render;

/// Converts USD game prices into Argentine peso sale prices
#[derive(Parser, Debug)]
#[command(name = "ars-price")]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, env = "ARS_PRICE_CONFIG", default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a single USD amount
    Quote {
        /// Price in dollars, e.g. 14.99
        #[arg(allow_hyphen_values = true)]
        usd: String,

        #[command(flatten)]
        view: ViewArgs,

        /// Print the calculation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the current dollar rates
    Rates {
        /// crypto, card or both; transfer and dual also work (defaults to the configured source)
        #[arg(long)]
        source: Option<RateSource>,
    },

    /// Load rates once, then price every line read from stdin
    Interactive {
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Rates to price against: crypto, card or both; transfer and dual also work (defaults to the configured source)
    #[arg(long)]
    source: Option<RateSource>,

    /// Show the seller breakdown (cost, rate and profit)
    #[arg(long)]
    admin: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    // RUST_LOG wins over the default; --verbose forces debug
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();
    debug!("Logger initialized");

    let config = load_config(&cli.config)?;
    let client = DolarApiClient::new(&config.rate_service, config.request_timeout())?;

    match cli.command {
        Commands::Quote { usd, view, json } => run_quote(&config, client, &usd, view, json).await,
        Commands::Rates { source } => run_rates(&config, client, source).await,
        Commands::Interactive { view } => run_interactive(&config, client, view).await,
    }
}

/// Missing file means defaults; a file that exists but is invalid is an error
fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        warn!("Config file {} not found, using defaults", path.display());
        return Ok(AppConfig::default());
    }
    AppConfig::from_file(path)
}

fn source_for(config: &AppConfig, source: Option<RateSource>) -> RateSource {
    source.unwrap_or(config.app.default_source)
}

async fn run_quote(
    config: &AppConfig,
    client: DolarApiClient,
    usd: &str,
    view: ViewArgs,
    json: bool,
) -> Result<()> {
    // Reject bad input before touching the network
    let usd_price = validation::parse_usd_price(usd)?;

    let profile = config.profile(source_for(config, view.source));
    let calculator = PriceCalculator::new(profile, config.display_delay());

    let rates = calculator.load_rates(&client).await?;
    let calculation = calculator.calculate_price(usd_price).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
    } else {
        print!("{}", render_calculation(&calculation, view.admin, Some(&rates)));
    }
    Ok(())
}

async fn run_rates(config: &AppConfig, client: DolarApiClient, source: Option<RateSource>) -> Result<()> {
    let rates = client
        .fetch_rates(source_for(config, source))
        .await
        .context("Could not fetch dollar rates")?;
    print!("{}", render::rates_view(&rates));
    Ok(())
}

async fn run_interactive(config: &AppConfig, client: DolarApiClient, view: ViewArgs) -> Result<()> {
    let profile = config.profile(source_for(config, view.source));
    let calculator = Arc::new(PriceCalculator::new(profile, config.display_delay()));

    // Rates load in the background; submissions before they arrive are refused
    let loader = tokio::spawn({
        let calculator = calculator.clone();
        async move {
            match calculator.load_rates(&client).await {
                Ok(rates) => {
                    info!("Dollar rates loaded");
                    eprint!("\n{}", render::rates_view(&rates));
                }
                Err(e) => eprintln!("\nError: {}", e),
            }
        }
    });

    eprintln!("Loading dollar rate... Enter a USD price per line, 'quit' to exit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt()?;
        select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = line.trim();
                if matches!(input, "quit" | "exit") {
                    break;
                }

                match calculator.calculate(input).await {
                    Ok(calculation) => {
                        let rates = match calculator.rate_state().await {
                            RateState::Ready(rates) => Some(rates),
                            _ => None,
                        };
                        print!("{}", render_calculation(&calculation, view.admin, rates.as_ref()));
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!("Ctrl+C received, leaving interactive mode");
                break;
            }
        }
    }

    if !loader.is_finished() {
        debug!("Aborting rate loader");
        loader.abort();
    }
    if let Err(e) = loader.await {
        if !e.is_cancelled() {
            error!("Rate loader panicked: {:?}", e);
            return Err(anyhow!("rate loader failed: {}", e));
        }
    }
    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "USD> ")?;
    stdout.flush()?;
    Ok(())
}

fn render_calculation(
    calculation: &Calculation,
    admin: bool,
    rates: Option<&Rates>,
) -> String {
    if admin {
        render::admin_view(calculation, rates)
    } else {
        render::public_view(calculation)
    }
}
