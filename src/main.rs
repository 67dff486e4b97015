use clap::{Parser, Subcommand};
use converter::config::Config;
use converter::convert::{ConversionOutcome, ConversionRequest};
use converter::format::{UnitFormatter, UnitStyle, MAX_FRACTION_DIGITS};
use converter::units::{self, Category};
use log::{debug, info};
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
const LOG_VAR: &str = "CONVERTER_LOG";
const DEFAULT_CONFIG: &str = "converter.toml";

#[derive(Parser)]
#[command(name = "converter")]
#[command(about = "Convert distances, masses, temperatures and times", long_about = None)]
struct Cli {
    /// Config file (default: ./converter.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount from one unit to another
    Convert {
        /// Amount to convert (e.g., "100" or "1,234.5")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Input unit (e.g., "km", "miles", "°C")
        from: String,

        /// Output unit
        to: String,

        /// Category both units must belong to (default: category of the input unit)
        #[arg(long)]
        category: Option<String>,

        /// Maximum fraction digits in the formatted result (0-17)
        #[arg(short, long, value_parser = parse_digits)]
        digits: Option<usize>,

        /// Print unit symbols instead of names
        #[arg(long)]
        short: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a quantity string such as "100 mi" to another unit
    Eval {
        /// Quantity (e.g., "100 mi", "-40 °F")
        #[arg(allow_hyphen_values = true)]
        quantity: String,

        /// Output unit
        to: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List units, optionally for a single category
    Units {
        /// Category name (e.g., "distance")
        category: Option<String>,
    },

    /// List conversion categories
    Categories,
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logger() {
    if pretty_env_logger::try_init_custom_env(LOG_VAR).is_err() {
        eprintln!("Could not initialize logger");
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logger() {}

fn main() {
    init_logger();

    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Convert {
            amount,
            from,
            to,
            category,
            digits,
            short,
            json,
        } => {
            let formatter = build_formatter(&config, digits, short);
            convert_amount(&formatter, &amount, &from, &to, category.as_deref(), json)
        }
        Commands::Eval { quantity, to, json } => {
            eval_quantity(&config.formatter(), &quantity, &to, json)
        }
        Commands::Units { category } => list_units(&config.formatter(), category.as_deref()),
        Commands::Categories => list_categories(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Ok(Config::load_from_file(path)?)
        }
        None => {
            let default_path = Path::new(DEFAULT_CONFIG);
            if default_path.exists() {
                info!("Loading config from {}", default_path.display());
                Ok(Config::load_from_file(default_path)?)
            } else {
                debug!("No config file, using defaults");
                Ok(Config::empty())
            }
        }
    }
}

fn parse_digits(s: &str) -> Result<usize, String> {
    let digits: usize = s.parse().map_err(|e| format!("{}", e))?;
    if digits > MAX_FRACTION_DIGITS {
        return Err(format!("must be at most {}", MAX_FRACTION_DIGITS));
    }
    Ok(digits)
}

fn build_formatter(config: &Config, digits: Option<usize>, short: bool) -> UnitFormatter {
    let mut options = config.format_options();
    if let Some(digits) = digits {
        options.max_fraction_digits = digits;
    }
    if short {
        options.style = UnitStyle::Short;
    }
    UnitFormatter::new(options)
}

fn convert_amount(
    formatter: &UnitFormatter,
    amount: &str,
    from: &str,
    to: &str,
    category: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let amount = converter::convert::parse_amount(amount, formatter.locale())?;
    let from = units::lookup_unit(from)?;
    let to = units::lookup_unit(to)?;

    let request = match category {
        Some(name) => ConversionRequest::new(amount, name.parse::<Category>()?, from, to)?,
        None => ConversionRequest::between(amount, from, to)?,
    };

    print_outcome(formatter, request, json)
}

fn eval_quantity(
    formatter: &UnitFormatter,
    quantity: &str,
    to: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (amount, from) = units::parse_quantity(quantity)?;
    let to = units::lookup_unit(to)?;
    let request = ConversionRequest::between(amount, from, to)?;

    print_outcome(formatter, request, json)
}

fn print_outcome(
    formatter: &UnitFormatter,
    request: ConversionRequest,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = request.execute()?;
    let formatted = formatter.format(value, request.to);

    if json {
        let outcome = ConversionOutcome {
            request,
            value,
            formatted,
        };
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn list_units(
    formatter: &UnitFormatter,
    category: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let categories = match category {
        Some(name) => vec![name.parse::<Category>()?],
        None => Category::all().to_vec(),
    };

    for category in categories {
        let base = units::base_unit(category);
        println!("{}:", category);
        for unit in units::units_for(category) {
            let marker = if *unit == base { " (base)" } else { "" };
            println!(
                "  - {} [{}]{}",
                formatter.label(*unit, false),
                unit.symbol(),
                marker
            );
        }
    }

    Ok(())
}

fn list_categories() -> Result<(), Box<dyn std::error::Error>> {
    for category in Category::all() {
        let units: Vec<&str> = units::units_for(*category)
            .iter()
            .map(|u| u.symbol())
            .collect();
        println!("{} ({})", category, units.join(", "));
    }
    Ok(())
}
