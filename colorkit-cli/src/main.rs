use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colorkit::{algorithms, Color, ColorRegistry};
use serde_json::json;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "colorkit",
    about = "Convert, compare and blend RGB colors",
    version,
    author
)]
struct Cli {
    /// Print results as JSON, matching the HTTP API bodies
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random color
    Random,

    /// Convert a hex color (e.g. B4DA55, #03f) to its RGB components
    ToRgb {
        /// Hex color
        hex: String,
    },

    /// Convert an R-G-B triple (e.g. 180-218-85) to hex
    ToHex {
        /// Dash-separated components
        #[arg(allow_hyphen_values = true)]
        rgb: String,
    },

    /// Print the brighter of two hex colors
    Brightest {
        /// First hex color (wins ties)
        color1: String,

        /// Second hex color
        color2: String,
    },

    /// Print the colors between two hex colors
    Interpolate {
        /// Start color
        color1: String,

        /// End color
        color2: String,

        /// Number of divisions; steps - 1 colors are printed
        #[arg(short, long, allow_negative_numbers = true)]
        steps: String,
    },
}

fn parse_color(hex: &str) -> Result<Color> {
    Color::from_hex(hex).with_context(|| format!("could not parse color {hex:?}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.command {
        Commands::Random => {
            let color = ColorRegistry::new().random_color();
            if cli.json {
                println!("{}", json!({ "color": color }));
            } else {
                println!("{color}");
            }
        }

        Commands::ToRgb { hex } => {
            let [r, g, b] = parse_color(&hex)?.components();
            if cli.json {
                println!("{}", json!({ "color": [r, g, b] }));
            } else {
                println!("{r} {g} {b}");
            }
        }

        Commands::ToHex { rgb } => {
            let hex = algorithms::rgb_to_hex(&rgb)
                .with_context(|| format!("could not parse components {rgb:?}"))?;
            if cli.json {
                println!("{}", json!({ "color": hex }));
            } else {
                println!("{hex}");
            }
        }

        Commands::Brightest { color1, color2 } => {
            let first = parse_color(&color1)?;
            let second = parse_color(&color2)?;
            debug!(
                first = first.average(),
                second = second.average(),
                "comparing averages"
            );

            let winner = algorithms::brightest(first, second);
            if cli.json {
                println!("{}", json!({ "color": winner }));
            } else {
                println!("{winner}");
            }
        }

        Commands::Interpolate {
            color1,
            color2,
            steps,
        } => {
            let start = parse_color(&color1)?;
            let end = parse_color(&color2)?;
            let steps = algorithms::parse_steps(&steps)?;

            let ramp = algorithms::interpolate(start, end, steps)?;
            debug!(steps, produced = ramp.len(), "interpolated colors");

            if cli.json {
                println!("{}", json!({ "steps": ramp }));
            } else {
                for color in ramp {
                    println!("{color}");
                }
            }
        }
    }

    Ok(())
}
