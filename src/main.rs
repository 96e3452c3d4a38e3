//! Choropleth CLI
//!
//! Usage:
//!   choropleth [OPTIONS] [FILE]
//!
//! Options:
//!   -d, --data <FILE>   Dataset with values and optional palette (TOML format)
//!   -a, --animate       Animate fill transitions
//!   --compact           Emit SVG without newlines or indentation
//!   -h, --help          Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use choropleth::{render_with_config, Dataset, RenderConfig, RenderError, SvgConfig};

#[derive(Parser)]
#[command(name = "choropleth")]
#[command(about = "Color SVG path regions by value")]
struct Cli {
    /// Source SVG file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Dataset with values and optional palette (TOML format)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Override the canvas width
    #[arg(long)]
    width: Option<f64>,

    /// Override the canvas height
    #[arg(long)]
    height: Option<f64>,

    /// Scale regions uniformly about the origin
    #[arg(long)]
    scale: Option<f64>,

    /// Animate fill transitions instead of applying them immediately
    #[arg(short, long)]
    animate: bool,

    /// Emit SVG without newlines or indentation
    #[arg(long)]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load dataset
    let mut dataset = match &cli.data {
        Some(path) => match Dataset::from_file(path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error loading dataset '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Dataset::default(),
    };

    // Command line overrides win over dataset settings
    dataset.width = cli.width.or(dataset.width);
    dataset.height = cli.height.or(dataset.height);
    dataset.scale = cli.scale.or(dataset.scale);

    // Read source document
    let (source, source_name) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = RenderConfig::new()
        .with_svg(SvgConfig::new().with_pretty_print(!cli.compact))
        .with_animate(cli.animate);
    match render_with_config(&source, &dataset, config) {
        Ok(svg) => {
            println!("{}", svg);
        }
        Err(RenderError::Source(e)) => {
            eprintln!("{}", e.format(&source, &source_name));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r##"Choropleth - color SVG path regions by value

USAGE:
    choropleth [OPTIONS] [FILE]
    cat map.svg | choropleth -d values.toml

OPTIONS:
    -d, --data <FILE>   Dataset with values and optional palette (TOML)
    --width <W>         Override the canvas width
    --height <H>        Override the canvas height
    --scale <FACTOR>    Scale regions uniformly about the origin
    -a, --animate       Animate fill transitions
    --compact           Emit SVG without newlines or indentation
    -h, --help          Print help

QUICK START:
    cat europe.svg | choropleth -d population.toml > colored.svg

A dataset file looks like:

    palette = ["#eff3ff", "#bdd7e7", "#6baed6", "#3182bd", "#08519c"]

    [values]
    fra = 67
    deu = 83
    ita = 59

Each key names a path id in the source SVG. Values are normalized
against the observed range and each region is filled with the color
whose palette bucket its weight lands in. Without a dataset the map
is drawn in its neutral default style."##
    );
}
