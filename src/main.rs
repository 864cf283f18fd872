//! Icon Renderer CLI
//!
//! Usage:
//!   icon-renderer [OPTIONS] [NAME]...
//!
//! Options:
//!   -s, --size <PX>            Icon size in pixels
//!   -c, --color <COLOR>        Stroke color (or a palette token from --config)
//!   -w, --stroke-width <W>     Base stroke width on the 24-unit canvas
//!   -l, --list                 List available icon names
//!   --lint                     Check icon definitions for authoring defects
//!   -h, --help                 Print help

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use icon_renderer::lint;
use icon_renderer::{
    render_from, to_data_uri, IconCatalog, IconPack, IconProps, RenderConfig, RenderError,
    StyleConfig, SvgConfig,
};

#[derive(Parser)]
#[command(name = "icon-renderer")]
#[command(about = "Render stroke icons to SVG")]
struct Cli {
    /// Icons to render (all icons with --lint if omitted)
    names: Vec<String>,

    /// Icon size in pixels
    #[arg(short, long)]
    size: Option<f64>,

    /// Stroke color (or a palette token from --config)
    #[arg(short, long)]
    color: Option<String>,

    /// Base stroke width on the 24-unit canvas
    #[arg(short = 'w', long)]
    stroke_width: Option<f64>,

    /// Don't scale the stroke width with the icon size
    /// (`--absolute-stroke-width=false` overrides a config default)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    absolute_stroke_width: Option<bool>,

    /// Extra CSS class for the root element
    #[arg(long)]
    class: Option<String>,

    /// Extra root attribute (repeatable)
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    attributes: Vec<(String, String)>,

    /// Style config file with defaults and a color palette (TOML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Icon pack file (TOML format, repeatable)
    #[arg(short, long = "pack")]
    packs: Vec<PathBuf>,

    /// List available icon names
    #[arg(short, long)]
    list: bool,

    /// Check icon definitions for authoring defects
    #[arg(long)]
    lint: bool,

    /// Print a base64 data URI instead of SVG text
    #[arg(long)]
    data_uri: bool,

    /// Write SVG without indentation
    #[arg(long)]
    compact: bool,

    /// Include the XML declaration
    #[arg(long)]
    standalone: bool,

    /// Write each icon to <DIR>/<name>.svg instead of stdout
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Log more detail (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load style config
    if let Some(path) = &cli.config {
        if let Err(e) = load_style_config(path) {
            eprintln!("Error loading style config '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    // Load icon packs on top of the built-in set
    let mut catalog = IconCatalog::builtin().clone();
    let mut packs = Vec::new();
    for path in &cli.packs {
        match load_pack(path) {
            Ok(pack) => {
                packs.push((path.clone(), pack.clone()));
                catalog.merge(pack);
            }
            Err(e) => {
                eprintln!("Error loading icon pack '{}':", path.display());
                eprintln!("{}", e.report(&path.display().to_string()));
                std::process::exit(1);
            }
        }
    }

    if cli.list {
        for name in catalog.names() {
            println!("{}", name);
        }
        return;
    }

    if cli.lint {
        run_lint(&cli, &catalog, &packs);
        return;
    }

    if cli.names.is_empty() {
        eprintln!("Error: no icon names given (use --list to see available icons)");
        std::process::exit(1);
    }

    let props = props_from_cli(&cli);
    let config = RenderConfig::new().with_svg(
        SvgConfig::new()
            .with_pretty_print(!cli.compact)
            .with_standalone(cli.standalone),
    );

    for name in &cli.names {
        if let Err(e) = render_one(&cli, &catalog, name, &props, &config) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_style_config(path: &Path) -> Result<(), RenderError> {
    let config = StyleConfig::from_file(path)?;
    if config.install().is_err() {
        tracing::warn!(path = %path.display(), "style config already installed, ignoring");
    }
    Ok(())
}

fn load_pack(path: &Path) -> Result<IconPack, RenderError> {
    Ok(IconPack::from_file(path)?)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn props_from_cli(cli: &Cli) -> IconProps {
    IconProps {
        size: cli.size,
        color: cli.color.clone(),
        stroke_width: cli.stroke_width,
        absolute_stroke_width: cli.absolute_stroke_width,
        class: cli.class.clone(),
        attributes: cli.attributes.clone(),
    }
}

/// Errors from rendering a single icon on the command line
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn render_one(
    cli: &Cli,
    catalog: &IconCatalog,
    name: &str,
    props: &IconProps,
    config: &RenderConfig,
) -> Result<(), CliError> {
    let svg = render_from(catalog, name, props, config)?;
    let output = if cli.data_uri { to_data_uri(&svg) } else { svg };

    match &cli.out_dir {
        Some(dir) => {
            let path = dir.join(format!("{}.svg", name));
            write_file(&path, &output).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(icon = name, path = %path.display(), "wrote icon");
        }
        None => println!("{}", output),
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Lint the named icons, the loaded packs, or the whole catalog
fn run_lint(cli: &Cli, catalog: &IconCatalog, packs: &[(PathBuf, IconPack)]) {
    let mut total = 0;

    if !cli.names.is_empty() {
        for name in &cli.names {
            match catalog.get(name) {
                Some(icon) => total += report_warnings(name, &lint::check(icon)),
                None => {
                    eprintln!("Error: unknown icon: {}", name);
                    std::process::exit(1);
                }
            }
        }
    } else if !packs.is_empty() {
        for (path, pack) in packs {
            let source = path.display().to_string();
            for icon in &pack.icons {
                total += report_warnings(&source, &lint::check(icon));
            }
        }
    } else {
        for icon in catalog.iter() {
            total += report_warnings(&icon.name, &lint::check(icon));
        }
    }

    if total > 0 {
        eprintln!("{} warning(s)", total);
        std::process::exit(1);
    }
}

fn report_warnings(source: &str, warnings: &[lint::LintWarning]) -> usize {
    for warning in warnings {
        eprintln!("{}: {}", source, warning);
    }
    warnings.len()
}
