use crate::config::{Environment, load_config};
use crate::render::{render_placeholder, write_output_svg};
use crate::request::{Flags, PlaceholderParams};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "phsvg", version, about = "Placeholder images as SVG markup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Render one placeholder to a file or stdout
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Config JSON file (host, port, environment)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Listen host, overrides config and environment
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Listen port, overrides config and PORT
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Development mode (no-cache responses)
    #[arg(long = "dev")]
    pub dev: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    pub width: String,
    pub height: String,
    /// Hex color, 3 or 6 digits, optional leading '#'
    pub color: Option<String>,

    /// Corner radius
    #[arg(short = 'r', long = "radius", default_value = "0")]
    pub radius: String,

    /// Dot texture
    #[arg(short = 'd', long = "dots")]
    pub dots: bool,

    /// Gradient fill
    #[arg(short = 'g', long = "gradient")]
    pub gradient: bool,

    /// Centered size label
    #[arg(short = 't', long = "label")]
    pub label: bool,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    fn params(&self) -> PlaceholderParams {
        let mut params = PlaceholderParams::new(&self.width, &self.height)
            .with_radius(&self.radius)
            .with_flags(Flags {
                dots: self.dots,
                gradient: self.gradient,
                label: self.label,
            });
        params.color = self.color.clone();
        params
    }
}

pub fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Serve(args) => serve(args),
        Command::Render(args) => render(args),
    }
}

fn serve(args: ServeArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.dev {
        config.environment = Environment::Dev;
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(crate::server::serve(config))
}

fn render(args: RenderArgs) -> Result<()> {
    let svg = render_placeholder(&args.params())?;
    write_output_svg(&svg, args.output.as_deref())
}

fn init_tracing() {
    // stdout carries rendered SVG for the render subcommand
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .try_init();
}

/// `RUST_LOG` when it parses, `info` otherwise.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
