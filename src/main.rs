use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use symbios_fractal::{
    Canvas, Catalog, Color, RenderFormat, RenderOptions, RewriteConfig, render_catalog,
    render_fractal_to_file,
};

#[derive(Parser, Debug)]
#[command(name = "symbios-fractal", version, about = "Render L-System fractals to PNG and SVG")]
struct Cli {
    /// TOML catalog of `[[fractal]]` tables; the builtin presets when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output directory.
    #[arg(long, global = true, default_value = "images")]
    out: PathBuf,

    /// Square canvas size in pixels.
    #[arg(long, global = true, default_value_t = 2000)]
    size: u32,

    /// Palette name or `#rrggbb[aa]`.
    #[arg(long, global = true, default_value = "black")]
    color: String,

    /// Abort expansion beyond this many symbols.
    #[arg(long, global = true)]
    max_length: Option<usize>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the fractals in the catalog.
    List,
    /// Render one fractal.
    Render {
        name: String,
        /// Emit SVG instead of PNG.
        #[arg(long)]
        svg: bool,
        /// Force the whole fractal into one path.
        #[arg(long)]
        single_path: bool,
    },
    /// Render every fractal as both SVG and PNG.
    All,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin().context("builtin presets are malformed")?,
    };
    let options = RenderOptions {
        color: cli.color.parse::<Color>()?,
        canvas: Canvas::square(cli.size),
        rewrite: RewriteConfig {
            max_length: cli.max_length,
        },
        out_dir: cli.out.clone(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::List => {
            for spec in &catalog.fractals {
                writeln!(out, "{}", spec.describe())?;
            }
        }
        Command::Render {
            name,
            svg,
            single_path,
        } => {
            let mut spec = catalog.find(&name)?.clone();
            spec.one_path |= single_path;
            let format = if svg {
                RenderFormat::Svg
            } else {
                RenderFormat::Png
            };
            std::fs::create_dir_all(&options.out_dir)
                .with_context(|| format!("creating {}", options.out_dir.display()))?;
            writeln!(out, "{}", render_fractal_to_file(&spec, format, &options)?)?;
        }
        Command::All => {
            tracing::info!(fractals = catalog.len(), "rendering catalog");
            render_catalog(&catalog, &options, &mut out)?;
        }
    }
    Ok(())
}
