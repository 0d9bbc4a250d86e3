use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "meshstitch", version, about = "Render embroidery mesh patterns to PNG")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a mesh PNG, optionally with threads from a JSON/YAML file.
    Render(RenderArgs),
    /// Write a tiled checkerboard thread configuration (YAML).
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Thread configuration (JSON or YAML). A missing file renders an empty mesh.
    #[arg(long, short = 't')]
    threads: Option<PathBuf>,

    /// Cells per side. Forces a square grid; otherwise the grid fits the threads.
    #[arg(long)]
    size: Option<u32>,

    /// Cell size in pixels.
    #[arg(long, default_value_t = 20)]
    cell_size: u32,

    /// Grid line width in pixels.
    #[arg(long, default_value_t = 1)]
    line_width: u32,

    /// Thread stroke width in pixels.
    #[arg(long, default_value_t = 3)]
    thread_width: u32,

    /// Output PNG path.
    #[arg(long, short = 'o', default_value = "embroidery_mesh.png")]
    output: PathBuf,

    /// Draw French knots in this color on the cell lattice.
    #[arg(long)]
    knot_color: Option<String>,

    /// Knot spacing in cells (values below 1 mean 1).
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    knot_spacing: i64,

    /// Outline the erased skip region in red.
    #[arg(long)]
    debug_skip: bool,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output YAML path.
    #[arg(long, short = 'o', default_value = "threebyfour.yaml")]
    output: PathBuf,

    /// Tiles per row.
    #[arg(long, default_value_t = 6)]
    columns: u32,

    /// Tile rows.
    #[arg(long, default_value_t = 8)]
    rows: u32,

    /// Tile edge in cells.
    #[arg(long, default_value_t = 5)]
    unit: u32,

    /// The two checkerboard colors.
    #[arg(long, value_delimiter = ',', default_values_t = ["red".to_owned(), "blue".to_owned()])]
    colors: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MESHSTITCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let params = meshstitch::RenderParams {
        size: args.size,
        cell_size: args.cell_size,
        line_width: args.line_width,
        thread_width: args.thread_width,
        knot_color: args.knot_color,
        knot_spacing: args.knot_spacing,
        debug_skip: args.debug_skip,
    };

    let mesh = meshstitch::render_config_file(args.threads.as_deref(), &params)
        .context("render mesh")?;
    meshstitch::write_png(&mesh.raster, &args.output)
        .with_context(|| format!("write png '{}'", args.output.display()))?;

    let grid = mesh.canvas.grid;
    println!(
        "Created {} with {}x{} mesh ({}x{} pixels)",
        args.output.display(),
        grid.width,
        grid.height,
        mesh.canvas.pixel_width,
        mesh.canvas.pixel_height,
    );
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let [even, odd]: [String; 2] = args
        .colors
        .try_into()
        .map_err(|c: Vec<String>| anyhow::anyhow!("expected two colors, got {}", c.len()))?;
    let layout = meshstitch::TileLayout {
        columns: args.columns,
        rows: args.rows,
        unit: args.unit,
        colors: [even, odd],
    };

    let groups = meshstitch::generate_tiles(&layout);
    let yaml = meshstitch::to_yaml(&groups)?;

    if let Some(parent) = args.output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.output, yaml)
        .with_context(|| format!("write pattern '{}'", args.output.display()))?;

    println!(
        "Generated {}x{} grid with {} units (each unit has {} threads in a {}x{} grid) -> {}",
        layout.columns,
        layout.rows,
        groups.len(),
        meshstitch::base_unit(layout.unit).len(),
        layout.unit,
        layout.unit,
        args.output.display(),
    );
    Ok(())
}
