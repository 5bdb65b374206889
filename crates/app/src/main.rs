//! hexpaint - headless hex map painter
//!
//! Replays a script of input events and chrome commands against one canvas
//! session, rendering into a recording surface, and optionally stores the
//! resulting map.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hexpaint_config::{DisplayConfig, EditorConfig};
use hexpaint_ipc::EditorCommand;
use painting::{map_extent, HexCanvas, RecordingSurface};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod error;
mod script;
mod store;

use error::AppError;
use store::FileStore;

#[derive(Parser, Debug)]
#[command(name = "hexpaint", about = "Replay hex map editing scripts")]
struct Cli {
    /// JSON array of input events and editor commands
    #[arg(long)]
    script: PathBuf,

    /// Directory holding `<name>.json` maps
    #[arg(long, env = "HEXPAINT_MAP_DIR", default_value = "maps")]
    map_dir: PathBuf,

    /// Map to load before replaying
    #[arg(long)]
    load: Option<String>,

    /// Save the result under this name
    #[arg(long)]
    save: Option<String>,

    #[arg(long, default_value_t = hexpaint_config::DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = hexpaint_config::DEFAULT_HEIGHT)]
    height: u32,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = EditorConfig::from_env();
    let display = DisplayConfig::new(cli.width, cli.height);
    let (surface_width, surface_height) = (display.width, display.height);
    info!(
        "Starting hexpaint: {}x{} surface, {:?} grid",
        surface_width, surface_height, config.orientation
    );

    let mut store = FileStore::new(cli.map_dir);
    let mut canvas = HexCanvas::new(config, display);
    if let Some(name) = &cli.load {
        canvas.load_map(&store, name)?;
        info!("Loaded map {:?} from {}", name, store.dir().display());
    }

    let steps = script::load_script(&cli.script)?;
    let mut surface = RecordingSurface::new(cli.width, cli.height);
    let summary = script::replay(&mut canvas, steps, &mut surface);

    let history = canvas.history();
    info!(
        "Map {:?}: {} cells, {} undo / {} redo levels, {} frames",
        history.name(),
        history.map().len(),
        history.undo_len(),
        history.redo_len(),
        summary.frames
    );

    let side = map_extent(history.map(), canvas.layout()).canvas_side();
    let mut overview = RecordingSurface::new(side, side);
    let extent = canvas.render_overview(&mut overview);
    info!(
        "Overview: {}px square, hex size {}, {} cells drawn",
        side,
        extent.hex_size,
        overview.fills().count()
    );

    if let Some(name) = cli.save {
        // The map is stored under its own name, so rename first.
        canvas.apply_command(EditorCommand::Rename { name })?;
        canvas.save_map(&mut store)?;
    }

    Ok(())
}
