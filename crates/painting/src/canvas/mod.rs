//! One editing session
//!
//! A [`HexCanvas`] owns everything a single map editor needs: the
//! viewport, the brush engine, the map history and the frame scheduler.
//! Sessions share nothing, so two canvases never see each other's map.
//!
//! Work arrives through [`HexCanvas::handle_input`] (pointer, wheel,
//! keyboard and resize events), [`HexCanvas::apply_command`] (chrome
//! commands) and [`HexCanvas::on_refresh`] (the display clock).

mod commands;
mod input;

use hexgrid::Layout;
use hexpaint_config::{DisplayConfig, EditorConfig, GridOrientation};
use tracing::debug;

use crate::brush::BrushEngine;
use crate::error::PersistenceError;
use crate::history::MapHistory;
use crate::persistence::Persistence;
use crate::render::{
    DrawSurface, FrameInput, FrameScheduler, FrameStats, MapExtent, RenderPipeline,
};
use crate::viewport::Viewport;

#[derive(Debug)]
pub struct HexCanvas {
    config: EditorConfig,
    display: DisplayConfig,
    layout: Layout,
    viewport: Viewport,
    engine: BrushEngine,
    history: MapHistory,
    scheduler: FrameScheduler,
    renderer: RenderPipeline,
    /// Pan key currently held down
    pan_key_held: bool,
}

impl Default for HexCanvas {
    fn default() -> Self {
        Self::new(EditorConfig::default(), DisplayConfig::default())
    }
}

impl HexCanvas {
    pub fn new(config: EditorConfig, display: DisplayConfig) -> Self {
        let layout = match config.orientation {
            GridOrientation::FlatTop => Layout::flat_top(config.hex_size),
            GridOrientation::PointyTop => Layout::pointy_top(config.hex_size),
        };
        let mut scheduler = FrameScheduler::new();
        scheduler.request();

        let (surface_width, surface_height) = (display.width, display.height);
        debug!(
            "HexCanvas: {}x{} surface, {:?} cells of size {}",
            surface_width, surface_height, config.orientation, config.hex_size
        );

        Self {
            viewport: Viewport::new(&config),
            history: MapHistory::new(config.history_capacity),
            engine: BrushEngine::default().with_max_radius(config.max_brush_radius),
            scheduler,
            renderer: RenderPipeline::default(),
            pan_key_held: false,
            layout,
            display,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn engine(&self) -> &BrushEngine {
        &self.engine
    }

    pub fn history(&self) -> &MapHistory {
        &self.history
    }

    pub fn is_render_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn request_render(&mut self) {
        self.scheduler.request();
    }

    /// Display refresh tick: draw one frame if any event asked for one.
    pub fn on_refresh(&mut self, surface: &mut dyn DrawSurface) -> Option<FrameStats> {
        if !self.scheduler.tick() {
            return None;
        }
        let stats = self.renderer.render_frame(
            surface,
            FrameInput {
                viewport: &self.viewport,
                layout: &self.layout,
                map: self.history.map(),
                engine: &self.engine,
            },
        );
        Some(stats)
    }

    /// Draw the whole map into an overview surface, outside the frame clock.
    pub fn render_overview(&self, surface: &mut dyn DrawSurface) -> MapExtent {
        self.renderer
            .render_overview(surface, self.history.map(), &self.layout)
    }

    /// Replace the current map with a stored one. On error the current map
    /// and its history are kept.
    pub fn load_map(&mut self, store: &dyn Persistence, name: &str) -> Result<(), PersistenceError> {
        self.history.load(store, name)?;
        self.request_render();
        Ok(())
    }

    pub fn save_map(&self, store: &mut dyn Persistence) -> Result<(), PersistenceError> {
        self.history.save(store)
    }
}
