//! Scene projector and multi-view renderer.
//!
//! Physical AU coordinates are quantized onto a character grid at a chosen
//! half-range. Layers are drawn in a fixed order: orbit paths (blank cells
//! only), the Sun at the origin, then body symbols in input order, which
//! overwrite unconditionally.

use serde::Deserialize;

use crate::body::PositionedBody;
use crate::kepler::OrbitalElements;

pub const DEFAULT_GRID_WIDTH: usize = 150;
pub const DEFAULT_GRID_HEIGHT: usize = 40;
pub const SUN_GLYPH: char = '*';
pub const ORBIT_GLYPH: char = '/';

/// Angular step when sampling an orbit ellipse, radians (~126 samples per
/// orbit).
const ORBIT_SAMPLE_STEP_RAD: f64 = 0.05;

/// One rendered view: which bodies it shows and at what physical scale.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SceneSpec {
    pub label: String,
    pub half_range_au: f64,
    pub bodies: Vec<String>,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
}

fn default_width() -> usize {
    DEFAULT_GRID_WIDTH
}

fn default_height() -> usize {
    DEFAULT_GRID_HEIGHT
}

/// Map a physical point to a grid cell, or `None` when it falls outside the
/// view. `floor((v + R) * extent / 2R)` on each axis.
pub fn project(
    x_au: f64,
    y_au: f64,
    half_range_au: f64,
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    let gx = ((x_au + half_range_au) * width as f64 / (2.0 * half_range_au)).floor();
    let gy = ((y_au + half_range_au) * height as f64 / (2.0 * half_range_au)).floor();
    if gx >= 0.0 && gx < width as f64 && gy >= 0.0 && gy < height as f64 {
        Some((gx as usize, gy as usize))
    } else {
        None
    }
}

struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    fn set(&mut self, x: usize, y: usize, glyph: char) {
        self.cells[y * self.width + x] = glyph;
    }

    fn set_if_blank(&mut self, x: usize, y: usize, glyph: char) {
        let cell = &mut self.cells[y * self.width + x];
        if *cell == ' ' {
            *cell = glyph;
        }
    }

    fn rows(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

fn trace_orbit(grid: &mut Grid, elements: &OrbitalElements, half_range_au: f64) {
    let a = elements.semi_major_axis_au;
    let b = elements.semi_minor_axis_au();

    let mut theta = 0.0;
    while theta < std::f64::consts::TAU {
        let x = a * theta.cos();
        let y = b * theta.sin();
        if let Some((gx, gy)) = project(x, y, half_range_au, grid.width, grid.height) {
            grid.set_if_blank(gx, gy, ORBIT_GLYPH);
        }
        theta += ORBIT_SAMPLE_STEP_RAD;
    }
}

/// Render one scene: header, grid, and legend for the bodies that landed
/// inside the view. Out-of-range bodies are dropped silently; routing them to
/// a different scale is the multi-view renderer's job.
pub fn render_scene(
    bodies: &[&PositionedBody],
    half_range_au: f64,
    width: usize,
    height: usize,
) -> String {
    let mut grid = Grid::new(width, height);

    for positioned in bodies {
        if positioned.body.elements.semi_major_axis_au <= half_range_au {
            trace_orbit(&mut grid, &positioned.body.elements, half_range_au);
        }
    }

    if let Some((sun_x, sun_y)) = project(0.0, 0.0, half_range_au, width, height) {
        grid.set(sun_x, sun_y, SUN_GLYPH);
    }

    let mut visible = Vec::new();
    for positioned in bodies {
        let position = positioned.state.position;
        if let Some((gx, gy)) = project(position.x_au, position.y_au, half_range_au, width, height)
        {
            grid.set(gx, gy, positioned.body.symbol);
            visible.push(*positioned);
        }
    }

    let mut out = String::new();
    out.push_str(&format!("Scale: {:.1} AU across\n\n", 2.0 * half_range_au));
    out.push_str(&grid.rows());
    out.push_str("\nVisible: * = Sun, / = Orbital paths\n");
    let legend: Vec<String> = visible
        .iter()
        .map(|p| format!("{} = {}", p.body.symbol, p.body.name))
        .collect();
    out.push_str(&legend.join(" "));
    out.push_str("\n\n");
    out
}

/// Render every configured scene under a shared date caption. Each scene
/// selects its bodies by name from the positioned set.
pub fn render_views(
    positioned: &[PositionedBody],
    scenes: &[SceneSpec],
    date_label: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nSolar System on {date_label}\n"));
    out.push_str(&"=".repeat(50));
    out.push('\n');

    for scene in scenes {
        let selected: Vec<&PositionedBody> = scene
            .bodies
            .iter()
            .filter_map(|name| {
                positioned
                    .iter()
                    .find(|p| p.body.name.eq_ignore_ascii_case(name))
            })
            .collect();

        out.push_str(&format!("\n=== {} ===\n", scene.label));
        out.push_str(&render_scene(
            &selected,
            scene.half_range_au,
            scene.width,
            scene.height,
        ));
    }

    out
}
