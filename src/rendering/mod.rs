use macroquad::prelude::*;

use crate::application::{ClockState, Palette, Rgba, Simulation, Viewport};
use crate::domain::{Cell, Paint, Surface};
use crate::ui::{Button, PANEL_WIDTH, panel_x};

/// CanvasSurface is a persistent pixel buffer the simulation paints into.
///
/// Background grid lines are drawn once when the surface is created and
/// cells are painted inset by one pixel, so the lines stay visible. The
/// buffer is uploaded to the GPU only after it changed.
pub struct CanvasSurface {
    image: Image,
    texture: Option<Texture2D>,
    dirty: bool,
    cell_size: u32,
    palette: Palette,
}

impl CanvasSurface {
    pub fn new(width: u32, height: u32, cell_size: u32, palette: Palette) -> Self {
        let width = width.clamp(1, u16::MAX as u32) as u16;
        let height = height.clamp(1, u16::MAX as u32) as u16;
        let [r, g, b, a] = palette.dead.0;

        let mut surface = Self {
            image: Image::gen_image_color(width, height, Color::from_rgba(r, g, b, a)),
            texture: None,
            dirty: true,
            cell_size,
            palette,
        };
        surface.draw_grid_lines();
        surface
    }

    pub fn size(&self) -> (u32, u32) {
        (self.image.width as u32, self.image.height as u32)
    }

    /// Color of one surface pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let (width, height) = self.size();
        (x < width && y < height)
            .then(|| Rgba(self.image.get_image_data()[(y * width + x) as usize]))
    }

    /// One-pixel lines at every multiple of the cell size, edges included
    fn draw_grid_lines(&mut self) {
        let (width, height) = self.size();
        let step = self.cell_size.max(1) as usize;
        let grid = self.palette.grid;

        for x in (0..=width).step_by(step) {
            self.fill_rect(x, 0, 1, height, grid);
        }
        for y in (0..=height).step_by(step) {
            self.fill_rect(0, y, width, 1, grid);
        }
    }

    /// Fill a rectangle, clipped to the surface
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let (width, height) = self.size();
        let x_end = x.saturating_add(w).min(width);
        let y_end = y.saturating_add(h).min(height);
        if x >= x_end || y >= y_end {
            return;
        }

        let data = self.image.get_image_data_mut();
        for row in y..y_end {
            let start = (row * width + x) as usize;
            let end = (row * width + x_end) as usize;
            data[start..end].fill(color.0);
        }
        self.dirty = true;
    }

    /// Draw the surface stretched over the viewport
    pub fn draw(&mut self, viewport: &Viewport) {
        let texture = match self.texture.take() {
            Some(texture) => {
                if self.dirty {
                    texture.update(&self.image);
                }
                texture
            }
            None => {
                let texture = Texture2D::from_image(&self.image);
                texture.set_filter(FilterMode::Nearest);
                texture
            }
        };
        self.dirty = false;

        draw_texture_ex(
            &texture,
            viewport.x,
            viewport.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(viewport.width, viewport.height)),
                ..Default::default()
            },
        );
        self.texture = Some(texture);
    }
}

impl Surface for CanvasSurface {
    fn paint_cell(&mut self, cell: &Cell, paint: Paint) {
        let color = match paint {
            Paint::Alive => self.palette.alive,
            Paint::Dead => self.palette.dead,
        };
        let inner = self.cell_size.saturating_sub(2);
        self.fill_rect(cell.x + 1, cell.y + 1, inner, inner, color);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the control panel with buttons and run status
pub fn draw_controls(simulation: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 10.0;
    let (columns, rows) = simulation.grid().dimensions();
    let running = simulation.state() == ClockState::Running;

    let labels = [
        ("Controls:", 260.0, 14.0, WHITE),
        ("LMB: Toggle cell", 275.0, 12.0, GRAY),
        ("Enter: Start", 288.0, 12.0, GRAY),
        ("Space: Stop", 301.0, 12.0, GRAY),
        ("R: Randomize  C: Clear", 314.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let status = [
        (format!("Grid: {columns}x{rows}"), 350.0, 13.0, LIGHTGRAY),
        (format!("Generation: {}", simulation.generation()), 370.0, 16.0, WHITE),
        (
            format!("Status: {}", if running { "Running" } else { "Paused" }),
            390.0,
            16.0,
            if running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        (
            format!("Step: {:.1}ms ({})", simulation.last_step_time_ms, simulation.algorithm().name()),
            410.0,
            13.0,
            GRAY,
        ),
        (format!("FPS: {}", get_fps()), 425.0, 13.0, GRAY),
    ];
    status.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Config;

    fn surface() -> CanvasSurface {
        CanvasSurface::new(100, 60, 20, Config::default().palette().unwrap())
    }

    #[test]
    fn test_grid_lines_drawn_on_cell_edges() {
        let surface = surface();
        let grid = Config::default().palette().unwrap().grid;

        assert_eq!(surface.pixel(0, 5), Some(grid));
        assert_eq!(surface.pixel(40, 5), Some(grid));
        assert_eq!(surface.pixel(5, 20), Some(grid));
    }

    #[test]
    fn test_paint_cell_fills_inset_square() {
        let mut surface = surface();
        let palette = Config::default().palette().unwrap();
        let cell = Cell { x: 20, y: 20, alive: true };

        surface.paint_cell(&cell, Paint::Alive);

        assert_eq!(surface.pixel(21, 21), Some(palette.alive));
        assert_eq!(surface.pixel(38, 38), Some(palette.alive));
        // Border pixels keep the grid line
        assert_eq!(surface.pixel(20, 25), Some(palette.grid));
        assert_eq!(surface.pixel(39, 25), Some(palette.dead));

        surface.paint_cell(&cell, Paint::Dead);
        assert_eq!(surface.pixel(30, 30), Some(palette.dead));
    }

    #[test]
    fn test_paint_clips_to_surface() {
        let palette = Config::default().palette().unwrap();
        let mut surface = CanvasSurface::new(90, 50, 20, palette);

        // Partial cells on the right and bottom edges
        surface.paint_cell(&Cell { x: 80, y: 40, alive: true }, Paint::Alive);
        // Starts past the surface entirely
        surface.paint_cell(&Cell { x: 100, y: 0, alive: true }, Paint::Alive);

        assert_eq!(surface.pixel(89, 49), Some(palette.alive));
        assert_eq!(surface.pixel(81, 41), Some(palette.alive));
        assert_eq!(surface.pixel(90, 0), None);
    }
}
