/// Viewport maps the fixed-size drawing surface onto the part of the
/// window it is displayed in. Axes scale independently, so a resized
/// window stretches the surface instead of resizing the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    surface_width: f32,
    surface_height: f32,
}

impl Viewport {
    /// Surface displayed 1:1 at the window origin
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: surface_width as f32,
            height: surface_height as f32,
            surface_width: surface_width as f32,
            surface_height: surface_height as f32,
        }
    }

    /// Display area changed (window resize)
    pub fn fit(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Surface pixels per displayed pixel on each axis
    pub fn scale(&self) -> (f32, f32) {
        (self.surface_width / self.width, self.surface_height / self.height)
    }

    pub fn contains(&self, screen_x: f32, screen_y: f32) -> bool {
        screen_x >= self.x
            && screen_x < self.x + self.width
            && screen_y >= self.y
            && screen_y < self.y + self.height
    }

    /// Convert window coordinates to surface pixel coordinates
    pub fn to_surface(&self, screen_x: f32, screen_y: f32) -> Option<(f32, f32)> {
        if !self.contains(screen_x, screen_y) {
            return None;
        }
        let (scale_x, scale_y) = self.scale();
        Some(((screen_x - self.x) * scale_x, (screen_y - self.y) * scale_y))
    }
}
