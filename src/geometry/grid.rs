use egui::Pos2;

/// Conversion between canvas pixels and grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMapping {
    grid_scale: f32,
}

impl GridMapping {
    pub fn new(grid_scale: f32) -> Self {
        Self { grid_scale }
    }

    pub fn grid_scale(&self) -> f32 {
        self.grid_scale
    }

    pub fn to_grid(&self, pixel: Pos2) -> Pos2 {
        Pos2::new(pixel.x / self.grid_scale, pixel.y / self.grid_scale)
    }

    pub fn to_pixel(&self, grid: Pos2) -> Pos2 {
        Pos2::new(grid.x * self.grid_scale, grid.y * self.grid_scale)
    }

    pub fn len_to_pixel(&self, grid_len: f32) -> f32 {
        grid_len * self.grid_scale
    }
}
