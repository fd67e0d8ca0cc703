use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from its top-left corner and size (canvas coordinates, y down)
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Point of the box nearest to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Check if an axis-aligned ellipse intersects the box
    ///
    /// The squared offset to the nearest point is normalised per axis, so a
    /// sum of at most 1 means the nearest point lies inside the ellipse.
    pub fn intersects_ellipse(&self, center: Vec2, radii: Vec2) -> bool {
        let d = center - self.closest_point(center);
        (d.x * d.x) / (radii.x * radii.x) + (d.y * d.y) / (radii.y * radii.y) <= 1.0
    }
}
