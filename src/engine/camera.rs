// Arena camera: screen projection, arena bounds and camera shake

use glam::Vec2;

/// 2D orthographic camera looking at the arena
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec2,
    /// Camera zoom level (1.0 = normal, 2.0 = zoomed in 2x)
    pub zoom: f32,
    /// Viewport width in pixels
    viewport_width: f32,
    /// Viewport height in pixels
    viewport_height: f32,
    /// World units visible vertically at zoom 1.0
    world_height: f32,
    /// Active shake
    shake: Option<Shake>,
}

#[derive(Debug, Clone, Copy)]
struct Shake {
    magnitude: f32,
    remaining: f32,
}

impl Camera {
    /// Create a camera showing `world_height` units vertically
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32, world_height: f32) -> Self {
        Self {
            position,
            zoom: 1.0,
            viewport_width,
            viewport_height,
            world_height,
            shake: None,
        }
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Half extents of the visible area in world units
    fn half_extents(&self) -> Vec2 {
        let half_height = (self.world_height / 2.0) / self.zoom;
        let aspect = if self.viewport_height > 0.0 {
            self.viewport_width / self.viewport_height
        } else {
            1.0
        };
        Vec2::new(half_height * aspect, half_height)
    }

    /// Convert world coordinates to screen pixels (origin top-left, y down)
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        let half = self.half_extents();
        let normalized = (world_pos - self.position) / half;

        Vec2::new(
            (normalized.x + 1.0) * self.viewport_width / 2.0,
            (1.0 - normalized.y) * self.viewport_height / 2.0,
        )
    }

    /// Check if a world point has left the arena through the sides or the
    /// bottom of the screen. Leaving through the top is allowed (jumps).
    pub fn is_out_of_arena(&self, world_pos: Vec2) -> bool {
        let screen = self.world_to_screen(world_pos);
        screen.x < 0.0 || screen.x > self.viewport_width || screen.y > self.viewport_height
    }

    /// Start shaking; a stronger or longer shake replaces a weaker one
    pub fn shake(&mut self, magnitude: f32, duration: f32) {
        let replace = match self.shake {
            Some(current) => magnitude >= current.magnitude || duration > current.remaining,
            None => true,
        };
        if replace && duration > 0.0 {
            self.shake = Some(Shake {
                magnitude,
                remaining: duration,
            });
        }
    }

    /// Advance the shake timer
    pub fn update(&mut self, dt: f32) {
        if let Some(shake) = self.shake.as_mut() {
            shake.remaining -= dt;
            if shake.remaining <= 0.0 {
                self.shake = None;
            }
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }
}
