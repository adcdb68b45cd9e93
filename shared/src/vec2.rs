//! 2D vector utilities for the playing field.
//! Screen space: origin top-left, y grows downward, so positive angles turn clockwise.

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Shorthand constructor
pub fn vec2(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The "up" unit vector (0, -1) rotated by `deg` degrees.
    pub fn unit_in_direction(deg: f64) -> Vec2 {
        Vec2::new(0.0, -1.0).rotate(deg)
    }

    pub fn add(self, b: Vec2) -> Vec2 {
        Vec2::new(self.x + b.x, self.y + b.y)
    }

    /// a - b, expressed as a + (-1 * b)
    pub fn sub(self, b: Vec2) -> Vec2 {
        self.add(b.scale(-1.0))
    }

    pub fn scale(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    pub fn len(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Quarter turn: (x, y) -> (y, -x)
    pub fn ortho(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }

    /// Rotate by `deg` degrees with the standard rotation matrix.
    pub fn rotate(self, deg: f64) -> Vec2 {
        let rad = std::f64::consts::PI * deg / 180.0;
        let (sin, cos) = rad.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Same vector with only the y component replaced.
    pub fn with_y(self, y: f64) -> Vec2 {
        Vec2::new(self.x, y)
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}
