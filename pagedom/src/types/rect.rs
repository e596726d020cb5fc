/// Bounding box of an element in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn left(&self) -> f64 {
        self.x
    }

    pub const fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    /// Position of a client point relative to this box, rounded half-up
    /// to whole pixels.
    pub fn relative(&self, client_x: f64, client_y: f64) -> (i64, i64) {
        (round_half_up(client_x - self.x), round_half_up(client_y - self.y))
    }
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
