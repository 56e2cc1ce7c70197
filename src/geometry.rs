/// Axis-aligned rectangle in screen pixels, origin at the top-left corner.
///
/// `left`/`top` are signed so sprites can leave the screen (a bullet flying
/// past the top edge has a negative `top`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }

    pub fn center_x(&self) -> i32 {
        self.left + (self.width / 2) as i32
    }

    /// Top-centre point
    pub fn mid_top(&self) -> (i32, i32) {
        (self.center_x(), self.top)
    }

    /// Moves the rect so that its top-centre sits on `(x, y)`.
    pub fn set_mid_top(&mut self, (x, y): (i32, i32)) {
        self.left = x - (self.width / 2) as i32;
        self.top = y;
    }

    /// Moves the rect so that its bottom-centre sits on `(x, y)`.
    pub fn set_mid_bottom(&mut self, (x, y): (i32, i32)) {
        self.left = x - (self.width / 2) as i32;
        self.top = y - self.height as i32;
    }
}
