use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the colour as `0x00RRGGBB`, the pixel layout minifb expects
    pub fn to_pixel(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

/// Software framebuffer every sprite draws into, presented once per frame.
pub struct Canvas {
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffer: vec![0; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.buffer[x + y * self.width])
        } else {
            None
        }
    }

    pub fn clear(&mut self, color: Color) {
        let pixel = color.to_pixel();
        self.buffer.iter_mut().for_each(|p| *p = pixel);
    }

    /// Fills `rect`, clipped to the canvas. Rects fully outside are a no-op.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let left = rect.left.clamp(0, self.width as i32) as usize;
        let right = rect.right().clamp(0, self.width as i32) as usize;
        let top = rect.top.clamp(0, self.height as i32) as usize;
        let bottom = rect.bottom().clamp(0, self.height as i32) as usize;

        let pixel = color.to_pixel();
        for y in top..bottom {
            let row = y * self.width;
            self.buffer[row + left..row + right]
                .iter_mut()
                .for_each(|p| *p = pixel);
        }
    }
}
