/// Shelf packer over a fixed extent.
///
/// Rectangles are placed left to right in the order they are submitted; when
/// a rectangle no longer fits on the current shelf, a new shelf opens below,
/// as tall as the tallest rectangle placed on the previous one. Deterministic
/// and order-preserving, which is what the atlas needs; packing density is
/// traded away (sprite sets here are roughly uniform in size).
pub(crate) struct ShelfPacker {
    width: u32,
    height: u32,
    cursor_x: u32,
    shelf_y: u32,
    shelf_height: u32,
}

impl ShelfPacker {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cursor_x: 0,
            shelf_y: 0,
            shelf_height: 0,
        }
    }

    /// Returns the top-left position for a `width` x `height` rectangle, or
    /// `None` if it cannot be placed anymore.
    pub(crate) fn place(&mut self, width: u32, height: u32) -> Option<(u32, u32)> {
        if width > self.width {
            return None;
        }

        if self.cursor_x + width > self.width {
            // Current shelf is full; open the next one.
            self.shelf_y += self.shelf_height;
            self.cursor_x = 0;
            self.shelf_height = 0;
        }

        if self.shelf_y + height > self.height {
            return None;
        }

        let position = (self.cursor_x, self.shelf_y);
        self.cursor_x += width;
        self.shelf_height = self.shelf_height.max(height);
        Some(position)
    }
}
