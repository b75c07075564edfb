use crate::dog::DogPicture;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "▀";

/// Draws a picture with two vertical pixels per cell, scaled to fit the
/// area and centered.
pub struct PictureView<'a> {
    picture: &'a DogPicture,
}

impl<'a> PictureView<'a> {
    pub fn new(picture: &'a DogPicture) -> Self {
        Self { picture }
    }

    /// Cell size the picture occupies inside `area`.
    pub fn fitted_size(&self, area: Rect) -> (u16, u16) {
        let (width, height) = (self.picture.width(), self.picture.height());
        if width == 0 || height == 0 || area.width == 0 || area.height == 0 {
            return (0, 0);
        }
        let max_w = f64::from(area.width);
        let max_h = f64::from(area.height) * 2.0;
        let scale = (max_w / f64::from(width)).min(max_h / f64::from(height));
        let pixels_w = (f64::from(width) * scale).floor().max(1.0);
        let pixels_h = (f64::from(height) * scale).floor().max(1.0);
        let cols = (pixels_w as u16).min(area.width);
        let rows = ((pixels_h as u16).div_ceil(2)).min(area.height);
        (cols, rows)
    }
}

impl Widget for PictureView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.fitted_size(area);
        if cols == 0 || rows == 0 {
            return;
        }
        let left = area.x + (area.width - cols) / 2;
        let top = area.y + (area.height - rows) / 2;
        let (width, height) = (self.picture.width(), self.picture.height());
        let pixel_rows = u32::from(rows) * 2;

        for row in 0..rows {
            for col in 0..cols {
                let src_x = u32::from(col) * width / u32::from(cols);
                let upper_y = u32::from(row) * 2 * height / pixel_rows;
                let lower_y = (u32::from(row) * 2 + 1) * height / pixel_rows;
                let upper = rgb(self.picture.pixel(src_x, upper_y));
                let lower = rgb(self.picture.pixel(src_x, lower_y));
                if let Some(cell) = buf.cell_mut((left + col, top + row)) {
                    cell.set_symbol(HALF_BLOCK).set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}
