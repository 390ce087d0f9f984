/// Rendering layer.
///
/// Drawing code only sees the `Surface` trait: filled shapes and text in
/// logical screen pixels.  `Canvas` rasterizes those calls into terminal
/// cells and `terminal::Screen` flushes the cells with crossterm.  No game
/// logic is performed here; this module only translates state into shapes.
pub mod canvas;
pub mod screens;
pub mod sprites;
pub mod terminal;

use crate::entities::Rect;

pub use canvas::Canvas;
pub use screens::render;

// ── Colour palette ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const GRAY: Rgb = Rgb(128, 128, 128);
pub const DARK_GREEN: Rgb = Rgb(0, 100, 0);
pub const BROWN: Rgb = Rgb(139, 69, 19);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const ORANGE: Rgb = Rgb(255, 165, 0);
pub const SKY_BLUE: Rgb = Rgb(135, 206, 235);

// ── Drawing surface ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

pub trait Surface {
    /// Logical size in pixels.
    fn size(&self) -> (f32, f32);

    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: Rect, color: Rgb);

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgb);

    /// Single line of text whose top edge sits at `y`.
    fn text(&mut self, x: f32, y: f32, text: &str, color: Rgb, align: Align);

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        let d = radius * 2.0;
        self.fill_ellipse(Rect::new(cx - radius, cy - radius, d, d), color);
    }

    /// Rectangle outline drawn inward from the edges.
    fn stroke_rect(&mut self, rect: Rect, color: Rgb, thickness: f32) {
        let t = thickness.min(rect.w / 2.0).min(rect.h / 2.0);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.h), color);
        self.fill_rect(Rect::new(rect.right() - t, rect.y, t, rect.h), color);
    }
}
