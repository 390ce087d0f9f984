use crate::entities::Rect;

/// Horizontal scrolling camera.
///
/// The offset eases toward `focus_x - lead` by `smoothing` of the remaining
/// distance each tick and is then clamped to `[0, max_offset]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset: f32,
    lead: f32,
    smoothing: f32,
    max_offset: Option<f32>,
}

impl Camera {
    pub fn new(lead: f32, smoothing: f32, max_offset: Option<f32>) -> Self {
        Camera {
            offset: 0.0,
            lead,
            smoothing,
            max_offset,
        }
    }

    pub fn target(&self, focus_x: f32) -> f32 {
        focus_x - self.lead
    }

    pub fn update(&mut self, focus_x: f32) {
        let target = self.target(focus_x);
        self.offset += (target - self.offset) * self.smoothing;
        self.offset = self.offset.max(0.0);
        if let Some(max) = self.max_offset {
            self.offset = self.offset.min(max);
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    /// World rectangle → screen rectangle.
    pub fn apply(&self, rect: &Rect) -> Rect {
        Rect {
            x: self.to_screen_x(rect.x),
            ..*rect
        }
    }

    pub fn to_screen_x(&self, world_x: f32) -> f32 {
        world_x - self.offset
    }
}
