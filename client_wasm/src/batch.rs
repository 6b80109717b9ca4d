//! Collects one frame of draw calls for the GPU and the text overlay

use game_core::{Color, Painter, Rect};
use glam::Vec2;

/// Canvas `textBaseline`: text is placed by its baseline, like the
/// 7x13 face the scores were designed around
pub const TEXT_BASELINE: &str = "alphabetic";

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![1 => Float32x4, 2 => Float32x4];

    /// Per-instance buffer layout; locations follow the mesh vertex
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub x: f64,
    pub y: f64, // baseline
    pub color: Color,
}

impl TextCommand {
    /// CSS color string for the 2D canvas
    pub fn css_color(&self) -> String {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            to_byte(self.color.r),
            to_byte(self.color.g),
            to_byte(self.color.b),
            self.color.a.clamp(0.0, 1.0)
        )
    }
}

/// GPU clear value for a scene color
pub fn to_wgpu_color(color: Color) -> wgpu::Color {
    wgpu::Color {
        r: color.r as f64,
        g: color.g as f64,
        b: color.b as f64,
        a: color.a as f64,
    }
}

/// Rectangles use the unit quad (origin top-left), circles the unit circle
/// (origin at the center), so both scale straight from the instance data.
#[derive(Default)]
pub struct SceneBatch {
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
    pub texts: Vec<TextCommand>,
}

impl SceneBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
        self.circles.clear();
        self.texts.clear();
    }
}

impl Painter for SceneBatch {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rects.push(InstanceData {
            transform: [rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32],
            tint: color.to_array(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circles.push(InstanceData {
            transform: [center.x, center.y, radius, radius],
            tint: color.to_array(),
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        self.texts.push(TextCommand {
            text: text.to_string(),
            x: x as f64,
            y: y as f64,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, Match, Screen};

    #[test]
    fn test_batch_collects_a_match_frame() {
        let game = Match::new(Config::new(Screen::new(800, 600).unwrap()));
        let mut batch = SceneBatch::new();
        game.draw(&mut batch);

        assert_eq!(batch.rects.len(), 2);
        assert_eq!(batch.rects[0].transform, [760.0, 250.0, 15.0, 100.0]);
        assert_eq!(batch.rects[1].transform, [25.0, 250.0, 15.0, 100.0]);

        assert_eq!(batch.circles.len(), 1);
        assert_eq!(batch.circles[0].transform, [407.5, 307.5, 7.5, 7.5]);
        assert_eq!(batch.circles[0].tint, [1.0; 4]);

        let lines: Vec<_> = batch.texts.iter().map(|t| (t.text.as_str(), t.y)).collect();
        assert_eq!(
            lines,
            vec![
                ("Player Score: 0", 10.0),
                ("Computer Score: 0", 30.0),
                ("High Score: 0", 50.0),
            ]
        );
    }

    #[test]
    fn test_clear_empties_the_batch() {
        let mut batch = SceneBatch::new();
        batch.fill_rect(Rect::new(0, 0, 1, 1), Color::WHITE);
        batch.draw_text("x", 0, 0, Color::WHITE);
        batch.clear();
        assert!(batch.rects.is_empty());
        assert!(batch.texts.is_empty());
    }

    #[test]
    fn test_css_color() {
        let text = TextCommand {
            text: String::new(),
            x: 0.0,
            y: 0.0,
            color: Color::WHITE,
        };
        assert_eq!(text.css_color(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_text_is_placed_by_baseline() {
        let game = Match::new(Config::default());
        let mut batch = SceneBatch::new();
        game.draw(&mut batch);

        assert_eq!(TEXT_BASELINE, "alphabetic");
        assert_eq!(batch.texts[0].x, 10.0);
        assert_eq!(batch.texts[0].y, 10.0, "first line's baseline sits at y = 10");
    }

    #[test]
    fn test_black_clears_to_opaque_black() {
        assert_eq!(to_wgpu_color(Color::BLACK), wgpu::Color::BLACK);
        assert_eq!(to_wgpu_color(Color::WHITE), wgpu::Color::WHITE);
    }

    #[test]
    fn test_instance_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 32);
        let layout = InstanceData::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(layout.attributes[1].offset, 16, "tint follows the transform");
    }
}
