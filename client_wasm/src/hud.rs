//! Score text, drawn on a 2D canvas stacked over the WebGPU canvas

use crate::batch::{TextCommand, TEXT_BASELINE};
use crate::error::ClientError;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const HUD_FONT: &str = "13px monospace";

pub struct Hud {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Hud {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, ClientError> {
        let context = canvas
            .get_context("2d")
            .map_err(ClientError::dom)?
            .ok_or_else(|| ClientError::Dom("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|obj| ClientError::dom(obj.into()))?;

        Ok(Self { canvas, context })
    }

    /// Replace last frame's text with `texts`
    pub fn draw(&self, texts: &[TextCommand]) -> Result<(), ClientError> {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.context.set_font(HUD_FONT);
        self.context.set_text_baseline(TEXT_BASELINE);

        for text in texts {
            self.context.set_fill_style_str(&text.css_color());
            self.context
                .fill_text(&text.text, text.x, text.y)
                .map_err(ClientError::dom)?;
        }
        Ok(())
    }
}
