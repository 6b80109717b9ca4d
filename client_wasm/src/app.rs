//! Page setup and the per-frame update/draw loop

use crate::batch::SceneBatch;
use crate::error::ClientError;
use crate::hud::Hud;
use crate::input::KeyboardState;
use crate::layout::fit_to_viewport;
use crate::renderer::Renderer;
use game_core::{Config, FrameClock, Match, Screen};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, Window};

const TITLE: &str = "Pong";

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct App {
    game: Match,
    renderer: Renderer,
    hud: Hud,
    keys: Rc<KeyboardState>,
    clock: FrameClock,
    batch: SceneBatch,
}

impl App {
    pub fn new(game: Match, renderer: Renderer, hud: Hud, keys: Rc<KeyboardState>) -> Self {
        Self {
            game,
            renderer,
            hud,
            keys,
            clock: FrameClock::new(),
            batch: SceneBatch::new(),
        }
    }

    /// Run the ticks due at `now_ms`, then draw once
    pub fn frame(&mut self, now_ms: f64) -> Result<(), ClientError> {
        let ticks = self.clock.advance_to(now_ms);
        for _ in 0..ticks {
            self.game.update(self.keys.as_ref());
        }

        self.batch.clear();
        self.game.draw(&mut self.batch);
        self.renderer.draw(&self.batch)?;
        self.hud.draw(&self.batch.texts)
    }
}

/// Build the page, the renderer and the match, then start the loop
pub async fn start() -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let document = window.document().ok_or(ClientError::NoDocument)?;
    document.set_title(TITLE);

    let screen = detect_screen(&window)?;
    let (container, canvas, overlay) = create_canvases(&document, &screen)?;
    fit_container(&window, &container, &screen)?;
    install_resize_listener(&window, container, screen)?;

    let hud = Hud::new(overlay)?;
    let renderer = Renderer::new(canvas).await?;
    let keys = Rc::new(KeyboardState::new());
    install_key_listeners(&window, &document, &keys)?;

    let game = Match::new(Config::new(screen));
    run(window, App::new(game, renderer, hud, keys))
}

fn detect_screen(window: &Window) -> Result<Screen, ClientError> {
    let display = window.screen().map_err(ClientError::dom)?;
    let width = display
        .width()
        .map_err(|e| ClientError::Display(format!("{e:?}")))?;
    let height = display
        .height()
        .map_err(|e| ClientError::Display(format!("{e:?}")))?;
    log::info!("display {}x{}", width, height);

    Ok(Screen::windowed(width, height)?)
}

fn create_canvases(
    document: &Document,
    screen: &Screen,
) -> Result<(HtmlElement, HtmlCanvasElement, HtmlCanvasElement), ClientError> {
    let body = document.body().ok_or(ClientError::NoDocument)?;
    let page = body.style();
    page.set_property("margin", "0").map_err(ClientError::dom)?;
    page.set_property("overflow", "hidden").map_err(ClientError::dom)?;
    page.set_property("background", "black").map_err(ClientError::dom)?;

    let container: HtmlElement = document
        .create_element("div")
        .map_err(ClientError::dom)?
        .dyn_into()
        .map_err(|el| ClientError::dom(el.into()))?;
    let style = container.style();
    style
        .set_property("position", "absolute")
        .map_err(ClientError::dom)?;
    style
        .set_property("width", &format!("{}px", screen.width()))
        .map_err(ClientError::dom)?;
    style
        .set_property("height", &format!("{}px", screen.height()))
        .map_err(ClientError::dom)?;
    style
        .set_property("transform-origin", "0 0")
        .map_err(ClientError::dom)?;
    body.append_child(&container).map_err(ClientError::dom)?;

    let canvas = create_layer(document, &container, screen, 0)?;
    let overlay = create_layer(document, &container, screen, 1)?;
    Ok((container, canvas, overlay))
}

/// Scale the logical screen up to the viewport; the canvases keep their
/// backing size so the game always runs at `screen` resolution.
fn fit_container(
    window: &Window,
    container: &HtmlElement,
    screen: &Screen,
) -> Result<(), ClientError> {
    let viewport_width = window
        .inner_width()
        .map_err(ClientError::dom)?
        .as_f64()
        .unwrap_or_default();
    let viewport_height = window
        .inner_height()
        .map_err(ClientError::dom)?
        .as_f64()
        .unwrap_or_default();
    let fit = fit_to_viewport(screen, viewport_width, viewport_height);

    let style = container.style();
    style
        .set_property("left", &format!("{}px", fit.left))
        .map_err(ClientError::dom)?;
    style
        .set_property("top", &format!("{}px", fit.top))
        .map_err(ClientError::dom)?;
    style
        .set_property("transform", &format!("scale({})", fit.scale))
        .map_err(ClientError::dom)?;
    log::debug!(
        "viewport {}x{}, scale {}",
        viewport_width,
        viewport_height,
        fit.scale
    );
    Ok(())
}

fn install_resize_listener(
    window: &Window,
    container: HtmlElement,
    screen: Screen,
) -> Result<(), ClientError> {
    let resize_window = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = fit_container(&resize_window, &container, &screen) {
            log::warn!("failed to rescale: {e}");
        }
    });
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(ClientError::dom)?;
    on_resize.forget();
    Ok(())
}

fn create_layer(
    document: &Document,
    container: &HtmlElement,
    screen: &Screen,
    z_index: u32,
) -> Result<HtmlCanvasElement, ClientError> {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(ClientError::dom)?
        .dyn_into()
        .map_err(|el| ClientError::dom(el.into()))?;
    canvas.set_width(screen.width() as u32);
    canvas.set_height(screen.height() as u32);

    let style = canvas.style();
    style
        .set_property("position", "absolute")
        .map_err(ClientError::dom)?;
    style.set_property("left", "0").map_err(ClientError::dom)?;
    style.set_property("top", "0").map_err(ClientError::dom)?;
    style
        .set_property("image-rendering", "pixelated")
        .map_err(ClientError::dom)?;
    style
        .set_property("z-index", &z_index.to_string())
        .map_err(ClientError::dom)?;

    container.append_child(&canvas).map_err(ClientError::dom)?;
    Ok(canvas)
}

fn install_key_listeners(
    window: &Window,
    document: &Document,
    keys: &Rc<KeyboardState>,
) -> Result<(), ClientError> {
    let down_keys = Rc::clone(keys);
    let fullscreen_document = document.clone();
    let fullscreen_requested = Cell::new(false);
    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        // Browsers only allow full screen from a user gesture
        if !fullscreen_requested.replace(true) {
            request_fullscreen(&fullscreen_document);
        }
        if down_keys.handle_key_down(&event.key()) {
            event.prevent_default();
        }
    });
    window
        .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())
        .map_err(ClientError::dom)?;

    let up_keys = Rc::clone(keys);
    let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if up_keys.handle_key_up(&event.key()) {
            event.prevent_default();
        }
    });
    window
        .add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())
        .map_err(ClientError::dom)?;

    // Key-up events are never delivered once focus is gone
    let blur_keys = Rc::clone(keys);
    let on_blur = Closure::<dyn FnMut()>::new(move || blur_keys.release_all());
    window
        .add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())
        .map_err(ClientError::dom)?;

    // Listeners live as long as the page
    on_key_down.forget();
    on_key_up.forget();
    on_blur.forget();
    Ok(())
}

fn request_fullscreen(document: &Document) {
    if document.fullscreen_element().is_some() {
        return;
    }
    if let Some(root) = document.document_element() {
        if let Err(e) = root.request_fullscreen() {
            log::warn!("full screen refused: {e:?}");
        }
    }
}

fn run(window: Window, app: App) -> Result<(), ClientError> {
    let app = Rc::new(RefCell::new(app));
    let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

    let next = Rc::clone(&callback);
    let loop_window = window.clone();
    *callback.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        if let Err(e) = app.borrow_mut().frame(now_ms) {
            log::error!("stopping frame loop: {e}");
            return;
        }
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = request_frame(&loop_window, cb) {
                log::error!("stopping frame loop: {e}");
            }
        }
    }));

    if let Some(cb) = callback.borrow().as_ref() {
        request_frame(&window, cb)?;
    }
    log::info!("frame loop started");
    Ok(())
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, ClientError> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(ClientError::dom)
}
