use std::path::PathBuf;

use anyhow::Result;
use winit::dpi::LogicalSize;

use scribble_engine::coords::Vec2;
use scribble_engine::core::{App as EngineApp, AppControl, FrameCtx, WindowCtx};
use scribble_engine::device::GpuInit;
use scribble_engine::input::InputEvent;
use scribble_engine::paint::Color;
use scribble_engine::render::shapes::rect::RectRenderer;
use scribble_engine::render::shapes::stroke::StrokeRenderer;
use scribble_engine::scene::DrawList;
use scribble_engine::window::{Runtime, RuntimeConfig};

use crate::canvas::{Canvas, Outcome, Response};
use crate::keymap::Keymap;

// ── Application ───────────────────────────────────────────────────────────

/// Top-level builder for the drawing window.
///
/// ```rust,ignore
/// Application::new()
///     .title("Canvas")
///     .document_path("sketch.canvas")
///     .open_on_start(true)
///     .run()?;
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    path: Option<PathBuf>,
    open_on_start: bool,
    keymap: Option<Keymap>,
    backdrop_only: bool,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "Canvas".to_string(),
            width: 1280.0,
            height: 720.0,
            path: None,
            open_on_start: false,
            keymap: None,
            backdrop_only: false,
        }
    }

    /// A window showing only the gradient backdrop. Strokes are not captured;
    /// quit and background cycling still work.
    pub fn backdrop_only() -> Self {
        Self {
            backdrop_only: true,
            ..Self::new()
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Document file used by the load and save commands.
    pub fn document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Load the document path before the window opens. Failures are logged
    /// and the canvas starts empty.
    pub fn open_on_start(mut self, open: bool) -> Self {
        self.open_on_start = open;
        self
    }

    /// Replace the default key bindings.
    pub fn keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = Some(keymap);
        self
    }

    /// Builds the canvas this application would run, without opening a window.
    pub fn build_canvas(&self) -> Canvas {
        let mut canvas = if self.backdrop_only {
            Canvas::backdrop_only()
        } else {
            Canvas::new()
        };
        if let Some(keymap) = &self.keymap {
            canvas = canvas.with_keymap(keymap.clone());
        }
        if let Some(path) = &self.path {
            canvas = canvas.with_path(path);
        }
        canvas
    }

    /// Opens the window and runs the event loop until the user quits.
    pub fn run(self) -> Result<()> {
        let mut canvas = self.build_canvas();
        let startup_warning = if self.open_on_start {
            match canvas.load() {
                Outcome::Failed(e) => Some(warning_title(&self.title, &e)),
                _ => None,
            }
        } else {
            None
        };

        let mut state = PadApp::new(self.title.clone(), canvas);
        state.pending_title = startup_warning;

        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            ..RuntimeConfig::default()
        };
        Runtime::run(config, GpuInit::default(), state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

fn warning_title(base: &str, err: &impl std::fmt::Display) -> String {
    format!("{base} (warning: {err})")
}

// ── PadApp ────────────────────────────────────────────────────────────────

/// Internal state that implements `scribble_engine::core::App`.
///
/// Renderers and the frame's draw list live here; the canvas never sees them.
struct PadApp {
    canvas: Canvas,
    base_title: String,
    /// Title to apply at the next frame (the window does not exist at startup).
    pending_title: Option<String>,
    showing_warning: bool,

    draw_list: DrawList,
    rect_renderer: RectRenderer,
    stroke_renderer: StrokeRenderer,
}

impl PadApp {
    fn new(base_title: String, canvas: Canvas) -> Self {
        Self {
            canvas,
            base_title,
            pending_title: None,
            showing_warning: false,
            draw_list: DrawList::new(),
            rect_renderer: RectRenderer::new(),
            stroke_renderer: StrokeRenderer::new(),
        }
    }

    fn respond(&mut self, window: &WindowCtx<'_>, response: Response) -> AppControl {
        let redraw = response.needs_redraw();

        match response {
            Response::Ignored | Response::Redraw => {}
            Response::Quit => return AppControl::Exit,
            Response::File(Outcome::Failed(e)) => {
                window.set_title(&warning_title(&self.base_title, &e));
                self.showing_warning = true;
            }
            Response::File(Outcome::Loaded | Outcome::Saved) => {
                if self.showing_warning {
                    window.set_title(&self.base_title);
                    self.showing_warning = false;
                }
            }
            Response::File(Outcome::NoSelection) => {}
        }

        if redraw {
            AppControl::Redraw
        } else {
            AppControl::Continue
        }
    }
}

impl EngineApp for PadApp {
    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        let response = self.canvas.handle_input(event);
        self.respond(window, response)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(title) = self.pending_title.take() {
            ctx.window.set_title(&title);
            self.showing_warning = true;
        }

        let (w, h) = ctx.window.logical_size();
        self.draw_list.clear();
        self.canvas.paint(&mut self.draw_list, Vec2::new(w, h));

        let dl = &mut self.draw_list;
        let r_rect = &mut self.rect_renderer;
        let r_stroke = &mut self.stroke_renderer;

        ctx.render(Color::from_premul(0.0, 0.0, 0.0, 1.0), |rctx, target| {
            r_rect.render(rctx, target, dl);
            r_stroke.render(rctx, target, dl);
        })
    }
}
