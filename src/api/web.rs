//! Browser binding
//!
//! Owns the canvas and every DOM callback. State shared between callbacks
//! lives in one `Rc<RefCell<Runtime>>`; each closure holds a clone of `App`.
//! Failures inside callbacks are logged at debug level and otherwise ignored.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, HtmlCanvasElement, HtmlElement, Window,
};

use crate::animation::FrameStats;
use crate::config::LifeConfig;
use crate::error::{LifeError, LifeResult};
use crate::lifecycle::{Discovery, HeroController, Resume};
use crate::render::canvas::CanvasSurface;
use crate::support::random::JsRandom;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const ACTIVE_CLASS: &str = "active";

struct Runtime {
    controller: HeroController,
    surface: Option<CanvasSurface>,
    /// Pending `requestAnimationFrame` handle. At most one at a time.
    frame_handle: Option<i32>,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[derive(Clone)]
struct App {
    runtime: Rc<RefCell<Runtime>>,
    tick: FrameCallback,
}

/// Handle on a mounted background, for inspecting its state.
pub struct Mounted {
    app: App,
}

impl Mounted {
    pub fn is_started(&self) -> bool {
        self.app.runtime.borrow().controller.is_started()
    }

    pub fn is_running(&self) -> bool {
        self.app.runtime.borrow().controller.is_running()
    }

    /// Whether an animation frame is currently requested.
    pub fn has_pending_frame(&self) -> bool {
        self.app.runtime.borrow().frame_handle.is_some()
    }

    pub fn stats(&self) -> FrameStats {
        self.app.runtime.borrow().controller.stats()
    }
}

/// Wire the background into the page. Discovery begins once the document is
/// parsed. Page listeners are only added once the canvas has started.
pub fn boot(config: LifeConfig) -> LifeResult<()> {
    mount(config).map(|_| ())
}

/// Like `boot`, but hands back the mounted background.
pub fn mount(config: LifeConfig) -> LifeResult<Mounted> {
    let window = window()?;
    let document = document()?;

    let controller = HeroController::new(config, Box::new(JsRandom), prefers_reduced_motion(&window));
    let app = App {
        runtime: Rc::new(RefCell::new(Runtime {
            controller,
            surface: None,
            frame_handle: None,
        })),
        tick: Rc::new(RefCell::new(None)),
    };
    app.install_frame_callback();

    if document.ready_state() == "loading" {
        let ready = app.clone();
        let on_ready = Closure::once_into_js(move |_: Event| ready.queue_start());
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                on_ready.unchecked_ref(),
                &options,
            )
            .map_err(|_| LifeError::dom("DOMContentLoaded listener"))?;
    } else {
        app.queue_start();
    }
    Ok(Mounted { app })
}

impl App {
    fn install_frame_callback(&self) {
        let app = self.clone();
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let running = {
                let mut rt = app.runtime.borrow_mut();
                rt.frame_handle = None;
                let Runtime {
                    controller, surface, ..
                } = &mut *rt;
                match surface.as_mut() {
                    Some(surface) => {
                        controller.frame(timestamp, surface);
                        controller.is_running()
                    }
                    None => false,
                }
            };
            if running {
                if let Err(err) = app.request_frame() {
                    log::debug!("frame not scheduled: {err}");
                }
            }
        }) as Box<dyn FnMut(f64)>);
        *self.tick.borrow_mut() = Some(callback);
    }

    fn request_frame(&self) -> LifeResult<()> {
        if self.runtime.borrow().frame_handle.is_some() {
            return Ok(());
        }
        let tick = self.tick.borrow();
        let Some(callback) = tick.as_ref() else {
            return Ok(());
        };
        let handle = window()?
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|_| LifeError::dom("requestAnimationFrame"))?;
        self.runtime.borrow_mut().frame_handle = Some(handle);
        Ok(())
    }

    fn listen(
        &self,
        target: &EventTarget,
        event: &'static str,
        handler: fn(&App) -> LifeResult<()>,
    ) -> LifeResult<()> {
        let app = self.clone();
        let callback = Closure::wrap(Box::new(move |_: Event| {
            if let Err(err) = handler(&app) {
                log::debug!("{event} handler failed: {err}");
            }
        }) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| LifeError::dom(format!("{event} listener")))?;
        callback.forget();
        Ok(())
    }

    fn queue_start(&self) {
        if let Err(err) = self.try_start() {
            log::debug!("hero background not started: {err}");
        }
    }

    /// One discovery attempt; schedules the next one if the canvas is missing.
    fn try_start(&self) -> LifeResult<()> {
        let document = document()?;
        let canvas_id = self.runtime.borrow().controller.config().discovery.canvas_id.clone();
        let canvas = document
            .get_element_by_id(&canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

        let decision = self.runtime.borrow_mut().controller.discover(canvas.is_some());
        match (decision, canvas) {
            (Discovery::Start, Some(canvas)) => self.start_with_canvas(&document, canvas),
            (Discovery::RetryAfter(delay_ms), _) => {
                let next = self.clone();
                let delay_ms = i32::try_from(delay_ms).map_err(|_| LifeError::dom("retry delay"))?;
                let retry = Closure::once_into_js(move || next.queue_start());
                window()?
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        retry.unchecked_ref(),
                        delay_ms,
                    )
                    .map_err(|_| LifeError::dom("setTimeout"))?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn start_with_canvas(&self, document: &Document, canvas: HtmlCanvasElement) -> LifeResult<()> {
        if self.runtime.borrow().controller.is_started() {
            return Ok(());
        }

        let mut surface = CanvasSurface::new(canvas.clone())?;
        let (width, height) = self
            .container_size(document)
            .unwrap_or((canvas.width(), canvas.height()));

        {
            let mut rt = self.runtime.borrow_mut();
            if !rt.controller.start(width, height, now_ms(), &mut surface) {
                return Ok(());
            }
            rt.surface = Some(surface);
        }

        canvas
            .class_list()
            .add_1(ACTIVE_CLASS)
            .map_err(|_| LifeError::dom("canvas class list"))?;

        let window = window()?;
        self.listen(&window, "resize", App::on_resize)?;
        self.listen(&window, "pagehide", App::on_pagehide)?;
        self.listen(&window, "pageshow", App::on_pageshow)?;
        self.request_frame()
    }

    /// Box size of the container the canvas fills, if it exists.
    fn container_size(&self, document: &Document) -> Option<(u32, u32)> {
        let id = self.runtime.borrow().controller.config().discovery.container_id.clone();
        let container = document
            .get_element_by_id(&id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some((
            container.offset_width().max(0) as u32,
            container.offset_height().max(0) as u32,
        ))
    }

    fn on_resize(&self) -> LifeResult<()> {
        let document = document()?;
        let Some((width, height)) = self.container_size(&document) else {
            return Ok(());
        };

        let mut rt = self.runtime.borrow_mut();
        let Runtime {
            controller, surface, ..
        } = &mut *rt;
        if let Some(surface) = surface.as_mut() {
            controller.resize(width, height, surface);
        }
        Ok(())
    }

    fn on_pagehide(&self) -> LifeResult<()> {
        let pending = {
            let mut rt = self.runtime.borrow_mut();
            rt.controller.stop();
            rt.frame_handle.take()
        };
        if let Some(handle) = pending {
            window()?
                .cancel_animation_frame(handle)
                .map_err(|_| LifeError::dom("cancelAnimationFrame"))?;
        }
        Ok(())
    }

    fn on_pageshow(&self) -> LifeResult<()> {
        let resume = self.runtime.borrow_mut().controller.resume(now_ms());
        match resume {
            Resume::Restarted => self.request_frame(),
            Resume::NotStarted | Resume::AlreadyRunning => Ok(()),
        }
    }
}

fn window() -> LifeResult<Window> {
    web_sys::window().ok_or_else(|| LifeError::dom("no window"))
}

fn document() -> LifeResult<Document> {
    window()?
        .document()
        .ok_or_else(|| LifeError::dom("no document"))
}

/// Same clock as the `requestAnimationFrame` timestamps.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}
