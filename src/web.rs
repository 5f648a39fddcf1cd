// JavaScript facade: drives the animator from requestAnimationFrame and wires up
// window resize and pointer events on the canvas's parent element

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use crate::animator::Animator;
use crate::canvas::CanvasSurface;
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::theme::Theme;
use crate::utils::Timer;

const THEME_STORAGE_KEY: &str = "portfolio-theme";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

// An event callback registered on a DOM target, kept so it can be removed again
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Listener, JsValue> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target: target.clone(),
            event,
            callback,
        })
    }

    fn detach(self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        if removed.is_err() {
            warn!("could not remove '{}' listener", self.event);
        }
    }
}

struct Inner {
    window: Window,
    animator: Animator<CanvasSurface>,
    frame_id: Option<i32>,
    frame_callback: Option<FrameCallback>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
pub struct ParticleBackground {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<ParticleBackground, JsValue> {
        let config = read_config(&options)?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
        let animator = Animator::new(config)?;
        Ok(ParticleBackground {
            inner: Rc::new(RefCell::new(Inner {
                window,
                animator,
                frame_id: None,
                frame_callback: None,
                listeners: Vec::new(),
            })),
        })
    }

    pub fn start(&self, canvas: Option<HtmlCanvasElement>) {
        self.stop();
        let canvas = match canvas {
            Some(canvas) => canvas,
            None => {
                warn!("no canvas to draw the particle field on");
                return;
            }
        };
        let surface = match CanvasSurface::new(canvas.clone()) {
            Ok(surface) => surface,
            Err(err) => {
                warn!("particle field not started: {}", err);
                return;
            }
        };
        if !self.inner.borrow_mut().animator.start(Some(surface)) {
            return;
        }
        if let Err(err) = self.attach_listeners(&canvas) {
            warn!("particle field listeners not attached: {:?}", err);
        }
        self.schedule_frames();
        info!("particle field running");
    }

    #[wasm_bindgen(js_name = startById)]
    pub fn start_by_id(&self, id: &str) {
        let canvas = self
            .inner
            .borrow()
            .window
            .document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok());
        self.start(canvas);
    }

    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(id) = inner.frame_id.take() {
            if inner.window.cancel_animation_frame(id).is_err() {
                warn!("could not cancel animation frame {}", id);
            }
        }
        if let Some(callback) = inner.frame_callback.take() {
            callback.borrow_mut().take();
        }
        for listener in inner.listeners.drain(..) {
            listener.detach();
        }
        inner.animator.stop();
    }

    pub fn resize(&self) {
        self.inner.borrow_mut().animator.resize();
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, key: &str) -> Result<(), JsValue> {
        let theme: Theme = key.parse()?;
        self.inner.borrow_mut().animator.set_palette(theme.palette());
        Ok(())
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.borrow().animator.is_running()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.inner.borrow().animator.field().particles().len()
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

impl ParticleBackground {
    fn attach_listeners(&self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let (window, pointer_reactive) = {
            let inner = self.inner.borrow();
            (inner.window.clone(), inner.animator.field().config().pointer_reactive)
        };

        let weak = Rc::downgrade(&self.inner);
        let on_resize = Closure::wrap(Box::new(move |_: Event| {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().animator.resize();
            }
        }) as Box<dyn FnMut(Event)>);
        self.keep(Listener::attach(window.as_ref(), "resize", on_resize)?);

        if !pointer_reactive {
            return Ok(());
        }

        let region: EventTarget = match canvas.parent_element() {
            Some(parent) => parent.into(),
            None => canvas.clone().into(),
        };

        let weak = Rc::downgrade(&self.inner);
        let surface = canvas.clone();
        let on_move = Closure::wrap(Box::new(move |event: Event| {
            let inner = match weak.upgrade() {
                Some(inner) => inner,
                None => return,
            };
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let rect = surface.get_bounding_client_rect();
                let pos = [
                    mouse.client_x() as f64 - rect.left(),
                    mouse.client_y() as f64 - rect.top(),
                ];
                inner.borrow_mut().animator.set_pointer(Some(pos));
            }
        }) as Box<dyn FnMut(Event)>);
        self.keep(Listener::attach(&region, "mousemove", on_move)?);

        let weak = Rc::downgrade(&self.inner);
        let on_leave = Closure::wrap(Box::new(move |_: Event| {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().animator.set_pointer(None);
            }
        }) as Box<dyn FnMut(Event)>);
        self.keep(Listener::attach(&region, "mouseleave", on_leave)?);

        Ok(())
    }

    fn keep(&self, listener: Listener) {
        self.inner.borrow_mut().listeners.push(listener);
    }

    // One closure that reschedules itself for as long as the animator keeps running
    fn schedule_frames(&self) {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let next = callback.clone();
        let weak = Rc::downgrade(&self.inner);

        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let shared = match weak.upgrade() {
                Some(shared) => shared,
                None => return,
            };
            let mut inner = shared.borrow_mut();
            inner.frame_id = None;

            let _timer = Timer::when_tracing("ParticleBackground::frame");
            match inner.animator.tick() {
                Ok(true) => {}
                Ok(false) => return,
                Err(err) => warn!("particle frame incomplete: {}", err),
            }

            if let Some(frame) = next.borrow().as_ref() {
                let id = request_frame(&inner.window, frame);
                inner.frame_id = id;
            }
        }) as Box<dyn FnMut()>));

        let mut inner = self.inner.borrow_mut();
        let id = callback
            .borrow()
            .as_ref()
            .and_then(|frame| request_frame(&inner.window, frame));
        inner.frame_id = id;
        inner.frame_callback = Some(callback);
    }
}

fn request_frame(window: &Window, frame: &Closure<dyn FnMut()>) -> Option<i32> {
    match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            warn!("requestAnimationFrame failed: {:?}", err);
            None
        }
    }
}

fn read_config(options: &JsValue) -> Result<FieldConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(FieldConfig::default());
    }
    let mut config: FieldConfig = serde_wasm_bindgen::from_value(options.clone())
        .map_err(|err| FieldError::InvalidConfig(err.to_string()))?;
    let theme = js_sys::Reflect::get(options, &JsValue::from_str("theme"))?;
    if let Some(key) = theme.as_string() {
        let theme: Theme = key.parse()?;
        config.apply_palette(theme.palette());
    }
    Ok(config)
}

/// The saved theme key, or `"light"` when nothing valid is stored.
#[wasm_bindgen(js_name = loadThemePreference)]
pub fn load_theme_preference() -> String {
    stored_theme().unwrap_or_default().key().to_owned()
}

fn stored_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let key = storage.get_item(THEME_STORAGE_KEY).ok()??;
    Theme::from_key(&key)
}

#[wasm_bindgen(js_name = saveThemePreference)]
pub fn save_theme_preference(key: &str) -> Result<(), JsValue> {
    let theme: Theme = key.parse()?;
    let storage = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
    storage.set_item(THEME_STORAGE_KEY, theme.key())
}
