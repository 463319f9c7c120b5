//! Browser-side capabilities: theme flag, device check, viewport, frame scheduling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use daybreak_engine::{DeviceProfile, FrameHost, FrameScheduler, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Per-frame inputs read from the page.
///
/// The theme flag is pushed in by the page's theming code; the device
/// profile is read once from `navigator.userAgent`; the viewport is
/// re-read from `window` on every frame.
pub struct WebHost {
    dark_theme: Cell<bool>,
    device: DeviceProfile,
}

impl WebHost {
    pub fn new(dark_theme: bool) -> Self {
        let device = web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .map(|ua| DeviceProfile::from_user_agent(&ua))
            .unwrap_or_default();
        if !device.supports_background() {
            log::info!("ambient background disabled for this browser");
        }
        Self {
            dark_theme: Cell::new(dark_theme),
            device,
        }
    }

    pub fn set_dark_theme(&self, dark: bool) {
        self.dark_theme.set(dark);
    }
}

/// Current `window.innerWidth` x `window.innerHeight`, or zero outside a window.
pub fn window_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

impl FrameHost for WebHost {
    fn viewport(&self) -> Viewport {
        window_viewport()
    }

    fn is_dark_theme(&self) -> bool {
        self.dark_theme.get()
    }

    fn should_render(&self) -> bool {
        self.device.supports_background()
    }
}

type FrameCallback = Closure<dyn FnMut()>;

/// `requestAnimationFrame` loop.
///
/// While registered, the callback re-arms itself after every frame.
/// [`deregister`](FrameScheduler::deregister) cancels the pending request,
/// and a frame already in flight will not re-arm.
pub struct RafScheduler {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    active: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl RafScheduler {
    /// `on_frame` runs once per display refresh while registered.
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let active = Rc::new(Cell::new(false));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let weak_callback = Rc::downgrade(&callback);
        let loop_active = active.clone();
        let loop_pending = pending.clone();
        *callback.borrow_mut() = Some(Closure::new(move || {
            loop_pending.set(None);
            if !loop_active.get() {
                return;
            }
            on_frame();
            if !loop_active.get() {
                return;
            }
            if let Some(cb) = weak_callback.upgrade() {
                if let Some(closure) = cb.borrow().as_ref() {
                    loop_pending.set(request_frame(closure));
                }
            }
        }));

        Self {
            callback,
            active,
            pending,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

fn request_frame(closure: &FrameCallback) -> Option<i32> {
    let window = web_sys::window()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::debug!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn register(&mut self) {
        if self.active.replace(true) {
            return;
        }
        if let Some(closure) = self.callback.borrow().as_ref() {
            self.pending.set(request_frame(closure));
        }
    }

    fn deregister(&mut self) {
        self.active.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for RafScheduler {
    fn drop(&mut self) {
        // A request left pending would call into a freed closure.
        self.deregister();
    }
}
