//! WASM bridge: mounts the ambient background onto a page `<canvas>`.
//!
//! ```js
//! import init, { SkyBackground } from "daybreak_web";
//! await init();
//! const bg = new SkyBackground(canvas, prefersDark, null);
//! bg.mount();
//! themeToggle.onchange = (dark) => bg.setDarkTheme(dark);
//! // on teardown
//! bg.unmount();
//! ```

pub mod canvas;
pub mod host;
pub mod runner;

pub use canvas::CanvasSurface;
pub use host::{window_viewport, RafScheduler, WebHost};
pub use runner::BackgroundRunner;

use std::cell::RefCell;
use std::rc::Rc;

use daybreak_engine::BackgroundConfig;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Page-facing handle: one per background canvas.
#[wasm_bindgen]
pub struct SkyBackground {
    runner: Rc<RefCell<BackgroundRunner<CanvasSurface>>>,
    host: Rc<WebHost>,
    scheduler: RafScheduler,
}

#[wasm_bindgen]
impl SkyBackground {
    /// Bind to `canvas`. `config_json` is an optional `BackgroundConfig` JSON object.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        dark_theme: bool,
        config_json: Option<String>,
    ) -> Result<SkyBackground, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let config = match config_json {
            Some(json) => BackgroundConfig::from_json(&json)
                .map_err(|e| JsValue::from_str(&format!("invalid background config: {}", e)))?,
            None => BackgroundConfig::default(),
        };

        let mut runner = BackgroundRunner::new(config);
        match CanvasSurface::acquire(canvas) {
            Some(surface) => runner.attach_surface(surface),
            None => log::warn!("no 2d context on background canvas; frames will be skipped"),
        }
        let runner = Rc::new(RefCell::new(runner));
        let host = Rc::new(WebHost::new(dark_theme));

        let frame_runner = runner.clone();
        let frame_host = host.clone();
        let scheduler = RafScheduler::new(move || {
            if let Ok(mut runner) = frame_runner.try_borrow_mut() {
                runner.frame(&*frame_host);
            }
        });

        Ok(Self {
            runner,
            host,
            scheduler,
        })
    }

    /// Seed the scene from the current window size and start animating.
    pub fn mount(&mut self) {
        let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
        self.runner
            .borrow_mut()
            .mount(window_viewport(), seed, &mut self.scheduler);
    }

    /// Stop animating and drop the scene. A later `mount` re-seeds from scratch.
    pub fn unmount(&mut self) {
        self.runner.borrow_mut().unmount(&mut self.scheduler);
    }

    #[wasm_bindgen(js_name = setDarkTheme)]
    pub fn set_dark_theme(&self, dark: bool) {
        self.host.set_dark_theme(dark);
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.runner.borrow().is_mounted()
    }

    /// Frames drawn since the last mount.
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.runner
            .borrow()
            .background()
            .map(|bg| bg.frames() as f64)
            .unwrap_or(0.0)
    }
}
