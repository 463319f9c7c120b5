//! Capabilities the background consumes from whatever hosts it.
//!
//! The host owns the theme flag, the device capability check, the viewport
//! and the per-frame callback registration. The background only ever reads
//! them through these traits, so native callers and tests can supply plain
//! values while the web bridge wires them to the browser.

use crate::api::types::Viewport;

/// Per-frame inputs, read once at the start of every frame.
pub trait FrameHost {
    /// Current viewport size. Re-read every frame so the surface tracks resizes.
    fn viewport(&self) -> Viewport;

    /// Theme flag owned by the host's theming system. Never written by the background.
    fn is_dark_theme(&self) -> bool;

    /// Device capability flag. When false the frame is skipped entirely.
    fn should_render(&self) -> bool;
}

/// Registration with the host's per-frame callback mechanism.
///
/// The host guarantees frames are never re-entered: a callback runs to
/// completion before the next one fires.
pub trait FrameScheduler {
    /// Start delivering frame callbacks.
    fn register(&mut self);

    /// Stop delivering frame callbacks. No callback fires after this returns.
    fn deregister(&mut self);
}

/// Host backed by plain values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticHost {
    pub viewport: Viewport,
    pub dark_theme: bool,
    pub should_render: bool,
}

impl StaticHost {
    pub fn new(viewport: Viewport, dark_theme: bool) -> Self {
        Self {
            viewport,
            dark_theme,
            should_render: true,
        }
    }

    pub fn with_should_render(mut self, should_render: bool) -> Self {
        self.should_render = should_render;
        self
    }
}

impl FrameHost for StaticHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn is_dark_theme(&self) -> bool {
        self.dark_theme
    }

    fn should_render(&self) -> bool {
        self.should_render
    }
}

/// Browser family facts derived from a user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceProfile {
    pub android: bool,
    pub chrome_android: bool,
}

impl DeviceProfile {
    pub fn from_user_agent(ua: &str) -> Self {
        let android = ua.contains("Android");
        // Other Chromium-based Android browsers also advertise "Chrome/".
        let chromium_fork = ["SamsungBrowser", "EdgA", "OPR", "YaBrowser", "wv)"]
            .iter()
            .any(|marker| ua.contains(marker));
        let chrome_android = android && ua.contains("Chrome/") && !chromium_fork;
        Self {
            android,
            chrome_android,
        }
    }

    /// The canvas background is disabled on Android browsers other than Chrome.
    pub fn supports_background(&self) -> bool {
        !self.android || self.chrome_android
    }
}
