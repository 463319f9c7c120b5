use daybreak_engine::{
    AmbientBackground, BackgroundConfig, DrawSurface, FrameHost, FrameOutcome, FrameScheduler,
    Rng, Viewport,
};

/// Owns the background's mount / frame / unmount lifecycle.
///
/// Generic over the drawing surface so the lifecycle can be driven by the
/// browser's canvas or, in tests, by a recording surface.
pub struct BackgroundRunner<S: DrawSurface> {
    config: BackgroundConfig,
    background: Option<AmbientBackground>,
    surface: Option<S>,
}

impl<S: DrawSurface> BackgroundRunner<S> {
    pub fn new(config: BackgroundConfig) -> Self {
        Self {
            config,
            background: None,
            surface: None,
        }
    }

    /// Provide the surface frames are drawn onto.
    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.background.is_some()
    }

    pub fn background(&self) -> Option<&AmbientBackground> {
        self.background.as_ref()
    }

    /// Seed a fresh scene, then start receiving frame callbacks.
    /// A configured seed takes precedence over `seed`. Mounting twice is a
    /// no-op; returns whether this call mounted.
    pub fn mount(
        &mut self,
        viewport: Viewport,
        seed: u64,
        scheduler: &mut impl FrameScheduler,
    ) -> bool {
        if self.is_mounted() {
            log::debug!("mount ignored: already mounted");
            return false;
        }
        let mut rng = Rng::new(self.config.seed.unwrap_or(seed));
        self.background = Some(AmbientBackground::new(&self.config, viewport, &mut rng));
        scheduler.register();
        log::info!("ambient background mounted");
        true
    }

    /// Stop receiving frame callbacks and drop the scene.
    pub fn unmount(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(bg) = self.background.take() {
            scheduler.deregister();
            log::info!("ambient background unmounted after {} frames", bg.frames());
        }
    }

    /// One frame callback. `None` when not mounted.
    pub fn frame(&mut self, host: &dyn FrameHost) -> Option<FrameOutcome> {
        let background = self.background.as_mut()?;
        let surface = self.surface.as_mut().map(|s| s as &mut dyn DrawSurface);
        Some(background.frame(host, surface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybreak_engine::{RecordingSurface, SkyLayer, StaticHost};

    #[derive(Default)]
    struct CountingScheduler {
        registered: u32,
        deregistered: u32,
    }

    impl CountingScheduler {
        fn active(&self) -> bool {
            self.registered > self.deregistered
        }
    }

    impl FrameScheduler for CountingScheduler {
        fn register(&mut self) {
            self.registered += 1;
        }

        fn deregister(&mut self) {
            self.deregistered += 1;
        }
    }

    fn vp() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn frames_before_mount_do_nothing() {
        let mut runner = BackgroundRunner::new(BackgroundConfig::default());
        runner.attach_surface(RecordingSurface::new());
        assert_eq!(runner.frame(&StaticHost::new(vp(), true)), None);
        assert!(runner.surface().unwrap().commands().is_empty());
    }

    #[test]
    fn mount_registers_unmount_deregisters() {
        let mut sched = CountingScheduler::default();
        let mut runner: BackgroundRunner<RecordingSurface> = BackgroundRunner::new(BackgroundConfig::default());

        runner.mount(vp(), 1, &mut sched);
        assert!(runner.is_mounted());
        assert!(sched.active());

        runner.mount(vp(), 2, &mut sched);
        assert_eq!(sched.registered, 1);

        runner.unmount(&mut sched);
        assert!(!runner.is_mounted());
        assert!(!sched.active());

        runner.unmount(&mut sched);
        assert_eq!(sched.deregistered, 1);
    }

    #[test]
    fn second_mount_reports_ignored() {
        let mut sched = CountingScheduler::default();
        let mut runner: BackgroundRunner<RecordingSurface> =
            BackgroundRunner::new(BackgroundConfig::default());

        assert!(runner.mount(vp(), 1, &mut sched));
        assert!(!runner.mount(vp(), 2, &mut sched));
        assert_eq!(sched.registered, 1);

        runner.unmount(&mut sched);
        assert!(runner.mount(vp(), 3, &mut sched));
        assert_eq!(sched.registered, 2);
    }

    #[test]
    fn frames_draw_once_mounted() {
        let mut sched = CountingScheduler::default();
        let mut runner = BackgroundRunner::new(BackgroundConfig::default());
        runner.attach_surface(RecordingSurface::new());
        runner.mount(vp(), 9, &mut sched);

        let outcome = runner.frame(&StaticHost::new(vp(), false));
        assert_eq!(outcome, Some(FrameOutcome::Drawn));
        let surface = runner.surface().unwrap();
        assert!(surface.count_in(SkyLayer::Birds) > 0);
    }

    #[test]
    fn missing_surface_skips_without_mutation() {
        let mut sched = CountingScheduler::default();
        let mut runner: BackgroundRunner<RecordingSurface> = BackgroundRunner::new(BackgroundConfig::default());
        runner.mount(vp(), 9, &mut sched);
        let before = runner.background().unwrap().state().clone();

        let outcome = runner.frame(&StaticHost::new(vp(), true));
        assert_eq!(outcome, Some(FrameOutcome::NoSurface));
        assert_eq!(runner.background().unwrap().state(), &before);
    }

    #[test]
    fn configured_seed_wins() {
        let config = BackgroundConfig {
            seed: Some(5),
            ..BackgroundConfig::default()
        };
        let mut sched = CountingScheduler::default();
        let mut a: BackgroundRunner<RecordingSurface> = BackgroundRunner::new(config.clone());
        let mut b: BackgroundRunner<RecordingSurface> = BackgroundRunner::new(config);
        a.mount(vp(), 100, &mut sched);
        b.mount(vp(), 200, &mut sched);
        assert_eq!(
            a.background().unwrap().state(),
            b.background().unwrap().state()
        );
    }

    #[test]
    fn remount_reseeds() {
        let mut sched = CountingScheduler::default();
        let mut runner: BackgroundRunner<RecordingSurface> = BackgroundRunner::new(BackgroundConfig::default());
        runner.mount(vp(), 1, &mut sched);
        let first = runner.background().unwrap().state().clone();
        runner.unmount(&mut sched);
        runner.mount(vp(), 2, &mut sched);
        assert_ne!(runner.background().unwrap().state(), &first);
        assert_eq!(sched.registered, 2);
    }
}
