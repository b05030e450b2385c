// Standard library and external crates
use bevy::prelude::*;

/// Handle on the continuous render loop. Per-frame systems only run while it
/// is running; stopping it after it has run exits the app.
#[derive(Resource, Debug, Default)]
pub struct RenderLoop {
    running: bool,
    started: bool,
}

impl RenderLoop {
    pub fn start(&mut self) {
        self.running = true;
        self.started = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Started at some point and stopped since.
    pub fn is_stopped(&self) -> bool {
        self.started && !self.running
    }
}

/// Run condition for per-frame systems.
pub fn render_loop_running(render_loop: Res<RenderLoop>) -> bool {
    render_loop.is_running()
}

pub fn start_render_loop(mut render_loop: ResMut<RenderLoop>) {
    info!("→ Render loop started");
    render_loop.start();
}

pub fn exit_when_stopped(render_loop: Res<RenderLoop>, mut exit: EventWriter<AppExit>) {
    if render_loop.is_changed() && render_loop.is_stopped() {
        info!("Render loop stopped, tearing down");
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_loop_is_idle_not_stopped() {
        let render_loop = RenderLoop::default();
        assert!(!render_loop.is_running());
        assert!(!render_loop.is_stopped());
    }

    #[test]
    fn start_then_stop() {
        let mut render_loop = RenderLoop::default();
        render_loop.start();
        assert!(render_loop.is_running());

        render_loop.stop();
        assert!(!render_loop.is_running());
        assert!(render_loop.is_stopped());
    }

    #[test]
    fn per_frame_systems_are_gated_on_the_loop() {
        let mut app = App::new();
        app.init_resource::<RenderLoop>()
            .init_resource::<TickCount>()
            .add_systems(Update, count_ticks.run_if(render_loop_running));

        app.update();
        assert_eq!(app.world().resource::<TickCount>().0, 0);

        app.world_mut().resource_mut::<RenderLoop>().start();
        app.update();
        app.update();
        assert_eq!(app.world().resource::<TickCount>().0, 2);

        app.world_mut().resource_mut::<RenderLoop>().stop();
        app.update();
        assert_eq!(app.world().resource::<TickCount>().0, 2);
    }

    #[derive(Resource, Default)]
    struct TickCount(u32);

    fn count_ticks(mut frames: ResMut<TickCount>) {
        frames.0 += 1;
    }
}
