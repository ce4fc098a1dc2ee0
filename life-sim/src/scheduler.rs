use crate::controller::{Command, Controller, FrameCounter};
use crate::input::InputEvent;
use crate::palette::Palette;
use life_grid::Grid;
use log::info;

/// What the frame loop needs from the screen, input devices and clock.
pub trait PresentationAdapter {
    /// Input received since the previous call. Must not block.
    fn drain_events(&mut self) -> Vec<InputEvent>;
    fn render_splash(&mut self);
    fn render(&mut self, grid: &Grid, palette: &Palette);
    /// Blocks until the next frame is due.
    fn wait_for_next_frame(&mut self);
    fn set_status_text(&mut self, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    SplashScreen,
    Running,
    Terminated,
}

/// Drives the [`Controller`] one frame at a time: input first, then the
/// frame tick, then drawing.
#[derive(Debug)]
pub struct Scheduler {
    controller: Controller,
    frames: FrameCounter,
    phase: Phase,
    status_text: Option<String>,
}

impl Scheduler {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            frames: FrameCounter::default(),
            phase: Phase::SplashScreen,
            status_text: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Loops until the user quits.
    pub fn run<A: PresentationAdapter>(&mut self, adapter: &mut A) {
        while self.run_frame(adapter) != Phase::Terminated {
            adapter.wait_for_next_frame();
        }
    }

    /// One frame without the trailing wait. Once terminated, does nothing.
    pub fn run_frame<A: PresentationAdapter>(&mut self, adapter: &mut A) -> Phase {
        if self.phase == Phase::Terminated {
            return self.phase;
        }

        self.handle_events(adapter.drain_events());

        match self.phase {
            Phase::SplashScreen => adapter.render_splash(),
            Phase::Running => {
                self.controller.tick(&mut self.frames);
                self.update_status_text(adapter);
                let state = self.controller.state();
                adapter.render(state.grid(), &state.palette());
            }
            Phase::Terminated => {}
        }
        self.phase
    }

    fn handle_events(&mut self, events: Vec<InputEvent>) {
        for event in events {
            let next = match self.phase {
                Phase::SplashScreen => Self::splash_transition(&event),
                Phase::Running => match self.controller.handle_event(&event) {
                    Command::Continue => Phase::Running,
                    Command::Quit => Phase::Terminated,
                },
                Phase::Terminated => Phase::Terminated,
            };
            if next != self.phase {
                info!("{:?} -> {next:?}", self.phase);
                self.phase = next;
                // The event that changed phase consumes the rest of the batch.
                break;
            }
        }
    }

    fn splash_transition(event: &InputEvent) -> Phase {
        match event {
            InputEvent::Quit => Phase::Terminated,
            InputEvent::KeyDown { .. } | InputEvent::MouseDown { .. } => Phase::Running,
        }
    }

    fn update_status_text<A: PresentationAdapter>(&mut self, adapter: &mut A) {
        let text = self.controller.status_text();
        if self.status_text.as_deref() != Some(text.as_str()) {
            adapter.set_status_text(&text);
            self.status_text = Some(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessAdapter;
    use crate::input::{Key, MouseButton};
    use crate::settings::Settings;

    fn scheduler() -> Scheduler {
        Scheduler::new(Controller::new(&Settings::default()))
    }

    #[test]
    fn splash_waits_for_input() {
        let mut scheduler = scheduler();
        let mut adapter = HeadlessAdapter::new().with_idle_frames(3);
        for _ in 0..3 {
            assert_eq!(scheduler.run_frame(&mut adapter), Phase::SplashScreen);
        }
        assert_eq!(adapter.splash_renders(), 3);
        assert_eq!(adapter.renders(), 0);
        assert!(adapter.status_texts().is_empty());
    }

    #[test]
    fn any_key_or_click_leaves_splash() {
        for event in [
            InputEvent::key(Key::Other),
            InputEvent::key(Key::Escape),
            InputEvent::mouse(MouseButton::Middle, 0, 0),
        ] {
            let mut scheduler = scheduler();
            let mut adapter = HeadlessAdapter::new().with_frame(vec![event]);
            assert_eq!(scheduler.run_frame(&mut adapter), Phase::Running);
            assert_eq!(adapter.renders(), 1);
            assert_eq!(adapter.splash_renders(), 0);
        }
    }

    #[test]
    fn dismissing_event_is_not_forwarded() {
        let mut scheduler = scheduler();
        let mut adapter = HeadlessAdapter::new().with_frame(vec![
            InputEvent::key(Key::Space),
            InputEvent::key(Key::Space),
        ]);
        scheduler.run_frame(&mut adapter);
        assert!(scheduler.controller().state().is_paused());
    }

    #[test]
    fn quit_on_splash_terminates() {
        let mut scheduler = scheduler();
        let mut adapter = HeadlessAdapter::new().with_frame(vec![InputEvent::Quit]);
        assert_eq!(scheduler.run_frame(&mut adapter), Phase::Terminated);
        assert_eq!(adapter.splash_renders(), 0);
    }

    #[test]
    fn escape_while_running_terminates_without_render() {
        let mut scheduler = scheduler();
        let mut adapter = HeadlessAdapter::new()
            .with_frame(vec![InputEvent::key(Key::Other)])
            .with_frame(vec![
                InputEvent::key(Key::Escape),
                InputEvent::mouse(MouseButton::Left, 0, 0),
            ]);
        assert_eq!(scheduler.run_frame(&mut adapter), Phase::Running);
        assert_eq!(scheduler.run_frame(&mut adapter), Phase::Terminated);
        assert_eq!(adapter.renders(), 1);
        assert!(scheduler.controller().grid().is_empty());
    }

    #[test]
    fn terminated_is_final() {
        let mut scheduler = scheduler();
        let mut adapter = HeadlessAdapter::new()
            .with_frame(vec![InputEvent::Quit])
            .with_frame(vec![InputEvent::key(Key::Space)]);
        scheduler.run_frame(&mut adapter);
        assert_eq!(scheduler.run_frame(&mut adapter), Phase::Terminated);
        assert_eq!(adapter.pending_frames(), 1);
    }

    #[test]
    fn status_text_is_sent_only_on_change() {
        let mut scheduler = scheduler();
        let mut adapter = HeadlessAdapter::new()
            .with_frame(vec![InputEvent::key(Key::Other)])
            .with_idle_frames(2)
            .with_frame(vec![InputEvent::key(Key::Space)])
            .with_idle_frames(2);
        for _ in 0..6 {
            scheduler.run_frame(&mut adapter);
        }
        assert_eq!(
            adapter.status_texts(),
            [
                "Conway's Game of Life -- Speed: 0.2500 -- PAUSED",
                "Conway's Game of Life -- Speed: 0.2500",
            ]
        );
    }

    #[test]
    fn run_waits_between_frames() {
        let mut scheduler = scheduler();
        let mut adapter = HeadlessAdapter::new()
            .with_frame(vec![InputEvent::key(Key::Other)])
            .with_idle_frames(4)
            .with_frame(vec![InputEvent::Quit]);
        scheduler.run(&mut adapter);
        assert_eq!(scheduler.phase(), Phase::Terminated);
        assert_eq!(adapter.renders(), 5);
        assert_eq!(adapter.waits(), 5);
    }
}
