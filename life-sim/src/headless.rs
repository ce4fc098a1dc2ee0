use crate::input::InputEvent;
use crate::palette::Palette;
use crate::scheduler::PresentationAdapter;
use life_grid::Grid;
use std::collections::VecDeque;

/// A [`PresentationAdapter`] with no screen: input comes from a script of
/// per-frame batches and output is recorded for inspection. Waiting is free.
#[derive(Debug, Default)]
pub struct HeadlessAdapter {
    frames: VecDeque<Vec<InputEvent>>,
    splash_renders: usize,
    renders: usize,
    waits: usize,
    status_texts: Vec<String>,
    last_frame: Option<(Grid, Palette)>,
}

impl HeadlessAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame(mut self, events: Vec<InputEvent>) -> Self {
        self.push_frame(events);
        self
    }

    pub fn with_idle_frames(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.push_frame(vec![]);
        }
        self
    }

    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn splash_renders(&self) -> usize {
        self.splash_renders
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn waits(&self) -> usize {
        self.waits
    }

    pub fn status_texts(&self) -> &[String] {
        &self.status_texts
    }

    /// Grid and palette of the most recent `render`.
    pub fn last_frame(&self) -> Option<&(Grid, Palette)> {
        self.last_frame.as_ref()
    }
}

impl PresentationAdapter for HeadlessAdapter {
    /// Once the script runs out every frame is idle.
    fn drain_events(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }

    fn render_splash(&mut self) {
        self.splash_renders += 1;
    }

    fn render(&mut self, grid: &Grid, palette: &Palette) {
        self.renders += 1;
        self.last_frame = Some((grid.clone(), *palette));
    }

    fn wait_for_next_frame(&mut self) {
        self.waits += 1;
    }

    fn set_status_text(&mut self, text: &str) {
        self.status_texts.push(text.to_owned());
    }
}
