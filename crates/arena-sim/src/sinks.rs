//! Presentation collaborators the engine writes to.
//!
//! The host hands these in when building the engine; the simulation never
//! looks them up on its own. All of them are write-only from the engine's
//! point of view.

use arena_core::enums::CombatantId;

/// A text surface (round banner, result message, countdown).
pub trait TextDisplay: Send {
    fn set_text(&mut self, text: &str);
}

/// Camera that keeps the tracked tanks in frame.
pub trait CameraRig: Send {
    /// Replace the tracked set.
    fn track(&mut self, targets: &[CombatantId]);
    /// Jump straight to the framing for the current targets, no smoothing.
    fn snap_to_start(&mut self);
}

/// Fire-and-forget request to reset to the initial scene.
pub trait SceneLoader: Send {
    fn reload_initial_scene(&mut self);
}

/// Everything the engine renders through.
pub struct Collaborators {
    pub message: Box<dyn TextDisplay>,
    pub timer: Box<dyn TextDisplay>,
    pub camera: Box<dyn CameraRig>,
    pub scene: Box<dyn SceneLoader>,
}

/// Writes through to the collaborators and remembers the last text shown,
/// so snapshots can report what is on screen.
pub struct Presenter {
    sinks: Collaborators,
    message: String,
    timer: String,
}

impl Presenter {
    pub fn new(sinks: Collaborators) -> Self {
        Self {
            sinks,
            message: String::new(),
            timer: String::new(),
        }
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.message = text.into();
        self.sinks.message.set_text(&self.message);
    }

    pub fn show_timer(&mut self, text: impl Into<String>) {
        self.timer = text.into();
        self.sinks.timer.set_text(&self.timer);
    }

    pub fn track(&mut self, targets: &[CombatantId]) {
        self.sinks.camera.track(targets);
    }

    pub fn snap_camera(&mut self) {
        self.sinks.camera.snap_to_start();
    }

    pub fn reload_scene(&mut self) {
        self.sinks.scene.reload_initial_scene();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timer(&self) -> &str {
        &self.timer
    }
}
