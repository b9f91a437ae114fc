//! Collaborators for the headless host: everything goes to the log.

use tracing::{debug, info};

use arena_core::enums::CombatantId;
use arena_sim::sinks::{CameraRig, SceneLoader, TextDisplay};

/// A text display that logs every change under its own name.
pub struct LogDisplay {
    name: &'static str,
    quiet: bool,
}

impl LogDisplay {
    pub fn new(name: &'static str) -> Self {
        Self { name, quiet: false }
    }

    /// Log at debug level. Used for the timer, which changes every tick.
    pub fn quiet(name: &'static str) -> Self {
        Self { name, quiet: true }
    }
}

impl TextDisplay for LogDisplay {
    fn set_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.quiet {
            debug!(display = self.name, text, "Display updated");
        } else {
            info!(display = self.name, text, "Display updated");
        }
    }
}

#[derive(Default)]
pub struct LogCamera {
    targets: Vec<CombatantId>,
}

impl CameraRig for LogCamera {
    fn track(&mut self, targets: &[CombatantId]) {
        self.targets = targets.to_vec();
        debug!(targets = ?self.targets, "Camera tracking");
    }

    fn snap_to_start(&mut self) {
        debug!(targets = self.targets.len(), "Camera snapped");
    }
}

/// Counts reload requests. The engine rebuilds its own world.
#[derive(Default)]
pub struct LogSceneLoader {
    pub reloads: u32,
}

impl SceneLoader for LogSceneLoader {
    fn reload_initial_scene(&mut self) {
        self.reloads += 1;
        info!(reloads = self.reloads, "Initial scene reload requested");
    }
}
