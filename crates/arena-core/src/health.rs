//! Hit points, shield and invincibility for a single combatant.

use serde::{Deserialize, Serialize};

use crate::constants::{FULL_HEALTH_COLOR, ZERO_HEALTH_COLOR};
use crate::enums::DamageOutcome;
use crate::types::TankColor;

/// Health state of a tank. Dead is terminal until [`Health::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    starting: f32,
    current: f32,
    dead: bool,
    shielded: bool,
    invincible: bool,
}

impl Health {
    pub fn new(starting: f32) -> Self {
        Self {
            starting,
            current: starting,
            dead: false,
            shielded: false,
            invincible: false,
        }
    }

    /// Apply a hit.
    ///
    /// Invincibility is checked first and never consumed. A shield absorbs
    /// the whole hit and is spent. Otherwise health drops with no lower clamp,
    /// and the first time it reaches zero the tank dies.
    pub fn apply_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.invincible {
            return DamageOutcome::Invincible;
        }

        if self.shielded {
            self.shielded = false;
            return DamageOutcome::ShieldAbsorbed;
        }

        self.current -= amount;

        if self.current <= 0.0 && !self.dead {
            self.dead = true;
            return DamageOutcome::Killed;
        }

        DamageOutcome::Damaged
    }

    /// Restore health up to the starting value. Ignored once dead.
    pub fn heal(&mut self, amount: f32) {
        if self.dead {
            return;
        }
        self.current = (self.current + amount).min(self.starting);
    }

    pub fn toggle_shield(&mut self) {
        self.shielded = !self.shielded;
    }

    pub fn toggle_invincibility(&mut self) {
        self.invincible = !self.invincible;
    }

    /// Back to full health with every flag cleared.
    pub fn reset(&mut self) {
        *self = Self::new(self.starting);
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn starting(&self) -> f32 {
        self.starting
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_shielded(&self) -> bool {
        self.shielded
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    /// Current health as a fraction of the starting value.
    pub fn fraction(&self) -> f32 {
        if self.starting <= 0.0 {
            return 0.0;
        }
        self.current / self.starting
    }

    /// Health bar fill color, red at zero through green at full.
    pub fn bar_color(&self) -> TankColor {
        TankColor::lerp(ZERO_HEALTH_COLOR, FULL_HEALTH_COLOR, self.fraction())
    }
}
