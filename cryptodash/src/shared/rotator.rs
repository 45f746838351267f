//! Notification rotator: cycles a "Buy X now!" banner through the
//! recommendation list on a fixed period.
//!
//! Two timers live here as deadlines, both evaluated on [`NotificationRotator::tick`]:
//! the rotation deadline and the auto-hide deadline of the visible banner.

use std::time::{Duration, Instant};

use tracing::debug;

use super::types::MarketEntry;

/// Rotator timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatorConfig {
    /// Time between two rotations
    pub period: Duration,
    /// Time a banner stays visible if not dismissed
    pub auto_hide: Duration,
    /// Restart the rotation period when the user dismisses the banner
    pub reset_on_dismiss: bool,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(10),
            auto_hide: Duration::from_secs(3),
            reset_on_dismiss: false,
        }
    }
}

impl RotatorConfig {
    /// Set rotation period
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Set auto-hide delay
    pub fn with_auto_hide(mut self, auto_hide: Duration) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    /// Set dismissal policy
    pub fn with_reset_on_dismiss(mut self, reset: bool) -> Self {
        self.reset_on_dismiss = reset;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorPhase {
    /// No recommendations to cycle through
    Idle,
    /// Showing `index`, next rotation due at `next_rotation`
    Cycling { index: usize, next_rotation: Instant },
}

/// Banner content as displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// Icon URL of the recommended entry
    pub icon: String,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Item {
    message: String,
    icon: String,
}

impl From<&MarketEntry> for Item {
    fn from(entry: &MarketEntry) -> Self {
        Self {
            message: format!("Buy {} now!", entry.name),
            icon: entry.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRotator {
    config: RotatorConfig,
    items: Vec<Item>,
    phase: RotatorPhase,
    visible: Option<Notification>,
}

impl NotificationRotator {
    pub fn new(config: RotatorConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            phase: RotatorPhase::Idle,
            visible: None,
        }
    }

    /// Begin cycling through `recommendations`, showing the first one now.
    ///
    /// An empty list stops the rotator instead.
    pub fn start(&mut self, recommendations: &[MarketEntry], now: Instant) {
        if recommendations.is_empty() {
            self.stop();
            return;
        }

        self.items = recommendations.iter().map(Item::from).collect();
        self.phase = RotatorPhase::Cycling {
            index: 0,
            next_rotation: now + self.config.period,
        };
        self.show(0, now);
        debug!("Notification rotator cycling through {} entries", self.items.len());
    }

    /// Back to Idle; both timers are released.
    pub fn stop(&mut self) {
        self.items.clear();
        self.phase = RotatorPhase::Idle;
        self.visible = None;
    }

    /// Fire any rotation that is due and expire the visible banner.
    pub fn tick(&mut self, now: Instant) {
        if let RotatorPhase::Cycling {
            mut index,
            mut next_rotation,
        } = self.phase
        {
            if !self.config.period.is_zero() {
                let mut rotated_at = None;
                while now >= next_rotation {
                    index = (index + 1) % self.items.len();
                    rotated_at = Some(next_rotation);
                    next_rotation += self.config.period;
                }

                if let Some(at) = rotated_at {
                    self.phase = RotatorPhase::Cycling {
                        index,
                        next_rotation,
                    };
                    self.show(index, at);
                }
            }
        }

        if let Some(notification) = &self.visible {
            if now >= notification.shown_at + self.config.auto_hide {
                self.visible = None;
            }
        }
    }

    /// Hide the visible banner. The rotation keeps going unless the
    /// config asks for the period to restart.
    pub fn dismiss(&mut self, now: Instant) {
        self.visible = None;

        if self.config.reset_on_dismiss {
            if let RotatorPhase::Cycling { index, .. } = self.phase {
                self.phase = RotatorPhase::Cycling {
                    index,
                    next_rotation: now + self.config.period,
                };
            }
        }
    }

    pub fn phase(&self) -> RotatorPhase {
        self.phase
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            RotatorPhase::Idle => None,
            RotatorPhase::Cycling { index, .. } => Some(index),
        }
    }

    pub fn visible(&self) -> Option<&Notification> {
        self.visible.as_ref()
    }

    pub fn config(&self) -> &RotatorConfig {
        &self.config
    }

    fn show(&mut self, index: usize, at: Instant) {
        if let Some(item) = self.items.get(index) {
            self.visible = Some(Notification {
                message: item.message.clone(),
                icon: item.icon.clone(),
                shown_at: at,
            });
        }
    }
}

impl Default for NotificationRotator {
    fn default() -> Self {
        Self::new(RotatorConfig::default())
    }
}
