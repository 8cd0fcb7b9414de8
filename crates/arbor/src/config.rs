//! Configuration types for Arbor layouts.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources. Missing fields fall back to their defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`LayoutConfig`] - Direction, root-stacking mode and spacing.
//! - [`SpacingConfig`] - The three gaps that scale the layout.
//!
//! # Example
//!
//! ```
//! # use arbor::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.layout().stack_roots_vertically());
//! assert_eq!(config.layout().spacing().level_gap(), 150.0);
//! ```

use serde::Deserialize;

use arbor_core::direction::Direction;

/// Default distance between adjacent levels along the primary axis.
pub const DEFAULT_LEVEL_GAP: f64 = 150.0;

/// Default distance between same-level siblings along the secondary axis.
pub const DEFAULT_SIBLING_GAP: f64 = 200.0;

/// Default distance between stacked root subtrees along the primary axis.
pub const DEFAULT_GROUP_GAP: f64 = 180.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Consumes the configuration, returning the layout section.
    pub fn into_layout(self) -> LayoutConfig {
        self.layout
    }
}

/// Per-call layout options.
///
/// The subset of [`LayoutConfig`] a caller picks per view; spacing stays at
/// the configured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Which way the tree grows.
    pub direction: Direction,

    /// `true` stacks root subtrees in separate bands, `false` lets all
    /// roots share level rows.
    pub stack_roots_vertically: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            stack_roots_vertically: true,
        }
    }
}

/// Layout configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    direction: Direction,
    stack_roots_vertically: bool,
    spacing: SpacingConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            stack_roots_vertically: true,
            spacing: SpacingConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Creates a layout configuration from per-call options and default spacing.
    pub fn from_options(options: LayoutOptions) -> Self {
        Self::default()
            .with_direction(options.direction)
            .with_stack_roots_vertically(options.stack_roots_vertically)
    }

    /// Sets the layout direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Selects stacked (`true`) or shared-level (`false`) root placement
    pub fn with_stack_roots_vertically(mut self, stack: bool) -> Self {
        self.stack_roots_vertically = stack;
        self
    }

    /// Sets the spacing
    pub fn with_spacing(mut self, spacing: SpacingConfig) -> Self {
        self.spacing = spacing;
        self
    }

    /// Returns the layout direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` when root subtrees are stacked in separate bands.
    pub fn stack_roots_vertically(&self) -> bool {
        self.stack_roots_vertically
    }

    /// Returns the spacing configuration.
    pub fn spacing(&self) -> &SpacingConfig {
        &self.spacing
    }

    /// Returns the per-call options carried by this configuration.
    pub fn options(&self) -> LayoutOptions {
        LayoutOptions {
            direction: self.direction,
            stack_roots_vertically: self.stack_roots_vertically,
        }
    }

    /// Checks that every gap is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending gap.
    pub fn validate(&self) -> Result<(), String> {
        let gaps = [
            ("level_gap", self.spacing.level_gap),
            ("sibling_gap", self.spacing.sibling_gap),
            ("group_gap", self.spacing.group_gap),
        ];

        for (name, value) in gaps {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "Invalid {name} in config: expected a finite, non-negative number, got {value}"
                ));
            }
        }

        Ok(())
    }
}

/// The gaps that scale a layout.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpacingConfig {
    level_gap: f64,
    sibling_gap: f64,
    group_gap: f64,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            level_gap: DEFAULT_LEVEL_GAP,
            sibling_gap: DEFAULT_SIBLING_GAP,
            group_gap: DEFAULT_GROUP_GAP,
        }
    }
}

impl SpacingConfig {
    /// Creates a new [`SpacingConfig`].
    ///
    /// # Arguments
    ///
    /// * `level_gap` - Distance between adjacent levels (primary axis).
    /// * `sibling_gap` - Distance between same-level siblings (secondary axis).
    /// * `group_gap` - Distance between stacked root subtrees (primary axis).
    pub fn new(level_gap: f64, sibling_gap: f64, group_gap: f64) -> Self {
        Self {
            level_gap,
            sibling_gap,
            group_gap,
        }
    }

    /// Returns the distance between adjacent levels.
    pub fn level_gap(&self) -> f64 {
        self.level_gap
    }

    /// Returns the distance between same-level siblings.
    pub fn sibling_gap(&self) -> f64 {
        self.sibling_gap
    }

    /// Returns the distance between stacked root subtrees.
    pub fn group_gap(&self) -> f64 {
        self.group_gap
    }
}
