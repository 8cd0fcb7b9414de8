//! Arbor - A hierarchy layout engine for domain trees.
//!
//! Turns a flat list of parent-linked domain records into 2D node
//! positions and parent to child edges. Every root subtree is laid out
//! breadth-first with parents centered over their children; independent
//! roots are either stacked in label order or share level rows.

pub mod config;
pub mod input;
pub mod layout;
pub mod structure;

mod error;

pub use arbor_core::{direction, geometry, identifier, record};

pub use error::ArborError;

use log::{debug, info, trace, warn};

use config::{AppConfig, LayoutConfig, LayoutOptions};
use input::DomainSource;
use layout::{Engine, Layout};
use record::DomainRecord;
use structure::Forest;

/// Builder for decoding domain records and laying them out.
///
/// # Examples
///
/// ```rust
/// use arbor::{LayoutBuilder, config::AppConfig};
///
/// let source = r#"[
///     {"uniqueId": 1, "label": "Finance"},
///     {"uniqueId": -2, "parentId": 1, "label": "Ledger"}
/// ]"#;
///
/// let builder = LayoutBuilder::new(AppConfig::default());
///
/// let records = builder.parse_records(source)
///     .expect("Failed to parse");
///
/// let layout = builder.compute(&records);
/// assert_eq!(layout.len(), 2);
/// assert_eq!(layout.edges().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including direction, root
    ///   placement mode and spacing
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the layout configuration in use.
    pub fn layout_config(&self) -> &LayoutConfig {
        self.config.layout()
    }

    /// Decode a JSON array of flat records.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Decode`] if `source` is not a valid record array.
    pub fn parse_records(&self, source: &str) -> Result<Vec<DomainRecord>, ArborError> {
        info!("Parsing records");

        let records = input::parse_records(source)?;

        debug!(records = records.len(); "Records parsed successfully");
        Ok(records)
    }

    /// Decode a JSON array of nested domains and flatten it into records.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Decode`] if `source` is not a valid domain array.
    pub fn parse_domains(&self, source: &str) -> Result<Vec<DomainRecord>, ArborError> {
        info!("Parsing nested domains");

        let domains: Vec<DomainSource> = input::parse_domains(source)?;
        let records = input::flatten_domains(&domains);

        debug!(domains = domains.len(), records = records.len(); "Domains flattened");
        Ok(records)
    }

    /// Build the forest for `records` and lay it out.
    ///
    /// Never fails. Unresolved parents and repeated ids are logged and
    /// resolved as described on [`Forest::from_records`].
    pub fn compute(&self, records: &[DomainRecord]) -> Layout {
        let forest = Forest::from_records(records);
        self.compute_forest(&forest)
    }

    /// Lay out an already built forest.
    pub fn compute_forest(&self, forest: &Forest) -> Layout {
        let config = self.config.layout();

        info!(
            nodes = forest.len(),
            roots = forest.roots().len(),
            direction:% = config.direction(),
            stacked = config.stack_roots_vertically();
            "Computing layout",
        );

        for dangling in forest.dangling() {
            warn!(
                child = dangling.child().get(),
                parent = dangling.parent().get();
                "Parent not found, treating node as a root",
            );
        }

        for id in forest.duplicates() {
            warn!(id = id.get(); "Duplicate node id, keeping the last record");
        }

        let layout = Engine::new(config).calculate(forest);

        if layout.len() < forest.len() {
            warn!(
                unreachable = forest.len() - layout.len();
                "Nodes not reachable from any root were left out",
            );
        }

        debug!(positions = layout.len(), edges = layout.edges().len(); "Layout calculated");
        trace!(layout:?; "Calculated layout");

        layout
    }
}

/// Lays out `records` with default spacing and the given options.
///
/// # Examples
///
/// ```
/// use arbor::{compute_layout, config::LayoutOptions};
/// use arbor::{geometry::Point, identifier::NodeId, record::DomainRecord};
///
/// let records = vec![DomainRecord::new(NodeId::new(1), "Root")];
///
/// let layout = compute_layout(&records, &LayoutOptions::default());
///
/// assert_eq!(layout.position(NodeId::new(1)), Some(Point::new(0.0, 0.0)));
/// assert!(layout.edges().is_empty());
/// ```
pub fn compute_layout(records: &[DomainRecord], options: &LayoutOptions) -> Layout {
    let config = AppConfig::new(LayoutConfig::from_options(*options));
    LayoutBuilder::new(config).compute(records)
}
