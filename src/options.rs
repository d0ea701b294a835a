//! Construction options shared by both source variants.

use serde::{Deserialize, Serialize};

/// Options a source's token set is built with.
///
/// The options are captured at construction time and carried by the
/// source, because joins re-extract the combined text under the same
/// configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    /// Restrict script extraction to exact structural positions: string
    /// literal interiors are not scanned for sub-tokens and adjacent
    /// literals are not combined.
    pub strict: bool,
}
