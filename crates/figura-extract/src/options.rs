//! Extraction options.

use serde::{Deserialize, Serialize};

/// Options controlling extraction.
///
/// Defaults: `null` numeric and variant defaults, input conventions keyed
/// on the raw node name, and a 10% hover darkening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    /// Amount the synthesized hover background is darkened by, in `[0, 1]`.
    pub hover_darken_factor: f64,
    /// Surface numeric values and variant selections as property defaults
    /// instead of `null`.
    pub typed_defaults: bool,
    /// Inject conventional properties from the classified category rather
    /// than from keywords in the raw node name.
    pub conventions_follow_category: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            hover_darken_factor: 0.1,
            typed_defaults: false,
            conventions_follow_category: false,
        }
    }
}
