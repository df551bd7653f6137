use serde::{Deserialize, Serialize};

/// Chart theme configuration
///
/// Colors are CSS hex strings handed through to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub included_color: String,
    pub additional_color: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            included_color: "#2c9b63".to_string(),
            additional_color: "#e7aa29".to_string(),
        }
    }
}

/// Chart layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Point budget before the series is downsampled; 0 disables
    pub max_points: usize,
    /// How many x-axis labels to keep across the series
    pub label_divisions: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            max_points: 500,
            label_divisions: 4,
        }
    }
}
