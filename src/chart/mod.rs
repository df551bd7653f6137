pub mod series;
pub mod styles;

pub use series::{assemble_series, ChartDataset, ChartSeries};
pub use styles::{ChartStyle, ChartTheme};
