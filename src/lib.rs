//! # Billable Usage Aggregation Library
//!
//! `usagestats` is a library for reshaping billable-usage time series
//! into chart-ready series data. It takes the loosely-typed usage points
//! a billing API returns, classifies each point's value into
//! plan-included and additional (overage) portions against a plan limit,
//! and assembles the result into the parallel category/value arrays a
//! chart renderer consumes.
//!
//! ## Features
//!
//! - Lenient normalization of raw time-series points: malformed
//!   timestamps are dropped, null values coerce to zero
//! - Single-pass cumulative split of usage into included vs additional,
//!   including points that straddle the limit boundary
//! - Chart series assembly with ordinal day labels, injected theme
//!   colors and summary totals
//! - Downsampling of dense series to a configurable point budget
//! - A `Lazy` wrapper distinguishing "not loaded yet" from loaded nulls
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use usagestats::chart::{ChartStyle, ChartTheme};
//! use usagestats::{aggregate_usage, assemble_series, PlanLimit, UsagePoint};
//!
//! let points: Vec<UsagePoint> = (1..=3u32)
//!     .map(|day| UsagePoint {
//!         time: Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
//!         value: 5.0,
//!     })
//!     .collect();
//!
//! let limit = PlanLimit::limited(7.0).unwrap();
//! let result = aggregate_usage(&points, limit);
//! assert_eq!(result.total_count, 15.0);
//! assert_eq!(result.additional_count, Some(8.0));
//!
//! let chart = assemble_series(&result, "steps", &ChartTheme::default(), &ChartStyle::default());
//! assert_eq!(chart.included.name, "Plan-included steps");
//! assert_eq!(chart.included.values, vec![5.0, 2.0, 0.0]);
//! ```

pub mod analysis;
pub mod chart;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use analysis::{aggregate_usage, normalize_points, normalize_values};
pub use chart::{assemble_series, ChartSeries};
pub use types::{
    AggregationResult, ClassifiedPoint, LimitError, PlanLimit, RawUsagePoint, UsagePoint,
};
pub use utils::Lazy;
