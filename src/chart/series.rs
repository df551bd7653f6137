use chrono::Datelike;
use log::debug;
use serde::Serialize;

use super::styles::{ChartStyle, ChartTheme};
use crate::types::{AggregationResult, ClassifiedPoint};
use crate::utils::downsample;

/// A single named series of values aligned with the category axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub name: String,
    pub values: Vec<f64>,
    pub color: String,
}

/// Axis-ready bundle for a stacked included/additional usage chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// One formatted time label per point, in series order
    pub categories: Vec<String>,
    /// Plan-included portion of each point
    pub included: ChartDataset,
    /// Additional (overage) portion of each point
    pub additional: ChartDataset,
    pub total_count: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_count: Option<f64>,
}

/// Assemble a classified series into the flat parallel arrays a chart
/// renderer expects.
///
/// `kind` is the human-readable billed unit ("step", "run", ...) used to
/// build the dataset names. Colors come from the injected theme; dense
/// series are downsampled to the style's point budget first.
pub fn assemble_series(
    result: &AggregationResult,
    kind: &str,
    theme: &ChartTheme,
    style: &ChartStyle,
) -> ChartSeries {
    let points = if style.max_points > 0 && result.series.len() > style.max_points {
        debug!(
            "downsampling {} points to {} for charting",
            result.series.len(),
            style.max_points
        );
        downsample(&result.series, style.max_points)
    } else {
        result.series.clone()
    };

    let categories = category_labels(&points, style.label_divisions);
    let included_values = points.iter().map(|p| p.included_count).collect();
    let additional_values = points.iter().map(|p| p.additional_count).collect();

    ChartSeries {
        categories,
        included: ChartDataset {
            name: format!("Plan-included {}", kind),
            values: included_values,
            color: theme.included_color.clone(),
        },
        additional: ChartDataset {
            name: format!("Additional {}", kind),
            values: additional_values,
            color: theme.additional_color.clone(),
        },
        total_count: result.total_count,
        additional_count: result.additional_count,
    }
}

/// Format one label per point, blanking all but the first, the last and
/// every Nth so labels stay readable on dense series.
pub(super) fn category_labels(points: &[ClassifiedPoint], divisions: usize) -> Vec<String> {
    let len = points.len();
    let step = (len / divisions.max(1)).max(1);

    points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            if idx == 0
                || idx == len - 1
                || (idx % step == 0 && idx > 0 && idx < len - 1)
            {
                ordinal_day(point.time.day())
            } else {
                String::new()
            }
        })
        .collect()
}

/// Ordinal day-of-month label: 1 -> "1st", 22 -> "22nd", 13 -> "13th".
pub(super) fn ordinal_day(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}
