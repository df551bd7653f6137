//! # Common Types
//!
//! This module contains the common types used throughout the library for
//! representing raw and classified usage time series and plan limits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A raw usage point as received from the billing query layer.
///
/// Both fields are loosely typed on purpose: upstream responses
/// occasionally carry nulls or malformed timestamps, and those records are
/// dropped or coerced during normalization instead of failing the series.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUsagePoint {
    /// Bucket timestamp, expected to be an ISO-8601 string
    #[serde(default, alias = "timestamp")]
    pub time: Value,
    /// Usage count for the bucket, expected to be a number or null
    #[serde(default)]
    pub value: Value,
}

/// A cleaned usage point ready for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsagePoint {
    /// Validated bucket timestamp
    pub time: DateTime<Utc>,
    /// Non-negative usage count for the bucket
    pub value: f64,
}

/// A usage point with its value split into plan-included and additional
/// (overage) portions.
///
/// `included_count + additional_count` always equals the point's original
/// value, and both portions are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedPoint {
    /// Validated bucket timestamp
    pub time: DateTime<Utc>,
    /// Portion of the value covered by the plan's included allotment
    pub included_count: f64,
    /// Portion of the value exceeding the included allotment
    pub additional_count: f64,
}

/// The result of classifying a whole usage series against a plan limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    /// Classified points in input order
    pub series: Vec<ClassifiedPoint>,
    /// Running cumulative total at the final point
    pub total_count: f64,
    /// Total overage across the series; `None` when the limit is
    /// unbounded, so callers can tell "no overage" from "not applicable"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_count: Option<f64>,
}

/// A plan's included-usage ceiling.
///
/// `Unbounded` reads as positive infinity in classification arithmetic,
/// so comparisons against it always classify usage as included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanLimit {
    /// A finite, non-negative ceiling on cumulative included usage
    Limited(f64),
    /// No ceiling; the plan covers all usage
    Unbounded,
}

impl PlanLimit {
    /// Create a finite limit, rejecting negative or non-finite values.
    pub fn limited(limit: f64) -> Result<Self, LimitError> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(LimitError::InvalidLimit(limit));
        }
        Ok(PlanLimit::Limited(limit))
    }

    /// Create a limit from an optional ceiling, where `None` means the
    /// plan is unbounded.
    pub fn from_option(limit: Option<f64>) -> Result<Self, LimitError> {
        match limit {
            Some(limit) => Self::limited(limit),
            None => Ok(PlanLimit::Unbounded),
        }
    }

    /// The ceiling as a plain number, with `Unbounded` as infinity.
    pub fn as_f64(&self) -> f64 {
        match self {
            PlanLimit::Limited(limit) => *limit,
            PlanLimit::Unbounded => f64::INFINITY,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, PlanLimit::Unbounded)
    }
}

/// Error returned when a plan limit fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LimitError {
    #[error("plan limit must be a non-negative finite number, got {0}")]
    InvalidLimit(f64),
}
