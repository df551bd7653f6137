use crate::types::{AggregationResult, ClassifiedPoint, PlanLimit, UsagePoint};

/// Classify each point's usage into plan-included and additional portions.
///
/// Walks the series once with a running cumulative total. While the total
/// stays at or under the limit a point's whole value is included; once it
/// crosses, the part of the value above the limit is additional. A point
/// whose value straddles the boundary is split across both buckets.
pub fn aggregate_usage(points: &[UsagePoint], limit: PlanLimit) -> AggregationResult {
    let ceiling = limit.as_f64();
    let mut cumulative = 0.0;
    let mut series = Vec::with_capacity(points.len());

    for point in points {
        cumulative += point.value;
        let (included, additional) = if cumulative <= ceiling {
            (point.value, 0.0)
        } else {
            let additional = point.value.min(cumulative - ceiling);
            ((point.value - additional).max(0.0), additional)
        };
        series.push(ClassifiedPoint {
            time: point.time,
            included_count: included,
            additional_count: additional,
        });
    }

    // Series-level overage comes from the final total, not a per-point sum
    let additional_count = match limit {
        PlanLimit::Limited(limit) => Some((cumulative - limit).max(0.0)),
        PlanLimit::Unbounded => None,
    };

    AggregationResult {
        series,
        total_count: cumulative,
        additional_count,
    }
}
