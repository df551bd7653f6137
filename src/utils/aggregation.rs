use crate::types::ClassifiedPoint;

/// Reduce a classified series to at most `target_points` buckets, summing
/// both portions per chunk so chart totals are unchanged
pub fn downsample(points: &[ClassifiedPoint], target_points: usize) -> Vec<ClassifiedPoint> {
    if points.len() <= target_points {
        return points.to_vec();
    }

    let window_size = (points.len() as f64 / target_points as f64).ceil() as usize;
    let mut reduced = Vec::new();

    for chunk in points.chunks(window_size) {
        let time = chunk[0].time; // Use first timestamp in chunk
        let included_count: f64 = chunk.iter().map(|p| p.included_count).sum();
        let additional_count: f64 = chunk.iter().map(|p| p.additional_count).sum();
        reduced.push(ClassifiedPoint {
            time,
            included_count,
            additional_count,
        });
    }

    reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn day(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap()
    }

    fn point(d: u32, included: f64, additional: f64) -> ClassifiedPoint {
        ClassifiedPoint {
            time: day(d),
            included_count: included,
            additional_count: additional,
        }
    }

    #[test]
    fn test_no_downsampling_needed() {
        let data = vec![point(1, 10.0, 5.0), point(2, 20.0, 10.0)];
        let target_points = 5;

        let result = downsample(&data, target_points);
        assert_eq!(result, data);
    }

    #[test]
    fn test_basic_downsampling() {
        let data = vec![
            point(1, 10.0, 5.0),
            point(2, 20.0, 10.0),
            point(3, 30.0, 15.0),
            point(4, 40.0, 20.0),
        ];
        let target_points = 2;

        let result = downsample(&data, target_points);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], point(1, 30.0, 15.0));
        assert_eq!(result[1], point(3, 70.0, 35.0));
    }

    #[test]
    fn test_empty_data() {
        let data: Vec<ClassifiedPoint> = vec![];
        let target_points = 5;

        let result = downsample(&data, target_points);
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_point() {
        let data = vec![point(1, 10.0, 5.0)];
        let target_points = 5;

        let result = downsample(&data, target_points);
        assert_eq!(result, data);
    }

    #[test]
    fn test_uneven_chunks() {
        let data = vec![
            point(1, 10.0, 5.0),
            point(2, 20.0, 10.0),
            point(3, 30.0, 15.0),
            point(4, 40.0, 20.0),
            point(5, 50.0, 25.0),
        ];
        let target_points = 2;

        let result = downsample(&data, target_points);
        // With 5 points and a target of 2, the window size is 3 (ceil(5/2)),
        // giving two chunks: [0,1,2] and [3,4]
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], point(1, 60.0, 30.0)); // Sum of first 3 points
        assert_eq!(result[1], point(4, 90.0, 45.0)); // Sum of last 2 points
    }

    #[test]
    fn test_sums_preserved() {
        let data: Vec<ClassifiedPoint> =
            (1..=30u32).map(|d| point(d, d as f64, 1.0)).collect();
        let result = downsample(&data, 7);

        let included: f64 = result.iter().map(|p| p.included_count).sum();
        let additional: f64 = result.iter().map(|p| p.additional_count).sum();
        assert_eq!(included, (1..=30u32).map(f64::from).sum::<f64>());
        assert_eq!(additional, 30.0);
    }
}
