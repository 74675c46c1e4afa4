use serde::Serialize;

/// One sample of a synthetic chart series.
///
/// Serializes to the `{time, value, value2?, value3?}` record the chart layer
/// consumes; absent auxiliary values are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeriesPoint {
    pub time: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value3: Option<f64>,
}

impl ChartSeriesPoint {
    pub fn new(time: impl Into<String>, value: f64) -> Self {
        Self {
            time: time.into(),
            value,
            value2: None,
            value3: None,
        }
    }

    pub fn with_value2(mut self, value2: f64) -> Self {
        self.value2 = Some(value2);
        self
    }

    pub fn with_value3(mut self, value3: f64) -> Self {
        self.value3 = Some(value3);
        self
    }
}

/// Which value column of a series to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Primary,
    Secondary,
    Tertiary,
}

/// Category axis labels of a series.
pub fn labels(points: &[ChartSeriesPoint]) -> Vec<String> {
    points.iter().map(|p| p.time.clone()).collect()
}

/// Values of one column; missing auxiliary values read as 0.
pub fn column(points: &[ChartSeriesPoint], column: Column) -> Vec<f64> {
    points
        .iter()
        .map(|p| match column {
            Column::Primary => p.value,
            Column::Secondary => p.value2.unwrap_or(0.0),
            Column::Tertiary => p.value3.unwrap_or(0.0),
        })
        .collect()
}

/// Rounds every value to two decimals for display.
pub fn rounded(values: Vec<f64>) -> Vec<f64> {
    values.into_iter().map(|v| (v * 100.0).round() / 100.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_values_are_omitted_from_record() {
        let point = ChartSeriesPoint::new("00:00", 1.5);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json, serde_json::json!({ "time": "00:00", "value": 1.5 }));

        let point = point.with_value2(2.0).with_value3(3.0);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["value2"], 2.0);
        assert_eq!(json["value3"], 3.0);
    }

    #[test]
    fn test_column_extraction() {
        let points = vec![
            ChartSeriesPoint::new("00:00", 1.0).with_value2(10.0),
            ChartSeriesPoint::new("01:00", 2.0),
        ];
        assert_eq!(labels(&points), vec!["00:00", "01:00"]);
        assert_eq!(column(&points, Column::Primary), vec![1.0, 2.0]);
        assert_eq!(column(&points, Column::Secondary), vec![10.0, 0.0]);
        assert_eq!(column(&points, Column::Tertiary), vec![0.0, 0.0]);
    }

    #[test]
    fn test_rounded() {
        assert_eq!(rounded(vec![1.234_56, 0.005]), vec![1.23, 0.01]);
    }
}
