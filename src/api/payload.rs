//! Decoding of backend chart responses.
//!
//! Absent or `null` fields surface as `ChartError::MissingData`, which the
//! engines turn into an empty chart. Present but malformed fields are real
//! errors and surface as `ChartError::InvalidData`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{AxisSpec, DataPoint, OverviewDatum};
use crate::error::{ChartError, ChartResult};

pub const CHART_DATA_FIELD: &str = "chart-data";
pub const CHART_INFO_FIELD: &str = "chart-info";

const OVERVIEW_RECORD_FIELDS: [&str; 4] = ["key", "submissions", "snapshots", "launches"];

/// Axis titles and units as sent in `chart-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInfo {
    pub x: String,
    pub y: String,
    #[serde(rename = "x-unit", default)]
    pub x_unit: String,
    #[serde(rename = "y-unit", default)]
    pub y_unit: String,
}

impl ChartInfo {
    #[must_use]
    pub fn axis_x(&self) -> AxisSpec {
        AxisSpec::new(self.x.clone(), self.x_unit.clone())
    }

    #[must_use]
    pub fn axis_y(&self) -> AxisSpec {
        AxisSpec::new(self.y.clone(), self.y_unit.clone())
    }
}

/// Decoded scatter chart response.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPayload {
    pub points: Vec<DataPoint>,
    pub info: ChartInfo,
}

impl ScatterPayload {
    pub fn from_value(value: &Value) -> ChartResult<Self> {
        let data = required_field(value, CHART_DATA_FIELD)?;
        let info = required_field(value, CHART_INFO_FIELD)?;

        let points = Vec::<DataPoint>::deserialize(data).map_err(|e| {
            ChartError::InvalidData(format!("malformed `{CHART_DATA_FIELD}`: {e}"))
        })?;
        let info = ChartInfo::deserialize(info).map_err(|e| {
            ChartError::InvalidData(format!("malformed `{CHART_INFO_FIELD}`: {e}"))
        })?;
        Ok(Self { points, info })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Self::from_value(&parse_json(input)?)
    }
}

/// Decoded overview response: one record per entity.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewPayload {
    pub records: Vec<OverviewDatum>,
}

impl OverviewPayload {
    /// Accepts a bare record array or an object wrapping it in `chart-data`.
    pub fn from_value(value: &Value) -> ChartResult<Self> {
        let records = match value {
            Value::Array(records) => records,
            Value::Object(_) => match required_field(value, CHART_DATA_FIELD)? {
                Value::Array(records) => records,
                _ => {
                    return Err(ChartError::InvalidData(format!(
                        "`{CHART_DATA_FIELD}` must be an array"
                    )));
                }
            },
            Value::Null => return Err(ChartError::missing(CHART_DATA_FIELD)),
            _ => {
                return Err(ChartError::InvalidData(
                    "overview payload must be an array or object".to_owned(),
                ));
            }
        };

        let mut decoded = Vec::with_capacity(records.len());
        for record in records {
            for field in OVERVIEW_RECORD_FIELDS {
                required_field(record, field)?;
            }
            let datum = OverviewDatum::deserialize(record)
                .map_err(|e| ChartError::InvalidData(format!("malformed overview record: {e}")))?;
            decoded.push(datum);
        }
        Ok(Self { records: decoded })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Self::from_value(&parse_json(input)?)
    }
}

fn required_field<'a>(value: &'a Value, field: &str) -> ChartResult<&'a Value> {
    match value.get(field) {
        None | Some(Value::Null) => Err(ChartError::missing(field)),
        Some(found) => Ok(found),
    }
}

fn parse_json(input: &str) -> ChartResult<Value> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse chart payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_chart_info_is_missing_data() {
        let err = ScatterPayload::from_value(&json!({"chart-data": [], "chart-info": null}))
            .expect_err("missing");
        assert!(err.is_missing_data());
    }

    #[test]
    fn numeric_keys_are_kept_as_text() {
        let payload = OverviewPayload::from_value(&json!([
            {"key": 7, "submissions": 1, "snapshots": 2, "launches": 3}
        ]))
        .expect("payload");
        assert_eq!(payload.records[0].key.as_str(), "7");
    }

    #[test]
    fn record_without_category_is_missing_data() {
        let err = OverviewPayload::from_value(&json!([{"key": "p", "submissions": 1}]))
            .expect_err("missing");
        assert!(err.is_missing_data());
    }
}
