//! Request DTOs for the API.
//!
//! Entity bodies deserialize straight into the model draft and patch
//! types; only the action endpoints need their own shapes.

use serde::Deserialize;

use planner_models::NewScheduleEntry;

/// Bulk replace request for the weekly grid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkCreateRequest {
    /// New grid contents; a missing key means an empty grid.
    #[serde(default)]
    pub schedules: Vec<NewScheduleEntry>,
}

/// Move hours request.
///
/// Every field is optional here so that absent and zero values can both be
/// reported as missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskRequest {
    pub task_id: Option<i64>,
    pub old_day: Option<String>,
    pub new_day: Option<String>,
    pub new_hours: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_request_defaults_to_empty() {
        let req: BulkCreateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.schedules.is_empty());
    }

    #[test]
    fn test_move_request_camel_case() {
        let req: MoveTaskRequest = serde_json::from_str(
            r#"{"taskId": 3, "oldDay": "Monday", "newDay": "Salı", "newHours": 1.5}"#,
        )
        .unwrap();
        assert_eq!(req.task_id, Some(3));
        assert_eq!(req.old_day.as_deref(), Some("Monday"));
        assert_eq!(req.new_hours, Some(1.5));
    }
}
