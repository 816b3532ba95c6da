use serde::Serialize;

pub(crate) mod contribution_controller;
pub(crate) mod event_controller;
pub(crate) mod health_check_controller;
pub(crate) mod organizer_controller;
pub(crate) mod person_controller;
pub(crate) mod production_controller;
pub(crate) mod role_controller;
pub(crate) mod transaction_controller;
pub(crate) mod user_controller;
pub(crate) mod user_session_controller;
pub(crate) mod venue_controller;

/// The generic response envelope every endpoint returns, success or failure.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    success: bool,
    message: String,
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            error_code: None,
            data: Some(data),
        }
    }

    pub fn message_only(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: true,
            message: message.into(),
            error_code: None,
            data: None,
        }
    }

    pub fn error(message: impl Into<String>, error_code: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message: message.into(),
            error_code: Some(error_code.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_serialize_api_response_with_data() {
        let response = ApiResponse::ok("venue found", 23);
        let serialized = serde_json::to_string(&response).unwrap();

        // Serializing and then deserializing because the string output from serde_json::to_string is
        // non-deterministic as far as the order of the JSON keys. This ensures the test won't be flaky
        let deserialized_value: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        let deserialized_expected_value: serde_json::Value =
            json!({"success": true, "message": "venue found", "data": 23});
        assert_eq!(deserialized_value, deserialized_expected_value);
    }

    #[tokio::test]
    async fn test_serialize_api_response_message_only() {
        let response = ApiResponse::<()>::message_only("You have successfully claimed this place!");
        let serialized = serde_json::to_string(&response).unwrap();

        let deserialized_value: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        let deserialized_expected_value: serde_json::Value =
            json!({"success": true, "message": "You have successfully claimed this place!"});
        assert_eq!(deserialized_value, deserialized_expected_value);
    }

    #[tokio::test]
    async fn test_serialize_api_response_error_includes_error_code() {
        let response = ApiResponse::<()>::error("already claimed", "AlreadyClaimed");
        let serialized = serde_json::to_string(&response).unwrap();

        let deserialized_value: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        let deserialized_expected_value: serde_json::Value = json!({
            "success": false,
            "message": "already claimed",
            "errorCode": "AlreadyClaimed"
        });
        assert_eq!(deserialized_value, deserialized_expected_value);
    }
}
