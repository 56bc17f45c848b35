pub mod compat;
pub mod config;
pub mod health;
pub mod suggest;

use serde::Serialize;
use serde_json::Value;
use wardrobe_core::config::{AppConfig, LoadOptions};
use wardrobe_core::ApplicationError;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>, data: Option<Value>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Succeeds with `data` as the payload, or fails with the `serialization`
    /// class when `data` cannot be turned into JSON.
    pub fn success_with(command: &str, message: impl Into<String>, data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self::success(command, message, Some(value)),
            Err(error) => Self::failure(
                command,
                "serialization",
                format!("failed to serialize {command} payload: {error}"),
                5,
            ),
        }
    }

    pub fn from_error(command: &str, error: &ApplicationError) -> Self {
        Self::failure(command, error.error_class(), error.to_string(), exit_code_for(error))
    }
}

fn exit_code_for(error: &ApplicationError) -> u8 {
    match error {
        ApplicationError::Configuration(_) => 2,
        ApplicationError::Intake(_) => 3,
        ApplicationError::Domain(_) => 4,
    }
}

pub(crate) fn load_config() -> Result<AppConfig, ApplicationError> {
    AppConfig::load(LoadOptions::default())
        .map_err(|error| ApplicationError::Configuration(error.to_string()))
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

#[cfg(test)]
mod tests {
    use serde::ser::Error as _;
    use serde::{Serialize, Serializer};
    use serde_json::Value;

    use super::CommandResult;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("not representable"))
        }
    }

    #[test]
    fn unserializable_data_is_reported_as_a_failure() {
        let result = CommandResult::success_with("suggest", "picked", Unserializable);
        assert_eq!(result.exit_code, 5);

        let payload: Value = serde_json::from_str(&result.output).expect("valid JSON");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "serialization");
        assert!(payload["message"].as_str().unwrap_or_default().contains("not representable"));
        assert!(payload.get("data").is_none());
    }

    #[test]
    fn serializable_data_lands_in_the_payload() {
        let result = CommandResult::success_with("health", "all worn", Vec::<u8>::new());
        assert_eq!(result.exit_code, 0);

        let payload: Value = serde_json::from_str(&result.output).expect("valid JSON");
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["data"], Value::Array(Vec::new()));
    }
}
