use serde_json::Value;

use crate::error::CycleError;
use crate::verdicts::VerdictTable;

/// Checks that the API answered with an object holding a `homeworks` array and returns it.
pub fn check_response(response: &Value) -> Result<&[Value], CycleError> {
    let object = response.as_object().ok_or_else(|| {
        CycleError::Schema(format!("expected a JSON object, got {}", type_name(response)))
    })?;

    match object.get("homeworks") {
        Some(Value::Array(homeworks)) => Ok(homeworks.as_slice()),
        Some(other) => Err(CycleError::Schema(format!(
            "`homeworks` must be a list, got {}",
            type_name(other)
        ))),
        None => Err(CycleError::Schema("`homeworks` key is missing".to_string())),
    }
}

/// Renders the notification text for one submission.
pub fn parse_status(homework: &Value, verdicts: &VerdictTable) -> Result<String, CycleError> {
    let homework_name = string_field(homework, "homework_name")?;
    let status = string_field(homework, "status")?;
    let verdict = verdicts
        .get(status)
        .ok_or_else(|| CycleError::Field(format!("status \"{}\" has no verdict", status)))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name, verdict
    ))
}

fn string_field<'a>(homework: &'a Value, key: &str) -> Result<&'a str, CycleError> {
    homework
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| CycleError::Field(format!("`{}` is missing or not a string", key)))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
