//! Status interpretation
//!
//! Turns a single homework record into the notification text.

use serde_json::{Map, Value};

use crate::domain::verdict::VerdictTable;
use crate::error::{Result, ShapeError};

pub const NAME_FIELD: &str = "homework_name";
pub const STATUS_FIELD: &str = "status";

/// Builds the status change message for a homework record
///
/// Fails with [`ShapeError::MissingField`] naming the first absent field, or
/// [`ShapeError::UnknownStatus`] if the status is not in `verdicts`.
pub fn parse_status(homework: &Value, verdicts: &VerdictTable) -> Result<String> {
    let record = homework
        .as_object()
        .ok_or(ShapeError::NotAMapping("homework record"))?;

    let name = string_field(record, NAME_FIELD)?;
    let status = string_field(record, STATUS_FIELD)?;

    let verdict = verdicts
        .verdict(status)
        .ok_or_else(|| ShapeError::UnknownStatus(status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

pub(crate) fn string_field<'a>(
    record: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str> {
    match record.get(field) {
        None => Err(ShapeError::MissingField(field)),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(ShapeError::WrongShape {
            key: field,
            expected: "a string",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_status_approved() {
        let homework = json!({"homework_name": "proj1", "status": "approved"});
        let message = parse_status(&homework, &VerdictTable::default()).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"proj1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_parse_status_missing_status() {
        let homework = json!({"homework_name": "proj1"});
        let err = parse_status(&homework, &VerdictTable::default()).unwrap_err();
        assert_eq!(err, ShapeError::MissingField("status"));
        assert!(err.is_missing());
    }

    #[test]
    fn test_parse_status_missing_name() {
        let homework = json!({"status": "approved"});
        let err = parse_status(&homework, &VerdictTable::default()).unwrap_err();
        assert_eq!(err, ShapeError::MissingField("homework_name"));
    }

    #[test]
    fn test_parse_status_unknown_code() {
        let homework = json!({"homework_name": "proj1", "status": "unknown_code"});
        let err = parse_status(&homework, &VerdictTable::default()).unwrap_err();
        assert_eq!(err, ShapeError::UnknownStatus("unknown_code".to_string()));
        assert!(err.to_string().contains("unknown_code"));
    }

    #[test]
    fn test_parse_status_non_string_status() {
        let homework = json!({"homework_name": "proj1", "status": 3});
        let err = parse_status(&homework, &VerdictTable::default()).unwrap_err();
        assert!(matches!(err, ShapeError::WrongShape { key: "status", .. }));
    }

    #[test]
    fn test_parse_status_uses_custom_table() {
        let table = VerdictTable::new([("approved", "ok")]);
        let homework = json!({"homework_name": "x", "status": "approved"});
        assert_eq!(
            parse_status(&homework, &table).unwrap(),
            "Изменился статус проверки работы \"x\". ok"
        );
    }
}
