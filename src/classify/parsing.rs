//! Verdict extraction from raw completion text.
//!
//! The model is instructed to reply with bare JSON but may wrap it in
//! code fences anyway. Parsing is all-or-nothing: fence stripping, a
//! single-object JSON parse, then exact validation of every field.
//! Out-of-enum values fail validation rather than being coerced, and
//! every [`ParseError`] carries the raw text for diagnostics.

use crate::error::ParseError;

use super::types::{ClassificationVerdict, Safety, Severity};

/// Strip surrounding triple-backtick fences, with an optional language tag.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    let inner = inner.trim_start();
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.trim()
}

/// Parse and validate raw completion text into a [`ClassificationVerdict`].
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not a single JSON object, if any
/// of the five required fields is absent or mistyped, or if `safety` /
/// `severity` fall outside their literal value sets.
pub fn parse_verdict(raw: &str) -> Result<ClassificationVerdict, ParseError> {
    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value =
        serde_json::from_str(cleaned).map_err(|e| ParseError::NotJson {
            message: e.to_string(),
            raw: raw.to_string(),
        })?;

    if !value.is_object() {
        return Err(ParseError::NotJson {
            message: "expected a JSON object".to_string(),
            raw: raw.to_string(),
        });
    }

    let item = get_str(&value, "item", raw)?;

    let safety = match get_str(&value, "safety", raw)?.as_str() {
        "safe" => Safety::Safe,
        "unsafe" => Safety::Unsafe,
        "caution" => Safety::Caution,
        other => {
            return Err(ParseError::InvalidValue {
                field: "safety".to_string(),
                reason: format!("must be safe, unsafe, or caution, got {other}"),
                raw: raw.to_string(),
            })
        }
    };

    let reason = get_str(&value, "reason", raw)?;
    if reason.is_empty() {
        return Err(ParseError::InvalidValue {
            field: "reason".to_string(),
            reason: "must not be empty".to_string(),
            raw: raw.to_string(),
        });
    }

    let alternatives = get_str_array(&value, "alternatives", raw)?;

    let severity = match get_str(&value, "severity", raw)?.as_str() {
        "low" => Severity::Low,
        "medium" => Severity::Medium,
        "high" => Severity::High,
        other => {
            return Err(ParseError::InvalidValue {
                field: "severity".to_string(),
                reason: format!("must be low, medium, or high, got {other}"),
                raw: raw.to_string(),
            })
        }
    };

    Ok(ClassificationVerdict {
        item,
        safety,
        reason,
        alternatives,
        severity,
    })
}

fn get_str(value: &serde_json::Value, field: &str, raw: &str) -> Result<String, ParseError> {
    let field_value = value.get(field).ok_or_else(|| ParseError::MissingField {
        field: field.to_string(),
        raw: raw.to_string(),
    })?;
    field_value
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| ParseError::InvalidValue {
            field: field.to_string(),
            reason: "expected a string".to_string(),
            raw: raw.to_string(),
        })
}

fn get_str_array(
    value: &serde_json::Value,
    field: &str,
    raw: &str,
) -> Result<Vec<String>, ParseError> {
    let arr = value
        .get(field)
        .ok_or_else(|| ParseError::MissingField {
            field: field.to_string(),
            raw: raw.to_string(),
        })?
        .as_array()
        .ok_or_else(|| ParseError::InvalidValue {
            field: field.to_string(),
            reason: "expected an array".to_string(),
            raw: raw.to_string(),
        })?;

    arr.iter()
        .map(|v| {
            v.as_str()
                .map(ToString::to_string)
                .ok_or_else(|| ParseError::InvalidValue {
                    field: field.to_string(),
                    reason: "expected an array of strings".to_string(),
                    raw: raw.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VALID: &str = r#"{"item":"Fava Beans","safety":"unsafe","reason":"Contains compounds that trigger hemolysis","alternatives":["kidney beans","chickpeas"],"severity":"high"}"#;

    #[test]
    fn test_parse_valid_verdict() {
        let verdict = parse_verdict(VALID).unwrap();
        assert_eq!(verdict.item, "Fava Beans");
        assert_eq!(verdict.safety, Safety::Unsafe);
        assert_eq!(verdict.reason, "Contains compounds that trigger hemolysis");
        assert_eq!(verdict.alternatives, vec!["kidney beans", "chickpeas"]);
        assert_eq!(verdict.severity, Severity::High);
    }

    #[test]
    fn test_parse_fenced_equals_bare() {
        let fenced = format!("```json\n{VALID}\n```");
        assert_eq!(parse_verdict(&fenced).unwrap(), parse_verdict(VALID).unwrap());
    }

    #[test]
    fn test_parse_fence_without_language_tag() {
        let fenced = format!("```\n{VALID}\n```");
        assert_eq!(parse_verdict(&fenced).unwrap(), parse_verdict(VALID).unwrap());
    }

    #[test]
    fn test_parse_fence_without_newline() {
        let fenced = format!("```json{VALID}```");
        assert_eq!(parse_verdict(&fenced).unwrap(), parse_verdict(VALID).unwrap());
    }

    #[test]
    fn test_parse_empty_alternatives() {
        let raw = r#"{"item":"rice","safety":"safe","reason":"No known G6PD concern","alternatives":[],"severity":"low"}"#;
        let verdict = parse_verdict(raw).unwrap();
        assert!(verdict.alternatives.is_empty());
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_verdict("I cannot help with that.").unwrap_err();
        assert!(matches!(err, ParseError::NotJson { .. }));
        assert_eq!(err.raw_text(), "I cannot help with that.");
    }

    #[test]
    fn test_parse_json_array_rejected() {
        let err = parse_verdict("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ParseError::NotJson { .. }));
    }

    #[test]
    fn test_parse_missing_field() {
        let raw = r#"{"item":"aspirin","safety":"caution","reason":"dose dependent","severity":"medium"}"#;
        let err = parse_verdict(raw).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField { ref field, .. } if field == "alternatives"
        ));
    }

    #[test]
    fn test_parse_out_of_enum_safety() {
        let raw = r#"{"item":"aspirin","safety":"unsure","reason":"?","alternatives":[],"severity":"medium"}"#;
        let err = parse_verdict(raw).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { ref field, .. } if field == "safety"
        ));
    }

    #[test]
    fn test_parse_case_sensitive_enums() {
        // No case-insensitive matching: "Safe" is a validation failure
        let raw = r#"{"item":"rice","safety":"Safe","reason":"fine","alternatives":[],"severity":"low"}"#;
        assert!(parse_verdict(raw).is_err());
    }

    #[test]
    fn test_parse_out_of_enum_severity() {
        let raw = r#"{"item":"rice","safety":"safe","reason":"fine","alternatives":[],"severity":"critical"}"#;
        let err = parse_verdict(raw).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { ref field, .. } if field == "severity"
        ));
    }

    #[test]
    fn test_parse_empty_reason_rejected() {
        let raw = r#"{"item":"rice","safety":"safe","reason":"","alternatives":[],"severity":"low"}"#;
        let err = parse_verdict(raw).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { ref field, .. } if field == "reason"
        ));
    }

    #[test]
    fn test_parse_non_string_alternative() {
        let raw = r#"{"item":"rice","safety":"safe","reason":"fine","alternatives":["ok", 42],"severity":"low"}"#;
        let err = parse_verdict(raw).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { ref field, .. } if field == "alternatives"
        ));
    }

    #[test]
    fn test_parse_non_string_item() {
        let raw = r#"{"item":7,"safety":"safe","reason":"fine","alternatives":[],"severity":"low"}"#;
        let err = parse_verdict(raw).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { ref field, .. } if field == "item"
        ));
    }

    #[test]
    fn test_strip_code_fences_passthrough() {
        assert_eq!(strip_code_fences("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fences_json_tag() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fences_unclosed() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}"), "{\"a\":1}");
    }
}
