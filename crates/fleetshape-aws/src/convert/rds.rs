//! DB parameter group conversions

use crate::convert::{require_record, require_text};
use crate::model::rds::Parameter;
use fleetshape_flatmap::{Record, Result, Value};

/// Build parameters from configured `parameter` records.
///
/// `name` and `value` are required and must be non-empty. `apply_method` is
/// optional, but when a record sets it, it must be a non-empty string too.
pub fn expand_parameters(configured: &[Value]) -> Result<Vec<Parameter>> {
    let parameters = configured
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let m = require_record(raw, i)?;
            let apply_method = match m.get("apply_method") {
                Some(_) => Some(require_text(m, "apply_method")?.to_string()),
                None => None,
            };
            Ok(Parameter {
                parameter_name: Some(require_text(m, "name")?.to_string()),
                parameter_value: Some(require_text(m, "value")?.to_string()),
                apply_method,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Expanded {} db parameters", parameters.len());
    Ok(parameters)
}

/// Flatten parameters read back from the API. `apply_method` is only written
/// when the API reported one.
pub fn flatten_parameters(list: &[Parameter]) -> Vec<Record> {
    list.iter()
        .map(|p| {
            let mut record = Record::new()
                .with("name", p.parameter_name.clone().unwrap_or_default())
                .with("value", p.parameter_value.clone().unwrap_or_default());
            if let Some(method) = &p.apply_method {
                record.insert("apply_method", method.as_str());
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn charset(apply_method: Option<&str>) -> Record {
        let record = Record::new()
            .with("name", "character_set_client")
            .with("value", "utf8");
        match apply_method {
            Some(method) => record.with("apply_method", method),
            None => record,
        }
    }

    #[test]
    fn test_expand_parameters() {
        let configured = [Value::Map(charset(Some("immediate")))];
        let parameters = expand_parameters(&configured).unwrap();

        let expected = Parameter {
            parameter_name: Some("character_set_client".to_string()),
            parameter_value: Some("utf8".to_string()),
            apply_method: Some("immediate".to_string()),
        };
        assert_eq!(parameters, vec![expected]);
    }

    #[test]
    fn test_expand_parameters_without_apply_method() {
        let parameters = expand_parameters(&[Value::Map(charset(None))]).unwrap();
        assert_eq!(parameters[0].apply_method, None);
    }

    #[test]
    fn test_expand_parameters_missing_name() {
        let record = Record::new().with("value", "utf8");
        let err = expand_parameters(&[Value::Map(record)]).unwrap_err();
        assert!(err.is_missing_field());
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_expand_parameters_empty_value() {
        let record = charset(None).with("value", "");
        let err = expand_parameters(&[Value::Map(record)]).unwrap_err();
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_expand_parameters_empty_apply_method() {
        let configured = [Value::Map(charset(Some("")))];
        let err = expand_parameters(&configured).unwrap_err();
        assert!(err.is_missing_field());
        assert!(err.to_string().contains("apply_method"));
    }

    #[test]
    fn test_expand_parameters_non_string_value() {
        let record = charset(None).with("value", 8);
        let err = expand_parameters(&[Value::Map(record)]).unwrap_err();
        assert!(err.is_malformed_field());
    }

    #[test]
    fn test_flatten_parameters() {
        let input = vec![Parameter {
            parameter_name: Some("character_set_client".to_string()),
            parameter_value: Some("utf8".to_string()),
            apply_method: None,
        }];

        let expected = vec![
            Record::new()
                .with("name", "character_set_client")
                .with("value", "utf8"),
        ];
        assert_eq!(flatten_parameters(&input), expected);
    }

    #[test]
    fn test_flatten_parameters_keeps_apply_method() {
        let input = vec![Parameter {
            parameter_name: Some("max_connections".to_string()),
            parameter_value: Some("100".to_string()),
            apply_method: Some("pending-reboot".to_string()),
        }];

        let result = flatten_parameters(&input);
        assert_eq!(result[0]["apply_method"], Value::from("pending-reboot"));
    }

    #[test]
    fn test_parameters_round_trip_modulo_apply_method() {
        let input = vec![
            Parameter {
                parameter_name: Some("character_set_client".to_string()),
                parameter_value: Some("utf8".to_string()),
                apply_method: Some("immediate".to_string()),
            },
            Parameter {
                parameter_name: Some("time_zone".to_string()),
                parameter_value: Some("UTC".to_string()),
                apply_method: None,
            },
        ];

        let configured: Vec<Value> = flatten_parameters(&input)
            .into_iter()
            .map(Value::Map)
            .collect();
        assert_eq!(expand_parameters(&configured).unwrap(), input);
    }
}
