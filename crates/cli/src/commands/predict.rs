//! Prediction command

use std::io::Read;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use tabled::Tabled;

use crate::output::{color_stress_level, format_value, print_warning, OutputFormat};
use stress_client::PredictionClient;

/// Row for the prediction response table
#[derive(Tabled)]
struct ResponseRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Request a prediction and render the response
pub async fn run(
    client: &PredictionClient,
    fields: &[String],
    file: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let input = build_input(fields, file)?;
    let response = client.predict_stress_level(&input).await?;
    render(&response, format)
}

/// Assemble the input object from a JSON file and key=value overrides
fn build_input(fields: &[String], file: Option<&str>) -> Result<Map<String, Value>> {
    if fields.is_empty() && file.is_none() {
        bail!("No input given; pass key=value fields or --file");
    }

    let mut input = match file {
        Some(path) => read_input_file(path)?,
        None => Map::new(),
    };

    for field in fields {
        let (key, value) = parse_field(field)?;
        input.insert(key, value);
    }

    Ok(input)
}

/// Read a JSON object from a file path, or stdin for "-"
fn read_input_file(path: &str) -> Result<Map<String, Value>> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path))?
    };

    let value: Value = serde_json::from_str(&content).context("Input is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("Input must be a JSON object"),
    }
}

/// Split a key=value argument.
///
/// The value is parsed as JSON when possible so numbers, booleans, and
/// nested documents keep their type, and kept as a plain string otherwise.
fn parse_field(field: &str) -> Result<(String, Value)> {
    let (key, raw) = field
        .split_once('=')
        .with_context(|| format!("Expected key=value, got '{}'", field))?;

    if key.is_empty() {
        bail!("Empty field name in '{}'", field);
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Render the prediction response
fn render(response: &Value, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(response)?);
        }
        OutputFormat::Table => match response {
            Value::Object(map) => {
                if let Some(error) = map.get("error") {
                    print_warning(&format!(
                        "Prediction service reported: {}",
                        format_value(error)
                    ));
                    return Ok(());
                }

                let rows: Vec<ResponseRow> = map
                    .iter()
                    .map(|(key, value)| ResponseRow {
                        field: key.clone(),
                        value: if key == "stress_level" {
                            color_stress_level(&format_value(value))
                        } else {
                            format_value(value)
                        },
                    })
                    .collect();

                let table = tabled::Table::new(rows)
                    .with(tabled::settings::Style::rounded())
                    .to_string();
                println!("{}", table);
            }
            // No rows to show for scalar or array responses
            other => println!("{}", serde_json::to_string_pretty(other)?),
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_field_number() {
        let (key, value) = parse_field("hours_worked=60").unwrap();
        assert_eq!(key, "hours_worked");
        assert_eq!(value, json!(60));
    }

    #[test]
    fn test_parse_field_string_fallback() {
        let (key, value) = parse_field("gender=female").unwrap();
        assert_eq!(key, "gender");
        assert_eq!(value, json!("female"));
    }

    #[test]
    fn test_parse_field_bool_and_float() {
        let (_, value) = parse_field("remote=true").unwrap();
        assert_eq!(value, json!(true));

        let (_, value) = parse_field("gpa=3.5").unwrap();
        assert_eq!(value, json!(3.5));
    }

    #[test]
    fn test_parse_field_quoted_string_stays_json() {
        let (_, value) = parse_field(r#"note="60""#).unwrap();
        assert_eq!(value, json!("60"));
    }

    #[test]
    fn test_parse_field_rejects_missing_separator() {
        assert!(parse_field("hours_worked").is_err());
    }

    #[test]
    fn test_parse_field_rejects_empty_key() {
        assert!(parse_field("=60").is_err());
    }

    #[test]
    fn test_build_input_requires_some_source() {
        assert!(build_input(&[], None).is_err());
    }

    #[test]
    fn test_build_input_later_fields_win() {
        let fields = vec!["sleep_hours=4".to_string(), "sleep_hours=8".to_string()];
        let input = build_input(&fields, None).unwrap();
        assert_eq!(input.get("sleep_hours"), Some(&json!(8)));
    }
}
