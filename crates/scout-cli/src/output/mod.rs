use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects become a key/value table with nested keys flattened
/// (`target.name`, `playbook.stakeholders.0.role`). A top-level array of
/// objects inside an object (the vault listing) becomes a row table.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            if let Some(Value::Array(records)) = map.get("records") {
                return Ok(render_array_table(records));
            }
            let mut rows = Vec::new();
            for (key, value) in map {
                flatten_into(&key, &value, &mut rows);
            }
            Ok(table::render_entity_table(&["key", "value"], &rows, table_options()))
        }
        scalar => {
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&["value"], &rows, table_options()))
        }
    }
}

fn flatten_into(prefix: &str, value: &Value, rows: &mut Vec<Vec<String>>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(&format!("{prefix}.{key}"), nested, rows);
            }
        }
        Value::Array(items) if items.iter().any(|item| item.is_object() || item.is_array()) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(&format!("{prefix}.{index}"), item, rows);
            }
        }
        Value::Array(items) => {
            let joined = items.iter().map(value_to_cell).collect::<Vec<_>>().join(", ");
            rows.push(vec![prefix.to_string(), joined]);
        }
        scalar => rows.push(vec![prefix.to_string(), value_to_cell(scalar)]),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, table_options());
    }

    // Union of record keys; serde_json maps iterate in sorted key order.
    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Inner {
        name: &'static str,
        tags: Vec<&'static str>,
    }

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
        inner: Inner,
    }

    fn example() -> Example {
        Example {
            id: "x",
            value: 7,
            inner: Inner {
                name: "Acme",
                tags: vec!["AWS", "SAP"],
            },
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["inner"]["name"], "Acme");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["value"], 7);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_flattens_nested_keys() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("inner.name"));
        assert!(out.contains("AWS, SAP"));
    }

    #[derive(Serialize)]
    struct Row {
        id: i64,
        target: &'static str,
    }

    #[derive(Serialize)]
    struct Listing {
        records: Vec<Row>,
        total: u32,
    }

    #[test]
    fn table_render_for_records_is_row_table() {
        let listing = Listing {
            records: vec![
                Row { id: 2, target: "https://b.com" },
                Row { id: 1, target: "https://a.com" },
            ],
            total: 2,
        };
        let out = render(&listing, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("id"));
        assert!(lines[2].contains("https://b.com"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn empty_records_render_placeholder() {
        let listing = Listing {
            records: Vec::new(),
            total: 0,
        };
        let out = render(&listing, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
