use serde_json::{Map, Value};

/// Headline field for each command, in priority order.
const PRIORITY_KEYS: [&str; 9] = [
    "estimated_cashback_mad",
    "formatted",
    "eligible",
    "category",
    "minimum_threshold_mad",
    "valid",
    "portfolio_value_mad",
    "total_keys",
    "hottest_zone_id",
];

/// Print just the key answer value from the output.
///
/// Looks through the envelope's `result` and one level of nested `result`
/// (the charter assessment wraps the calculation), then falls back to the
/// first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        if let Some(val) = find_priority(map) {
            println!("{}", format_minimal(val));
            return;
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn find_priority(map: &Map<String, Value>) -> Option<&Value> {
    let nested = map.get("result").and_then(Value::as_object);
    PRIORITY_KEYS.iter().find_map(|key| {
        nested
            .and_then(|n| n.get(*key))
            .filter(|v| !v.is_null())
            .or_else(|| map.get(*key).filter(|v| !v.is_null()))
    })
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
