//! 宽松的字段解码
//!
//! 后端对同一字段可能给出数字、数字字符串或 null（如 `"1500.00"`）。
//! 这些函数配合 `#[serde(default, deserialize_with = "...")]` 使用：
//! 无法识别的值退化为默认值，不让单个字段拖垮整个响应。

use crate::RecordId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// 数字或数字字符串，其余为 `None`
pub fn opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(number(&Value::deserialize(deserializer)?))
}

/// 非负整数或整数字符串，其余为 `None`
pub fn opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value)
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
        .map(|f| f as u32))
}

/// 同 [`opt_u32`]，无法识别时为 0
pub fn u32_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    opt_u32(deserializer).map(Option::unwrap_or_default)
}

/// 字符串；数字和布尔值转为文本，其余为 `None`
pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// 同 [`opt_string`]，无法识别时为空字符串
pub fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    opt_string(deserializer).map(Option::unwrap_or_default)
}

/// 数字或字符串 ID，其余为 `None`
pub fn opt_record_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<RecordId>, D::Error> {
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

/// 数组中逐项解码，失败的项丢弃；非数组（含 null）为空列表
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::opt_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "super::opt_u32")]
        seats: Option<u32>,
        #[serde(default, deserialize_with = "super::opt_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "super::list")]
        tags: Vec<String>,
    }

    fn sample(value: serde_json::Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let s = sample(json!({ "price": "1500.00", "seats": "2" }));
        assert_eq!(s.price, Some(1500.0));
        assert_eq!(s.seats, Some(2));
    }

    #[test]
    fn test_unusable_values_become_default() {
        let s = sample(json!({ "price": "free", "seats": -1, "name": null, "tags": null }));
        assert_eq!(s.price, None);
        assert_eq!(s.seats, None);
        assert_eq!(s.name, None);
        assert!(s.tags.is_empty());

        let s = sample(json!({ "seats": 2.5, "tags": "a" }));
        assert_eq!(s.seats, None);
        assert!(s.tags.is_empty());
    }

    #[test]
    fn test_missing_fields_use_default() {
        let s = sample(json!({}));
        assert_eq!(s.price, None);
        assert!(s.tags.is_empty());
    }

    #[test]
    fn test_list_drops_bad_items() {
        let s = sample(json!({ "tags": ["a", 1, "b"], "name": 42 }));
        assert_eq!(s.tags, ["a", "b"]);
        assert_eq!(s.name.as_deref(), Some("42"));
    }
}
