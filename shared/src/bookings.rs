//! 预订列表响应的归一化
//!
//! 后端的 `/bookings` 可能返回三种结构：
//! - 直接的数组 `[...]`
//! - 包装对象 `{ "bookings": [...] }`
//! - 单个预订对象 `{ "booking_id": ... }`
//!
//! 在 API 客户端边界统一解析为 [`BookingsPayload`]，视图只拿到 `Vec<Booking>`。

use crate::{Booking, RecordId};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum BookingsPayload {
    List(Vec<Booking>),
    Wrapped(Vec<Booking>),
    Single(Booking),
    Unrecognized,
}

impl BookingsPayload {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(parse_items(items)),
            Value::Object(mut map) => {
                if let Some(Value::Array(items)) = map.remove("bookings") {
                    return Self::Wrapped(parse_items(items));
                }
                if !map.get("booking_id").is_some_and(is_truthy) {
                    return Self::Unrecognized;
                }
                serde_json::from_value(Value::Object(map))
                    .map(Self::Single)
                    .unwrap_or(Self::Unrecognized)
            }
            _ => Self::Unrecognized,
        }
    }

    /// 用于日志的结构说明
    pub fn shape(&self) -> &'static str {
        match self {
            Self::List(_) => "array",
            Self::Wrapped(_) => "wrapped",
            Self::Single(_) => "single",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub fn into_bookings(self) -> Vec<Booking> {
        match self {
            Self::List(list) | Self::Wrapped(list) => list,
            Self::Single(booking) => vec![booking],
            Self::Unrecognized => Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for BookingsPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// 仅从本地列表移除，不通知后端
pub fn remove_booking(bookings: &mut Vec<Booking>, id: &RecordId) {
    bookings.retain(|b| b.booking_id.as_ref() != Some(id));
}

// 非对象元素直接丢弃
fn parse_items(items: Vec<Value>) -> Vec<Booking> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
