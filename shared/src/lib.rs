use serde::{Deserialize, Serialize};
use std::fmt;

pub mod booking_form;
pub mod bookings;
pub mod buses;
pub mod client;
pub mod config;
pub mod error;
pub mod lenient;
pub mod protocol;
pub mod request;
pub mod session;

pub use booking_form::{BookingFormData, BookingSummary, VehicleType};
pub use bookings::BookingsPayload;
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientErrorKind, ClientResult};
pub use session::{Session, SessionStorage};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5500/api";
pub const STORAGE_TOKEN_KEY: &str = "token";
pub const STORAGE_ROLE_KEY: &str = "role";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 后端记录 ID
///
/// 后端有时返回数字、有时返回字符串，两种都接受。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub route: String,
    #[serde(rename = "availableSeats", default, deserialize_with = "lenient::u32_or_zero")]
    pub available_seats: u32,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// `/bookings` 返回的预订记录，字段均可缺省
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, deserialize_with = "lenient::opt_record_id")]
    pub booking_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub bus_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub route: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub seats_booked: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_price: Option<f64>,
}

/// 个人资料中内嵌的预订，结构与 `/bookings` 不同
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileBooking {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub bus: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub route: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient::opt_record_id")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub profile_picture: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub bookings: Vec<ProfileBooking>,
}

impl Profile {
    /// 没有头像时显示的首字母
    pub fn initial(&self) -> Option<char> {
        self.username
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_ascii_uppercase())
    }
}

// =========================================================
// 认证相关 (Auth Payloads)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// 只带可选提示信息的通用响应
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub message: Option<String>,
}

// =========================================================
// 预订相关 (Booking Payloads)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatBookingRequest {
    pub bus_id: RecordId,
    pub seats: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_id: Option<RecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePictureUser {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub profile_picture: Option<String>,
}

/// `PUT /auth/profile/` 的响应：`{ user: { profile_picture } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePictureResponse {
    #[serde(default)]
    pub user: ProfilePictureUser,
}
