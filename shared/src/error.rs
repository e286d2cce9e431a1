use std::fmt;

use serde_json::Value;

/// 后端错误响应中没有可用信息时的兜底消息
pub const DEFAULT_ERROR_MESSAGE: &str = "API Error";

// =========================================================
// 错误类型枚举
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    /// 请求未能发出或没有收到响应
    Transport,
    /// 非 2xx 状态码
    Status,
    /// 响应 JSON 与期望的类型不符
    Decode,
    /// 需要认证的接口在没有 token 时被调用
    MissingAuth,
    /// 表单校验失败
    Validation,
}

impl ClientErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientErrorKind::Transport => "NETWORK_ERROR",
            ClientErrorKind::Status => "HTTP_STATUS",
            ClientErrorKind::Decode => "DECODE_ERROR",
            ClientErrorKind::MissingAuth => "MISSING_AUTH",
            ClientErrorKind::Validation => "INVALID_INPUT",
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// 客户端错误
///
/// - kind: 错误分类
/// - status: HTTP 状态码（仅 `Status` 类型有）
/// - message: 面向用户的消息，`Display` 只输出它
/// - spans: 出错时所在的操作，仅用于日志
#[derive(Debug, Clone, PartialEq)]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub status: Option<u16>,
    pub message: String,
    spans: Vec<String>,
}

impl ClientError {
    pub fn new(kind: ClientErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Transport, message)
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new(ClientErrorKind::Status, message)
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Decode, message)
    }

    pub fn missing_auth() -> Self {
        Self::new(ClientErrorKind::MissingAuth, "You need to login first")
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Validation, message)
    }

    /// 根据非成功响应体构造错误
    ///
    /// 消息优先取 `error`，其次 `message`，最后使用固定兜底文本。
    pub fn from_response(status: u16, data: &Value) -> Self {
        Self::status(status, error_message(data))
    }

    /// 添加操作追踪
    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(operation.into());
        self
    }

    // --- Accessors ---

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[String] {
        &self.spans
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    /// 状态码的诊断说明，仅写日志用
    pub fn status_hint(&self) -> Option<&'static str> {
        match self.status? {
            401 => Some("401 Unauthorized: invalid or expired token"),
            403 => Some("403 Forbidden: access denied"),
            404 => Some("404 Not Found: check that the route exists on the backend"),
            _ => Some("unexpected HTTP status"),
        }
    }

    /// 日志格式：`[CODE] message | trace: a -> b`
    pub fn log_line(&self) -> String {
        let mut line = format!("[{}] {}", self.error_code(), self.message);
        if let Some(status) = self.status {
            line.push_str(&format!(" (HTTP {})", status));
        }
        if !self.spans.is_empty() {
            line.push_str(" | trace: ");
            line.push_str(&self.spans.join(" -> "));
        }
        line
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::decode(e.to_string())
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// 从错误响应体中提取消息
pub fn error_message(data: &Value) -> String {
    ["error", "message"]
        .iter()
        .filter_map(|key| data.get(key).and_then(Value::as_str))
        .find(|msg| !msg.is_empty())
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_field_wins() {
        let data = json!({ "error": "Seat taken", "message": "ignored" });
        assert_eq!(error_message(&data), "Seat taken");
    }

    #[test]
    fn test_falls_back_to_message_then_default() {
        assert_eq!(error_message(&json!({ "message": "Bad input" })), "Bad input");
        assert_eq!(error_message(&json!({ "error": "" })), DEFAULT_ERROR_MESSAGE);
        assert_eq!(error_message(&json!({})), DEFAULT_ERROR_MESSAGE);
        assert_eq!(error_message(&json!([1, 2])), DEFAULT_ERROR_MESSAGE);
        assert_eq!(error_message(&json!({ "error": 42 })), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_status_error_carries_code() {
        let err = ClientError::from_response(401, &json!({ "message": "Token expired" }));
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Token expired");
        assert_eq!(err.status_hint(), Some("401 Unauthorized: invalid or expired token"));
    }

    #[test]
    fn test_log_line_includes_trace() {
        let err = ClientError::status(500, "boom").in_op("bookings.list");
        assert_eq!(err.log_line(), "[HTTP_STATUS] boom (HTTP 500) | trace: bookings.list");
        assert!(ClientError::transport("offline").status_hint().is_none());
    }
}
