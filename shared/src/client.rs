use crate::bookings::BookingsPayload;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::protocol::{
    ApiRequest, AuthMode, DeleteBookingRequest, HttpMethod, ListBookingsRequest, ListBusesRequest,
    PROFILE_PATH, PingRequest, ProfileRequest, UpdateBookingRequest,
};
use crate::request::{FilePart, HttpClient, HttpRequest, HttpResponse};
use crate::session::Session;
use crate::{
    Acknowledgement, Booking, BookingFormData, BookingUpdate, Bus, CONTENT_TYPE_JSON,
    HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, LoginRequest, LoginResponse, Profile,
    ProfilePictureResponse, RecordId, RegisterRequest, SeatBookingRequest,
};
use serde::de::DeserializeOwned;

// =========================================================
// 服务封装: ApiClient
// =========================================================

/// 后端 REST API 客户端
///
/// 每个接口一个方法，只发一次请求：没有重试、超时或退避。
/// 具体的 HTTP 实现通过 [`HttpClient`] 注入。
pub struct ApiClient<C: HttpClient> {
    client: C,
    base_url: String,
    token: Option<String>,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(client: C, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// 按配置和当前会话构造
    pub fn from_session(client: C, config: &ClientConfig, session: &Session) -> Self {
        Self::new(client, config.api_url()).with_token(session.token())
    }

    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // 认证头
    fn bearer(&self, mode: AuthMode) -> ClientResult<Option<String>> {
        match (mode, &self.token) {
            (AuthMode::Public, _) => Ok(None),
            (_, Some(token)) => Ok(Some(format!("Bearer {}", token))),
            (AuthMode::Optional, None) => Ok(None),
            (AuthMode::Required, None) => Err(ClientError::missing_auth()),
        }
    }

    /// 发送任意实现了 [`ApiRequest`] 的请求
    pub async fn send<R: ApiRequest>(&self, req: &R) -> ClientResult<R::Response> {
        let path = req.path();
        let op = format!("{} {}", R::METHOD.as_str(), path);
        let bearer = self.bearer(R::AUTH).map_err(|e| e.in_op(op.clone()))?;

        let mut http = HttpRequest::new(&self.url(&path), R::METHOD);
        if let Some(bearer) = &bearer {
            http = http.with_header(HEADER_AUTHORIZATION, bearer);
        }
        if R::METHOD.has_body() {
            let body = serde_json::to_string(req).map_err(|e| ClientError::from(e).in_op(op.clone()))?;
            http = http
                .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
                .with_json(body);
        }

        let resp = self.client.send(http).await.map_err(|e| e.in_op(op.clone()))?;
        handle_response(resp).map_err(|e| e.in_op(op))
    }

    // --- Auth ---

    pub async fn register(&self, req: &RegisterRequest) -> ClientResult<Acknowledgement> {
        self.send(req).await
    }

    pub async fn login(&self, req: &LoginRequest) -> ClientResult<LoginResponse> {
        self.send(req).await
    }

    pub async fn fetch_profile(&self) -> ClientResult<Profile> {
        self.send(&ProfileRequest).await
    }

    /// 以 multipart 表单上传头像
    pub async fn update_profile_picture(&self, file: FilePart) -> ClientResult<ProfilePictureResponse> {
        let op = format!("PUT {}", PROFILE_PATH);
        let bearer = self
            .bearer(AuthMode::Required)?
            .ok_or_else(ClientError::missing_auth)?;

        // Content-Type 由浏览器根据 boundary 生成
        let http = HttpRequest::new(&self.url(PROFILE_PATH), HttpMethod::Put)
            .with_header(HEADER_AUTHORIZATION, &bearer)
            .with_file(file);

        let resp = self.client.send(http).await.map_err(|e| e.in_op(op.clone()))?;
        handle_response(resp).map_err(|e| e.in_op(op))
    }

    // --- Buses ---

    pub async fn fetch_buses(&self) -> ClientResult<Vec<Bus>> {
        self.send(&ListBusesRequest).await
    }

    // --- Bookings ---

    /// 获取当前用户的预订，保留识别出的响应结构供日志使用
    pub async fn fetch_bookings_payload(&self) -> ClientResult<BookingsPayload> {
        self.send(&ListBookingsRequest).await
    }

    /// 获取当前用户的预订，响应结构在这里统一归一化
    pub async fn fetch_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.fetch_bookings_payload()
            .await
            .map(BookingsPayload::into_bookings)
    }

    pub async fn add_booking(&self, bus_id: RecordId, seats: u32) -> ClientResult<Acknowledgement> {
        self.send(&SeatBookingRequest { bus_id, seats }).await
    }

    /// 提交乘客表单；必填项缺失时不会发出请求
    pub async fn submit_booking_form(&self, form: &BookingFormData) -> ClientResult<Acknowledgement> {
        form.validate()?;
        self.send(form).await
    }

    pub async fn update_booking(&self, id: RecordId, update: BookingUpdate) -> ClientResult<Booking> {
        self.send(&UpdateBookingRequest { id, update }).await
    }

    pub async fn delete_booking(&self, id: RecordId) -> ClientResult<Acknowledgement> {
        self.send(&DeleteBookingRequest { id }).await
    }

    // --- Health ---

    pub async fn ping(&self) -> ClientResult<serde_json::Value> {
        self.send(&PingRequest).await
    }
}

/// 统一的响应处理
///
/// 响应体解析失败时按空对象处理；非 2xx 状态转换为带消息的错误。
fn handle_response<T: DeserializeOwned>(resp: HttpResponse) -> ClientResult<T> {
    let data = resp.json_or_empty();
    if !resp.is_success() {
        return Err(ClientError::from_response(resp.status, &data));
    }
    serde_json::from_value(data).map_err(ClientError::from)
}

#[cfg(test)]
mod tests;
