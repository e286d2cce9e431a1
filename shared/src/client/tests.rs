use super::*;
use crate::request::{MockHttpClient, RequestBody};
use crate::{ClientErrorKind, VehicleType};
use serde_json::json;

const BASE: &str = "http://api.test/api";

// =========================================================
// 辅助函数
// =========================================================

fn anonymous(mock: &MockHttpClient) -> ApiClient<&MockHttpClient> {
    ApiClient::new(mock, BASE)
}

fn signed_in(mock: &MockHttpClient) -> ApiClient<&MockHttpClient> {
    ApiClient::new(mock, BASE).with_token(Some("tok-123"))
}

fn form() -> BookingFormData {
    BookingFormData {
        name: "Otieno".to_string(),
        from: "Nairobi".to_string(),
        to: "Nakuru".to_string(),
        vehicle_type: VehicleType::Normal,
        ..Default::default()
    }
}

// =========================================================
// 错误消息
// =========================================================

#[tokio::test]
async fn test_error_field_preferred() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        "http://api.test/api/auth/login",
        400,
        json!({ "error": "Invalid credentials", "message": "nope" }),
    );

    let err = anonymous(&mock)
        .login(&LoginRequest {
            email: "a@b.c".to_string(),
            password: "x".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ClientErrorKind::Status);
    assert_eq!(err.status, Some(400));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_message_field_used_when_no_error() {
    let mock = MockHttpClient::new();
    mock.mock_response("http://api.test/api/buses", 503, json!({ "message": "Maintenance" }));

    let err = anonymous(&mock).fetch_buses().await.unwrap_err();
    assert_eq!(err.message(), "Maintenance");
}

#[tokio::test]
async fn test_non_json_error_body_gets_default_message() {
    let mock = MockHttpClient::new();
    mock.mock_raw("http://api.test/api/buses", 502, "<html>Bad Gateway</html>");

    let err = anonymous(&mock).fetch_buses().await.unwrap_err();
    assert_eq!(err.message(), "API Error");
    assert_eq!(err.spans(), ["GET /buses"]);
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let mock = MockHttpClient::offline();
    let err = anonymous(&mock).ping().await.unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::Transport);
    assert!(!err.message().is_empty());
}

// =========================================================
// 公开接口
// =========================================================

#[tokio::test]
async fn test_fetch_buses_is_unauthenticated() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        "http://api.test/api/buses",
        200,
        json!([{ "id": 1, "name": "Mash Poa", "route": "Nairobi - Mombasa", "availableSeats": 3 }]),
    );

    let buses = signed_in(&mock).fetch_buses().await.unwrap();
    assert_eq!(buses.len(), 1);
    assert_eq!(buses[0].available_seats, 3);

    let req = mock.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Get);
    assert!(!req.headers.contains_key(HEADER_AUTHORIZATION));
    assert!(req.body.is_none());
}

#[tokio::test]
async fn test_login_posts_json() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        "http://api.test/api/auth/login",
        200,
        json!({ "token": "jwt", "role": "passenger" }),
    );

    let resp = anonymous(&mock)
        .login(&LoginRequest {
            email: "amina@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(resp.token, "jwt");
    assert_eq!(resp.role.as_deref(), Some("passenger"));

    let req = mock.last_request().unwrap();
    assert_eq!(req.headers.get(HEADER_CONTENT_TYPE).map(String::as_str), Some(CONTENT_TYPE_JSON));
    assert_eq!(req.json_body().unwrap()["email"], "amina@example.com");
}

#[tokio::test]
async fn test_register_accepts_empty_success_body() {
    let mock = MockHttpClient::new();
    mock.mock_raw("http://api.test/api/auth/register", 201, "");

    let ack = anonymous(&mock)
        .register(&RegisterRequest {
            username: "amina".to_string(),
            email: "amina@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(ack.message, None);
}

// =========================================================
// 需要认证的接口
// =========================================================

#[tokio::test]
async fn test_missing_token_sends_nothing() {
    let mock = MockHttpClient::new();
    let client = anonymous(&mock);

    let err = client.fetch_bookings().await.unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::MissingAuth);
    assert!(client.add_booking(RecordId::Number(1), 1).await.is_err());
    assert!(client.fetch_profile().await.is_err());
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_fetch_buses_tolerates_loose_fields() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        "http://api.test/api/buses",
        200,
        json!([
            { "id": 1, "name": "Mash Poa", "route": "Nairobi - Mombasa", "availableSeats": 3 },
            { "id": "2", "name": "Guardian", "route": "Kisumu", "availableSeats": "12", "price": "500.00" },
            { "id": 3, "name": null, "availableSeats": null }
        ]),
    );

    let buses = anonymous(&mock).fetch_buses().await.unwrap();
    assert_eq!(buses.len(), 3);
    assert_eq!(buses[1].price, Some(500.0));
    assert_eq!(buses[1].available_seats, 12);
    assert_eq!(buses[2].available_seats, 0);
    assert_eq!(buses[2].name, "");
}

#[tokio::test]
async fn test_fetch_bookings_normalizes_wrapper() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        "http://api.test/api/bookings",
        200,
        json!({ "bookings": [{ "booking_id": 2, "bus_name": "Guardian" }] }),
    );

    let bookings = signed_in(&mock).fetch_bookings().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].booking_id, Some(RecordId::Number(2)));

    let req = mock.last_request().unwrap();
    assert_eq!(req.headers.get(HEADER_AUTHORIZATION).map(String::as_str), Some("Bearer tok-123"));
}

#[tokio::test]
async fn test_fetch_bookings_unexpected_shape_is_empty() {
    let mock = MockHttpClient::new();
    mock.mock_raw("http://api.test/api/bookings", 200, "null");

    let bookings = signed_in(&mock).fetch_bookings().await.unwrap();
    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_fetch_bookings_reports_shape() {
    let mock = MockHttpClient::new();
    mock.mock_raw("http://api.test/api/bookings", 200, "{}");

    let payload = signed_in(&mock).fetch_bookings_payload().await.unwrap();
    assert_eq!(payload.shape(), "unrecognized");
    assert!(payload.into_bookings().is_empty());
}

#[tokio::test]
async fn test_fetch_bookings_decimal_strings() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        "http://api.test/api/bookings",
        200,
        json!([{ "booking_id": 1, "bus_name": "Guardian", "seats_booked": "2", "total_price": "1500.00" }]),
    );

    let bookings = signed_in(&mock).fetch_bookings().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].seats_booked, Some(2));
    assert_eq!(bookings[0].total_price, Some(1500.0));
}

#[tokio::test]
async fn test_add_booking_unauthorized() {
    let mock = MockHttpClient::new();
    mock.mock_response("http://api.test/api/bookings", 401, json!({ "error": "jwt expired" }));

    let err = signed_in(&mock)
        .add_booking(RecordId::Number(7), 2)
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());

    let body = mock.last_request().unwrap().json_body().unwrap();
    assert_eq!(body, json!({ "bus_id": 7, "seats": 2 }));
}

#[tokio::test]
async fn test_add_booking_success_message() {
    let mock = MockHttpClient::new();
    mock.mock_response("http://api.test/api/bookings", 201, json!({ "message": "Seats reserved" }));

    let ack = signed_in(&mock).add_booking(RecordId::Number(7), 1).await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Seats reserved"));
}

#[tokio::test]
async fn test_update_and_delete_paths() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        "http://api.test/api/bookings/42",
        200,
        json!({ "booking_id": 42, "seats_booked": 3 }),
    );
    let client = signed_in(&mock);

    let updated = client
        .update_booking(
            RecordId::Number(42),
            BookingUpdate {
                seats: Some(3),
                bus_id: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.seats_booked, Some(3));
    let req = mock.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Put);
    assert_eq!(req.json_body().unwrap(), json!({ "seats": 3 }));

    client.delete_booking(RecordId::Number(42)).await.unwrap();
    let req = mock.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Delete);
    assert_eq!(req.url, "http://api.test/api/bookings/42");
    assert!(req.body.is_none());
}

// =========================================================
// 预订表单
// =========================================================

#[tokio::test]
async fn test_invalid_form_makes_no_request() {
    let mock = MockHttpClient::new();
    let incomplete = BookingFormData {
        to: String::new(),
        ..form()
    };

    let err = signed_in(&mock).submit_booking_form(&incomplete).await.unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::Validation);
    assert!(!err.message().is_empty());
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_form_submission_auth_is_optional() {
    let mock = MockHttpClient::new();
    mock.mock_response("http://api.test/api/bookings", 200, json!({}));

    anonymous(&mock).submit_booking_form(&form()).await.unwrap();
    let req = mock.last_request().unwrap();
    assert!(!req.headers.contains_key(HEADER_AUTHORIZATION));
    assert_eq!(req.json_body().unwrap()["vehicleType"], "normal");

    signed_in(&mock).submit_booking_form(&form()).await.unwrap();
    assert!(mock.last_request().unwrap().headers.contains_key(HEADER_AUTHORIZATION));
}

// =========================================================
// 个人资料
// =========================================================

#[tokio::test]
async fn test_fetch_profile_with_embedded_bookings() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        "http://api.test/api/auth/profile/",
        200,
        json!({
            "id": 5,
            "username": "amina",
            "email": "amina@example.com",
            "profile_picture": null,
            "bookings": [{ "bus": "Guardian", "route": "Kisumu", "image_url": "/img/g.jpg" }]
        }),
    );

    let profile = signed_in(&mock).fetch_profile().await.unwrap();
    assert_eq!(profile.initial(), Some('A'));
    assert_eq!(profile.bookings.len(), 1);
    assert_eq!(profile.bookings[0].image_url.as_deref(), Some("/img/g.jpg"));
}

#[tokio::test]
async fn test_profile_picture_upload_is_multipart() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        "http://api.test/api/auth/profile/",
        200,
        json!({ "user": { "profile_picture": "/uploads/me.png" } }),
    );

    let part = FilePart {
        field: "profile_picture".to_string(),
        file_name: "me.png".to_string(),
        content_type: "image/png".to_string(),
        data: vec![0x89, 0x50],
    };
    let resp = signed_in(&mock).update_profile_picture(part.clone()).await.unwrap();
    assert_eq!(resp.user.profile_picture.as_deref(), Some("/uploads/me.png"));

    let req = mock.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Put);
    assert!(!req.headers.contains_key(HEADER_CONTENT_TYPE));
    assert_eq!(req.body, Some(RequestBody::Multipart(vec![part])));
}

#[tokio::test]
async fn test_from_session_uses_config_and_token() {
    let mock = MockHttpClient::new();
    mock.mock_response("http://127.0.0.1:5500/api/ping", 200, json!({ "status": "ok" }));

    let session = Session::new(Some("abc".to_string()), None);
    let client = ApiClient::from_session(&mock, &ClientConfig::default(), &session);

    let pong = client.ping().await.unwrap();
    assert_eq!(pong["status"], "ok");
    assert!(!mock.last_request().unwrap().headers.contains_key(HEADER_AUTHORIZATION));
}

#[tokio::test]
async fn test_fetch_profile_null_bookings() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        "http://api.test/api/auth/profile/",
        200,
        json!({ "id": 5, "username": "amina", "email": null, "bookings": null }),
    );

    let profile = signed_in(&mock).fetch_profile().await.unwrap();
    assert_eq!(profile.username.as_deref(), Some("amina"));
    assert_eq!(profile.email, None);
    assert!(profile.bookings.is_empty());
}
