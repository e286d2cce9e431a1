use crate::bookings::BookingsPayload;
use crate::{
    Acknowledgement, Booking, BookingFormData, BookingUpdate, Bus, LoginRequest, LoginResponse,
    Profile, RecordId, RegisterRequest, SeatBookingRequest,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub const PROFILE_PATH: &str = "/auth/profile/";

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// How an endpoint is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Never send a bearer token.
    Public,
    /// Send the bearer token when one is available.
    Optional,
    /// Refuse to send the request without a token.
    Required,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Bearer token policy.
    const AUTH: AuthMode;
    /// The URL path relative to the API base.
    fn path(&self) -> String;
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for RegisterRequest {
    type Response = Acknowledgement;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: AuthMode = AuthMode::Public;
    fn path(&self) -> String {
        "/auth/register".to_string()
    }
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: AuthMode = AuthMode::Public;
    fn path(&self) -> String {
        "/auth/login".to_string()
    }
}

/// List all buses
#[derive(Debug, Serialize, Deserialize)]
pub struct ListBusesRequest;

impl ApiRequest for ListBusesRequest {
    type Response = Vec<Bus>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: AuthMode = AuthMode::Public;
    fn path(&self) -> String {
        "/buses".to_string()
    }
}

/// List the current user's bookings.
///
/// The response is normalized by [`BookingsPayload`] whatever shape the backend picks.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListBookingsRequest;

impl ApiRequest for ListBookingsRequest {
    type Response = BookingsPayload;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: AuthMode = AuthMode::Required;
    fn path(&self) -> String {
        "/bookings".to_string()
    }
}

/// Book seats on a bus
impl ApiRequest for SeatBookingRequest {
    type Response = Acknowledgement;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: AuthMode = AuthMode::Required;
    fn path(&self) -> String {
        "/bookings".to_string()
    }
}

/// Submit the passenger booking form. Anonymous submissions are accepted.
impl ApiRequest for BookingFormData {
    type Response = Acknowledgement;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: AuthMode = AuthMode::Optional;
    fn path(&self) -> String {
        "/bookings".to_string()
    }
}

/// Update a booking
#[derive(Debug, Serialize)]
pub struct UpdateBookingRequest {
    #[serde(skip)]
    pub id: RecordId,
    #[serde(flatten)]
    pub update: BookingUpdate,
}

impl ApiRequest for UpdateBookingRequest {
    type Response = Booking;
    const METHOD: HttpMethod = HttpMethod::Put;
    const AUTH: AuthMode = AuthMode::Required;
    fn path(&self) -> String {
        format!("/bookings/{}", self.id)
    }
}

/// Delete a booking
#[derive(Debug, Serialize)]
pub struct DeleteBookingRequest {
    #[serde(skip)]
    pub id: RecordId,
}

impl ApiRequest for DeleteBookingRequest {
    type Response = Acknowledgement;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const AUTH: AuthMode = AuthMode::Required;
    fn path(&self) -> String {
        format!("/bookings/{}", self.id)
    }
}

/// Fetch the profile together with its embedded bookings
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRequest;

impl ApiRequest for ProfileRequest {
    type Response = Profile;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: AuthMode = AuthMode::Required;
    fn path(&self) -> String {
        PROFILE_PATH.to_string()
    }
}

/// Health check
#[derive(Debug, Serialize, Deserialize)]
pub struct PingRequest;

impl ApiRequest for PingRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: AuthMode = AuthMode::Public;
    fn path(&self) -> String {
        "/ping".to_string()
    }
}
