//! Roll services
//!
//! A [`RollService`] turns one [`RollRequest`] into a [`RollResponse`]. The
//! HTTP service posts the request form to the roll server; the local service
//! runs the same dice logic in-process.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::dice3d::types::ViewerSettings;

use super::state::{RollRequest, RollResponse};

/// Something that can answer a roll request. Called from worker threads.
pub trait RollService: Send + Sync + 'static {
    fn roll(&self, request: &RollRequest) -> Result<RollResponse, String>;

    /// Short label for logs ("http://...", "local")
    fn describe(&self) -> String;
}

// ============================================================================
// HTTP
// ============================================================================

/// Posts `type` and `info` as a form to the roll endpoint.
pub struct HttpRollService {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpRollService {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl RollService for HttpRollService {
    fn roll(&self, request: &RollRequest) -> Result<RollResponse, String> {
        let response = self
            .client
            .post(&self.url)
            .form(&[
                ("type", request.die_type.name()),
                ("info", request.info.as_str()),
            ])
            .send()
            .map_err(|e| format!("Request to {} failed: {}", self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Roll server answered {}", status));
        }

        let body = response
            .text()
            .map_err(|e| format!("Failed to read roll response: {}", e))?;
        parse_roll_response(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// The service the settings ask for: in-process when `offline`, otherwise
/// the HTTP endpoint at `server_url`.
pub fn roll_service_from_settings(
    settings: &ViewerSettings,
) -> Result<Arc<dyn RollService>, String> {
    if settings.offline {
        return Ok(Arc::new(LocalRollService));
    }
    let service = HttpRollService::new(settings.server_url.clone(), settings.request_timeout())?;
    Ok(Arc::new(service))
}

/// Parse the JSON body returned by the roll endpoint.
pub fn parse_roll_response(body: &str) -> Result<RollResponse, String> {
    serde_json::from_str::<RollResponse>(body)
        .map_err(|e| format!("Malformed roll response: {}", e))
}

// ============================================================================
// Local
// ============================================================================

/// Rolls in-process with the same rules as the roll server.
#[derive(Default)]
pub struct LocalRollService;

impl RollService for LocalRollService {
    fn roll(&self, request: &RollRequest) -> Result<RollResponse, String> {
        let token = request.die_type.name();
        Ok(RollResponse {
            roll_result: roll_die(token)?,
            die_type: token.to_string(),
            info: request.info.clone(),
        })
    }

    fn describe(&self) -> String {
        "local".to_string()
    }
}

/// Roll the die named by `token` ("D6", "d20", "D100"): the face count is the
/// numeric suffix and the result is uniform over `1..=faces`.
pub fn roll_die(token: &str) -> Result<u32, String> {
    let faces = face_count(token)?;
    Ok(rand::thread_rng().gen_range(1..=faces))
}

/// Numeric suffix of a die token.
pub fn face_count(token: &str) -> Result<u32, String> {
    let token = token.trim();
    let digits = token
        .strip_prefix('D')
        .or_else(|| token.strip_prefix('d'))
        .ok_or_else(|| format!("'{}' is not a die token", token))?;
    match digits.parse::<u32>() {
        Ok(faces) if faces >= 1 => Ok(faces),
        _ => Err(format!("'{}' has no face count", token)),
    }
}
