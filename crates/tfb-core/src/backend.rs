//! Backend API port: request payloads, outcomes and status interpretation.
//!
//! The HTTP transport lives in `tfb-backend`; everything here is pure so the
//! status/body rules can be tested without a server.

use async_trait::async_trait;
use serde::Serialize;

/// Shown in place of a code when a 200 body has no `code` field.
pub const CODE_PLACEHOLDER: &str = "kod topilmadi";

/// Used when a login failure body has no `message` field.
pub const DEFAULT_LOGIN_FAILURE: &str = "Xatolik yuz berdi.";

/// Register has no message extraction; every non-200 maps to this.
pub const GENERIC_REGISTER_FAILURE: &str = "generic problem";

/// Body of `POST <register url>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub telegram_id: String,
    pub phone_number: String,
}

/// Body of `POST <login url>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub telegram_id: String,
}

/// Result of one backend exchange, projected straight into a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiOutcome {
    Success(String),
    RateLimited,
    /// Backend-reported problem; the text may be shown to the user.
    Failure(String),
    /// Network, timeout or unparsable body. The reason is for logs only.
    TransportError(String),
}

impl ApiOutcome {
    /// Interpret a register response. Only 200 counts as success.
    pub fn from_register_response(status: u16, body: &[u8]) -> Self {
        if status != 200 {
            return Self::Failure(GENERIC_REGISTER_FAILURE.to_string());
        }
        match parse_object(body) {
            Ok(obj) => Self::Success(code_or_placeholder(&obj)),
            Err(e) => Self::TransportError(format!("register response: {e}")),
        }
    }

    /// Interpret a login response.
    ///
    /// 429 is decided before touching the body; every other status requires a
    /// JSON object body.
    pub fn from_login_response(status: u16, body: &[u8]) -> Self {
        if status == 429 {
            return Self::RateLimited;
        }
        let obj = match parse_object(body) {
            Ok(obj) => obj,
            Err(e) => return Self::TransportError(format!("login response ({status}): {e}")),
        };
        if status == 200 {
            Self::Success(code_or_placeholder(&obj))
        } else {
            Self::Failure(
                field_text(&obj, "message").unwrap_or_else(|| DEFAULT_LOGIN_FAILURE.to_string()),
            )
        }
    }
}

type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Response bodies must be JSON objects; arrays, scalars and null are malformed.
fn parse_object(body: &[u8]) -> std::result::Result<JsonObject, String> {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(obj)) => Ok(obj),
        Ok(other) => Err(format!("expected a json object, got {other}")),
        Err(e) => Err(format!("not json: {e}")),
    }
}

fn code_or_placeholder(obj: &JsonObject) -> String {
    field_text(obj, "code").unwrap_or_else(|| CODE_PLACEHOLDER.to_string())
}

/// Read a scalar field as display text. Strings are taken verbatim, other
/// scalars use their JSON rendering; null and missing yield `None`.
fn field_text(obj: &JsonObject, key: &str) -> Option<String> {
    match obj.get(key)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Port for the two backend endpoints.
///
/// Implementations never fail: every fault is folded into `ApiOutcome`.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn register(&self, req: &RegisterRequest) -> ApiOutcome;
    async fn login(&self, req: &LoginRequest) -> ApiOutcome;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn register_body_has_exact_keys() {
        let req = RegisterRequest {
            name: "Ali Valiyev".into(),
            telegram_id: "42".into(),
            phone_number: "+998901234567".into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"name": "Ali Valiyev", "telegramId": "42", "phoneNumber": "+998901234567"})
        );
    }

    #[test]
    fn login_body_has_exact_keys() {
        let req = LoginRequest {
            telegram_id: "42".into(),
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"telegramId": "42"}));
    }

    #[test]
    fn register_200_extracts_code() {
        let out = ApiOutcome::from_register_response(200, br#"{"code":"ABC","extra":1}"#);
        assert_eq!(out, ApiOutcome::Success("ABC".into()));
    }

    #[test]
    fn register_200_without_code_uses_placeholder() {
        let out = ApiOutcome::from_register_response(200, b"{}");
        assert_eq!(out, ApiOutcome::Success(CODE_PLACEHOLDER.into()));
    }

    #[test]
    fn register_200_with_non_json_body_is_transport_error() {
        let out = ApiOutcome::from_register_response(200, b"<html>oops</html>");
        assert!(matches!(out, ApiOutcome::TransportError(_)));
    }

    #[test]
    fn register_non_200_is_generic_failure_whatever_the_body() {
        for status in [201, 400, 429, 500] {
            let out = ApiOutcome::from_register_response(status, b"not json");
            assert_eq!(out, ApiOutcome::Failure(GENERIC_REGISTER_FAILURE.into()));
        }
    }

    #[test]
    fn login_status_table() {
        assert_eq!(
            ApiOutcome::from_login_response(200, br#"{"code":"123456"}"#),
            ApiOutcome::Success("123456".into())
        );
        assert_eq!(
            ApiOutcome::from_login_response(200, br#"{"code":123456}"#),
            ApiOutcome::Success("123456".into())
        );
        assert_eq!(
            ApiOutcome::from_login_response(400, br#"{"message":"blocked"}"#),
            ApiOutcome::Failure("blocked".into())
        );
        assert_eq!(
            ApiOutcome::from_login_response(404, br#"{"message":null}"#),
            ApiOutcome::Failure(DEFAULT_LOGIN_FAILURE.into())
        );
    }

    #[test]
    fn login_429_ignores_body() {
        assert_eq!(
            ApiOutcome::from_login_response(429, b"Too Many Requests"),
            ApiOutcome::RateLimited
        );
        assert_eq!(
            ApiOutcome::from_login_response(429, br#"{"code":"999999"}"#),
            ApiOutcome::RateLimited
        );
    }

    #[test]
    fn non_object_json_bodies_are_transport_errors() {
        let bodies: [&[u8]; 4] = [b"[]", b"null", br#""x""#, b"42"];
        for body in bodies {
            assert!(
                matches!(
                    ApiOutcome::from_register_response(200, body),
                    ApiOutcome::TransportError(_)
                ),
                "register 200 {}",
                String::from_utf8_lossy(body)
            );
            for status in [200, 400] {
                assert!(
                    matches!(
                        ApiOutcome::from_login_response(status, body),
                        ApiOutcome::TransportError(_)
                    ),
                    "login {status} {}",
                    String::from_utf8_lossy(body)
                );
            }
        }
    }

    #[test]
    fn login_non_json_error_body_is_transport_error() {
        let out = ApiOutcome::from_login_response(502, b"<html>Bad Gateway</html>");
        assert!(matches!(out, ApiOutcome::TransportError(_)));
    }
}
