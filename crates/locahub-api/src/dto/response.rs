use serde::Serialize;

/// Uniform response envelope. Every endpoint, success or failure,
/// answers with this shape so clients can branch on `status` alone.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T> {
    pub status: &'static str,
    pub message: String,
    pub data: Option<T>,
    /// Server version, lets clients detect deployments.
    pub v: &'static str,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

impl<T> ApiEnvelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data: Some(data),
            v: VERSION,
        }
    }

    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data: None,
            v: VERSION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            data: None,
            v: VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_serializes_all_fields() {
        let envelope = ApiEnvelope::success("ok", serde_json::json!({"n": 1}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "ok");
        assert_eq!(value["data"]["n"], 1);
        assert_eq!(value["v"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn error_envelope_has_null_data() {
        let envelope = ApiEnvelope::<()>::error("nope");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "error");
        assert!(value["data"].is_null());
    }
}
