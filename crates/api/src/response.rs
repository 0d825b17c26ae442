//! Shared response envelope for API handlers.
//!
//! Every success body carries `"success": true` next to its payload
//! fields; every error body is `{ "success": false, "errors": [{ "msg":
//! ... }] }`. Use [`error_body`] instead of ad-hoc JSON so the error
//! shape stays consistent across handlers and middleware.

use serde::Serialize;

/// One entry of the `errors` array in an error response.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub msg: String,
}

/// Error envelope: `{ "success": false, "errors": [{ "msg": ... }] }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub errors: Vec<ErrorMessage>,
}

/// Build the standard error envelope from a list of messages.
pub fn error_body(messages: Vec<String>) -> ErrorBody {
    ErrorBody {
        success: false,
        errors: messages.into_iter().map(|msg| ErrorMessage { msg }).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_shape() {
        let body = error_body(vec!["first".to_string(), "second".to_string()]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0]["msg"], "first");
        assert_eq!(json["errors"][1]["msg"], "second");
    }
}
