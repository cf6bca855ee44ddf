//! FILENAME: app/server/src/handlers.rs
// PURPOSE: HTTP handlers for expression evaluation.
// CONTEXT: Evaluation failures are domain results, so they are answered with
//          200 OK and an "err:" line. Only an unreadable request body is
//          treated as a client error at the HTTP level.

use axum::body::Bytes;
use axum::http::StatusCode;
use engine::{evaluate_expression, EvalResult};

use crate::api_types::CalcRequest;

/// Renders an evaluation outcome as the single-line response body.
pub fn format_outcome(result: &EvalResult) -> String {
    match result {
        Ok(value) => format!("result: {:.6}", value),
        Err(e) => format!("err: {}", e),
    }
}

/// `POST /` with `{"expression": "..."}`.
pub async fn calculate(body: Bytes) -> (StatusCode, String) {
    let request: CalcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("rejected request body: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                "err: invalid request body".to_string(),
            );
        }
    };

    let result = evaluate_expression(&request.expression);
    if let Err(e) = &result {
        log::info!("expression {:?} failed ({}): {}", request.expression, e.kind(), e);
    }

    (StatusCode::OK, format_outcome(&result))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{EvalError, MathError};

    #[test]
    fn test_format_success_uses_six_decimals() {
        assert_eq!(format_outcome(&Ok(4.0)), "result: 4.000000");
        assert_eq!(format_outcome(&Ok(1.0 / 3.0)), "result: 0.333333");
        assert_eq!(format_outcome(&Ok(-2.5)), "result: -2.500000");
    }

    #[test]
    fn test_format_error_line() {
        let result = Err(EvalError::Math(MathError::DivisionByZero));
        assert_eq!(format_outcome(&result), "err: division by zero");
    }
}
