// Admin gate for mutating routes
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Coerce a caller-supplied `userId` to a number.
///
/// JSON numbers are taken as-is and numeric strings are parsed after trimming.
/// Anything else (missing, null, bool, empty or non-numeric string) has no
/// numeric value and never matches.
pub fn coerce_user_id(user_id: Option<&Value>) -> Option<f64> {
    match user_id? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

/// Accept the request only when `user_id` numerically equals `admin_id`.
///
/// This compares an identity the caller claims for itself; nothing signs or
/// verifies it, so it is not authentication. A signed session or API-key gate
/// can replace this without changing the handlers.
pub fn ensure_admin(user_id: Option<&Value>, admin_id: i64) -> AppResult<()> {
    match coerce_user_id(user_id) {
        Some(id) if id == admin_id as f64 => Ok(()),
        _ => {
            tracing::warn!("Rejected write from non-admin user id {:?}", user_id);
            Err(AppError::AccessDenied)
        }
    }
}
