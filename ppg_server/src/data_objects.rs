use serde::{Deserialize, Serialize};

/// Query string for the `/signup` route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupParams {
    pub payee_id: String,
}

/// Body of an unrecognised notification callback.
pub const NOT_VALID_TYPE: &str = "Not valid type";
