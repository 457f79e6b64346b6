use serde::{Deserialize, Serialize};

/// Claims carried in the access tokens this service issues
///
/// Standard registered claims only; the subject is the user id assigned
/// by the credential store at signup.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for
    pub sub: String,

    /// Expiry (unix seconds); validation rejects tokens past this instant
    pub exp: i64,

    /// Issue time (unix seconds)
    pub iat: i64,
}
