//! Authentication and session-token library
//!
//! Provides the token lifecycle building blocks used by the session service:
//! - Password hashing (Argon2id)
//! - Signed claim sets (HS256 JWT) with strict expiry
//! - Access/refresh token pair issuance
//! - Authentication coordination
//!
//! Persistence of issued pairs is left to the service.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let claims = Claims::access("user123", Utc::now(), Duration::minutes(30));
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded, claims);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Subject};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token pair
//! let subject = Subject {
//!     id: "user123".to_string(),
//!     email: "alice@example.com".to_string(),
//!     first_name: "Alice".to_string(),
//!     last_name: "Liddell".to_string(),
//!     role: "user".to_string(),
//! };
//! let pair = auth.authenticate("password123", &hash, &subject).unwrap();
//!
//! // Gate a request, then rotate
//! let claims = auth.validate_access_token(&pair.access_token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! let refresh = auth.validate_refresh_token(&pair.refresh_token).unwrap();
//! assert_eq!(refresh.sub, "user123");
//! ```

pub mod authenticator;
pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use issuer::Subject;
pub use issuer::TokenIssuer;
pub use issuer::TokenPair;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenType;
pub use password::PasswordError;
pub use password::PasswordHasher;
