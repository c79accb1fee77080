//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` and `SessionIssuer` ports:
//!
//! - `jwt` - HS256 tokens signed with the shared server secret
//! - `mock` - Test implementation that doesn't sign anything

mod jwt;
mod mock;

pub use jwt::JwtSessionCodec;
pub use mock::MockSessionCodec;
