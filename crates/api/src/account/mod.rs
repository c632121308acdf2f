//! Requests and structs in the `urn:zimbraAccount` namespace.

mod attrs;
mod auth;
mod preauth;
mod rights;

pub use attrs::Attrs;
pub use auth::Auth;
pub use preauth::PreAuth;
pub use rights::{GetRights, Right};
