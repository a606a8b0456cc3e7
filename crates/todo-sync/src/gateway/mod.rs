//! Remote Gateway Layer
//!
//! Abstract CRUD interface to the remote todo collection plus its
//! HTTP implementation.

mod http;
mod traits;

pub use http::HttpGateway;
pub use traits::RemoteGateway;
