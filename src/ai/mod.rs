/// Query endpoint access for Sandalwood Bot
///
/// The answering service is external: the chat only knows how to send it a
/// question and read back a raw answer string.
///
/// - `client` - `QueryBackend` trait and the HTTP implementation
/// - `error` - `ChatError` taxonomy for failed queries
mod client;
mod error;

pub use client::{HttpQueryBackend, QueryBackend, parse_query_response};
pub use error::{ChatError, ChatResult};
