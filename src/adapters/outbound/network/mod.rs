/// Network adapters for the server's REST API
mod credentials;
mod iq_client;

pub use credentials::{BasicCredentials, DEFAULT_CREDENTIALS};
pub use iq_client::{IqServerClient, DEFAULT_SERVER_URL};
