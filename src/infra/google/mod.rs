// Google infra layer.
// - `service_account_auth.rs` turns a key file into an access token.
// - `drive_client.rs` calls the Drive v3 export endpoint.

pub mod drive_client;
pub mod service_account_auth;

pub use drive_client::DriveClient;
pub use service_account_auth::ServiceAccountAuth;
