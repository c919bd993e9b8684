pub mod analysis;
pub mod events_store;
pub mod flatten;
pub mod http_client;
pub mod i18n;
pub mod resolve;
pub mod state;
pub mod stats_api;
pub mod summary;
pub mod vision;
