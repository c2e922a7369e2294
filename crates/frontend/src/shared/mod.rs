pub mod api_utils;
pub mod bulk_action;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod list_source;
pub mod list_state;
pub mod list_utils;
pub mod retry;
pub mod selection;
