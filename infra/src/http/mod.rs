//! HTTP gateway to the auth backend

mod auth_api;

pub use auth_api::HttpAuthApi;
