//! Services: backend API, session token handling and the screen flows built on them

pub mod api;
pub mod auth;
pub mod orders;
pub mod storage;
pub mod token;
