//! CollegeFootballData.com (CFBD) API integration.

pub mod client;
pub mod types;

pub use client::{CfbdClient, API_KEY_ENV_VAR, CFBD_BASE_URL};
