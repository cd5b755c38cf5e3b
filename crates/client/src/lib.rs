//! Client library for the Stress Level Prediction API
//!
//! This crate provides:
//! - A thin HTTP client for the local `/predict` endpoint
//! - The error type surfaced when a prediction request fails
//!
//! # Example
//!
//! ```no_run
//! use serde_json::{json, Map, Value};
//! use stress_client::PredictionClient;
//!
//! #[tokio::main]
//! async fn main() -> stress_client::Result<()> {
//!     let mut input = Map::new();
//!     input.insert("hours_worked".to_string(), json!(60));
//!     input.insert("sleep_hours".to_string(), json!(4));
//!
//!     let client = PredictionClient::new()?;
//!     let prediction: Value = client.predict_stress_level(&input).await?;
//!     println!("{prediction}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;

pub use client::{predict_stress_level, PredictionClient, DEFAULT_API_URL};
pub use error::{PredictionError, Result};
