//! Client for the [agify.io](https://agify.io) age prediction API.
//!
//! ```no_run
//! # async fn run() -> Result<(), agify::Error> {
//! let client = agify::AgifyClient::builder().with_api_key("my-key").build();
//! let resp = client.predict_with_country("michael", "US").await;
//! if let Some(rate) = &resp.rate_limit {
//!     println!("{} requests left", rate.remaining);
//! }
//! let prediction = resp.into_result()?;
//! println!("{} is probably {}", prediction.name, prediction.age);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod types;

pub use client::{AgifyClient, ClientBuilder};
pub use config::Config;
pub use error::{Error, Result};
pub use types::{ApiResponse, Prediction, RateLimit};
