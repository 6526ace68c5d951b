//! Library crate for odrs-reviews
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! # Features
//!
//! - **Review Client**: One blocking GET against the ODRS REST API per run
//! - **Formatters**: Pure HTML, CSV and terminal-table renderers
//! - **Data Structures**: The immutable `Review` record and its wire shape
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`Review`, `RawReview`, `TimeConvention`)
//! - [`client`]: `ReviewSource` trait and the `OdrsClient` implementation
//! - [`output`]: Formatters and the report file sink
//! - [`browser`]: Hand-off of written reports to a viewer
//! - [`cli`]: Command-line interface definitions
//! - [`app`]: Run orchestration and exit-code mapping
//! - [`error`]: Error kinds and exit codes
//! - [`logging`]: Tracing subscriber setup

pub mod app;
pub mod browser;
pub mod cli;
pub mod client;
pub mod data;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Args, OutputType};
pub use client::{OdrsClient, ReviewSource};
pub use data::{Review, TimeConvention};
pub use error::ReviewError;
