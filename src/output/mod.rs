//! Renderers for analyses and record views.
//!
//! - [`render_report`] - plain-text report of an [`Analysis`](crate::Analysis)
//! - [`write_json`] / [`to_json`] - the full analysis as pretty JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - record view with semicolon delimiter - requires `csv-output` feature
//! - [`summary_to_csv`] - any single summary table as CSV - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::Session;
//! use chatlens::output::{to_csv, to_json};
//!
//! let session = Session::from_text("1/15/24, 10:30 - Alice: Hello")?;
//!
//! let json = to_json(&session.analyze()?)?;
//! assert!(json.contains("\"selection\": \"Overall\""));
//!
//! let csv = to_csv(&session.view(true))?;
//! assert!(csv.starts_with("Timestamp;Sender;Content;IsMedia;HasLink"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod report;

#[cfg(feature = "csv-output")]
pub use csv_writer::{summary_to_csv, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use report::render_report;
