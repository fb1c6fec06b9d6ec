//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::session::Analysis;

/// Writes an analysis to a JSON file.
///
/// # Format
/// ```json
/// {
///   "selection": "Overall",
///   "stats": {"messages": 2, "words": 3, "media": 0, "links": 0},
///   "monthly": [{"year": 2024, "month": "January", "count": 2}],
///   ...
/// }
/// ```
pub fn write_json(analysis: &Analysis, output_path: &str) -> Result<()> {
    let json = to_json(analysis)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts an analysis to a pretty-printed JSON string.
pub fn to_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}
