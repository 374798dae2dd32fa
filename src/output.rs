use serde::Serialize;

use crate::error::{CommandResult, QoderError};

/// Renders `value` as a single line of compact JSON.
///
/// The whole document is built in memory, so a failure never leaves partial
/// output behind.
pub fn render_json<T>(value: &T) -> CommandResult<String>
where
    T: Serialize,
{
    serde_json::to_string(value).map_err(QoderError::Encoding)
}
