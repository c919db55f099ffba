use shadegen_core::shade::ShadeConfiguration;
use shadegen_util::errors::ShadeError;

use crate::render_error;

/// Render `conf` as pretty JSON: `{"includes": [...], "relocations": [{"pattern", "shadedPattern"}]}`.
pub fn render(conf: &ShadeConfiguration) -> Result<String, ShadeError> {
    let mut json = serde_json::to_string_pretty(conf).map_err(render_error)?;
    json.push('\n');
    Ok(json)
}
