//! Serializers for a [`ShadeConfiguration`].

pub mod json;
pub mod xml;

use shadegen_core::config::OutputFormat;
use shadegen_core::shade::ShadeConfiguration;
use shadegen_util::errors::ShadeError;

/// Render `conf` in the requested format.
pub fn render(conf: &ShadeConfiguration, format: OutputFormat) -> Result<String, ShadeError> {
    match format {
        OutputFormat::Xml => xml::render(conf),
        OutputFormat::Json => json::render(conf),
    }
}

fn render_error(e: impl std::fmt::Display) -> ShadeError {
    ShadeError::Render {
        message: e.to_string(),
    }
}
