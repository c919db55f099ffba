//! The `<configuration>` block of the maven-shade-plugin.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use shadegen_core::shade::ShadeConfiguration;
use shadegen_util::errors::ShadeError;

use crate::render_error;

const INDENT: usize = 4;

/// Render `conf` as a pretty-printed plugin `<configuration>` element:
///
/// ```xml
/// <configuration>
///     <artifactSet>
///         <includes>
///             <include>io.vertx:vertx-core</include>
///         </includes>
///     </artifactSet>
///     <relocations>
///         <relocation>
///             <pattern>io.vertx</pattern>
///             <shadedPattern>relocated.io.vertx</shadedPattern>
///         </relocation>
///     </relocations>
/// </configuration>
/// ```
pub fn render(conf: &ShadeConfiguration) -> Result<String, ShadeError> {
    let mut out = XmlOut {
        writer: Writer::new_with_indent(Vec::new(), b' ', INDENT),
    };

    out.start("configuration")?;

    out.start("artifactSet")?;
    out.start("includes")?;
    for include in &conf.includes {
        out.text_element("include", include)?;
    }
    out.end("includes")?;
    out.end("artifactSet")?;

    out.start("relocations")?;
    for rule in &conf.relocations {
        out.start("relocation")?;
        out.text_element("pattern", rule.pattern.as_str())?;
        out.text_element("shadedPattern", rule.shaded_pattern.as_str())?;
        out.end("relocation")?;
    }
    out.end("relocations")?;

    out.end("configuration")?;

    let mut xml = String::from_utf8(out.writer.into_inner()).map_err(render_error)?;
    xml.push('\n');
    Ok(xml)
}

struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn start(&mut self, tag: &str) -> Result<(), ShadeError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(tag)))
            .map_err(render_error)
    }

    fn end(&mut self, tag: &str) -> Result<(), ShadeError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(tag)))
            .map_err(render_error)
    }

    fn text_element(&mut self, tag: &str, text: &str) -> Result<(), ShadeError> {
        self.start(tag)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(render_error)?;
        self.end(tag)
    }
}
