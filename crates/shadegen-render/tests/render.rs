use shadegen_core::config::OutputFormat;
use shadegen_core::package::PackageName;
use shadegen_core::relocation::{RelocationPrefix, RelocationRule};
use shadegen_core::shade::ShadeConfiguration;
use shadegen_render::render;

fn sample() -> ShadeConfiguration {
    let prefix = RelocationPrefix::parse("relocated.").unwrap();
    ShadeConfiguration {
        includes: vec!["io.vertx:vertx-core".to_string(), "io.netty:netty-buffer".to_string()],
        relocations: vec![
            RelocationRule::new(PackageName::parse("com.fasterxml.jackson").unwrap(), &prefix),
            RelocationRule::new(PackageName::parse("io").unwrap(), &prefix),
        ],
    }
}

#[test]
fn test_xml_structure() {
    let xml = render(&sample(), OutputFormat::Xml).unwrap();
    assert!(xml.trim_start().starts_with("<configuration>"), "got: {xml}");
    assert!(xml.trim_end().ends_with("</configuration>"), "got: {xml}");
    assert!(xml.contains("<include>io.vertx:vertx-core</include>"));
    assert!(xml.contains("<include>io.netty:netty-buffer</include>"));
    assert!(xml.contains("<pattern>com.fasterxml.jackson</pattern>"));
    assert!(xml.contains("<shadedPattern>relocated.com.fasterxml.jackson</shadedPattern>"));
    assert!(xml.contains("<shadedPattern>relocated.io</shadedPattern>"));

    let artifact_set = xml.find("<artifactSet>").unwrap();
    let relocations = xml.find("<relocations>").unwrap();
    assert!(artifact_set < relocations);
    assert!(
        xml.find("com.fasterxml.jackson</pattern>").unwrap() < xml.find("<pattern>io</pattern>").unwrap()
    );
}

#[test]
fn test_xml_is_indented() {
    let xml = render(&sample(), OutputFormat::Xml).unwrap();
    assert!(xml.contains("\n    <artifactSet>"), "got: {xml}");
    assert!(xml.lines().count() > 10);
}

#[test]
fn test_xml_escapes_text() {
    let conf = ShadeConfiguration {
        includes: vec!["a&b:c<d".to_string()],
        relocations: Vec::new(),
    };
    let xml = render(&conf, OutputFormat::Xml).unwrap();
    assert!(xml.contains("a&amp;b:c&lt;d"), "got: {xml}");
}

#[test]
fn test_json_roundtrip() {
    let json = render(&sample(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["includes"][0], "io.vertx:vertx-core");
    assert_eq!(value["relocations"][1]["pattern"], "io");
    assert_eq!(value["relocations"][1]["shadedPattern"], "relocated.io");

    let back: ShadeConfiguration = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sample());
}
