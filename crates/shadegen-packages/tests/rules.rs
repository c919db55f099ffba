mod common;

use std::collections::BTreeSet;

use common::write_jar;
use shadegen_core::package::PackageName;
use shadegen_core::relocation::RelocationPrefix;
use shadegen_packages::observer::SilentObserver;
use shadegen_packages::roots::root_packages;
use shadegen_packages::rules::relocation_rules;
use shadegen_packages::scanner::scan_packages;
use shadegen_packages::simplify::simplify_packages;
use tempfile::TempDir;

fn names(list: &[&str]) -> Vec<PackageName> {
    list.iter().map(|s| PackageName::parse(s).unwrap()).collect()
}

#[test]
fn test_one_rule_per_package_in_order() {
    let prefix = RelocationPrefix::parse("relocated.").unwrap();
    let rules = relocation_rules(&names(&["com.a", "io.vertx", "org.b"]), &prefix, &SilentObserver);
    let pairs: Vec<(&str, &str)> = rules
        .iter()
        .map(|r| (r.pattern.as_str(), r.shaded_pattern.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("com.a", "relocated.com.a"),
            ("io.vertx", "relocated.io.vertx"),
            ("org.b", "relocated.org.b"),
        ]
    );
}

#[test]
fn test_no_packages_no_rules() {
    let prefix = RelocationPrefix::parse("x").unwrap();
    assert!(relocation_rules(&[], &prefix, &SilentObserver).is_empty());
}

#[test]
fn test_end_to_end_from_archives() {
    let tmp = TempDir::new().unwrap();
    let jars = [
        write_jar(
            tmp.path(),
            "vertx.jar",
            &[
                "META-INF/",
                "META-INF/MANIFEST.MF",
                "io/",
                "io/vertx/",
                "io/vertx/core/",
                "io/vertx/core/Vertx.class",
                "io/vertx/core/impl/",
                "io/vertx/core/impl/VertxImpl.class",
            ],
        ),
        write_jar(
            tmp.path(),
            "netty.jar",
            &["io/", "io/netty/", "io/netty/buffer/", "io/netty/buffer/ByteBuf.class"],
        ),
        write_jar(
            tmp.path(),
            "jackson.jar",
            &[
                "com/",
                "com/fasterxml/",
                "com/fasterxml/jackson/",
                "com/fasterxml/jackson/core/",
                "com/fasterxml/jackson/core/JsonParser.class",
                "com/fasterxml/jackson/databind/",
                "com/fasterxml/jackson/databind/ObjectMapper.class",
            ],
        ),
    ];

    let mut all = BTreeSet::new();
    for jar in &jars {
        all.extend(scan_packages(jar, &SilentObserver).unwrap());
    }

    let roots = root_packages(&all, &SilentObserver);
    let simplified = simplify_packages(&roots, &SilentObserver).unwrap();
    let prefix = RelocationPrefix::parse("relocated").unwrap();
    let rules = relocation_rules(&simplified, &prefix, &SilentObserver);

    assert_eq!(simplified, names(&["com.fasterxml.jackson", "io"]));
    for rule in &rules {
        assert_eq!(
            rule.shaded_pattern.as_str(),
            format!("relocated.{}", rule.pattern)
        );
        for other in &rules {
            assert!(!rule.pattern.is_descendant_of(&other.pattern));
        }
    }
}
