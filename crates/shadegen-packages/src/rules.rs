//! Turn root packages into relocation rules.

use shadegen_core::package::PackageName;
use shadegen_core::relocation::{RelocationPrefix, RelocationRule};

use crate::observer::Observer;

/// One rule per package, in input order: `pkg -> prefix.pkg`.
pub fn relocation_rules(
    packages: &[PackageName],
    prefix: &RelocationPrefix,
    observer: &dyn Observer,
) -> Vec<RelocationRule> {
    packages
        .iter()
        .map(|package| {
            let rule = RelocationRule::new(package.clone(), prefix);
            observer.rule_generated(&rule);
            rule
        })
        .collect()
}
