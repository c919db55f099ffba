//! Drop packages already covered by another package in the same list.

use std::collections::BTreeSet;

use shadegen_core::package::PackageName;
use shadegen_util::errors::ShadeError;

use crate::observer::Observer;

/// Remove every package that lies strictly below another package of the input.
///
/// Unlike [`crate::roots::root_packages`] this never produces a name that was
/// not given: `{a.b, a.c, a.b.c}` becomes `{a.b, a.c}`, not `{a}`. The result
/// is sorted and duplicate-free.
///
/// The default package is not supported here and is rejected with
/// [`ShadeError::Precondition`]. Comparison is pairwise, which is fine for the
/// few hundred packages a build bundles.
pub fn simplify_packages<'a, I>(
    packages: I,
    observer: &dyn Observer,
) -> Result<Vec<PackageName>, ShadeError>
where
    I: IntoIterator<Item = &'a PackageName>,
{
    let all: BTreeSet<&PackageName> = packages.into_iter().collect();

    if all.iter().any(|p| p.is_default()) {
        return Err(ShadeError::Precondition {
            message: "the default package cannot be simplified; filter it out first".to_string(),
        });
    }

    let mut discarded: BTreeSet<&PackageName> = BTreeSet::new();
    for &candidate in &all {
        for &container in &all {
            if candidate.is_descendant_of(container) {
                observer.package_omitted(candidate, container);
                discarded.insert(candidate);
            }
        }
    }

    Ok(all
        .difference(&discarded)
        .map(|p| (*p).clone())
        .collect())
}
