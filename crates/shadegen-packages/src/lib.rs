//! Package-hierarchy analysis for dependency relocation.
//!
//! The pipeline is: [`scanner::scan_packages`] once per archive, union of the
//! results, [`roots::root_packages`], [`simplify::simplify_packages`] and
//! finally [`rules::relocation_rules`]. Every step is a pure function of its
//! inputs plus an explicitly passed [`observer::Observer`].

pub mod observer;
pub mod roots;
pub mod rules;
pub mod scanner;
pub mod simplify;
