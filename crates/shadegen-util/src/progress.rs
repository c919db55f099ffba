//! Status lines written to stderr while archives are analysed.
//!
//! Labels line up in a 12-column gutter so that a run reads as one column of
//! verbs (`Including`, `Scanning`, `Relocating`, `Wrote`).

use std::io::Write;

use console::Style;

/// Report a step of the analysis in green, e.g. `    Scanning vertx-core-3.8.0.jar`.
pub fn status(label: &str, message: &str) {
    let green_bold = Style::new().green().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        green_bold.apply_to(label),
    );
}

/// Report a detail of the run in cyan: an included artifact, a root or an omitted package.
pub fn status_info(label: &str, message: &str) {
    let cyan_bold = Style::new().cyan().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        cyan_bold.apply_to(label),
    );
}

/// Report in yellow something that was left out of the configuration.
pub fn status_warn(label: &str, message: &str) {
    let yellow_bold = Style::new().yellow().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        yellow_bold.apply_to(label),
    );
}
