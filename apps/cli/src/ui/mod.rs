use console::style;
use vendorize::application::RunReport;

pub fn success(message: impl AsRef<str>) {
    eprintln!("{} {}", style("✔").green().bold(), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", style("⚠").yellow().bold(), message.as_ref());
}

/// One-line wrap-up of a run, on stderr.
pub fn summary(report: &RunReport) {
    let copied = match report.copied.len() {
        1 => "1 package".to_string(),
        n => format!("{} packages", n),
    };
    if report.is_clean() {
        success(format!("Vendored {}", copied));
    } else {
        warn(format!(
            "Vendored {} with {} problem(s) reported above",
            copied,
            report.issues.len()
        ));
    }
    if !report.gaps.is_empty() {
        warn(format!(
            "{} package(s) are only vendored by other modules; run again after vendoring them directly",
            report.gaps.len()
        ));
    }
}
