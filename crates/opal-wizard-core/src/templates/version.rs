//! Version comparison for wizard and template compatibility

use semver::Version;

/// Compare the wizard version against the version a template expects.
/// Returns a warning message if the wizard is older than the template.
pub fn check_compatibility(
    cli_version: &str,
    template_version: &str,
    upgrade_hint: &str,
) -> Option<String> {
    let cli_ver = parse_version(cli_version)?;
    let template_ver = parse_version(template_version)?;

    if cli_ver < template_ver {
        Some(format!(
            "This template was designed for wizard version {} or newer (running {}). {}",
            template_ver, cli_ver, upgrade_hint
        ))
    } else {
        None
    }
}

/// Parse a version string, tolerating a leading `v`
fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}
