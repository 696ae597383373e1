//! Input validation and normalization for wizard prompts

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// npm package name limit, reused as the OCP app id limit
pub const MAX_APP_ID_LEN: usize = 214;

/// Entries that don't count against an otherwise empty target directory
const IGNORED_ENTRIES: &[&str] = &[".git", ".DS_Store", ".gitkeep"];

static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
static INVALID_ID_CHARS_RE: OnceLock<Regex> = OnceLock::new();
static HYPHEN_RUN_RE: OnceLock<Regex> = OnceLock::new();
static TRACKER_ID_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static GITHUB_USER_RE: OnceLock<Regex> = OnceLock::new();

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn invalid_id_chars_re() -> &'static Regex {
    INVALID_ID_CHARS_RE.get_or_init(|| Regex::new(r"[^a-z0-9-]").unwrap())
}

fn hyphen_run_re() -> &'static Regex {
    HYPHEN_RUN_RE.get_or_init(|| Regex::new(r"-{2,}").unwrap())
}

fn tracker_id_re() -> &'static Regex {
    TRACKER_ID_RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap())
}

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn github_user_re() -> &'static Regex {
    // Consecutive hyphens are accepted on purpose
    GITHUB_USER_RE
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,37}[a-zA-Z0-9])?$").unwrap())
}

/// Check whether a directory is empty enough to scaffold into.
///
/// Missing paths count as empty, and so does anything that can't be read.
/// `.git`, `.DS_Store` and `.gitkeep` are ignored.
pub fn is_empty(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if !path.exists() {
        return true;
    }

    match std::fs::read_dir(path) {
        Ok(entries) => !entries.filter_map(|entry| entry.ok()).any(|entry| {
            let name = entry.file_name();
            !IGNORED_ENTRIES.iter().any(|ignored| name == *ignored)
        }),
        Err(_) => true,
    }
}

/// Convert arbitrary text into a valid app id (npm-style package name).
///
/// Lowercases, turns whitespace runs into a single hyphen, drops everything
/// outside `[a-z0-9-]`, collapses hyphen runs, truncates to
/// [`MAX_APP_ID_LEN`] and strips leading/trailing hyphens. Idempotent.
pub fn to_valid_app_id(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = whitespace_re().replace_all(lowered.trim(), "-");
    let stripped = invalid_id_chars_re().replace_all(&hyphenated, "");
    let collapsed = hyphen_run_re().replace_all(&stripped, "-");

    // Only ASCII survives the strip, so byte truncation is safe
    let truncated = &collapsed[..collapsed.len().min(MAX_APP_ID_LEN)];
    truncated.trim_matches('-').to_string()
}

/// Turn an app id into a human-readable display name (`my-app` -> `My App`)
pub fn to_display_name(app_id: &str) -> String {
    app_id
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tracker ids are letters, digits, hyphens and underscores
pub fn is_valid_tracker_id(tracker_id: &str) -> bool {
    let trimmed = tracker_id.trim();
    !trimmed.is_empty() && tracker_id_re().is_match(trimmed)
}

/// Basic shape check (`local@domain.tld`), not RFC 5322
pub fn is_valid_email(email: &str) -> bool {
    let trimmed = email.trim();
    !trimmed.is_empty() && email_re().is_match(trimmed)
}

/// GitHub usernames: 1-39 alphanumerics or hyphens, alphanumeric at both ends
pub fn is_valid_github_username(username: &str) -> bool {
    let trimmed = username.trim();
    !trimmed.is_empty() && github_user_re().is_match(trimmed)
}

/// True if anything falls outside printable ASCII (0x20..=0x7E)
pub fn has_non_printable_chars(s: &str) -> bool {
    s.chars().any(|c| !(' '..='~').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_empty_nonexistent_path() {
        assert!(is_empty("/path/that/does/not/exist"));
    }

    #[test]
    fn test_is_empty_unreadable_path_counts_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();
        assert!(is_empty(&file));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_empty_permission_denied_counts_as_empty() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.txt"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let readable = fs::read_dir(&locked).is_ok();
        let result = is_empty(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Root can still list the directory
        assert_eq!(result, !readable);
    }

    #[test]
    fn test_is_empty_empty_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(is_empty(tmp.path()));
    }

    #[test]
    fn test_is_empty_dir_with_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("test.txt"), "content").unwrap();
        assert!(!is_empty(tmp.path()));
    }

    #[test]
    fn test_is_empty_ignores_vcs_and_os_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(".DS_Store"), "").unwrap();
        fs::write(tmp.path().join(".gitkeep"), "").unwrap();
        assert!(is_empty(tmp.path()));
    }

    #[test]
    fn test_to_valid_app_id() {
        assert_eq!(to_valid_app_id("MyApp"), "myapp");
        assert_eq!(to_valid_app_id("My App Name"), "my-app-name");
        assert_eq!(to_valid_app_id("my@app!name"), "myappname");
        assert_eq!(to_valid_app_id("-my-app-"), "my-app");
        assert_eq!(to_valid_app_id("  my-app  "), "my-app");
        assert_eq!(to_valid_app_id(""), "");
        assert_eq!(to_valid_app_id("My Awesome OCP Tool!"), "my-awesome-ocp-tool");
    }

    #[test]
    fn test_to_valid_app_id_collapses_hyphens() {
        assert_eq!(to_valid_app_id("a - b"), "a-b");
        assert_eq!(to_valid_app_id("a--b"), "a-b");
    }

    #[test]
    fn test_to_valid_app_id_shape_and_idempotence() {
        let shape = Regex::new(r"^[a-z0-9](-?[a-z0-9])*$").unwrap();
        let long = format!("{}-{}", "a".repeat(213), "b".repeat(10));
        let inputs = [
            "My Awesome OCP Tool!",
            " -- weird__Name -- ",
            "Ünïcödé app",
            "!!!",
            "tab\tseparated\nlines",
            long.as_str(),
        ];

        for input in inputs {
            let id = to_valid_app_id(input);
            assert!(id.is_empty() || shape.is_match(&id), "bad shape: {:?}", id);
            assert!(id.len() <= MAX_APP_ID_LEN);
            assert_eq!(to_valid_app_id(&id), id);
        }
    }

    #[test]
    fn test_to_valid_app_id_truncation_never_ends_in_hyphen() {
        let input = format!("{}-tail", "a".repeat(213));
        let id = to_valid_app_id(&input);
        assert_eq!(id, "a".repeat(213));
    }

    #[test]
    fn test_to_display_name() {
        assert_eq!(to_display_name("my-app"), "My App");
        assert_eq!(to_display_name("app"), "App");
        assert_eq!(to_display_name("my-awesome-ocp-tool"), "My Awesome Ocp Tool");
        assert!(!to_display_name(&to_valid_app_id("Some Tool Name")).contains('-'));
    }

    #[test]
    fn test_is_valid_tracker_id() {
        assert!(is_valid_tracker_id("ABC123"));
        assert!(is_valid_tracker_id("my-tracker_id"));
        assert!(!is_valid_tracker_id(""));
        assert!(!is_valid_tracker_id("   "));
        assert!(!is_valid_tracker_id("tracker@id"));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("test@mail.example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("testexample.com"));
        assert!(!is_valid_email("test@"));
    }

    #[test]
    fn test_is_valid_github_username() {
        assert!(is_valid_github_username("octocat"));
        assert!(is_valid_github_username("octo-cat"));
        assert!(is_valid_github_username("octocat123"));
        assert!(is_valid_github_username("octo--cat"));
        assert!(!is_valid_github_username(""));
        assert!(!is_valid_github_username("-octocat"));
        assert!(!is_valid_github_username("octocat-"));
        assert!(!is_valid_github_username("octo@cat"));
        assert!(!is_valid_github_username(&"a".repeat(40)));
    }

    #[test]
    fn test_has_non_printable_chars() {
        assert!(!has_non_printable_chars("Hello World!"));
        assert!(has_non_printable_chars("Hello\tWorld"));
        assert!(has_non_printable_chars("Hello\nWorld"));
        assert!(has_non_printable_chars("café"));
    }
}
