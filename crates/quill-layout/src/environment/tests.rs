//! Unit tests for the environment seams and their host implementations.

use std::str::FromStr;

use rstest::rstest;
use strum::IntoEnumIterator;

use super::*;

// ---------------------------------------------------------------------------
// Path combination
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[rstest]
#[case::plain("/home/alice/Documents", &[Some("logs"), Some("app.log")], "/home/alice/Documents/logs/app.log")]
#[case::trailing_separator("/home/alice/Documents/", &[Some("logs"), Some("app.log")], "/home/alice/Documents/logs/app.log")]
#[case::dir_with_separator("/srv", &[Some("logs/"), Some("app.log")], "/srv/logs/app.log")]
#[case::file_only("/srv", &[None, Some("app.log")], "/srv/app.log")]
#[case::dir_only("/srv", &[Some("logs"), None], "/srv/logs")]
#[case::no_segments("/home/alice/Desktop", &[None, None], "/home/alice/Desktop")]
#[case::empty_segments("/srv", &[Some(""), Some("")], "/srv")]
#[case::empty_base("", &[Some("logs"), Some("app.log")], "logs/app.log")]
#[case::doubled_trailing_separator("/home/alice/Desktop", &[Some("logs//"), Some("app.log")], "/home/alice/Desktop/logs/app.log")]
#[case::doubled_inner_separator("/srv", &[Some("logs//archive"), Some("app.log")], "/srv/logs/archive/app.log")]
#[case::dir_only_with_separator("/srv", &[Some("logs/"), None], "/srv/logs")]
#[case::empty_everything("", &[None, None], "")]
fn platform_combiner_joins_segments(
    #[case] base: &str,
    #[case] segments: &[Option<&str>],
    #[case] expected: &str,
) {
    assert_eq!(PlatformPathCombiner.combine(base, segments), expected);
}

#[cfg(unix)]
#[test]
fn platform_combiner_keeps_segment_order() {
    let combined = PlatformPathCombiner.combine("/a", &[Some("b"), Some("c"), Some("d")]);
    assert_eq!(combined, "/a/b/c/d");
}

// ---------------------------------------------------------------------------
// Special folder identifiers
// ---------------------------------------------------------------------------

#[rstest]
#[case("ApplicationData", SpecialFolder::ApplicationData)]
#[case("applicationdata", SpecialFolder::ApplicationData)]
#[case("Documents", SpecialFolder::MyDocuments)]
#[case("MYDOCUMENTS", SpecialFolder::MyDocuments)]
#[case("personal", SpecialFolder::MyDocuments)]
#[case("Desktop", SpecialFolder::Desktop)]
#[case("DesktopDirectory", SpecialFolder::Desktop)]
#[case("cache", SpecialFolder::InternetCache)]
#[case("home", SpecialFolder::UserProfile)]
fn special_folder_names_parse_case_insensitively(
    #[case] input: &str,
    #[case] expected: SpecialFolder,
) {
    assert_eq!(SpecialFolder::from_str(input), Ok(expected));
}

#[test]
fn special_folder_display_round_trips() {
    for folder in SpecialFolder::iter() {
        let name = folder.to_string();
        assert_eq!(SpecialFolder::from_str(&name), Ok(folder), "{name}");
    }
}

#[test]
fn unknown_special_folder_is_rejected() {
    assert!(SpecialFolder::from_str("Attic").is_err());
}

// ---------------------------------------------------------------------------
// Host implementations
// ---------------------------------------------------------------------------

#[test]
fn host_environment_reports_test_binary() {
    let host = HostEnvironment;
    let path = host.current_process_file_path();
    let base = host.current_process_base_name();
    assert!(!path.is_empty(), "test binary path should resolve");
    assert!(!base.is_empty(), "test binary name should resolve");
    assert!(path.contains(&base), "{path} should contain {base}");
}

#[cfg(unix)]
#[test]
fn host_folders_resolve_common_application_data() {
    assert_eq!(
        HostFolders.resolve(SpecialFolder::CommonApplicationData),
        "/usr/share"
    );
}

#[cfg(unix)]
#[test]
fn host_folders_degrade_to_empty_for_windows_only_folders() {
    if std::env::var_os("SystemRoot").is_some() {
        return;
    }
    assert_eq!(HostFolders.resolve(SpecialFolder::System), "");
    assert_eq!(HostFolders.resolve(SpecialFolder::Windows), "");
}

#[test]
fn host_environment_is_the_default() {
    let environment = RendererEnvironment::default();
    assert_eq!(
        environment.info().current_process_base_name(),
        HostEnvironment.current_process_base_name()
    );
}
