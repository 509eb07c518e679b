//! Layout resolution from declarative documents and window counts

use wtgrid::config::{parse_layout, Settings};
use wtgrid::layout::{parse_count, resolve, LayoutSource};
use wtgrid::ConfigError;

fn settings() -> Settings {
    Settings::default()
}

#[test]
fn full_document_resolves_every_shape() {
    let doc = r#"
windows:
  - target: editor
    label: Editor
    launch_mode: maximized
    tabs:
      - command: vim .
        title: code
        profile: Ubuntu
        starting_directory: /home/dev/project
        focus: true
      - htop
  - ["mix test", "iex -S mix"]
  - tail -f /var/log/syslog
"#;

    let layout = parse_layout(doc).expect("document parses");
    let windows = resolve(LayoutSource::Explicit(layout), &settings()).expect("resolves");

    assert_eq!(windows.len(), 3);

    let editor = &windows[0];
    assert_eq!(editor.target, "editor");
    assert_eq!(editor.label, "Editor");
    assert_eq!(editor.launch_mode, "maximized");
    assert_eq!(editor.tabs.len(), 2);
    assert_eq!(editor.tabs[0].label, "code");
    assert_eq!(editor.tabs[0].profile, "Ubuntu");
    assert_eq!(editor.tabs[0].starting_directory, "/home/dev/project");
    assert!(editor.tabs[0].focus);
    assert_eq!(editor.tabs[1].command, "htop");
    assert!(editor.tabs[1].label.is_empty());

    let pair = &windows[1];
    assert_eq!(pair.tabs.len(), 2);
    assert_eq!(pair.tabs[0].command, "mix test");
    assert!(pair.target.starts_with("w-"));

    let single = &windows[2];
    assert_eq!(single.tabs.len(), 1);
    assert_eq!(single.tabs[0].command, "tail -f /var/log/syslog");
}

#[test]
fn mapping_without_windows_key_fails() {
    let err = parse_layout("session: dev\ncount: 3\n").unwrap_err();
    assert!(matches!(err, ConfigError::MissingWindows));
}

#[test]
fn unsupported_entry_reports_position() {
    let err = parse_layout("windows:\n  - vim\n  - true\n").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedEntry { index: 1 }));
}

#[test]
fn empty_windows_sequence_resolves_to_nothing() {
    let layout = parse_layout("windows: []\n").expect("parses");
    let windows = resolve(LayoutSource::Explicit(layout), &settings()).expect("resolves");
    assert!(windows.is_empty());
}

#[test]
fn auto_tiled_layout_is_fully_populated() {
    let windows = resolve(LayoutSource::Count(6), &settings()).expect("resolves");
    assert_eq!(windows.len(), 6);

    for window in &windows {
        assert!(!window.target.is_empty());
        assert!(!window.uuid.is_empty());
        assert_eq!(window.label, window.target);
        assert!(window.position.is_some());
        assert!(window.size.is_some());
        assert!(window.pixel_rect.is_some());
        assert_eq!(window.tabs.len(), 1);
        assert!(window.tabs[0].command.is_empty());
    }

    // Targets must be unique, they address distinct windows.
    let mut targets: Vec<_> = windows.iter().map(|w| w.target.clone()).collect();
    targets.sort();
    targets.dedup();
    assert_eq!(targets.len(), 6);
}

#[test]
fn counts_outside_range_are_rejected() {
    let settings = settings();
    for bad in ["0", "1", "25", "-3", "four", ""] {
        assert!(
            matches!(parse_count(bad, &settings), Err(ConfigError::InvalidCount { .. })),
            "`{}` should be rejected",
            bad
        );
    }
    assert_eq!(parse_count("2", &settings).unwrap(), 2);
    assert_eq!(parse_count("24", &settings).unwrap(), 24);
}
