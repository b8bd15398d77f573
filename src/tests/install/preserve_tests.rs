use std::path::Path;

use super::*;

#[test]
fn preserves_config_suffixes() {
    let policy = PreservePolicy::standard().expect("build policy");
    assert!(policy.preserves(Path::new("config.ini")));
    assert!(policy.preserves(Path::new("input/controller.cfg")));
    assert!(policy.preserves(Path::new("Config.INI")));
}

#[test]
fn preserves_save_and_screenshot_paths() {
    let policy = PreservePolicy::standard().expect("build policy");
    assert!(policy.preserves(Path::new("save/slot1.sav")));
    assert!(policy.preserves(Path::new("saves/slot1.st0")));
    assert!(policy.preserves(Path::new("screenshot/shot-001.png")));
    assert!(policy.preserves(Path::new("media/screenshots/shot-001.png")));
    assert!(policy.preserves(Path::new("autosave.bin")));
}

#[test]
fn does_not_preserve_managed_files() {
    let policy = PreservePolicy::standard().expect("build policy");
    assert!(!policy.preserves(Path::new("core.bin")));
    assert!(!policy.preserves(Path::new("meridian-gui")));
    assert!(!policy.preserves(Path::new("plugins/video.so")));
    assert!(!policy.preserves(Path::new("doc/readme.txt")));
}

#[test]
fn rejects_malformed_patterns() {
    assert!(PreservePolicy::from_patterns(&["**/*.{ini"]).is_err());
}
