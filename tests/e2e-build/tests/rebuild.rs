//! The build script's output directory must survive a second generation
//! pass untouched.

use std::path::Path;

#[test]
fn rerunning_generation_rewrites_nothing() {
    let dir = Path::new(env!("SYSTEM_WRAPPERS_DIR"));
    let headers = ["stdio.h", "wayland-util.h", "wayland-client.h", "media/AudioSystem.h"];

    let report = syswrap::gen_wrappers(dir, &headers).expect("regenerate wrappers");
    assert_eq!(report.unchanged(), headers.len(), "report: {report:?}");
}
