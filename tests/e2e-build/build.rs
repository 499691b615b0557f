fn main() {
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let wrappers = out_dir.join("system_wrappers");

    // Generate wrappers the way a C/C++ build would before compiling.
    syswrap::gen_wrappers(
        &wrappers,
        &[
            "stdio.h",
            "wayland-util.h",
            "wayland-client.h",
            "media/AudioSystem.h",
        ],
    )
    .expect("syswrap failed");

    println!("cargo:rustc-env=SYSTEM_WRAPPERS_DIR={}", wrappers.display());

    // Rerun if sources change
    println!("cargo:rerun-if-changed=../../syswrap/src/");
}
