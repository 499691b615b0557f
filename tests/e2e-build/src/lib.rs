//! Wrappers generated by `build.rs`, exposed as compile-time strings.

pub const STDIO_H: &str = include_str!(concat!(env!("SYSTEM_WRAPPERS_DIR"), "/stdio.h"));
pub const WAYLAND_UTIL_H: &str =
    include_str!(concat!(env!("SYSTEM_WRAPPERS_DIR"), "/wayland-util.h"));
pub const WAYLAND_CLIENT_H: &str =
    include_str!(concat!(env!("SYSTEM_WRAPPERS_DIR"), "/wayland-client.h"));
pub const AUDIO_SYSTEM_H: &str =
    include_str!(concat!(env!("SYSTEM_WRAPPERS_DIR"), "/media/AudioSystem.h"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_wrapper_has_visibility_scope() {
        for w in [STDIO_H, WAYLAND_UTIL_H, WAYLAND_CLIENT_H, AUDIO_SYSTEM_H] {
            assert!(w.starts_with("#pragma GCC system_header\n#pragma GCC visibility push(default)\n"));
            assert!(w.ends_with("#pragma GCC visibility pop\n"));
        }
    }

    #[test]
    fn test_include_next_targets() {
        assert!(STDIO_H.contains("#include_next <stdio.h>"));
        assert!(WAYLAND_UTIL_H.contains("#include <math.h>\n#include_next <wayland-util.h>"));
        assert!(WAYLAND_CLIENT_H.contains("#include \"wayland-util.h\"\n#include_next <wayland-client.h>"));
        assert!(AUDIO_SYSTEM_H.contains("#undef ACCESSIBILITY\n#include_next <media/AudioSystem.h>"));
    }
}
