//! Wrapper text composition — header name → wrapper file content.
//!
//! Every wrapper has the same shape:
//!
//! ```text
//! #pragma GCC system_header
//! #pragma GCC visibility push(default)
//! {includes}
//! #pragma GCC visibility pop
//! ```
//!
//! where `{includes}` is `#include_next <name>` plus whatever [`Fixup`] the
//! header name selects.

const PREAMBLE: &str = "#pragma GCC system_header\n#pragma GCC visibility push(default)\n";
const POSTAMBLE: &str = "\n#pragma GCC visibility pop\n";

/// Macros undefined around `AudioSystem.h`. AOSP 13's `AudioStreamType.h`
/// declares an enumerator that collides with Gecko's `ACCESSIBILITY` define.
pub const AUDIO_SYSTEM_MACROS: &[&str] = &["ACCESSIBILITY"];

/// Header-specific adjustment applied around the `#include_next` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixup {
    /// Plain pass-through.
    None,
    /// `#include <math.h>` first. wayland < 1.12 includes math.h inside an
    /// `extern "C"` block, which breaks C++ consumers.
    ForceMathInclude,
    /// `#include "wayland-util.h"` first, so our wrapper wins over the copy
    /// next to the system `wayland-client.h`.
    SiblingWaylandUtil,
    /// Push, undefine, and afterwards pop each named macro.
    UndefMacros(&'static [&'static str]),
}

impl Fixup {
    /// Select the fixup for a header name. Matching is exact; the first
    /// matching case wins.
    pub fn for_header(header: &str) -> Self {
        match header {
            "wayland-util.h" => Fixup::ForceMathInclude,
            "wayland-client.h" => Fixup::SiblingWaylandUtil,
            _ if file_name(header) == "AudioSystem.h" => Fixup::UndefMacros(AUDIO_SYSTEM_MACROS),
            _ => Fixup::None,
        }
    }

    /// Apply the fixup to the default `#include_next` directive.
    fn apply(self, directive: String) -> String {
        match self {
            Fixup::None => directive,
            Fixup::ForceMathInclude => format!("#include <math.h>\n{directive}"),
            Fixup::SiblingWaylandUtil => format!("#include \"wayland-util.h\"\n{directive}"),
            Fixup::UndefMacros(macros) => undef_macros(&directive, macros),
        }
    }
}

/// Last `/`-separated segment of a header name.
fn file_name(header: &str) -> &str {
    header.rsplit('/').next().unwrap_or(header)
}

/// The pass-through directive for `header`.
pub fn include_next(header: &str) -> String {
    format!("#include_next <{header}>")
}

/// Wrap `body` in `push_macro`/`#undef`/`pop_macro` scaffolding.
///
/// All pushes come first, then all undefs, then `body`, then the pops, each
/// group in `macros` order.
pub fn undef_macros(body: &str, macros: &[&str]) -> String {
    let mut out = String::new();
    for m in macros {
        out.push_str(&format!("#pragma push_macro(\"{m}\")\n"));
    }
    for m in macros {
        out.push_str(&format!("#undef {m}\n"));
    }
    out.push_str(body);
    for m in macros {
        out.push_str(&format!("\n#pragma pop_macro(\"{m}\")"));
    }
    out
}

/// Render the complete wrapper file for `header`.
pub fn render(header: &str) -> String {
    let includes = Fixup::for_header(header).apply(include_next(header));
    format!("{PREAMBLE}{includes}{POSTAMBLE}")
}
