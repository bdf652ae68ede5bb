//! Document builder - compiles raw source text into a self-contained preview
//! document.
//!
//! `build` is a pure string transform: the same source always yields a
//! byte-identical document. The produced document contains, in order:
//! - the three runtime dependencies (view library, DOM renderer, in-browser
//!   transpiler)
//! - the mount point element
//! - an error hook that renders uncaught failures into the mount point
//! - one executable block holding the normalized source followed by the
//!   mount call
//!
//! Source text is attacker-controlled; every markup-breaking sequence is
//! neutralized before substitution so the executable block can only be
//! closed by the builder's own tag.

use crate::escape::neutralize_markup;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// The well-known name the mount call expects the user's top-level
/// component to be bound to. Source that never declares it fails at
/// execution time and is handled by the containment layer.
pub const ENTRY_POINT: &str = "ExampleComponent";

/// Id of the element the entry point renders into.
pub const MOUNT_POINT_ID: &str = "root";

/// Runtime libraries loaded, in order, before the injected source executes.
/// Fixed per build; never derived from the source text.
pub const DEPENDENCIES: [&str; 3] = [
    "https://unpkg.com/react@17/umd/react.development.js",
    "https://unpkg.com/react-dom@17/umd/react-dom.development.js",
    "https://unpkg.com/babel-standalone@6/babel.min.js",
];

/// Trailing default-export clause: the last line starting with
/// `export default`, optionally semicolon-terminated, anchored to the end
/// of the text. Mid-source export lines are left untouched.
static DEFAULT_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^export\s+default\b[^\n]*\s*\z").expect("default export pattern")
});

const STYLE_BLOCK: &str = "    <style>\n      body { margin: 0; font-family: sans-serif; }\n      .preview-error { color: #c0392b; font-family: monospace; white-space: pre-wrap; margin: 0; padding: 8px; }\n    </style>\n";

/// Containment layer one: catches everything the try/catch in the
/// executable block cannot see - transpiler failures raised by
/// babel-standalone and errors thrown later from event handlers.
const ERROR_HOOK: &str = "    <script>\n      function showPreviewError(err) {\n        var mount = document.getElementById('root');\n        var pre = document.createElement('pre');\n        pre.className = 'preview-error';\n        pre.textContent = String(err);\n        mount.textContent = '';\n        mount.appendChild(pre);\n      }\n      window.addEventListener('error', function (event) {\n        showPreviewError(event.error || event.message);\n      });\n    </script>\n";

/// Compile source text into a complete preview document.
///
/// The trailing default-export clause is stripped so the entry point stays
/// declared but not exported, then markup-breaking sequences are
/// neutralized, then the result is substituted into the executable block.
pub fn build(source: &str) -> String {
    let normalized = strip_default_export(source);
    let safe = neutralize_markup(&normalized);

    let mut doc = String::with_capacity(safe.len() + 2048);
    doc.push_str("<!DOCTYPE html>\n<html>\n  <head>\n");
    for dep in DEPENDENCIES {
        doc.push_str("    <script src=\"");
        doc.push_str(dep);
        doc.push_str("\"></script>\n");
    }
    doc.push_str(STYLE_BLOCK);
    doc.push_str("  </head>\n  <body>\n");
    doc.push_str("    <div id=\"");
    doc.push_str(MOUNT_POINT_ID);
    doc.push_str("\"></div>\n");
    doc.push_str(ERROR_HOOK);
    // Containment layer two: the executable block itself. The mount call
    // comes last - it references identifiers defined by the dependencies
    // and by the source above it.
    doc.push_str("    <script type=\"text/babel\">\n      try {\n");
    doc.push_str(&safe);
    if !safe.ends_with('\n') {
        doc.push('\n');
    }
    doc.push_str("        ReactDOM.render(<");
    doc.push_str(ENTRY_POINT);
    doc.push_str(" />, document.getElementById('");
    doc.push_str(MOUNT_POINT_ID);
    doc.push_str("'));\n      } catch (error) {\n        showPreviewError(error);\n      }\n    </script>\n  </body>\n</html>\n");
    doc
}

fn strip_default_export(source: &str) -> Cow<'_, str> {
    DEFAULT_EXPORT.replace(source, "")
}
