//! Isolation boundary - hosts a preview document in a disposable,
//! privilege-restricted frame.
//!
//! One frame per render. A source change never patches an existing frame;
//! the old frame is discarded wholesale and a new one built, which throws
//! away all in-context state (DOM, variables, timers). The frame has no
//! channel back to the host: errors inside it are visible only through the
//! document's own containment layer.

use crate::document;
use crate::escape::attribute_escape;

/// The sole capability granted to the hosting frame. Everything else an
/// embedded context normally gets - parent storage, top navigation, form
/// submission, popups - stays denied.
pub const SANDBOX_PERMISSIONS: &str = "allow-scripts";

/// A disposable execution context holding exactly one preview document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFrame {
    document: String,
}

impl PreviewFrame {
    /// Build a fresh frame for the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            document: document::build(source),
        }
    }

    /// Discard this frame and build a replacement for the new source.
    /// Consumes the old frame; contexts are recreated, never mutated.
    pub fn replace(self, source: &str) -> Self {
        Self::new(source)
    }

    /// The self-contained document this frame hosts.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// The embed element the host page inserts. The whole document travels
    /// in the `srcdoc` attribute; the `sandbox` attribute carries exactly
    /// [`SANDBOX_PERMISSIONS`].
    pub fn embed_html(&self) -> String {
        format!(
            "<iframe srcdoc=\"{}\" sandbox=\"{}\" title=\"Preview\" style=\"width: 100%; height: 100%; border: none;\"></iframe>",
            attribute_escape(&self.document),
            SANDBOX_PERMISSIONS,
        )
    }
}
