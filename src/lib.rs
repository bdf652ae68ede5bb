//! # Preview Sandbox
//!
//! A minimal, safe live-preview pipeline: arbitrary source text goes in,
//! a self-contained document comes out, and a disposable sandboxed frame
//! hosts whatever that document does.
//!
//! ## Security Guarantees
//!
//! - **Pure compilation**: `build` is a deterministic string transform with
//!   no hidden inputs
//! - **No markup escape**: script-terminating sequences in source text are
//!   neutralized before substitution
//! - **Single capability**: the hosting frame's allow-list is exactly
//!   `allow-scripts` - no parent DOM, storage, navigation, forms, or popups
//! - **Disposable contexts**: every source change discards the previous
//!   frame wholesale; no state survives a rebuild
//! - **Failure containment**: transpile and execution errors render inside
//!   the frame's mount point and never reach the host
//!
//! ## Usage
//!
//! ```rust,ignore
//! use preview_sandbox::PreviewFrame;
//!
//! let frame = PreviewFrame::new("function ExampleComponent() { return <p>hi</p>; }");
//! println!("{}", frame.embed_html());
//!
//! // On the next edit: replace, never patch.
//! let frame = frame.replace("function ExampleComponent() { return <p>edited</p>; }");
//! ```

mod chat;
mod document;
mod escape;
mod frame;
mod server;

pub use chat::{assistant_reply, Message, Role, ASSISTANT_REPLY, REPLY_DELAY};
pub use document::{build, DEPENDENCIES, ENTRY_POINT, MOUNT_POINT_ID};
pub use frame::{PreviewFrame, SANDBOX_PERMISSIONS};
pub use server::{router, serve, ChatRequest, PreviewRequest, PreviewResponse};
