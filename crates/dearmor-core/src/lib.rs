//! Extracts DER-encoded objects (certificates, private keys) from
//! PEM-armored text.
//!
//! The parser walks the source line by line, decodes each base64 body
//! between a begin/end marker pair, and hands every completed object to a
//! caller-supplied [`PemFilter`] that decides whether it is kept, dropped,
//! or ends the parse early. Decoded payloads are opaque bytes tagged with an
//! [`ObjectKind`]; no DER structure validation happens here.
//!
//! ```no_run
//! use dearmor_core::{load_by_kinds, ObjectKind};
//!
//! let pem = load_by_kinds("bundle.pem", ObjectKind::Certificate)?;
//! for obj in &pem {
//!     println!("{}: {} bytes", obj.kind(), obj.len());
//! }
//! # Ok::<(), dearmor_core::PemError>(())
//! ```

mod collection;
mod errors;
mod filter;
mod kind;
mod marker;
mod object;
mod parser;
mod source;

// Convenience re-exports
pub use collection::PemCollection;
pub use errors::PemError;
pub use filter::{AcceptAll, FilterVerdict, KindMaskFilter, PemFilter};
pub use kind::{KindMask, ObjectKind};
pub use object::DerObject;
pub use parser::{load, load_by_kinds};
pub use source::PemSource;
