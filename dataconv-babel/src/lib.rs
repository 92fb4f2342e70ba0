//! Format interoperability for structured data files
//!
//!     This crate converts data files between JSON, YAML and XML by mapping each of them to a
//!     common in-memory value (see ./value.rs) and back.
//!
//!     TLDR: For format authors:
//!         - Babel never parses or serializes any format itself, but relies on the format's libraries
//!         - A format either decodes straight into the common value (JSON, YAML) or goes through
//!           its own tree model plus a mapping step (XML).
//!         - Each format has unit tests for parsing, serializing and its lossy edges.
//!         - Cross-format behavior is tested under tests/.
//!
//! Architecture
//!
//!     The common value is `serde_json::Value` built with `preserve_order`, so mapping keys keep
//!     their insertion order on output. Formats implement the Format trait (./format.rs), the
//!     FormatRegistry (./registry.rs) dispatches on file suffixes and the Converter
//!     (./convert.rs) runs the load → save pipeline.
//!
//!     This is a pure lib, that is, it powers dataconv-cli but is shell agnostic: no code here
//!     prints, reads env vars or exits the process. Diagnostics are returned as values and
//!     logged through `tracing`.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── value.rs                # Common value re-export and helpers
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry: suffix dispatch table
//!     ├── convert.rs              # Conversion driver
//!     ├── formats
//!     │   ├── json
//!     │   ├── yaml
//!     │   └── xml
//!     │       ├── tree.rs         # Markup tree
//!     │       ├── parser.rs       # XML text -> markup tree
//!     │       ├── mapping.rs      # markup tree <-> common value
//!     │       └── serializer.rs   # markup tree -> XML text
//!     └── lib.rs
//!
//! Error Handling
//!
//!     Loading is soft: parse and read failures come back from the Converter as
//!     Outcome::LoadFailed and the pipeline stops without writing anything. Saving is hard:
//!     serialization and write failures come back as ConvertError and are meant to abort the
//!     caller.
//!
//! Lossy Conversions
//!
//!     XML only carries untyped text, so numbers, booleans and nulls written to XML come back as
//!     strings (or null for empty elements). Repeated sibling tags collapse to the last one, and
//!     sequences have no native XML representation (see formats/xml/mod.rs).
//!
//!     YAML can spell infinities and NaN (.inf, .nan) but the common value cannot hold them.
//!     Such documents fail to load with a parse error instead of turning those numbers into
//!     null.
//!
pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod value;

pub use convert::{convert, Converter, Outcome};
pub use error::{ConvertError, FormatError};
pub use format::Format;
pub use formats::FormatOptions;
pub use registry::FormatRegistry;
pub use value::Value;
