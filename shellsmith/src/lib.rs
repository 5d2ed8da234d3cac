//! Shell command synthesis from structured options
//!
//! `shellsmith` turns the fields of a small form (a file name, a few flags,
//! a choice of action) into the command line a user would otherwise look up
//! in a man page. It never runs anything: every tool is a pure function from
//! an [`OptionSet`] to a string.
//!
//! # Architecture
//!
//! - **Tools**: one [`ToolSpec`] per command family, declaring its fields and
//!   a synthesis rule
//! - **Registry**: [`ToolRegistry`] dispatches by tool name
//! - **Resolution**: [`OptionSet::resolve`] fills defaults, coerces types and
//!   clamps numbers so synthesis is total
//! - **Strict parsing**: [`OptionSet::parse_assignment`] rejects bad input at
//!   the CLI boundary with a typed [`SmithError`]
//!
//! ```rust
//! use shellsmith::{OptionSet, ToolRegistry};
//!
//! let registry = ToolRegistry::with_builtin_tools();
//! let options = OptionSet::new()
//!     .with("owner", "user")
//!     .with("group", "admin")
//!     .with("path", "/var/www")
//!     .with("recursive", true);
//! let generated = registry.generate("chown", &options).unwrap();
//! assert_eq!(generated.command, "sudo chown -R user:admin /var/www");
//! ```

pub mod command_line;
pub mod error;
pub mod options;
pub mod quote;
pub mod registry;
pub mod tools;
pub mod types;

pub use command_line::CommandLine;
pub use error::{Result, SmithError};
pub use options::{parse_bool, OptionSet};
pub use registry::{Annotation, GeneratedCommand, ToolFamily, ToolRegistry, ToolSpec};
pub use types::{FieldDef, FieldType, OptionValue, SelectOption};

/// Version of the shellsmith library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
