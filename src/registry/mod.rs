//! Boilerplate registry over the local mirror.
//!
//! Boilerplates are not stored anywhere else: an entry exists exactly when a
//! file named `<Name>.gitignore` exists somewhere below the mirror root.
//!
//! # Resolution Order
//!
//! Lookups are case-insensitive and the first match wins. The tree is walked
//! depth-first with entries sorted by file name, so `Go.gitignore` at the
//! root beats `community/Go.gitignore`.
//!
//! # Example
//!
//! ```no_run
//! use gibo::registry::BoilerplateIndex;
//!
//! let index = BoilerplateIndex::new("/home/me/.cache/gibo", ".gitignore");
//! let path = index.resolve("rust").unwrap();
//! println!("Rust boilerplate: {}", path.display());
//! ```

pub mod entry;
pub mod index;

pub use entry::{lookup_key, BoilerplateEntry};
pub use index::BoilerplateIndex;
