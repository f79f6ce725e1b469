//! tscheck_binder: Symbol table construction and name resolution.
//!
//! The binder walks the AST and creates symbols, links declarations,
//! and builds the locals, members and exports tables of every scope.
//! The name resolver looks identifiers up through those scopes.

pub mod binder;
pub mod name_resolver;
pub mod symbol;

// Re-export key types
pub use binder::{bind_program, remove_file_extension, Binder, Binding, ModuleInstanceState};
pub use name_resolver::{DefaultHost, NameResolver, NameResolverHost};
pub use symbol::{internal_names, CheckFlags, Symbol, SymbolTable};
