//! tscheck_ast: Syntax tree for the tscheck type-checking core.
//!
//! Nodes live in an arena (`Ast`) and are created with `AstBuilder`,
//! which links parents and assigns positions when a file is finished.
//! `utilities` holds the tree predicates the binder and checker share.

pub mod ast;
pub mod builder;
pub mod node;
pub mod syntax_kind;
pub mod types;
pub mod utilities;
pub mod visitor;

// Re-export key types
pub use ast::Ast;
pub use builder::AstBuilder;
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use types::*;
