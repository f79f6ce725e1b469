//! tscheck_checker: Types, grammar checks and the checker driver.
//!
//! `TypeTable` owns every type a checker creates and `TypeComparer`
//! gives them a total order, which keeps unions and instantiation
//! caches canonical. `Checker` walks a bound `Program`, runs the
//! context-sensitive grammar checks and resolves names and types on
//! demand, keeping everything it derives in link stores.

pub mod checker;
pub mod compare;
pub mod links;
pub mod mapper;
pub mod signature;
pub mod types;

mod aliases;
mod evaluator;
mod flow;
mod grammar;
mod symbol_types;
mod type_nodes;

// Re-export key types
pub use checker::{Checker, Program};
pub use compare::{compare_nodes, TypeComparer};
pub use links::{EnumValue, LinkStore, NodeCheckFlags, VarianceFlags};
pub use mapper::{MapperId, TypeMapper, TypeMapperKind};
pub use signature::{IndexInfo, Signature, SignatureFlags, SignatureId, SignatureKind, TypePredicate};
pub use types::{
    CheckerId, LiteralValue, ObjectFlags, PseudoBigInt, Type, TypeFlags, TypeId, TypeKind, TypeTable,
};
