//! Call and construct signatures, type predicates and index infos.

use crate::mapper::MapperId;
use crate::types::{TypeId, TypeTable};
use tscheck_ast::types::{NodeId, SymbolId};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SignatureId(pub(crate) u32);

impl SignatureId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SignatureFlags: u32 {
        const NONE                  = 0;
        const HAS_REST_PARAMETER    = 1 << 0;
        const HAS_LITERAL_TYPES     = 1 << 1;
        const CONSTRUCT             = 1 << 2;
        const ABSTRACT              = 1 << 3;
        const IS_INNER_CALL_CHAIN   = 1 << 4;
        const IS_OUTER_CALL_CHAIN   = 1 << 5;
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SignatureKind {
    Call,
    Construct,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TypePredicateKind {
    This,
    Identifier,
    AssertsThis,
    AssertsIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypePredicate {
    pub kind: TypePredicateKind,
    pub parameter_name: Option<String>,
    pub parameter_index: Option<usize>,
    pub type_id: Option<TypeId>,
}

/// A union or intersection of signatures.
#[derive(Debug, Clone)]
pub struct CompositeSignature {
    pub is_union: bool,
    pub signatures: Vec<SignatureId>,
}

#[derive(Debug, Clone)]
pub struct Signature {
    pub flags: SignatureFlags,
    pub min_argument_count: usize,
    pub declaration: Option<NodeId>,
    pub type_parameters: Vec<TypeId>,
    pub parameters: Vec<SymbolId>,
    pub this_parameter: Option<SymbolId>,
    pub resolved_return_type: Option<TypeId>,
    pub resolved_type_predicate: Option<TypePredicate>,
    pub target: Option<SignatureId>,
    pub mapper: Option<MapperId>,
    pub composite: Option<CompositeSignature>,
}

impl Signature {
    pub fn new(flags: SignatureFlags, declaration: Option<NodeId>) -> Self {
        Self {
            flags,
            min_argument_count: 0,
            declaration,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            this_parameter: None,
            resolved_return_type: None,
            resolved_type_predicate: None,
            target: None,
            mapper: None,
            composite: None,
        }
    }

    #[inline]
    pub fn is_construct(&self) -> bool {
        self.flags.contains(SignatureFlags::CONSTRUCT)
    }

    #[inline]
    pub fn has_rest_parameter(&self) -> bool {
        self.flags.contains(SignatureFlags::HAS_REST_PARAMETER)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexInfo {
    pub key_type: TypeId,
    pub value_type: TypeId,
    pub is_readonly: bool,
    pub declaration: Option<NodeId>,
}

impl TypeTable {
    pub fn create_signature(&mut self, signature: Signature) -> SignatureId {
        let id = SignatureId(self.signatures.len() as u32);
        self.signatures.push(signature);
        id
    }

    pub fn signature(&self, id: SignatureId) -> &Signature {
        &self.signatures[id.index()]
    }

    pub fn signature_mut(&mut self, id: SignatureId) -> &mut Signature {
        &mut self.signatures[id.index()]
    }
}
