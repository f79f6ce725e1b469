//! SyntaxKind: every token and node kind the checker can see.
//!
//! Trivia, JSX and JSDoc kinds are not represented; the checker never
//! receives them.

/// The kind of a token or node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    Unknown = 0,
    EndOfFileToken = 1,


    // Literals
    NumericLiteral = 2,
    BigIntLiteral = 3,
    StringLiteral = 4,
    RegularExpressionLiteral = 5,
    NoSubstitutionTemplateLiteral = 6,

    // Template pieces
    TemplateHead = 7,
    TemplateMiddle = 8,
    TemplateTail = 9,

    // Punctuation
    OpenBraceToken = 10,
    CloseBraceToken = 11,
    OpenParenToken = 12,
    CloseParenToken = 13,
    OpenBracketToken = 14,
    CloseBracketToken = 15,
    DotToken = 16,
    DotDotDotToken = 17,
    SemicolonToken = 18,
    CommaToken = 19,
    QuestionDotToken = 20,
    LessThanToken = 21,
    GreaterThanToken = 22,
    LessThanEqualsToken = 23,
    GreaterThanEqualsToken = 24,
    EqualsEqualsToken = 25,
    ExclamationEqualsToken = 26,
    EqualsEqualsEqualsToken = 27,
    ExclamationEqualsEqualsToken = 28,
    EqualsGreaterThanToken = 29,
    PlusToken = 30,
    MinusToken = 31,
    AsteriskToken = 32,
    AsteriskAsteriskToken = 33,
    SlashToken = 34,
    PercentToken = 35,
    PlusPlusToken = 36,
    MinusMinusToken = 37,
    LessThanLessThanToken = 38,
    GreaterThanGreaterThanToken = 39,
    GreaterThanGreaterThanGreaterThanToken = 40,
    AmpersandToken = 41,
    BarToken = 42,
    CaretToken = 43,
    ExclamationToken = 44,
    TildeToken = 45,
    AmpersandAmpersandToken = 46,
    BarBarToken = 47,
    QuestionToken = 48,
    ColonToken = 49,
    AtToken = 50,
    QuestionQuestionToken = 51,
    BacktickToken = 52,
    HashToken = 53,

    // Assignments
    EqualsToken = 54,
    PlusEqualsToken = 55,
    MinusEqualsToken = 56,
    AsteriskEqualsToken = 57,
    AsteriskAsteriskEqualsToken = 58,
    SlashEqualsToken = 59,
    PercentEqualsToken = 60,
    LessThanLessThanEqualsToken = 61,
    GreaterThanGreaterThanEqualsToken = 62,
    GreaterThanGreaterThanGreaterThanEqualsToken = 63,
    AmpersandEqualsToken = 64,
    BarEqualsToken = 65,
    CaretEqualsToken = 66,
    BarBarEqualsToken = 67,
    AmpersandAmpersandEqualsToken = 68,
    QuestionQuestionEqualsToken = 69,

    // Names
    Identifier = 70,
    PrivateIdentifier = 71,

    // Reserved words
    BreakKeyword = 72,
    CaseKeyword = 73,
    CatchKeyword = 74,
    ClassKeyword = 75,
    ConstKeyword = 76,
    ContinueKeyword = 77,
    DebuggerKeyword = 78,
    DefaultKeyword = 79,
    DeleteKeyword = 80,
    DoKeyword = 81,
    ElseKeyword = 82,
    EnumKeyword = 83,
    ExportKeyword = 84,
    ExtendsKeyword = 85,
    FalseKeyword = 86,
    FinallyKeyword = 87,
    ForKeyword = 88,
    FunctionKeyword = 89,
    IfKeyword = 90,
    ImportKeyword = 91,
    InKeyword = 92,
    InstanceOfKeyword = 93,
    NewKeyword = 94,
    NullKeyword = 95,
    ReturnKeyword = 96,
    SuperKeyword = 97,
    SwitchKeyword = 98,
    ThisKeyword = 99,
    ThrowKeyword = 100,
    TrueKeyword = 101,
    TryKeyword = 102,
    TypeOfKeyword = 103,
    VarKeyword = 104,
    VoidKeyword = 105,
    WhileKeyword = 106,
    WithKeyword = 107,

    // Strict mode reserved words
    ImplementsKeyword = 108,
    InterfaceKeyword = 109,
    LetKeyword = 110,
    PackageKeyword = 111,
    PrivateKeyword = 112,
    ProtectedKeyword = 113,
    PublicKeyword = 114,
    StaticKeyword = 115,
    YieldKeyword = 116,

    // Contextual keywords
    AbstractKeyword = 117,
    AccessorKeyword = 118,
    AsKeyword = 119,
    AssertsKeyword = 120,
    AnyKeyword = 121,
    AsyncKeyword = 122,
    AwaitKeyword = 123,
    BooleanKeyword = 124,
    ConstructorKeyword = 125,
    DeclareKeyword = 126,
    GetKeyword = 127,
    InferKeyword = 128,
    IntrinsicKeyword = 129,
    IsKeyword = 130,
    KeyOfKeyword = 131,
    ModuleKeyword = 132,
    NamespaceKeyword = 133,
    NeverKeyword = 134,
    OutKeyword = 135,
    ReadonlyKeyword = 136,
    RequireKeyword = 137,
    NumberKeyword = 138,
    ObjectKeyword = 139,
    SatisfiesKeyword = 140,
    SetKeyword = 141,
    StringKeyword = 142,
    SymbolKeyword = 143,
    TypeKeyword = 144,
    UndefinedKeyword = 145,
    UniqueKeyword = 146,
    UnknownKeyword = 147,
    UsingKeyword = 148,
    FromKeyword = 149,
    GlobalKeyword = 150,
    BigIntKeyword = 151,
    OverrideKeyword = 152,
    OfKeyword = 153,
    // ========================================================================
    // Nodes
    // ========================================================================
    // Names
    QualifiedName = 154,
    ComputedPropertyName = 155,

    // Signature elements
    TypeParameter = 156,
    Parameter = 157,
    Decorator = 158,

    // Type members
    PropertySignature = 159,
    PropertyDeclaration = 160,
    MethodSignature = 161,
    MethodDeclaration = 162,
    ClassStaticBlockDeclaration = 163,
    Constructor = 164,
    GetAccessor = 165,
    SetAccessor = 166,
    CallSignature = 167,
    ConstructSignature = 168,
    IndexSignature = 169,

    // Types
    TypePredicate = 170,
    TypeReference = 171,
    FunctionType = 172,
    ConstructorType = 173,
    TypeQuery = 174,
    TypeLiteral = 175,
    ArrayType = 176,
    TupleType = 177,
    OptionalType = 178,
    RestType = 179,
    UnionType = 180,
    IntersectionType = 181,
    ConditionalType = 182,
    InferType = 183,
    ParenthesizedType = 184,
    ThisType = 185,
    TypeOperator = 186,
    IndexedAccessType = 187,
    MappedType = 188,
    LiteralType = 189,
    NamedTupleMember = 190,
    TemplateLiteralType = 191,
    TemplateLiteralTypeSpan = 192,
    ImportType = 193,

    // Binding patterns
    ObjectBindingPattern = 194,
    ArrayBindingPattern = 195,
    BindingElement = 196,

    // Expressions
    ArrayLiteralExpression = 197,
    ObjectLiteralExpression = 198,
    PropertyAccessExpression = 199,
    ElementAccessExpression = 200,
    CallExpression = 201,
    NewExpression = 202,
    TaggedTemplateExpression = 203,
    TypeAssertionExpression = 204,
    ParenthesizedExpression = 205,
    FunctionExpression = 206,
    ArrowFunction = 207,
    DeleteExpression = 208,
    TypeOfExpression = 209,
    VoidExpression = 210,
    AwaitExpression = 211,
    PrefixUnaryExpression = 212,
    PostfixUnaryExpression = 213,
    BinaryExpression = 214,
    ConditionalExpression = 215,
    TemplateExpression = 216,
    YieldExpression = 217,
    SpreadElement = 218,
    ClassExpression = 219,
    OmittedExpression = 220,
    ExpressionWithTypeArguments = 221,
    AsExpression = 222,
    NonNullExpression = 223,
    MetaProperty = 224,
    SatisfiesExpression = 225,

    // Elements
    TemplateSpan = 226,
    SemicolonClassElement = 227,

    // Statements
    Block = 228,
    EmptyStatement = 229,
    VariableStatement = 230,
    ExpressionStatement = 231,
    IfStatement = 232,
    DoStatement = 233,
    WhileStatement = 234,
    ForStatement = 235,
    ForInStatement = 236,
    ForOfStatement = 237,
    ContinueStatement = 238,
    BreakStatement = 239,
    ReturnStatement = 240,
    WithStatement = 241,
    SwitchStatement = 242,
    LabeledStatement = 243,
    ThrowStatement = 244,
    TryStatement = 245,
    DebuggerStatement = 246,
    VariableDeclaration = 247,
    VariableDeclarationList = 248,
    FunctionDeclaration = 249,
    ClassDeclaration = 250,
    InterfaceDeclaration = 251,
    TypeAliasDeclaration = 252,
    EnumDeclaration = 253,
    ModuleDeclaration = 254,
    ModuleBlock = 255,
    CaseBlock = 256,
    NamespaceExportDeclaration = 257,
    ImportEqualsDeclaration = 258,
    ImportDeclaration = 259,
    ImportClause = 260,
    NamespaceImport = 261,
    NamedImports = 262,
    ImportSpecifier = 263,
    ExportAssignment = 264,
    ExportDeclaration = 265,
    NamedExports = 266,
    NamespaceExport = 267,
    ExportSpecifier = 268,

    // Module references
    ExternalModuleReference = 269,

    // Clauses
    CaseClause = 270,
    DefaultClause = 271,
    HeritageClause = 272,
    CatchClause = 273,

    // Property assignments
    PropertyAssignment = 274,
    ShorthandPropertyAssignment = 275,
    SpreadAssignment = 276,

    // Enum members
    EnumMember = 277,

    // Top-level
    SourceFile = 278,
}

// Range markers. Not variants because discriminants cannot repeat.
impl SyntaxKind {
    pub const FIRST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NumericLiteral;
    pub const LAST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_TYPE_NODE: SyntaxKind = SyntaxKind::TypePredicate;
    pub const LAST_TYPE_NODE: SyntaxKind = SyntaxKind::ImportType;
    pub const FIRST_NODE: SyntaxKind = SyntaxKind::QualifiedName;
}

impl SyntaxKind {
    #[inline]
    fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }

    /// Whether this kind is a keyword token.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self.in_range(Self::FIRST_PUNCTUATION, Self::LAST_PUNCTUATION)
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        self.in_range(Self::FIRST_LITERAL_TOKEN, Self::LAST_LITERAL_TOKEN)
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self.in_range(Self::FIRST_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    /// Whether this kind is any token (leaf) rather than a composite node.
    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < Self::FIRST_NODE as u16
    }

    /// Whether this kind is a modifier keyword.
    #[inline]
    pub fn is_modifier_kind(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::AccessorKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::InKeyword
                | SyntaxKind::OutKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::StaticKeyword
        )
    }

    /// Whether this kind is a type node, keyword types included.
    #[inline]
    pub fn is_type_node(self) -> bool {
        self.in_range(Self::FIRST_TYPE_NODE, Self::LAST_TYPE_NODE)
            || self.is_keyword_type()
            || self == SyntaxKind::ExpressionWithTypeArguments
    }

    /// Keywords that stand for a type on their own (`string`, `void`, ...).
    #[inline]
    pub fn is_keyword_type(self) -> bool {
        matches!(
            self,
            SyntaxKind::AnyKeyword
                | SyntaxKind::UnknownKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::BigIntKeyword
                | SyntaxKind::ObjectKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::SymbolKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::UndefinedKeyword
                | SyntaxKind::NeverKeyword
                | SyntaxKind::IntrinsicKeyword
        )
    }

    /// Whether this kind is a statement.
    #[inline]
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::VariableStatement
                | SyntaxKind::EmptyStatement
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::DoStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::ForInStatement
                | SyntaxKind::ForOfStatement
                | SyntaxKind::ContinueStatement
                | SyntaxKind::BreakStatement
                | SyntaxKind::ReturnStatement
                | SyntaxKind::WithStatement
                | SyntaxKind::SwitchStatement
                | SyntaxKind::LabeledStatement
                | SyntaxKind::ThrowStatement
                | SyntaxKind::TryStatement
                | SyntaxKind::DebuggerStatement
                | SyntaxKind::Block
        )
    }

    /// Whether this kind is a declaration that carries a name.
    #[inline]
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::VariableDeclaration
                | SyntaxKind::Parameter
                | SyntaxKind::PropertyDeclaration
                | SyntaxKind::PropertySignature
                | SyntaxKind::PropertyAssignment
                | SyntaxKind::ShorthandPropertyAssignment
                | SyntaxKind::BindingElement
                | SyntaxKind::FunctionDeclaration
                | SyntaxKind::FunctionExpression
                | SyntaxKind::ArrowFunction
                | SyntaxKind::ClassDeclaration
                | SyntaxKind::ClassExpression
                | SyntaxKind::InterfaceDeclaration
                | SyntaxKind::TypeAliasDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::EnumMember
                | SyntaxKind::ModuleDeclaration
                | SyntaxKind::ImportEqualsDeclaration
                | SyntaxKind::ImportClause
                | SyntaxKind::NamespaceImport
                | SyntaxKind::NamespaceExport
                | SyntaxKind::ImportSpecifier
                | SyntaxKind::ExportSpecifier
                | SyntaxKind::ExportAssignment
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::MethodSignature
                | SyntaxKind::Constructor
                | SyntaxKind::GetAccessor
                | SyntaxKind::SetAccessor
                | SyntaxKind::TypeParameter
                | SyntaxKind::IndexSignature
                | SyntaxKind::CallSignature
                | SyntaxKind::ConstructSignature
                | SyntaxKind::NamedTupleMember
        )
    }

    /// Source text of a keyword kind.
    pub fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::BreakKeyword => "break",
            SyntaxKind::CaseKeyword => "case",
            SyntaxKind::CatchKeyword => "catch",
            SyntaxKind::ClassKeyword => "class",
            SyntaxKind::ConstKeyword => "const",
            SyntaxKind::ContinueKeyword => "continue",
            SyntaxKind::DebuggerKeyword => "debugger",
            SyntaxKind::DefaultKeyword => "default",
            SyntaxKind::DeleteKeyword => "delete",
            SyntaxKind::DoKeyword => "do",
            SyntaxKind::ElseKeyword => "else",
            SyntaxKind::EnumKeyword => "enum",
            SyntaxKind::ExportKeyword => "export",
            SyntaxKind::ExtendsKeyword => "extends",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::FinallyKeyword => "finally",
            SyntaxKind::ForKeyword => "for",
            SyntaxKind::FunctionKeyword => "function",
            SyntaxKind::IfKeyword => "if",
            SyntaxKind::ImportKeyword => "import",
            SyntaxKind::InKeyword => "in",
            SyntaxKind::InstanceOfKeyword => "instanceof",
            SyntaxKind::NewKeyword => "new",
            SyntaxKind::NullKeyword => "null",
            SyntaxKind::ReturnKeyword => "return",
            SyntaxKind::SuperKeyword => "super",
            SyntaxKind::SwitchKeyword => "switch",
            SyntaxKind::ThisKeyword => "this",
            SyntaxKind::ThrowKeyword => "throw",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::TryKeyword => "try",
            SyntaxKind::TypeOfKeyword => "typeof",
            SyntaxKind::VarKeyword => "var",
            SyntaxKind::VoidKeyword => "void",
            SyntaxKind::WhileKeyword => "while",
            SyntaxKind::WithKeyword => "with",
            SyntaxKind::ImplementsKeyword => "implements",
            SyntaxKind::InterfaceKeyword => "interface",
            SyntaxKind::LetKeyword => "let",
            SyntaxKind::PackageKeyword => "package",
            SyntaxKind::PrivateKeyword => "private",
            SyntaxKind::ProtectedKeyword => "protected",
            SyntaxKind::PublicKeyword => "public",
            SyntaxKind::StaticKeyword => "static",
            SyntaxKind::YieldKeyword => "yield",
            SyntaxKind::AbstractKeyword => "abstract",
            SyntaxKind::AccessorKeyword => "accessor",
            SyntaxKind::AsKeyword => "as",
            SyntaxKind::AssertsKeyword => "asserts",
            SyntaxKind::AnyKeyword => "any",
            SyntaxKind::AsyncKeyword => "async",
            SyntaxKind::AwaitKeyword => "await",
            SyntaxKind::BooleanKeyword => "boolean",
            SyntaxKind::ConstructorKeyword => "constructor",
            SyntaxKind::DeclareKeyword => "declare",
            SyntaxKind::GetKeyword => "get",
            SyntaxKind::InferKeyword => "infer",
            SyntaxKind::IntrinsicKeyword => "intrinsic",
            SyntaxKind::IsKeyword => "is",
            SyntaxKind::KeyOfKeyword => "keyof",
            SyntaxKind::ModuleKeyword => "module",
            SyntaxKind::NamespaceKeyword => "namespace",
            SyntaxKind::NeverKeyword => "never",
            SyntaxKind::OutKeyword => "out",
            SyntaxKind::ReadonlyKeyword => "readonly",
            SyntaxKind::RequireKeyword => "require",
            SyntaxKind::NumberKeyword => "number",
            SyntaxKind::ObjectKeyword => "object",
            SyntaxKind::SatisfiesKeyword => "satisfies",
            SyntaxKind::SetKeyword => "set",
            SyntaxKind::StringKeyword => "string",
            SyntaxKind::SymbolKeyword => "symbol",
            SyntaxKind::TypeKeyword => "type",
            SyntaxKind::UndefinedKeyword => "undefined",
            SyntaxKind::UniqueKeyword => "unique",
            SyntaxKind::UnknownKeyword => "unknown",
            SyntaxKind::UsingKeyword => "using",
            SyntaxKind::FromKeyword => "from",
            SyntaxKind::GlobalKeyword => "global",
            SyntaxKind::BigIntKeyword => "bigint",
            SyntaxKind::OverrideKeyword => "override",
            SyntaxKind::OfKeyword => "of",
            _ => return None,
        };
        Some(text)
    }

    /// Source text of a punctuation kind.
    pub fn punctuation_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::OpenBracketToken => "[",
            SyntaxKind::CloseBracketToken => "]",
            SyntaxKind::DotToken => ".",
            SyntaxKind::DotDotDotToken => "...",
            SyntaxKind::SemicolonToken => ";",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::QuestionDotToken => "?.",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::LessThanEqualsToken => "<=",
            SyntaxKind::GreaterThanEqualsToken => ">=",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::ExclamationEqualsToken => "!=",
            SyntaxKind::EqualsEqualsEqualsToken => "===",
            SyntaxKind::ExclamationEqualsEqualsToken => "!==",
            SyntaxKind::EqualsGreaterThanToken => "=>",
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::AsteriskAsteriskToken => "**",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::PercentToken => "%",
            SyntaxKind::PlusPlusToken => "++",
            SyntaxKind::MinusMinusToken => "--",
            SyntaxKind::LessThanLessThanToken => "<<",
            SyntaxKind::GreaterThanGreaterThanToken => ">>",
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => ">>>",
            SyntaxKind::AmpersandToken => "&",
            SyntaxKind::BarToken => "|",
            SyntaxKind::CaretToken => "^",
            SyntaxKind::ExclamationToken => "!",
            SyntaxKind::TildeToken => "~",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::BarBarToken => "||",
            SyntaxKind::QuestionToken => "?",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::AtToken => "@",
            SyntaxKind::QuestionQuestionToken => "??",
            SyntaxKind::BacktickToken => "`",
            SyntaxKind::HashToken => "#",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::PlusEqualsToken => "+=",
            SyntaxKind::MinusEqualsToken => "-=",
            SyntaxKind::AsteriskEqualsToken => "*=",
            SyntaxKind::AsteriskAsteriskEqualsToken => "**=",
            SyntaxKind::SlashEqualsToken => "/=",
            SyntaxKind::PercentEqualsToken => "%=",
            SyntaxKind::LessThanLessThanEqualsToken => "<<=",
            SyntaxKind::GreaterThanGreaterThanEqualsToken => ">>=",
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            SyntaxKind::AmpersandEqualsToken => "&=",
            SyntaxKind::BarEqualsToken => "|=",
            SyntaxKind::CaretEqualsToken => "^=",
            SyntaxKind::BarBarEqualsToken => "||=",
            SyntaxKind::AmpersandAmpersandEqualsToken => "&&=",
            SyntaxKind::QuestionQuestionEqualsToken => "??=",
            _ => return None,
        };
        Some(text)
    }

    /// Keyword or punctuation text, whichever applies.
    pub fn token_text(self) -> Option<&'static str> {
        self.keyword_text().or_else(|| self.punctuation_text())
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert!(SyntaxKind::BreakKeyword.is_keyword());
        assert!(SyntaxKind::OfKeyword.is_keyword());
        assert!(!SyntaxKind::Identifier.is_keyword());
        assert!(SyntaxKind::QuestionDotToken.is_punctuation());
        assert!(SyntaxKind::Identifier.is_token());
        assert!(!SyntaxKind::QualifiedName.is_token());
    }

    #[test]
    fn test_type_nodes() {
        assert!(SyntaxKind::UnionType.is_type_node());
        assert!(SyntaxKind::StringKeyword.is_type_node());
        assert!(!SyntaxKind::CallExpression.is_type_node());
    }

    #[test]
    fn test_token_text() {
        assert_eq!(SyntaxKind::AbstractKeyword.token_text(), Some("abstract"));
        assert_eq!(SyntaxKind::EqualsGreaterThanToken.token_text(), Some("=>"));
        assert_eq!(SyntaxKind::Block.token_text(), None);
    }
}
