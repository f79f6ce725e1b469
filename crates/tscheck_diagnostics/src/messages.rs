//! Message catalog. Codes and texts follow `diagnosticMessages.json`.

use super::*;

macro_rules! diag {
    ($code:expr, Error, $msg:expr) => {
        DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
    };
    ($code:expr, Warning, $msg:expr) => {
        DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
    };
    ($code:expr, Suggestion, $msg:expr) => {
        DiagnosticMessage { code: $code, category: DiagnosticCategory::Suggestion, message: $msg }
    };
    ($code:expr, Message, $msg:expr) => {
        DiagnosticMessage { code: $code, category: DiagnosticCategory::Message, message: $msg }
    };
}

// ============================================================================
// Binding and name resolution
// ============================================================================
pub const DUPLICATE_IDENTIFIER_0: DiagnosticMessage = diag!(2300, Error, "Duplicate identifier '{0}'.");
pub const CANNOT_FIND_NAME_0: DiagnosticMessage = diag!(2304, Error, "Cannot find name '{0}'.");
pub const STATIC_MEMBERS_CANNOT_REFERENCE_CLASS_TYPE_PARAMETERS: DiagnosticMessage = diag!(2302, Error, "Static members cannot reference class type parameters.");
pub const CANNOT_REDECLARE_BLOCK_SCOPED_VARIABLE_0: DiagnosticMessage = diag!(2451, Error, "Cannot redeclare block-scoped variable '{0}'.");
pub const A_COMPUTED_PROPERTY_NAME_CANNOT_REFERENCE_A_TYPE_PARAMETER_FROM_ITS_CONTAINING_TYPE: DiagnosticMessage = diag!(2467, Error, "A computed property name cannot reference a type parameter from its containing type.");
pub const A_MODULE_CANNOT_HAVE_MULTIPLE_DEFAULT_EXPORTS: DiagnosticMessage = diag!(2528, Error, "A module cannot have multiple default exports.");
pub const BASE_CLASS_EXPRESSIONS_CANNOT_REFERENCE_CLASS_TYPE_PARAMETERS: DiagnosticMessage = diag!(2562, Error, "Base class expressions cannot reference class type parameters.");
pub const ENUM_DECLARATIONS_CAN_ONLY_MERGE_WITH_NAMESPACE_OR_OTHER_ENUM_DECLARATIONS: DiagnosticMessage = diag!(2567, Error, "Enum declarations can only merge with namespace or other enum declarations.");
pub const THE_FIRST_EXPORT_DEFAULT_IS_HERE: DiagnosticMessage = diag!(2752, Error, "The first export default is here.");
pub const ANOTHER_EXPORT_DEFAULT_IS_HERE: DiagnosticMessage = diag!(2753, Error, "Another export default is here.");
pub const X_AND_HERE: DiagnosticMessage = diag!(6204, Message, "and here.");
pub const EXPORT_MODIFIER_CANNOT_BE_APPLIED_TO_AMBIENT_MODULES_AND_MODULE_AUGMENTATIONS_SINCE_THEY_ARE_ALWAYS_VISIBLE: DiagnosticMessage = diag!(2668, Error, "'export' modifier cannot be applied to ambient modules and module augmentations since they are always visible.");
pub const GLOBAL_MODULE_EXPORTS_MAY_ONLY_APPEAR_IN_MODULE_FILES: DiagnosticMessage = diag!(1314, Error, "Global module exports may only appear in module files.");
pub const GLOBAL_MODULE_EXPORTS_MAY_ONLY_APPEAR_IN_DECLARATION_FILES: DiagnosticMessage = diag!(1315, Error, "Global module exports may only appear in declaration files.");
pub const GLOBAL_MODULE_EXPORTS_MAY_ONLY_APPEAR_AT_TOP_LEVEL: DiagnosticMessage = diag!(1316, Error, "Global module exports may only appear at top level.");
pub const CANNOT_ACCESS_0_FROM_ANOTHER_FILE_WITHOUT_QUALIFICATION_WHEN_1_IS_ENABLED_USE_2_INSTEAD: DiagnosticMessage = diag!(18055, Error, "Cannot access '{0}' from another file without qualification when '{1}' is enabled. Use '{2}' instead.");

// ============================================================================
// Modifiers and decorators
// ============================================================================
pub const ACCESSIBILITY_MODIFIER_ALREADY_SEEN: DiagnosticMessage = diag!(1028, Error, "Accessibility modifier already seen.");
pub const _0_MODIFIER_MUST_PRECEDE_1_MODIFIER: DiagnosticMessage = diag!(1029, Error, "'{0}' modifier must precede '{1}' modifier.");
pub const _0_MODIFIER_ALREADY_SEEN: DiagnosticMessage = diag!(1030, Error, "'{0}' modifier already seen.");
pub const _0_MODIFIER_CANNOT_APPEAR_ON_CLASS_ELEMENTS_OF_THIS_KIND: DiagnosticMessage = diag!(1031, Error, "'{0}' modifier cannot appear on class elements of this kind.");
pub const READONLY_MODIFIER_CAN_ONLY_APPEAR_ON_A_PROPERTY_DECLARATION_OR_INDEX_SIGNATURE: DiagnosticMessage = diag!(1024, Error, "'readonly' modifier can only appear on a property declaration or index signature.");
pub const A_DECLARE_MODIFIER_CANNOT_BE_USED_IN_AN_ALREADY_AMBIENT_CONTEXT: DiagnosticMessage = diag!(1038, Error, "A 'declare' modifier cannot be used in an already ambient context.");
pub const _0_MODIFIER_CANNOT_BE_USED_IN_AN_AMBIENT_CONTEXT: DiagnosticMessage = diag!(1040, Error, "'{0}' modifier cannot be used in an ambient context.");
pub const _0_MODIFIER_CANNOT_BE_USED_HERE: DiagnosticMessage = diag!(1042, Error, "'{0}' modifier cannot be used here.");
pub const _0_MODIFIER_CANNOT_APPEAR_ON_A_MODULE_OR_NAMESPACE_ELEMENT: DiagnosticMessage = diag!(1044, Error, "'{0}' modifier cannot appear on a module or namespace element.");
pub const _0_MODIFIER_CANNOT_APPEAR_ON_A_TYPE_MEMBER: DiagnosticMessage = diag!(1070, Error, "'{0}' modifier cannot appear on a type member.");
pub const _0_MODIFIER_CANNOT_APPEAR_ON_AN_INDEX_SIGNATURE: DiagnosticMessage = diag!(1071, Error, "'{0}' modifier cannot appear on an index signature.");
pub const A_0_MODIFIER_CANNOT_BE_USED_WITH_AN_IMPORT_DECLARATION: DiagnosticMessage = diag!(1079, Error, "A '{0}' modifier cannot be used with an import declaration.");
pub const _0_MODIFIER_CANNOT_APPEAR_ON_A_CONSTRUCTOR_DECLARATION: DiagnosticMessage = diag!(1089, Error, "'{0}' modifier cannot appear on a constructor declaration.");
pub const _0_MODIFIER_CANNOT_APPEAR_ON_A_PARAMETER: DiagnosticMessage = diag!(1090, Error, "'{0}' modifier cannot appear on a parameter.");
pub const MODIFIERS_CANNOT_APPEAR_HERE: DiagnosticMessage = diag!(1184, Error, "Modifiers cannot appear here.");
pub const A_PARAMETER_PROPERTY_MAY_NOT_BE_DECLARED_USING_A_BINDING_PATTERN: DiagnosticMessage = diag!(1187, Error, "A parameter property may not be declared using a binding pattern.");
pub const DECORATORS_ARE_NOT_VALID_HERE: DiagnosticMessage = diag!(1206, Error, "Decorators are not valid here.");
pub const DECORATORS_CANNOT_BE_APPLIED_TO_MULTIPLE_GET_SET_ACCESSORS_OF_THE_SAME_NAME: DiagnosticMessage = diag!(1207, Error, "Decorators cannot be applied to multiple get/set accessors of the same name.");
pub const ABSTRACT_MODIFIER_CAN_ONLY_APPEAR_ON_A_CLASS_METHOD_OR_PROPERTY_DECLARATION: DiagnosticMessage = diag!(1242, Error, "'abstract' modifier can only appear on a class, method, or property declaration.");
pub const _0_MODIFIER_CANNOT_BE_USED_WITH_1_MODIFIER: DiagnosticMessage = diag!(1243, Error, "'{0}' modifier cannot be used with '{1}' modifier.");
pub const ABSTRACT_METHODS_CAN_ONLY_APPEAR_WITHIN_AN_ABSTRACT_CLASS: DiagnosticMessage = diag!(1244, Error, "Abstract methods can only appear within an abstract class.");
pub const A_CLASS_MEMBER_CANNOT_HAVE_THE_0_KEYWORD: DiagnosticMessage = diag!(1248, Error, "A class member cannot have the '{0}' keyword.");
pub const A_DECORATOR_CAN_ONLY_DECORATE_A_METHOD_IMPLEMENTATION_NOT_AN_OVERLOAD: DiagnosticMessage = diag!(1249, Error, "A decorator can only decorate a method implementation, not an overload.");
pub const ABSTRACT_PROPERTIES_CAN_ONLY_APPEAR_WITHIN_AN_ABSTRACT_CLASS: DiagnosticMessage = diag!(1253, Error, "Abstract properties can only appear within an abstract class.");
pub const _0_MODIFIER_CANNOT_APPEAR_ON_A_TYPE_PARAMETER: DiagnosticMessage = diag!(1273, Error, "'{0}' modifier cannot appear on a type parameter.");
pub const _0_MODIFIER_CAN_ONLY_APPEAR_ON_A_TYPE_PARAMETER_OF_A_CLASS_INTERFACE_OR_TYPE_ALIAS: DiagnosticMessage = diag!(1274, Error, "'{0}' modifier can only appear on a type parameter of a class, interface or type alias");
pub const ACCESSOR_MODIFIER_CAN_ONLY_APPEAR_ON_A_PROPERTY_DECLARATION: DiagnosticMessage = diag!(1275, Error, "'accessor' modifier can only appear on a property declaration.");
pub const AN_ACCESSOR_PROPERTY_CANNOT_BE_DECLARED_OPTIONAL: DiagnosticMessage = diag!(1276, Error, "An 'accessor' property cannot be declared optional.");
pub const _0_MODIFIER_CAN_ONLY_APPEAR_ON_A_TYPE_PARAMETER_OF_A_FUNCTION_METHOD_OR_CLASS: DiagnosticMessage = diag!(1277, Error, "'{0}' modifier can only appear on a type parameter of a function, method or class");
pub const A_TOP_LEVEL_EXPORT_MODIFIER_CANNOT_BE_USED_ON_VALUE_DECLARATIONS_IN_A_COMMONJS_MODULE_WHEN_VERBATIMMODULESYNTAX_IS_ENABLED: DiagnosticMessage = diag!(1287, Error, "A top-level 'export' modifier cannot be used on value declarations in a CommonJS module when 'verbatimModuleSyntax' is enabled.");
pub const A_PARAMETER_PROPERTY_CANNOT_BE_DECLARED_USING_A_REST_PARAMETER: DiagnosticMessage = diag!(1317, Error, "A parameter property cannot be declared using a rest parameter.");
pub const A_DEFAULT_EXPORT_CAN_ONLY_BE_USED_IN_AN_ECMASCRIPT_STYLE_MODULE: DiagnosticMessage = diag!(1319, Error, "A default export can only be used in an ECMAScript-style module.");
pub const NEITHER_DECORATORS_NOR_MODIFIERS_MAY_BE_APPLIED_TO_THIS_PARAMETERS: DiagnosticMessage = diag!(1433, Error, "Neither decorators nor modifiers may be applied to 'this' parameters.");
pub const DECORATORS_MAY_NOT_APPEAR_AFTER_EXPORT_OR_EXPORT_DEFAULT_IF_THEY_ALSO_APPEAR_BEFORE_EXPORT: DiagnosticMessage = diag!(8038, Error, "Decorators may not appear after 'export' or 'export default' if they also appear before 'export'.");
pub const DECORATOR_USED_BEFORE_EXPORT_HERE: DiagnosticMessage = diag!(1486, Error, "Decorator used before 'export' here.");
pub const _0_MODIFIER_CANNOT_APPEAR_ON_A_USING_DECLARATION: DiagnosticMessage = diag!(1491, Error, "'{0}' modifier cannot appear on a 'using' declaration.");
pub const _0_MODIFIER_CANNOT_APPEAR_ON_AN_AWAIT_USING_DECLARATION: DiagnosticMessage = diag!(1495, Error, "'{0}' modifier cannot appear on an 'await using' declaration.");
pub const EXPRESSION_MUST_BE_ENCLOSED_IN_PARENTHESES_TO_BE_USED_AS_A_DECORATOR: DiagnosticMessage = diag!(1497, Error, "Expression must be enclosed in parentheses to be used as a decorator.");
pub const INVALID_SYNTAX_IN_DECORATOR: DiagnosticMessage = diag!(1498, Error, "Invalid syntax in decorator.");
pub const AN_ACCESSIBILITY_MODIFIER_CANNOT_BE_USED_WITH_A_PRIVATE_IDENTIFIER: DiagnosticMessage = diag!(18010, Error, "An accessibility modifier cannot be used with a private identifier.");
pub const _0_MODIFIER_CANNOT_BE_USED_WITH_A_PRIVATE_IDENTIFIER: DiagnosticMessage = diag!(18019, Error, "'{0}' modifier cannot be used with a private identifier.");

// ============================================================================
// Parameters, signatures and accessors
// ============================================================================
pub const _0_EXPECTED: DiagnosticMessage = diag!(1005, Error, "'{0}' expected.");
pub const TRAILING_COMMA_NOT_ALLOWED: DiagnosticMessage = diag!(1009, Error, "Trailing comma not allowed.");
pub const A_REST_PARAMETER_OR_BINDING_PATTERN_MAY_NOT_HAVE_A_TRAILING_COMMA: DiagnosticMessage = diag!(1013, Error, "A rest parameter or binding pattern may not have a trailing comma.");
pub const A_REST_PARAMETER_MUST_BE_LAST_IN_A_PARAMETER_LIST: DiagnosticMessage = diag!(1014, Error, "A rest parameter must be last in a parameter list.");
pub const PARAMETER_CANNOT_HAVE_QUESTION_MARK_AND_INITIALIZER: DiagnosticMessage = diag!(1015, Error, "Parameter cannot have question mark and initializer.");
pub const A_REQUIRED_PARAMETER_CANNOT_FOLLOW_AN_OPTIONAL_PARAMETER: DiagnosticMessage = diag!(1016, Error, "A required parameter cannot follow an optional parameter.");
pub const AN_INDEX_SIGNATURE_CANNOT_HAVE_A_REST_PARAMETER: DiagnosticMessage = diag!(1017, Error, "An index signature cannot have a rest parameter.");
pub const AN_INDEX_SIGNATURE_PARAMETER_CANNOT_HAVE_AN_ACCESSIBILITY_MODIFIER: DiagnosticMessage = diag!(1018, Error, "An index signature parameter cannot have an accessibility modifier.");
pub const AN_INDEX_SIGNATURE_PARAMETER_CANNOT_HAVE_A_QUESTION_MARK: DiagnosticMessage = diag!(1019, Error, "An index signature parameter cannot have a question mark.");
pub const AN_INDEX_SIGNATURE_PARAMETER_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1020, Error, "An index signature parameter cannot have an initializer.");
pub const AN_INDEX_SIGNATURE_MUST_HAVE_A_TYPE_ANNOTATION: DiagnosticMessage = diag!(1021, Error, "An index signature must have a type annotation.");
pub const AN_INDEX_SIGNATURE_PARAMETER_MUST_HAVE_A_TYPE_ANNOTATION: DiagnosticMessage = diag!(1022, Error, "An index signature parameter must have a type annotation.");
pub const AN_INDEX_SIGNATURE_CANNOT_HAVE_A_TRAILING_COMMA: DiagnosticMessage = diag!(1025, Error, "An index signature cannot have a trailing comma.");
pub const A_REST_PARAMETER_CANNOT_BE_OPTIONAL: DiagnosticMessage = diag!(1047, Error, "A rest parameter cannot be optional.");
pub const A_REST_PARAMETER_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1048, Error, "A rest parameter cannot have an initializer.");
pub const A_SET_ACCESSOR_MUST_HAVE_EXACTLY_ONE_PARAMETER: DiagnosticMessage = diag!(1049, Error, "A 'set' accessor must have exactly one parameter.");
pub const A_SET_ACCESSOR_CANNOT_HAVE_AN_OPTIONAL_PARAMETER: DiagnosticMessage = diag!(1051, Error, "A 'set' accessor cannot have an optional parameter.");
pub const A_SET_ACCESSOR_PARAMETER_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1052, Error, "A 'set' accessor parameter cannot have an initializer.");
pub const A_SET_ACCESSOR_CANNOT_HAVE_REST_PARAMETER: DiagnosticMessage = diag!(1053, Error, "A 'set' accessor cannot have rest parameter.");
pub const A_GET_ACCESSOR_CANNOT_HAVE_PARAMETERS: DiagnosticMessage = diag!(1054, Error, "A 'get' accessor cannot have parameters.");
pub const TYPE_PARAMETERS_CANNOT_APPEAR_ON_A_CONSTRUCTOR_DECLARATION: DiagnosticMessage = diag!(1092, Error, "Type parameters cannot appear on a constructor declaration.");
pub const TYPE_ANNOTATION_CANNOT_APPEAR_ON_A_CONSTRUCTOR_DECLARATION: DiagnosticMessage = diag!(1093, Error, "Type annotation cannot appear on a constructor declaration.");
pub const AN_ACCESSOR_CANNOT_HAVE_TYPE_PARAMETERS: DiagnosticMessage = diag!(1094, Error, "An accessor cannot have type parameters.");
pub const A_SET_ACCESSOR_CANNOT_HAVE_A_RETURN_TYPE_ANNOTATION: DiagnosticMessage = diag!(1095, Error, "A 'set' accessor cannot have a return type annotation.");
pub const AN_INDEX_SIGNATURE_MUST_HAVE_EXACTLY_ONE_PARAMETER: DiagnosticMessage = diag!(1096, Error, "An index signature must have exactly one parameter.");
pub const _0_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = diag!(1097, Error, "'{0}' list cannot be empty.");
pub const TYPE_PARAMETER_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = diag!(1098, Error, "Type parameter list cannot be empty.");
pub const TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = diag!(1099, Error, "Type argument list cannot be empty.");
pub const LINE_TERMINATOR_NOT_PERMITTED_BEFORE_ARROW: DiagnosticMessage = diag!(1200, Error, "Line terminator not permitted before arrow.");
pub const AN_ABSTRACT_ACCESSOR_CANNOT_HAVE_AN_IMPLEMENTATION: DiagnosticMessage = diag!(1318, Error, "An abstract accessor cannot have an implementation.");
pub const AN_INDEX_SIGNATURE_PARAMETER_TYPE_MUST_BE_STRING_NUMBER_SYMBOL_OR_A_TEMPLATE_LITERAL_TYPE: DiagnosticMessage = diag!(1268, Error, "An index signature parameter type must be 'string', 'number', 'symbol', or a template literal type.");
pub const AN_INDEX_SIGNATURE_PARAMETER_TYPE_CANNOT_BE_A_LITERAL_TYPE_OR_GENERIC_TYPE_CONSIDER_USING_A_MAPPED_OBJECT_TYPE_INSTEAD: DiagnosticMessage = diag!(1337, Error, "An index signature parameter type cannot be a literal type or generic type. Consider using a mapped object type instead.");
pub const THIS_PARAMETER_IS_NOT_ALLOWED_WITH_USE_STRICT_DIRECTIVE: DiagnosticMessage = diag!(1346, Error, "This parameter is not allowed with 'use strict' directive.");
pub const USE_STRICT_DIRECTIVE_CANNOT_BE_USED_WITH_NON_SIMPLE_PARAMETER_LIST: DiagnosticMessage = diag!(1347, Error, "'use strict' directive cannot be used with non-simple parameter list.");
pub const NON_SIMPLE_PARAMETER_DECLARED_HERE: DiagnosticMessage = diag!(1348, Error, "Non-simple parameter declared here.");
pub const AND_HERE: DiagnosticMessage = diag!(1349, Error, "and here.");
pub const USE_STRICT_DIRECTIVE_USED_HERE: DiagnosticMessage = diag!(1350, Error, "'use strict' directive used here.");
pub const THIS_SYNTAX_IS_RESERVED_IN_FILES_WITH_THE_MTS_OR_CTS_EXTENSION: DiagnosticMessage = diag!(7060, Error, "This syntax is reserved in files with the .mts or .cts extension. Add a trailing comma or explicit constraint.");

// ============================================================================
// Classes, interfaces and members
// ============================================================================
pub const EXTENDS_CLAUSE_ALREADY_SEEN: DiagnosticMessage = diag!(1172, Error, "'extends' clause already seen.");
pub const EXTENDS_CLAUSE_MUST_PRECEDE_IMPLEMENTS_CLAUSE: DiagnosticMessage = diag!(1173, Error, "'extends' clause must precede 'implements' clause.");
pub const CLASSES_CAN_ONLY_EXTEND_A_SINGLE_CLASS: DiagnosticMessage = diag!(1174, Error, "Classes can only extend a single class.");
pub const IMPLEMENTS_CLAUSE_ALREADY_SEEN: DiagnosticMessage = diag!(1175, Error, "'implements' clause already seen.");
pub const INTERFACE_DECLARATION_CANNOT_HAVE_IMPLEMENTS_CLAUSE: DiagnosticMessage = diag!(1176, Error, "Interface declaration cannot have 'implements' clause.");
pub const A_COMPUTED_PROPERTY_NAME_IN_AN_AMBIENT_CONTEXT_MUST_REFER_TO_AN_EXPRESSION_WHOSE_TYPE_IS_A_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE: DiagnosticMessage = diag!(1165, Error, "A computed property name in an ambient context must refer to an expression whose type is a literal type or a 'unique symbol' type.");
pub const A_COMPUTED_PROPERTY_NAME_IN_A_CLASS_PROPERTY_DECLARATION_MUST_HAVE_A_SIMPLE_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE: DiagnosticMessage = diag!(1166, Error, "A computed property name in a class property declaration must have a simple literal type or a 'unique symbol' type.");
pub const A_COMPUTED_PROPERTY_NAME_IN_A_METHOD_OVERLOAD_MUST_REFER_TO_AN_EXPRESSION_WHOSE_TYPE_IS_A_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE: DiagnosticMessage = diag!(1168, Error, "A computed property name in a method overload must refer to an expression whose type is a literal type or a 'unique symbol' type.");
pub const A_COMPUTED_PROPERTY_NAME_IN_AN_INTERFACE_MUST_REFER_TO_AN_EXPRESSION_WHOSE_TYPE_IS_A_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE: DiagnosticMessage = diag!(1169, Error, "A computed property name in an interface must refer to an expression whose type is a literal type or a 'unique symbol' type.");
pub const A_COMPUTED_PROPERTY_NAME_IN_A_TYPE_LITERAL_MUST_REFER_TO_AN_EXPRESSION_WHOSE_TYPE_IS_A_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE: DiagnosticMessage = diag!(1170, Error, "A computed property name in a type literal must refer to an expression whose type is a literal type or a 'unique symbol' type.");
pub const A_COMMA_EXPRESSION_IS_NOT_ALLOWED_IN_A_COMPUTED_PROPERTY_NAME: DiagnosticMessage = diag!(1171, Error, "A comma expression is not allowed in a computed property name.");
pub const AN_INTERFACE_PROPERTY_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1246, Error, "An interface property cannot have an initializer.");
pub const A_TYPE_LITERAL_PROPERTY_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1247, Error, "A type literal property cannot have an initializer.");
pub const CLASSES_MAY_NOT_HAVE_A_FIELD_NAMED_CONSTRUCTOR: DiagnosticMessage = diag!(18006, Error, "Classes may not have a field named 'constructor'.");
pub const PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES: DiagnosticMessage = diag!(18016, Error, "Private identifiers are not allowed outside class bodies.");
pub const PRIVATE_IDENTIFIERS_ARE_ONLY_AVAILABLE_WHEN_TARGETING_ECMASCRIPT_2015_AND_HIGHER: DiagnosticMessage = diag!(18028, Error, "Private identifiers are only available when targeting ECMAScript 2015 and higher.");
pub const PROPERTIES_WITH_THE_ACCESSOR_MODIFIER_ARE_ONLY_AVAILABLE_WHEN_TARGETING_ECMASCRIPT_2015_AND_HIGHER: DiagnosticMessage = diag!(18045, Error, "Properties with the 'accessor' modifier are only available when targeting ECMAScript 2015 and higher.");
pub const A_MAPPED_TYPE_MAY_NOT_DECLARE_PROPERTIES_OR_METHODS: DiagnosticMessage = diag!(7061, Error, "A mapped type may not declare properties or methods.");
pub const GENERATORS_ARE_NOT_ALLOWED_IN_AN_AMBIENT_CONTEXT: DiagnosticMessage = diag!(1221, Error, "Generators are not allowed in an ambient context.");
pub const AN_OVERLOAD_SIGNATURE_CANNOT_BE_DECLARED_AS_A_GENERATOR: DiagnosticMessage = diag!(1222, Error, "An overload signature cannot be declared as a generator.");
pub const A_DEFINITE_ASSIGNMENT_ASSERTION_IS_NOT_PERMITTED_IN_THIS_CONTEXT: DiagnosticMessage = diag!(1255, Error, "A definite assignment assertion '!' is not permitted in this context.");
pub const DECLARATIONS_WITH_INITIALIZERS_CANNOT_ALSO_HAVE_DEFINITE_ASSIGNMENT_ASSERTIONS: DiagnosticMessage = diag!(1263, Error, "Declarations with initializers cannot also have definite assignment assertions.");
pub const DECLARATIONS_WITH_DEFINITE_ASSIGNMENT_ASSERTIONS_MUST_ALSO_HAVE_TYPE_ANNOTATIONS: DiagnosticMessage = diag!(1264, Error, "Declarations with definite assignment assertions must also have type annotations.");

// ============================================================================
// Object literals and destructuring
// ============================================================================
pub const AN_OBJECT_LITERAL_CANNOT_HAVE_MULTIPLE_PROPERTIES_WITH_THE_SAME_NAME: DiagnosticMessage = diag!(1117, Error, "An object literal cannot have multiple properties with the same name.");
pub const AN_OBJECT_LITERAL_CANNOT_HAVE_MULTIPLE_GET_SET_ACCESSORS_WITH_THE_SAME_NAME: DiagnosticMessage = diag!(1118, Error, "An object literal cannot have multiple get/set accessors with the same name.");
pub const AN_OBJECT_LITERAL_CANNOT_HAVE_PROPERTY_AND_ACCESSOR_WITH_THE_SAME_NAME: DiagnosticMessage = diag!(1119, Error, "An object literal cannot have property and accessor with the same name.");
pub const AN_OBJECT_MEMBER_CANNOT_BE_DECLARED_OPTIONAL: DiagnosticMessage = diag!(1162, Error, "An object member cannot be declared optional.");
pub const DID_YOU_MEAN_TO_USE_A_COLON_AN_EQUALS_CAN_ONLY_FOLLOW_A_PROPERTY_NAME_WHEN_THE_CONTAINING_OBJECT_LITERAL_IS_PART_OF_A_DESTRUCTURING_PATTERN: DiagnosticMessage = diag!(1312, Error, "Did you mean to use a ':'? An '=' can only follow a property name when the containing object literal is part of a destructuring pattern.");
pub const A_BIGINT_LITERAL_CANNOT_BE_USED_AS_A_PROPERTY_NAME: DiagnosticMessage = diag!(1539, Error, "A bigint literal cannot be used as a property name.");
pub const A_REST_ELEMENT_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1186, Error, "A rest element cannot have an initializer.");
pub const A_REST_ELEMENT_MUST_BE_LAST_IN_A_DESTRUCTURING_PATTERN: DiagnosticMessage = diag!(2462, Error, "A rest element must be last in a destructuring pattern.");
pub const A_REST_ELEMENT_CANNOT_CONTAIN_A_BINDING_PATTERN: DiagnosticMessage = diag!(2501, Error, "A rest element cannot contain a binding pattern.");
pub const A_REST_ELEMENT_CANNOT_HAVE_A_PROPERTY_NAME: DiagnosticMessage = diag!(2566, Error, "A rest element cannot have a property name.");

// ============================================================================
// Statements and control flow
// ============================================================================
pub const STATEMENTS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS: DiagnosticMessage = diag!(1036, Error, "Statements are not allowed in ambient contexts.");
pub const INITIALIZERS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS: DiagnosticMessage = diag!(1039, Error, "Initializers are not allowed in ambient contexts.");
pub const TOP_LEVEL_DECLARATIONS_IN_D_TS_FILES_MUST_START_WITH_EITHER_A_DECLARE_OR_EXPORT_MODIFIER: DiagnosticMessage = diag!(1046, Error, "Top-level declarations in .d.ts files must start with either a 'declare' or 'export' modifier.");
pub const ONLY_A_SINGLE_VARIABLE_DECLARATION_IS_ALLOWED_IN_A_FOR_IN_STATEMENT: DiagnosticMessage = diag!(1091, Error, "Only a single variable declaration is allowed in a 'for...in' statement.");
pub const A_CONTINUE_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_STATEMENT: DiagnosticMessage = diag!(1104, Error, "A 'continue' statement can only be used within an enclosing iteration statement.");
pub const A_BREAK_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_OR_SWITCH_STATEMENT: DiagnosticMessage = diag!(1105, Error, "A 'break' statement can only be used within an enclosing iteration or switch statement.");
pub const THE_LEFT_HAND_SIDE_OF_A_FOR_OF_STATEMENT_MAY_NOT_BE_ASYNC: DiagnosticMessage = diag!(1106, Error, "The left-hand side of a 'for...of' statement may not be 'async'.");
pub const JUMP_TARGET_CANNOT_CROSS_FUNCTION_BOUNDARY: DiagnosticMessage = diag!(1107, Error, "Jump target cannot cross function boundary.");
pub const A_CONTINUE_STATEMENT_CAN_ONLY_JUMP_TO_A_LABEL_OF_AN_ENCLOSING_ITERATION_STATEMENT: DiagnosticMessage = diag!(1115, Error, "A 'continue' statement can only jump to a label of an enclosing iteration statement.");
pub const A_BREAK_STATEMENT_CAN_ONLY_JUMP_TO_A_LABEL_OF_AN_ENCLOSING_STATEMENT: DiagnosticMessage = diag!(1116, Error, "A 'break' statement can only jump to a label of an enclosing statement.");
pub const VARIABLE_DECLARATION_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = diag!(1123, Error, "Variable declaration list cannot be empty.");
pub const _0_DECLARATIONS_MUST_BE_INITIALIZED: DiagnosticMessage = diag!(1155, Error, "'{0}' declarations must be initialized.");
pub const _0_DECLARATIONS_CAN_ONLY_BE_DECLARED_INSIDE_A_BLOCK: DiagnosticMessage = diag!(1156, Error, "'{0}' declarations can only be declared inside a block.");
pub const A_DESTRUCTURING_DECLARATION_MUST_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1182, Error, "A destructuring declaration must have an initializer.");
pub const AN_IMPLEMENTATION_CANNOT_BE_DECLARED_IN_AMBIENT_CONTEXTS: DiagnosticMessage = diag!(1183, Error, "An implementation cannot be declared in ambient contexts.");
pub const ONLY_A_SINGLE_VARIABLE_DECLARATION_IS_ALLOWED_IN_A_FOR_OF_STATEMENT: DiagnosticMessage = diag!(1188, Error, "Only a single variable declaration is allowed in a 'for...of' statement.");
pub const THE_VARIABLE_DECLARATION_OF_A_FOR_IN_STATEMENT_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1189, Error, "The variable declaration of a 'for...in' statement cannot have an initializer.");
pub const THE_VARIABLE_DECLARATION_OF_A_FOR_OF_STATEMENT_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1190, Error, "The variable declaration of a 'for...of' statement cannot have an initializer.");
pub const IDENTIFIER_EXPECTED_ESMODULE_IS_RESERVED_AS_AN_EXPORTED_MARKER_WHEN_TRANSFORMING_ECMASCRIPT_MODULES: DiagnosticMessage = diag!(1216, Error, "Identifier expected. '__esModule' is reserved as an exported marker when transforming ECMAScript modules.");
pub const A_CONST_INITIALIZER_IN_AN_AMBIENT_CONTEXT_MUST_BE_A_STRING_OR_NUMERIC_LITERAL_OR_LITERAL_ENUM_REFERENCE: DiagnosticMessage = diag!(1254, Error, "A 'const' initializer in an ambient context must be a string or numeric literal or literal enum reference.");
pub const THE_LEFT_HAND_SIDE_OF_A_FOR_IN_STATEMENT_CANNOT_USE_A_TYPE_ANNOTATION: DiagnosticMessage = diag!(2404, Error, "The left-hand side of a 'for...in' statement cannot use a type annotation.");
pub const LET_IS_NOT_ALLOWED_TO_BE_USED_AS_A_NAME_IN_LET_OR_CONST_DECLARATIONS: DiagnosticMessage = diag!(2480, Error, "'let' is not allowed to be used as a name in 'let' or 'const' declarations.");
pub const THE_LEFT_HAND_SIDE_OF_A_FOR_OF_STATEMENT_CANNOT_USE_A_TYPE_ANNOTATION: DiagnosticMessage = diag!(2483, Error, "The left-hand side of a 'for...of' statement cannot use a type annotation.");
pub const _0_DECLARATIONS_MAY_NOT_HAVE_BINDING_PATTERNS: DiagnosticMessage = diag!(1492, Error, "'{0}' declarations may not have binding patterns.");
pub const THE_LEFT_HAND_SIDE_OF_A_FOR_IN_STATEMENT_CANNOT_BE_A_USING_DECLARATION: DiagnosticMessage = diag!(1493, Error, "The left-hand side of a 'for...in' statement cannot be a 'using' declaration.");
pub const THE_LEFT_HAND_SIDE_OF_A_FOR_IN_STATEMENT_CANNOT_BE_AN_AWAIT_USING_DECLARATION: DiagnosticMessage = diag!(1494, Error, "The left-hand side of a 'for...in' statement cannot be an 'await using' declaration.");

// ============================================================================
// Await, yield and top-level module rules
// ============================================================================
pub const FOR_AWAIT_LOOPS_ARE_ONLY_ALLOWED_WITHIN_ASYNC_FUNCTIONS_AND_AT_THE_TOP_LEVELS_OF_MODULES: DiagnosticMessage = diag!(1103, Error, "'for await' loops are only allowed within async functions and at the top levels of modules.");
pub const A_YIELD_EXPRESSION_IS_ONLY_ALLOWED_IN_A_GENERATOR_BODY: DiagnosticMessage = diag!(1163, Error, "A 'yield' expression is only allowed in a generator body.");
pub const AWAIT_EXPRESSIONS_ARE_ONLY_ALLOWED_WITHIN_ASYNC_FUNCTIONS_AND_AT_THE_TOP_LEVELS_OF_MODULES: DiagnosticMessage = diag!(1308, Error, "'await' expressions are only allowed within async functions and at the top levels of modules.");
pub const THE_CURRENT_FILE_IS_A_COMMONJS_MODULE_AND_CANNOT_USE_AWAIT_AT_THE_TOP_LEVEL: DiagnosticMessage = diag!(1309, Error, "The current file is a CommonJS module and cannot use 'await' at the top level.");
pub const DID_YOU_MEAN_TO_MARK_THIS_FUNCTION_AS_ASYNC: DiagnosticMessage = diag!(1356, Error, "Did you mean to mark this function as 'async'?");
pub const AWAIT_EXPRESSIONS_ARE_ONLY_ALLOWED_AT_THE_TOP_LEVEL_OF_A_FILE_WHEN_THAT_FILE_IS_A_MODULE: DiagnosticMessage = diag!(1375, Error, "'await' expressions are only allowed at the top level of a file when that file is a module, but this file has no imports or exports. Consider adding an empty 'export {}' to make this file a module.");
pub const TOP_LEVEL_AWAIT_EXPRESSIONS_ARE_ONLY_ALLOWED_WHEN_THE_MODULE_OPTION_IS_SET_APPROPRIATELY: DiagnosticMessage = diag!(1378, Error, "Top-level 'await' expressions are only allowed when the 'module' option is set to 'es2022', 'esnext', 'system', 'node16', 'nodenext', or 'preserve', and the 'target' option is set to 'es2017' or higher.");
pub const FOR_AWAIT_LOOPS_ARE_ONLY_ALLOWED_AT_THE_TOP_LEVEL_OF_A_FILE_WHEN_THAT_FILE_IS_A_MODULE: DiagnosticMessage = diag!(1431, Error, "'for await' loops are only allowed at the top level of a file when that file is a module, but this file has no imports or exports. Consider adding an empty 'export {}' to make this file a module.");
pub const TOP_LEVEL_FOR_AWAIT_LOOPS_ARE_ONLY_ALLOWED_WHEN_THE_MODULE_OPTION_IS_SET_APPROPRIATELY: DiagnosticMessage = diag!(1432, Error, "Top-level 'for await' loops are only allowed when the 'module' option is set to 'es2022', 'esnext', 'system', 'node16', 'nodenext', or 'preserve', and the 'target' option is set to 'es2017' or higher.");
pub const YIELD_EXPRESSIONS_CANNOT_BE_USED_IN_A_PARAMETER_INITIALIZER: DiagnosticMessage = diag!(2523, Error, "'yield' expressions cannot be used in a parameter initializer.");
pub const AWAIT_EXPRESSIONS_CANNOT_BE_USED_IN_A_PARAMETER_INITIALIZER: DiagnosticMessage = diag!(2524, Error, "'await' expressions cannot be used in a parameter initializer.");
pub const AWAIT_USING_STATEMENTS_ARE_ONLY_ALLOWED_WITHIN_ASYNC_FUNCTIONS_AND_AT_THE_TOP_LEVELS_OF_MODULES: DiagnosticMessage = diag!(2852, Error, "'await using' statements are only allowed within async functions and at the top levels of modules.");
pub const AWAIT_USING_STATEMENTS_ARE_ONLY_ALLOWED_AT_THE_TOP_LEVEL_OF_A_FILE_WHEN_THAT_FILE_IS_A_MODULE: DiagnosticMessage = diag!(2853, Error, "'await using' statements are only allowed at the top level of a file when that file is a module, but this file has no imports or exports. Consider adding an empty 'export {}' to make this file a module.");
pub const TOP_LEVEL_AWAIT_USING_STATEMENTS_ARE_ONLY_ALLOWED_WHEN_THE_MODULE_OPTION_IS_SET_APPROPRIATELY: DiagnosticMessage = diag!(2854, Error, "Top-level 'await using' statements are only allowed when the 'module' option is set to 'es2022', 'esnext', 'system', 'node16', 'nodenext', or 'preserve', and the 'target' option is set to 'es2017' or higher.");
pub const AWAIT_EXPRESSION_CANNOT_BE_USED_INSIDE_A_CLASS_STATIC_BLOCK: DiagnosticMessage = diag!(18037, Error, "'await' expression cannot be used inside a class static block.");
pub const AWAIT_USING_STATEMENTS_CANNOT_BE_USED_INSIDE_A_CLASS_STATIC_BLOCK: DiagnosticMessage = diag!(18054, Error, "'await using' statements cannot be used inside a class static block.");

// ============================================================================
// Literals, types and expressions
// ============================================================================
pub const NUMERIC_LITERALS_WITH_ABSOLUTE_VALUES_EQUAL_TO_2_53_OR_GREATER_ARE_TOO_LARGE_TO_BE_REPRESENTED_ACCURATELY_AS_INTEGERS: DiagnosticMessage = diag!(80008, Suggestion, "Numeric literals with absolute values equal to 2^53 or greater are too large to be represented accurately as integers.");
pub const BIGINT_LITERALS_ARE_NOT_AVAILABLE_WHEN_TARGETING_LOWER_THAN_ES2020: DiagnosticMessage = diag!(2737, Error, "BigInt literals are not available when targeting lower than ES2020.");
pub const A_PROPERTY_OF_AN_INTERFACE_OR_TYPE_LITERAL_WHOSE_TYPE_IS_A_UNIQUE_SYMBOL_TYPE_MUST_BE_READONLY: DiagnosticMessage = diag!(1330, Error, "A property of an interface or type literal whose type is a 'unique symbol' type must be 'readonly'.");
pub const A_PROPERTY_OF_A_CLASS_WHOSE_TYPE_IS_A_UNIQUE_SYMBOL_TYPE_MUST_BE_BOTH_STATIC_AND_READONLY: DiagnosticMessage = diag!(1331, Error, "A property of a class whose type is a 'unique symbol' type must be both 'static' and 'readonly'.");
pub const A_VARIABLE_WHOSE_TYPE_IS_A_UNIQUE_SYMBOL_TYPE_MUST_BE_CONST: DiagnosticMessage = diag!(1332, Error, "A variable whose type is a 'unique symbol' type must be 'const'.");
pub const UNIQUE_SYMBOL_TYPES_MAY_NOT_BE_USED_ON_A_VARIABLE_DECLARATION_WITH_A_BINDING_NAME: DiagnosticMessage = diag!(1333, Error, "'unique symbol' types may not be used on a variable declaration with a binding name.");
pub const UNIQUE_SYMBOL_TYPES_ARE_ONLY_ALLOWED_ON_VARIABLES_IN_A_VARIABLE_STATEMENT: DiagnosticMessage = diag!(1334, Error, "'unique symbol' types are only allowed on variables in a variable statement.");
pub const UNIQUE_SYMBOL_TYPES_ARE_NOT_ALLOWED_HERE: DiagnosticMessage = diag!(1335, Error, "'unique symbol' types are not allowed here.");
pub const READONLY_TYPE_MODIFIER_IS_ONLY_PERMITTED_ON_ARRAY_AND_TUPLE_LITERAL_TYPES: DiagnosticMessage = diag!(1354, Error, "'readonly' type modifier is only permitted on array and tuple literal types.");
pub const TAGGED_TEMPLATE_EXPRESSIONS_ARE_NOT_PERMITTED_IN_AN_OPTIONAL_CHAIN: DiagnosticMessage = diag!(1358, Error, "Tagged template expressions are not permitted in an optional chain.");
pub const _0_IS_NOT_A_VALID_META_PROPERTY_FOR_KEYWORD_1_DID_YOU_MEAN_2: DiagnosticMessage = diag!(17012, Error, "'{0}' is not a valid meta-property for keyword '{1}'. Did you mean '{2}'?");

// ============================================================================
// Imports and exports
// ============================================================================
pub const A_TYPE_ONLY_IMPORT_CAN_SPECIFY_A_DEFAULT_IMPORT_OR_NAMED_BINDINGS_BUT_NOT_BOTH: DiagnosticMessage = diag!(1363, Error, "A type-only import can specify a default import or named bindings, but not both.");
pub const THE_TYPE_MODIFIER_CANNOT_BE_USED_ON_A_NAMED_IMPORT_WHEN_IMPORT_TYPE_IS_USED_ON_ITS_IMPORT_STATEMENT: DiagnosticMessage = diag!(2206, Error, "The 'type' modifier cannot be used on a named import when 'import type' is used on its import statement.");
pub const THE_TYPE_MODIFIER_CANNOT_BE_USED_ON_A_NAMED_EXPORT_WHEN_EXPORT_TYPE_IS_USED_ON_ITS_EXPORT_STATEMENT: DiagnosticMessage = diag!(2207, Error, "The 'type' modifier cannot be used on a named export when 'export type' is used on its export statement.");
pub const ESM_SYNTAX_IS_NOT_ALLOWED_IN_A_COMMONJS_MODULE_WHEN_VERBATIMMODULESYNTAX_IS_ENABLED: DiagnosticMessage = diag!(1286, Error, "ESM syntax is not allowed in a CommonJS module when 'verbatimModuleSyntax' is enabled.");
pub const DYNAMIC_IMPORTS_ARE_ONLY_SUPPORTED_WHEN_THE_MODULE_FLAG_IS_SET_APPROPRIATELY: DiagnosticMessage = diag!(1323, Error, "Dynamic imports are only supported when the '--module' flag is set to 'es2020', 'es2022', 'esnext', 'commonjs', 'amd', 'system', 'umd', 'node16', or 'nodenext'.");
pub const DYNAMIC_IMPORTS_ONLY_SUPPORT_A_SECOND_ARGUMENT_WHEN_THE_MODULE_OPTION_IS_SET_APPROPRIATELY: DiagnosticMessage = diag!(1324, Error, "Dynamic imports only support a second argument when the '--module' option is set to 'esnext', 'node16', 'nodenext', or 'preserve'.");
pub const ARGUMENT_OF_DYNAMIC_IMPORT_CANNOT_BE_SPREAD_ELEMENT: DiagnosticMessage = diag!(1325, Error, "Argument of dynamic import cannot be spread element.");
pub const THIS_USE_OF_IMPORT_IS_INVALID: DiagnosticMessage = diag!(1326, Error, "This use of 'import' is invalid. 'import()' calls can be written, but they must have parentheses and cannot have type arguments.");
pub const DYNAMIC_IMPORTS_CAN_ONLY_ACCEPT_A_MODULE_SPECIFIER_AND_AN_OPTIONAL_SET_OF_ATTRIBUTES_AS_ARGUMENTS: DiagnosticMessage = diag!(1450, Error, "Dynamic imports can only accept a module specifier and an optional set of attributes as arguments");
pub const AN_IMPORT_DECLARATION_CANNOT_HAVE_MODIFIERS: DiagnosticMessage = diag!(1191, Error, "An import declaration cannot have modifiers.");
pub const AN_EXPORT_DECLARATION_CANNOT_HAVE_MODIFIERS: DiagnosticMessage = diag!(1193, Error, "An export declaration cannot have modifiers.");
pub const AN_EXPORT_ASSIGNMENT_CANNOT_HAVE_MODIFIERS: DiagnosticMessage = diag!(1120, Error, "An export assignment cannot have modifiers.");
pub const AN_IMPORT_DECLARATION_CAN_ONLY_BE_USED_AT_THE_TOP_LEVEL_OF_A_NAMESPACE_OR_MODULE: DiagnosticMessage = diag!(1232, Error, "An import declaration can only be used at the top level of a namespace or module.");
pub const AN_EXPORT_DECLARATION_CAN_ONLY_BE_USED_AT_THE_TOP_LEVEL_OF_A_NAMESPACE_OR_MODULE: DiagnosticMessage = diag!(1233, Error, "An export declaration can only be used at the top level of a namespace or module.");
pub const AN_EXPORT_ASSIGNMENT_MUST_BE_AT_THE_TOP_LEVEL_OF_A_FILE_OR_MODULE_DECLARATION: DiagnosticMessage = diag!(1231, Error, "An export assignment must be at the top level of a file or module declaration.");
pub const AN_AMBIENT_MODULE_DECLARATION_IS_ONLY_ALLOWED_AT_THE_TOP_LEVEL_IN_A_FILE: DiagnosticMessage = diag!(1234, Error, "An ambient module declaration is only allowed at the top level in a file.");
pub const A_NAMESPACE_DECLARATION_IS_ONLY_ALLOWED_AT_THE_TOP_LEVEL_OF_A_NAMESPACE_OR_MODULE: DiagnosticMessage = diag!(1235, Error, "A namespace declaration is only allowed at the top level of a namespace or module.");
pub const EXPORT_DECLARATIONS_ARE_NOT_PERMITTED_IN_A_NAMESPACE: DiagnosticMessage = diag!(1194, Error, "Export declarations are not permitted in a namespace.");
pub const AUGMENTATIONS_FOR_THE_GLOBAL_SCOPE_SHOULD_HAVE_DECLARE_MODIFIER_UNLESS_THEY_APPEAR_IN_ALREADY_AMBIENT_CONTEXT: DiagnosticMessage = diag!(2670, Error, "Augmentations for the global scope should have 'declare' modifier unless they appear in already ambient context.");

// ============================================================================
// Statements
// ============================================================================
pub const DUPLICATE_LABEL_0: DiagnosticMessage = diag!(1114, Error, "Duplicate label '{0}'.");
pub const A_RETURN_STATEMENT_CAN_ONLY_BE_USED_WITHIN_A_FUNCTION_BODY: DiagnosticMessage = diag!(1108, Error, "A 'return' statement can only be used within a function body.");
pub const A_DEFAULT_CLAUSE_CANNOT_APPEAR_MORE_THAN_ONCE_IN_A_SWITCH_STATEMENT: DiagnosticMessage = diag!(1113, Error, "A 'default' clause cannot appear more than once in a 'switch' statement.");
pub const CATCH_CLAUSE_VARIABLE_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1197, Error, "Catch clause variable cannot have an initializer.");
pub const CATCH_CLAUSE_VARIABLE_TYPE_ANNOTATION_MUST_BE_ANY_OR_UNKNOWN_IF_SPECIFIED: DiagnosticMessage = diag!(1196, Error, "Catch clause variable type annotation must be 'any' or 'unknown' if specified.");

// ============================================================================
// Checker
// ============================================================================
pub const INITIALIZER_OF_INSTANCE_MEMBER_VARIABLE_0_CANNOT_REFERENCE_IDENTIFIER_1_DECLARED_IN_THE_CONSTRUCTOR: DiagnosticMessage = diag!(2301, Error, "Initializer of instance member variable '{0}' cannot reference identifier '{1}' declared in the constructor.");
pub const TYPE_OF_INSTANCE_MEMBER_VARIABLE_0_CANNOT_REFERENCE_IDENTIFIER_1_DECLARED_IN_THE_CONSTRUCTOR: DiagnosticMessage = diag!(2844, Error, "Type of instance member variable '{0}' cannot reference identifier '{1}' declared in the constructor.");
pub const PARAMETER_0_CANNOT_REFERENCE_ITSELF: DiagnosticMessage = diag!(2372, Error, "Parameter '{0}' cannot reference itself.");
pub const PARAMETER_0_CANNOT_REFERENCE_IDENTIFIER_1_DECLARED_AFTER_IT: DiagnosticMessage = diag!(2373, Error, "Parameter '{0}' cannot reference identifier '{1}' declared after it.");
pub const _0_CANNOT_BE_USED_AS_A_VALUE_BECAUSE_IT_WAS_IMPORTED_USING_IMPORT_TYPE: DiagnosticMessage = diag!(1361, Error, "'{0}' cannot be used as a value because it was imported using 'import type'.");
pub const _0_CANNOT_BE_USED_AS_A_VALUE_BECAUSE_IT_WAS_EXPORTED_USING_EXPORT_TYPE: DiagnosticMessage = diag!(1362, Error, "'{0}' cannot be used as a value because it was exported using 'export type'.");
pub const _0_WAS_IMPORTED_HERE: DiagnosticMessage = diag!(1376, Message, "'{0}' was imported here.");
pub const _0_WAS_EXPORTED_HERE: DiagnosticMessage = diag!(1377, Message, "'{0}' was exported here.");
pub const CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_A_CONSTANT: DiagnosticMessage = diag!(2588, Error, "Cannot assign to '{0}' because it is a constant.");
pub const CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_AN_ENUM: DiagnosticMessage = diag!(2628, Error, "Cannot assign to '{0}' because it is an enum.");
pub const CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_A_CLASS: DiagnosticMessage = diag!(2629, Error, "Cannot assign to '{0}' because it is a class.");
pub const CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_A_FUNCTION: DiagnosticMessage = diag!(2630, Error, "Cannot assign to '{0}' because it is a function.");
pub const CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_A_NAMESPACE: DiagnosticMessage = diag!(2631, Error, "Cannot assign to '{0}' because it is a namespace.");
pub const CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_AN_IMPORT: DiagnosticMessage = diag!(2632, Error, "Cannot assign to '{0}' because it is an import.");
pub const CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_NOT_A_VARIABLE: DiagnosticMessage = diag!(2539, Error, "Cannot assign to '{0}' because it is not a variable.");
pub const CANNOT_FIND_NAME_0_DID_YOU_MEAN_TO_WRITE_THIS_IN_AN_ASYNC_FUNCTION: DiagnosticMessage = diag!(2311, Error, "Cannot find name '{0}'. Did you mean to write this in an async function?");
pub const CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_INSTALL_TYPE_DEFINITIONS_FOR_NODE: DiagnosticMessage = diag!(2580, Error, "Cannot find name '{0}'. Do you need to install type definitions for node? Try `npm i --save-dev @types/node`.");
pub const CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_INSTALL_TYPE_DEFINITIONS_FOR_JQUERY: DiagnosticMessage = diag!(2581, Error, "Cannot find name '{0}'. Do you need to install type definitions for jQuery? Try `npm i --save-dev @types/jquery`.");
pub const CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_INSTALL_TYPE_DEFINITIONS_FOR_A_TEST_RUNNER: DiagnosticMessage = diag!(2582, Error, "Cannot find name '{0}'. Do you need to install type definitions for a test runner? Try `npm i --save-dev @types/jest` or `npm i --save-dev @types/mocha`.");
pub const CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_CHANGE_YOUR_TARGET_LIBRARY: DiagnosticMessage = diag!(2583, Error, "Cannot find name '{0}'. Do you need to change your target library? Try changing the 'lib' compiler option to '{1}' or later.");
pub const CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_CHANGE_YOUR_TARGET_LIBRARY_INCLUDE_DOM: DiagnosticMessage = diag!(2584, Error, "Cannot find name '{0}'. Do you need to change your target library? Try changing the 'lib' compiler option to include 'dom'.");
pub const CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_INSTALL_TYPE_DEFINITIONS_FOR_BUN: DiagnosticMessage = diag!(2867, Error, "Cannot find name '{0}'. Do you need to install type definitions for Bun? Try `npm i --save-dev @types/bun`.");
pub const NO_VALUE_EXISTS_IN_SCOPE_FOR_THE_SHORTHAND_PROPERTY_0: DiagnosticMessage = diag!(18004, Error, "No value exists in scope for the shorthand property '{0}'. Either declare one or provide an initializer.");
pub const AN_EXPORT_ASSIGNMENT_CANNOT_BE_USED_IN_A_MODULE_WITH_OTHER_EXPORTED_ELEMENTS: DiagnosticMessage = diag!(2309, Error, "An export assignment cannot be used in a module with other exported elements.");
pub const WITH_STATEMENTS_ARE_NOT_ALLOWED_IN_AN_ASYNC_FUNCTION_BLOCK: DiagnosticMessage = diag!(1300, Error, "'with' statements are not allowed in an async function block.");
pub const A_RETURN_STATEMENT_CANNOT_BE_USED_INSIDE_A_CLASS_STATIC_BLOCK: DiagnosticMessage = diag!(18041, Error, "A 'return' statement cannot be used inside a class static block.");
pub const TYPE_ALIAS_0_CIRCULARLY_REFERENCES_ITSELF: DiagnosticMessage = diag!(2456, Error, "Type alias '{0}' circularly references itself.");
pub const _0_IS_REFERENCED_DIRECTLY_OR_INDIRECTLY_IN_ITS_OWN_TYPE_ANNOTATION: DiagnosticMessage = diag!(2502, Error, "'{0}' is referenced directly or indirectly in its own type annotation.");
pub const NAMESPACE_0_HAS_NO_EXPORTED_MEMBER_1: DiagnosticMessage = diag!(2694, Error, "Namespace '{0}' has no exported member '{1}'.");
pub const GENERIC_TYPE_0_REQUIRES_1_TYPE_ARGUMENT_S: DiagnosticMessage = diag!(2314, Error, "Generic type '{0}' requires {1} type argument(s).");
pub const GENERIC_TYPE_0_REQUIRES_BETWEEN_1_AND_2_TYPE_ARGUMENTS: DiagnosticMessage = diag!(2707, Error, "Generic type '{0}' requires between {1} and {2} type arguments.");
pub const TYPE_0_IS_NOT_GENERIC: DiagnosticMessage = diag!(2315, Error, "Type '{0}' is not generic.");
pub const _0_REFERS_TO_A_VALUE_BUT_IS_BEING_USED_AS_A_TYPE_HERE_DID_YOU_MEAN_TYPEOF_0: DiagnosticMessage = diag!(2749, Error, "'{0}' refers to a value, but is being used as a type here. Did you mean 'typeof {0}'?");
pub const ENUM_MEMBER_MUST_HAVE_INITIALIZER: DiagnosticMessage = diag!(1061, Error, "Enum member must have initializer.");
pub const CONST_ENUM_MEMBER_INITIALIZERS_MUST_BE_CONSTANT_EXPRESSIONS: DiagnosticMessage = diag!(2474, Error, "const enum member initializers must be constant expressions.");
pub const CIRCULAR_DEFINITION_OF_IMPORT_ALIAS_0: DiagnosticMessage = diag!(2303, Error, "Circular definition of import alias '{0}'.");
pub const MODULE_0_HAS_NO_EXPORTED_MEMBER_1: DiagnosticMessage = diag!(2305, Error, "Module '{0}' has no exported member '{1}'.");
pub const CANNOT_FIND_MODULE_0_OR_ITS_CORRESPONDING_TYPE_DECLARATIONS: DiagnosticMessage = diag!(2307, Error, "Cannot find module '{0}' or its corresponding type declarations.");
pub const BLOCK_SCOPED_VARIABLE_0_USED_BEFORE_ITS_DECLARATION: DiagnosticMessage = diag!(2448, Error, "Block-scoped variable '{0}' used before its declaration.");
pub const CLASS_0_USED_BEFORE_ITS_DECLARATION: DiagnosticMessage = diag!(2449, Error, "Class '{0}' used before its declaration.");
pub const ENUM_0_USED_BEFORE_ITS_DECLARATION: DiagnosticMessage = diag!(2450, Error, "Enum '{0}' used before its declaration.");
pub const _0_IS_DECLARED_HERE: DiagnosticMessage = diag!(2728, Message, "'{0}' is declared here.");
pub const _0_ONLY_REFERS_TO_A_TYPE_BUT_IS_BEING_USED_AS_A_VALUE_HERE: DiagnosticMessage = diag!(2693, Error, "'{0}' only refers to a type, but is being used as a value here.");
pub const CANNOT_FIND_NAMESPACE_0: DiagnosticMessage = diag!(2503, Error, "Cannot find namespace '{0}'.");
pub const ONLY_AMBIENT_MODULES_CAN_USE_QUOTED_NAMES: DiagnosticMessage = diag!(1035, Error, "Only ambient modules can use quoted names.");
pub const A_CLASS_DECLARATION_WITHOUT_THE_DEFAULT_MODIFIER_MUST_HAVE_A_NAME: DiagnosticMessage = diag!(1211, Error, "A class declaration without the 'default' modifier must have a name.");
pub const TYPE_PARAMETER_0_HAS_A_CIRCULAR_CONSTRAINT: DiagnosticMessage = diag!(2313, Error, "Type parameter '{0}' has a circular constraint.");
pub const IMPORT_0_CONFLICTS_WITH_GLOBAL_VALUE_USED_IN_THIS_FILE_SO_MUST_BE_DECLARED_WITH_A_TYPE_ONLY_IMPORT_WHEN_ISOLATEDMODULES_IS_ENABLED: DiagnosticMessage = diag!(2865, Error, "Import '{0}' conflicts with global value used in this file, so must be declared with a type-only import when 'isolatedModules' is enabled.");
pub const TYPE_0_RECURSIVELY_REFERENCES_ITSELF_AS_A_BASE_TYPE: DiagnosticMessage = diag!(2310, Error, "Type '{0}' recursively references itself as a base type.");
pub const MODULE_0_HAS_NO_DEFAULT_EXPORT: DiagnosticMessage = diag!(1192, Error, "Module '{0}' has no default export.");
pub const CONST_ENUM_MEMBER_INITIALIZER_WAS_EVALUATED_TO_A_NON_FINITE_VALUE: DiagnosticMessage = diag!(2477, Error, "'const' enum member initializer was evaluated to a non-finite value.");
pub const CONST_ENUM_MEMBER_INITIALIZER_WAS_EVALUATED_TO_DISALLOWED_VALUE_NAN: DiagnosticMessage = diag!(2478, Error, "'const' enum member initializer was evaluated to disallowed value 'NaN'.");
pub const IMPORT_DECLARATION_CONFLICTS_WITH_LOCAL_DECLARATION_OF_0: DiagnosticMessage = diag!(2440, Error, "Import declaration conflicts with local declaration of '{0}'.");
pub const MODULE_0_HAS_ALREADY_EXPORTED_A_MEMBER_NAMED_1_CONSIDER_EXPLICITLY_RE_EXPORTING_TO_RESOLVE_THE_AMBIGUITY: DiagnosticMessage = diag!(2308, Error, "Module {0} has already exported a member named '{1}'. Consider explicitly re-exporting to resolve the ambiguity.");
pub const A_MEMBER_INITIALIZER_IN_A_ENUM_DECLARATION_CANNOT_REFERENCE_MEMBERS_DECLARED_AFTER_IT_INCLUDING_MEMBERS_DEFINED_IN_OTHER_ENUMS: DiagnosticMessage = diag!(2651, Error, "A member initializer in a enum declaration cannot reference members declared after it, including members defined in other enums.");
pub const FILE_0_IS_NOT_A_MODULE: DiagnosticMessage = diag!(2306, Error, "File '{0}' is not a module.");
