//! Scenarios S1-S6 (spec §8), exercised against [`lower_body`] directly.

use std::collections::HashMap;

use pretty_assertions::assert_eq;

use candy_diagnostic::LoweringErrorKind;
use candy_ir::{
    AstId, CandyType, DeclarationId, DeclarationKind, ExprArena, ExprKind, FunctionAst, HirExprKind,
    HirIdentifier, HirLiteral, HirStringPart, Name, ResourceId, Span, StringInterner, StringPart,
    ValueParameter,
};

use super::lower_body;
use crate::oracle::{FunctionSignature, LoweringDb};

struct TestDb {
    interner: StringInterner,
    functions: HashMap<DeclarationId, (FunctionAst, FunctionSignature)>,
}

impl TestDb {
    fn new() -> Self {
        TestDb {
            interner: StringInterner::new(),
            functions: HashMap::new(),
        }
    }

    fn declare(&mut self, simple_name: Name, ast: FunctionAst, signature: FunctionSignature) -> DeclarationId {
        let declaration = DeclarationId::new(ResourceId::new(0), vec![simple_name], DeclarationKind::Function);
        self.functions.insert(declaration.clone(), (ast, signature));
        declaration
    }
}

impl LoweringDb for TestDb {
    fn interner(&self) -> &StringInterner {
        &self.interner
    }

    fn function_ast(&self, declaration: &DeclarationId) -> Option<FunctionAst> {
        self.functions.get(declaration).map(|(ast, _)| ast.clone())
    }

    fn function_signature(&self, declaration: &DeclarationId) -> FunctionSignature {
        self.functions
            .get(declaration)
            .map(|(_, signature)| signature.clone())
            .expect("declaration registered by the test")
    }

    fn is_assignable_to(&self, from: &CandyType, to: &CandyType) -> bool {
        from.is_never() || matches!(to, CandyType::Any) || from == to
    }

    fn declaration_span(&self, _declaration: &DeclarationId) -> Span {
        Span::DUMMY
    }
}

fn unit_signature() -> FunctionSignature {
    FunctionSignature {
        param_types: Vec::new(),
        return_type: CandyType::Unit,
        has_this: false,
    }
}

fn int_signature() -> FunctionSignature {
    FunctionSignature {
        param_types: Vec::new(),
        return_type: CandyType::Int,
        has_this: false,
    }
}

#[test]
fn s1_unit_empty_body_lowers_to_empty_sequence() {
    let mut db = TestDb::new();
    let f = db.interner.intern("f");
    let ast = FunctionAst {
        name: f,
        params: Vec::new(),
        body: Some(Vec::new()),
        arena: ExprArena::new(),
    };
    let declaration = db.declare(f, ast, unit_signature());

    let result = lower_body(&db, declaration, ResourceId::new(0)).expect("declaration has a body");
    let (expressions, id_map) = result.expect("no errors expected");
    assert!(expressions.is_empty());
    assert!(id_map.is_empty());
}

#[test]
fn s2_int_literal_body_synthesizes_a_return() {
    let mut db = TestDb::new();
    let f = db.interner.intern("f");
    let mut arena = ExprArena::new();
    let literal = arena.push(Span::new(17, 19), ExprKind::Int(42));
    let ast = FunctionAst {
        name: f,
        params: Vec::new(),
        body: Some(vec![literal]),
        arena,
    };
    let declaration = db.declare(f, ast, int_signature());

    let result = lower_body(&db, declaration, ResourceId::new(0)).expect("declaration has a body");
    let (expressions, id_map) = result.expect("no errors expected");
    assert_eq!(expressions.len(), 1);
    match &expressions[0].kind {
        HirExprKind::Return { value, .. } => {
            assert!(matches!(value.kind, HirExprKind::Literal(HirLiteral::Int(42))));
        }
        other => panic!("expected a synthesized return, got {other:?}"),
    }
    // The literal's id is recorded; the synthesized return's fresh id is not.
    assert_eq!(id_map.len(), 1);
    assert_eq!(id_map.get_by_ast(literal).unwrap().index(), 0);
    assert_eq!(expressions[0].id.index(), 1);
}

#[test]
fn s3_mismatched_literal_type_is_one_invalid_expression_type_error() {
    let mut db = TestDb::new();
    let f = db.interner.intern("f");
    let mut arena = ExprArena::new();
    let literal_span = Span::new(17, 21);
    let literal = arena.push(literal_span, ExprKind::Bool(true));
    let ast = FunctionAst {
        name: f,
        params: Vec::new(),
        body: Some(vec![literal]),
        arena,
    };
    let declaration = db.declare(f, ast, int_signature());

    let result = lower_body(&db, declaration, ResourceId::new(0)).expect("declaration has a body");
    let errors = result.expect_err("`true` is not assignable to Int");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LoweringErrorKind::InvalidExpressionType);
    assert_eq!(errors[0].location.span, literal_span);
}

#[test]
fn s4_non_last_expression_lowers_with_no_expected_type() {
    let mut db = TestDb::new();
    let f = db.interner.intern("f");
    let mut arena = ExprArena::new();
    let first = arena.push(Span::new(17, 18), ExprKind::Int(1));
    let last = arena.push(Span::new(19, 20), ExprKind::Int(2));
    let ast = FunctionAst {
        name: f,
        params: Vec::new(),
        body: Some(vec![first, last]),
        arena,
    };
    let declaration = db.declare(f, ast, int_signature());

    let result = lower_body(&db, declaration, ResourceId::new(0)).expect("declaration has a body");
    let (expressions, _id_map) = result.expect("no errors expected");
    assert_eq!(expressions.len(), 2);
    assert!(matches!(expressions[0].kind, HirExprKind::Literal(HirLiteral::Int(1))));
    match &expressions[1].kind {
        HirExprKind::Return { value, .. } => {
            assert!(matches!(value.kind, HirExprKind::Literal(HirLiteral::Int(2))));
        }
        other => panic!("expected a synthesized return, got {other:?}"),
    }
}

#[test]
fn s5_explicit_return_is_not_rewrapped() {
    let mut db = TestDb::new();
    let f = db.interner.intern("f");
    let mut arena = ExprArena::new();
    let seven = arena.push(Span::new(24, 25), ExprKind::Int(7));
    let return_expr = arena.push(
        Span::new(17, 25),
        ExprKind::Return {
            label: None,
            value: Some(seven),
        },
    );
    let ast = FunctionAst {
        name: f,
        params: Vec::new(),
        body: Some(vec![return_expr]),
        arena,
    };
    let declaration = db.declare(f, ast, int_signature());

    let result = lower_body(&db, declaration, ResourceId::new(0)).expect("declaration has a body");
    let (expressions, _id_map) = result.expect("no errors expected");
    assert_eq!(expressions.len(), 1);
    match &expressions[0].kind {
        HirExprKind::Return { value, .. } => {
            assert!(matches!(value.kind, HirExprKind::Literal(HirLiteral::Int(7))));
        }
        other => panic!("expected the explicit return untouched, got {other:?}"),
    }
}

#[test]
fn s6_interpolated_parameter_resolves_through_the_function_context() {
    let mut db = TestDb::new();
    let f = db.interner.intern("f");
    let x = db.interner.intern("x");

    let mut arena = ExprArena::new();
    let interpolated = arena.push(Span::new(20, 21), ExprKind::Identifier(x));
    let string_literal = arena.push(
        Span::new(14, 22),
        ExprKind::StringLiteral(vec![
            StringPart::Literal("v=".to_string()),
            StringPart::Interpolated(interpolated),
        ]),
    );
    let param_ast_id = AstId::new(1000);
    let ast = FunctionAst {
        name: f,
        params: vec![ValueParameter {
            ast_id: param_ast_id,
            name: x,
        }],
        body: Some(vec![string_literal]),
        arena,
    };
    let signature = FunctionSignature {
        param_types: vec![CandyType::Int],
        return_type: CandyType::String,
        has_this: false,
    };
    let declaration = db.declare(f, ast, signature);

    let result = lower_body(&db, declaration, ResourceId::new(0)).expect("declaration has a body");
    let (expressions, id_map) = result.expect("no errors expected");
    assert_eq!(expressions.len(), 1);

    let HirExprKind::Return { value, .. } = &expressions[0].kind else {
        panic!("expected a synthesized return, got {:?}", expressions[0].kind);
    };
    let HirExprKind::Literal(HirLiteral::String(parts)) = &value.kind else {
        panic!("expected a string literal, got {:?}", value.kind);
    };
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], HirStringPart::Literal(text) if text == "v="));
    match &parts[1] {
        HirStringPart::Interpolated(identifier_expr) => match &identifier_expr.kind {
            HirExprKind::Identifier(HirIdentifier::Parameter { name, ty, .. }) => {
                assert_eq!(*name, x);
                assert_eq!(*ty, CandyType::Int);
            }
            other => panic!("expected a parameter identifier, got {other:?}"),
        },
        other => panic!("expected an interpolated part, got {other:?}"),
    }

    assert!(id_map.get_by_ast(param_ast_id).is_some());
    assert!(id_map.get_by_ast(interpolated).is_some());
    assert!(id_map.get_by_ast(string_literal).is_some());
    assert_eq!(id_map.len(), 3);
}

// === Property tests (§8 P1, P2, P4, P5, P6) ===

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod proptest_body_lowering {
    use proptest::prelude::*;

    use super::{int_signature, unit_signature, TestDb};
    use crate::lower::lower_body;
    use candy_ir::{ExprArena, ExprKind, FunctionAst, HirExprKind, ResourceId, Span};

    /// Builds a function body of `ints.len()` integer-literal statements and
    /// lowers it with an `Int`-returning signature, so every body is
    /// non-empty and the last literal becomes the synthesized return.
    fn lower_int_literal_body(ints: &[i64]) -> (Vec<candy_ir::HirExpr>, candy_ir::BodyAstToHirIds) {
        let mut db = TestDb::new();
        let f = db.interner.intern("f");
        let mut arena = ExprArena::new();
        let mut body = Vec::with_capacity(ints.len());
        for (index, value) in ints.iter().enumerate() {
            let span = Span::new(index as u32, index as u32 + 1);
            body.push(arena.push(span, ExprKind::Int(*value)));
        }
        let ast = FunctionAst {
            name: f,
            params: Vec::new(),
            body: Some(body),
            arena,
        };
        let declaration = db.declare(f, ast, int_signature());
        let result = lower_body(&db, declaration, ResourceId::new(0)).expect("declaration has a body");
        result.expect("every Int literal is assignable to Int")
    }

    proptest! {
        /// P1/P2: the id map stays total and injective over every lowered
        /// body, regardless of how many statements it has.
        #[test]
        fn id_map_is_total_and_injective_over_body_length(len in 1usize..16) {
            let ints: Vec<i64> = (0..len as i64).collect();
            let (expressions, id_map) = lower_int_literal_body(&ints);

            // One id-map entry per source literal; the synthesized return's
            // fresh id is deliberately excluded (it has no AST counterpart).
            prop_assert_eq!(id_map.len(), len);
            prop_assert_eq!(expressions.len(), len);

            let mut seen_locals = std::collections::HashSet::new();
            for index in 0..len {
                let ast_id = candy_ir::AstId::new(index as u32);
                let local = id_map.get_by_ast(ast_id).expect("every lowered literal is recorded");
                prop_assert!(seen_locals.insert(local.clone()), "local id reused across entries");
                prop_assert_eq!(id_map.get_by_local(local), Some(ast_id));
            }
        }

        /// P4: lowering the same body twice produces equal HIR and equal id
        /// maps — the algorithm carries no hidden nondeterminism.
        #[test]
        fn lowering_is_deterministic(ints in proptest::collection::vec(any::<i64>(), 0..8)) {
            // At least one statement, so the tail is always a real literal.
            let mut ints = ints;
            if ints.is_empty() {
                ints.push(0);
            }
            let first = lower_int_literal_body(&ints);
            let second = lower_int_literal_body(&ints);
            prop_assert_eq!(first, second);
        }

        /// P5: an empty `Unit`-returning body always lowers to an empty
        /// sequence, never a *missing-return* diagnostic.
        #[test]
        fn unit_body_of_any_length_never_misses_a_return(len in 0usize..8) {
            let mut db = TestDb::new();
            let f = db.interner.intern("f");
            let mut arena = ExprArena::new();
            let mut body = Vec::with_capacity(len);
            for index in 0..len {
                let span = Span::new(index as u32, index as u32 + 1);
                body.push(arena.push(span, ExprKind::Int(index as i64)));
            }
            let ast = FunctionAst {
                name: f,
                params: Vec::new(),
                body: Some(body),
                arena,
            };
            let declaration = db.declare(f, ast, unit_signature());

            let result = lower_body(&db, declaration, ResourceId::new(0)).expect("declaration has a body");
            let (expressions, _id_map) = result.expect("Unit body never requires a return");
            if len == 0 {
                prop_assert!(expressions.is_empty());
            } else {
                prop_assert_eq!(expressions.len(), len);
            }
        }

        /// P6: the synthesized-return wrapper is idempotent — the tail of a
        /// non-`Unit` body is a `return` exactly once, however many leading
        /// statements precede it.
        #[test]
        fn tail_of_non_unit_body_is_wrapped_exactly_once(len in 1usize..16) {
            let ints: Vec<i64> = (0..len as i64).collect();
            let (expressions, _id_map) = lower_int_literal_body(&ints);

            let tail = expressions.last().expect("non-empty body");
            prop_assert!(matches!(tail.kind, HirExprKind::Return { .. }));
            for statement in &expressions[..expressions.len() - 1] {
                prop_assert!(!matches!(statement.kind, HirExprKind::Return { .. }));
            }
        }
    }
}
