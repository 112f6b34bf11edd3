use pretty_assertions::assert_eq;

use super::*;
use crate::db::CompilerDb;
use candy_hir_lower::{FunctionSignature, LoweringDb};
use candy_ir::{CandyType, DeclarationKind, ExprArena, ExprKind, FunctionAst, Span};

fn int_literal_declaration(db: &CompilerDb) -> (DeclarationId, ResourceId) {
    let resource = ResourceId::new(0);
    let f = db.interner().intern("f");
    let declaration = DeclarationId::new(resource, vec![f], DeclarationKind::Function);

    let mut arena = ExprArena::new();
    let literal = arena.push(Span::new(17, 19), ExprKind::Int(42));
    let ast = FunctionAst {
        name: f,
        params: Vec::new(),
        body: Some(vec![literal]),
        arena,
    };
    let signature = FunctionSignature {
        param_types: Vec::new(),
        return_type: CandyType::Int,
        has_this: false,
    };
    db.register_function(declaration.clone(), resource, Span::new(0, 19), ast, signature);
    (declaration, resource)
}

fn mistyped_declaration(db: &CompilerDb) -> (DeclarationId, ResourceId) {
    let resource = ResourceId::new(0);
    let g = db.interner().intern("g");
    let declaration = DeclarationId::new(resource, vec![g], DeclarationKind::Function);

    let mut arena = ExprArena::new();
    let literal = arena.push(Span::new(17, 21), ExprKind::Bool(true));
    let ast = FunctionAst {
        name: g,
        params: Vec::new(),
        body: Some(vec![literal]),
        arena,
    };
    let signature = FunctionSignature {
        param_types: Vec::new(),
        return_type: CandyType::Int,
        has_this: false,
    };
    db.register_function(declaration.clone(), resource, Span::new(0, 21), ast, signature);
    (declaration, resource)
}

#[test]
fn body_expressions_lowers_through_the_tracked_query() {
    let db = CompilerDb::new();
    let (declaration, resource) = int_literal_declaration(&db);
    let decl = FunctionDecl::new(&db, declaration, resource);

    let expressions = body_expressions(&db, decl).expect("declaration has a body").expect("no errors");
    assert_eq!(expressions.len(), 1);
}

#[test]
fn body_expressions_and_body_id_map_agree_on_the_same_lowering() {
    let db = CompilerDb::new();
    let (declaration, resource) = int_literal_declaration(&db);
    let decl = FunctionDecl::new(&db, declaration, resource);

    let expressions = body_expressions(&db, decl).expect("declaration has a body").expect("no errors");
    let id_map = body_id_map(&db, decl).expect("declaration has a body").expect("no errors");

    // Every id map entry traces back to a node lowered from this body's
    // literal, plus (by construction here) the literal itself.
    assert_eq!(id_map.len(), 1);
    assert_eq!(expressions.len(), 1);
}

#[test]
fn unregistered_declaration_has_no_body() {
    let db = CompilerDb::new();
    let resource = ResourceId::new(0);
    let missing = db.interner().intern("missing");
    let declaration = DeclarationId::new(resource, vec![missing], DeclarationKind::Function);
    let decl = FunctionDecl::new(&db, declaration, resource);

    assert!(body_expressions(&db, decl).is_none());
}

#[test]
fn repeated_queries_return_the_memoized_result() {
    let db = CompilerDb::new();
    let (declaration, resource) = int_literal_declaration(&db);
    let decl = FunctionDecl::new(&db, declaration, resource);

    let first = body_expressions(&db, decl).expect("declaration has a body").expect("no errors");
    let second = body_expressions(&db, decl).expect("declaration has a body").expect("no errors");
    assert_eq!(first, second);
}

#[test]
fn a_failed_lowering_carries_a_guarantee_token() {
    let db = CompilerDb::new();
    let (declaration, resource) = mistyped_declaration(&db);
    let decl = FunctionDecl::new(&db, declaration, resource);

    let body = lowered_body(&db, decl).expect("declaration has a body");
    assert!(body.guarantee().is_some());

    let errors = body.into_expressions_result().expect_err("`true` is not assignable to Int");
    assert_eq!(errors.len(), 1);
}
