//! Candy Compiler CLI
//!
//! This binary owns none of the real pipeline — lexing, parsing,
//! declaration discovery and code generation are all out of scope for the
//! body-lowering core (§1) and aren't implemented anywhere in this
//! workspace. `demo` exists to exercise the Salsa wiring end to end against
//! a hand-built declaration, the way a real driver would once those
//! collaborators exist.

use candy_ir::{CandyType, DeclarationId, DeclarationKind, ExprArena, ExprKind, FunctionAst, ResourceId, Span};
use candy_hir_lower::FunctionSignature;
use candyc::{body_expressions, CompilerDb, FunctionDecl};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "candyc", version, about = "Candy body-lowering core driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lower a hand-built `fun f(): Int { 42 }`-shaped declaration and print
    /// the resulting HIR, exercising the Salsa wiring end to end.
    Demo,
}

fn main() {
    candyc::tracing_setup::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Demo => run_demo(),
    }
}

fn run_demo() {
    let db = CompilerDb::new();
    let interner = candy_hir_lower::LoweringDb::interner(&db);

    let resource = ResourceId::new(0);
    let f = interner.intern("f");
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

    let decl = FunctionDecl::new(&db, declaration, resource);
    match body_expressions(&db, decl) {
        Some(Ok(expressions)) => {
            println!("lowered {} HIR node(s):", expressions.len());
            for expr in expressions {
                println!("  {expr:?}");
            }
        }
        Some(Err(errors)) => {
            for error in errors {
                eprintln!("error: {error}");
            }
            std::process::exit(1);
        }
        None => println!("declaration has no body"),
    }
}
