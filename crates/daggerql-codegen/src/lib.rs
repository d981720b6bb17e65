//! Turns an introspected GraphQL schema into Rust source for a typed client
//! built on the `daggerql` runtime.
//!
//! Typically invoked from a build script:
//!
//! ```no_run
//! use daggerql_codegen::BindingGenerator;
//! use daggerql_core::introspection::Schema;
//!
//! let schema = Schema::from_file("introspection.json").unwrap();
//! let source = BindingGenerator::new().generate(&schema).unwrap();
//! let out_dir = std::env::var("OUT_DIR").unwrap();
//! std::fs::write(format!("{out_dir}/bindings.rs"), source).unwrap();
//! ```

mod binding_generator;
mod codegen_error;
mod emit_context;
mod enum_emitter;
mod field_evaluation;
mod input_object_emitter;
mod naming;
mod object_emitter;
mod scalar_emitter;

pub use binding_generator::BindingGenerator;
pub use codegen_error::CodegenError;
pub use field_evaluation::FieldEvaluation;
