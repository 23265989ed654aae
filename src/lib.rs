pub mod ast;
pub mod enumerate;
pub mod error;
pub mod interpreter;
pub mod render;
pub mod suite;

use ast::BrStmt;
use error::FlowError;
use interpreter::Simulate;
use render::{render_test, Format};

pub use enumerate::{br_candidates, permute_br, permute_el, permute_elbr, powerset, BrPools};
pub use suite::{generate, GenOptions, Outcome, Suite};

// ── Core API ───────────────────────────────────────────────────────

/// Render one test line for `br`, simulating it for the expected stack.
///
/// Fails if the statement would pop an empty stack; such statements never
/// make it into a generated suite.
pub fn test_case(br: &BrStmt, format: Format) -> Result<String, FlowError> {
    let expected = br.flow()?;
    Ok(render_test(br, &expected, format))
}
