use crate::ast::*;
use crate::enumerate::{keep_all, permute_br, permute_el, BrPools};
use crate::error::GenError;
use crate::interpreter::Simulate;
use crate::render::{render_test, Format, Render};
use clap::ValueEnum;
use regex::Regex;
use std::io::Write;

/// Printed instead of tests for suites without a generator.
pub const UNIMPLEMENTED_NOTICE: &str =
    "UNIMPLEMENTED, PLEASE CALL 1-800-R-U-SLAPPIN FOR ASSISTANCE";

/// A named family of generated tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Suite {
    /// `br` statements nested in `br` statements
    #[value(name = "br_solo")]
    BrSolo,
    /// `br ... el` statements nested in `br` statements
    #[value(name = "br_el")]
    BrEl,
    #[value(name = "br_elbr")]
    BrElbr,
    #[value(name = "br_elbr_el")]
    BrElbrEl,
}

impl Suite {
    pub const ALL: [Suite; 4] = [Suite::BrSolo, Suite::BrEl, Suite::BrElbr, Suite::BrElbrEl];

    pub fn name(self) -> &'static str {
        match self {
            Suite::BrSolo => "br_solo",
            Suite::BrEl => "br_el",
            Suite::BrElbr => "br_elbr",
            Suite::BrElbrEl => "br_elbr_el",
        }
    }

    pub fn from_name(name: &str) -> Option<Suite> {
        Suite::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn is_implemented(self) -> bool {
        matches!(self, Suite::BrSolo | Suite::BrEl)
    }
}

/// Output options shared by all suites.
#[derive(Debug, Clone, Default)]
pub struct GenOptions {
    pub format: Format,
    /// Only emit tests whose rendered source matches.
    pub grep: Option<Regex>,
}

/// What a call to `generate` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated { emitted: usize },
    Unimplemented,
}

/// Write every test of `suite` to `out`, one per line.
pub fn generate(
    suite: Suite,
    options: &GenOptions,
    out: &mut impl Write,
) -> Result<Outcome, GenError> {
    let span = tracing::debug_span!("generate", suite = suite.name());
    let _enter = span.enter();

    let (outer, inner) = match suite {
        Suite::BrSolo => br_solo(),
        Suite::BrEl => br_el(),
        Suite::BrElbr | Suite::BrElbrEl => {
            writeln!(out, "{}", UNIMPLEMENTED_NOTICE)?;
            return Ok(Outcome::Unimplemented);
        }
    };

    let emitted = emit_nested(&outer, &inner, options, out)?;
    tracing::info!(emitted, "generated suite");
    Ok(Outcome::Generated { emitted })
}

// ── Drivers ─────────────────────────────────────────────────────────

fn outer_pools() -> BrPools {
    BrPools::new().with_cond([Value::Int(1111), Value::Bool(true), Value::Bool(false)])
}

fn br_solo() -> (Vec<BrStmt>, Vec<BrStmt>) {
    let inner_pools = BrPools::new()
        .with_pre([5678i64])
        .with_cond([true, false])
        .with_body([2222i64])
        .with_post([8765i64]);
    let inner = permute_br(&inner_pools, |br| !br.body.is_empty());
    let outer = permute_br(&outer_pools(), keep_all);
    (outer, inner)
}

fn br_el() -> (Vec<BrStmt>, Vec<BrStmt>) {
    let el = permute_el(&seq([3333i64]), |el| !el.body.is_empty());
    let inner_pools = BrPools::new()
        .with_pre([5678i64])
        .with_cond([true, false])
        .with_body([2222i64])
        .with_el(el)
        .with_post([8765i64]);
    let inner = permute_br(&inner_pools, |br| !br.body.is_empty() && br.el.is_some());
    let outer = permute_br(&outer_pools(), keep_all);
    (outer, inner)
}

/// Emit every `inner` nested as the body of every `outer`.
fn emit_nested(
    outer: &[BrStmt],
    inner: &[BrStmt],
    options: &GenOptions,
    out: &mut impl Write,
) -> Result<usize, GenError> {
    let mut emitted = 0;
    for obr in outer {
        for ibr in inner {
            let nested = obr.with_body(vec![Statement::from(ibr.clone())]);
            if let Some(re) = &options.grep {
                if !re.is_match(&nested.render()) {
                    continue;
                }
            }
            let expected = nested.flow()?;
            writeln!(out, "{}", render_test(&nested, &expected, options.format))?;
            emitted += 1;
        }
    }
    Ok(emitted)
}
