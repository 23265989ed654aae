use crate::ast::*;
use clap::ValueEnum;

/// Assertion syntax used for generated tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// `TEST(main { ... }, [2222, true])`
    #[default]
    Test,
    /// `state_test!(r#"main { ... }"#, vec![BCVal::Int(2222)]);`
    Rust,
}

/// Something that renders as SBL source text.
pub trait Render {
    fn write_source(&self, w: &mut SourceWriter);

    fn render(&self) -> String {
        let mut w = SourceWriter::new();
        self.write_source(&mut w);
        w.finish()
    }
}

/// Accumulates source words separated by single spaces.
pub struct SourceWriter {
    buf: String,
}

impl SourceWriter {
    pub fn new() -> Self {
        SourceWriter { buf: String::new() }
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn word(&mut self, word: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(word);
    }

    fn seq(&mut self, stmts: &[Statement]) {
        for stmt in stmts {
            stmt.write_source(self);
        }
    }

    /// `{ <stmts> }`; an empty block renders as `{ }`.
    fn block(&mut self, stmts: &[Statement]) {
        self.word("{");
        self.seq(stmts);
        self.word("}");
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new()
    }
}

// ── Source rendering ────────────────────────────────────────────────

impl Render for Value {
    fn write_source(&self, w: &mut SourceWriter) {
        match self {
            Value::Int(n) => w.word(&n.to_string()),
            Value::String(s) => w.word(&format!("\"{}\"", s)),
            Value::Bool(true) => w.word("T"),
            Value::Bool(false) => w.word("F"),
            Value::Nil => w.word("@"),
        }
    }
}

impl Render for Push {
    fn write_source(&self, w: &mut SourceWriter) {
        self.value.write_source(w);
    }
}

impl Render for Statement {
    fn write_source(&self, w: &mut SourceWriter) {
        match self {
            Statement::Push(push) => push.write_source(w),
            Statement::Br(br) => br.write_source(w),
        }
    }
}

impl Render for ElbrClause {
    fn write_source(&self, w: &mut SourceWriter) {
        w.word("elbr");
        w.seq(&self.cond);
        w.block(&self.body);
    }
}

impl Render for ElClause {
    fn write_source(&self, w: &mut SourceWriter) {
        w.word("el");
        w.block(&self.body);
    }
}

impl Render for BrStmt {
    fn write_source(&self, w: &mut SourceWriter) {
        w.seq(&self.pre);
        w.word("br");
        w.seq(&self.cond);
        w.block(&self.body);
        for elbr in &self.elbr {
            elbr.write_source(w);
        }
        if let Some(el) = &self.el {
            el.write_source(w);
        }
        w.seq(&self.post);
    }
}

// ── Assertion rendering ─────────────────────────────────────────────

/// Render one expected stack value in the assertion syntax of `format`.
pub fn render_assertion(value: &Value, format: Format) -> String {
    match (format, value) {
        (Format::Test, Value::String(s)) => format!("\"{}\"", s),
        (Format::Test, Value::Bool(b)) => b.to_string(),
        (Format::Test, Value::Nil) => "nil".to_string(),
        (Format::Test, Value::Int(n)) => n.to_string(),
        (Format::Rust, Value::String(s)) => format!("BCVal::String(String::from(r#\"{}\"#))", s),
        (Format::Rust, Value::Bool(b)) => format!("BCVal::Bool({})", b),
        (Format::Rust, Value::Nil) => "BCVal::Nil".to_string(),
        (Format::Rust, Value::Int(n)) => format!("BCVal::Int({})", n),
    }
}

/// Wrap a statement in `main { ... }`.
pub fn render_program(stmt: &impl Render) -> String {
    format!("main {{ {} }}", stmt.render())
}

/// Render a complete test line pairing a statement with its expected stack.
pub fn render_test(stmt: &impl Render, expected: &[Value], format: Format) -> String {
    let program = render_program(stmt);
    let values: Vec<String> = expected
        .iter()
        .map(|v| render_assertion(v, format))
        .collect();
    match format {
        Format::Test => format!("TEST({}, [{}])", program, values.join(", ")),
        Format::Rust => format!(
            "state_test!(r#\"{}\"#, vec![{}]);",
            program,
            values.join(", ")
        ),
    }
}
