use crate::ast::*;
use crate::error::{FlowError, Sender};

/// The simulated operand stack, bottom first.
pub type Stack = Vec<Value>;

/// Something that contributes values to the operand stack when executed.
pub trait Simulate {
    /// Append this construct's contribution to `stack`.
    fn flow_into(&self, stack: &mut Stack) -> Result<(), FlowError>;

    /// The stack this construct leaves behind when run on its own.
    fn flow(&self) -> Result<Stack, FlowError> {
        let mut stack = Stack::new();
        self.flow_into(&mut stack)?;
        Ok(stack)
    }
}

impl Simulate for Push {
    fn flow_into(&self, stack: &mut Stack) -> Result<(), FlowError> {
        stack.push(self.value.clone());
        Ok(())
    }
}

impl Simulate for Statement {
    fn flow_into(&self, stack: &mut Stack) -> Result<(), FlowError> {
        match self {
            Statement::Push(push) => push.flow_into(stack),
            Statement::Br(br) => br.flow_into(stack),
        }
    }
}

impl Simulate for [Statement] {
    fn flow_into(&self, stack: &mut Stack) -> Result<(), FlowError> {
        for stmt in self {
            stmt.flow_into(stack)?;
        }
        Ok(())
    }
}

impl Simulate for BrStmt {
    /// A branch is simulated on a stack of its own; what remains is appended
    /// to the caller's stack.
    fn flow_into(&self, stack: &mut Stack) -> Result<(), FlowError> {
        let mut st = Stack::new();
        self.pre.flow_into(&mut st)?;
        self.cond.flow_into(&mut st)?;
        let top = pop_condition(&mut st, || Sender::Br(self.clone()))?;

        if top.is_truthy() {
            self.body.flow_into(&mut st)?;
        } else {
            let mut taken = false;
            for elbr in &self.elbr {
                elbr.cond.flow_into(&mut st)?;
                let top = pop_condition(&mut st, || Sender::Elbr(elbr.clone()))?;
                if top.is_truthy() {
                    elbr.body.flow_into(&mut st)?;
                    taken = true;
                    break;
                }
            }
            if !taken {
                if let Some(el) = &self.el {
                    el.body.flow_into(&mut st)?;
                }
            }
        }

        self.post.flow_into(&mut st)?;
        stack.append(&mut st);
        Ok(())
    }
}

fn pop_condition(st: &mut Stack, sender: impl FnOnce() -> Sender) -> Result<Value, FlowError> {
    st.pop().ok_or_else(|| FlowError::empty_stack(sender()))
}

impl BrStmt {
    /// Whether this statement can run without popping an empty stack.
    pub fn is_valid(&self) -> bool {
        match self.flow() {
            Ok(_) => true,
            Err(err) => {
                tracing::trace!(%err, code = err.code(), "rejecting candidate");
                false
            }
        }
    }
}
