//! Function application.

use fwjs_ir::Expr;

use super::Interpreter;
use crate::{ClosureValue, Environment, EvalResult, Value};

impl Interpreter<'_> {
    /// Evaluate `callee(args...)`.
    ///
    /// A callee that is not a closure yields `Null`, and its arguments are
    /// never evaluated.
    pub(super) fn eval_func_app(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        env: &Environment,
    ) -> EvalResult {
        let callee = self.eval(callee, env)?;
        let closure = match callee {
            Value::Closure(closure) => closure,
            other => {
                tracing::debug!(callee = other.type_name(), "call of non-function yields null");
                return Ok(Value::Null);
            }
        };
        let args = args
            .iter()
            .map(|arg| self.eval(arg, env))
            .collect::<Result<Vec<_>, _>>()?;
        self.call_closure(&closure, args)
    }

    /// Call `closure` with already evaluated arguments.
    ///
    /// The call frame is a child of the closure's defining environment.
    /// Missing arguments bind to `Null`; extra arguments are dropped.
    /// Arguments are evaluated before this is called.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(arity = closure.arity(), args = args.len(), depth = self.call_depth)
    )]
    pub fn call_closure(&mut self, closure: &ClosureValue, args: Vec<Value>) -> EvalResult {
        let frame = closure.env().child();
        let mut args = args.into_iter();
        for &param in closure.params() {
            let value = args.next().unwrap_or(Value::Null);
            // a repeated parameter name rebinds: the last occurrence wins
            frame.bind_fresh(param, value);
        }

        self.call_depth = self.call_depth.saturating_add(1);
        let result = self.eval(closure.body(), &frame);
        self.call_depth = self.call_depth.saturating_sub(1);
        result
    }
}
