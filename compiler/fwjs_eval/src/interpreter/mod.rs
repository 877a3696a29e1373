//! Tree-walking interpreter.
//!
//! `Interpreter::eval` is one exhaustive `match` over `ExprKind`. Every
//! recursive step goes through `ensure_sufficient_stack`, so deep programs
//! grow the native stack instead of overflowing it.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use fwjs_ir::{Expr, ExprKind, StringInterner};
use fwjs_stack::ensure_sufficient_stack;

use crate::errors::{duplicate_declaration, non_boolean_condition, ConditionSite, EvalError};
use crate::{evaluate_binary, DeclareError, Environment, EvalResult, SharedPrintHandler, Value};

/// Evaluates expression trees.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    print_handler: SharedPrintHandler,
    /// Number of closure calls currently active.
    call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Interpreter that prints to stdout.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Run a whole program in a fresh root environment.
    ///
    /// Returns the value of the last sequenced expression, or `Null` for an
    /// empty program.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: Option<&Expr>) -> EvalResult {
        let Some(program) = program else {
            tracing::debug!("empty program");
            return Ok(Value::Null);
        };
        let env = Environment::new();
        tracing::debug!("evaluating program");
        let result = self.eval(program, &env);
        match &result {
            Ok(value) => tracing::debug!(%value, "program finished"),
            Err(err) => tracing::debug!(%err, "program failed"),
        }
        result
    }

    /// Evaluate `expr` in `env`.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, env))
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(lit) => Ok(Value::from(*lit)),

            ExprKind::VarRef(name) => Ok(env.resolve_var(*name)),

            ExprKind::VarDecl { name, init } => {
                let value = match init {
                    Some(init) => self.eval(init, env)?,
                    None => Value::Null,
                };
                env.create_var(*name, value.clone())
                    .map_err(|DeclareError::AlreadyDeclared| {
                        duplicate_declaration(self.interner.lookup(*name)).with_span(expr.span)
                    })?;
                tracing::trace!(name = self.interner.lookup(*name), %value, "declare");
                Ok(value)
            }

            ExprKind::Assign { name, value } => {
                let value = self.eval(value, env)?;
                tracing::trace!(name = self.interner.lookup(*name), %value, "assign");
                env.update_var(*name, value.clone());
                Ok(value)
            }

            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_binary(left, right, *op).map_err(|e| e.or_span(expr.span))
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(cond, env, ConditionSite::If)? {
                    self.eval(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.eval(else_branch, env)
                } else {
                    Ok(Value::Null)
                }
            }

            ExprKind::While { cond, body } => {
                while self.eval_condition(cond, env, ConditionSite::While)? {
                    self.eval(body, env)?;
                }
                Ok(Value::Null)
            }

            ExprKind::Seq { first, second } => {
                self.eval(first, env)?;
                self.eval(second, env)
            }

            ExprKind::FuncDecl { params, body } => {
                Ok(Value::closure(params.clone(), body.clone(), env.clone()))
            }

            ExprKind::FuncApp { callee, args } => self.eval_func_app(callee, args, env),

            ExprKind::Print(inner) => {
                let value = self.eval(inner, env)?;
                self.print_handler.println(&value.to_string());
                Ok(value)
            }
        }
    }

    fn eval_condition(
        &mut self,
        cond: &Expr,
        env: &Environment,
        site: ConditionSite,
    ) -> Result<bool, EvalError> {
        match self.eval(cond, env)? {
            Value::Bool(b) => Ok(b),
            other => Err(non_boolean_condition(site, &other).with_span(cond.span)),
        }
    }
}
