use super::{Host, Operation, Var};
use crate::lang::ast::{Arg, Func};
use crate::lang::{AssignOp, Flow, Line, Term};

/// Hard cap on line steps per run. Reaching it halts the run silently;
/// it is a safety valve, not program semantics.
const MAX_LINE_STEPS: usize = 1000;

/// ## Flow-control interpreter
///
/// Executes analyzed lines against the register file and the host
/// bridge. Blocks are not a tree: indentation plus an explicit stack of
/// open-block entries stand in for one, which keeps jumps to arbitrary
/// lines cheap. Nothing in here returns an error; a program may come
/// from a statistical generator or a live editor mid-keystroke, and the
/// contract is that every run produces some defined, finite outcome.
pub struct Runtime {
    vars: Var,
    host: Box<dyn Host>,
}

/// Run-local state, rebuilt by every `run` call.
struct Run<'a> {
    lines: &'a [Line],
    pc: usize,
    prev_indent: i32,
    flow: Vec<FlowEntry>,
}

/// One open block. `return_pc` is only meaningful for `While`.
#[derive(Debug)]
struct FlowEntry {
    kind: Flow,
    indent: i32,
    return_pc: usize,
}

/// Outcome of resolving an open block against a dedent.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Close {
    Loop,
    Out,
}

impl<'a> Run<'a> {
    /// Resolve at most one open block against the target indent: a
    /// `While` rewinds the pc to its header and loops, anything else
    /// just falls out of scope.
    fn close_block(&mut self, indent: i32) -> Option<Close> {
        if self.flow.last()?.indent < indent {
            return None;
        }
        let entry = self.flow.pop()?;
        if entry.kind == Flow::While {
            self.pc = entry.return_pc;
            Some(Close::Loop)
        } else {
            Some(Close::Out)
        }
    }

    /// Advance past the current block: stop at end of program or at the
    /// next line whose indent is at or below the given level.
    fn skip_block(&mut self, indent: i32) {
        loop {
            self.pc += 1;
            if self.pc >= self.lines.len() {
                return;
            }
            if self.lines[self.pc].indent() <= indent {
                return;
            }
        }
    }

    /// Unwind to the nearest enclosing `While` and jump past its body.
    /// With no `While` on the stack this is a silent no-op.
    fn break_block(&mut self) -> bool {
        while let Some(entry) = self.flow.pop() {
            if entry.kind == Flow::While {
                self.skip_block(entry.indent);
                return true;
            }
        }
        false
    }
}

impl Runtime {
    pub fn new(var_count: usize, host: Box<dyn Host>) -> Runtime {
        Runtime {
            vars: Var::new(var_count),
            host,
        }
    }

    pub fn var(&self, index: usize) -> f64 {
        self.vars.fetch(index)
    }

    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Registers persist across runs; this is the session-level reset.
    pub fn clear(&mut self) {
        self.vars.clear();
    }

    /// Execute the program once, from the top, within the step cap.
    pub fn run(&mut self, lines: &[Line]) {
        if lines.is_empty() {
            return;
        }
        let mut run = Run {
            lines,
            pc: 0,
            prev_indent: 0,
            flow: vec![],
        };
        for _ in 0..MAX_LINE_STEPS {
            self.step(&mut run);
            if run.pc >= lines.len() {
                // Close any still-open block against a virtual indent of
                // zero; a while here re-enters its loop.
                if run.prev_indent > 0 && run.close_block(0) == Some(Close::Loop) {
                    run.prev_indent = -1;
                    continue;
                }
                break;
            }
        }
    }

    fn step(&mut self, run: &mut Run) {
        let lines = run.lines;
        let line = &lines[run.pc];
        let indent = line.indent();
        let mut closed = None;
        if indent >= 0 && indent < run.prev_indent {
            closed = run.close_block(indent);
            if closed == Some(Close::Loop) {
                run.prev_indent = -1;
                return;
            }
        }
        for func in line.funcs() {
            if let Term::FlowFunction(flow) = *func.term() {
                let arg = match func.args().first() {
                    Some(arg) => self.eval(arg),
                    None => 0.0,
                };
                if self.exec_flow(run, flow, arg, indent, closed) {
                    // A jump has already repositioned the pc; the rest
                    // of the line never executes.
                    run.prev_indent = -1;
                    return;
                }
            } else {
                self.eval_call(func);
            }
        }
        run.prev_indent = indent;
        run.pc += 1;
    }

    /// Returns true when the flow call jumped.
    fn exec_flow(&mut self, run: &mut Run, flow: Flow, arg: f64, indent: i32, closed: Option<Close>) -> bool {
        let skip = match flow {
            Flow::If | Flow::While => arg == 0.0,
            // An `out` close on this line means the previous branch of
            // the chain ran to completion, so its alternatives are dead.
            Flow::Else => closed == Some(Close::Out),
            Flow::Elif => closed == Some(Close::Out) || arg == 0.0,
            Flow::Break => return run.break_block(),
        };
        if skip {
            run.skip_block(indent);
            true
        } else {
            run.flow.push(FlowEntry {
                kind: flow,
                indent,
                return_pc: run.pc,
            });
            false
        }
    }

    fn eval(&mut self, arg: &Arg) -> f64 {
        match arg {
            Arg::Operand(term) => self.operand(term),
            Arg::Call(func) => self.eval_call(func),
        }
    }

    fn operand(&mut self, term: &Term) -> f64 {
        match term {
            Term::Number(value) => *value,
            Term::Variable(index) => self.vars.fetch(*index),
            Term::VariableNegative(index) => -self.vars.fetch(*index),
            Term::VariableInvert(index) => Operation::not(self.vars.fetch(*index)),
            Term::ReservedVariable(name) => {
                Operation::sanitize(self.host.fetch(name).unwrap_or(0.0))
            }
            _ => 0.0,
        }
    }

    fn eval_call(&mut self, func: &Func) -> f64 {
        let args: Vec<f64> = func.args().iter().map(|arg| self.eval(arg)).collect();
        match func.term() {
            Term::Function(name, _) => self.exec(name, &args),
            Term::AssignFunction(op, index) => self.exec_assign(*op, *index, &args),
            // A flow call buried in an expression has no value and no
            // flow effect.
            _ => 0.0,
        }
    }

    /// Built-ins dispatch by canonical name; everything else goes to the
    /// host bridge. A missing or failing host call contributes 0.
    fn exec(&mut self, name: &str, args: &[f64]) -> f64 {
        let arg = |index: usize| args.get(index).copied().unwrap_or(0.0);
        match name {
            "add" => Operation::add(arg(0), arg(1)),
            "sub" => Operation::sub(arg(0), arg(1)),
            "mul" => Operation::mul(arg(0), arg(1)),
            "div" => Operation::div(arg(0), arg(1)),
            "mod" => Operation::modulus(arg(0), arg(1)),
            "lessThan" => Operation::less_than(arg(0), arg(1)),
            "greaterThan" => Operation::greater_than(arg(0), arg(1)),
            "lessThanOrEqual" => Operation::less_equal(arg(0), arg(1)),
            "greaterThanOrEqual" => Operation::greater_equal(arg(0), arg(1)),
            "equal" => Operation::equal(arg(0), arg(1)),
            "notEqual" => Operation::not_equal(arg(0), arg(1)),
            "and" => Operation::and(arg(0), arg(1)),
            "or" => Operation::or(arg(0), arg(1)),
            "not" => Operation::not(arg(0)),
            _ => Operation::sanitize(self.host.call(name, args).unwrap_or(0.0)),
        }
    }

    fn exec_assign(&mut self, op: AssignOp, index: usize, args: &[f64]) -> f64 {
        let arg = args.get(0).copied().unwrap_or(0.0);
        let current = self.vars.fetch(index);
        let value = match op {
            AssignOp::Assign => arg,
            AssignOp::AssignAdd => current + arg,
            AssignOp::AssignSub => current - arg,
            AssignOp::AssignMul => current * arg,
            AssignOp::AssignDiv => current / arg,
            AssignOp::AssignMod => current % arg,
            AssignOp::AssignInc => current + 1.0,
            AssignOp::AssignDec => current - 1.0,
        };
        self.vars.store(index, value);
        self.vars.fetch(index)
    }
}
