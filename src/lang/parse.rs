use super::ast::{Arg, Func};
use super::line::Line;
use super::term::Term;

/// Analyze a flat term stream into one line.
///
/// Terms are consumed right to left with an operand stack. Operands push;
/// a function term pops exactly its declared argument count, padding with
/// zero literals when the stack runs dry, and pushes itself back as a call
/// node. No precedence and no recursion; grouping is whatever shape the
/// upstream stream encodes. Do not tighten this into a stricter grammar:
/// rendering and editing depend on the exact argument order and the
/// zero-pad behavior.
pub fn parse(terms: Vec<Term>) -> Line {
    let indent = indent_level(&terms);
    let mut stack: Vec<Arg> = vec![];
    for term in terms.iter().rev() {
        if let Some(arg_count) = term.arg_count() {
            let mut args = Vec::with_capacity(arg_count);
            for _ in 0..arg_count {
                args.push(stack.pop().unwrap_or(Arg::Operand(Term::Number(0.0))));
            }
            stack.push(Arg::Call(Func::new(term.clone(), args)));
        } else if term.is_operand() {
            stack.push(Arg::Operand(term.clone()));
        }
    }
    // The stack was filled right to left, so reading it top-down restores
    // source order.
    let funcs = stack
        .into_iter()
        .rev()
        .filter_map(|arg| match arg {
            Arg::Call(func) => Some(func),
            Arg::Operand(_) => None,
        })
        .collect();
    Line::new(indent, funcs, terms)
}

/// Position of the first non-indent term, or -1 when there is none.
fn indent_level(terms: &[Term]) -> i32 {
    for (index, term) in terms.iter().enumerate() {
        if *term != Term::Indent {
            return index as i32;
        }
    }
    -1
}
