use super::ast::Func;
use super::lex::lex;
use super::parse::parse;
use super::term::Term;

/// One analyzed program line: an indent level, the top-level calls in
/// source order, and the original flat term list kept for round-trip
/// rendering.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    indent: i32,
    funcs: Vec<Func>,
    terms: Vec<Term>,
}

impl Line {
    pub(crate) fn new(indent: i32, funcs: Vec<Func>, terms: Vec<Term>) -> Line {
        Line {
            indent,
            funcs,
            terms,
        }
    }

    pub fn from_str(s: &str) -> Line {
        parse(lex(s))
    }

    /// Indent level, or -1 when the line has no content.
    pub fn indent(&self) -> i32 {
        self.indent
    }

    pub fn funcs(&self) -> &[Func] {
        &self.funcs
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.indent < 0
    }

    /// Drop top-level calls whose whole tree is built-in operators.
    /// They compute a value and discard it, so nothing observable changes.
    pub fn strip_noops(&mut self) {
        self.funcs.retain(|func| !func.is_pure());
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut separate = false;
        for term in self.terms.iter() {
            match term {
                Term::Indent => write!(f, "  ")?,
                Term::Nop | Term::CarriageReturn => {}
                term => {
                    if separate {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", term)?;
                    separate = true;
                }
            }
        }
        Ok(())
    }
}
