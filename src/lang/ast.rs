use super::term::{is_binary_operator, operator_symbol, Term};

/// One call node: a function term with its resolved arguments.
#[derive(Debug, PartialEq, Clone)]
pub struct Func {
    term: Term,
    args: Vec<Arg>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Arg {
    Operand(Term),
    Call(Func),
}

impl Func {
    // Callers pad args to the term's declared count; Display relies on it.
    pub(crate) fn new(term: Term, args: Vec<Arg>) -> Func {
        Func { term, args }
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// True when the whole tree is built-in operators and operands.
    /// Such a call computes a value nobody observes.
    pub fn is_pure(&self) -> bool {
        self.term.is_pure_operator()
            && self.args.iter().all(|arg| match arg {
                Arg::Operand(_) => true,
                Arg::Call(func) => func.is_pure(),
            })
    }
}

impl std::fmt::Display for Func {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.term {
            Term::Function(name, _) => match operator_symbol(name) {
                Some(symbol) if is_binary_operator(name) => {
                    write!(f, "({} {} {})", self.args[0], symbol, self.args[1])
                }
                Some(symbol) => write!(f, "{}{}", symbol, self.args[0]),
                None => {
                    write!(f, "{}(", name)?;
                    for (i, arg) in self.args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ")")
                }
            },
            Term::AssignFunction(op, index) => {
                if op.arg_count() == 0 {
                    write!(f, "{}{}", op.prefix(), index)
                } else {
                    write!(f, "{}{} {}", op.prefix(), index, self.args[0])
                }
            }
            Term::FlowFunction(flow) => {
                if flow.arg_count() == 0 {
                    write!(f, "{}", flow)
                } else {
                    write!(f, "{} ({})", flow, self.args[0])
                }
            }
            term => write!(f, "{}", term),
        }
    }
}

impl std::fmt::Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Arg::Operand(term) => write!(f, "{}", term),
            Arg::Call(func) => write!(f, "{}", func),
        }
    }
}
