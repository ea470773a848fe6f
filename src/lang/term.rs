use rand::Rng;
use std::rc::Rc;

/// Marker token for one level of indentation.
pub const INDENT_STR: &str = "<IDT>";
/// Marker token for a line break inside a flat term stream.
pub const CARRIAGE_RETURN_STR: &str = "<CR>";

const BINARY_OPS: [(&str, &str); 13] = [
    ("+", "add"),
    ("-", "sub"),
    ("*", "mul"),
    ("/", "div"),
    ("%", "mod"),
    ("<", "lessThan"),
    (">", "greaterThan"),
    ("&&", "and"),
    ("||", "or"),
    ("==", "equal"),
    ("!=", "notEqual"),
    ("<=", "lessThanOrEqual"),
    (">=", "greaterThanOrEqual"),
];

const UNARY_OPS: [(&str, &str); 1] = [("!", "not")];

// `QUATER_PI` is the sketch hosts' own spelling; `QUARTER_PI` is
// accepted as an alias.
const RESERVED_IDENTIFIERS: [&str; 25] = [
    "HALF_PI",
    "PI",
    "QUATER_PI",
    "QUARTER_PI",
    "TAU",
    "TWO_PI",
    "POINTS",
    "LINES",
    "TRIANGLES",
    "TRIANGLE_FAN",
    "TRIANGLE_STRIP",
    "QUADS",
    "QUAD_STRIP",
    "CLOSE",
    "LEFT",
    "CENTER",
    "RIGHT",
    "mouseX",
    "mouseY",
    "pmouseX",
    "pmouseY",
    "mouseButton",
    "mouseIsPressed",
    "width",
    "height",
];

/// Digit wildcard. Every occurrence in a numeric literal resolves to a
/// fresh random digit 0-8 at parse time.
const WILD_DIGIT: char = 'D';

#[derive(Debug, PartialEq, Clone)]
pub enum Term {
    Nop,
    Indent,
    CarriageReturn,
    Number(f64),
    Variable(usize),
    VariableNegative(usize),
    VariableInvert(usize),
    ReservedVariable(Rc<str>),
    Function(Rc<str>, usize),
    AssignFunction(AssignOp, usize),
    FlowFunction(Flow),
}

impl Term {
    /// Classify one token. First match wins; anything unrecognized
    /// degrades to `Nop` rather than failing.
    pub fn from_str(token: &str) -> Term {
        if token.is_empty() {
            return Term::Nop;
        }
        if token == INDENT_STR {
            return Term::Indent;
        }
        if token == CARRIAGE_RETURN_STR {
            return Term::CarriageReturn;
        }
        if let Some(rest) = token.strip_prefix('V') {
            return match rest.parse::<usize>() {
                Ok(index) => Term::Variable(index),
                Err(_) => Term::Nop,
            };
        }
        if let Some(rest) = token.strip_prefix("-V") {
            return match rest.parse::<usize>() {
                Ok(index) => Term::VariableNegative(index),
                Err(_) => Term::Nop,
            };
        }
        if let Some(rest) = token.strip_prefix("!V") {
            return match rest.parse::<usize>() {
                Ok(index) => Term::VariableInvert(index),
                Err(_) => Term::Nop,
            };
        }
        if RESERVED_IDENTIFIERS.contains(&token) {
            return Term::ReservedVariable(token.into());
        }
        for (symbol, name) in BINARY_OPS.iter() {
            if token == *symbol {
                return Term::Function((*name).into(), 2);
            }
        }
        for (symbol, name) in UNARY_OPS.iter() {
            if token == *symbol {
                return Term::Function((*name).into(), 1);
            }
        }
        for op in AssignOp::ALL.iter() {
            if let Some(rest) = token.strip_prefix(op.prefix()) {
                return match rest.parse::<usize>() {
                    Ok(index) => Term::AssignFunction(*op, index),
                    Err(_) => Term::Nop,
                };
            }
        }
        if let Some(flow) = Flow::from_str(token) {
            return Term::FlowFunction(flow);
        }
        let parts: Vec<&str> = token.split('/').collect();
        if parts.len() == 2 {
            if let Ok(arg_count) = parts[1].parse::<usize>() {
                return Term::Function(parts[0].into(), arg_count);
            }
        }
        match number(token) {
            Some(value) => Term::Number(value),
            None => Term::Nop,
        }
    }

    /// Arguments this term consumes, or `None` for operands and markers.
    pub fn arg_count(&self) -> Option<usize> {
        match self {
            Term::Function(_, arg_count) => Some(*arg_count),
            Term::AssignFunction(op, _) => Some(op.arg_count()),
            Term::FlowFunction(flow) => Some(flow.arg_count()),
            _ => None,
        }
    }

    pub fn is_operand(&self) -> bool {
        match self {
            Term::Number(_)
            | Term::Variable(_)
            | Term::VariableNegative(_)
            | Term::VariableInvert(_)
            | Term::ReservedVariable(_) => true,
            _ => false,
        }
    }

    /// True for the built-in operator functions, which have no side effects.
    pub fn is_pure_operator(&self) -> bool {
        match self {
            Term::Function(name, _) => operator_symbol(name).is_some(),
            _ => false,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Term::*;
        match self {
            Nop | CarriageReturn => Ok(()),
            Indent => write!(f, "  "),
            Number(value) => write!(f, "{}", value),
            Variable(index) => write!(f, "V{}", index),
            VariableNegative(index) => write!(f, "-V{}", index),
            VariableInvert(index) => write!(f, "!V{}", index),
            ReservedVariable(name) => write!(f, "{}", name),
            Function(name, arg_count) => match operator_symbol(name) {
                Some(symbol) => write!(f, "{}", symbol),
                None => write!(f, "{}/{}", name, arg_count),
            },
            AssignFunction(op, index) => write!(f, "{}{}", op.prefix(), index),
            FlowFunction(flow) => write!(f, "{}", flow),
        }
    }
}

/// Original symbol of a built-in operator, by canonical name.
pub fn operator_symbol(name: &str) -> Option<&'static str> {
    for (symbol, op_name) in BINARY_OPS.iter().chain(UNARY_OPS.iter()) {
        if name == *op_name {
            return Some(symbol);
        }
    }
    None
}

pub fn is_binary_operator(name: &str) -> bool {
    BINARY_OPS.iter().any(|(_, op_name)| name == *op_name)
}

fn number(token: &str) -> Option<f64> {
    match token {
        "true" => return Some(1.0),
        "false" => return Some(0.0),
        _ => {}
    }
    if !token.contains(WILD_DIGIT) {
        return finite(token.parse::<f64>());
    }
    let mut rng = rand::thread_rng();
    let rolled: String = token
        .chars()
        .map(|ch| {
            if ch == WILD_DIGIT {
                char::from(b'0' + rng.gen_range(0..9))
            } else {
                ch
            }
        })
        .collect();
    finite(rolled.parse::<f64>())
}

fn finite(parsed: Result<f64, std::num::ParseFloatError>) -> Option<f64> {
    match parsed {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AssignOp {
    Assign,
    AssignAdd,
    AssignSub,
    AssignMul,
    AssignDiv,
    AssignMod,
    AssignInc,
    AssignDec,
}

impl AssignOp {
    const ALL: [AssignOp; 8] = [
        AssignOp::Assign,
        AssignOp::AssignAdd,
        AssignOp::AssignSub,
        AssignOp::AssignMul,
        AssignOp::AssignDiv,
        AssignOp::AssignMod,
        AssignOp::AssignInc,
        AssignOp::AssignDec,
    ];

    /// Token prefix; the register index follows immediately.
    pub fn prefix(self) -> &'static str {
        use AssignOp::*;
        match self {
            Assign => "=V",
            AssignAdd => "+=V",
            AssignSub => "-=V",
            AssignMul => "*=V",
            AssignDiv => "/=V",
            AssignMod => "%=V",
            AssignInc => "++V",
            AssignDec => "--V",
        }
    }

    pub fn arg_count(self) -> usize {
        match self {
            AssignOp::AssignInc | AssignOp::AssignDec => 0,
            _ => 1,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Flow {
    If,
    Elif,
    Else,
    While,
    Break,
}

impl Flow {
    pub fn from_str(token: &str) -> Option<Flow> {
        use Flow::*;
        match token {
            "if" => Some(If),
            "elif" => Some(Elif),
            "else" => Some(Else),
            "while" => Some(While),
            "break" => Some(Break),
            _ => None,
        }
    }

    pub fn arg_count(self) -> usize {
        use Flow::*;
        match self {
            If | Elif | While => 1,
            Else | Break => 0,
        }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Flow::*;
        match self {
            If => write!(f, "if"),
            Elif => write!(f, "elif"),
            Else => write!(f, "else"),
            While => write!(f, "while"),
            Break => write!(f, "break"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let t = Term::from_str("while");
        assert_eq!(t, Term::FlowFunction(Flow::While));
        let t = Term::from_str("PICKLES");
        assert_eq!(t, Term::Nop);
    }

    #[test]
    fn test_variable_prefixes() {
        assert_eq!(Term::from_str("V3"), Term::Variable(3));
        assert_eq!(Term::from_str("-V7"), Term::VariableNegative(7));
        assert_eq!(Term::from_str("!V2"), Term::VariableInvert(2));
        assert_eq!(Term::from_str("Vx"), Term::Nop);
    }

    #[test]
    fn test_not_vs_not_equal() {
        assert_eq!(Term::from_str("!"), Term::Function("not".into(), 1));
        assert_eq!(Term::from_str("!="), Term::Function("notEqual".into(), 2));
    }
}
