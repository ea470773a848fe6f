use super::term::Term;

/// Split one source line into terms. Two leading spaces make one indent
/// level; the rest of the line is whitespace-separated tokens. The
/// `<IDT>` and `<CR>` markers are also accepted inline, so a lexed line
/// and a generated term stream parse the same way.
pub fn lex(s: &str) -> Vec<Term> {
    let mut terms: Vec<Term> = vec![];
    let mut rest = s;
    while rest.starts_with("  ") {
        terms.push(Term::Indent);
        rest = &rest[2..];
    }
    for token in rest.split_whitespace() {
        terms.push(Term::from_str(token));
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_lex() {
        let terms = lex("    ++V0");
        assert_eq!(
            terms,
            vec![
                Term::Indent,
                Term::Indent,
                Term::AssignFunction(crate::lang::AssignOp::AssignInc, 0)
            ]
        );
    }

    #[test]
    fn test_marker_lex() {
        assert_eq!(lex("<IDT> break"), lex("  break"));
    }
}
