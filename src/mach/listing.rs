use crate::error;
use crate::lang::{lex, parse, Error, Line};

pub const MAX_LINE_LEN: usize = 255;
const MAX_LINE_COUNT: usize = 48;

/// ## Program listing
///
/// The session's program: analyzed lines plus their canonical source
/// text, kept in step so LIST and SAVE reproduce exactly what RUN sees.
#[derive(Debug, Default)]
pub struct Listing {
    source: Vec<String>,
    lines: Vec<Line>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    /// Lex, analyze, and append one line of source. The stored text is
    /// the line's own rendering, so a LIST after LOAD is already in
    /// canonical form.
    pub fn load_str(&mut self, s: &str) -> Result<(), Error> {
        if s.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        if self.lines.len() >= MAX_LINE_COUNT {
            return Err(error!(ProgramTooLong));
        }
        let line = parse(lex(s));
        self.source.push(line.to_string());
        self.lines.push(line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_source() {
        let mut listing = Listing::default();
        listing.load_str("  =V0   5").unwrap();
        assert_eq!(listing.source(), ["  =V0 5"]);
        assert_eq!(listing.len(), 1);
    }

    #[test]
    fn test_full_program() {
        let mut listing = Listing::default();
        for _ in 0..MAX_LINE_COUNT {
            listing.load_str("++V0").unwrap();
        }
        assert!(listing.load_str("++V0").is_err());
    }
}
