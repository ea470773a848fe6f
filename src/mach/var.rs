use super::Operation;

/// ## Register memory
///
/// A fixed-size numeric register file. Reads of an index outside the
/// file yield zero and writes there are dropped; a program can never
/// observe a bad index as anything but a zero.

#[derive(Debug)]
pub struct Var {
    vals: Vec<f64>,
}

impl Var {
    pub fn new(count: usize) -> Var {
        Var {
            vals: vec![0.0; count],
        }
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn clear(&mut self) {
        for val in self.vals.iter_mut() {
            *val = 0.0;
        }
    }

    pub fn fetch(&self, index: usize) -> f64 {
        self.vals.get(index).copied().unwrap_or(0.0)
    }

    /// Stores sanitize: a register never holds NaN or an infinity.
    pub fn store(&mut self, index: usize, value: f64) {
        if let Some(val) = self.vals.get_mut(index) {
            *val = Operation::sanitize(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range() {
        let mut vars = Var::new(4);
        vars.store(9, 5.0);
        assert_eq!(vars.fetch(9), 0.0);
        assert_eq!(vars.fetch(3), 0.0);
    }

    #[test]
    fn test_store_sanitizes() {
        let mut vars = Var::new(1);
        vars.store(0, f64::NAN);
        assert_eq!(vars.fetch(0), 0.0);
        vars.store(0, f64::INFINITY);
        assert_eq!(vars.fetch(0), 0.0);
    }
}
