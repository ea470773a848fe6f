/// ## Built-in numeric operations
///
/// Arithmetic, comparison, and logic over `f64`. Comparisons and logic
/// return 1 or 0. Every result passes through `sanitize` so that NaN and
/// infinities collapse to 0 before anything downstream can see them.

pub struct Operation {}

impl Operation {
    pub fn sanitize(value: f64) -> f64 {
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    pub fn add(lhs: f64, rhs: f64) -> f64 {
        Operation::sanitize(lhs + rhs)
    }

    pub fn sub(lhs: f64, rhs: f64) -> f64 {
        Operation::sanitize(lhs - rhs)
    }

    pub fn mul(lhs: f64, rhs: f64) -> f64 {
        Operation::sanitize(lhs * rhs)
    }

    pub fn div(lhs: f64, rhs: f64) -> f64 {
        Operation::sanitize(lhs / rhs)
    }

    pub fn modulus(lhs: f64, rhs: f64) -> f64 {
        Operation::sanitize(lhs % rhs)
    }

    pub fn less_than(lhs: f64, rhs: f64) -> f64 {
        Operation::boolean(lhs < rhs)
    }

    pub fn greater_than(lhs: f64, rhs: f64) -> f64 {
        Operation::boolean(lhs > rhs)
    }

    pub fn less_equal(lhs: f64, rhs: f64) -> f64 {
        Operation::boolean(lhs <= rhs)
    }

    pub fn greater_equal(lhs: f64, rhs: f64) -> f64 {
        Operation::boolean(lhs >= rhs)
    }

    pub fn equal(lhs: f64, rhs: f64) -> f64 {
        Operation::boolean(lhs == rhs)
    }

    pub fn not_equal(lhs: f64, rhs: f64) -> f64 {
        Operation::boolean(lhs != rhs)
    }

    pub fn and(lhs: f64, rhs: f64) -> f64 {
        Operation::boolean(lhs != 0.0 && rhs != 0.0)
    }

    pub fn or(lhs: f64, rhs: f64) -> f64 {
        Operation::boolean(lhs != 0.0 || rhs != 0.0)
    }

    pub fn not(value: f64) -> f64 {
        Operation::boolean(value == 0.0)
    }

    fn boolean(cond: bool) -> f64 {
        if cond {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Operation::div(5.0, 0.0), 0.0);
        assert_eq!(Operation::modulus(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_booleans() {
        assert_eq!(Operation::less_than(2.0, 3.0), 1.0);
        assert_eq!(Operation::and(1.0, 0.0), 0.0);
        assert_eq!(Operation::not(0.0), 1.0);
    }
}
