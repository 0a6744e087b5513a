use crate::types::{CalcError, CalcResult, Op};

macro_rules! float_op {
    ($name:ident, $op:tt) => {
        pub fn $name(a: f64, b: f64) -> f64 {
            a $op b
        }
    };
}

float_op!(add, +);
float_op!(subtract, -);
float_op!(multiply, *);

// -0.0 == 0.0 なので負のゼロもここで弾かれる
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        Err(CalcError::DivisionByZero)
    } else {
        Ok(a / b)
    }
}

// opは正規化済みの記号であること. 別名はここでは受け付けない
pub fn calculate(op: &str, a: f64, b: f64) -> CalcResult<f64> {
    op.parse::<Op>()?.apply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-2.0, 3.0), 1.0);
        assert_eq!(add(0.0, 0.0), 0.0);
        assert_eq!(add(1.5, 2.5), 4.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(3.0, 5.0), -2.0);
        assert_eq!(subtract(0.0, 7.0), -7.0);
        assert_eq!(subtract(2.5, 0.5), 2.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(2.0, 3.0), 6.0);
        assert_eq!(multiply(-2.0, 3.0), -6.0);
        assert_eq!(multiply(0.0, 5.0), 0.0);
        assert_eq!(multiply(1.5, 2.0), 3.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(6.0, 3.0), Ok(2.0));
        assert_eq!(divide(-6.0, 3.0), Ok(-2.0));
        assert_eq!(divide(5.0, 2.0), Ok(2.5));
        assert_eq!(divide(1.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(1.0, -0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_random_operands() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a: f64 = rng.gen_range(-1e6..1e6);
            let b: f64 = rng.gen_range(-1e6..1e6);
            assert_eq!(add(a, b), a + b);
            assert_eq!(subtract(a, b), a - b);
            assert_eq!(multiply(a, b), a * b);
            if b != 0.0 {
                assert_eq!(divide(a, b), Ok(a / b));
            }
        }
    }

    #[test]
    fn test_non_finite_is_a_value() {
        assert_eq!(multiply(1e308, 10.0), f64::INFINITY);
        assert_eq!(divide(f64::MAX, 0.5), Ok(f64::INFINITY));
        assert!(subtract(f64::INFINITY, f64::INFINITY).is_nan());
    }

    #[test]
    fn test_calculate() {
        assert_eq!(calculate("+", 2.0, 3.0), Ok(5.0));
        assert_eq!(calculate("-", 5.0, 3.0), Ok(2.0));
        assert_eq!(calculate("*", 2.0, 4.0), Ok(8.0));
        assert_eq!(calculate("/", 9.0, 3.0), Ok(3.0));
        assert_eq!(calculate("/", 9.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_calculate_invalid_operation() {
        assert_eq!(
            calculate("%", 1.0, 2.0),
            Err(CalcError::InvalidOperation("%".to_string()))
        );
        assert!(calculate("add", 1.0, 2.0).is_err());
    }
}
