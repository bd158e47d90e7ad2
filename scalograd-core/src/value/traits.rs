// src/value/traits.rs

use crate::ops::arithmetic::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, neg_op, radd_scalar_op,
    rdiv_scalar_op, rmul_scalar_op, rsub_scalar_op, sub_op, sub_scalar_op,
};
use crate::value::Value;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: the new handle aliases the same node.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

/// Equality is node identity, not numeric equality: two distinct nodes holding the same
/// number are different graph vertices.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

// Every binary operator is available for node/node, node/number and number/node operands,
// owned or borrowed. Number-on-the-left forms go through dedicated ops so that `5.0 - x`
// and `4.0 / x` keep their non-commutative meaning.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $node_op:path, $node_scalar_op:path, $scalar_node_op:path) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $node_op(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $node_op(&self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $node_op(&self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $node_op(self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $node_scalar_op(self, rhs)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $node_scalar_op(&self, rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $scalar_node_op(self, rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $scalar_node_op(self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op, add_scalar_op, radd_scalar_op);
impl_binary_op!(Sub, sub, sub_op, sub_scalar_op, rsub_scalar_op);
impl_binary_op!(Mul, mul, mul_op, mul_scalar_op, rmul_scalar_op);
impl_binary_op!(Div, div, div_op, div_scalar_op, rdiv_scalar_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

/// Left fold with `add`. The first element starts the chain; an empty iterator yields a
/// fresh `0.0` leaf.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, v| add_op(&acc, &v)),
            None => Value::new(0.0),
        }
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}
