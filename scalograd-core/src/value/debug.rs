// src/value/debug.rs
use crate::value::Value;
use std::fmt;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(
                f,
                "Value(data={:?}, grad={:?}, op={:?}, label={:?})",
                guard.data,
                guard.grad,
                guard.grad_fn.kind(),
                guard.label
            ),
            Err(_) => write!(f, "Value(<borrowed>)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}
