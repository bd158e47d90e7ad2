//! Binary arithmetic on nodes, plus negation and constant powers.
//!
//! Only `add`, `mul`, `div` and `pow` carry their own backward rule. `neg` and `sub`
//! are compositions of those.

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::{add_op, add_scalar_op, radd_scalar_op};
pub use div::{div_op, div_scalar_op, rdiv_scalar_op};
pub use mul::{mul_op, mul_scalar_op, rmul_scalar_op};
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::{rsub_scalar_op, sub_op, sub_scalar_op};
