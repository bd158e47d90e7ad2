//! Builds a small expression, runs backward and prints every node with its gradient,
//! operands first.
//!
//! `cargo run --example expression_graph`

use scalograd_core::autograd::ComputationGraph;
use scalograd_core::{ScalogradError, Value};

fn main() -> Result<(), ScalogradError> {
    env_logger::init();

    let a = Value::with_label(2.0, "a");
    let b = Value::with_label(-3.0, "b");
    let c = Value::with_label(10.0, "c");
    let e = &a * &b;
    e.set_label("e");
    let d = &e + &c;
    d.set_label("d");
    let f = Value::with_label(-2.0, "f");
    let l = &d * &f;
    l.set_label("L");
    let out = l.tanh();
    out.set_label("out");

    let graph = ComputationGraph::build(&out);
    graph.backward();

    for node in graph.nodes() {
        println!(
            "{:>4} {:?}  data {:>10.4}  grad {:>10.4}",
            node.label().unwrap_or_default(),
            node.op_kind(),
            node.data(),
            node.grad()
        );
    }

    a.zero_grad();
    let cube = a.pow(3)?;
    cube.backward();
    println!("d(a^3)/da at a = 2: {}", a.grad());
    Ok(())
}
