#![no_main]

use libfuzzer_sys::fuzz_target;
use microlisp::{Engine, Environment};

fuzz_target!(|depth: u8| {
    let engine = Engine::new();

    let depth = (depth as usize % 150) + 1;

    let mut expr = String::from("(env x)");
    for _ in 0..depth {
        expr = format!("(not {})", expr);
    }

    let env = Environment::new().with("x", true);
    let _ = engine.evaluate(&expr, &env);
});
