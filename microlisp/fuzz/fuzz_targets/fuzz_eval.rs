#![no_main]

use libfuzzer_sys::fuzz_target;
use microlisp::{Engine, Environment, Value};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let engine = Engine::new();
        let env = Environment::new()
            .with("a", true)
            .with("b", false)
            .with("x", 0.25f32)
            .with("n", 7)
            .with("e", Value::error("fuzz"));

        if let Ok(ast) = engine.parse(s) {
            // NaN atoms make `==` unusable here
            let first = format!("{:?}", engine.eval(&ast, &env));
            assert_eq!(first, format!("{:?}", engine.eval(&ast, &env)));
        }
    }
});
