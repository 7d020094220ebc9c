#![allow(dead_code)]

pub mod grammar_fixtures;
pub mod model_assertions;
