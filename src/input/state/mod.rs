mod core;
mod keys;
mod pointer;
#[cfg(test)]
mod tests;

pub use core::{InputState, SketchState};
