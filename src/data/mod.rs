pub mod xor;

pub use xor::{Example, XOR_TRUTH_TABLE};
