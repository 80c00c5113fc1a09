/// Domain services - Stateless transformations over lines
pub mod char_reverser;

pub use char_reverser::{CharReverser, LineManipulator};
