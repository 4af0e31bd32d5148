/// Two-value comparison command.
pub mod check;
/// Leaf-run inspection command.
pub mod flatten;
/// Reference scenario command.
pub mod scenarios;

mod util;
