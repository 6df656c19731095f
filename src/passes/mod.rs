//! Passes that consume a parsed `Program` through the visitor protocol.

pub mod main_method_finder;
