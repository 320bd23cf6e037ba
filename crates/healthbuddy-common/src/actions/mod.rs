mod action_enum;

pub use action_enum::*;
