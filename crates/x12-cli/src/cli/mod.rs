mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

pub use commands::build_cli;
pub use dispatch::{
    CheckParams, EventsParams, LoopsParams, ReformatParams, TokensParams, WriteParams,
};
