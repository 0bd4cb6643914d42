//! Two-phase command line scan.
//!
//! Phase 1 walks the tokens and recognizes nixglhost's own options until the
//! first positional token, which becomes `NIX_BINARY`. Phase 2 copies every
//! remaining token verbatim, dropping a single `--` directly after the
//! binary. Only the phase-1 prefix is validated against [`Args`]; the binary
//! and its arguments are re-attached behind an explicit `--` so clap never
//! interprets them.

use crate::cli::args::Args;
use crate::domain::error::NixGlHostResult;
use crate::domain::request::InvocationRequest;
use clap::{Command, CommandFactory, Parser};
use std::ffi::{OsStr, OsString};

const END_OF_OPTIONS: &str = "--";

/// Parse the invocation tokens (without the program name).
pub fn parse_invocation<I, T>(tokens: I) -> NixGlHostResult<InvocationRequest>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Args::command();
    let split = split_tokens(&command, tokens.into_iter().map(Into::into));

    let args = Args::try_parse_from(split.into_clap_input(command.get_name()))?;
    Ok(args.into())
}

/// Command line cut at the target binary
#[derive(Debug, Default, PartialEq)]
struct SplitTokens {
    options: Vec<OsString>,
    binary: Option<OsString>,
    passthrough: Vec<OsString>,
    /// The last option wanted a value that was never given
    dangling_value: bool,
}

impl SplitTokens {
    fn into_clap_input(self, bin_name: &str) -> Vec<OsString> {
        let mut input = Vec::with_capacity(self.options.len() + self.passthrough.len() + 3);
        input.push(OsString::from(bin_name));
        input.extend(self.options);

        // Let clap report the missing option value rather than mistaking the
        // binary for it.
        if self.dangling_value {
            return input;
        }

        if let Some(binary) = self.binary {
            input.push(OsString::from(END_OF_OPTIONS));
            input.push(binary);
            input.extend(self.passthrough);
        }
        input
    }
}

/// Names of options that consume a value
#[derive(Debug, Default)]
struct ValuedOptions {
    shorts: Vec<char>,
    longs: Vec<String>,
}

impl ValuedOptions {
    fn from_command(command: &Command) -> Self {
        let mut valued = Self::default();
        for arg in command
            .get_arguments()
            .filter(|arg| !arg.is_positional() && arg.get_action().takes_values())
        {
            valued.shorts.extend(arg.get_short());
            valued.longs.extend(arg.get_long().map(str::to_string));
        }
        valued
    }

    /// Whether `token` (option-shaped) needs the following token as its value.
    fn wants_value(&self, token: &OsStr) -> bool {
        let Some(token) = token.to_str() else {
            return false;
        };

        if let Some(long) = token.strip_prefix("--") {
            return !long.contains('=') && self.longs.iter().any(|name| name == long);
        }

        // Short cluster: the first value-taking flag swallows the rest of the
        // token, or the next token when it is the last character.
        let cluster = &token[1..];
        for (index, flag) in cluster.char_indices() {
            if self.shorts.contains(&flag) {
                return index + flag.len_utf8() == cluster.len();
            }
        }
        false
    }
}

fn is_option_shaped(token: &OsStr) -> bool {
    let bytes = token.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-'
}

fn split_tokens<I>(command: &Command, tokens: I) -> SplitTokens
where
    I: IntoIterator<Item = OsString>,
{
    let valued = ValuedOptions::from_command(command);
    let mut tokens = tokens.into_iter().peekable();
    let mut split = SplitTokens::default();

    while let Some(token) = tokens.next() {
        if token == END_OF_OPTIONS {
            split.binary = tokens.next();
            break;
        }

        if !is_option_shaped(&token) {
            split.binary = Some(token);
            break;
        }

        let wants_value = valued.wants_value(&token);
        split.options.push(token);
        if wants_value {
            match tokens.next_if(|next| !is_option_shaped(next)) {
                Some(value) => split.options.push(value),
                None => {
                    split.dangling_value = true;
                    break;
                }
            }
        }
    }

    split.passthrough = tokens.collect();
    if split.binary.is_some() && split.passthrough.first().is_some_and(|t| t == END_OF_OPTIONS) {
        split.passthrough.remove(0);
    }
    split
}
