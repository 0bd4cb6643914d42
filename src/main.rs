// nixglhost - Run programs against the host's GPU driver libraries
use nixglhost::{parse_invocation, run, NixGlHostError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let request = match parse_invocation(std::env::args_os().skip(1)) {
        Ok(request) => request,
        Err(NixGlHostError::Usage(err)) => err.exit(),
        Err(e) => return fail(e),
    };

    match run(request) {
        Ok(outcome) => exit_code(outcome.exit_code()),
        Err(e) => fail(e),
    }
}

fn fail(error: NixGlHostError) -> ExitCode {
    eprintln!("Error: {}", error);
    exit_code(error.exit_code())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}
