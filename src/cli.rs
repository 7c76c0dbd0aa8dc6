use std::io::{self, Write};

use crate::script::{parse, Interpreter, ScriptError};

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// Runs a script the way the binary does and returns the exit status.
///
/// Output printed before a failing command is still written to `stdout`.
/// Each error goes to `stderr` as `error: <message> at <start>..<end>`.
pub fn execute(src: &str, stdout: &mut impl Write, stderr: &mut impl Write) -> io::Result<u8> {
    let script = match parse(src) {
        Ok(script) => script,
        Err(errors) => {
            report(stderr, &errors)?;
            return Ok(FAILURE);
        }
    };
    tracing::debug!(commands = script.0.len(), "parsed script");

    let mut interpreter = Interpreter::new();
    let result = interpreter.run(&script);

    stdout.write_all(interpreter.output().as_bytes())?;
    stdout.flush()?;

    match result {
        Ok(()) => Ok(SUCCESS),
        Err(error) => {
            report(stderr, &[error])?;
            Ok(FAILURE)
        }
    }
}

fn report(stderr: &mut impl Write, errors: &[ScriptError]) -> io::Result<()> {
    for error in errors {
        writeln!(stderr, "error: {error} at {}", error.span())?;
    }
    Ok(())
}
