// A worked example of a command. Parameters arrive as a plain slice whose
// index 0 is the first token after the command name:
//
//   skel greet Ada Hi   ->  params = ["Ada", "Hi"]

use anyhow::Result;

use crate::{ExitStatus, core::context::AppContext};

pub const DESCRIPTION: &str = "\
Print a greeting. A worked example of a command.

Usage: skel greet [name] [greeting]

Arguments:
  name       Who to greet (default: world)
  greeting   The greeting to use (default: Hello)";

const DEFAULT_NAME: &str = "world";
const DEFAULT_GREETING: &str = "Hello";

/// Builds the greeting from positional parameters 0 and 1.
pub fn greeting(params: &[String]) -> String {
    let name = params.first().map_or(DEFAULT_NAME, String::as_str);
    let greeting = params.get(1).map_or(DEFAULT_GREETING, String::as_str);
    format!("{}, {}!", greeting, name)
}

pub fn handle(ctx: &AppContext, params: &[String]) -> Result<ExitStatus> {
    ctx.tracer.trace(format_args!("greet parameters: {:?}", params));
    println!("{}", greeting(params));
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(greeting(&[]), "Hello, world!");
    }

    #[test]
    fn test_positional_parameters() {
        assert_eq!(greeting(&params(&["Ada"])), "Hello, Ada!");
        assert_eq!(greeting(&params(&["Ada", "Hi"])), "Hi, Ada!");
        assert_eq!(greeting(&params(&["Ada", "Hi", "extra"])), "Hi, Ada!");
    }
}
