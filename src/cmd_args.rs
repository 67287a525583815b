use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Completion endpoint URL.
    /// Overrides LABELWISE_ENDPOINT and the built-in Messages API URL.
    #[clap(short = 'e', long, env = "LABELWISE_ENDPOINT", help = "completion endpoint URL")]
    endpoint: Option<String>,

    /// Model identifier sent with every analysis request.
    #[clap(short = 'm', long, env = "LABELWISE_MODEL", help = "model identifier")]
    model: Option<String>,

    /// Write debug-level diagnostics to the log file
    #[clap(short = 'v', long, help = "verbose logging")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    endpoint: Option<String>,
    model: Option<String>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            endpoint: args.endpoint,
            model: args.model,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_long_flags() {
        let args = CommandLineArgs::parse_from([
            "program",
            "--endpoint",
            "http://localhost:8080/v1/messages",
            "--model",
            "test-model",
            "--verbose",
        ]);
        assert_eq!(args.endpoint(), Some("http://localhost:8080/v1/messages"));
        assert_eq!(args.model(), Some("test-model"));
        assert!(args.verbose());
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-e", "http://x/y", "-m", "m1", "-v"]);
        assert_eq!(args.endpoint(), Some("http://x/y"));
        assert_eq!(args.model(), Some("m1"));
        assert!(args.verbose());
    }

    #[test]
    fn test_verbose_defaults_off() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert!(!args.verbose());
    }
}
