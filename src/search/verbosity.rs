use clap;

/// Logging level of the binaries.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum Verbosity {
    #[clap(help = "Only errors.")]
    Silent,
    #[clap(help = "Search start and end, with statistics.")]
    Normal,
    #[clap(help = "Also every depth bound and goal found.")]
    Verbose,
    #[clap(help = "Also every generated node.")]
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
