#[derive(Debug)]
pub enum Error {
    Config(String),
    InvalidCaseMode(String),
    InvalidKind(String),
    Script(String),
    Output(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Config error: {}", e),
            Self::InvalidCaseMode(e) => {
                write!(f, "Invalid case mode '{}', expected upper, lower or both", e)
            }
            Self::InvalidKind(e) => write!(
                f,
                "Invalid kind '{}', expected alpha, numeric or alphanumeric",
                e
            ),
            Self::Script(e) => write!(f, "Script error: {}", e),
            Self::Output(e) => write!(f, "Output error: {}", e),
        }
    }
}
