use color_print::ceprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse `{0}` as address")]
    MalformedOperand(String),

    #[error("`{op}` takes {expected} argument(s), found {found}")]
    MissingArgument {
        op: String,
        expected: usize,
        found: usize,
    },

    #[error("Undefined label: `{0}`")]
    UnboundLabel(String),

    #[error("Labels should start with `{sigil}`: `{name}`")]
    MalformedLabelName { name: String, sigil: char },

    #[error("Unknown operation: `{0}`")]
    UnknownKeyword(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to load config: {0}")]
    Config(String, #[source] serde_yaml::Error),

    #[error("Failed to generate label map")]
    LabelMap(#[source] serde_yaml::Error),
}

impl Error {
    /// Print a fatal error together with its source chain.
    pub fn print(&self) {
        ceprintln!("<red,bold>error</>: {}", self);
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            ceprintln!("     <blue>=</> <bold>caused by</>: {}", err);
            source = std::error::Error::source(err);
        }
    }
}
