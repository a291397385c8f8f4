use thiserror::Error;

/// Host-level failures. Runtime errors of interpreted code are not listed
/// here: they are `Object::Error` values returned by evaluation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("parser errors:{}", format_diagnostics(.0))]
    Parse(Vec<String>),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_diagnostics(diagnostics: &[String]) -> String {
    diagnostics.iter().map(|msg| format!("\n    {}", msg)).collect()
}

pub type Result<T> = std::result::Result<T, Error>;
