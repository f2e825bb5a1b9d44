use miette::Diagnostic;
use thiserror::Error;

/// Result type for synthesis
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("table '{table}' has no columns")]
    #[diagnostic(code(forma::empty_schema))]
    EmptySchema { table: String },

    #[error("unsupported type '{sql_type}' for column '{column}' in table '{table}'")]
    #[diagnostic(
        code(forma::unsupported_type),
        help("supported types: integers, float/double/decimal, char/varchar/text, date/time/datetime/timestamp, bool, blob/binary")
    )]
    UnsupportedType {
        table: String,
        column: String,
        sql_type: String,
    },

    #[error("columns '{first}' and '{second}' in table '{table}' both map to field '{field}'")]
    #[diagnostic(code(forma::duplicate_field))]
    DuplicateFieldName {
        table: String,
        field: String,
        first: String,
        second: String,
    },
}
