//! Type mapping between SQL column types and target-language field types.

use forma_schema::Column;

use crate::{Error, Result};

/// Language-agnostic category of a mapped type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Bool,
    Int,
    Float,
    String,
    Time,
    Bytes,
}

/// A column's field type in the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    /// Declared type, e.g. `uint64` or `*time.Time`
    pub name: String,
    /// SQL type hint for ORM tags, e.g. `varchar(64)`
    pub tag_hint: String,
    /// Package the type needs imported, if any
    pub import: Option<&'static str>,
    pub kind: TypeKind,
    /// Whether `name` is a pointer type
    pub pointer: bool,
}

impl FieldType {
    /// Go expression that is true when `expr` holds a non-zero value.
    ///
    /// Returns `None` for types whose zero value is meaningful (bool).
    pub fn non_zero_check(&self, expr: &str) -> Option<String> {
        if self.pointer {
            return Some(format!("{} != nil", expr));
        }
        match self.kind {
            TypeKind::Bool => None,
            TypeKind::Int | TypeKind::Float => Some(format!("{} != 0", expr)),
            TypeKind::String => Some(format!("{} != \"\"", expr)),
            TypeKind::Time => Some(format!("!{}.IsZero()", expr)),
            TypeKind::Bytes => Some(format!("len({}) > 0", expr)),
        }
    }

    /// Go expression that is true when `expr` holds the zero value.
    pub fn zero_check(&self, expr: &str) -> Option<String> {
        if self.pointer {
            return Some(format!("{} == nil", expr));
        }
        match self.kind {
            TypeKind::Int | TypeKind::Float => Some(format!("{} == 0", expr)),
            TypeKind::String => Some(format!("{} == \"\"", expr)),
            TypeKind::Time => Some(format!("{}.IsZero()", expr)),
            TypeKind::Bytes => Some(format!("len({}) == 0", expr)),
            TypeKind::Bool => None,
        }
    }
}

/// Trait for mapping SQL column types to language-specific field types.
pub trait TypeMapper {
    /// Map a column of `table` to a field type.
    fn map(&self, table: &str, column: &Column) -> Result<FieldType>;
}

/// Go type mapper implementation
pub struct GoTypeMapper;

impl GoTypeMapper {
    fn base(sql_type: &str) -> Option<(&'static str, TypeKind)> {
        let lower = sql_type.trim().to_ascii_lowercase();
        // MySQL convention for booleans
        if lower.starts_with("tinyint(1)") {
            return Some(("bool", TypeKind::Bool));
        }

        let unsigned = lower.split_whitespace().any(|word| word == "unsigned");
        let base = lower
            .split(|c: char| c == '(' || c.is_whitespace())
            .next()
            .unwrap_or_default();

        let mapped = match base {
            "bool" | "boolean" => ("bool", TypeKind::Bool),
            "tinyint" | "smallint" | "mediumint" | "int" | "integer" => {
                (if unsigned { "uint" } else { "int" }, TypeKind::Int)
            }
            "bigint" => (if unsigned { "uint64" } else { "int64" }, TypeKind::Int),
            "float" => ("float32", TypeKind::Float),
            "double" | "real" | "decimal" | "numeric" => ("float64", TypeKind::Float),
            "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "enum"
            | "set" | "json" => ("string", TypeKind::String),
            "date" | "time" | "datetime" | "timestamp" => ("time.Time", TypeKind::Time),
            "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => {
                ("[]byte", TypeKind::Bytes)
            }
            _ => return None,
        };
        Some(mapped)
    }
}

impl TypeMapper for GoTypeMapper {
    fn map(&self, table: &str, column: &Column) -> Result<FieldType> {
        let (name, kind) =
            Self::base(column.sql_type()).ok_or_else(|| Error::UnsupportedType {
                table: table.to_string(),
                column: column.name().to_string(),
                sql_type: column.sql_type().to_string(),
            })?;

        // Nullable times become pointers
        let pointer = kind == TypeKind::Time && column.is_nullable();
        Ok(FieldType {
            name: if pointer {
                format!("*{}", name)
            } else {
                name.to_string()
            },
            tag_hint: column.sql_type().trim().to_ascii_lowercase(),
            import: (kind == TypeKind::Time).then_some("time"),
            kind,
            pointer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(sql_type: &str) -> Result<FieldType> {
        GoTypeMapper.map("t", &Column::new("c", sql_type, 1))
    }

    #[test]
    fn test_integer_families() {
        assert_eq!(map("int").unwrap().name, "int");
        assert_eq!(map("INT(11)").unwrap().name, "int");
        assert_eq!(map("int unsigned").unwrap().name, "uint");
        assert_eq!(map("bigint").unwrap().name, "int64");
        assert_eq!(map("bigint(20) unsigned").unwrap().name, "uint64");
        assert_eq!(map("smallint").unwrap().kind, TypeKind::Int);
    }

    #[test]
    fn test_bool() {
        assert_eq!(map("tinyint(1)").unwrap().name, "bool");
        assert_eq!(map("boolean").unwrap().name, "bool");
        assert_eq!(map("tinyint(4)").unwrap().name, "int");
    }

    #[test]
    fn test_text_and_numbers() {
        let varchar = map("VARCHAR(64)").unwrap();
        assert_eq!(varchar.name, "string");
        assert_eq!(varchar.tag_hint, "varchar(64)");
        assert_eq!(varchar.import, None);

        assert_eq!(map("decimal(10,2)").unwrap().name, "float64");
        assert_eq!(map("float").unwrap().name, "float32");
        assert_eq!(map("longblob").unwrap().name, "[]byte");
    }

    #[test]
    fn test_time_types() {
        let datetime = map("datetime").unwrap();
        assert_eq!(datetime.name, "time.Time");
        assert_eq!(datetime.import, Some("time"));
        assert!(!datetime.pointer);

        let nullable = GoTypeMapper
            .map("t", &Column::new("deleted_at", "timestamp", 1).nullable(true))
            .unwrap();
        assert_eq!(nullable.name, "*time.Time");
        assert_eq!(nullable.non_zero_check("x").as_deref(), Some("x != nil"));
    }

    #[test]
    fn test_unsupported_type_names_column() {
        let err = GoTypeMapper
            .map("places", &Column::new("location", "geometry", 3))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "unsupported type 'geometry' for column 'location' in table 'places'"
        );
    }

    #[test]
    fn test_zero_checks() {
        assert_eq!(map("int").unwrap().zero_check("t.ID").as_deref(), Some("t.ID == 0"));
        assert_eq!(
            map("text").unwrap().non_zero_check("t.Name").as_deref(),
            Some("t.Name != \"\"")
        );
        assert_eq!(map("bool").unwrap().non_zero_check("t.On"), None);
    }
}
