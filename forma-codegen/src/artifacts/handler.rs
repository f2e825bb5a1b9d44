use super::{Artifact, ArtifactKind, FieldLine, align_fields};
use crate::{
    analyze::{FieldModel, KeyField, TableModel},
    builder::CodeBuilder,
    type_mapper::TypeKind,
};

/// Request and response types spliced into the handler template.
pub struct HandlerFragment<'a> {
    table: &'a TableModel,
}

impl<'a> HandlerFragment<'a> {
    pub fn new(table: &'a TableModel) -> Self {
        Self { table }
    }

    /// The key column's line, or the base model's key.
    fn key_line(&self, binding: bool) -> Option<FieldLine> {
        let key: &KeyField = self.table.key.as_ref()?;
        if !key.embedded {
            if let Some(pk) = self.table.fields.iter().find(|f| f.is_primary_key()) {
                return Some(Self::field_line(pk, binding));
            }
        }
        Some(FieldLine::new(
            &key.name,
            &key.ty.name,
            tag(&key.json_name, binding),
        ))
    }

    /// Whether `field` is already covered by the key line.
    fn is_key(&self, field: &FieldModel) -> bool {
        field.is_primary_key()
            || self
                .table
                .key
                .as_ref()
                .is_some_and(|key| key.embedded && field.audit && field.name == key.name)
    }

    fn field_line(field: &FieldModel, binding: bool) -> FieldLine {
        FieldLine::new(&field.name, &field.ty.name, tag(&field.json_name, binding))
            .with_comment(field.column.comment())
    }

    fn render_struct(b: CodeBuilder, doc: &str, name: &str, lines: &[FieldLine]) -> CodeBuilder {
        b.comment(&format!("{} {}", name, doc))
            .block(&format!("type {} struct {{", name), "}", |b| {
                b.each(align_fields(lines), |b, line| b.line(&line))
            })
    }
}

fn tag(json: &str, binding: bool) -> String {
    if binding {
        format!("`json:\"{}\" binding:\"\"`", json)
    } else {
        format!("`json:\"{}\"`", json)
    }
}

impl Artifact for HandlerFragment<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Handler
    }

    fn render(&self) -> String {
        let table = self.table;
        let name = &table.type_name;

        let create: Vec<FieldLine> = table
            .updatable_fields()
            .map(|f| Self::field_line(f, true))
            .collect();

        let mut update: Vec<FieldLine> = self.key_line(true).into_iter().collect();
        update.extend(table.updatable_fields().map(|f| Self::field_line(f, true)));

        let mut detail: Vec<FieldLine> = self.key_line(false).into_iter().collect();
        detail.extend(
            table
                .fields
                .iter()
                .filter(|f| !self.is_key(f))
                .map(|f| Self::field_line(f, false)),
        );

        let code = Self::render_struct(
            CodeBuilder::new(),
            "request params",
            &format!("Create{}Request", name),
            &create,
        );
        let code = Self::render_struct(
            code.blank(),
            "request params",
            &format!("Update{}ByIDRequest", name),
            &update,
        );
        let code = Self::render_struct(
            code.blank(),
            "detail",
            &format!("{}ObjDetail", name),
            &detail,
        );

        adjust_id_type(&code.build(), table)
    }
}

/// Rewrite an integer key in `<T>ObjDetail` to `uint64` transported as a
/// JSON string, keeping any trailing comment.
///
/// The detail block is realigned afterwards; every other line passes
/// through untouched.
pub fn adjust_id_type(code: &str, table: &TableModel) -> String {
    let Some(key) = table.key.as_ref().filter(|k| k.ty.kind == TypeKind::Int) else {
        return code.to_string();
    };

    let header = format!("type {}ObjDetail struct {{", table.type_name);
    let mut out = String::with_capacity(code.len());
    let mut detail: Option<Vec<&str>> = None;
    for line in code.split_inclusive('\n') {
        let body = line.trim_end_matches('\n');
        if let Some(mut fields) = detail.take() {
            if body == "}" {
                for field in rewrite_key(&fields, key) {
                    out.push('\t');
                    out.push_str(&field);
                    out.push('\n');
                }
                out.push_str(line);
            } else {
                fields.push(body);
                detail = Some(fields);
            }
            continue;
        }

        out.push_str(line);
        if body == header {
            detail = Some(Vec::new());
        }
    }

    // unterminated block
    for field in detail.unwrap_or_default() {
        out.push_str(field);
        out.push('\n');
    }
    out
}

/// Field lines of a struct body with the key retyped, realigned.
fn rewrite_key(lines: &[&str], key: &KeyField) -> Vec<String> {
    let Some(mut fields) = lines
        .iter()
        .map(|line| parse_field_line(line))
        .collect::<Option<Vec<_>>>()
    else {
        return lines.iter().map(|line| line.trim().to_string()).collect();
    };

    for field in fields.iter_mut().filter(|f| f.name == key.name) {
        field.ty = "uint64".to_string();
        field.tag = format!("`json:\"{},string\"`", key.json_name);
    }
    align_fields(&fields)
}

/// Split `Name Type `tag` // comment` back into its parts.
fn parse_field_line(line: &str) -> Option<FieldLine> {
    let (name, rest) = line.trim().split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    let (ty, rest) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let rest = rest.trim_start();

    let (tag, rest) = match rest.strip_prefix('`').and_then(|r| r.find('`')) {
        Some(close) => rest.split_at(close + 2),
        None => ("", rest),
    };
    let comment = rest.trim().strip_prefix("//").unwrap_or("");

    Some(FieldLine::new(name, ty, tag.to_string()).with_comment(comment))
}
