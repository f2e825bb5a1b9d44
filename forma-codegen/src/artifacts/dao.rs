use super::{Artifact, ArtifactKind};
use crate::{analyze::TableModel, builder::CodeBuilder, naming};

/// The `updateDataByID` function spliced into the persistence template.
pub struct DaoFragment<'a> {
    table: &'a TableModel,
    package: &'a str,
}

impl<'a> DaoFragment<'a> {
    pub fn new(table: &'a TableModel, package: &'a str) -> Self {
        Self { table, package }
    }
}

impl Artifact for DaoFragment<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Dao
    }

    fn render(&self) -> String {
        let table = self.table;
        let signature = format!(
            "func (d *{}Dao) updateDataByID(ctx context.Context, db *gorm.DB, table *{}.{}) error {{",
            naming::unexported(&table.type_name),
            self.package,
            table.type_name
        );
        let guard = table.key.as_ref().and_then(|key| {
            key.ty
                .zero_check(&format!("table.{}", key.name))
                .map(|check| (check, key.json_name.as_str()))
        });

        CodeBuilder::new()
            .block(&signature, "}", |b| {
                let b = match &guard {
                    Some((check, json)) => b
                        .block(&format!("if {} {{", check), "}", |b| {
                            b.line(&format!("return errors.New(\"{} cannot be empty\")", json))
                        })
                        .blank(),
                    None => b,
                };

                b.line("update := map[string]interface{}{}")
                    .blank()
                    .each(table.updatable_fields(), |b, field| {
                        let expr = format!("table.{}", field.name);
                        let assign = format!("update[\"{}\"] = {}", field.column.name(), expr);
                        match field.ty.non_zero_check(&expr) {
                            Some(check) => b
                                .block(&format!("if {} {{", check), "}", |b| b.line(&assign)),
                            None => b.line(&assign),
                        }
                    })
                    .blank()
                    .line("return db.WithContext(ctx).Model(table).Updates(update).Error")
            })
            .build()
    }
}
