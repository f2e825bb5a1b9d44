use serde::Deserialize;

/// Options controlling how artifacts are rendered.
///
/// Read from the `[options]` table of `forma.toml`:
///
/// ```toml
/// [options]
/// embed = true
/// json_tags = true
/// orm_tags = true
/// package = "model"
/// base_model = "ggorm.Model"
/// base_model_import = "github.com/forma-rs/skeleton/pkg/ggorm"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationOptions {
    /// Embed the shared audit-fields struct into the model
    #[serde(rename = "embed")]
    pub embed_base_model: bool,
    /// Emit `json:"..."` tags on model fields
    #[serde(rename = "json_tags")]
    pub include_json_tags: bool,
    /// Emit `gorm:"..."` tags on model fields
    #[serde(rename = "orm_tags")]
    pub include_orm_tags: bool,
    /// Go package name of the model file
    #[serde(rename = "package")]
    pub output_package_name: String,
    /// Qualified name of the embedded audit-fields struct
    pub base_model: String,
    /// Import path of the package declaring `base_model`; empty when it is local
    pub base_model_import: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            embed_base_model: true,
            include_json_tags: true,
            include_orm_tags: true,
            output_package_name: "model".to_string(),
            base_model: "ggorm.Model".to_string(),
            base_model_import: "github.com/forma-rs/skeleton/pkg/ggorm".to_string(),
        }
    }
}
