//! Generate operation - synthesize tables and materialize a template.

use std::{fs, path::Path};

use eyre::{Context, Result, bail, eyre};
use forma_codegen::{Artifacts, naming, synthesize};
use forma_schema::SchemaManifest;
use forma_template::{
    MaterializeRequest, Materializer, OutputTarget, Rule, TemplateRegistry, TemplateTree,
    rules::{module_rules, placeholder_rules},
    tree::module_line,
};
use rand::Rng;

use crate::reports::{GenerateReport, GeneratedTable, PreviewFile};

/// Which part of the template a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Model,
    Dao,
    Handler,
}

impl GeneratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Model => "model",
            GeneratorKind::Dao => "dao",
            GeneratorKind::Handler => "handler",
        }
    }
}

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    pub kind: GeneratorKind,
    /// Table names in the order they are generated
    pub tables: &'a [String],
    pub module_name: Option<&'a str>,
    /// Explicit output directory
    pub out: Option<&'a Path>,
    pub template: &'a str,
    /// Overrides the manifest's embed option
    pub embed: Option<bool>,
    /// Keep the template's database init files
    pub include_init: bool,
    /// Materialize the template's marked example code, renamed to each table
    pub keep_example: bool,
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Tables are processed in order and the first failure stops the run. When no
/// output directory is given, the directory created for the first table is
/// reused for the rest.
pub fn generate(
    manifest: &SchemaManifest,
    registry: &TemplateRegistry,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let module_name = resolve_module_name(opts.out, opts.module_name)?;
    let tree = registry.get(opts.template)?;
    let selection = tree
        .settings()
        .kind(opts.kind.as_str())
        .ok_or_else(|| {
            eyre!(
                "template '{}' has no [kinds.{}] section",
                tree.name(),
                opts.kind.as_str()
            )
        })?
        .selection(opts.include_init);

    let mut options = manifest.options().clone();
    if let Some(embed) = opts.embed {
        options.embed_base_model = embed;
    }

    let tables: Vec<&str> = opts
        .tables
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if tables.is_empty() {
        bail!("no table names given, use --table");
    }

    let materializer = Materializer::new(registry);
    let mut out_dir = opts.out.map(Path::to_path_buf);
    let mut generated = Vec::with_capacity(tables.len());
    let mut preview = Vec::new();

    for table in tables {
        let schema = manifest.table(table)?;
        let artifacts = synthesize(schema, &options)
            .wrap_err_with(|| format!("Failed to synthesize table '{}'", table))?;

        let mut target = OutputTarget::new(opts.kind.as_str());
        if let Some(dir) = &out_dir {
            target = target.in_dir(dir);
        }
        let request = MaterializeRequest::new(opts.template, target)
            .with_selection(selection.clone())
            .with_rules(build_rules(
                opts.kind,
                tree,
                &artifacts,
                &module_name,
                opts.keep_example,
            ));

        let files = materializer.render(&request)?;
        let paths = files.iter().map(|f| f.path.clone()).collect();
        if opts.dry_run {
            preview.extend(files.into_iter().map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            }));
        } else {
            let dir = forma_template::write(&files, &request.target)
                .wrap_err_with(|| format!("Failed to write files for table '{}'", table))?;
            if out_dir.is_none() {
                out_dir = Some(dir);
            }
        }

        generated.push(GeneratedTable {
            table: table.to_string(),
            type_name: artifacts.type_name().to_string(),
            files: paths,
        });
    }

    Ok(GenerateReport {
        kind: opts.kind.as_str().to_string(),
        output_dir: if opts.dry_run { None } else { out_dir },
        tables: generated,
        preview: opts.dry_run.then_some(preview),
    })
}

/// Module name from `<out>/go.mod`, falling back to the command line.
fn resolve_module_name(out: Option<&Path>, flag: Option<&str>) -> Result<String> {
    if let Some(go_mod) = out.map(|dir| dir.join("go.mod")).filter(|p| p.is_file()) {
        let content = fs::read_to_string(&go_mod)
            .wrap_err_with(|| format!("Failed to read {}", go_mod.display()))?;
        if let Some(module) = module_line(&content) {
            return Ok(module.to_string());
        }
    }

    match flag.map(str::trim).filter(|m| !m.is_empty()) {
        Some(module) => Ok(module.to_string()),
        None => bail!("required flag \"--module-name\" not set and no go.mod found in --out"),
    }
}

/// Rule list for one table, in application order: marked demo code is
/// dropped, artifacts are spliced in, imports move to the caller's module,
/// constants are randomized and finally the placeholder entity is renamed.
///
/// With `keep_example` the demo code stays and the artifact marks are
/// cleared instead of filled.
fn build_rules(
    kind: GeneratorKind,
    tree: &TemplateTree,
    artifacts: &Artifacts,
    module_name: &str,
    keep_example: bool,
) -> Vec<Rule> {
    let settings = tree.settings();
    let marks = &settings.marks;
    let splice = |mark: &str, code: &str| {
        Rule::replace(mark, if keep_example { "" } else { code })
    };

    let mut rules = vec![
        settings.marker_rule(keep_example),
        splice(marks.model.as_str(), artifacts.model()),
    ];
    if matches!(kind, GeneratorKind::Dao | GeneratorKind::Handler) {
        rules.push(splice(marks.dao.as_str(), artifacts.dao()));
    }
    if kind == GeneratorKind::Handler {
        rules.push(splice(marks.handler.as_str(), artifacts.handler()));
    }

    rules.extend(module_rules(tree.module_path(), module_name, &settings.preserve));

    if kind == GeneratorKind::Handler {
        let mut rng = rand::thread_rng();
        rules.extend(
            settings
                .randomize
                .iter()
                .map(|constant| constant.rule(rng.gen_range(1..100))),
        );
    }

    let type_name = artifacts.type_name();
    rules.extend(placeholder_rules(
        &settings.placeholder,
        type_name,
        &naming::unexported(type_name),
    ));
    rules
}
