use crate::ports::outbound::ModelFormatter;
use crate::project_model::domain::{Dependency, ModelMetadata, ProjectModel, SourcePath};
use crate::shared::Result;

const DEPENDENCY_TABLE_HEADER: &str = "| Group | Artifact | Version | Scopes | Modules | Sources |\n";
const DEPENDENCY_TABLE_SEPARATOR: &str = "|-------|----------|---------|--------|---------|---------|\n";

const PATH_TABLE_HEADER: &str = "| Module | Source Set | Kind | Source Directory | Output Directory |\n";
const PATH_TABLE_SEPARATOR: &str = "|--------|------------|------|------------------|------------------|\n";

/// MarkdownFormatter adapter - a human-readable report of the project model
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn join_cell<'a>(values: impl IntoIterator<Item = &'a String>) -> String {
        Self::escape_cell(
            &values
                .into_iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ProjectModel, metadata: &ModelMetadata) {
        output.push_str("# Project Model\n\n");
        output.push_str(&format!("- **Source**: {}\n", model.source()));
        for source in model.dependency_sources() {
            output.push_str(&format!("- **Build**: {}\n", source.description()));
        }
        output.push_str(&format!(
            "- **Generated**: {} by {} {}\n",
            metadata.timestamp(),
            metadata.tool_name(),
            metadata.tool_version()
        ));
        output.push_str(&format!("- **Run**: `{}`\n\n", metadata.run_id()));
    }

    fn render_summary(&self, output: &mut String, model: &ProjectModel) {
        let (direct, transitive) = model
            .dependency_sources()
            .iter()
            .fold((0, 0), |(d, t), s| (d + s.direct_count(), t + s.transitive_count()));

        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Tasks: {}\n", model.tasks().len()));
        output.push_str(&format!(
            "- Dependencies: {} ({} direct, {} transitive)\n",
            model.dependency_count(),
            direct,
            transitive
        ));
        output.push_str(&format!("- Source paths: {}\n", model.paths().len()));
        output.push_str(&format!("- Diagnostics: {}\n\n", model.diagnostics().len()));
    }

    fn render_tasks(&self, output: &mut String, model: &ProjectModel) {
        output.push_str("## Tasks\n\n");
        if model.tasks().is_empty() {
            output.push_str("*No tasks*\n\n");
            return;
        }
        for task in model.sorted_tasks() {
            output.push_str(&format!("- `{}`\n", task));
        }
        output.push('\n');
    }

    fn render_dependencies(&self, output: &mut String, model: &ProjectModel) {
        let dependencies: Vec<&Dependency> = model
            .dependency_sources()
            .iter()
            .flat_map(|s| s.dependencies())
            .collect();
        let (transitive, direct): (Vec<&Dependency>, Vec<&Dependency>) =
            dependencies.into_iter().partition(|d| d.is_transitive());

        output.push_str("## Direct Dependencies\n\n");
        self.render_dependency_table(output, &direct, "*No direct dependencies*");

        output.push_str("## Transitive Dependencies\n\n");
        self.render_dependency_table(output, &transitive, "*No transitive dependencies*");
    }

    fn render_dependency_table(&self, output: &mut String, dependencies: &[&Dependency], empty: &str) {
        if dependencies.is_empty() {
            output.push_str(empty);
            output.push_str("\n\n");
            return;
        }

        output.push_str(DEPENDENCY_TABLE_HEADER);
        output.push_str(DEPENDENCY_TABLE_SEPARATOR);
        for dependency in dependencies {
            let key = dependency.key();
            let sources = match (dependency.source_file_name(), dependency.is_resolved()) {
                (Some(_), _) => "yes",
                (None, true) => "none",
                (None, false) => "unknown",
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_cell(key.group()),
                Self::escape_cell(key.artifact()),
                Self::escape_cell(key.version()),
                Self::join_cell(dependency.scopes()),
                Self::join_cell(dependency.modules()),
                sources
            ));
        }
        output.push('\n');
    }

    fn render_paths(&self, output: &mut String, model: &ProjectModel) {
        output.push_str("## Source Layout\n\n");
        if model.paths().is_empty() {
            output.push_str("*No source directories*\n\n");
            return;
        }

        output.push_str(PATH_TABLE_HEADER);
        output.push_str(PATH_TABLE_SEPARATOR);
        for path in model.paths() {
            let (kind, sources, outputs) = match path {
                SourcePath::Directory(dir) => (
                    dir.kind.clone(),
                    Self::escape_cell(&dir.source_dir),
                    Self::escape_cell(&dir.output_dir),
                ),
                SourcePath::DirectorySet(set) => (
                    String::new(),
                    Self::join_cell(&set.source_dirs),
                    Self::join_cell(&set.output_dirs),
                ),
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_cell(path.module()),
                Self::escape_cell(path.name()),
                kind,
                sources,
                outputs
            ));
        }
        output.push('\n');
    }

    fn render_diagnostics(&self, output: &mut String, model: &ProjectModel) {
        if model.diagnostics().is_empty() {
            return;
        }

        output.push_str(&format!(
            "## ⚠️ Diagnostics ({})\n\n",
            model.diagnostics().len()
        ));
        for diagnostic in model.diagnostics() {
            output.push_str(&format!("### `{}:{}`\n\n", diagnostic.file(), diagnostic.line()));
            output.push_str("```\n");
            output.push_str(diagnostic.message());
            output.push_str("\n```\n\n");
        }
    }
}

impl ModelFormatter for MarkdownFormatter {
    fn format(&self, model: &ProjectModel, metadata: &ModelMetadata) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model, metadata);
        self.render_summary(&mut output, model);
        self.render_tasks(&mut output, model);
        self.render_dependencies(&mut output, model);
        self.render_paths(&mut output, model);
        self.render_diagnostics(&mut output, model);

        Ok(output)
    }
}
