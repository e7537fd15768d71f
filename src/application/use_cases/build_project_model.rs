use crate::application::dto::{ModelRequest, ModelResponse};
use crate::ports::inbound::ModelExtractionPort;
use crate::ports::outbound::{BuildTreeReader, ProgressReporter};
use crate::project_model::domain::ProjectModel;
use crate::project_model::services::{ModelMetadataGenerator, ModelAggregator};
use crate::shared::Result;

/// BuildProjectModelUseCase - loads a build tree and aggregates its model
///
/// # Type Parameters
/// * `R` - BuildTreeReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildProjectModelUseCase<R, PR> {
    reader: R,
    progress_reporter: PR,
}

impl<R, PR> BuildProjectModelUseCase<R, PR>
where
    R: BuildTreeReader,
    PR: ProgressReporter,
{
    pub fn new(reader: R, progress_reporter: PR) -> Self {
        Self {
            reader,
            progress_reporter,
        }
    }

    /// Executes the extraction
    ///
    /// Only loading the build tree can fail. Once a tree is loaded the
    /// response always carries a model; problems are listed as diagnostics.
    pub fn execute(&self, request: ModelRequest) -> Result<ModelResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading build tree from: {}",
            request.project_path.display()
        ));
        let tree = self.reader.read_build_tree(&request.project_path)?;

        self.progress_reporter.report(&format!(
            "🔍 Extracting project model ({} {})",
            tree.tool_name(),
            tree.tool_version()
        ));
        let model = ModelAggregator::new(request.options).build(tree.as_ref());

        self.report_summary(&model);
        Ok(ModelResponse::new(model, ModelMetadataGenerator::generate_default()))
    }

    fn report_summary(&self, model: &ProjectModel) {
        self.progress_reporter.report(&format!(
            "✅ Collected {} task(s), {} dependenc{}, {} source path(s)",
            model.tasks().len(),
            model.dependency_count(),
            if model.dependency_count() == 1 { "y" } else { "ies" },
            model.paths().len()
        ));

        for diagnostic in model.diagnostics() {
            let mut text = format!("⚠️  {}", diagnostic);
            for line in diagnostic.details() {
                text.push_str("\n    ");
                text.push_str(line);
            }
            self.progress_reporter.report_error(&text);
        }

        if model.is_degraded() {
            self.progress_reporter.report_completion(&format!(
                "Model built with {} diagnostic(s)",
                model.diagnostics().len()
            ));
        } else {
            self.progress_reporter.report_completion("Model built");
        }
    }
}

impl<R, PR> ModelExtractionPort for BuildProjectModelUseCase<R, PR>
where
    R: BuildTreeReader,
    PR: ProgressReporter,
{
    fn extract_model(&self, request: ModelRequest) -> Result<ModelResponse> {
        self.execute(request)
    }
}
