/// Use cases - application workflows driven by the CLI
mod build_project_model;

pub use build_project_model::BuildProjectModelUseCase;
