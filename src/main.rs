use build_model::adapters::outbound::console::StderrProgressReporter;
use build_model::adapters::outbound::filesystem::FileSystemReader;
use build_model::application::dto::{ModelRequest, OutputFormat};
use build_model::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use build_model::application::use_cases::BuildProjectModelUseCase;
use build_model::cli::Args;
use build_model::config::{self, ConfigFile};
use build_model::project_model::services::PathLayout;
use build_model::shared::error::{BuildModelError, ExitCode};
use build_model::shared::logging::{init_logging, parse_level, LoggingConfig};
use build_model::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing::Level;

fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            process::exit(code.as_i32());
        }
    };

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Settings of one run after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    format: OutputFormat,
    resolve_sources: bool,
    layout: PathLayout,
    kind_tags: Option<Vec<String>>,
    parallel: bool,
    strict: bool,
    log_level: Level,
}

impl Settings {
    /// CLI flag > config file > default
    fn resolve(args: &Args, config: &ConfigFile) -> Self {
        let configured_level = config
            .log_level
            .as_deref()
            .and_then(parse_level)
            .unwrap_or(Level::WARN);
        let log_level = match args.verbose {
            0 => configured_level,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };

        Self {
            format: args
                .format
                .or_else(|| config.output_format())
                .unwrap_or_default(),
            resolve_sources: !args.no_sources && config.resolve_sources.unwrap_or(true),
            layout: args
                .layout
                .or_else(|| config.path_layout())
                .unwrap_or_default(),
            kind_tags: config.kind_tags.clone(),
            parallel: args.parallel || config.parallel.unwrap_or(false),
            strict: args.strict || config.strict.unwrap_or(false),
            log_level,
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let project_path = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_project_path(&project_path)?;

    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(&project_path)?.unwrap_or_default(),
    };
    let settings = Settings::resolve(&args, &config);

    init_logging(LoggingConfig::with_level(settings.log_level));
    tracing::debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();
    let use_case = BuildProjectModelUseCase::new(reader, progress_reporter);

    let mut builder = ModelRequest::builder()
        .project_path(project_path)
        .layout(settings.layout)
        .resolve_sources(settings.resolve_sources)
        .parallel(settings.parallel);
    if let Some(tags) = settings.kind_tags.clone() {
        builder = builder.kind_tags(tags);
    }
    let request = builder.build()?;

    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.model, &response.metadata)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.map(PathBuf::from)));
    presenter.present(&formatted_output)?;

    Ok(exit_code_for(settings.strict, response.has_diagnostics()))
}

fn exit_code_for(strict: bool, has_diagnostics: bool) -> ExitCode {
    if strict && has_diagnostics {
        ExitCode::DiagnosticsReported
    } else {
        ExitCode::Success
    }
}

/// Accepts a snapshot file or a directory; rejects missing paths and symlinks
fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BuildModelError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Path does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| BuildModelError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(BuildModelError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    // Security check: Canonicalize path to prevent path traversal
    let canonical_path = path
        .canonicalize()
        .map_err(|e| BuildModelError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    if !canonical_path.is_dir() && !canonical_path.is_file() {
        return Err(BuildModelError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Neither a file nor a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
