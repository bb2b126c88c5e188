//! The generator pipeline
//!
//! Phases run in the fixed order of [`Phase::ORDER`], driven by a plain
//! loop in [`Pipeline::run`]. The first phase to fail aborts every later
//! phase; there is no retry and no rollback of files already written.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::config::ConfigStore;
use crate::error::Error;
use crate::options::Options;
use crate::prompt::PromptSource;
use crate::style;
use crate::templates::{self, TemplateContext, TemplateRenderer, TemplateSource};
use crate::DEFAULT_PROJECT_NAME;

/// One named step in the fixed execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Prompting,
    Default,
    Writing,
    Conflicts,
    Install,
    End,
}

impl Phase {
    /// Execution order. [`Pipeline::run`] walks this list front to back.
    pub const ORDER: [Phase; 7] = [
        Phase::Initializing,
        Phase::Prompting,
        Phase::Default,
        Phase::Writing,
        Phase::Conflicts,
        Phase::Install,
        Phase::End,
    ];

    /// Lower-case phase name used in trace lines.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Initializing => "initializing",
            Phase::Prompting => "prompting",
            Phase::Default => "default",
            Phase::Writing => "writing",
            Phase::Conflicts => "conflicts",
            Phase::Install => "install",
            Phase::End => "end",
        }
    }
}

/// Mutable state accumulated while the pipeline runs.
///
/// Owned exclusively by the pipeline instance; returned to the caller once
/// the run completes.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Resolved project name. Set during the prompting phase; every later
    /// phase may rely on it being present.
    pub project: Option<String>,

    /// Whether the user asked for a user override config file. Recorded
    /// but not acted on; no override file is written yet.
    pub create_user_config: bool,

    /// Directory the rendered files land in.
    pub destination_root: PathBuf,
}

/// Drives the phases of one generator run.
pub struct Pipeline<P> {
    options: Options,
    state: RunState,
    prompts: P,
    renderer: TemplateRenderer,
    config: ConfigStore,
    context_root: PathBuf,
}

impl<P: PromptSource> Pipeline<P> {
    /// Build a pipeline rooted at the current working directory, with the
    /// template source resolved from the environment.
    pub fn new(options: Options, prompts: P) -> Result<Self, Error> {
        let root = std::env::current_dir()
            .map_err(|e| Error::fs("resolve", PathBuf::from("."), e))?;
        Ok(Self::with_root(options, prompts, root, TemplateSource::from_env()))
    }

    /// Build a pipeline rooted at an explicit directory with an explicit
    /// template source. Tests use this to avoid touching process state.
    pub fn with_root(
        options: Options,
        prompts: P,
        context_root: PathBuf,
        source: TemplateSource,
    ) -> Self {
        let pipeline = Self {
            state: RunState {
                project: None,
                create_user_config: false,
                destination_root: context_root.clone(),
            },
            prompts,
            renderer: TemplateRenderer::new(source),
            config: ConfigStore::scoped(&context_root),
            context_root,
            options,
        };

        if pipeline.options.verbose {
            println!("{}", style::verbose_priority("Generator constructor."));
        }
        pipeline.log_debug(&format!("Called with options of: {:?}", pipeline.options));

        pipeline
    }

    /// Run every phase in [`Phase::ORDER`] and hand back the final state.
    pub async fn run(mut self) -> Result<RunState, Error> {
        for phase in Phase::ORDER {
            self.dispatch(phase).await?;
        }
        Ok(self.state)
    }

    async fn dispatch(&mut self, phase: Phase) -> Result<(), Error> {
        self.log_priority(phase);

        match phase {
            // No project state to inspect yet
            Phase::Initializing => Ok(()),
            Phase::Prompting => self.prompting(),
            Phase::Default => {
                self.log_debug(&self.renderer.source().describe());
                Ok(())
            }
            Phase::Writing => self.writing().await,
            // Existing files are overwritten in place by the writer; there
            // is no interactive conflict resolution
            Phase::Conflicts => Ok(()),
            // Dependency installation belongs to the package manager
            Phase::Install => Ok(()),
            Phase::End => {
                println!("{}", style::info("All done!"));
                Ok(())
            }
        }
    }

    /// The prompting decision tree. Prompts resolve strictly one at a time.
    fn prompting(&mut self) -> Result<(), Error> {
        let make_new_directory = if self.options.project.is_some() {
            false
        } else {
            self.prompts.confirm("Are you making a new folder?", true)?
        };

        let project = if make_new_directory {
            let name = self
                .prompts
                .input("What is your project name?", DEFAULT_PROJECT_NAME)?;
            self.state.destination_root = self.context_root.join(&name);
            name
        } else if let Some(project) = &self.options.project {
            project.clone()
        } else {
            base_name(&self.context_root)
        };

        if self.options.verbose {
            println!(
                "{}",
                style::verbose(&format!(
                    "Project destination: {}",
                    self.state.destination_root.display()
                ))
            );
        }

        self.config.rescope(&self.state.destination_root);
        self.config.set("project", project.clone());
        self.state.project = Some(project);

        self.state.create_user_config = self
            .prompts
            .confirm("Do you want to make a user override file for config?", false)?;

        Ok(())
    }

    /// Render the project manifest into the destination, then flush the
    /// config store.
    async fn writing(&mut self) -> Result<(), Error> {
        let project = self.state.project.clone().ok_or(Error::UnresolvedProject)?;

        let rendered = self
            .renderer
            .render(templates::PACKAGE_JSON, &TemplateContext { project })?;

        let root = self.state.destination_root.clone();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| Error::fs("create directory", root.clone(), e))?;

        let target = root.join(templates::PACKAGE_JSON);
        if target.exists() {
            eprintln!(
                "{}",
                style::warn(&format!("Overwriting {}", target.display()))
            );
        }
        fs::write(&target, rendered)
            .await
            .map_err(|e| Error::fs("write", target, e))?;

        self.config.save()
    }

    fn log_priority(&self, phase: Phase) {
        if self.options.verbose {
            println!(
                "{}",
                style::verbose_priority(&format!("Running {} priority.", phase.name()))
            );
        }
    }

    fn log_debug(&self, message: &str) {
        if self.options.debug {
            println!("{}", style::debug(message));
        }
    }
}

/// Base name of a directory, used as the project name when scaffolding in
/// place.
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
