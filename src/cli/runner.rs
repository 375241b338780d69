use crate::{
    cli::Args,
    config::{Settings, SettingsV1},
    constants::ACTIVATION_REMINDER,
    error::Result,
    params::ParameterSet,
    template::{
        apply,
        processor::{GenerationPlan, VariantGenerator},
    },
};

/// Main CLI runner that orchestrates one generation run
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<GenerationPlan> {
        // Validate everything before the template is read, so a bad value
        // leaves the template and any existing backup untouched.
        let params = self.parse_parameters()?;
        let settings = self.load_settings()?;

        let generator =
            VariantGenerator::new(&settings).keep_pristine(self.args.keep_pristine);

        log::info!("Generating '{}' for {params}", self.args.config.display());
        let plan = generator.plan(&self.args.config, &params)?;
        apply(&plan, self.args.dry_run)?;

        if self.args.dry_run {
            print!("{}", plan.output());
        } else {
            println!("Backup written to {}.", plan.backup_path.display());
            if let Some(pristine) = &plan.pristine_path {
                println!("Pristine copy kept at {}.", pristine.display());
            }
            println!("{ACTIVATION_REMINDER}");
        }
        Ok(plan)
    }

    fn parse_parameters(&self) -> Result<ParameterSet> {
        ParameterSet::parse(
            Some(self.args.arch.as_str()),
            self.args.accelerator.as_deref(),
            self.args.board.as_deref(),
        )
    }

    fn load_settings(&self) -> Result<SettingsV1> {
        Settings::resolve(self.args.settings.as_deref(), &self.args.config)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<GenerationPlan> {
    let runner = Runner::new(args);
    runner.run()
}
