use clap::Args;
use clap::ValueEnum;
use log::debug;
use md_thermo::MeltingModel;
use md_thermo::SantaLucia;
use md_thermo::Wallace;

/// Melting models available on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelChoice {
    /// Unified nearest neighbor parameters (SantaLucia & Hicks, 2004).
    #[value(name = "santalucia")]
    SantaLucia,
    /// 2 °C per A/T, 4 °C per G/C.
    #[value(name = "wallace")]
    Wallace,
}

/// Melting model parameters.
#[derive(Debug, Args)]
pub struct MeltingModelArguments {
    /// Melting temperature model
    #[arg(short, long, value_enum, default_value_t = ModelChoice::SantaLucia)]
    pub model: ModelChoice,
}

impl MeltingModelArguments {
    pub fn build_model(&self) -> Box<dyn MeltingModel + Send + Sync> {
        debug!("Melting model: {:?}", self.model);
        match self.model {
            ModelChoice::SantaLucia => Box::new(SantaLucia::default()),
            ModelChoice::Wallace => Box::new(Wallace),
        }
    }
}
