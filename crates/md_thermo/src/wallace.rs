use md_sequence::Base;

use crate::Melting;
use crate::ModelError;
use crate::MeltingModel;
use crate::check_inputs;

/// Wallace et al. (1979): 2 °C per A·T and 4 °C per G·C pair. Only sensible
/// for short oligos; concentrations are validated but do not enter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wallace;

impl MeltingModel for Wallace {
    fn name(&self) -> &str {
        "wallace"
    }

    fn melting(&self,
        sequence: &[Base],
        salt_mol: f64,
        duplex_mol: f64
    ) -> Result<Melting, ModelError> {
        check_inputs(sequence, salt_mol, duplex_mol)?;
        let gc = sequence.iter().filter(|b| b.is_gc()).count();
        let at = sequence.len() - gc;
        Ok(Melting {
            tm: (2 * at + 4 * gc) as f64,
            delta_h: f64::NAN,
            delta_s: f64::NAN,
        })
    }
}
