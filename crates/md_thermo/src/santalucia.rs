//! Two-state melting of perfectly matched DNA duplexes.
//!
//! Stacking, initiation, terminal AT and symmetry parameters are the unified
//! set from "The Thermodynamics of DNA Structural Motifs" (SantaLucia and
//! Hicks, 2004). Salt is accounted for by the entropic correction of
//! SantaLucia (1998), PNAS 95: 1460-1465.

use log::trace;
use md_sequence::Base;
use md_sequence::BCOUNT;
use md_sequence::is_self_complementary;

use crate::K0;
use crate::R;
use crate::Melting;
use crate::ModelError;
use crate::MeltingModel;
use crate::check_inputs;
use crate::check_finite;

/// (dH in kcal/mol, dS in cal/(K mol))
pub type Enthalpy = (f64, f64);

/// Stacking parameters indexed by the two consecutive bases of the top
/// strand. A stack and its reverse complement share one entry.
const STACKS: [[Enthalpy; BCOUNT]; BCOUNT] = {
    use Base::*;
    let mut table = [[(0.0, 0.0); BCOUNT]; BCOUNT];
    table[A as usize][A as usize] = (-7.6, -21.3);
    table[T as usize][T as usize] = (-7.6, -21.3);
    table[A as usize][T as usize] = (-7.2, -20.4);
    table[T as usize][A as usize] = (-7.2, -21.3);
    table[C as usize][A as usize] = (-8.5, -22.7);
    table[T as usize][G as usize] = (-8.5, -22.7);
    table[G as usize][T as usize] = (-8.4, -22.4);
    table[A as usize][C as usize] = (-8.4, -22.4);
    table[C as usize][T as usize] = (-7.8, -21.0);
    table[A as usize][G as usize] = (-7.8, -21.0);
    table[G as usize][A as usize] = (-8.2, -22.2);
    table[T as usize][C as usize] = (-8.2, -22.2);
    table[C as usize][G as usize] = (-10.6, -27.2);
    table[G as usize][C as usize] = (-9.8, -24.4);
    table[G as usize][G as usize] = (-8.0, -19.9);
    table[C as usize][C as usize] = (-8.0, -19.9);
    table
};

#[derive(Debug, Clone, PartialEq)]
pub struct SantaLucia {
    pub initiation: Enthalpy,
    pub terminal_at: Enthalpy,
    pub symmetry: Enthalpy,
    /// Per-phosphate entropy salt coefficient.
    pub salt_coefficient: f64,
    stacks: [[Enthalpy; BCOUNT]; BCOUNT],
}

impl Default for SantaLucia {
    fn default() -> Self {
        Self {
            initiation: (0.2, -5.7),
            terminal_at: (2.2, 6.9),
            symmetry: (0.0, -1.4),
            salt_coefficient: 0.368,
            stacks: STACKS,
        }
    }
}

impl SantaLucia {
    pub fn stack(&self, b1: Base, b2: Base) -> Enthalpy {
        self.stacks[b1 as usize][b2 as usize]
    }

    /// Sum of all duplex formation terms at 1 M Na+.
    pub fn duplex_enthalpy(&self, sequence: &[Base]) -> Enthalpy {
        let (mut dh, mut ds) = self.initiation;
        for w in sequence.windows(2) {
            let (h, s) = self.stack(w[0], w[1]);
            dh += h;
            ds += s;
        }
        for end in [sequence.first(), sequence.last()].into_iter().flatten() {
            if matches!(end, Base::A | Base::T) {
                dh += self.terminal_at.0;
                ds += self.terminal_at.1;
            }
        }
        if is_self_complementary(sequence) {
            dh += self.symmetry.0;
            ds += self.symmetry.1;
        }
        (dh, ds)
    }

    pub fn salt_correction(&self, length: usize, salt_mol: f64) -> f64 {
        self.salt_coefficient * length.saturating_sub(1) as f64 * salt_mol.ln()
    }
}

impl MeltingModel for SantaLucia {
    fn name(&self) -> &str {
        "santalucia"
    }

    fn melting(&self,
        sequence: &[Base],
        salt_mol: f64,
        duplex_mol: f64
    ) -> Result<Melting, ModelError> {
        check_inputs(sequence, salt_mol, duplex_mol)?;

        let (delta_h, ds) = self.duplex_enthalpy(sequence);
        let delta_s = ds + self.salt_correction(sequence.len(), salt_mol);

        // Self-complementary strands form duplexes with themselves.
        let x = if is_self_complementary(sequence) { 1.0 } else { 4.0 };
        let tm = 1000.0 * delta_h / (delta_s + R * (duplex_mol / x).ln()) - K0;
        trace!("dH = {delta_h:.2}, dS = {delta_s:.2}, Tm = {tm:.2}");

        check_finite(Melting { tm, delta_h, delta_s })
    }
}
