use crate::errors::GenomeError;
use serde::{Deserialize, Serialize};

/// One named position in a species genome, with the chance that a freshly
/// generated allele at this position is dominant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locus {
    /// Locus (trait) name
    pub name: String,
    /// Probability in [0.0, 1.0] that a sampled allele is dominant
    pub dominant_chance: f64,
}

/// The ordered genome definition of a species.
///
/// Every individual of a species carries one gene per locus, in this order.
/// The order is the positional contract used when two individuals mate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    loci: Vec<Locus>,
}

impl Genome {
    /// Create a genome where every locus has dominant-allele chance 0.5.
    ///
    /// # Errors
    /// Returns an error if a locus name appears twice.
    pub fn uniform<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self, GenomeError> {
        let loci = names
            .into_iter()
            .map(|name| Locus {
                name: name.into(),
                dominant_chance: 0.5,
            })
            .collect();
        Self::from_loci(loci)
    }

    /// Create a genome from locus names and matching dominant-allele chances.
    ///
    /// # Errors
    /// Returns an error if the lists differ in length, if a chance is outside
    /// [0.0, 1.0], or if a locus name appears twice.
    pub fn with_chances<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        chances: &[f64],
    ) -> Result<Self, GenomeError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != chances.len() {
            return Err(GenomeError::LengthMismatch {
                loci: names.len(),
                chances: chances.len(),
            });
        }
        let loci = names
            .into_iter()
            .zip(chances.iter().copied())
            .map(|(name, dominant_chance)| Locus {
                name,
                dominant_chance,
            })
            .collect();
        Self::from_loci(loci)
    }

    /// Create a genome from explicit loci.
    ///
    /// # Errors
    /// Returns an error if a chance is outside [0.0, 1.0] or a name repeats.
    pub fn from_loci(loci: Vec<Locus>) -> Result<Self, GenomeError> {
        for (i, locus) in loci.iter().enumerate() {
            if !(0.0..=1.0).contains(&locus.dominant_chance) {
                return Err(GenomeError::InvalidChance {
                    locus: locus.name.clone(),
                    chance: locus.dominant_chance,
                });
            }
            if loci[..i].iter().any(|other| other.name == locus.name) {
                return Err(GenomeError::DuplicateLocus(locus.name.clone()));
            }
        }
        Ok(Self { loci })
    }

    /// Number of loci in the genome.
    pub fn len(&self) -> usize {
        self.loci.len()
    }

    /// Check if the genome has no loci.
    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    /// The ordered loci.
    pub fn loci(&self) -> &[Locus] {
        &self.loci
    }

    /// Iterate over the locus names in genome order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.loci.iter().map(|locus| locus.name.as_str())
    }
}
