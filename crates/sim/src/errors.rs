use std::error;
use std::fmt;
use std::sync::Arc;

/// Error returned when combining two genes that belong to different loci.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompatibleTrait {
    /// Name of the locus on the left-hand parent
    pub left: Arc<str>,

    /// Name of the locus on the right-hand parent
    pub right: Arc<str>,
}

impl fmt::Display for IncompatibleTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot combine different traits: '{}' vs '{}'",
            self.left, self.right
        )
    }
}

impl error::Error for IncompatibleTrait {}

/// Error returned when mating two individuals of different species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompatibleSpecies {
    /// Species of the left-hand parent
    pub left: Arc<str>,

    /// Species of the right-hand parent
    pub right: Arc<str>,
}

impl fmt::Display for IncompatibleSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot mate different species: '{}' vs '{}'",
            self.left, self.right
        )
    }
}

impl error::Error for IncompatibleSpecies {}

/// Error returned when an aggregate query names a trait that some individual
/// does not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitNotFound {
    /// The requested trait name
    pub trait_name: String,
}

impl fmt::Display for TraitNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trait '{}' not found on an individual", self.trait_name)
    }
}

impl error::Error for TraitNotFound {}

/// Errors that can occur while mating two individuals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatingError {
    /// The parents belong to different species
    Species(IncompatibleSpecies),
    /// A positionally paired gene belongs to a different locus
    Trait(IncompatibleTrait),
}

impl fmt::Display for MatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Species(e) => write!(f, "{e}"),
            Self::Trait(e) => write!(f, "{e}"),
        }
    }
}

impl error::Error for MatingError {}

impl From<IncompatibleSpecies> for MatingError {
    fn from(e: IncompatibleSpecies) -> Self {
        Self::Species(e)
    }
}

impl From<IncompatibleTrait> for MatingError {
    fn from(e: IncompatibleTrait) -> Self {
        Self::Trait(e)
    }
}

/// Errors that can occur when constructing a species genome definition.
#[derive(Debug, Clone, PartialEq)]
pub enum GenomeError {
    /// The chance list length does not match the locus list length
    LengthMismatch { loci: usize, chances: usize },
    /// A dominant-allele chance is outside [0.0, 1.0]
    InvalidChance { locus: String, chance: f64 },
    /// The same locus name appears twice
    DuplicateLocus(String),
}

impl fmt::Display for GenomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { loci, chances } => {
                write!(
                    f,
                    "Genome has {loci} loci but {chances} dominant-allele chances"
                )
            }
            Self::InvalidChance { locus, chance } => {
                write!(
                    f,
                    "Invalid dominant-allele chance for '{locus}': {chance} (must be between 0.0 and 1.0)"
                )
            }
            Self::DuplicateLocus(name) => {
                write!(f, "Duplicate locus name in genome: '{name}'")
            }
        }
    }
}

impl error::Error for GenomeError {}

/// Errors that can occur when validating simulation parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Invalid probability value
    InvalidProbability(&'static str, f64),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProbability(name, val) => {
                write!(
                    f,
                    "Invalid probability for {name}: {val} (must be between 0.0 and 1.0)"
                )
            }
        }
    }
}

impl error::Error for ParameterError {}

/// Errors that can occur while building an environment.
#[derive(Debug)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    InvalidParameter(String),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(param) => {
                write!(f, "Missing required parameter: {param}")
            }
            Self::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {msg}")
            }
        }
    }
}

impl error::Error for BuilderError {}

impl From<GenomeError> for BuilderError {
    fn from(e: GenomeError) -> Self {
        Self::InvalidParameter(e.to_string())
    }
}

impl From<ParameterError> for BuilderError {
    fn from(e: ParameterError) -> Self {
        Self::InvalidParameter(e.to_string())
    }
}
