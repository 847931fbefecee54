use crate::base::{Allele, Genotype};
use crate::errors::IncompatibleTrait;
use core::fmt;
use rand::Rng;
use std::sync::Arc;

/// A single diploid locus: a named genotype with its expressed value.
///
/// The `name` is stored in an `Arc<str>` so cloning genes is cheap for the
/// identifier field. The phenotype is fixed when the gene is created (the OR
/// of the two alleles: dominant expresses if present) and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Gene {
    /// Locus name, shared contract across all individuals of a species
    name: Arc<str>,
    /// The two alleles carried at this locus
    genotype: Genotype,
    /// Expressed value, derived once at construction
    expressed: bool,
}

impl Gene {
    /// Create a new gene. The phenotype is derived here and stays fixed for
    /// the gene's lifetime.
    pub fn new(name: impl Into<Arc<str>>, genotype: Genotype) -> Self {
        Self {
            name: name.into(),
            genotype,
            expressed: genotype.expresses_dominant(),
        }
    }

    /// Sample a fresh gene where each of the two alleles is independently
    /// dominant with probability `dominant_chance`.
    pub fn sample<R: Rng + ?Sized>(
        name: impl Into<Arc<str>>,
        dominant_chance: f64,
        rng: &mut R,
    ) -> Self {
        let first = Allele::from_dominant(rng.random::<f64>() < dominant_chance);
        let second = Allele::from_dominant(rng.random::<f64>() < dominant_chance);
        Self::new(name, Genotype::new(first, second))
    }

    /// Return the locus name as a `&str`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return a cheap clone of the shared locus name.
    #[inline]
    pub fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// The allele pair carried at this locus.
    #[inline]
    pub fn genotype(&self) -> Genotype {
        self.genotype
    }

    /// Return true if the dominant phenotype is expressed.
    #[inline]
    pub fn is_expressed(&self) -> bool {
        self.expressed
    }

    /// Combine two genes through meiotic shuffling.
    ///
    /// One allele is chosen uniformly at random from each parent's genotype,
    /// independently per offspring, simulating independent assortment at
    /// meiosis. The result's phenotype is the OR of the two chosen alleles.
    /// Neither input is modified.
    ///
    /// # Errors
    /// Returns [`IncompatibleTrait`] if the genes belong to different loci.
    pub fn combine<R: Rng + ?Sized>(
        &self,
        other: &Gene,
        rng: &mut R,
    ) -> Result<Gene, IncompatibleTrait> {
        if self.name != other.name {
            return Err(IncompatibleTrait {
                left: Arc::clone(&self.name),
                right: Arc::clone(&other.name),
            });
        }

        let from_self = if rng.random::<f64>() < 0.5 {
            self.genotype.first()
        } else {
            self.genotype.second()
        };
        let from_other = if rng.random::<f64>() < 0.5 {
            other.genotype.first()
        } else {
            other.genotype.second()
        };

        Ok(Gene::new(
            Arc::clone(&self.name),
            Genotype::new(from_self, from_other),
        ))
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.name, self.genotype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const D: Allele = Allele::Dominant;
    const R: Allele = Allele::Recessive;

    #[test]
    fn test_gene_new() {
        let gene = Gene::new("Long Tongue", Genotype::new(D, R));
        assert_eq!(gene.name(), "Long Tongue");
        assert_eq!(gene.genotype(), Genotype::new(D, R));
        assert!(gene.is_expressed());
    }

    #[test]
    fn test_gene_phenotype_is_or_of_alleles() {
        assert!(Gene::new("t", Genotype::new(D, D)).is_expressed());
        assert!(Gene::new("t", Genotype::new(D, R)).is_expressed());
        assert!(Gene::new("t", Genotype::new(R, D)).is_expressed());
        assert!(!Gene::new("t", Genotype::new(R, R)).is_expressed());
    }

    #[test]
    fn test_gene_combine_name_mismatch() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Gene::new("Green Eyes", Genotype::new(D, D));
        let b = Gene::new("Long Tongue", Genotype::new(D, D));

        let err = a.combine(&b, &mut rng).unwrap_err();
        assert_eq!(&*err.left, "Green Eyes");
        assert_eq!(&*err.right, "Long Tongue");
    }

    #[test]
    fn test_gene_combine_homozygous_parents() {
        // DD x dd always yields Dd regardless of the draws
        let mut rng = StdRng::seed_from_u64(42);
        let a = Gene::new("t", Genotype::new(D, D));
        let b = Gene::new("t", Genotype::new(R, R));

        for _ in 0..50 {
            let child = a.combine(&b, &mut rng).unwrap();
            assert_eq!(child.genotype(), Genotype::new(D, R));
            assert!(child.is_expressed());
        }
    }

    #[test]
    fn test_gene_combine_alleles_come_from_parents() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Gene::new("t", Genotype::new(D, R));
        let b = Gene::new("t", Genotype::new(R, R));

        for _ in 0..100 {
            let child = a.combine(&b, &mut rng).unwrap();
            // First allele drawn from a's {D, d}, second from b's {d}
            assert_eq!(child.genotype().second(), R);
            assert_eq!(
                child.is_expressed(),
                child.genotype().expresses_dominant()
            );
        }
    }

    #[test]
    fn test_gene_combine_does_not_modify_parents() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Gene::new("t", Genotype::new(D, R));
        let b = Gene::new("t", Genotype::new(R, D));
        let (a_before, b_before) = (a.clone(), b.clone());

        a.combine(&b, &mut rng).unwrap();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_gene_sample_extreme_chances() {
        let mut rng = StdRng::seed_from_u64(3);

        let certain = Gene::sample("t", 1.0, &mut rng);
        assert_eq!(certain.genotype(), Genotype::new(D, D));

        let never = Gene::sample("t", 0.0, &mut rng);
        assert_eq!(never.genotype(), Genotype::new(R, R));
    }

    #[test]
    fn test_gene_display() {
        let gene = Gene::new("Crazy Color", Genotype::new(D, R));
        assert_eq!(gene.to_string(), "<Crazy Color Dd>");
    }
}
