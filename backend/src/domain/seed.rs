//! Seed data for development directories.
//!
//! A [`SeedPlan`] is generated in memory and handed to an
//! [`crate::domain::ports::AdvocateSeedRepository`], which replaces the
//! store's contents with it.

use rand::Rng;
use rand::seq::index::sample;

use super::NewAdvocate;
use super::ports::{AdvocateSeedRepositoryError, SeedSummary};

/// Specialty catalogue offered by the directory.
pub const SPECIALTY_NAMES: [&str; 26] = [
    "Attention and Hyperactivity (ADHD)",
    "Bipolar",
    "Chronic pain",
    "Coaching (leadership, career, academic and wellness)",
    "Diabetic Diet and nutrition",
    "Domestic abuse",
    "Eating disorders",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Learning disorders",
    "LGBTQ",
    "Life coaching",
    "Medication/Prescribing",
    "Men's issues",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Obsessive-compulsive disorders",
    "Pediatrics",
    "Personal growth",
    "Personality disorders",
    "Relationship Issues (family, friends, couple, etc)",
    "Schizophrenia and psychotic disorders",
    "Sleep issues",
    "Substance use/abuse",
    "Suicide History/Attempts",
    "Trauma & PTSD",
    "Weight loss & nutrition",
    "Women's issues (post-partum, infertility, family planning)",
];

// (first name, last name, city, degree, years of experience, phone number)
type RosterEntry = (&'static str, &'static str, &'static str, &'static str, i32, i64);

const ROSTER: [RosterEntry; 15] = [
    ("John", "Doe", "New York", "MD", 10, 5_551_234_567),
    ("Jane", "Smith", "Los Angeles", "PhD", 8, 5_559_876_543),
    ("Alice", "Johnson", "Chicago", "MSW", 5, 5_554_567_890),
    ("Michael", "Brown", "Houston", "MD", 12, 5_556_543_210),
    ("Emily", "Davis", "Phoenix", "PhD", 7, 5_553_216_540),
    ("Chris", "Martinez", "Philadelphia", "MSW", 9, 5_557_890_123),
    ("Jessica", "Taylor", "San Antonio", "MD", 11, 5_554_561_234),
    ("David", "Harris", "San Diego", "PhD", 6, 5_557_896_543),
    ("Laura", "Clark", "Dallas", "MSW", 4, 5_550_123_456),
    ("Daniel", "Lewis", "San Jose", "MD", 13, 5_553_217_654),
    ("Sarah", "Lee", "Austin", "PhD", 10, 5_551_238_765),
    ("James", "King", "Jacksonville", "MSW", 5, 5_556_784_321),
    ("Megan", "Green", "San Francisco", "MD", 14, 5_559_872_345),
    ("Joshua", "Walker", "Columbus", "PhD", 9, 5_556_547_890),
    ("Amanda", "Hall", "Fort Worth", "MSW", 3, 5_555_432_109),
];

const MIN_SPECIALTIES_PER_ADVOCATE: usize = 1;
const MAX_SPECIALTIES_PER_ADVOCATE: usize = 3;

/// An advocate to insert together with the specialties assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAdvocate {
    pub advocate: NewAdvocate,
    /// Distinct indexes into [`SeedPlan::specialties`].
    pub specialty_indexes: Vec<usize>,
}

/// Complete replacement contents for the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    pub specialties: Vec<String>,
    pub advocates: Vec<SeedAdvocate>,
}

impl SeedPlan {
    /// Build the standard plan, giving every advocate between one and three
    /// distinct specialties chosen by `rng`.
    ///
    /// # Examples
    /// ```
    /// use advocate_directory::domain::SeedPlan;
    /// use rand::SeedableRng;
    /// use rand::rngs::SmallRng;
    ///
    /// let plan = SeedPlan::generate(&mut SmallRng::seed_from_u64(7));
    /// assert_eq!(plan.specialties.len(), 26);
    /// assert!(plan.advocates.iter().all(|a| (1..=3).contains(&a.specialty_indexes.len())));
    /// ```
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let specialties: Vec<String> = SPECIALTY_NAMES.iter().map(|&name| name.to_owned()).collect();
        let advocates = ROSTER
            .iter()
            .map(|&(first_name, last_name, city, degree, years, phone)| {
                let amount =
                    rng.gen_range(MIN_SPECIALTIES_PER_ADVOCATE..=MAX_SPECIALTIES_PER_ADVOCATE);
                let mut specialty_indexes = sample(rng, specialties.len(), amount).into_vec();
                specialty_indexes.sort_unstable();
                SeedAdvocate {
                    advocate: NewAdvocate {
                        first_name: first_name.to_owned(),
                        last_name: last_name.to_owned(),
                        city: city.to_owned(),
                        degree: degree.to_owned(),
                        years_of_experience: years,
                        phone_number: phone,
                    },
                    specialty_indexes,
                }
            })
            .collect();
        Self {
            specialties,
            advocates,
        }
    }

    /// Row counts the plan will produce once applied.
    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            advocates: self.advocates.len(),
            specialties: self.specialties.len(),
            relationships: self
                .advocates
                .iter()
                .map(|advocate| advocate.specialty_indexes.len())
                .sum(),
        }
    }

    /// Reject plans whose advocates reference specialties outside the plan.
    ///
    /// # Errors
    ///
    /// Returns [`AdvocateSeedRepositoryError::InvalidPlan`] naming the first
    /// advocate with a dangling specialty index.
    pub fn validate(&self) -> Result<(), AdvocateSeedRepositoryError> {
        let available = self.specialties.len();
        for seed in &self.advocates {
            if let Some(index) = seed
                .specialty_indexes
                .iter()
                .find(|&&index| index >= available)
            {
                return Err(AdvocateSeedRepositoryError::invalid_plan(format!(
                    "{} {} references specialty #{index} of {available}",
                    seed.advocate.first_name, seed.advocate.last_name
                )));
            }
        }
        Ok(())
    }

    /// Specialty names assigned to `advocate`, skipping dangling indexes.
    pub fn specialty_names<'a>(
        &'a self,
        advocate: &'a SeedAdvocate,
    ) -> impl Iterator<Item = &'a str> + 'a {
        advocate
            .specialty_indexes
            .iter()
            .filter_map(|&index| self.specialties.get(index).map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[rstest]
    #[case(1)]
    #[case(42)]
    #[case(9_001)]
    fn every_advocate_gets_one_to_three_distinct_specialties(#[case] seed: u64) {
        let plan = SeedPlan::generate(&mut SmallRng::seed_from_u64(seed));
        for advocate in &plan.advocates {
            let distinct: BTreeSet<_> = advocate.specialty_indexes.iter().collect();
            assert_eq!(distinct.len(), advocate.specialty_indexes.len());
            assert!((1..=3).contains(&distinct.len()));
            assert!(distinct.iter().all(|&&index| index < plan.specialties.len()));
        }
    }

    #[rstest]
    fn summary_counts_every_row() {
        let plan = SeedPlan::generate(&mut SmallRng::seed_from_u64(3));
        let summary = plan.summary();
        assert_eq!(summary.advocates, ROSTER.len());
        assert_eq!(summary.specialties, SPECIALTY_NAMES.len());
        let expected: usize = plan
            .advocates
            .iter()
            .map(|advocate| plan.specialty_names(advocate).count())
            .sum();
        assert_eq!(summary.relationships, expected);
    }

    #[rstest]
    fn generated_plans_validate() {
        let plan = SeedPlan::generate(&mut SmallRng::seed_from_u64(8));
        assert_eq!(plan.validate(), Ok(()));
    }

    #[rstest]
    fn dangling_specialty_indexes_are_rejected() {
        let mut plan = SeedPlan::generate(&mut SmallRng::seed_from_u64(8));
        let first = plan.advocates.first_mut().expect("roster is not empty");
        first.specialty_indexes.push(SPECIALTY_NAMES.len() + 3);
        let name = format!("{} {}", first.advocate.first_name, first.advocate.last_name);

        let err = plan.validate().expect_err("dangling index");
        assert!(matches!(err, AdvocateSeedRepositoryError::InvalidPlan { .. }));
        assert!(err.to_string().contains(&format!("{name} references specialty #29 of 26")));
    }

    #[rstest]
    fn specialty_catalogue_has_unique_names() {
        let unique: BTreeSet<_> = SPECIALTY_NAMES.iter().collect();
        assert_eq!(unique.len(), SPECIALTY_NAMES.len());
    }
}
