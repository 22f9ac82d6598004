//! Filter on prior experience.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use dataset::CandidateRecord;

/// Keeps records whose prior experience matches `criteria.experience`.
pub struct ExperienceFilter;

impl Filter for ExperienceFilter {
    fn name(&self) -> &str {
        "ExperienceFilter"
    }

    fn apply<'a>(
        &self,
        records: Vec<&'a CandidateRecord>,
        criteria: &FilterCriteria,
    ) -> Vec<&'a CandidateRecord> {
        records
            .into_iter()
            .filter(|record| criteria.experience.accepts(record.prior_experience))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{ExperienceChoice, GenderChoice};
    use crate::filters::test_support::record_with_experience;
    use dataset::Experience;

    #[test]
    fn test_experience_filter() {
        let records = vec![
            record_with_experience("IT", "Dev", Experience::Yes),
            record_with_experience("IT", "Dev", Experience::No),
            record_with_experience("HR", "Recruiter", Experience::Yes),
        ];
        let refs: Vec<&CandidateRecord> = records.iter().collect();
        let mut criteria = FilterCriteria {
            gender: GenderChoice::Any,
            min_age: 0,
            max_salary: 0.0,
            experience: ExperienceChoice::Yes,
        };

        let experienced = ExperienceFilter.apply(refs.clone(), &criteria);
        assert_eq!(experienced.len(), 2);
        assert_eq!(experienced[1].role, "Recruiter");

        criteria.experience = ExperienceChoice::No;
        let inexperienced = ExperienceFilter.apply(refs.clone(), &criteria);
        assert_eq!(inexperienced.len(), 1);
        assert_eq!(inexperienced[0].prior_experience, Experience::No);

        criteria.experience = ExperienceChoice::Any;
        assert_eq!(ExperienceFilter.apply(refs, &criteria).len(), 3);
    }
}
