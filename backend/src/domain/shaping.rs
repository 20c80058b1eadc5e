//! Folding joined advocate/specialty rows into advocates.

use std::collections::HashMap;

use super::{Advocate, AdvocateId, AdvocateSpecialtyRow};

/// Group rows by advocate id in order of first appearance, appending each
/// row's specialty name in row order and skipping rows without one.
///
/// # Examples
/// ```
/// use advocate_directory::domain::{AdvocateId, AdvocateRecord, AdvocateSpecialtyRow, shape_advocates};
///
/// let record = AdvocateRecord {
///     id: AdvocateId::new(1),
///     first_name: "Maria".into(),
///     last_name: "Lopez".into(),
///     city: "Austin".into(),
///     degree: "MD".into(),
///     years_of_experience: 10,
///     phone_number: 5_125_550_100,
///     created_at: None,
///     updated_at: None,
/// };
/// let rows = vec![
///     AdvocateSpecialtyRow::with_specialty(record.clone(), "Bipolar"),
///     AdvocateSpecialtyRow::with_specialty(record, "Pediatrics"),
/// ];
/// let advocates = shape_advocates(rows);
/// assert_eq!(advocates.len(), 1);
/// assert_eq!(advocates[0].specialties, ["Bipolar", "Pediatrics"]);
/// ```
pub fn shape_advocates(rows: impl IntoIterator<Item = AdvocateSpecialtyRow>) -> Vec<Advocate> {
    let mut advocates: Vec<Advocate> = Vec::new();
    let mut positions: HashMap<AdvocateId, usize> = HashMap::new();
    for AdvocateSpecialtyRow {
        advocate: record,
        specialty,
    } in rows
    {
        let index = match positions.get(&record.id) {
            Some(index) => *index,
            None => {
                let index = advocates.len();
                positions.insert(record.id, index);
                advocates.push(Advocate::from_record(record));
                index
            }
        };
        if let (Some(name), Some(advocate)) = (specialty, advocates.get_mut(index)) {
            advocate.specialties.push(name);
        }
    }
    advocates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdvocateRecord;
    use rstest::rstest;

    fn record(id: i32, first_name: &str) -> AdvocateRecord {
        AdvocateRecord {
            id: AdvocateId::new(id),
            first_name: first_name.to_owned(),
            last_name: "Test".to_owned(),
            city: "Austin".to_owned(),
            degree: "MD".to_owned(),
            years_of_experience: 1,
            phone_number: 5_550_000_000,
            created_at: None,
            updated_at: None,
        }
    }

    #[rstest]
    fn groups_rows_in_first_appearance_order() {
        let rows = vec![
            AdvocateSpecialtyRow::with_specialty(record(2, "B"), "Oncology"),
            AdvocateSpecialtyRow::with_specialty(record(1, "A"), "Cardiology"),
            AdvocateSpecialtyRow::with_specialty(record(2, "B"), "Cardiology"),
        ];
        let advocates = shape_advocates(rows);
        let summary: Vec<_> = advocates
            .iter()
            .map(|advocate| (advocate.id.as_i32(), advocate.specialties.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (2, vec!["Oncology".to_owned(), "Cardiology".to_owned()]),
                (1, vec!["Cardiology".to_owned()]),
            ]
        );
    }

    #[rstest]
    fn advocates_without_specialties_get_an_empty_list() {
        let advocates = shape_advocates(vec![AdvocateSpecialtyRow::without_specialty(record(
            3, "C",
        ))]);
        assert_eq!(advocates.len(), 1);
        assert!(advocates[0].specialties.is_empty());
    }

    #[rstest]
    fn empty_input_yields_no_advocates() {
        assert!(shape_advocates(Vec::new()).is_empty());
    }
}
