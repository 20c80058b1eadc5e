//! Process-local advocate store.
//!
//! Used when no database is configured and by integration tests. Predicates
//! are evaluated with the same semantics the SQL adapter uses, so searches
//! behave identically apart from persistence.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use pagination::PageRequest;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::domain::ports::{
    AdvocateRepository, AdvocateRepositoryError, AdvocateSeedRepository,
    AdvocateSeedRepositoryError, SeedSummary, SpecialtyRepository, SpecialtyRepositoryError,
};
use crate::domain::{
    AdvocateFilter, AdvocateId, AdvocateRecord, AdvocateSpecialtyRow, ContainsPattern,
    NewAdvocate, SeedPlan, SpecialtyMatch,
};

#[derive(Debug, Default)]
struct StoreState {
    advocates: BTreeMap<AdvocateId, AdvocateRecord>,
    specialties: BTreeMap<i32, String>,
    links: BTreeSet<(AdvocateId, i32)>,
    next_advocate_id: i32,
    next_specialty_id: i32,
}

impl StoreState {
    fn clear(&mut self) {
        self.links.clear();
        self.advocates.clear();
        self.specialties.clear();
    }

    fn specialty_names_for(&self, id: AdvocateId) -> Vec<String> {
        let mut names: Vec<String> = self
            .links
            .range((id, i32::MIN)..=(id, i32::MAX))
            .filter_map(|(_, specialty_id)| self.specialties.get(specialty_id).cloned())
            .collect();
        names.sort();
        names
    }

    fn specialty_id(&mut self, name: &str) -> i32 {
        if let Some((&id, _)) = self.specialties.iter().find(|(_, existing)| *existing == name) {
            return id;
        }
        self.next_specialty_id += 1;
        let id = self.next_specialty_id;
        self.specialties.insert(id, name.to_owned());
        id
    }

    fn insert<'a>(
        &mut self,
        now: DateTime<Utc>,
        advocate: NewAdvocate,
        specialties: impl IntoIterator<Item = &'a str>,
    ) -> AdvocateId {
        self.next_advocate_id += 1;
        let id = AdvocateId::new(self.next_advocate_id);
        self.advocates.insert(
            id,
            AdvocateRecord {
                id,
                first_name: advocate.first_name,
                last_name: advocate.last_name,
                city: advocate.city,
                degree: advocate.degree,
                years_of_experience: advocate.years_of_experience,
                phone_number: advocate.phone_number,
                created_at: Some(now),
                updated_at: Some(now),
            },
        );
        for name in specialties {
            let specialty_id = self.specialty_id(name);
            self.links.insert((id, specialty_id));
        }
        id
    }
}

/// In-memory implementation of the advocate, specialty and seed ports.
pub struct InMemoryAdvocateStore {
    state: Mutex<StoreState>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryAdvocateStore {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl InMemoryAdvocateStore {
    /// Empty store stamping rows with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            clock,
        }
    }

    /// Store pre-populated with the standard seed plan.
    ///
    /// `seed` makes the random specialty assignment reproducible.
    pub fn seeded(seed: u64) -> Self {
        let store = Self::default();
        let plan = SeedPlan::generate(&mut SmallRng::seed_from_u64(seed));
        store.apply(&plan);
        store
    }

    /// Insert one advocate with the named specialties, creating any
    /// specialty that does not exist yet.
    pub fn insert<S: AsRef<str>>(&self, advocate: NewAdvocate, specialties: &[S]) -> AdvocateId {
        let now = self.clock.utc();
        let names = specialties.iter().map(<S as AsRef<str>>::as_ref);
        self.lock().insert(now, advocate, names)
    }

    /// Replace every row with `plan` while holding the lock throughout, so
    /// readers see either the old directory or the new one.
    fn apply(&self, plan: &SeedPlan) -> SeedSummary {
        let now = self.clock.utc();
        let mut state = self.lock();
        state.clear();
        for name in &plan.specialties {
            state.specialty_id(name);
        }
        let mut relationships = 0;
        for seed in &plan.advocates {
            let names: Vec<&str> = plan.specialty_names(seed).collect();
            relationships += names.len();
            state.insert(now, seed.advocate.clone(), names);
        }
        SeedSummary {
            advocates: plan.advocates.len(),
            specialties: state.specialties.len(),
            relationships,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl AdvocateRepository for InMemoryAdvocateStore {
    async fn specialty_matches(
        &self,
        patterns: &[ContainsPattern],
    ) -> Result<Vec<SpecialtyMatch>, AdvocateRepositoryError> {
        let state = self.lock();
        Ok(state
            .links
            .iter()
            .filter_map(|(advocate_id, specialty_id)| {
                let name = state.specialties.get(specialty_id)?;
                patterns
                    .iter()
                    .any(|pattern| pattern.matches(name))
                    .then(|| SpecialtyMatch::new(*advocate_id, name.clone()))
            })
            .collect())
    }

    async fn count_advocates(
        &self,
        filter: &AdvocateFilter,
    ) -> Result<u64, AdvocateRepositoryError> {
        let state = self.lock();
        let count = state
            .advocates
            .values()
            .filter(|record| filter.matches(record))
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn load_page(
        &self,
        filter: &AdvocateFilter,
        page: PageRequest,
    ) -> Result<Vec<AdvocateSpecialtyRow>, AdvocateRepositoryError> {
        let state = self.lock();
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let rows = state
            .advocates
            .values()
            .filter(|record| filter.matches(record))
            .skip(skip)
            .take(take)
            .flat_map(|record| {
                let names = state.specialty_names_for(record.id);
                if names.is_empty() {
                    return vec![AdvocateSpecialtyRow::without_specialty(record.clone())];
                }
                names
                    .into_iter()
                    .map(|name| AdvocateSpecialtyRow::with_specialty(record.clone(), name))
                    .collect()
            })
            .collect();
        Ok(rows)
    }
}

#[async_trait]
impl SpecialtyRepository for InMemoryAdvocateStore {
    async fn list_specialty_names(&self) -> Result<Vec<String>, SpecialtyRepositoryError> {
        let mut names: Vec<String> = self.lock().specialties.values().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl AdvocateSeedRepository for InMemoryAdvocateStore {
    async fn replace_all(
        &self,
        plan: &SeedPlan,
    ) -> Result<SeedSummary, AdvocateSeedRepositoryError> {
        plan.validate()?;
        Ok(self.apply(plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdvocatePredicate, SearchRequest, build_predicates};
    use crate::test_support::{MutableClock, new_advocate};
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryAdvocateStore {
        let store = InMemoryAdvocateStore::default();
        store.insert(new_advocate("Ana", "Austin", 10), &["Cardiology"]);
        store.insert(new_advocate("Ben", "Boston", 3), &["Cardiology", "Oncology"]);
        store.insert(new_advocate("Cy", "Chicago", 7), &[] as &[&str]);
        store
    }

    #[rstest]
    #[tokio::test]
    async fn specialty_matches_return_each_matching_link(store: InMemoryAdvocateStore) {
        let patterns = [ContainsPattern::new("cardio").expect("pattern")];
        let matches = store.specialty_matches(&patterns).await.expect("matches");
        let ids: Vec<i32> = matches.iter().map(|m| m.advocate_id.as_i32()).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[rstest]
    #[tokio::test]
    async fn pages_hold_whole_advocates_in_id_order(store: InMemoryAdvocateStore) {
        let filter = AdvocateFilter::default();
        let page = PageRequest::new(1, 2).expect("page");
        let rows = store.load_page(&filter, page).await.expect("rows");
        let summary: Vec<_> = rows
            .iter()
            .map(|row| (row.advocate.id.as_i32(), row.specialty.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, Some("Cardiology".to_owned())),
                (2, Some("Cardiology".to_owned())),
                (2, Some("Oncology".to_owned())),
            ]
        );

        let last = store
            .load_page(&filter, PageRequest::new(2, 2).expect("page"))
            .await
            .expect("rows");
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].specialty, None);
    }

    #[rstest]
    #[tokio::test]
    async fn counts_apply_the_filter(store: InMemoryAdvocateStore) {
        let request = SearchRequest::from_query_pairs([("experience", "5")]);
        let filter = build_predicates(&request.filters);
        assert_eq!(store.count_advocates(&filter).await, Ok(2));

        let ids = BTreeSet::from([AdvocateId::new(3)]);
        let filter = filter.and(AdvocatePredicate::IdIn(ids));
        assert_eq!(store.count_advocates(&filter).await, Ok(1));
    }

    #[rstest]
    #[tokio::test]
    async fn replace_all_discards_previous_contents(store: InMemoryAdvocateStore) {
        let plan = SeedPlan::generate(&mut SmallRng::seed_from_u64(11));
        let summary = store.replace_all(&plan).await.expect("seeded");

        assert_eq!(summary, plan.summary());
        let names = store.list_specialty_names().await.expect("names");
        assert_eq!(names.len(), plan.specialties.len());
        assert!(!names.contains(&"Cardiology".to_owned()));
        let total = store
            .count_advocates(&AdvocateFilter::default())
            .await
            .expect("count");
        assert_eq!(total, plan.advocates.len() as u64);
    }

    #[rstest]
    #[tokio::test]
    async fn inconsistent_plans_leave_the_store_untouched(store: InMemoryAdvocateStore) {
        let mut plan = SeedPlan::generate(&mut SmallRng::seed_from_u64(5));
        plan.advocates[0].specialty_indexes.push(999);

        let err = store.replace_all(&plan).await.expect_err("invalid plan");
        assert!(matches!(err, AdvocateSeedRepositoryError::InvalidPlan { .. }));
        assert_eq!(
            store.count_advocates(&AdvocateFilter::default()).await,
            Ok(3)
        );
    }

    #[rstest]
    fn rows_are_stamped_with_the_clock() {
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).single().expect("time");
        let store = InMemoryAdvocateStore::new(Arc::new(MutableClock::new(now)));
        let id = store.insert(new_advocate("Di", "Denver", 1), &["LGBTQ"]);
        let state = store.lock();
        let record = state.advocates.get(&id).expect("record");
        assert_eq!(record.created_at, Some(now));
    }

    #[rstest]
    fn readers_never_observe_a_half_seeded_directory() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let store = Arc::new(InMemoryAdvocateStore::seeded(1));
        let full = SeedPlan::generate(&mut SmallRng::seed_from_u64(1)).advocates.len() as u64;
        let done = Arc::new(AtomicBool::new(false));

        let reader = {
            let store = Arc::clone(&store);
            let done = Arc::clone(&done);
            std::thread::spawn(move || {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .build()
                    .expect("reader runtime");
                let mut seen = BTreeSet::new();
                loop {
                    let count = runtime
                        .block_on(store.count_advocates(&AdvocateFilter::default()))
                        .expect("count");
                    seen.insert(count);
                    if done.load(Ordering::Acquire) {
                        break;
                    }
                }
                seen
            })
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("writer runtime");
        for seed in 0..500 {
            let plan = SeedPlan::generate(&mut SmallRng::seed_from_u64(seed));
            runtime.block_on(store.replace_all(&plan)).expect("reseeded");
        }
        done.store(true, Ordering::Release);

        let seen = reader.join().expect("reader thread");
        assert_eq!(seen, BTreeSet::from([full]));
    }
}
