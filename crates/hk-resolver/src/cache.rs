//! Per-year memo of resolved holidays.

use crate::resolved::ResolvedHoliday;
use hk_core::errors::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Insert-if-absent memo keyed by year.
///
/// Resolution is deterministic for a given store, so an entry never needs
/// invalidating.  Two threads racing on the same year may both compute it;
/// the first insert wins and both observe the same slice afterwards.
#[derive(Debug, Default)]
pub struct YearCache {
    years: RwLock<HashMap<u16, Arc<[ResolvedHoliday]>>>,
}

impl YearCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached holidays of `year`, if present.
    pub fn get(&self, year: u16) -> Option<Arc<[ResolvedHoliday]>> {
        self.years
            .read()
            .expect("year cache lock poisoned")
            .get(&year)
            .cloned()
    }

    /// Return the cached holidays of `year`, computing and storing them with
    /// `resolve` on a miss.  Errors are returned and not cached.
    pub fn get_or_try_insert_with<F>(&self, year: u16, resolve: F) -> Result<Arc<[ResolvedHoliday]>>
    where
        F: FnOnce() -> Result<Vec<ResolvedHoliday>>,
    {
        if let Some(hit) = self.get(year) {
            return Ok(hit);
        }
        let computed: Arc<[ResolvedHoliday]> = resolve()?.into();
        let mut years = self.years.write().expect("year cache lock poisoned");
        Ok(years.entry(year).or_insert(computed).clone())
    }

    /// Number of cached years.
    pub fn len(&self) -> usize {
        self.years.read().expect("year cache lock poisoned").len()
    }

    /// Return `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hk_core::errors::Error;
    use hk_time::Date;

    #[test]
    fn first_insert_wins() {
        let cache = YearCache::new();
        let date = Date::from_ymd(2024, 1, 1).unwrap();
        let first = cache
            .get_or_try_insert_with(2024, || Ok(vec![ResolvedHoliday::new(date, "신정")]))
            .unwrap();
        let second = cache
            .get_or_try_insert_with(2024, || Ok(Vec::new()))
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = YearCache::new();
        let err = cache
            .get_or_try_insert_with(2024, || Err(Error::InvalidCalendarDate("x".into())))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCalendarDate(_)));
        assert!(cache.is_empty());
    }
}
