// Reference model for SortedMap, an unordered hash map that sorts on
// demand. Slow, but obviously correct.
struct RefMap {
    entries: HashMap<i64, i64>,
}

impl RefMap {
    fn new() -> RefMap {
        RefMap {
            entries: HashMap::new(),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, key: i64) -> Option<i64> {
        self.entries.get(&key).cloned()
    }

    fn set(&mut self, key: i64, value: i64) -> Option<i64> {
        self.entries.insert(key, value)
    }

    fn delete(&mut self, key: i64) -> Option<i64> {
        self.entries.remove(&key)
    }

    fn sorted(&self) -> Vec<(i64, i64)> {
        let mut items: Vec<(i64, i64)> = self.entries.iter().map(|(k, v)| (*k, *v)).collect();
        items.sort();
        items
    }

    fn floor(&self, key: i64) -> Option<i64> {
        self.entries.keys().filter(|k| **k <= key).max().cloned()
    }

    fn ceiling(&self, key: i64) -> Option<i64> {
        self.entries.keys().filter(|k| **k >= key).min().cloned()
    }

    fn range(&self, low: Bound<i64>, high: Bound<i64>) -> Vec<(i64, i64)> {
        self.sorted()
            .into_iter()
            .filter(|(k, _)| match low {
                Bound::Included(low) => *k >= low,
                Bound::Excluded(low) => *k > low,
                Bound::Unbounded => true,
            })
            .filter(|(k, _)| match high {
                Bound::Included(high) => *k <= high,
                Bound::Excluded(high) => *k < high,
                Bound::Unbounded => true,
            })
            .collect()
    }

    fn reverse(&self, low: Bound<i64>, high: Bound<i64>) -> Vec<(i64, i64)> {
        let mut items = self.range(low, high);
        items.reverse();
        items
    }
}

fn random_low_high(rng: &mut SmallRng, size: u64) -> (Bound<i64>, Bound<i64>) {
    let low = (rng.gen::<u64>() % size) as i64;
    let high = (rng.gen::<u64>() % size) as i64;
    let low = match rng.gen::<u8>() % 3 {
        0 => Bound::Included(low),
        1 => Bound::Excluded(low),
        2 => Bound::Unbounded,
        _ => unreachable!(),
    };
    let high = match rng.gen::<u8>() % 3 {
        0 => Bound::Included(high),
        1 => Bound::Excluded(high),
        2 => Bound::Unbounded,
        _ => unreachable!(),
    };
    (low, high)
}

fn assert_equivalent(map: &SortedMap<i64, i64>, refm: &RefMap) {
    assert_eq!(map.len(), refm.len());
    let items: Vec<(i64, i64)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(items, refm.sorted());
}
