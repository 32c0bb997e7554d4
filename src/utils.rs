use std::collections::{HashMap, HashSet};
use std::hash::Hash;

pub use fnv::{FnvBuildHasher, FnvHashMap, FnvHashSet};

use crate::cells::Coordinate;

/// Construct a hash map with the specified capacity. Fnv is much faster than the default hasher
/// on short keys such as our coordinates, and nothing here is keyed by untrusted input.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, FnvBuildHasher::default())
}

pub fn coordinate_set<I>(coords: I) -> FnvHashSet<Coordinate>
    where I: IntoIterator<Item = Coordinate>
{
    let coords = coords.into_iter();
    let mut set = HashSet::with_capacity_and_hasher(coords.size_hint().0, FnvBuildHasher::default());
    set.extend(coords);
    set
}
