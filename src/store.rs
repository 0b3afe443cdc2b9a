/// Common surface of the two backing stores a map composes.
///
/// [`HashMap`] owns one [`HashTable`] and one [`OverflowList`] and consults
/// them in that order for every lookup, insertion, and removal. Both expose
/// the same index-based operations through this trait; only the placement
/// guarantees differ. Entries are addressed by index into the backing
/// storage, and an index stays valid until the next structural mutation of
/// that store.
///
/// [`HashMap`]: crate::HashMap
/// [`HashTable`]: crate::HashTable
/// [`OverflowList`]: crate::OverflowList
pub trait Store<K, V> {
    /// Returns the index of the entry for `key`, if the store holds one.
    ///
    /// `hash` must be the full hash of `key`; stores compare it before
    /// falling back to key equality.
    fn locate(&self, hash: u64, key: &K) -> Option<usize>;

    /// Places an entry and returns the index it landed at.
    ///
    /// `Err` hands the pair back when the store cannot accept it at its
    /// current capacity; the caller decides where the entry goes instead.
    /// Callers are responsible for key uniqueness — duplicates are not
    /// detected here.
    fn insert(&mut self, hash: u64, key: K, value: V) -> Result<usize, (K, V)>;

    /// Removes and returns the entry for `key`, if the store holds one.
    fn remove(&mut self, hash: u64, key: &K) -> Option<(K, V)>;
}
