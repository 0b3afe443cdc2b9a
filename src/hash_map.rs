use core::fmt::Debug;
use core::fmt::Display;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::hash_table::HashTable;
use crate::hash_table::INITIAL_CAPACITY;
use crate::hash_table::MAX_LOAD_FACTOR;
use crate::hash_table::MIN_LOAD_FACTOR;
use crate::overflow::OverflowList;
use crate::store::Store;

/// Error returned by [`HashMap::at`] and [`HashMap::at_mut`] when the key is
/// absent from the map.
///
/// This is the only user-visible failure the map produces; every other
/// operation treats an absent key as a no-op or inserts a default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotFoundError;

impl Display for NotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("key was not found")
    }
}

impl core::error::Error for NotFoundError {}

/// Where an entry lives: the neighborhood table or the overflow list.
///
/// Positions are plain indices re-resolved from the map on every access, so
/// no reference into either store is held across structural operations.
#[derive(Clone, Copy)]
enum RawPos {
    Table(usize),
    Overflow(usize),
}

/// A hash map using bounded-neighborhood hopscotch hashing.
///
/// `HashMap<K, V, S>` owns a [`HashTable`] and an [`OverflowList`] and keeps
/// every key in exactly one of the two. Lookups consult the table's fixed
/// `HOP_RANGE`-slot neighborhood first and fall back to the overflow list,
/// which is populated only when a neighborhood is saturated — under a
/// reasonable hasher it stays empty and every operation is O(1) on average.
///
/// Insertion never overwrites: a key already present leaves the map
/// unchanged (first occurrence wins). The table grows when its load factor
/// exceeds [`MAX_LOAD_FACTOR`] and shrinks when it falls below
/// [`MIN_LOAD_FACTOR`], never below [`INITIAL_CAPACITY`]; both checks run
/// before an insertion is attempted, and a resize rebuilds the table and the
/// overflow list from scratch.
///
/// The map is single-threaded by design; sharing one instance across threads
/// requires external synchronization.
///
/// # Examples
///
/// ```rust
/// use hopmap::HashMap;
///
/// let mut map = HashMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&"a"), Some(&1));
/// assert_eq!(map.at(&"b"), Ok(&2));
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, S = crate::DefaultHashBuilder> {
    table: HashTable<K, V>,
    overflow: OverflowList<K, V>,
    hash_builder: S,
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug + Hash + Eq,
    V: Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

#[cfg(feature = "foldhash")]
impl<K, V> HashMap<K, V, crate::DefaultHashBuilder>
where
    K: Hash + Eq,
{
    /// Creates an empty map with the default hasher and the minimum initial
    /// capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let map: HashMap<i32, String> = HashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(crate::DefaultHashBuilder::default())
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the given hasher builder and the minimum
    /// initial capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::DefaultHashBuilder;
    /// use hopmap::HashMap;
    ///
    /// let map: HashMap<i32, String, _> = HashMap::with_hasher(DefaultHashBuilder::default());
    /// assert!(map.is_empty());
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(INITIAL_CAPACITY),
            overflow: OverflowList::new(),
            hash_builder,
        }
    }

    /// Creates a map from an iterator of pairs with the given hasher builder.
    ///
    /// Duplicate keys follow [`insert`] semantics: the first occurrence wins.
    ///
    /// [`insert`]: HashMap::insert
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::DefaultHashBuilder;
    /// use hopmap::HashMap;
    ///
    /// let map = HashMap::from_iter_with_hasher(
    ///     [(1, "one"), (2, "two"), (1, "uno")],
    ///     DefaultHashBuilder::default(),
    /// );
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    pub fn from_iter_with_hasher<I>(iter: I, hash_builder: S) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::with_hasher(hash_builder);
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }

    /// Returns the number of entries in the map, across both stores.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len() + self.overflow.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert!(map.is_empty());
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the map's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns the current logical capacity of the neighborhood table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    /// use hopmap::hash_table::INITIAL_CAPACITY;
    ///
    /// let map: HashMap<i32, i32> = HashMap::new();
    /// assert_eq!(map.capacity(), INITIAL_CAPACITY);
    /// ```
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Inserts a key-value pair, unless the key is already present.
    ///
    /// Returns `true` if the pair was inserted. A duplicate key leaves the
    /// map unchanged and returns `false`; the stored value is not replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map.get(&37), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let hash = self.hash_builder.hash_one(&key);
        if self.locate(hash, &key).is_some() {
            return false;
        }
        self.force_insert(hash, key, value);
        true
    }

    /// Returns a reference to the value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns the stored key and value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// ```
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let hash = self.hash_builder.hash_one(key);
        let pos = self.locate(hash, key)?;
        Some(self.pair_at(pos))
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_builder.hash_one(key);
        let pos = self.locate(hash, key)?;
        Some(self.value_at_mut(pos))
    }

    /// Returns `true` if the map contains `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns a reference to the value for `key`, or [`NotFoundError`] if
    /// the key is absent.
    ///
    /// This is the checked counterpart of [`get`]: absence is reported as an
    /// error the caller must handle rather than an `Option`.
    ///
    /// [`get`]: HashMap::get
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the map holds no entry for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    /// use hopmap::NotFoundError;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(NotFoundError));
    /// ```
    pub fn at(&self, key: &K) -> Result<&V, NotFoundError> {
        self.get(key).ok_or(NotFoundError)
    }

    /// Returns a mutable reference to the value for `key`, or
    /// [`NotFoundError`] if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the map holds no entry for `key`.
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, NotFoundError> {
        self.get_mut(key).ok_or(NotFoundError)
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// Removing an absent key is a no-op and returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` from the map, returning the stored key and value if it
    /// was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .remove(hash, key)
            .or_else(|| self.overflow.remove(hash, key))
    }

    /// Gets the entry for `key` for in-place manipulation.
    ///
    /// `entry(key).or_default()` is the never-failing "index" operation: it
    /// returns a mutable reference to the stored value, inserting the default
    /// value first if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map: HashMap<&str, i32> = HashMap::new();
    ///
    /// *map.entry("x").or_default() = 5;
    /// assert_eq!(map.at(&"x"), Ok(&5));
    ///
    /// map.entry("y").or_insert(1);
    /// map.entry("y").or_insert(2);
    /// assert_eq!(map.at(&"y"), Ok(&1));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, S> {
        let hash = self.hash_builder.hash_one(&key);
        match self.locate(hash, &key) {
            Some(pos) => Entry::Occupied(OccupiedEntry { map: self, pos }),
            None => Entry::Vacant(VacantEntry {
                map: self,
                hash,
                key,
            }),
        }
    }

    /// Removes every entry and resets the table to the minimum capacity.
    ///
    /// Both stores are rebuilt from scratch; no resize heuristic applies.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    /// use hopmap::hash_table::INITIAL_CAPACITY;
    ///
    /// let mut map = HashMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), INITIAL_CAPACITY);
    /// ```
    pub fn clear(&mut self) {
        self.table = HashTable::with_capacity(INITIAL_CAPACITY);
        self.overflow = OverflowList::new();
    }

    /// Returns an iterator over the entries of the map.
    ///
    /// Table entries come first in slot order, followed by overflow entries
    /// in their storage order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// assert_eq!(map.iter().count(), 2);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            table: self.table.iter(),
            overflow: self.overflow.entries().iter(),
        }
    }

    /// Returns an iterator over the entries of the map with mutable access to
    /// the values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, 10);
    /// map.insert(2, 20);
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.get(&1), Some(&11));
    /// assert_eq!(map.get(&2), Some(&21));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            table: self.table.iter_mut(),
            overflow: self.overflow.entries_mut().iter_mut(),
        }
    }

    /// Returns an iterator over the keys of the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// assert_eq!(map.keys().count(), 2);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// assert_eq!(map.values().count(), 2);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Looks up `key` across both stores, table first.
    fn locate(&self, hash: u64, key: &K) -> Option<RawPos> {
        if let Some(index) = self.table.locate(hash, key) {
            return Some(RawPos::Table(index));
        }
        if self.overflow.is_empty() {
            return None;
        }
        self.overflow.locate(hash, key).map(RawPos::Overflow)
    }

    fn pair_at(&self, pos: RawPos) -> (&K, &V) {
        match pos {
            RawPos::Table(index) => self.table.pair_at(index),
            RawPos::Overflow(index) => self.overflow.pair_at(index),
        }
    }

    fn value_at_mut(&mut self, pos: RawPos) -> &mut V {
        match pos {
            RawPos::Table(index) => self.table.pair_at_mut(index).1,
            RawPos::Overflow(index) => self.overflow.pair_at_mut(index).1,
        }
    }

    /// Inserts without a duplicate check, resizing first when the load factor
    /// has left the configured band.
    ///
    /// A table refusal is absorbed by appending to the overflow list, so this
    /// always succeeds and reports where the entry landed.
    fn force_insert(&mut self, hash: u64, key: K, value: V) -> RawPos {
        let load_factor = self.table.load_factor();
        if load_factor > MAX_LOAD_FACTOR {
            let grown = self
                .table
                .capacity()
                .checked_mul(2)
                .expect("capacity overflow");
            self.reconstruct(grown);
        } else if load_factor < MIN_LOAD_FACTOR && !self.table.is_empty() {
            self.reconstruct(self.shrunk_capacity());
        }

        match self.table.insert(hash, key, value) {
            Ok(index) => RawPos::Table(index),
            Err((key, value)) => RawPos::Overflow(self.overflow.push(hash, key, value)),
        }
    }

    /// Capacity to shrink to: halved until the current population sits above
    /// the low-water mark again, floored at the minimum capacity.
    fn shrunk_capacity(&self) -> usize {
        let populated = self.table.len() as f64;
        let mut capacity = self.table.capacity();
        while capacity > INITIAL_CAPACITY
            && populated / self.total_slots_at(capacity) < MIN_LOAD_FACTOR
        {
            capacity /= 2;
        }
        capacity
    }

    fn total_slots_at(&self, capacity: usize) -> f64 {
        (capacity + crate::hash_table::HOP_RANGE - 1) as f64
    }

    /// Rebuilds both stores at the given capacity, re-offering every entry to
    /// the fresh table in iteration order. Entries the new table still cannot
    /// place land in the fresh overflow list.
    fn reconstruct(&mut self, new_capacity: usize) {
        let old_table = core::mem::replace(&mut self.table, HashTable::with_capacity(new_capacity));
        let old_overflow = core::mem::take(&mut self.overflow);
        for (hash, key, value) in old_table.into_entries().chain(old_overflow.into_entries()) {
            if let Err((key, value)) = self.table.insert(hash, key, value) {
                self.overflow.push(hash, key, value);
            }
        }
    }
}

#[cfg(test)]
impl<K, V, S> HashMap<K, V, S> {
    pub(crate) fn table_len(&self) -> usize {
        self.table.len()
    }

    pub(crate) fn overflow_len(&self) -> usize {
        self.overflow.len()
    }

    pub(crate) fn table_load_factor(&self) -> f64 {
        self.table.load_factor()
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Collects an iterator of pairs; duplicate keys keep their first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let map: HashMap<i32, &str> = [(1, "one"), (2, "two"), (1, "uno")].into_iter().collect();
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_iter_with_hasher(iter, S::default())
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashMap`].
///
/// [`entry`]: HashMap::entry
pub enum Entry<'a, K, V, S> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, S>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, S>),
}

impl<'a, K, V, S> Entry<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.entry(1).or_insert("a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopmap::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, 10);
    /// map.entry(1).and_modify(|v| *v += 1).or_insert(0);
    /// assert_eq!(map.get(&1), Some(&11));
    /// ```
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V, S> Entry<'a, K, V, S>
where
    K: Hash + Eq,
    V: Default,
    S: BuildHasher,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    ///
    /// Never fails: an absent key gets `V::default()` stored first.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the map.
pub struct VacantEntry<'a, K, V, S> {
    map: &'a mut HashMap<K, V, S>,
    hash: u64,
    key: K,
}

impl<'a, K, V, S> VacantEntry<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { map, hash, key } = self;
        let pos = map.force_insert(hash, key, value);
        map.value_at_mut(pos)
    }
}

/// A view into an occupied entry in the map.
pub struct OccupiedEntry<'a, K, V, S> {
    map: &'a mut HashMap<K, V, S>,
    pos: RawPos,
}

impl<'a, K, V, S> OccupiedEntry<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        self.map.pair_at(self.pos).0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        self.map.pair_at(self.pos).1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        self.map.value_at_mut(self.pos)
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        self.map.value_at_mut(self.pos)
    }

    /// Replaces the entry's value and returns the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry from the map and returns the value.
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Removes the entry from the map and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        match self.pos {
            RawPos::Table(index) => self.map.table.remove_at(index),
            RawPos::Overflow(index) => self.map.overflow.remove_at(index),
        }
    }
}

/// An iterator over the entries of a [`HashMap`].
///
/// Yields every occupied table slot in storage order, then every overflow
/// entry in storage order.
pub struct Iter<'a, K, V> {
    table: crate::hash_table::Iter<'a, K, V>,
    overflow: core::slice::Iter<'a, (u64, K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pair) = self.table.next() {
            return Some(pair);
        }
        self.overflow.next().map(|(_, key, value)| (key, value))
    }
}

/// An iterator over the entries of a [`HashMap`] with mutable access to the
/// values.
pub struct IterMut<'a, K, V> {
    table: crate::hash_table::IterMut<'a, K, V>,
    overflow: core::slice::IterMut<'a, (u64, K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pair) = self.table.next() {
            return Some(pair);
        }
        self.overflow.next().map(|(_, key, value)| (&*key, value))
    }
}

/// An iterator over the keys of a [`HashMap`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// An iterator over the values of a [`HashMap`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}
