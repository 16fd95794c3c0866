use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{ByteArray, IntArray, List, LongArray, Tag, TagType};

#[cfg(not(feature = "preserve-order"))]
pub(crate) type Map = std::collections::HashMap<String, Tag>;

#[cfg(feature = "preserve-order")]
pub(crate) type Map = indexmap::IndexMap<String, Tag>;

#[cfg(not(feature = "preserve-order"))]
fn map_remove(map: &mut Map, key: &str) -> Option<Tag> {
    map.remove(key)
}

#[cfg(feature = "preserve-order")]
fn map_remove(map: &mut Map, key: &str) -> Option<Tag> {
    map.shift_remove(key)
}

/// An immutable, string keyed map of tags.
///
/// Iteration order is unspecified unless the `preserve-order` feature is
/// enabled, in which case entries keep their insertion order.
///
/// Every edit copies the backing map, so each `put` or `remove` is O(n) in
/// the number of entries. Use a [`CompoundBuilder`] to assemble large
/// compounds.
///
/// The typed getters never fail. A missing key, or a key holding a tag of an
/// incompatible type, gives the default instead:
///
/// ```
/// use tagnbt::{Compound, CompoundSetter};
///
/// let c = Compound::new().put_int("x", 5).put_string("s", "text");
/// assert_eq!(c.get_byte("x"), 5);
/// assert_eq!(c.get_byte("s"), 0);
/// assert_eq!(c.get_byte_or("missing", 7), 7);
/// ```
#[derive(Clone, Default)]
pub struct Compound {
    tags: Arc<Map>,
}

impl Compound {
    /// The empty compound.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CompoundBuilder {
        CompoundBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.tags.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    /// Whether `key` holds a tag compatible with `tag_type`. Numeric types are
    /// all compatible with each other.
    pub fn contains(&self, key: &str, tag_type: TagType) -> bool {
        self.tags
            .get(key)
            .map_or(false, |tag| tag_type.test(tag.tag_type()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A new compound with `tag` stored under `key`. An existing entry for
    /// the key is replaced.
    pub fn put(&self, key: impl Into<String>, tag: impl Into<Tag>) -> Compound {
        self.edit(|map| {
            map.insert(key.into(), tag.into());
        })
    }

    /// A new compound containing every entry of `self` and `other`. Entries of
    /// `other` win.
    pub fn put_all(&self, other: &Compound) -> Compound {
        if other.is_empty() {
            return self.clone();
        }
        self.edit(|map| {
            for (k, v) in other.tags.iter() {
                map.insert(k.clone(), v.clone());
            }
        })
    }

    /// A new compound without `key`. If the key is not present no copy is
    /// made.
    pub fn remove(&self, key: &str) -> Compound {
        self.remove_entry(key).0
    }

    /// Like [`remove`][Self::remove], also handing back the removed tag.
    pub fn remove_entry(&self, key: &str) -> (Compound, Option<Tag>) {
        if !self.tags.contains_key(key) {
            return (self.clone(), None);
        }
        let mut removed = None;
        let compound = self.edit(|map| removed = map_remove(map, key));
        (compound, removed)
    }

    fn edit(&self, f: impl FnOnce(&mut Map)) -> Compound {
        let mut tags = Map::clone(&self.tags);
        f(&mut tags);
        Compound {
            tags: Arc::new(tags),
        }
    }

    fn typed(&self, key: &str, tag_type: TagType) -> Option<&Tag> {
        self.tags
            .get(key)
            .filter(|tag| tag_type.test(tag.tag_type()))
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get_bool_or(key, false)
    }

    /// Any non-zero number is true. The default only matters when the key
    /// does not hold a number, a stored zero still gives `default`.
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_byte(key) != 0 || default
    }

    pub fn get_byte(&self, key: &str) -> i8 {
        self.get_byte_or(key, 0)
    }

    pub fn get_byte_or(&self, key: &str, default: i8) -> i8 {
        self.typed(key, TagType::Byte)
            .and_then(Tag::as_i8)
            .unwrap_or(default)
    }

    pub fn get_short(&self, key: &str) -> i16 {
        self.get_short_or(key, 0)
    }

    pub fn get_short_or(&self, key: &str, default: i16) -> i16 {
        self.typed(key, TagType::Short)
            .and_then(Tag::as_i16)
            .unwrap_or(default)
    }

    pub fn get_int(&self, key: &str) -> i32 {
        self.get_int_or(key, 0)
    }

    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.typed(key, TagType::Int)
            .and_then(Tag::as_i32)
            .unwrap_or(default)
    }

    pub fn get_long(&self, key: &str) -> i64 {
        self.get_long_or(key, 0)
    }

    pub fn get_long_or(&self, key: &str, default: i64) -> i64 {
        self.typed(key, TagType::Long)
            .and_then(Tag::as_i64)
            .unwrap_or(default)
    }

    pub fn get_float(&self, key: &str) -> f32 {
        self.get_float_or(key, 0.0)
    }

    pub fn get_float_or(&self, key: &str, default: f32) -> f32 {
        self.typed(key, TagType::Float)
            .and_then(Tag::as_f32)
            .unwrap_or(default)
    }

    pub fn get_double(&self, key: &str) -> f64 {
        self.get_double_or(key, 0.0)
    }

    pub fn get_double_or(&self, key: &str, default: f64) -> f64 {
        self.typed(key, TagType::Double)
            .and_then(Tag::as_f64)
            .unwrap_or(default)
    }

    pub fn get_string(&self, key: &str) -> &str {
        self.get_string_or(key, "")
    }

    pub fn get_string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.tags
            .get(key)
            .and_then(Tag::as_str)
            .unwrap_or(default)
    }

    pub fn get_byte_array(&self, key: &str) -> ByteArray {
        self.get_byte_array_or(key, ByteArray::default())
    }

    pub fn get_byte_array_or(&self, key: &str, default: ByteArray) -> ByteArray {
        match self.tags.get(key) {
            Some(Tag::ByteArray(v)) => v.clone(),
            _ => default,
        }
    }

    pub fn get_int_array(&self, key: &str) -> IntArray {
        self.get_int_array_or(key, IntArray::default())
    }

    pub fn get_int_array_or(&self, key: &str, default: IntArray) -> IntArray {
        match self.tags.get(key) {
            Some(Tag::IntArray(v)) => v.clone(),
            _ => default,
        }
    }

    pub fn get_long_array(&self, key: &str) -> LongArray {
        self.get_long_array_or(key, LongArray::default())
    }

    pub fn get_long_array_or(&self, key: &str, default: LongArray) -> LongArray {
        match self.tags.get(key) {
            Some(Tag::LongArray(v)) => v.clone(),
            _ => default,
        }
    }

    pub fn get_list(&self, key: &str) -> List {
        self.get_list_or(key, List::new())
    }

    pub fn get_list_or(&self, key: &str, default: List) -> List {
        match self.tags.get(key) {
            Some(Tag::List(v)) => v.clone(),
            _ => default,
        }
    }

    /// The list under `key`, but only if its element type is compatible with
    /// `element_type`. An empty list has no element type and so never
    /// matches.
    pub fn get_list_of(&self, key: &str, element_type: TagType) -> List {
        self.get_list_of_or(key, element_type, List::new())
    }

    pub fn get_list_of_or(&self, key: &str, element_type: TagType, default: List) -> List {
        match self.tags.get(key) {
            Some(Tag::List(v)) if element_type.test(v.element_type()) => v.clone(),
            _ => default,
        }
    }

    pub fn get_compound(&self, key: &str) -> Compound {
        self.get_compound_or(key, Compound::new())
    }

    pub fn get_compound_or(&self, key: &str, default: Compound) -> Compound {
        match self.tags.get(key) {
            Some(Tag::Compound(v)) => v.clone(),
            _ => default,
        }
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tags, &other.tags) || *self.tags == *other.tags
    }
}

impl Eq for Compound {}

impl Hash for Compound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order independent, so equal maps hash equally whatever their
        // iteration order.
        let mut sum = 0u64;
        for entry in self.tags.iter() {
            let mut hasher = DefaultHasher::new();
            entry.hash(&mut hasher);
            sum = sum.wrapping_add(hasher.finish());
        }
        self.tags.len().hash(state);
        sum.hash(state);
    }
}

impl fmt::Debug for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.tags.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Compound
where
    K: Into<String>,
    V: Into<Tag>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut builder = CompoundBuilder::new();
        for (k, v) in iter {
            builder.insert(k, v);
        }
        builder.build()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = <&'a Map as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let entries: Vec<(String, Tag)> = u.arbitrary()?;
        Ok(entries.into_iter().collect())
    }
}

/// Builds a [`Compound`] without copying the map on every insert. No map is
/// allocated until the first entry is added.
#[derive(Debug, Default)]
pub struct CompoundBuilder {
    tags: Option<Map>,
}

impl CompoundBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert in place. Later inserts of the same key win.
    pub fn insert(&mut self, key: impl Into<String>, tag: impl Into<Tag>) -> &mut Self {
        self.tags
            .get_or_insert_with(Map::default)
            .insert(key.into(), tag.into());
        self
    }

    pub fn put_all(mut self, other: &Compound) -> Self {
        for (k, v) in other.tags.iter() {
            self.insert(k.clone(), v.clone());
        }
        self
    }

    pub fn build(self) -> Compound {
        match self.tags {
            Some(tags) => Compound {
                tags: Arc::new(tags),
            },
            None => Compound::new(),
        }
    }
}

/// Typed insertion shared by [`Compound`] (returning a new compound) and
/// [`CompoundBuilder`] (returning the builder).
pub trait CompoundSetter: Sized {
    type Output;

    fn put(self, key: impl Into<String>, tag: impl Into<Tag>) -> Self::Output;

    fn put_bool(self, key: impl Into<String>, value: bool) -> Self::Output {
        self.put(key, Tag::Byte(i8::from(value)))
    }

    fn put_byte(self, key: impl Into<String>, value: i8) -> Self::Output {
        self.put(key, Tag::Byte(value))
    }

    fn put_short(self, key: impl Into<String>, value: i16) -> Self::Output {
        self.put(key, Tag::Short(value))
    }

    fn put_int(self, key: impl Into<String>, value: i32) -> Self::Output {
        self.put(key, Tag::Int(value))
    }

    fn put_long(self, key: impl Into<String>, value: i64) -> Self::Output {
        self.put(key, Tag::Long(value))
    }

    fn put_float(self, key: impl Into<String>, value: f32) -> Self::Output {
        self.put(key, Tag::Float(value))
    }

    fn put_double(self, key: impl Into<String>, value: f64) -> Self::Output {
        self.put(key, Tag::Double(value))
    }

    fn put_string(self, key: impl Into<String>, value: impl Into<String>) -> Self::Output {
        self.put(key, Tag::String(value.into()))
    }

    fn put_byte_array(self, key: impl Into<String>, value: impl Into<ByteArray>) -> Self::Output {
        self.put(key, Tag::ByteArray(value.into()))
    }

    fn put_int_array(self, key: impl Into<String>, value: impl Into<IntArray>) -> Self::Output {
        self.put(key, Tag::IntArray(value.into()))
    }

    fn put_long_array(self, key: impl Into<String>, value: impl Into<LongArray>) -> Self::Output {
        self.put(key, Tag::LongArray(value.into()))
    }
}

impl CompoundSetter for &Compound {
    type Output = Compound;

    fn put(self, key: impl Into<String>, tag: impl Into<Tag>) -> Compound {
        Compound::put(self, key, tag)
    }
}

impl CompoundSetter for CompoundBuilder {
    type Output = CompoundBuilder;

    fn put(mut self, key: impl Into<String>, tag: impl Into<Tag>) -> CompoundBuilder {
        self.insert(key, tag);
        self
    }
}
