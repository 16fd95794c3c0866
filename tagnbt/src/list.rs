use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::{ByteArray, Compound, IntArray, LongArray, Tag, TagType};

/// An immutable, ordered sequence of tags which all share one element type.
///
/// The element type of an empty list is [`TagType::End`]. It is pinned by the
/// first element added, after which adding a tag of another type fails.
/// Removing elements never unpins the type.
///
/// Like [`Compound`], every edit copies the backing vector.
///
/// ```
/// use tagnbt::{List, Tag, TagType};
///
/// # fn main() -> tagnbt::error::Result<()> {
/// let list = List::new().add(Tag::Int(1))?.add(Tag::Int(2))?;
/// assert_eq!(list.element_type(), TagType::Int);
/// assert!(list.add(Tag::String("three".into())).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct List {
    element_type: TagType,
    tags: Arc<Vec<Tag>>,
}

impl Default for List {
    fn default() -> Self {
        Self {
            element_type: TagType::End,
            tags: Arc::default(),
        }
    }
}

fn no_add_end(tag: &Tag) -> Result<()> {
    if tag.tag_type() == TagType::End {
        return Err(Error::illegal_element(format!(
            "cannot add a {} to a {}",
            TagType::End,
            TagType::List
        )));
    }
    Ok(())
}

fn must_be_same_type(tag: &Tag, element_type: TagType) -> Result<()> {
    if element_type != TagType::End && tag.tag_type() != element_type {
        return Err(Error::illegal_element(format!(
            "trying to add tag of type {} to list of {}",
            tag.tag_type(),
            element_type
        )));
    }
    Ok(())
}

fn out_of_range(index: usize, len: usize) -> Error {
    Error::bespoke(format!(
        "list index {} out of range for list of length {}",
        index, len
    ))
}

impl List {
    /// The empty, unpinned list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A list of `element_type` holding `tags`. Fails if any tag has a
    /// different type. `End` is only accepted for an empty list.
    pub fn of(element_type: TagType, tags: impl IntoIterator<Item = Tag>) -> Result<List> {
        let mut builder = ListBuilder::of(element_type);
        for tag in tags {
            builder.push(tag)?;
        }
        if element_type == TagType::End && !builder.tags.is_empty() {
            return Err(Error::illegal_element(format!(
                "a list of {} cannot hold elements",
                TagType::End
            )));
        }
        Ok(builder.build())
    }

    pub fn builder() -> ListBuilder {
        ListBuilder::new()
    }

    /// A builder that only accepts tags of `element_type`.
    pub fn builder_of(element_type: TagType) -> ListBuilder {
        ListBuilder::of(element_type)
    }

    pub fn element_type(&self) -> TagType {
        self.element_type
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.tags.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    /// A new list with `tag` appended.
    pub fn add(&self, tag: impl Into<Tag>) -> Result<List> {
        let tag = tag.into();
        no_add_end(&tag)?;
        must_be_same_type(&tag, self.element_type)?;
        let element_type = tag.tag_type();
        Ok(self.edit(element_type, |tags| tags.push(tag)))
    }

    /// A new list with every one of `tags` appended. Either all are added or
    /// none are.
    pub fn add_all(&self, tags: impl IntoIterator<Item = Tag>) -> Result<List> {
        let mut pinned = self.element_type;
        let mut added = Vec::new();
        for tag in tags {
            no_add_end(&tag)?;
            must_be_same_type(&tag, pinned)?;
            pinned = tag.tag_type();
            added.push(tag);
        }
        if added.is_empty() {
            return Ok(self.clone());
        }
        Ok(self.edit(pinned, |tags| tags.extend(added)))
    }

    /// A new list with the element at `index` replaced. The replacement must
    /// match the pinned type.
    pub fn set(&self, index: usize, tag: impl Into<Tag>) -> Result<List> {
        self.set_entry(index, tag).map(|(list, _)| list)
    }

    /// Like [`set`][Self::set], also handing back the replaced tag.
    pub fn set_entry(&self, index: usize, tag: impl Into<Tag>) -> Result<(List, Tag)> {
        let tag = tag.into();
        no_add_end(&tag)?;
        must_be_same_type(&tag, self.element_type)?;
        if index >= self.len() {
            return Err(out_of_range(index, self.len()));
        }
        let element_type = tag.tag_type();
        let mut old = Tag::End;
        let list = self.edit(element_type, |tags| {
            old = std::mem::replace(&mut tags[index], tag);
        });
        Ok((list, old))
    }

    /// A new list without the element at `index`.
    pub fn remove(&self, index: usize) -> Result<List> {
        self.remove_entry(index).map(|(list, _)| list)
    }

    /// Like [`remove`][Self::remove], also handing back the removed tag.
    pub fn remove_entry(&self, index: usize) -> Result<(List, Tag)> {
        if index >= self.len() {
            return Err(out_of_range(index, self.len()));
        }
        let mut old = Tag::End;
        let list = self.edit(self.element_type, |tags| old = tags.remove(index));
        Ok((list, old))
    }

    fn edit(&self, element_type: TagType, f: impl FnOnce(&mut Vec<Tag>)) -> List {
        let mut tags = Vec::clone(&self.tags);
        f(&mut tags);
        List {
            // Only an unpinned list takes on a new type.
            element_type: if self.element_type == TagType::End {
                element_type
            } else {
                self.element_type
            },
            tags: Arc::new(tags),
        }
    }

    fn numeric(&self, index: usize) -> Option<&Tag> {
        self.tags.get(index).filter(|tag| tag.is_numeric())
    }

    pub fn get_byte(&self, index: usize) -> i8 {
        self.get_byte_or(index, 0)
    }

    pub fn get_byte_or(&self, index: usize, default: i8) -> i8 {
        self.numeric(index).and_then(Tag::as_i8).unwrap_or(default)
    }

    pub fn get_short(&self, index: usize) -> i16 {
        self.get_short_or(index, 0)
    }

    pub fn get_short_or(&self, index: usize, default: i16) -> i16 {
        self.numeric(index).and_then(Tag::as_i16).unwrap_or(default)
    }

    pub fn get_int(&self, index: usize) -> i32 {
        self.get_int_or(index, 0)
    }

    pub fn get_int_or(&self, index: usize, default: i32) -> i32 {
        self.numeric(index).and_then(Tag::as_i32).unwrap_or(default)
    }

    pub fn get_long(&self, index: usize) -> i64 {
        self.get_long_or(index, 0)
    }

    pub fn get_long_or(&self, index: usize, default: i64) -> i64 {
        self.numeric(index).and_then(Tag::as_i64).unwrap_or(default)
    }

    pub fn get_float(&self, index: usize) -> f32 {
        self.get_float_or(index, 0.0)
    }

    pub fn get_float_or(&self, index: usize, default: f32) -> f32 {
        self.numeric(index).and_then(Tag::as_f32).unwrap_or(default)
    }

    pub fn get_double(&self, index: usize) -> f64 {
        self.get_double_or(index, 0.0)
    }

    pub fn get_double_or(&self, index: usize, default: f64) -> f64 {
        self.numeric(index).and_then(Tag::as_f64).unwrap_or(default)
    }

    pub fn get_string(&self, index: usize) -> &str {
        self.get_string_or(index, "")
    }

    pub fn get_string_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        self.tags
            .get(index)
            .and_then(Tag::as_str)
            .unwrap_or(default)
    }

    pub fn get_byte_array(&self, index: usize) -> ByteArray {
        self.get_byte_array_or(index, ByteArray::default())
    }

    pub fn get_byte_array_or(&self, index: usize, default: ByteArray) -> ByteArray {
        match self.tags.get(index) {
            Some(Tag::ByteArray(v)) => v.clone(),
            _ => default,
        }
    }

    pub fn get_int_array(&self, index: usize) -> IntArray {
        self.get_int_array_or(index, IntArray::default())
    }

    pub fn get_int_array_or(&self, index: usize, default: IntArray) -> IntArray {
        match self.tags.get(index) {
            Some(Tag::IntArray(v)) => v.clone(),
            _ => default,
        }
    }

    pub fn get_long_array(&self, index: usize) -> LongArray {
        self.get_long_array_or(index, LongArray::default())
    }

    pub fn get_long_array_or(&self, index: usize, default: LongArray) -> LongArray {
        match self.tags.get(index) {
            Some(Tag::LongArray(v)) => v.clone(),
            _ => default,
        }
    }

    pub fn get_list(&self, index: usize) -> List {
        self.get_list_or(index, List::new())
    }

    pub fn get_list_or(&self, index: usize, default: List) -> List {
        match self.tags.get(index) {
            Some(Tag::List(v)) => v.clone(),
            _ => default,
        }
    }

    pub fn get_compound(&self, index: usize) -> Compound {
        self.get_compound_or(index, Compound::new())
    }

    pub fn get_compound_or(&self, index: usize, default: Compound) -> Compound {
        match self.tags.get(index) {
            Some(Tag::Compound(v)) => v.clone(),
            _ => default,
        }
    }
}

// Only the elements take part in equality. Two empty lists are equal
// whatever type they were pinned to.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tags, &other.tags) || *self.tags == *other.tags
    }
}

impl Eq for List {}

impl Hash for List {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tags.hash(state);
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List<{}>", self.element_type)?;
        f.debug_list().entries(self.tags.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for List {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Every element is generated from the same variant so the list is
        // homogeneous.
        let element_type: TagType = u.arbitrary()?;
        let len = u.arbitrary_len::<Tag>()?;
        let mut builder = ListBuilder::of(element_type);

        for _ in 0..len {
            let tag = match element_type {
                TagType::End => break,
                TagType::Byte => Tag::Byte(u.arbitrary()?),
                TagType::Short => Tag::Short(u.arbitrary()?),
                TagType::Int => Tag::Int(u.arbitrary()?),
                TagType::Long => Tag::Long(u.arbitrary()?),
                TagType::Float => Tag::Float(u.arbitrary()?),
                TagType::Double => Tag::Double(u.arbitrary()?),
                TagType::ByteArray => Tag::ByteArray(u.arbitrary()?),
                TagType::String => Tag::String(u.arbitrary()?),
                TagType::List => Tag::List(u.arbitrary()?),
                TagType::Compound => Tag::Compound(u.arbitrary()?),
                TagType::IntArray => Tag::IntArray(u.arbitrary()?),
                TagType::LongArray => Tag::LongArray(u.arbitrary()?),
            };
            builder
                .push(tag)
                .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        }

        Ok(builder.build())
    }
}

/// Builds a [`List`] in place, checking each element as it is added.
#[derive(Debug)]
pub struct ListBuilder {
    element_type: TagType,
    tags: Vec<Tag>,
}

impl ListBuilder {
    /// A builder whose element type is pinned by the first push.
    pub fn new() -> Self {
        Self::of(TagType::End)
    }

    pub fn of(element_type: TagType) -> Self {
        Self {
            element_type,
            tags: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(element_type: TagType, capacity: usize) -> Self {
        Self {
            element_type,
            tags: Vec::with_capacity(capacity),
        }
    }

    /// Append in place.
    pub fn push(&mut self, tag: impl Into<Tag>) -> Result<&mut Self> {
        let tag = tag.into();
        no_add_end(&tag)?;
        must_be_same_type(&tag, self.element_type)?;
        self.element_type = tag.tag_type();
        self.tags.push(tag);
        Ok(self)
    }

    /// Consuming form of [`push`][Self::push] for chaining.
    pub fn add(mut self, tag: impl Into<Tag>) -> Result<Self> {
        self.push(tag)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn build(self) -> List {
        List {
            element_type: self.element_type,
            tags: Arc::new(self.tags),
        }
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new()
    }
}
