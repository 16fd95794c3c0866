use std::ops::Deref;
use std::sync::Arc;

macro_rules! array_tag {
    ($(#[$doc:meta])* $name:ident, $elem:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            data: Arc<[$elem]>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data: data.into() }
            }

            /// A copy of the elements. Use [`as_slice`][Self::as_slice] to
            /// avoid the allocation.
            pub fn to_vec(&self) -> Vec<$elem> {
                self.data.to_vec()
            }

            pub fn as_slice(&self) -> &[$elem] {
                &self.data
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(Vec::new())
            }
        }

        impl Deref for $name {
            type Target = [$elem];

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl From<&[$elem]> for $name {
            fn from(data: &[$elem]) -> Self {
                Self { data: data.into() }
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self {
                    data: iter.into_iter().collect(),
                }
            }
        }

        #[cfg(feature = "arbitrary1")]
        impl<'a> arbitrary::Arbitrary<'a> for $name {
            fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
                Ok(Self::new(u.arbitrary()?))
            }
        }
    };
}

array_tag!(
    /// An immutable NBT byte array. Cloning is cheap, the elements are shared.
    ByteArray,
    i8
);

array_tag!(
    /// An immutable NBT int array. Cloning is cheap, the elements are shared.
    IntArray,
    i32
);

array_tag!(
    /// An immutable NBT long array. Cloning is cheap, the elements are shared.
    LongArray,
    i64
);
