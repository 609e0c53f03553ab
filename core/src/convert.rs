//! Typed retrieval of stored parameter values.
//!
//! Every supported output type carries its [`ValueKind`] tag and a decode
//! function, so the requested kind is selected explicitly by the caller's
//! type parameter. Retrieval checks, in order: that the name is registered
//! (flagged lookup first, then positional), that the declared kind matches
//! the requested one, and that the stored text decodes.

use crate::error::QueryError;
use crate::registry::ArgumentRegistry;
use crate::store::ParameterStore;
use crate::types::{TRUE_TOKEN, ValueKind};

mod sealed {
    pub trait Sealed {}
}

/// A type a stored parameter value can be decoded into.
///
/// Implemented for `bool`, `String`, and the numeric types matching the
/// [`ValueKind`] variants. The trait is sealed; the set of kinds is closed.
pub trait FromParameter: Sized + sealed::Sealed {
    /// The declared kind this type corresponds to.
    const KIND: ValueKind;

    /// Decodes the raw stored text.
    fn decode(name: &str, raw: &str) -> Result<Self, QueryError>;
}

impl sealed::Sealed for bool {}

impl FromParameter for bool {
    const KIND: ValueKind = ValueKind::Bool;

    /// Exact match against the canonical true token; anything else is
    /// false. Booleans have no decode-error path.
    fn decode(_name: &str, raw: &str) -> Result<Self, QueryError> {
        Ok(raw == TRUE_TOKEN)
    }
}

impl sealed::Sealed for String {}

impl FromParameter for String {
    const KIND: ValueKind = ValueKind::String;

    fn decode(_name: &str, raw: &str) -> Result<Self, QueryError> {
        Ok(raw.to_string())
    }
}

macro_rules! numeric_from_parameter {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromParameter for $ty {
                const KIND: ValueKind = $kind;

                fn decode(name: &str, raw: &str) -> Result<Self, QueryError> {
                    raw.parse::<$ty>().map_err(|_| QueryError::Decode {
                        name: name.to_string(),
                        value: raw.to_string(),
                        requested: $kind,
                    })
                }
            }
        )*
    };
}

numeric_from_parameter! {
    f64 => ValueKind::Double,
    i64 => ValueKind::Long,
    i32 => ValueKind::Int,
    i16 => ValueKind::Short,
    u64 => ValueKind::UnsignedLong,
    u32 => ValueKind::UnsignedInt,
    u16 => ValueKind::UnsignedShort,
}

/// Resolves a name against the registry, flagged partition first.
fn resolve_kind(arguments: &ArgumentRegistry, name: &str) -> Result<ValueKind, QueryError> {
    match arguments.lookup_flagged(name) {
        Ok(option) => Ok(option.value_kind()),
        Err(_) => arguments
            .lookup_positional(name)
            .map(|option| option.value_kind()),
    }
}

/// Reads a stored value as `T`, validating the declared kind first.
pub(crate) fn read<T: FromParameter>(
    arguments: &ArgumentRegistry,
    store: &ParameterStore,
    name: &str,
) -> Result<T, QueryError> {
    let declared = resolve_kind(arguments, name)?;
    if declared != T::KIND {
        return Err(QueryError::TypeMismatch {
            name: name.to_string(),
            declared,
            requested: T::KIND,
        });
    }
    T::decode(name, store.get(name))
}
