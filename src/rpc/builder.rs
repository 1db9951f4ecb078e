//! Small helpers shared by the request and response codecs.
//!
//! FlatBuffers requires children (strings, vectors, sub-tables) to be
//! finished before the table that refers to them is started, so callers
//! create those first and hand the offsets to the generated `*Args`.

use flatbuffers::{FlatBufferBuilder, ForwardsUOffset, UnionWIPOffset, Vector, WIPOffset};

use crate::error::ProtocolError;

pub type UnionOffset = WIPOffset<UnionWIPOffset>;
pub type StrVecOffset<'fbb> = WIPOffset<Vector<'fbb, ForwardsUOffset<&'fbb str>>>;

pub fn strings<'fbb, S: AsRef<str>>(
    fbb: &mut FlatBufferBuilder<'fbb>,
    items: &[S],
) -> StrVecOffset<'fbb> {
    let offsets: Vec<_> = items
        .iter()
        .map(|s| fbb.create_string(s.as_ref()))
        .collect();
    fbb.create_vector(&offsets)
}

pub fn opt_string<'fbb>(
    fbb: &mut FlatBufferBuilder<'fbb>,
    s: Option<&str>,
) -> Option<WIPOffset<&'fbb str>> {
    s.map(|s| fbb.create_string(s))
}

/// Write a list of `short` enum values.
pub fn shorts<'fbb, E: Copy>(
    fbb: &mut FlatBufferBuilder<'fbb>,
    items: &[E],
    wire: fn(E) -> i16,
) -> WIPOffset<Vector<'fbb, i16>> {
    let values: Vec<i16> = items.iter().copied().map(wire).collect();
    fbb.create_vector(&values)
}

/// Map a `short` enum field through its `from_wire` constructor.
pub fn wire_enum<E>(
    value: i16,
    field: &'static str,
    from_wire: fn(i16) -> Option<E>,
) -> Result<E, ProtocolError> {
    from_wire(value).ok_or(ProtocolError::InvalidEnum { field, value })
}

pub fn wire_enum_vec<E>(
    values: Option<Vector<'_, i16>>,
    field: &'static str,
    from_wire: fn(i16) -> Option<E>,
) -> Result<Vec<E>, ProtocolError> {
    values
        .into_iter()
        .flat_map(|v| v.iter())
        .map(|v| wire_enum(v, field, from_wire))
        .collect()
}

pub fn owned(items: Option<Vector<'_, ForwardsUOffset<&str>>>) -> Vec<String> {
    items
        .into_iter()
        .flat_map(|v| v.iter())
        .map(str::to_owned)
        .collect()
}

/// A string field the daemon must always fill.
pub fn required(value: Option<&str>, field: &'static str) -> Result<String, ProtocolError> {
    value
        .map(str::to_owned)
        .ok_or(ProtocolError::MissingField(field))
}

/// Union member accessor result for a tag the root already matched.
pub fn payload<T>(member: Option<T>) -> Result<T, ProtocolError> {
    member.ok_or(ProtocolError::MissingPayload)
}
