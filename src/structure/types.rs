use serde::Serialize;
use std::fmt;

use hdf5::types::TypeDescriptor;

/// Element type of a dataset.
///
/// Sizes are in bytes. Displayed using the numpy vocabulary (`float64`, `|S10`, `object`, ..).
#[derive(Debug, PartialEq, Eq, Serialize, Clone)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    #[serde(rename = "uint")]
    UInt(usize),
    Int(usize),
    Float(usize),
    Bool,
    /// Enumeration, shown as its base integer type.
    Enum { size: usize, signed: bool },
    FixedAscii(usize),
    FixedUnicode(usize),
    VarLenAscii,
    VarLenUnicode,
    Compound(Vec<(String, ElementType)>),
    Array(Box<ElementType>, usize),
    VarLenArray(Box<ElementType>),
    /// Object or region reference.
    Reference(usize),
    Opaque(usize),
}

impl ElementType {
    /// Packed size of one element, `None` for variable length types.
    pub fn dsize(&self) -> Option<usize> {
        use ElementType::*;

        match self {
            UInt(sz) | Int(sz) | Float(sz) | FixedAscii(sz) | FixedUnicode(sz) | Reference(sz)
            | Opaque(sz) => Some(*sz),
            Enum { size, .. } => Some(*size),
            Bool => Some(1),
            Array(tp, n) => tp.dsize().map(|sz| sz * n),
            Compound(fields) => fields.iter().map(|(_, tp)| tp.dsize()).sum(),
            VarLenAscii | VarLenUnicode | VarLenArray(_) => None,
        }
    }
}

impl From<&TypeDescriptor> for ElementType {
    fn from(td: &TypeDescriptor) -> Self {
        use ElementType::*;

        match td {
            TypeDescriptor::Integer(_) => Int(td.size()),
            TypeDescriptor::Unsigned(_) => UInt(td.size()),
            TypeDescriptor::Float(_) => Float(td.size()),
            TypeDescriptor::Boolean => Bool,
            TypeDescriptor::Enum(tp) => Enum {
                size: td.size(),
                signed: tp.signed,
            },
            TypeDescriptor::FixedAscii(n) => FixedAscii(*n),
            TypeDescriptor::FixedUnicode(n) => FixedUnicode(*n),
            TypeDescriptor::VarLenAscii => VarLenAscii,
            TypeDescriptor::VarLenUnicode => VarLenUnicode,
            TypeDescriptor::Compound(tp) => Compound(
                tp.fields
                    .iter()
                    .map(|f| (f.name.clone(), ElementType::from(&f.ty)))
                    .collect(),
            ),
            TypeDescriptor::FixedArray(tp, n) => Array(Box::new(ElementType::from(&**tp)), *n),
            TypeDescriptor::VarLenArray(tp) => VarLenArray(Box::new(ElementType::from(&**tp))),
            TypeDescriptor::Reference(_) => Reference(td.size()),
            _ => Opaque(td.size()),
        }
    }
}

impl From<hdf5::Datatype> for ElementType {
    fn from(dtype: hdf5::Datatype) -> Self {
        match dtype.to_descriptor() {
            Ok(td) => ElementType::from(&td),
            // types without a descriptor: half floats, opaque blobs, references, ..
            Err(_) => ElementType::Opaque(dtype.size()),
        }
    }
}

fn int_name(f: &mut fmt::Formatter<'_>, prefix: &str, size: usize) -> fmt::Result {
    write!(f, "{}int{}", prefix, size * 8)
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ElementType::*;

        match self {
            UInt(sz) => int_name(f, "u", *sz),
            Int(sz) => int_name(f, "", *sz),
            Float(sz) => write!(f, "float{}", sz * 8),
            Bool => write!(f, "bool"),
            Enum { size, signed: true } => int_name(f, "", *size),
            Enum { size, signed: false } => int_name(f, "u", *size),
            FixedAscii(n) | FixedUnicode(n) => write!(f, "|S{n}"),
            VarLenAscii | VarLenUnicode | VarLenArray(_) | Reference(_) => write!(f, "object"),
            Compound(fields) => {
                write!(f, "{{")?;
                for (i, (name, tp)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {tp}")?;
                }
                write!(f, "}}")
            }
            Array(tp, n) => write!(f, "({n},){tp}"),
            Opaque(sz) => write!(f, "|V{sz}"),
        }
    }
}
