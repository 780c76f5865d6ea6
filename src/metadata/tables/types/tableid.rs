//! Identifiers of the ECMA-335 metadata tables.
//!
//! A column whose logical size class is [`crate::metadata::tables::ColumnSize::Table`]
//! stores a row index into one of these tables. The identifier is descriptive only; the
//! width of such a column is resolved by the owning table layout from the target table's
//! row count.
//!
//! ## References
//!
//! - [ECMA-335 Standard](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Partition II, Section 22
//! - [Portable PDB v1.0](https://github.com/dotnet/runtime/blob/main/docs/design/specs/PortablePdb-Metadata.md) - Tables 0x30 - 0x37

use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// Identifier of a metadata table, using the numeric values of the `#~` stream.
#[derive(Clone, Copy, PartialEq, Debug, EnumIter, EnumCount, Display, Eq, Hash)]
#[repr(u8)]
pub enum TableId {
    /// `Module` table (0x00), the current module
    Module = 0x00,
    /// `TypeRef` table (0x01), references to types in other modules
    TypeRef = 0x01,
    /// `TypeDef` table (0x02), types defined in this module
    TypeDef = 0x02,
    /// `FieldPtr` table (0x03), indirection used by uncompressed `#-` streams
    FieldPtr = 0x03,
    /// `Field` table (0x04)
    Field = 0x04,
    /// `MethodPtr` table (0x05), indirection used by uncompressed `#-` streams
    MethodPtr = 0x05,
    /// `MethodDef` table (0x06)
    MethodDef = 0x06,
    /// `ParamPtr` table (0x07), indirection used by uncompressed `#-` streams
    ParamPtr = 0x07,
    /// `Param` table (0x08)
    Param = 0x08,
    /// `InterfaceImpl` table (0x09)
    InterfaceImpl = 0x09,
    /// `MemberRef` table (0x0A)
    MemberRef = 0x0A,
    /// `Constant` table (0x0B)
    Constant = 0x0B,
    /// `CustomAttribute` table (0x0C)
    CustomAttribute = 0x0C,
    /// `FieldMarshal` table (0x0D)
    FieldMarshal = 0x0D,
    /// `DeclSecurity` table (0x0E)
    DeclSecurity = 0x0E,
    /// `ClassLayout` table (0x0F)
    ClassLayout = 0x0F,
    /// `FieldLayout` table (0x10)
    FieldLayout = 0x10,
    /// `StandAloneSig` table (0x11)
    StandAloneSig = 0x11,
    /// `EventMap` table (0x12)
    EventMap = 0x12,
    /// `EventPtr` table (0x13), indirection used by uncompressed `#-` streams
    EventPtr = 0x13,
    /// `Event` table (0x14)
    Event = 0x14,
    /// `PropertyMap` table (0x15)
    PropertyMap = 0x15,
    /// `PropertyPtr` table (0x16), indirection used by uncompressed `#-` streams
    PropertyPtr = 0x16,
    /// `Property` table (0x17)
    Property = 0x17,
    /// `MethodSemantics` table (0x18)
    MethodSemantics = 0x18,
    /// `MethodImpl` table (0x19)
    MethodImpl = 0x19,
    /// `ModuleRef` table (0x1A)
    ModuleRef = 0x1A,
    /// `TypeSpec` table (0x1B)
    TypeSpec = 0x1B,
    /// `ImplMap` table (0x1C)
    ImplMap = 0x1C,
    /// `FieldRVA` table (0x1D)
    FieldRVA = 0x1D,
    /// `EncLog` table (0x1E), Edit-and-Continue log
    EncLog = 0x1E,
    /// `EncMap` table (0x1F), Edit-and-Continue token map
    EncMap = 0x1F,
    /// `Assembly` table (0x20)
    Assembly = 0x20,
    /// `AssemblyProcessor` table (0x21)
    AssemblyProcessor = 0x21,
    /// `AssemblyOS` table (0x22)
    AssemblyOS = 0x22,
    /// `AssemblyRef` table (0x23)
    AssemblyRef = 0x23,
    /// `AssemblyRefProcessor` table (0x24)
    AssemblyRefProcessor = 0x24,
    /// `AssemblyRefOS` table (0x25)
    AssemblyRefOS = 0x25,
    /// `File` table (0x26)
    File = 0x26,
    /// `ExportedType` table (0x27)
    ExportedType = 0x27,
    /// `ManifestResource` table (0x28)
    ManifestResource = 0x28,
    /// `NestedClass` table (0x29)
    NestedClass = 0x29,
    /// `GenericParam` table (0x2A)
    GenericParam = 0x2A,
    /// `MethodSpec` table (0x2B)
    MethodSpec = 0x2B,
    /// `GenericParamConstraint` table (0x2C)
    GenericParamConstraint = 0x2C,
    /// `Document` table (0x30), Portable PDB
    Document = 0x30,
    /// `MethodDebugInformation` table (0x31), Portable PDB
    MethodDebugInformation = 0x31,
    /// `LocalScope` table (0x32), Portable PDB
    LocalScope = 0x32,
    /// `LocalVariable` table (0x33), Portable PDB
    LocalVariable = 0x33,
    /// `LocalConstant` table (0x34), Portable PDB
    LocalConstant = 0x34,
    /// `ImportScope` table (0x35), Portable PDB
    ImportScope = 0x35,
    /// `StateMachineMethod` table (0x36), Portable PDB
    StateMachineMethod = 0x36,
    /// `CustomDebugInformation` table (0x37), Portable PDB
    CustomDebugInformation = 0x37,
}

impl TableId {
    /// Returns the table identifier for a raw table number, if it names a known table.
    ///
    /// # Arguments
    /// * `value` - The table number as stored in the `valid` bit vector and in tokens
    #[must_use]
    pub fn from_u8(value: u8) -> Option<TableId> {
        TableId::iter().find(|table| *table as u8 == value)
    }

    /// Returns the raw table number.
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns true for the Portable PDB tables (0x30 - 0x37).
    #[must_use]
    pub fn is_pdb(self) -> bool {
        self as u8 >= TableId::Document as u8
    }
}

#[cfg(test)]
mod tests {
    use strum::EnumCount;

    use super::*;

    #[test]
    fn raw_values_round_trip() {
        for table in TableId::iter() {
            assert_eq!(TableId::from_u8(table.value()), Some(table));
        }
        assert_eq!(TableId::COUNT, 53);
    }

    #[test]
    fn gaps_are_rejected() {
        assert_eq!(TableId::from_u8(0x2D), None);
        assert_eq!(TableId::from_u8(0x2F), None);
        assert_eq!(TableId::from_u8(0x38), None);
        assert_eq!(TableId::from_u8(0xFF), None);
    }

    #[test]
    fn pdb_tables() {
        assert!(!TableId::GenericParamConstraint.is_pdb());
        assert!(TableId::Document.is_pdb());
        assert!(TableId::CustomDebugInformation.is_pdb());
    }

    #[test]
    fn display() {
        assert_eq!(TableId::TypeDef.to_string(), "TypeDef");
        assert_eq!(TableId::FieldRVA.to_string(), "FieldRVA");
    }
}
