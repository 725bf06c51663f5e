//! Register map of the filter accelerator.
//!
//! All registers are 32 bits wide and laid out as consecutive words from the
//! accelerator's base address. Only the output register can be read, all
//! the others accept writes only.

/// Offset of the register holding the result for the latest input.
pub const DATA_OUT_OFFSET: usize = 0x4;

/// Size of the whole register block in bytes.
pub const BLOCK_SIZE: usize = 0x18;

/// Writable registers of the accelerator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Input sample. Writing it starts the computation.
    DataIn,
    /// Any write clears the internal history.
    Clear,
    Weight0,
    Weight1,
    Weight2,
}

impl Register {
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::DataIn => 0x0,
            Self::Clear => 0x8,
            Self::Weight0 => 0xC,
            Self::Weight1 => 0x10,
            Self::Weight2 => 0x14,
        }
    }
}

/// Access to the accelerator's register block.
///
/// Implementations must perform every access immediately and in the order
/// it was issued, without caching or merging writes.
pub trait Registers {
    fn write(&mut self, register: Register, value: u32);
    fn read_data_out(&mut self) -> u32;
}
