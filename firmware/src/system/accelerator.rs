use core::mem::offset_of;

use volatile_register::{RO, WO};

use tapcheck_control::registers::{Register, Registers, BLOCK_SIZE, DATA_OUT_OFFSET};

use super::memory_map;

#[repr(C)]
pub struct RegisterBlock {
    pub data_in: WO<u32>,
    pub data_out: RO<u32>,
    pub clear: WO<u32>,
    pub weight_0: WO<u32>,
    pub weight_1: WO<u32>,
    pub weight_2: WO<u32>,
}

const _: () = assert!(core::mem::size_of::<RegisterBlock>() == BLOCK_SIZE);
const _: () = assert!(offset_of!(RegisterBlock, data_in) == Register::DataIn.offset());
const _: () = assert!(offset_of!(RegisterBlock, data_out) == DATA_OUT_OFFSET);
const _: () = assert!(offset_of!(RegisterBlock, clear) == Register::Clear.offset());
const _: () = assert!(offset_of!(RegisterBlock, weight_0) == Register::Weight0.offset());
const _: () = assert!(offset_of!(RegisterBlock, weight_1) == Register::Weight1.offset());
const _: () = assert!(offset_of!(RegisterBlock, weight_2) == Register::Weight2.offset());

/// Owned handle of the accelerator's register block.
pub struct Accelerator {
    block: &'static mut RegisterBlock,
}

impl Accelerator {
    /// # Safety
    ///
    /// There must be no other handle to the register block.
    pub(crate) unsafe fn new() -> Self {
        Self {
            block: &mut *(memory_map::ACCELERATOR as *mut RegisterBlock),
        }
    }
}

impl Registers for Accelerator {
    fn write(&mut self, register: Register, value: u32) {
        let target = match register {
            Register::DataIn => &self.block.data_in,
            Register::Clear => &self.block.clear,
            Register::Weight0 => &self.block.weight_0,
            Register::Weight1 => &self.block.weight_1,
            Register::Weight2 => &self.block.weight_2,
        };
        // SAFETY: Writes to the accelerator have no effect on memory.
        unsafe { target.write(value) };
    }

    fn read_data_out(&mut self) -> u32 {
        self.block.data_out.read()
    }
}
