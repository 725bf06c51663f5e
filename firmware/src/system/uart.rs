use core::convert::Infallible;

use volatile_register::{RO, WO};

use tapcheck_control::Console;

use super::memory_map;

const TX_READY: u32 = 0b01;

#[repr(C)]
pub struct RegisterBlock {
    pub control: RO<u32>,
    pub rx_data: RO<u32>,
    pub tx_data: WO<u32>,
}

/// Transmitting half of the UART connected to the monitor's terminal.
pub struct Uart {
    block: &'static mut RegisterBlock,
}

impl Uart {
    /// # Safety
    ///
    /// There must be no other handle to the UART.
    pub(crate) unsafe fn new() -> Self {
        Self {
            block: &mut *(memory_map::UART as *mut RegisterBlock),
        }
    }

    /// Send a byte if the transmitter is free.
    ///
    /// # Errors
    ///
    /// Returns `WouldBlock` while the previous byte is still being sent.
    pub fn transmit(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.block.control.read() & TX_READY == 0 {
            return Err(nb::Error::WouldBlock);
        }
        // SAFETY: Writes to the UART have no effect on memory.
        unsafe { self.block.tx_data.write(u32::from(byte)) };
        Ok(())
    }
}

impl Console for Uart {
    fn write_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            nb::block!(self.transmit(*byte)).unwrap_or_else(|never| match never {});
        }
    }
}
