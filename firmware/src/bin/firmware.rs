#![no_main]
#![no_std]

use tapcheck_firmware as _; // panicking behavior

use riscv_rt::entry;

use tapcheck_control::{hex, scenario, Driver, Harness};
use tapcheck_firmware::system::{monitor, System};

/// # Panics
///
/// Panics if the peripherals were already taken or if the monitor address
/// is not valid hexadecimal. Neither can happen with a correct build.
#[entry]
fn main() -> ! {
    let system = System::take().unwrap();

    let mut harness = Harness::new(Driver::new(system.accelerator), system.counters, system.uart);
    // The verdict reaches the operator through the printed report only.
    harness.run(&scenario::SAMPLES, scenario::WEIGHTS);

    let address = hex::decode(scenario::MONITOR_ADDRESS).unwrap();
    // SAFETY: The monitor is resident at this address and takes over
    // without expecting anything from this program.
    unsafe { monitor::jump_to(address as usize) }
}
