//! Signal processing shared by the accelerator harness, mirroring what the
//! hardware is expected to compute.

#![cfg_attr(not(test), no_std)]

pub mod fir;
