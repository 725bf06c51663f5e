macro_rules! info {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)+);
    );
}

// Not named `warn`, that would clash with the built-in lint attribute.
macro_rules! warning {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)+);
    );
}

pub(crate) use info;
pub(crate) use warning;

#[cfg(test)]
mod tests {
    use crate::log;

    #[test]
    fn both_levels_accept_format_arguments() {
        let index = 3_usize;
        let value = 0xdead_u32;
        log::info!("Running on hardware");
        log::warning!("Mismatch at index={}: hardware={}", index, value);
        assert_eq!(index, 3);
    }
}
