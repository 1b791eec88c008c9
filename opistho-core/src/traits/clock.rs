//! Monotonic millisecond time source

/// Monotonic millisecond clock
///
/// The returned counter wraps around at `u32::MAX` (roughly every 49.7
/// days of uptime). All cadence logic in this crate uses wrapping
/// subtraction (`now.wrapping_sub(last) >= interval`), which stays correct
/// across the rollover; consumers must never compare instants with signed
/// arithmetic.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch (typically boot)
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        T::now_ms(self)
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_ms(&self) -> u32 {
        T::now_ms(self)
    }
}
