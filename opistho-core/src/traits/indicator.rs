//! Reverse-assist indicator output

/// Binary output line driving the reverse-assist indicator
pub trait LedOutput {
    /// Drive the line high (true) or low (false)
    fn set_level(&mut self, high: bool);
}

impl<T: LedOutput + ?Sized> LedOutput for &mut T {
    fn set_level(&mut self, high: bool) {
        T::set_level(self, high)
    }
}
