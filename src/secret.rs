use core::fmt::{Debug, Formatter};
use heapless::String;

/// A string parameter that must never show up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret<const N: usize>(String<N>);

impl<const N: usize> Secret<N> {
    pub fn new(value: String<N>) -> Self {
        Secret(value)
    }

    /// Borrow the secret value, e.g. to hand it to the WiFi driver.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl<const N: usize> Debug for Secret<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Secret(***)")
    }
}
