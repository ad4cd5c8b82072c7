//! DDC/EDID contract.

/// EDID access over the DDC channel.
pub trait Ddc {
    /// Read the 16-bit HDMI physical address from the downstream EDID.
    ///
    /// Returns `0x0000` if no address could be read.
    fn physical_address(&mut self) -> impl core::future::Future<Output = u16>;
}

impl<T: Ddc> Ddc for &mut T {
    fn physical_address(&mut self) -> impl core::future::Future<Output = u16> {
        (**self).physical_address()
    }
}
