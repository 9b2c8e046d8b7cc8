/// Sink for composed display pages.
///
/// A renderer positions the write cursor at the start of a page and then
/// streams that page's column bytes, one byte per column with the top pixel
/// in the least significant bit.
pub trait PageTransport {
    type Error;

    /// Move the write cursor to `column` of `page`.
    fn set_position(&mut self, page: u8, column: u8) -> Result<(), Self::Error>;

    /// Write column bytes at the cursor, advancing it.
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: PageTransport + ?Sized> PageTransport for &mut T {
    type Error = T::Error;

    fn set_position(&mut self, page: u8, column: u8) -> Result<(), Self::Error> {
        (**self).set_position(page, column)
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(data)
    }
}
