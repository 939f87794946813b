//! Writing values the way the snippets show them.

use std::fmt::Debug;
use std::io::{self, Write};

/// Extension trait writing a value's `Debug` rendering and a newline.
///
/// # Examples
///
/// ```rust
/// use jargon::snippets::Print;
///
/// let mut out = Vec::new();
/// vec![1, 2, 3].print(&mut out).unwrap();
/// "121".to_string().print(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "[1, 2, 3]\n\"121\"\n");
/// ```
pub trait Print {
    /// Writes `self` to `out`.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying writer.
    fn print(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl<T: Debug + ?Sized> Print for T {
    fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{self:?}")
    }
}
