//! Shared line-oriented output channel

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Stdout, Write};
use std::rc::Rc;

/// Cheaply cloneable handle to a writer. Every clone writes to the same
/// underlying sink, so processor and notifier lines interleave in order.
#[derive(Debug)]
pub struct Console<W: Write> {
    inner: Rc<RefCell<W>>,
}

impl<W: Write> Clone for Console<W> {
    fn clone(&self) -> Self { Self { inner: Rc::clone(&self.inner) } }
}

impl Console<Stdout> {
    pub fn stdout() -> Self { Self::new(io::stdout()) }
}

impl Console<Vec<u8>> {
    /// Everything written so far, for in-memory consoles.
    pub fn contents(&self) -> String { String::from_utf8_lossy(&self.inner.borrow()).into_owned() }
}

impl<W: Write> Console<W> {
    pub fn new(writer: W) -> Self { Self { inner: Rc::new(RefCell::new(writer)) } }

    pub fn line(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut writer = self.inner.borrow_mut();
        writer.write_fmt(args)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}
