//! Delimited list writer shared by every strategy.

use core::fmt;

use super::strategy::Entry;
use super::Render;
use crate::record::FieldVisitor;

/// Writes `open`, items separated by `", "`, then `close`.
pub(crate) struct Delimited<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    close: &'static str,
    count: usize,
}

impl<'a, 'f> Delimited<'a, 'f> {
    pub(crate) fn open(
        f: &'a mut fmt::Formatter<'f>,
        open: &'static str,
        close: &'static str,
    ) -> Result<Self, fmt::Error> {
        f.write_str(open)?;
        Ok(Self { f, close, count: 0 })
    }

    fn separate(&mut self) -> fmt::Result {
        if self.count > 0 {
            self.f.write_str(", ")?;
        }
        self.count += 1;
        Ok(())
    }

    pub(crate) fn item<T: Render + ?Sized>(&mut self, item: &T) -> fmt::Result {
        self.separate()?;
        item.render(self.f)
    }

    pub(crate) fn entry<E: Entry + ?Sized>(&mut self, entry: &E) -> fmt::Result {
        self.separate()?;
        entry.write_entry(self.f)
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn close(self) -> fmt::Result {
        self.f.write_str(self.close)
    }
}

impl FieldVisitor for Delimited<'_, '_> {
    #[inline]
    fn field<F: Render + ?Sized>(&mut self, value: &F) -> fmt::Result {
        self.item(value)
    }
}
