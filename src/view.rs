//! # Layer 4: Rendering Entry Points
//!
//! A rendering request is a borrowed value plus a sink. [`View`] carries the
//! borrow and implements `Display`, so any sink that accepts `format_args!`
//! works: `String`, `Formatter`, `io::Write` handles.
//!
//! Sink errors pass through untouched.

use core::fmt;

use crate::dispatch::Render;

/// A borrowed value, displayed through its shape strategy.
pub struct View<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> View<'a, T> {
    pub fn new(value: &'a T) -> Self {
        View(value)
    }

    /// The borrowed value.
    pub fn get(&self) -> &'a T {
        self.0
    }
}

impl<T: ?Sized> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for View<'_, T> {}

impl<T: Render + ?Sized> fmt::Display for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "tracing")]
        {
            let shape = T::SHAPE;
            tracing::trace!(type_name = core::any::type_name::<T>(), %shape, "render");
        }
        self.0.render(f)
    }
}

impl<T: Render + ?Sized> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Borrow `value` for rendering.
pub fn view<T: Render + ?Sized>(value: &T) -> View<'_, T> {
    View(value)
}

/// `.view()` on every renderable type.
pub trait ViewExt: Render {
    fn view(&self) -> View<'_, Self> {
        View(self)
    }
}

impl<T: Render + ?Sized> ViewExt for T {}

/// Render `value` into a `fmt::Write` sink and hand the sink back.
pub fn render_to<'w, T, W>(value: &T, sink: &'w mut W) -> Result<&'w mut W, fmt::Error>
where
    T: Render + ?Sized,
    W: fmt::Write,
{
    write!(sink, "{}", View(value))?;
    Ok(sink)
}

/// Render `value` into an `io::Write` sink and hand the sink back.
///
/// The sink's `io::Error` is returned as is.
#[cfg(feature = "std")]
pub fn render_io<'w, T, W>(value: &T, sink: &'w mut W) -> std::io::Result<&'w mut W>
where
    T: Render + ?Sized,
    W: std::io::Write,
{
    write!(sink, "{}", View(value))?;
    Ok(sink)
}

/// Render `value` into a new `String`.
#[cfg(feature = "alloc")]
pub fn to_view_string<T: Render + ?Sized>(value: &T) -> alloc::string::String {
    use alloc::string::ToString;

    View(value).to_string()
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::string::String;

    struct Refuse;

    impl fmt::Write for Refuse {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_render_to_returns_sink() {
        let mut out = String::new();
        render_to(&[1, 2], &mut out).and_then(|sink| render_to(&(3, 4), sink)).unwrap();
        assert_eq!(out, "[1, 2](3, 4)");
    }

    #[test]
    fn test_sink_failure_propagates() {
        assert_eq!(render_to(&[1, 2, 3], &mut Refuse).err(), Some(fmt::Error));
    }

    #[test]
    fn test_view_debug_matches_display() {
        let value = [(1, 'a')];
        assert_eq!(alloc::format!("{:?}", view(&value)), "[(1, a)]");
    }
}
