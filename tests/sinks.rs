#![cfg(feature = "std")]

use std::io;

use container_view::{render_io, render_to, to_view_string, view};
use pretty_assertions::assert_eq;

struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_render_io_returns_sink() {
    let mut out: Vec<u8> = Vec::new();
    render_io(&vec![1, 2], &mut out)
        .and_then(|sink| render_io(&(3, 'x'), sink))
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[1, 2](3, x)");
}

#[test]
fn test_render_io_propagates_sink_error() {
    let err = render_io(&[1, 2, 3], &mut FailingWriter).err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_render_to_string() {
    let mut out = String::from("values: ");
    render_to(&[10, 20], &mut out).unwrap();
    assert_eq!(out, "values: [10, 20]");
}

#[test]
fn test_to_view_string_and_format() {
    let nested = vec![vec![0, 1, 2], vec![0, 1], vec![0]];
    assert_eq!(to_view_string(&nested), "[[0, 1, 2], [0, 1], [0]]");
    assert_eq!(format!("nested = {}", view(&nested)), "nested = [[0, 1, 2], [0, 1], [0]]");
}
