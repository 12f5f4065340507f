//! The `GraphSink` trait implemented by all persistence backends.

use std::path::{Component, Path, PathBuf};

use crate::{OutputError, OutputResult, SerializedGraph};

/// Durable destination for a [`SerializedGraph`].
///
/// A sink is handed each graph exactly once.  Failures are returned as-is;
/// sinks do not retry.
pub trait GraphSink {
    /// Persist `graph` under `destination` and return where it landed.
    fn write(&mut self, graph: &SerializedGraph, destination: &str) -> OutputResult<PathBuf>;
}

impl<S: GraphSink + ?Sized> GraphSink for &mut S {
    fn write(&mut self, graph: &SerializedGraph, destination: &str) -> OutputResult<PathBuf> {
        (**self).write(graph, destination)
    }
}

impl<S: GraphSink + ?Sized> GraphSink for Box<S> {
    fn write(&mut self, graph: &SerializedGraph, destination: &str) -> OutputResult<PathBuf> {
        (**self).write(graph, destination)
    }
}

/// Reject destinations that would escape the sink's directory or name
/// nothing at all.
pub(crate) fn check_destination(destination: &str) -> OutputResult<()> {
    let escapes = Path::new(destination)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if destination.trim().is_empty() || escapes {
        return Err(OutputError::Destination(destination.to_owned()));
    }
    Ok(())
}
