//! Saver trait — the contract a screenshot saver must expose.

use async_trait::async_trait;
use std::path::Path;

use crate::Result;

/// Contract for a component that persists page snapshots locally.
///
/// A saver writes up to two artifacts per [`save`](Saver::save) call: an HTML
/// snapshot and an image snapshot. The query methods report which artifacts
/// the last call actually wrote and where they landed on disk.
#[async_trait]
pub trait Saver: Send {
    /// Capture and persist the snapshot artifacts locally.
    async fn save(&mut self) -> Result<()>;

    /// Whether the last save wrote an HTML snapshot.
    fn html_saved(&self) -> bool;

    /// Local path of the HTML snapshot.
    ///
    /// Only meaningful when [`html_saved`](Saver::html_saved) returned true;
    /// callers must not query it otherwise.
    fn html_path(&self) -> &Path;

    /// Whether the last save wrote an image snapshot.
    fn screenshot_saved(&self) -> bool;

    /// Local path of the image snapshot.
    ///
    /// Only meaningful when [`screenshot_saved`](Saver::screenshot_saved)
    /// returned true.
    fn screenshot_path(&self) -> &Path;
}
