//! Popularity statistics
//!
//! Pure projection of the cached artworks into chart-ready aggregates,
//! rebuilt wholesale on every store change, plus explicit ownership of the
//! rendered chart instance so the previous one is released before the next
//! is created.

use crate::artwork::Artwork;
use serde::Serialize;

/// Chart-ready aggregate: one label and one value per artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

/// Project the artworks into labels (titles) and values (likes)
pub fn project(artworks: &[Artwork]) -> ChartData {
    ChartData {
        labels: artworks.iter().map(|a| a.title.clone()).collect(),
        values: artworks.iter().map(|a| a.likes).collect(),
    }
}

/// External charting collaborator
///
/// `render` turns a projection into a live chart instance; dropping the
/// returned handle releases that instance.
pub trait ChartRenderer {
    type Handle;

    fn render(&self, data: &ChartData) -> Self::Handle;
}

/// Owns the single live chart instance
pub struct ChartController<R: ChartRenderer> {
    renderer: R,
    handle: Option<R::Handle>,
}

impl<R: ChartRenderer> ChartController<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            handle: None,
        }
    }

    /// Rebuild the chart from the current artworks
    ///
    /// The previous instance is released before the new one is created.
    pub fn update(&mut self, artworks: &[Artwork]) -> ChartData {
        let data = project(artworks);
        self.handle = None;
        self.handle = Some(self.renderer.render(&data));
        data
    }

    pub fn has_chart(&self) -> bool {
        self.handle.is_some()
    }
}
