//! Renderers turn a parsed item sequence into some output format.

mod html;
mod outline;

pub use html::{HtmlRenderer, HtmlStyling};
pub use outline::{OutlineRenderer, OutlineStyling};

use crate::item::MarkDownItem;

pub trait Renderer {
    /// Presentation options for one render call
    type Styling;
    type Output;

    fn render(&self, items: &[MarkDownItem], styling: &Self::Styling) -> Self::Output;
}
