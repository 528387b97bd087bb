#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Messages sent by the number line widget to the application.
///
/// Route them back into [`NumberLine::update`](crate::NumberLine::update).
pub enum NumberLineMessage {
    /// Collapse or expand the legend.
    ToggleLegend,
    /// Hide or show a point group by its index.
    ToggleGroupVisibility(usize),
}
