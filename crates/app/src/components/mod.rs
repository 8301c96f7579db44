pub mod insight_panel;

pub use insight_panel::InsightPanel;
