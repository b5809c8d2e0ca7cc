/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Supplies a presentation-ready label for logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}
