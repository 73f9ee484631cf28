use hotwire_shared::KeyTransition;

/// The UI layer's view of key function transitions.
///
/// Transitions of `can_focus` bindings are offered to the UI before any
/// simulation handler sees them.
pub trait UiBoundary {
    /// Returns true if the UI consumed the transition exclusively, in which
    /// case no client handler runs and nothing is forwarded to the Server
    fn offer(&mut self, transition: &KeyTransition) -> bool;

    /// Called for every transition, consumed or not
    fn state_changed(&mut self, _transition: &KeyTransition) {}
}
