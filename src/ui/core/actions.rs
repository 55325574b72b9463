use crate::selection::{SelectionSet, SelectionTarget};
use crate::ui::components::contact_popup::ContactSubmission;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Selection setter relayed from a dropdown to the popup that owns the set
    SetSelection {
        target: SelectionTarget,
        values: SelectionSet,
    },

    // Popup outcomes, consumed by the host
    Next(ContactSubmission),
    Close,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
