//! Native browser dialogs and the delete-row affordances built on them.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Ask the user to confirm a destructive action. Outside the browser nothing
/// can answer, so the action is treated as declined.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Label for a row's delete button.
pub fn delete_label(deleting: bool) -> &'static str {
    if deleting { "Excluindo..." } else { "Excluir" }
}
