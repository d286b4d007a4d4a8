use super::*;

#[test]
fn delete_label_reflects_pending_delete() {
    assert_eq!(delete_label(true), "Excluindo...");
    assert_eq!(delete_label(false), "Excluir");
}

#[cfg(not(feature = "csr"))]
#[test]
fn confirm_declines_outside_the_browser() {
    assert!(!confirm("Tem certeza?"));
}
