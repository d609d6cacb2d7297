/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: i64,
    /// Restaurant recorded on the account; 0 when the account is unlinked
    pub tenant_id: i64,
}

impl Principal {
    /// Unscoped principals are not tied to any restaurant.
    pub fn is_scoped(&self) -> bool {
        self.tenant_id != 0
    }
}
