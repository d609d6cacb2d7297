//! Tenant authorization.
//!
//! [`OwnershipPolicy`] admits a principal to its own restaurant, and admits
//! unscoped principals (tenant 0) to every restaurant. [`UncheckedPolicy`]
//! admits everyone and backs the `/order-bac` listing; it must stay reachable.

use crate::{AuthError, Principal, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub trait TenantPolicy: Send + Sync {
    fn allows(&self, principal: &Principal, resource_tenant: i64) -> bool;

    #[track_caller]
    fn authorize(&self, principal: &Principal, resource_tenant: i64) -> AuthErrorResult<()> {
        if self.allows(principal, resource_tenant) {
            return Ok(());
        }

        Err(AuthError::Forbidden {
            principal_tenant: principal.tenant_id,
            resource_tenant,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipPolicy;

impl TenantPolicy for OwnershipPolicy {
    fn allows(&self, principal: &Principal, resource_tenant: i64) -> bool {
        !principal.is_scoped() || principal.tenant_id == resource_tenant
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UncheckedPolicy;

impl TenantPolicy for UncheckedPolicy {
    fn allows(&self, _principal: &Principal, _resource_tenant: i64) -> bool {
        true
    }
}
