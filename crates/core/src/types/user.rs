//! Platform users, roles, and permission predicates.
//!
//! The permission model is deliberately small: a user carries a role, an
//! optional owned supplier, and an explicit permission set. Every predicate
//! is a plain equality/membership check so it can be evaluated anywhere
//! (route extractors, templates, tests) without I/O.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::{SupplierId, UserId};

/// Role of an authenticated platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Platform operator with access to the admin panel.
    Admin,
    /// Manufacturer/vendor account; owns products, orders, and business cards.
    Supplier,
    /// Influencer account; runs collaborations and referral campaigns.
    Influencer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Supplier => write!(f, "supplier"),
            Self::Influencer => write!(f, "influencer"),
        }
    }
}

/// Fine-grained permissions attached to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ManageSuppliers,
    ManageOrders,
    ManageDocuments,
    ModerateContent,
    ViewReports,
    EditSupplierProfile,
    ManageBusinessCards,
    ManageCollaborations,
}

/// The authenticated user attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Platform role.
    pub role: UserRole,
    /// Supplier owned by this user, when the role is [`UserRole::Supplier`].
    pub supplier_id: Option<SupplierId>,
    /// Explicit permission grants.
    pub permissions: Vec<Permission>,
}

impl CurrentUser {
    /// Whether the user holds the given permission.
    ///
    /// Admins implicitly hold every permission.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.role == UserRole::Admin || self.permissions.contains(&permission)
    }

    /// Whether the user is the owning supplier account for `supplier_id`.
    #[must_use]
    pub fn is_supplier_owner(&self, supplier_id: &SupplierId) -> bool {
        self.role == UserRole::Supplier && self.supplier_id.as_ref() == Some(supplier_id)
    }

    /// Whether the user may edit the given supplier's public profile.
    #[must_use]
    pub fn can_edit_supplier_profile(&self, supplier_id: &SupplierId) -> bool {
        self.is_supplier_owner(supplier_id) && self.has_permission(Permission::EditSupplierProfile)
            || self.role == UserRole::Admin
    }

    /// Whether the user may create, edit, or delete the given supplier's
    /// business cards.
    #[must_use]
    pub fn can_manage_business_cards(&self, supplier_id: &SupplierId) -> bool {
        self.is_supplier_owner(supplier_id) && self.has_permission(Permission::ManageBusinessCards)
            || self.role == UserRole::Admin
    }

    /// Whether the user is a platform administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier_user() -> CurrentUser {
        CurrentUser {
            id: UserId::new("u-1"),
            name: "Marie Lefort".to_owned(),
            email: Email::parse("marie@atelier-lefort.fr").expect("valid email"),
            role: UserRole::Supplier,
            supplier_id: Some(SupplierId::new("sup-atelier-lefort")),
            permissions: vec![
                Permission::EditSupplierProfile,
                Permission::ManageBusinessCards,
            ],
        }
    }

    #[test]
    fn test_supplier_owner_predicate() {
        let user = supplier_user();
        assert!(user.is_supplier_owner(&SupplierId::new("sup-atelier-lefort")));
        assert!(!user.is_supplier_owner(&SupplierId::new("sup-other")));
    }

    #[test]
    fn test_card_management_requires_ownership_and_grant() {
        let mut user = supplier_user();
        assert!(user.can_manage_business_cards(&SupplierId::new("sup-atelier-lefort")));
        assert!(!user.can_manage_business_cards(&SupplierId::new("sup-other")));

        user.permissions.clear();
        assert!(!user.can_manage_business_cards(&SupplierId::new("sup-atelier-lefort")));
    }

    #[test]
    fn test_admin_implicitly_holds_permissions() {
        let admin = CurrentUser {
            id: UserId::new("u-admin"),
            name: "Ops".to_owned(),
            email: Email::parse("ops@chinetonusine.com").expect("valid email"),
            role: UserRole::Admin,
            supplier_id: None,
            permissions: Vec::new(),
        };
        assert!(admin.has_permission(Permission::ModerateContent));
        assert!(admin.can_manage_business_cards(&SupplierId::new("sup-any")));
        assert!(!admin.is_supplier_owner(&SupplierId::new("sup-any")));
    }
}
