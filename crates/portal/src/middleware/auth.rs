//! Authentication extractors backed by the mock user directory.
//!
//! There is no real session, token, or network call: identity comes from a
//! fixed in-code directory, selected per-request with the `x-demo-user`
//! header (a user id) and defaulting to the demo supplier owner. Everything
//! downstream only sees [`CurrentUser`] and its permission predicates, so
//! swapping in a real session layer later touches only this module.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

use ctu_core::{CurrentUser, Email, Permission, SupplierId, UserId, UserRole};

use crate::db::seed::{DEMO_INFLUENCER_ID, DEMO_SUPPLIER_ID};

/// Header used to select a mock identity.
pub const DEMO_USER_HEADER: &str = "x-demo-user";

/// The fixed user directory.
///
/// - `u-marie` - owner of the demo supplier (the default principal)
/// - `u-lea` - demo influencer
/// - `u-admin` - platform administrator
#[must_use]
pub fn mock_users() -> Vec<CurrentUser> {
    let email = |addr: &str| {
        Email::parse(addr).unwrap_or_else(|_| {
            Email::parse("invalid@chinetonusine.com").expect("placeholder email is valid")
        })
    };

    vec![
        CurrentUser {
            id: UserId::new("u-marie"),
            name: "Marie Lefort".to_owned(),
            email: email("marie@atelier-lefort.fr"),
            role: UserRole::Supplier,
            supplier_id: Some(SupplierId::new(DEMO_SUPPLIER_ID)),
            permissions: vec![
                Permission::EditSupplierProfile,
                Permission::ManageBusinessCards,
            ],
        },
        CurrentUser {
            id: UserId::new(DEMO_INFLUENCER_ID),
            name: "Léa Moreau".to_owned(),
            email: email("lea.moreau@exemple.fr"),
            role: UserRole::Influencer,
            supplier_id: None,
            permissions: vec![Permission::ManageCollaborations],
        },
        CurrentUser {
            id: UserId::new("u-admin"),
            name: "Ops ChineTonUsine".to_owned(),
            email: email("ops@chinetonusine.com"),
            role: UserRole::Admin,
            supplier_id: None,
            permissions: Vec::new(),
        },
    ]
}

fn resolve(parts: &Parts) -> Option<CurrentUser> {
    let users = mock_users();
    match parts
        .headers
        .get(DEMO_USER_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        Some(id) => users.into_iter().find(|u| u.id.as_str() == id),
        // No header: the demo supplier owner
        None => users.into_iter().next(),
    }
}

/// Extractor that requires an authenticated user of any role.
pub struct RequireUser(pub CurrentUser);

/// Error returned when authentication is required but no identity resolves.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, "Unknown user").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve(parts).map(Self).ok_or(AuthRejection)
    }
}

/// Extractor that optionally resolves the current user.
///
/// Unlike [`RequireUser`], this never rejects; anonymous visitors (e.g., on
/// public profiles) get `None`.
pub struct OptionalUser(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A missing header still resolves to the default principal; only an
        // explicitly unknown id is treated as anonymous.
        Ok(Self(resolve(parts)))
    }
}

/// Extractor that requires a supplier-role user and yields the owned
/// supplier id alongside the user.
pub struct RequireSupplier {
    pub user: CurrentUser,
    pub supplier_id: SupplierId,
}

/// Rejection for role-gated extractors.
pub enum RoleRejection {
    Unauthorized,
    Forbidden,
}

impl IntoResponse for RoleRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Unknown user").into_response(),
            Self::Forbidden => {
                (StatusCode::FORBIDDEN, "This area requires another role").into_response()
            }
        }
    }
}

impl<S> FromRequestParts<S> for RequireSupplier
where
    S: Send + Sync,
{
    type Rejection = RoleRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = resolve(parts).ok_or(RoleRejection::Unauthorized)?;
        let supplier_id = match (&user.role, &user.supplier_id) {
            (UserRole::Supplier, Some(id)) => id.clone(),
            _ => return Err(RoleRejection::Forbidden),
        };
        Ok(Self { user, supplier_id })
    }
}

/// Extractor that requires an influencer-role user.
pub struct RequireInfluencer(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireInfluencer
where
    S: Send + Sync,
{
    type Rejection = RoleRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = resolve(parts).ok_or(RoleRejection::Unauthorized)?;
        if user.role != UserRole::Influencer {
            return Err(RoleRejection::Forbidden);
        }
        Ok(Self(user))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(v) = value {
            builder = builder.header(DEMO_USER_HEADER, v);
        }
        let (parts, ()) = builder.body(()).expect("request").into_parts();
        parts
    }

    #[test]
    fn test_default_principal_is_supplier_owner() {
        let user = resolve(&parts_with_header(None)).expect("default user");
        assert_eq!(user.role, UserRole::Supplier);
        assert_eq!(
            user.supplier_id,
            Some(SupplierId::new(DEMO_SUPPLIER_ID))
        );
    }

    #[test]
    fn test_header_selects_user() {
        let user = resolve(&parts_with_header(Some("u-lea"))).expect("lea");
        assert_eq!(user.role, UserRole::Influencer);
    }

    #[test]
    fn test_unknown_header_resolves_nobody() {
        assert!(resolve(&parts_with_header(Some("u-ghost"))).is_none());
    }
}
