//! Authentication extractor for the admin panel.
//!
//! Identity is mocked the same way as on the portal: a fixed directory,
//! selected per-request with the `x-demo-user` header and defaulting to the
//! demo operator. Only admin-role users pass; everything downstream sees a
//! plain [`CurrentUser`].

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

use ctu_core::{CurrentUser, Email, UserId, UserRole};

/// Header used to select a mock identity.
pub const DEMO_USER_HEADER: &str = "x-demo-user";

/// The fixed operator directory.
#[must_use]
pub fn mock_admins() -> Vec<CurrentUser> {
    let email = |addr: &str| {
        Email::parse(addr).unwrap_or_else(|_| {
            Email::parse("invalid@chinetonusine.com").expect("placeholder email is valid")
        })
    };

    vec![
        CurrentUser {
            id: UserId::new("u-admin"),
            name: "Ops ChineTonUsine".to_owned(),
            email: email("ops@chinetonusine.com"),
            role: UserRole::Admin,
            supplier_id: None,
            permissions: Vec::new(),
        },
        CurrentUser {
            id: UserId::new("u-admin-nadia"),
            name: "Nadia Benali".to_owned(),
            email: email("nadia@chinetonusine.com"),
            role: UserRole::Admin,
            supplier_id: None,
            permissions: Vec::new(),
        },
    ]
}

/// Extractor that requires an admin-role user.
pub struct RequireAdmin(pub CurrentUser);

/// Error returned when admin authentication fails.
pub enum AdminAuthRejection {
    /// No identity resolves from the request.
    Unauthorized,
    /// The identity exists but is not an admin.
    Forbidden,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Unknown user").into_response(),
            Self::Forbidden => {
                (StatusCode::FORBIDDEN, "Admin access required").into_response()
            }
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admins = mock_admins();
        let user = match parts
            .headers
            .get(DEMO_USER_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            Some(id) => admins
                .into_iter()
                .find(|u| u.id.as_str() == id)
                .ok_or(AdminAuthRejection::Unauthorized)?,
            // No header: the default operator
            None => admins
                .into_iter()
                .next()
                .ok_or(AdminAuthRejection::Unauthorized)?,
        };

        if user.role != UserRole::Admin {
            return Err(AdminAuthRejection::Forbidden);
        }
        Ok(Self(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_is_admin_only() {
        assert!(
            mock_admins()
                .iter()
                .all(|u| u.role == UserRole::Admin)
        );
    }
}
