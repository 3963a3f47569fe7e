use laudo_auth::authorizer::{Authorizer, RoleAuthorizer};
use laudo_auth::error::AuthError;
use laudo_auth::roles::{ADMIN_ROLE, DOCTOR_ROLE, Permission, USER_ROLE, default_roles};

#[test]
fn admin_has_every_permission() {
    let auth = RoleAuthorizer::for_roles(default_roles(), &[ADMIN_ROLE]).unwrap();
    for permission in Permission::ALL {
        assert!(auth.has_permission(permission), "{permission}");
    }
}

#[test]
fn doctor_may_write_but_not_delete() {
    let auth = RoleAuthorizer::for_roles(default_roles(), &[DOCTOR_ROLE]).unwrap();
    assert!(auth.require(Permission::CreateReports).is_ok());
    assert!(auth.require(Permission::EditReports).is_ok());
    assert!(matches!(
        auth.require(Permission::DeleteReports),
        Err(AuthError::Forbidden {
            permission: Permission::DeleteReports
        })
    ));
    assert!(!auth.has_permission(Permission::ManageUsers));
}

#[test]
fn user_may_only_view() {
    let auth = RoleAuthorizer::for_roles(default_roles(), &[USER_ROLE]).unwrap();
    let granted: Vec<Permission> = auth.permissions().collect();
    assert_eq!(granted, vec![Permission::ViewReports]);
}

#[test]
fn roles_combine_as_union() {
    let auth = RoleAuthorizer::for_roles(default_roles(), &[USER_ROLE, DOCTOR_ROLE]).unwrap();
    assert_eq!(auth.permissions().count(), 3);
}

#[test]
fn no_roles_grant_nothing() {
    let auth = RoleAuthorizer::for_roles::<&str>(default_roles(), &[]).unwrap();
    assert!(!auth.has_permission(Permission::ViewReports));
}

#[test]
fn unknown_role_is_rejected() {
    let err = RoleAuthorizer::for_roles(default_roles(), &["role-guest"]).unwrap_err();
    assert!(matches!(err, AuthError::UnknownRole(id) if id == "role-guest"));
}

#[test]
fn permissions_use_snake_case_names() {
    assert_eq!("delete_reports".parse::<Permission>().unwrap(), Permission::DeleteReports);
    assert!("delete".parse::<Permission>().is_err());
    assert_eq!(
        serde_json::to_string(&Permission::ManageSettings).unwrap(),
        "\"manage_settings\""
    );
}
