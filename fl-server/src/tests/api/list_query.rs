use crate::{BearerClaims, ListQuery};

use fl_auth::Claims;
use fl_store::QueryScope;

fn caller(user_id: i64, username: &str, position: &str) -> BearerClaims {
    BearerClaims {
        user_id,
        claims: Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            position: position.to_string(),
            exp: 0,
            iat: 0,
        },
    }
}

#[test]
fn test_default_scope_is_callers_own_records() {
    let query = ListQuery::default().to_record_query(&caller(1, "juan_perez", "Driver"), None);

    match query.scope {
        QueryScope::Owner { user_id, username } => {
            assert_eq!(user_id, 1);
            assert_eq!(username, "juan_perez");
        }
        _ => panic!("Expected owner scope"),
    }
}

#[test]
fn test_user_param_is_ignored_for_regular_callers() {
    let params = ListQuery {
        user: Some("maria_garcia".to_string()),
        ..ListQuery::default()
    };

    let query = params.to_record_query(&caller(1, "juan_perez", "Driver"), None);

    assert!(matches!(query.scope, QueryScope::Owner { .. }));
}

#[test]
fn test_user_param_widens_scope_for_elevated_callers() {
    let params = ListQuery {
        user: Some("maria_garcia".to_string()),
        ..ListQuery::default()
    };

    let query = params.to_record_query(&caller(9, "site_admin", "admin"), None);

    match query.scope {
        QueryScope::User { username } => assert_eq!(username, "maria_garcia"),
        _ => panic!("Expected user scope"),
    }
}

#[test]
fn test_limit_defaults_when_absent_or_unparseable() {
    let absent = ListQuery::default();
    let garbage = ListQuery {
        limit: Some("plenty".to_string()),
        ..ListQuery::default()
    };
    let zero = ListQuery {
        limit: Some("0".to_string()),
        ..ListQuery::default()
    };
    let caller = caller(1, "juan_perez", "Driver");

    assert_eq!(
        absent.to_record_query(&caller, Some(1000)).limit,
        Some(1000)
    );
    assert_eq!(
        garbage.to_record_query(&caller, Some(1000)).limit,
        Some(1000)
    );
    assert_eq!(zero.to_record_query(&caller, Some(1000)).limit, Some(1000));
}

#[test]
fn test_limit_parses_when_valid() {
    let params = ListQuery {
        limit: Some("2".to_string()),
        ..ListQuery::default()
    };

    let query = params.to_record_query(&caller(1, "juan_perez", "Driver"), Some(1000));

    assert_eq!(query.limit, Some(2));
}

#[test]
fn test_no_default_limit_means_unbounded() {
    let params = ListQuery {
        limit: Some("2".to_string()),
        ..ListQuery::default()
    };

    let query = params.to_record_query(&caller(1, "juan_perez", "Driver"), None);

    assert_eq!(query.limit, None);
}
