use super::*;

fn identity() -> Identity {
    Identity { id: "7b9d7e4e-0000-0000-0000-000000000001".into(), email: "admin@arrowstructures.example".into() }
}

fn authenticated() -> SessionState {
    SessionState::authenticated(identity())
}

const PROTECTED_ROUTES: &[&str] =
    &["/dashboard", "/blogs", "/blogs/add", "/news", "/projects/categories", "/careers/42/edit", "/slider"];

// =============================================================================
// SessionState::apply
// =============================================================================

#[test]
fn default_state_is_resolving() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn resolving_to_authenticated_on_sign_in() {
    let mut state = SessionState::resolving();
    state.apply(AuthEvent::SignedIn(identity()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn resolving_to_anonymous_on_sign_out() {
    let mut state = SessionState::resolving();
    state.apply(AuthEvent::SignedOut);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn anonymous_to_authenticated_on_sign_in() {
    let mut state = SessionState::anonymous();
    state.apply(AuthEvent::SignedIn(identity()));
    assert_eq!(state, authenticated());
}

#[test]
fn authenticated_to_anonymous_on_sign_out() {
    let mut state = authenticated();
    state.apply(AuthEvent::SignedOut);
    assert_eq!(state, SessionState::anonymous());
}

#[test]
fn loading_never_reverts_to_true() {
    let mut state = SessionState::resolving();
    state.apply(AuthEvent::SignedOut);
    state.apply(AuthEvent::SignedIn(identity()));
    state.apply(AuthEvent::SignedOut);
    assert!(!state.loading);
}

// =============================================================================
// route classification
// =============================================================================

#[test]
fn login_and_signup_are_public_only() {
    assert!(is_public_only("/auth/login"));
    assert!(is_public_only("/auth/signup"));
}

#[test]
fn trailing_slash_is_normalized() {
    assert!(is_public_only("/auth/login/"));
    assert!(is_landing("/"));
    assert_eq!(normalize_path("/dashboard/"), "/dashboard");
}

#[test]
fn protected_routes_are_not_public_only() {
    for route in PROTECTED_ROUTES {
        assert!(!is_public_only(route), "{route} should not be public-only");
        assert!(!is_landing(route), "{route} should not be the landing page");
    }
}

// =============================================================================
// shell_for — the rendering contract table
// =============================================================================

#[test]
fn resolving_renders_placeholder_on_every_route() {
    let state = SessionState::resolving();
    for route in ["/", "/auth/login", "/dashboard", "/blogs/add"] {
        assert_eq!(shell_for(&state, route), Shell::Placeholder, "route {route}");
    }
}

#[test]
fn authenticated_protected_route_renders_admin_shell() {
    for route in PROTECTED_ROUTES {
        assert_eq!(shell_for(&authenticated(), route), Shell::Admin, "route {route}");
    }
}

#[test]
fn authenticated_landing_renders_admin_shell() {
    assert_eq!(shell_for(&authenticated(), "/"), Shell::Admin);
}

#[test]
fn authenticated_public_only_route_renders_bare_shell() {
    assert_eq!(shell_for(&authenticated(), "/auth/login"), Shell::Bare);
    assert_eq!(shell_for(&authenticated(), "/auth/signup"), Shell::Bare);
}

#[test]
fn anonymous_renders_bare_shell_everywhere() {
    let state = SessionState::anonymous();
    for route in ["/", "/auth/login", "/dashboard", "/blogs"] {
        assert_eq!(shell_for(&state, route), Shell::Bare, "route {route}");
    }
}

// =============================================================================
// redirect_target — the redirect policy
// =============================================================================

#[test]
fn no_redirect_while_loading_for_any_route() {
    let state = SessionState::resolving();
    for route in ["/", "/auth/login", "/auth/signup", "/dashboard", "/blogs/add"] {
        assert_eq!(redirect_target(&state, route), None, "route {route}");
    }
}

#[test]
fn anonymous_on_protected_route_redirects_to_login() {
    let state = SessionState::anonymous();
    for route in PROTECTED_ROUTES {
        assert_eq!(redirect_target(&state, route), Some(LOGIN_ROUTE), "route {route}");
    }
}

#[test]
fn anonymous_on_dashboard_redirects_to_login() {
    assert_eq!(redirect_target(&SessionState::anonymous(), "/dashboard"), Some("/auth/login"));
}

#[test]
fn anonymous_may_stay_on_landing_and_public_only_routes() {
    let state = SessionState::anonymous();
    assert_eq!(redirect_target(&state, "/"), None);
    assert_eq!(redirect_target(&state, "/auth/login"), None);
    assert_eq!(redirect_target(&state, "/auth/signup"), None);
}

#[test]
fn authenticated_on_login_redirects_to_dashboard() {
    assert_eq!(redirect_target(&authenticated(), "/auth/login"), Some("/dashboard"));
}

#[test]
fn authenticated_on_signup_redirects_to_dashboard() {
    assert_eq!(redirect_target(&authenticated(), "/auth/signup"), Some(DEFAULT_PROTECTED_ROUTE));
}

#[test]
fn authenticated_may_stay_on_protected_routes() {
    for route in PROTECTED_ROUTES {
        assert_eq!(redirect_target(&authenticated(), route), None, "route {route}");
    }
}

#[test]
fn redirect_settles_after_one_hop_from_login() {
    // Entering AUTHENTICATED on /auth/login issues exactly one redirect:
    // after following it the policy is quiescent, so no loop is possible.
    let state = authenticated();
    let target = redirect_target(&state, "/auth/login").expect("redirect expected");
    assert_eq!(redirect_target(&state, target), None);
}

#[test]
fn redirect_settles_after_one_hop_from_protected_route() {
    let state = SessionState::anonymous();
    let target = redirect_target(&state, "/dashboard").expect("redirect expected");
    assert_eq!(redirect_target(&state, target), None);
}

#[test]
fn sign_out_then_sign_in_round_trip_settles() {
    // AUTHENTICATED on /dashboard, sign out → login, sign in → dashboard.
    let mut state = authenticated();
    assert_eq!(redirect_target(&state, "/dashboard"), None);

    state.apply(AuthEvent::SignedOut);
    let target = redirect_target(&state, "/dashboard").expect("redirect to login");
    assert_eq!(target, LOGIN_ROUTE);

    state.apply(AuthEvent::SignedIn(identity()));
    let target = redirect_target(&state, target).expect("redirect to dashboard");
    assert_eq!(target, DEFAULT_PROTECTED_ROUTE);
    assert_eq!(redirect_target(&state, target), None);
}
