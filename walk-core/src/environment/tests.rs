use super::prelude::Environment;

#[test]
fn test_global_scope() {
    let mut env = Environment::new();

    assert_eq!(env.depth(), 1);
    assert_eq!(env.get("x"), None);

    assert!(env.declare("x", 1.0));
    assert_eq!(env.get("x"), Some(1.0));

    assert!(!env.declare("x", 2.0));
    assert_eq!(env.get("x"), Some(1.0));
}

#[test]
fn test_shadowing() {
    let mut env = Environment::new();
    env.declare("x", 1.0);

    {
        let mut scope = env.enter_scope();
        assert_eq!(scope.depth(), 2);
        assert_eq!(scope.get("x"), Some(1.0));

        assert!(scope.declare("x", 2.0));
        assert_eq!(scope.get("x"), Some(2.0));
    }

    assert_eq!(env.depth(), 1);
    assert_eq!(env.get("x"), Some(1.0));
}

#[test]
fn test_assignment_reaches_outer_scope() {
    let mut env = Environment::new();
    env.declare("x", 1.0);

    {
        let mut scope = env.enter_scope();
        scope.declare("y", 5.0);

        if let Some(x) = scope.get_mut("x") {
            *x = 10.0;
        }

        assert_eq!(scope.get_mut("missing"), None);
    }

    assert_eq!(env.get("x"), Some(10.0));
    assert_eq!(env.get("y"), None);
}

#[test]
fn test_assignment_prefers_innermost_binding() {
    let mut env = Environment::new();
    env.declare("x", 1.0);

    {
        let mut outer = env.enter_scope();
        outer.declare("x", 2.0);

        {
            let mut inner = outer.enter_scope();
            assert_eq!(inner.depth(), 3);

            if let Some(x) = inner.get_mut("x") {
                *x = 3.0;
            }
        }

        assert_eq!(outer.get("x"), Some(3.0));
    }

    assert_eq!(env.get("x"), Some(1.0));
}

#[test]
fn test_guard_pops_on_early_exit() {
    fn failing_block(env: &mut Environment) -> Result<(), String> {
        let mut scope = env.enter_scope();
        scope.declare("temp", 1.0);

        Err("boom".to_string())
    }

    let mut env = Environment::new();

    assert!(failing_block(&mut env).is_err());
    assert_eq!(env.depth(), 1);
    assert_eq!(env.get("temp"), None);
}

#[test]
fn test_guard_pops_on_panic() {
    let mut env = Environment::new();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _scope = env.enter_scope();
        panic!("block failed");
    }));

    assert!(result.is_err());
    assert_eq!(env.depth(), 1);
}

#[test]
fn test_declare_after_scopes_unwind() {
    let mut env = Environment::new();

    {
        let mut outer = env.enter_scope();
        let mut inner = outer.enter_scope();
        assert_eq!(inner.depth(), 3);
        assert!(inner.declare("x", 1.0));
    }

    assert_eq!(env.depth(), 1);
    assert!(env.declare("x", 2.0));
    assert_eq!(env.get("x"), Some(2.0));
    assert!(!env.declare("x", 3.0));
}
