//! Integration tests for detail views driven through the notification bus.

use entity_detail::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

const NS: &str = "traningbackendApp";

/// Route bus logs to the test harness; `RUST_LOG=entity_detail=debug` shows them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_department_rename_then_teardown() {
    init_tracing();
    let bus = EventBus::new();
    let scope = ViewScope::new("department-detail");

    let vm = DepartmentDetailView::new(
        Department::new(1, "Sales"),
        Some("department".to_string()),
        NS,
        &bus,
        &scope,
    );
    assert_eq!(*vm.department(), Department::new(1, "Sales"));

    bus.publish(
        "traningbackendApp:departmentUpdate",
        Department::new(1, "Sales-Renamed"),
    );
    assert_eq!(vm.department().name, "Sales-Renamed");

    assert!(scope.destroy());
    bus.publish("traningbackendApp:departmentUpdate", Department::new(1, "Ghost"));
    assert_eq!(vm.department().name, "Sales-Renamed");
    assert_eq!(vm.previous_state(), Some("department"));
}

#[test]
fn test_department_and_employee_views_share_one_bus() {
    init_tracing();
    let settings = Settings::default();
    let bus = EventBus::new();
    let scope = ViewScope::new("dashboard");

    let department_vm = DepartmentDetailView::new(
        Department::new(1, "Sales"),
        None,
        &settings.namespace,
        &bus,
        &scope,
    );
    let employee_vm = EmployeeDetailView::new(
        Employee::new(7, "Ada"),
        Some("employee".to_string()),
        &settings.namespace,
        &bus,
        &scope,
    );
    assert_eq!(bus.subscriber_count(), 2);

    let renamed = Department::new(1, "Research");
    bus.publish(settings.update_event::<Department>(), renamed.clone());
    assert_eq!(*department_vm.department(), renamed);
    assert_eq!(employee_vm.employee().department, None);

    let moved = Employee::new(7, "Ada").in_department(renamed);
    bus.publish(settings.update_event::<Employee>(), moved.clone());
    assert_eq!(*employee_vm.employee(), moved);

    drop(scope);
    assert_eq!(bus.subscriber_count(), 0);
    assert!(!department_vm.is_subscribed());
    assert!(!employee_vm.is_subscribed());
}

#[test]
fn test_view_torn_down_during_publish_is_not_updated() {
    let bus = EventBus::new();
    let scope_b = Arc::new(ViewScope::new("department-detail-b"));

    // Subscribed first, so it runs before the view below within one publish
    let scope_b_clone = Arc::clone(&scope_b);
    let _teardown_trigger = bus.subscribe("traningbackendApp:departmentUpdate", move |_| {
        scope_b_clone.destroy();
    });

    let vm_b = DepartmentDetailView::new(Department::new(1, "Sales"), None, NS, &bus, &scope_b);

    bus.publish("traningbackendApp:departmentUpdate", Department::new(1, "Ghost"));

    assert!(scope_b.is_destroyed());
    assert!(!vm_b.is_subscribed());
    assert_eq!(vm_b.department().name, "Sales");
}

#[test]
fn test_previous_state_survives_updates() {
    let bus = EventBus::new();
    let scope = ViewScope::new("employee-detail");
    let vm = EmployeeDetailView::new(
        Employee::new(3, "Bo"),
        Some("employee".to_string()),
        NS,
        &bus,
        &scope,
    );

    for i in 0..5 {
        bus.publish("traningbackendApp:employeeUpdate", Employee::new(3, format!("Bo {i}")));
    }
    assert_eq!(vm.employee().name, "Bo 4");
    assert_eq!(vm.previous_state(), Some("employee"));
}

proptest! {
    #[test]
    fn prop_entity_tracks_latest_publish(names in proptest::collection::vec("[a-zA-Z]{1,12}", 1..20)) {
        let bus = EventBus::new();
        let scope = ViewScope::new("department-detail");
        let vm = DepartmentDetailView::new(Department::new(1, "Initial"), None, NS, &bus, &scope);

        for name in &names {
            bus.publish("traningbackendApp:departmentUpdate", Department::new(1, name.clone()));
            prop_assert_eq!(&vm.department().name, name);
        }
    }

    #[test]
    fn prop_foreign_events_never_mutate(
        namespace in "[a-z]{1,8}",
        entity_type in "[a-z]{1,8}",
    ) {
        prop_assume!(namespace != NS || entity_type != "department");

        let bus = EventBus::new();
        let scope = ViewScope::new("department-detail");
        let vm = DepartmentDetailView::new(Department::new(1, "Sales"), None, NS, &bus, &scope);

        bus.publish(EventName::update(&namespace, &entity_type), Department::new(1, "Other"));
        prop_assert_eq!(&vm.department().name, "Sales");
    }

    #[test]
    fn prop_no_updates_after_teardown(before in 0usize..5, after in 1usize..5) {
        let bus = EventBus::new();
        let scope = ViewScope::new("department-detail");
        let vm = DepartmentDetailView::new(Department::new(1, "Start"), None, NS, &bus, &scope);

        for i in 0..before {
            bus.publish("traningbackendApp:departmentUpdate", Department::new(1, format!("live-{i}")));
        }
        let frozen = vm.department();
        scope.destroy();

        for i in 0..after {
            bus.publish("traningbackendApp:departmentUpdate", Department::new(1, format!("ghost-{i}")));
        }
        prop_assert_eq!(vm.department(), frozen);
    }
}
