//! Tests for DeployService

mod common;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use rstest::rstest;

use common::SpyCommandRunner;
use deployctl::application::services::DeployService;
use deployctl::application::ApplicationError;
use deployctl::config::Settings;
use deployctl::domain::{Action, DomainError};
use deployctl::util::testing;

fn service_with(spy: &Arc<SpyCommandRunner>, settings: Settings) -> DeployService {
    testing::init_test_setup();
    DeployService::new(spy.clone(), Arc::new(settings)).expect("valid settings")
}

// ============================================================
// execute() tests
// ============================================================

#[rstest]
#[case(Action::Up { detach: true }, "docker compose -f docker-compose.yml up -d")]
#[case(Action::Up { detach: false }, "docker compose -f docker-compose.yml up")]
#[case(Action::Down { volumes: true }, "docker compose -f docker-compose.yml down -v")]
#[case(Action::Restart, "docker compose -f docker-compose.yml restart")]
#[case(Action::Status, "docker compose -f docker-compose.yml ps")]
#[case(
    Action::Logs { follow: true, service: Some("backend".into()) },
    "docker compose -f docker-compose.yml logs -f backend"
)]
fn given_action_when_execute_then_issues_exactly_one_invocation(
    #[case] action: Action,
    #[case] expected: &str,
) {
    // Arrange
    let spy = Arc::new(SpyCommandRunner::succeeding());
    let service = service_with(&spy, Settings::default());

    // Act
    let result = service.execute(&action).unwrap();

    // Assert
    assert!(result.success());
    assert_eq!(spy.call_lines(), vec![expected.to_string()]);
}

#[test]
fn given_missing_binary_when_execute_then_tool_unavailable() {
    // Arrange
    let spy = Arc::new(SpyCommandRunner::failing_with(io::ErrorKind::NotFound));
    let service = service_with(&spy, Settings::default());

    // Act
    let err = service.execute(&Action::Status).unwrap_err();

    // Assert
    match err {
        ApplicationError::ToolUnavailable { program } => assert_eq!(program, "docker"),
        other => panic!("expected ToolUnavailable, got {other:?}"),
    }
}

#[test]
fn given_non_zero_exit_when_execute_then_command_failed_with_child_code() {
    // Arrange
    let spy = Arc::new(SpyCommandRunner::exiting_with(3));
    let service = service_with(&spy, Settings::default());

    // Act
    let err = service.execute(&Action::Down { volumes: false }).unwrap_err();

    // Assert
    match err {
        ApplicationError::CommandFailed { command, exit_code } => {
            assert_eq!(exit_code, 3);
            assert_eq!(command, "docker compose -f docker-compose.yml down");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[test]
fn given_interrupt_when_execute_then_interrupted() {
    let spy = Arc::new(SpyCommandRunner::failing_with(io::ErrorKind::Interrupted));
    let service = service_with(&spy, Settings::default());

    let err = service
        .execute(&Action::Logs {
            follow: true,
            service: None,
        })
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Interrupted));
}

#[test]
fn given_other_spawn_error_when_execute_then_operation_failed() {
    let spy = Arc::new(SpyCommandRunner::failing_with(
        io::ErrorKind::PermissionDenied,
    ));
    let service = service_with(&spy, Settings::default());

    let err = service.execute(&Action::Status).unwrap_err();

    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
}

// ============================================================
// run() tests
// ============================================================

#[test]
fn given_non_zero_exit_when_run_then_returns_result() {
    let spy = Arc::new(SpyCommandRunner::exiting_with(4));
    let service = service_with(&spy, Settings::default());

    let result = service.run(&Action::Status).unwrap();

    assert!(!result.success());
    assert_eq!(result.exit_code(), 4);
}

#[test]
fn given_missing_binary_when_run_then_still_tool_unavailable() {
    let spy = Arc::new(SpyCommandRunner::failing_with(io::ErrorKind::NotFound));
    let service = service_with(&spy, Settings::default());

    let err = service.run(&Action::Status).unwrap_err();

    assert!(matches!(err, ApplicationError::ToolUnavailable { .. }));
}

// ============================================================
// settings
// ============================================================

#[test]
fn given_custom_command_and_file_when_execute_then_uses_them() {
    // Arrange
    let spy = Arc::new(SpyCommandRunner::succeeding());
    let settings = Settings {
        compose_command: vec!["podman-compose".into()],
        compose_file: PathBuf::from("stack.yml"),
        ..Settings::default()
    };
    let service = service_with(&spy, settings);

    // Act
    service.execute(&Action::Restart).unwrap();

    // Assert
    let calls = spy.calls();
    assert_eq!(calls[0].program(), "podman-compose");
    assert_eq!(calls[0].args(), ["-f", "stack.yml", "restart"]);
}

#[test]
fn given_project_dir_when_execute_then_runs_there() {
    let spy = Arc::new(SpyCommandRunner::succeeding());
    let settings = Settings {
        project_dir: Some(PathBuf::from("/srv/app")),
        ..Settings::default()
    };
    let service = service_with(&spy, settings);

    service.execute(&Action::Status).unwrap();

    assert_eq!(spy.cwds(), vec![Some(PathBuf::from("/srv/app"))]);
}

#[test]
fn given_empty_command_when_creating_service_then_rejects() {
    let spy = Arc::new(SpyCommandRunner::succeeding());
    let settings = Settings {
        compose_command: vec![],
        ..Settings::default()
    };

    let result = DeployService::new(spy.clone(), Arc::new(settings));

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::EmptyCommand))
    ));
    assert!(spy.calls().is_empty());
}
