//! Create/read/update/delete flows through the task service.

use super::helpers::{TestService, new_service};
use rstest::{fixture, rstest};
use taskboard::task::{
    domain::{TaskFilter, TaskPriority, TaskStatus},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest},
};

#[fixture]
fn service() -> TestService {
    new_service()
}

/// Asserts the error is a repository not-found failure.
fn assert_not_found(result: &Result<impl std::fmt::Debug, TaskServiceError>) -> eyre::Result<()> {
    eyre::ensure!(
        matches!(
            result,
            Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(
                _
            )))
        ),
        "expected not-found, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_record_round_trips_through_the_store(
    service: TestService,
) -> eyre::Result<()> {
    let created = service
        .create(
            CreateTaskRequest::new("Write report")
                .with_description("Quarterly numbers")
                .with_priority(TaskPriority::High),
        )
        .await?;

    let fetched = service.get(created.id()).await?;
    eyre::ensure!(fetched == Some(created), "fetched record should equal created record");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sequential_creates_receive_increasing_identifiers(
    service: TestService,
) -> eyre::Result<()> {
    let first = service.create(CreateTaskRequest::new("First")).await?;
    let second = service.create(CreateTaskRequest::new("Second")).await?;
    let third = service.create(CreateTaskRequest::new("Third")).await?;

    eyre::ensure!(
        first.id() < second.id() && second.id() < third.id(),
        "identifiers should increase"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_are_not_reused_after_deletion(service: TestService) -> eyre::Result<()> {
    let first = service.create(CreateTaskRequest::new("First")).await?;
    service.delete(first.id()).await?;

    let second = service.create(CreateTaskRequest::new("Second")).await?;
    eyre::ensure!(
        second.id() != first.id(),
        "deleted identifier should not be reassigned"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successive_updates_keep_advancing_updated_at(service: TestService) -> eyre::Result<()> {
    let created = service.create(CreateTaskRequest::new("Buy milk")).await?;

    let once = service
        .update(
            created.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::InProgress),
        )
        .await?;
    let twice = service
        .update(
            created.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::Completed),
        )
        .await?;

    eyre::ensure!(once.updated_at() > created.updated_at(), "first update should advance");
    eyre::ensure!(twice.updated_at() > once.updated_at(), "second update should advance");
    eyre::ensure!(
        twice.created_at() == created.created_at(),
        "creation timestamp should never move"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_then_getting_yields_nothing(service: TestService) -> eyre::Result<()> {
    let created = service.create(CreateTaskRequest::new("Buy milk")).await?;

    service.delete(created.id()).await?;

    eyre::ensure!(
        service.get(created.id()).await?.is_none(),
        "deleted record should not be retrievable"
    );
    let second_delete = service.delete(created.id()).await;
    assert_not_found(&second_delete)?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_a_deleted_record_is_not_found(service: TestService) -> eyre::Result<()> {
    let created = service.create(CreateTaskRequest::new("Buy milk")).await?;
    service.delete(created.id()).await?;

    let result = service
        .update(created.id(), UpdateTaskRequest::new())
        .await;
    assert_not_found(&result)?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_does_not_disturb_other_records(service: TestService) -> eyre::Result<()> {
    let keep = service.create(CreateTaskRequest::new("Keep me")).await?;
    let drop_me = service.create(CreateTaskRequest::new("Drop me")).await?;

    service.delete(drop_me.id()).await?;

    let listed = service.list(&TaskFilter::new()).await?;
    eyre::ensure!(listed.len() == 1, "one record should remain");
    eyre::ensure!(
        listed.first().map(taskboard::task::domain::Task::id) == Some(keep.id()),
        "the surviving record should be the untouched one"
    );
    Ok(())
}
