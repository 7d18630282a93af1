//! Search and filter composition over the task listing.

use super::helpers::{TestService, new_service};
use rstest::{fixture, rstest};
use taskboard::task::{
    domain::{Task, TaskFilter, TaskPriority, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

#[fixture]
fn service() -> TestService {
    new_service()
}

async fn seed(service: &TestService) -> eyre::Result<()> {
    service
        .create(
            CreateTaskRequest::new("Buy milk")
                .with_description("Two litres")
                .with_status(TaskStatus::Completed),
        )
        .await?;
    service
        .create(
            CreateTaskRequest::new("Plan sprint")
                .with_description("Draft the milk-run roadmap")
                .with_priority(TaskPriority::High),
        )
        .await?;
    service
        .create(CreateTaskRequest::new("Water plants"))
        .await?;
    Ok(())
}

fn titles(listed: &[Task]) -> Vec<&str> {
    listed.iter().map(|task| task.title().as_str()).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_returns_newest_update_first(service: TestService) -> eyre::Result<()> {
    seed(&service).await?;

    let listed = service.list(&TaskFilter::new()).await?;
    eyre::ensure!(
        titles(&listed) == vec!["Water plants", "Plan sprint", "Buy milk"],
        "expected newest-first ordering, got {:?}",
        titles(&listed)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_spans_title_and_description(service: TestService) -> eyre::Result<()> {
    seed(&service).await?;

    let listed = service
        .list(&TaskFilter::new().with_search("milk"))
        .await?;
    eyre::ensure!(
        titles(&listed) == vec!["Plan sprint", "Buy milk"],
        "search should match both title and description hits, got {:?}",
        titles(&listed)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_is_case_insensitive(service: TestService) -> eyre::Result<()> {
    seed(&service).await?;

    let listed = service
        .list(&TaskFilter::new().with_search("MILK"))
        .await?;
    eyre::ensure!(listed.len() == 2, "case should not affect matching");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_returns_exact_matches_only(service: TestService) -> eyre::Result<()> {
    seed(&service).await?;

    let listed = service
        .list(&TaskFilter::new().with_status(TaskStatus::Completed))
        .await?;
    eyre::ensure!(
        titles(&listed) == vec!["Buy milk"],
        "only the completed record should match"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn priority_filter_returns_exact_matches_only(service: TestService) -> eyre::Result<()> {
    seed(&service).await?;

    let listed = service
        .list(&TaskFilter::new().with_priority(TaskPriority::High))
        .await?;
    eyre::ensure!(
        titles(&listed) == vec!["Plan sprint"],
        "only the high-priority record should match"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn combined_filters_return_the_intersection(service: TestService) -> eyre::Result<()> {
    seed(&service).await?;

    let filter = TaskFilter::new()
        .with_search("milk")
        .with_status(TaskStatus::Completed);
    let listed = service.list(&filter).await?;
    eyre::ensure!(
        titles(&listed) == vec!["Buy milk"],
        "intersection should contain the single record matching all constraints"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn no_matches_yields_an_empty_list(service: TestService) -> eyre::Result<()> {
    seed(&service).await?;

    let listed = service
        .list(&TaskFilter::new().with_search("nonexistent"))
        .await?;
    eyre::ensure!(listed.is_empty(), "no record should match");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updated_records_move_to_the_front(service: TestService) -> eyre::Result<()> {
    seed(&service).await?;

    let listed = service.list(&TaskFilter::new()).await?;
    let oldest = listed.last().ok_or_else(|| eyre::eyre!("seed data expected"))?;

    service
        .update(oldest.id(), UpdateTaskRequest::new())
        .await?;

    let relisted = service.list(&TaskFilter::new()).await?;
    eyre::ensure!(
        relisted.first().map(Task::id) == Some(oldest.id()),
        "the touched record should lead the listing"
    );
    Ok(())
}
