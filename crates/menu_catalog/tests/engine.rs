use std::time::{Duration, Instant};

use menu_catalog::{CatalogSettings, EngineEvent, EngineHandle, FailureKind, MealQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn next_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "engine produced no event");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

fn engine_for(server: &MockServer) -> EngineHandle {
    EngineHandle::new(CatalogSettings {
        base_url: server.uri(),
    })
    .expect("engine")
}

#[tokio::test(flavor = "multi_thread")]
async fn meals_come_back_tagged_with_their_ticket() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .and(query_param("c", "Beef"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"meals":[{"strMeal":"Beef Wellington","strMealThumb":"t","idMeal":"52803"}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let engine = engine_for(&server);
    engine.list_meals(4, MealQuery::Category("Beef".to_string()));

    match next_event(&engine).await {
        EngineEvent::MealsFetched { ticket, result } => {
            assert_eq!(ticket, 4);
            assert_eq!(result.expect("meals")[0].name, "Beef Wellington");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_categories_are_reported_as_events() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let engine = engine_for(&server);
    engine.list_categories();

    match next_event(&engine).await {
        EngineEvent::CategoriesFetched(Err(err)) => {
            assert_eq!(err.kind, FailureKind::HttpStatus(500));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn lookup_misses_are_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"meals":null}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let engine = engine_for(&server);
    engine.lookup_meal("404");

    assert_eq!(
        next_event(&engine).await,
        EngineEvent::MealLooked {
            id: "404".to_string(),
            result: Ok(None),
        }
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn rescheduled_debounce_fires_once_with_latest_ticket() {
    let server = MockServer::start().await;
    let engine = engine_for(&server);

    for ticket in 1..=3 {
        engine.schedule_debounce(ticket, Duration::from_millis(150));
    }

    assert_eq!(
        next_event(&engine).await,
        EngineEvent::DebounceElapsed { ticket: 3 }
    );
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(engine.try_recv(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn cancelled_debounce_is_silent() {
    let server = MockServer::start().await;
    let engine = engine_for(&server);

    engine.schedule_debounce(1, Duration::from_millis(100));
    engine.cancel_debounce();

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(engine.try_recv(), None);
}
