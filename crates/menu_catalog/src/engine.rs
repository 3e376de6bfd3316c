use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use menu_logging::{menu_debug, menu_trace};

use crate::client::{CatalogClient, CatalogSettings, ReqwestCatalog};
use crate::debounce::Debouncer;
use crate::{EngineEvent, MealQuery, RequestError, Ticket};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build catalog client: {0}")]
    Client(#[from] RequestError),
}

enum Request {
    ListCategories,
    ListMeals { ticket: Ticket, query: MealQuery },
    LookupMeal { id: String },
}

enum EngineCommand {
    Request(Request),
    ScheduleDebounce { ticket: Ticket, delay: Duration },
    CancelDebounce,
}

/// Runs catalog requests and debounce timers on a background runtime.
///
/// Results come back as [`EngineEvent`]s in completion order; callers decide
/// which ones are still relevant.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: CatalogSettings) -> Result<Self, EngineError> {
        let client = ReqwestCatalog::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn CatalogClient>) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::Builder::new()
            .name("menu-engine".to_string())
            .spawn(move || {
                let mut debouncer = Debouncer::new(runtime.handle().clone());
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::Request(request) => {
                            let client = client.clone();
                            let event_tx = event_tx.clone();
                            runtime.spawn(async move {
                                handle_request(client.as_ref(), request, event_tx).await;
                            });
                        }
                        EngineCommand::ScheduleDebounce { ticket, delay } => {
                            menu_trace!("debounce scheduled ticket={} delay={:?}", ticket, delay);
                            let event_tx = event_tx.clone();
                            debouncer.schedule(delay, move || {
                                let _ = event_tx.send(EngineEvent::DebounceElapsed { ticket });
                            });
                        }
                        EngineCommand::CancelDebounce => debouncer.cancel(),
                    }
                }
                menu_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn list_categories(&self) {
        self.send(EngineCommand::Request(Request::ListCategories));
    }

    pub fn list_meals(&self, ticket: Ticket, query: MealQuery) {
        self.send(EngineCommand::Request(Request::ListMeals { ticket, query }));
    }

    pub fn lookup_meal(&self, id: impl Into<String>) {
        self.send(EngineCommand::Request(Request::LookupMeal { id: id.into() }));
    }

    pub fn schedule_debounce(&self, ticket: Ticket, delay: Duration) {
        self.send(EngineCommand::ScheduleDebounce { ticket, delay });
    }

    pub fn cancel_debounce(&self) {
        self.send(EngineCommand::CancelDebounce);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    fn send(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_request(
    client: &dyn CatalogClient,
    request: Request,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match request {
        Request::ListCategories => EngineEvent::CategoriesFetched(client.list_categories().await),
        Request::ListMeals { ticket, query } => EngineEvent::MealsFetched {
            ticket,
            result: client.list_meals(&query).await,
        },
        Request::LookupMeal { id } => {
            let result = client.get_meal_by_id(&id).await;
            EngineEvent::MealLooked { id, result }
        }
    };
    let _ = event_tx.send(event);
}
