//! Character view state machine.
//!
//! # Design
//! `on_load` is a plain function returning a future rather than an
//! `async fn`: `Loading` is published the moment it is called, before the
//! caller ever polls. The returned future performs the fetch and publishes
//! the terminal state. Concurrent loads on one view model are not
//! serialized or cancelled; whichever result lands last wins.

use std::future::Future;

use tokio::sync::broadcast;

use crate::observable::StateCell;
use crate::service::CharacterService;
use crate::types::Character;

/// What the UI should render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Nothing requested yet. Never re-entered.
    #[default]
    Initial,
    Loading,
    Display(Character),
    /// Any fetch failure; the specific kind is dropped.
    Error,
}

pub struct CharacterViewModel<S> {
    service: S,
    state: StateCell<ViewState>,
}

impl<S: CharacterService> CharacterViewModel<S> {
    /// Starts in `Initial` without touching the service.
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: StateCell::new(ViewState::Initial),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state.get()
    }

    /// Every state published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Publish `Loading` now; the returned future loads `id` and publishes
    /// `Display` or `Error`.
    pub fn on_load(&self, id: i64) -> impl Future<Output = ()> + Send + '_ {
        self.state.set(ViewState::Loading);

        async move {
            let next = match self.service.load(id).await {
                Ok(character) => ViewState::Display(character),
                Err(kind) => {
                    tracing::debug!(id, error = %kind, "showing generic error state");
                    ViewState::Error
                }
            };
            self.state.set(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::broadcast::error::TryRecvError;
    use tokio::sync::Notify;

    fn character() -> Character {
        Character {
            id: 0,
            name: String::new(),
            status: String::new(),
            species: String::new(),
            gender: String::new(),
            image: "www.google.com".to_string(),
        }
    }

    fn drain(rx: &mut broadcast::Receiver<ViewState>) -> Vec<ViewState> {
        let mut seen = Vec::new();
        while let Ok(state) = rx.try_recv() {
            seen.push(state);
        }
        seen
    }

    #[derive(Default)]
    struct SpyService {
        calls: AtomicUsize,
    }

    impl CharacterService for SpyService {
        async fn load(&self, _id: i64) -> Result<Character, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(character())
        }
    }

    struct StubService {
        result: Result<Character, FetchError>,
    }

    impl CharacterService for StubService {
        async fn load(&self, _id: i64) -> Result<Character, FetchError> {
            self.result.clone()
        }
    }

    /// Holds every load until `gate` is notified.
    struct GatedService {
        gate: Notify,
    }

    impl CharacterService for GatedService {
        async fn load(&self, _id: i64) -> Result<Character, FetchError> {
            self.gate.notified().await;
            Ok(character())
        }
    }

    /// Succeeds for id 1, fails for anything else.
    struct ByIdService;

    impl CharacterService for ByIdService {
        async fn load(&self, id: i64) -> Result<Character, FetchError> {
            if id == 1 {
                Ok(character())
            } else {
                Err(FetchError::NotFound)
            }
        }
    }

    #[test]
    fn init_does_not_perform_request() {
        let sut = CharacterViewModel::new(SpyService::default());
        assert_eq!(sut.service().calls.load(Ordering::SeqCst), 0);
        assert_eq!(sut.state(), ViewState::Initial);
    }

    #[tokio::test]
    async fn on_load_performs_request() {
        let sut = CharacterViewModel::new(SpyService::default());
        sut.on_load(1).await;
        assert_eq!(sut.service().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn on_load_delivers_character() {
        let sut = CharacterViewModel::new(StubService {
            result: Ok(character()),
        });
        let mut rx = sut.subscribe();

        sut.on_load(1).await;

        assert_eq!(
            drain(&mut rx),
            vec![ViewState::Loading, ViewState::Display(character())]
        );
        assert_eq!(sut.state(), ViewState::Display(character()));
    }

    #[tokio::test]
    async fn on_load_collapses_every_error_kind() {
        for kind in FetchError::ALL {
            let sut = CharacterViewModel::new(StubService { result: Err(kind) });
            let mut rx = sut.subscribe();

            sut.on_load(1).await;

            assert_eq!(
                drain(&mut rx),
                vec![ViewState::Loading, ViewState::Error],
                "{kind:?}"
            );
        }
    }

    #[tokio::test]
    async fn loading_is_published_before_the_future_is_polled() {
        let sut = CharacterViewModel::new(GatedService {
            gate: Notify::new(),
        });
        let mut rx = sut.subscribe();

        let load = sut.on_load(1);
        assert_eq!(sut.state(), ViewState::Loading);
        assert_eq!(rx.try_recv().unwrap(), ViewState::Loading);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        sut.service().gate.notify_one();
        load.await;

        assert_eq!(rx.try_recv().unwrap(), ViewState::Display(character()));
    }

    #[tokio::test]
    async fn repeated_loads_restart_the_sequence() {
        let sut = CharacterViewModel::new(ByIdService);
        let mut rx = sut.subscribe();

        sut.on_load(1).await;
        sut.on_load(2).await;

        assert_eq!(
            drain(&mut rx),
            vec![
                ViewState::Loading,
                ViewState::Display(character()),
                ViewState::Loading,
                ViewState::Error,
            ]
        );
    }

    #[tokio::test]
    async fn last_result_to_land_wins() {
        let sut = CharacterViewModel::new(ByIdService);
        let mut rx = sut.subscribe();

        let first = sut.on_load(1);
        let second = sut.on_load(2);
        second.await;
        first.await;

        assert_eq!(
            drain(&mut rx),
            vec![
                ViewState::Loading,
                ViewState::Loading,
                ViewState::Error,
                ViewState::Display(character()),
            ]
        );
        assert_eq!(sut.state(), ViewState::Display(character()));
    }
}
