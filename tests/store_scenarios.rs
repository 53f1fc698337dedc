//! End-to-end scenarios driving the store through its public surface.

use album_search::services::{AlbumsService, Notifier};
use album_search::{Album, AlbumSearchError, AlbumSearchStore, Result, SortOrder};
use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::block_on;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Album source whose responses are fed in by the test.
///
/// Each `get_all` call takes the next queued receiver, so a test can keep a
/// fetch in flight by holding on to its sender.
#[derive(Default)]
struct Gated {
    responses: RefCell<VecDeque<oneshot::Receiver<Result<Vec<Album>>>>>,
    calls: Cell<usize>,
}

impl Gated {
    fn push_ok(&self, albums: Vec<Album>) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(Ok(albums));
        self.responses.borrow_mut().push_back(rx);
    }

    fn push_err(&self, message: &str) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(Err(AlbumSearchError::Source(message.to_string())));
        self.responses.borrow_mut().push_back(rx);
    }

    fn push_pending(&self) -> oneshot::Sender<Result<Vec<Album>>> {
        let (tx, rx) = oneshot::channel();
        self.responses.borrow_mut().push_back(rx);
        tx
    }
}

#[async_trait(?Send)]
impl AlbumsService for Gated {
    async fn get_all(&self) -> Result<Vec<Album>> {
        self.calls.set(self.calls.get() + 1);
        let next = self.responses.borrow_mut().pop_front();
        match next {
            Some(rx) => rx
                .await
                .map_err(|_| AlbumSearchError::Source("response dropped".to_string()))?,
            None => Err(AlbumSearchError::Source("no response queued".to_string())),
        }
    }
}

#[derive(Default)]
struct Recorder(RefCell<Vec<(String, String)>>);

impl Notifier for Recorder {
    fn open(&self, message: &str, action: &str) {
        self.0.borrow_mut().push((message.to_string(), action.to_string()));
    }
}

fn store() -> AlbumSearchStore<Gated, Recorder> {
    AlbumSearchStore::new(Gated::default(), Recorder::default())
}

fn albums(titles: &[&str]) -> Vec<Album> {
    titles.iter().zip(1..).map(|(title, id)| Album::new(id, *title)).collect()
}

fn titles(albums: &[Album]) -> Vec<&str> {
    albums.iter().map(|a| a.title.as_str()).collect()
}

#[test]
fn test_second_load_while_in_flight_is_dropped() {
    let store = store();
    let tx = store.service().push_pending();

    let first = store.load_all_albums().expect("idle store starts a fetch");
    let check = async {
        assert!(store.is_loading());
        assert!(store.load_all_albums().is_none());
        let _ = tx.send(Ok(albums(&["Revolver"])));
    };
    block_on(async { futures::join!(first, check) });

    assert_eq!(store.service().calls.get(), 1);
    assert!(!store.is_loading());
    assert_eq!(titles(&store.albums()), ["Revolver"]);
}

#[test]
fn test_query_narrows_visible_albums() {
    let store = store();
    store.service().push_ok(albums(&["Abbey Road", "Revolver"]));
    block_on(store.load_all_albums().unwrap());

    store.update_query("rev");

    assert_eq!(titles(&store.filtered_albums()), ["Revolver"]);
    assert_eq!(store.total_albums(), 1);
    assert_eq!(store.service().calls.get(), 1);
}

#[test]
fn test_failing_source_notifies_once() {
    let store = store();
    store.service().push_err("connection refused");
    block_on(store.load_all_albums().unwrap());

    assert!(!store.is_loading());
    assert!(store.albums().is_empty());
    assert!(!store.show_spinner());
    assert_eq!(
        *store.notifier().0.borrow(),
        vec![("Failed to load albums".to_string(), "Dismiss".to_string())]
    );
}

#[test]
fn test_descending_order() {
    let store = store();
    store.service().push_ok(albums(&["B", "A", "C"]));
    block_on(store.load_all_albums().unwrap());

    store.update_order(SortOrder::Desc);
    assert_eq!(titles(&store.filtered_albums()), ["C", "B", "A"]);

    store.update_order(SortOrder::Asc);
    assert_eq!(titles(&store.filtered_albums()), ["A", "B", "C"]);
}

#[test]
fn test_failed_refresh_keeps_previous_list() {
    let store = store();
    store.service().push_ok(albums(&["Abbey Road", "Revolver"]));
    store.service().push_err("timeout");

    block_on(store.load_all_albums().unwrap());
    block_on(store.load_all_albums().unwrap());

    assert_eq!(titles(&store.albums()), ["Abbey Road", "Revolver"]);
    assert!(!store.is_loading());
    assert_eq!(store.notifier().0.borrow().len(), 1);
}

#[test]
fn test_reload_after_settlement_fetches_again() {
    let store = store();
    store.service().push_ok(albums(&["Help!"]));
    store.service().push_ok(albums(&["Let It Be", "Help!"]));

    block_on(store.load_all_albums().unwrap());
    assert_eq!(titles(&store.albums()), ["Help!"]);

    block_on(store.load_all_albums().unwrap());
    assert_eq!(titles(&store.albums()), ["Let It Be", "Help!"]);
    assert_eq!(store.service().calls.get(), 2);
}

#[test]
fn test_spinner_only_when_nothing_visible() {
    let store = store();
    store.service().push_ok(albums(&["Revolver"]));
    block_on(store.on_init().unwrap());
    assert!(!store.show_spinner());

    let tx = store.service().push_pending();
    let refresh = store.load_all_albums().unwrap();
    let check = async {
        assert!(!store.show_spinner());
        store.update_query("zzz");
        assert!(store.show_spinner());
        let _ = tx.send(Ok(albums(&["Revolver", "Rubber Soul"])));
    };
    block_on(async { futures::join!(refresh, check) });

    assert!(!store.show_spinner());
    assert_eq!(store.total_albums(), 0);
    store.update_query("");
    assert_eq!(store.total_albums(), 2);
}

#[test]
fn test_on_init_loads_exactly_once() {
    let store = store();
    store.service().push_ok(albums(&["Revolver"]));

    block_on(store.on_init().unwrap());
    assert!(store.on_init().is_none());
    assert!(store.on_init().is_none());

    assert_eq!(store.service().calls.get(), 1);
}

#[test]
fn test_dropped_response_counts_as_failure() {
    let store = store();
    let tx = store.service().push_pending();
    drop(tx);

    block_on(store.load_all_albums().unwrap());

    assert!(!store.is_loading());
    assert_eq!(store.notifier().0.borrow().len(), 1);
}

#[test]
fn test_abandoned_fetch_allows_reload() {
    use futures::FutureExt;

    let store = store();
    store.service().push_ok(albums(&["Abbey Road"]));
    block_on(store.on_init().unwrap());

    // Polled once, then dropped while the source is still pending.
    let _tx = store.service().push_pending();
    assert!(store.load_all_albums().unwrap().now_or_never().is_none());

    assert!(!store.is_loading());
    assert!(!store.show_spinner());
    assert!(store.notifier().0.borrow().is_empty());
    assert_eq!(titles(&store.albums()), ["Abbey Road"]);

    store.service().push_ok(albums(&["Abbey Road", "Revolver"]));
    let reload = store.load_all_albums().expect("reload accepted after cancellation");
    block_on(reload);

    assert_eq!(store.service().calls.get(), 3);
    assert_eq!(titles(&store.albums()), ["Abbey Road", "Revolver"]);
}

#[test]
fn test_unpolled_fetch_dropped_allows_reload() {
    let store = store();
    drop(store.load_all_albums());
    assert!(!store.is_loading());

    store.service().push_ok(albums(&["Revolver"]));
    block_on(store.load_all_albums().expect("reload accepted after drop"));

    assert_eq!(store.service().calls.get(), 1);
    assert_eq!(titles(&store.albums()), ["Revolver"]);
}
