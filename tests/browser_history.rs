#![cfg(target_arch = "wasm32")]

use shell_router::history::{BrowserHistory, HistoryBackend, HistoryBridge, HistoryState};
use shell_router::path::BasePath;
use shell_router::{NavigationMode, Router};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_history_when_pushed_then_location_reflects_url() {
    let mut history = BrowserHistory::new().expect("window should exist");
    history
        .push("/browser/push?x=1", HistoryState { index: 1 })
        .expect("pushState should succeed");

    let entry = history.current().expect("location should be readable");
    assert_eq!(entry.path, "/browser/push");
    assert_eq!(entry.search, "x=1");
    assert_eq!(entry.state.index, 1);
}

#[wasm_bindgen_test]
fn bridge_when_browser_backed_then_push_notifies_synchronously() {
    let bridge = HistoryBridge::browser(BasePath::root());
    assert!(bridge.is_attached());

    let modes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&modes);
    bridge.subscribe(move |event| sink.borrow_mut().push(event.mode));

    bridge.push("/browser/bridge");
    assert_eq!(*modes.borrow(), vec![NavigationMode::Push]);
    assert_eq!(
        bridge.location().map(|location| location.pathname),
        Some("/browser/bridge".to_string())
    );
}

#[wasm_bindgen_test]
fn router_when_browser_backed_then_navigate_updates_route() {
    let router = Router::builder()
        .route("page", "/browser/:slug")
        .build()
        .expect("router should build");

    router.navigate("/browser/wasm");
    assert_eq!(router.route().param("slug"), Some("wasm"));
    assert!(router.can_go_back());
}

#[wasm_bindgen_test]
fn browser_history_when_dropped_then_popstate_listener_is_released() {
    let mut history = BrowserHistory::new().expect("window should exist");
    history
        .listen(Box::new(|| {}))
        .expect("popstate listener should install");
    drop(history);

    let bridge = HistoryBridge::browser(BasePath::root());
    bridge.push("/browser/after-drop");
    assert_eq!(
        bridge.location().map(|location| location.pathname),
        Some("/browser/after-drop".to_string())
    );
}
