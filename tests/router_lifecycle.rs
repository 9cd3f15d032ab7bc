use shell_router::history::HistoryBridge;
use shell_router::path::BasePath;
use shell_router::{ParamsPatch, Router, RouterPhase};
use std::cell::Cell;
use std::rc::Rc;

fn detached_router() -> Router {
    Router::builder()
        .route("home", "/")
        .route("page", "/:slug")
        .detached()
        .build()
        .expect("router should build")
}

#[test]
fn router_when_detached_then_route_is_empty_and_unmatched() {
    let router = detached_router();
    let route = router.route();

    assert_eq!(route.pathname(), "/");
    assert!(route.is_not_found());
    assert!(route.search_params().is_empty());
    assert!(!router.history().is_attached());
    assert_eq!(router.phase(), RouterPhase::Idle);
}

#[test]
fn router_when_detached_then_navigation_is_a_silent_noop() {
    let router = detached_router();
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    router.subscribe(move |_| counter.set(counter.get() + 1));

    router.navigate("/one");
    router.replace("/two");
    router.set_params(&ParamsPatch::new().set("a", "1"));
    router.back();
    router.forward();

    assert_eq!(calls.get(), 0);
    assert_eq!(router.version(), 0);
    assert_eq!(router.pathname(), "/");
    assert!(!router.can_go_back());
    assert_eq!(router.history().run_pending_traversals(), 0);
}

#[test]
fn router_when_detached_then_pure_helpers_still_work() {
    let router = detached_router();
    assert_eq!(router.match_path("/hello").id(), Some("page"));
    assert_eq!(router.href("hello?x=1"), "/hello?x=1");
}

#[test]
fn bridge_when_detached_then_location_is_none_and_subscribers_never_run() {
    let bridge = HistoryBridge::detached(BasePath::root());
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    bridge.subscribe(move |_| counter.set(counter.get() + 1));

    bridge.push("/x");
    bridge.replace("/y");
    bridge.back();

    assert!(bridge.location().is_none());
    assert_eq!(calls.get(), 0);
    assert_eq!(bridge.subscriber_count(), 1);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn bridge_when_detected_outside_browser_then_runs_detached() {
    let bridge = HistoryBridge::detect(BasePath::root());
    assert!(!bridge.is_attached());
}

#[test]
fn router_when_cloned_then_handles_share_state() {
    let history = shell_router::MemoryHistory::new("/");
    let router = Router::builder()
        .route("page", "/:slug")
        .memory_history(history)
        .build()
        .expect("router should build");
    let other = router.clone();

    other.navigate("/shared");
    assert_eq!(router.pathname(), "/shared");
    assert_eq!(router.version(), other.version());
    assert!(std::rc::Rc::ptr_eq(&router.route(), &other.route()));
}
