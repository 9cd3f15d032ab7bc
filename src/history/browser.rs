use crate::history::{HistoryBackend, HistoryEntry, HistoryError, HistoryResult, HistoryState};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

type PopListener = Closure<dyn FnMut(web_sys::PopStateEvent)>;

fn js_error(operation: &'static str, err: JsValue) -> HistoryError {
    HistoryError::Operation {
        operation,
        message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

/// `window.history` backend. The `popstate` listener is removed on drop.
pub struct BrowserHistory {
    window: web_sys::Window,
    history: web_sys::History,
    listener: Option<PopListener>,
}

impl BrowserHistory {
    pub fn new() -> HistoryResult<Self> {
        let window = web_sys::window().ok_or(HistoryError::Unavailable)?;
        let history = window
            .history()
            .map_err(|err| js_error("history", err))?;

        Ok(Self {
            window,
            history,
            listener: None,
        })
    }

    fn encode_state(state: HistoryState) -> HistoryResult<JsValue> {
        serde_json::to_string(&state)
            .map(|json| JsValue::from_str(&json))
            .map_err(|err| HistoryError::State {
                message: err.to_string(),
            })
    }

    fn remove_listener(&mut self) {
        if let Some(listener) = self.listener.take() {
            let removed = self
                .window
                .remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
            if let Err(err) = removed {
                let err = js_error("removeEventListener", err);
                tracing::warn!(error = %err, "popstate listener not removed");
            }
        }
    }
}

impl HistoryBackend for BrowserHistory {
    fn current(&self) -> HistoryResult<HistoryEntry> {
        let location = self.window.location();
        let path = location
            .pathname()
            .map_err(|err| js_error("location.pathname", err))?;
        let search = location
            .search()
            .map_err(|err| js_error("location.search", err))?;

        // entries not written by this router carry no state and count as index 0
        let state = self
            .history
            .state()
            .ok()
            .and_then(|value| value.as_string())
            .and_then(|json| serde_json::from_str::<HistoryState>(&json).ok())
            .unwrap_or_default();

        Ok(HistoryEntry {
            path,
            search: search.trim_start_matches('?').to_string(),
            state,
        })
    }

    fn push(&mut self, url: &str, state: HistoryState) -> HistoryResult<()> {
        let state = Self::encode_state(state)?;
        self.history
            .push_state_with_url(&state, "", Some(url))
            .map_err(|err| js_error("pushState", err))
    }

    fn replace(&mut self, url: &str, state: HistoryState) -> HistoryResult<()> {
        let state = Self::encode_state(state)?;
        self.history
            .replace_state_with_url(&state, "", Some(url))
            .map_err(|err| js_error("replaceState", err))
    }

    fn go(&mut self, delta: isize) -> HistoryResult<()> {
        self.history
            .go_with_delta(delta as i32)
            .map_err(|err| js_error("go", err))
    }

    fn listen(&mut self, mut on_pop: Box<dyn FnMut()>) -> HistoryResult<()> {
        self.remove_listener();

        let listener: PopListener = Closure::new(move |_event: web_sys::PopStateEvent| on_pop());
        self.window
            .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
            .map_err(|err| js_error("addEventListener", err))?;
        self.listener = Some(listener);
        Ok(())
    }
}

impl Drop for BrowserHistory {
    fn drop(&mut self) {
        self.remove_listener();
    }
}
