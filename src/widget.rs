//! The counter widget: reducer, provider, components and document wired together.

use std::sync::{Arc, Weak};

use spin::Mutex;
use tracing::debug;

use crate::config::WidgetConfig;
use crate::dom::{Document, DomRenderer};
use crate::error::{ActionError, DomError, MountError};
use crate::reducer::{counter_reducer, Action, CounterState};
use crate::view::{App, Element, MINUS_LABEL, PLUS_LABEL};
use crate::{Dispatch, Provider};

type CounterProvider = Provider<
    CounterState,
    Action,
    Element,
    fn(&CounterState, Action) -> CounterState,
    App,
    DomRenderer,
>;

/// A mounted counter.
///
/// Clicks on the document apply their action and re-render before
/// [`Document::click`] returns, so a host holding only the document always
/// reads the current count.
///
/// # Example
///
/// ```rust
/// use counter_mvu::{CounterWidget, Document, WidgetConfig};
///
/// let document = Document::new().with_element("app");
/// let _widget = CounterWidget::mount(&document, &WidgetConfig::default())?;
///
/// document.click("app", "plus")?;
///
/// assert_eq!(document.text_content("app")?, "1minusplus");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct CounterWidget {
    provider: Arc<Mutex<CounterProvider>>,
    document: Document,
    mount_id: String,
}

impl CounterWidget {
    /// Attach to the configured mount point and render the initial count.
    pub fn mount(document: &Document, config: &WidgetConfig) -> Result<Self, MountError> {
        let renderer = document.mount(&config.mount_id)?;

        let provider = Arc::new_cyclic(|weak: &Weak<Mutex<CounterProvider>>| {
            let weak = weak.clone();
            renderer.set_driver(move || {
                if let Some(provider) = weak.upgrade() {
                    provider.lock().process_pending();
                }
            });
            Mutex::new(Provider::new(
                CounterState::new(config.initial_count),
                counter_reducer as fn(&CounterState, Action) -> CounterState,
                App,
                renderer,
            ))
        });
        provider.lock().mount();
        debug!(mount_id = %config.mount_id, initial_count = config.initial_count, "counter mounted");

        Ok(Self {
            provider,
            document: document.clone(),
            mount_id: config.mount_id.clone(),
        })
    }

    pub fn click_plus(&self) -> Result<(), DomError> {
        self.document.click(&self.mount_id, PLUS_LABEL)
    }

    pub fn click_minus(&self) -> Result<(), DomError> {
        self.document.click(&self.mount_id, MINUS_LABEL)
    }

    /// Apply an action and re-render.
    pub fn dispatch(&self, action: Action) {
        let mut provider = self.provider.lock();
        provider.dispatcher().dispatch(action);
        provider.process_pending();
    }

    /// Decode an action from its JSON wire form, apply it and re-render.
    pub fn dispatch_json(&self, json: &str) -> Result<(), ActionError> {
        self.dispatch(Action::from_json(json)?);
        Ok(())
    }

    /// Apply actions queued through [`dispatcher`](Self::dispatcher) handles.
    /// Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        self.provider.lock().process_pending()
    }

    pub fn count(&self) -> i64 {
        self.provider.lock().state().count
    }

    /// A handle that queues actions until the next click, dispatch or
    /// [`process_pending`](Self::process_pending).
    pub fn dispatcher(&self) -> Dispatch<Action> {
        self.provider.lock().dispatcher()
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Detach from the document and return the final state.
    pub fn unmount(self) -> CounterState {
        let state = *self.provider.lock().state();
        debug!(mount_id = %self.mount_id, count = state.count, "counter unmounted");
        state
    }
}
