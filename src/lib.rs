//! A counter widget built on a small reducer-driven state provider.
//!
//! State lives in exactly one [`Provider`]. Views read it through a [`Context`]
//! and request changes by dispatching [`Action`]s; the provider runs every
//! action through the [`Reducer`] and re-renders.
//!
//! ## Example
//!
//! ```rust
//! use counter_mvu::{CounterWidget, Document, WidgetConfig};
//!
//! let document = Document::new().with_element("app");
//! let widget = CounterWidget::mount(&document, &WidgetConfig::default())?;
//!
//! widget.click_plus()?;
//! widget.click_minus()?;
//! widget.click_minus()?;
//!
//! assert_eq!(widget.count(), -1);
//! assert!(document.html().contains(">-1</div>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The pieces compose with any state type as well:
//!
//! ```rust
//! use counter_mvu::{Context, Provider, Renderer};
//!
//! #[derive(Debug)]
//! enum Toggle { Flip }
//!
//! struct Print;
//! impl Renderer<String> for Print {
//!     fn render(&mut self, text: String) {
//!         println!("{text}");
//!     }
//! }
//!
//! let mut provider = Provider::new(
//!     false,
//!     |on: &bool, Toggle::Flip| !*on,
//!     |cx: &Context<'_, bool, Toggle>| format!("on: {}", cx.state),
//!     Print,
//! );
//! provider.mount();
//! provider.dispatcher().dispatch(Toggle::Flip);
//! provider.process_pending();
//! assert!(*provider.state());
//! ```

mod config;
mod dispatch;
mod dom;
mod error;
mod provider;
mod reducer;
mod renderer;
mod style;
mod view;
mod widget;

pub use config::{WidgetConfig, DEFAULT_MOUNT_ID};
pub use dispatch::Dispatch;
pub use dom::{Document, DomRenderer, Driver};
pub use error::{ActionError, DomError, MountError};
pub use provider::{Context, Provider, View};
pub use reducer::{counter_reducer, Action, CounterState, Reducer};
pub use renderer::Renderer;
pub use style::{
    button_style, buttons_style, counter_style, wrapper_style, ButtonPalette, ClassName, Style,
    StyleSheet,
};
pub use view::{button, minus_button, plus_button, App, Element, Handler, Node, MINUS_LABEL, PLUS_LABEL};
pub use widget::CounterWidget;

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
