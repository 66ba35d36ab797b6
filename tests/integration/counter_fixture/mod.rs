use counter_mvu::{CounterWidget, Document, WidgetConfig};
use tracing_subscriber::EnvFilter;

pub(crate) const MOUNT_ID: &str = "app";

/// Route library logs to the test harness. Filter with `RUST_LOG`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub(crate) fn given_a_document() -> Document {
    Document::new().with_element(MOUNT_ID)
}

pub(crate) fn given_a_mounted_counter() -> (Document, CounterWidget) {
    given_a_mounted_counter_with(WidgetConfig::default())
}

pub(crate) fn given_a_mounted_counter_with(config: WidgetConfig) -> (Document, CounterWidget) {
    init_tracing();
    let document = Document::new().with_element(&config.mount_id);
    let widget = CounterWidget::mount(&document, &config).unwrap();
    (document, widget)
}

/// The displayed count: the text of the first child of the widget's wrapper.
pub(crate) fn displayed_count(document: &Document) -> String {
    document
        .with_mounted(MOUNT_ID, |root, _| match root.children.first() {
            Some(counter_mvu::Node::Element(counter)) => counter.text_content(),
            other => panic!("expected the counter element, found {other:?}"),
        })
        .unwrap()
}
