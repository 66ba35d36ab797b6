//! A minimal host document with mount points, and the renderer that targets it.

use std::sync::Arc;

use indexmap::IndexMap;
use spin::Mutex;
use tracing::{debug, trace};

use crate::error::{DomError, MountError};
use crate::style::StyleSheet;
use crate::view::{Element, Handler};
use crate::Renderer;

/// Runs after every click on a mount point, applying whatever the click queued.
pub type Driver = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct MountPoint {
    attached: bool,
    tree: Option<Element>,
    driver: Option<Driver>,
}

#[derive(Default)]
struct DocumentInner {
    mount_points: IndexMap<String, MountPoint>,
    styles: StyleSheet,
}

impl DocumentInner {
    fn mounted(&self, id: &str) -> Result<&Element, DomError> {
        self.mount_points
            .get(id)
            .and_then(|point| point.tree.as_ref())
            .ok_or_else(|| DomError::NotMounted { id: id.to_owned() })
    }
}

/// The host document a widget attaches to.
///
/// Cloning yields another handle onto the same document. The document owns the
/// [`StyleSheet`] that scopes every style rendered into it.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<Mutex<DocumentInner>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a pre-existing element that can serve as a mount point.
    pub fn with_element(self, id: &str) -> Self {
        self.inner
            .lock()
            .mount_points
            .entry(id.to_owned())
            .or_default();
        self
    }

    /// Attach a renderer to the element with the given id.
    pub fn mount(&self, id: &str) -> Result<DomRenderer, MountError> {
        let mut inner = self.inner.lock();
        let point = inner
            .mount_points
            .get_mut(id)
            .ok_or_else(|| MountError::MountPointNotFound { id: id.to_owned() })?;
        if point.attached {
            return Err(MountError::AlreadyMounted { id: id.to_owned() });
        }
        point.attached = true;
        debug!(id, "attached renderer to mount point");

        Ok(DomRenderer {
            id: id.to_owned(),
            document: self.inner.clone(),
        })
    }

    /// Markup of every mount point, in declaration order.
    pub fn html(&self) -> String {
        let inner = self.inner.lock();
        let mut html = String::new();
        for (id, point) in &inner.mount_points {
            html.push_str("<div id=\"");
            html.push_str(&html_escape::encode_double_quoted_attribute(id));
            html.push_str("\">");
            if let Some(tree) = &point.tree {
                tree.write_html(&mut html);
            }
            html.push_str("</div>");
        }
        html
    }

    pub fn stylesheet_css(&self) -> String {
        self.inner.lock().styles.to_css()
    }

    pub fn text_content(&self, id: &str) -> Result<String, DomError> {
        Ok(self.inner.lock().mounted(id)?.text_content())
    }

    /// Labels of every button under the mount point, in document order.
    pub fn button_labels(&self, id: &str) -> Result<Vec<String>, DomError> {
        let inner = self.inner.lock();
        let mut labels = Vec::new();
        inner.mounted(id)?.walk(&mut |element| {
            if element.tag == "button" {
                labels.push(element.text_content());
            }
        });
        Ok(labels)
    }

    /// Simulate a click on the first button labeled `label`.
    ///
    /// The handler and the mount point's driver run after the document is
    /// unlocked, so either may query or re-render this document.
    pub fn click(&self, id: &str, label: &str) -> Result<(), DomError> {
        let (handler, driver) = self.click_target(id, label)?;

        trace!(id, label, "click");
        if let Some(handler) = handler {
            handler();
        }
        if let Some(driver) = driver {
            driver();
        }
        Ok(())
    }

    fn click_target(
        &self,
        id: &str,
        label: &str,
    ) -> Result<(Option<Handler>, Option<Driver>), DomError> {
        let inner = self.inner.lock();
        let mut found = false;
        let mut handler = None;
        inner.mounted(id)?.walk(&mut |element| {
            if !found && element.tag == "button" && element.text_content() == label {
                found = true;
                handler = element.on_click.clone();
            }
        });

        if !found {
            return Err(DomError::ButtonNotFound {
                id: id.to_owned(),
                label: label.to_owned(),
            });
        }
        let driver = inner
            .mount_points
            .get(id)
            .and_then(|point| point.driver.clone());
        Ok((handler, driver))
    }

    /// Inspect the mounted tree together with the sheet its classes resolve against.
    pub fn with_mounted<F, R>(&self, id: &str, f: F) -> Result<R, DomError>
    where
        F: FnOnce(&Element, &StyleSheet) -> R,
    {
        let inner = self.inner.lock();
        let tree = inner.mounted(id)?;
        Ok(f(tree, &inner.styles))
    }
}

/// Renders element trees into one mount point of a [`Document`].
///
/// Each render registers the tree's styles in the document's sheet and
/// replaces the previously mounted tree. Dropping the renderer empties the
/// mount point.
pub struct DomRenderer {
    id: String,
    document: Arc<Mutex<DocumentInner>>,
}

impl DomRenderer {
    pub fn mount_id(&self) -> &str {
        &self.id
    }

    /// Install the driver run after each click on this renderer's mount point.
    ///
    /// Replaces any previous driver. Dropping the renderer removes it.
    pub fn set_driver(&self, driver: impl Fn() + Send + Sync + 'static) {
        let mut inner = self.document.lock();
        if let Some(point) = inner.mount_points.get_mut(&self.id) {
            point.driver = Some(Arc::new(driver));
        }
    }
}

impl Renderer<Element> for DomRenderer {
    fn render(&mut self, mut tree: Element) {
        let mut inner = self.document.lock();
        let DocumentInner {
            mount_points,
            styles,
        } = &mut *inner;

        tree.walk_mut(&mut |element| {
            if let Some(style) = &element.style {
                element.class = Some(styles.insert(style));
            }
        });

        if let Some(point) = mount_points.get_mut(&self.id) {
            point.tree = Some(tree);
        }
    }
}

impl Drop for DomRenderer {
    fn drop(&mut self) {
        // Released outside the lock: the driver may own the last handle to something
        // that renders into this document.
        let _driver = {
            let mut inner = self.document.lock();
            inner.mount_points.get_mut(&self.id).and_then(|point| {
                point.attached = false;
                point.tree = None;
                point.driver.take()
            })
        };
        debug!(id = %self.id, "detached renderer from mount point");
    }
}
