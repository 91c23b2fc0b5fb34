use scene::camera::Viewport;

use crate::error::WidgetError;

/// The page a widget lives in.
pub trait Host {
    type Element;

    /// Current window viewport.
    fn viewport(&self) -> Viewport;

    /// All elements matching `selector`, in document order, at call time.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, WidgetError>;

    fn append_child(&self, parent: &Self::Element, child: &Self::Element)
    -> Result<(), WidgetError>;

    /// Lay `element` over its preceding sibling and let pointer input fall through it.
    fn stack_overlay(&self, element: &Self::Element) -> Result<(), WidgetError>;
}
