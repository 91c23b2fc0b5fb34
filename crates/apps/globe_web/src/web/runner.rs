//! Event wiring and the animation-frame loop for mounted widgets.
//!
//! Every closure registered here lives as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use foundation::math::Vec2;
use tracing::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, PointerEvent, WheelEvent};

use super::host::WebHost;
use super::toolkit::{ThreeToolkit, js_error};
use crate::error::WidgetError;
use crate::host::Host;
use crate::widget::Widget;

type SharedWidget = Rc<RefCell<Widget<ThreeToolkit>>>;

/// Hook `widget` up to window resizes and pointer input, then start its frame loop.
pub fn run(widget: Widget<ThreeToolkit>, host: &WebHost) -> Result<(), WidgetError> {
    let widget: SharedWidget = Rc::new(RefCell::new(widget));
    install_resize_listener(&widget, host)?;
    install_pointer_listeners(&widget, host)?;
    start_frame_loop(widget, host)
}

fn listen<E: JsCast>(
    target: &web_sys::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) -> Result<(), WidgetError> {
    let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| WidgetError::Dom(js_error(&e)))?;
    closure.forget();
    Ok(())
}

fn install_resize_listener(widget: &SharedWidget, host: &WebHost) -> Result<(), WidgetError> {
    let widget = widget.clone();
    let resize_host = host.clone();
    listen(host.window(), "resize", move |_: web_sys::Event| {
        widget.borrow_mut().handle_resize(resize_host.viewport());
    })
}

fn local_position(element: &HtmlElement, client_x: i32, client_y: i32) -> Vec2 {
    let rect = element.get_bounding_client_rect();
    Vec2::new(client_x as f64 - rect.left(), client_y as f64 - rect.top())
}

/// Presses and wheel turns are taken on the primary surface; moves and
/// releases on the window so a drag keeps tracking outside the canvas.
fn install_pointer_listeners(widget: &SharedWidget, host: &WebHost) -> Result<(), WidgetError> {
    let element = widget
        .borrow()
        .primary_element()
        .ok_or_else(|| WidgetError::Renderer("no primary surface".to_string()))?;

    let down_widget = widget.clone();
    let down_element = element.clone();
    listen(&element, "pointerdown", move |ev: PointerEvent| {
        let pos = local_position(&down_element, ev.client_x(), ev.client_y());
        down_widget.borrow_mut().pointer_down(pos, ev.button());
    })?;

    let move_widget = widget.clone();
    let move_element = element.clone();
    listen(host.window(), "pointermove", move |ev: PointerEvent| {
        let pos = local_position(&move_element, ev.client_x(), ev.client_y());
        move_widget.borrow_mut().pointer_move(pos);
    })?;

    let up_widget = widget.clone();
    listen(host.window(), "pointerup", move |_: PointerEvent| {
        up_widget.borrow_mut().pointer_up();
    })?;

    let wheel_widget = widget.clone();
    listen(&element, "wheel", move |ev: WheelEvent| {
        wheel_widget.borrow_mut().wheel(ev.delta_y());
    })
}

fn start_frame_loop(widget: SharedWidget, host: &WebHost) -> Result<(), WidgetError> {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let window = host.window().clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        widget.borrow_mut().tick();
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                error!(error = %js_error(&err), "animation frame request failed");
            }
        }
    }) as Box<dyn FnMut()>));

    let first = callback.borrow();
    let Some(cb) = first.as_ref() else {
        return Ok(());
    };
    host.window()
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map(|_| ())
        .map_err(|e| WidgetError::Dom(js_error(&e)))
}
