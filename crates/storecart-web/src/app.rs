//! Page controller: owns the cart and routes DOM events to it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::mount::{mount_to, mount_to_body};
use leptos::prelude::*;
use storecart_cache::{Cache, KvStore, LocalStorage, MemoryStore};
use storecart_core::cart::CartStore;
use storecart_core::checkout::Checkout;
use storecart_core::{Money, ShopConfig};
use storecart_observability::{LogFormat, SessionId, StructuredLogger};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement};

use crate::channel::BrowserChannel;
use crate::form::DomCustomerForm;
use crate::model::{CartView, Toast};
use crate::page::{
    parse_log_level, parse_page_config, parse_price_attr, quantity_from_number, ADD_TO_CART_ATTR,
    CART_CONTAINER_ID, CHECKOUT_ATTR, CHECKOUT_BUTTON_ID, CONFIG_ATTR, LOG_LEVEL_ATTR, NAME_ATTR,
    PRICE_ATTR,
};
use crate::toast::ToastNotifier;
use crate::view::{CartTable, CartViewSink, ToastStack};

struct App {
    cart: CartStore<Box<dyn KvStore>>,
    checkout: Checkout,
    form: DomCustomerForm,
    channel: BrowserChannel,
    notifier: Rc<ToastNotifier>,
    logger: StructuredLogger,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Run `f` against the app. `None` before startup or on re-entry.
fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| {
        let mut app = cell.try_borrow_mut().ok()?;
        app.as_mut().map(f)
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let body_attr = |name: &str| document.body().and_then(|body| body.get_attribute(name));

    let logger = StructuredLogger::new(SessionId::generate())
        .with_min_level(parse_log_level(body_attr(LOG_LEVEL_ATTR).as_deref()))
        .with_format(LogFormat::Human);

    let config = match parse_page_config(body_attr(CONFIG_ATTR).as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logger
                .warn_builder("ignoring invalid shop config")
                .field("error", e.to_string())
                .emit();
            ShopConfig::default()
        }
    };

    let store: Box<dyn KvStore> = match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            logger
                .warn_builder("localStorage unavailable, cart will not survive reload")
                .field("error", e.to_string())
                .emit();
            Box::new(MemoryStore::new())
        }
    };

    let signals = Signals {
        cart: RwSignal::new(CartView::new(&[], Money::ZERO, config.currency)),
        toasts: RwSignal::new(Vec::new()),
    };

    let notifier = Rc::new(ToastNotifier::new(
        signals.toasts,
        config.toast_duration_ms,
        logger.for_component("toast"),
    ));

    let cart = CartStore::open(
        Cache::new(store),
        config.storage_key.as_str(),
        logger.for_component("cart"),
    )
    .with_listener(CartViewSink::new(signals.cart, config.currency))
    .with_notifier(notifier.clone());
    cart.refresh();

    let app = App {
        cart,
        checkout: Checkout::new(config.currency, logger.for_component("checkout")),
        form: DomCustomerForm::new(document.clone()),
        channel: BrowserChannel::new(window.clone(), config.order_link()),
        notifier,
        logger: logger.for_component("page"),
    };
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    listen(&document, "click", on_click)?;

    if is_loading(&document) {
        listen(&document, "DOMContentLoaded", move |_| signals.mount())?;
    } else {
        signals.mount();
    }

    logger
        .info_builder("storecart ready")
        .field("storage_key", config.storage_key.as_str())
        .field("currency", config.currency.code())
        .emit();

    Ok(())
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// `document.readyState`, read reflectively so no extra bindings are needed.
fn is_loading(target: &EventTarget) -> bool {
    js_sys::Reflect::get(target, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading")
}

/// The reactive state the components render from.
#[derive(Clone, Copy)]
struct Signals {
    cart: RwSignal<CartView>,
    toasts: RwSignal<Vec<Toast>>,
}

impl Signals {
    /// Mount the toast stack and, when the page has a cart container, the
    /// cart table. The checkout button follows the cart's emptiness.
    fn mount(self) {
        let toasts = self.toasts;
        mount_to_body(move || view! { <ToastStack toasts=toasts/> });

        let container = document()
            .get_element_by_id(CART_CONTAINER_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let Some(container) = container else {
            with_app(|app| app.logger.debug("no cart container on this page"));
            return;
        };
        container.set_text_content(None);

        let cart = self.cart;
        mount_to(container, move || {
            Effect::new(move |_| {
                let display = cart.with(CartView::checkout_display);
                let button = document()
                    .get_element_by_id(CHECKOUT_BUTTON_ID)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                if let Some(button) = button {
                    let _ = button.style().set_property("display", display);
                }
            });
            view! { <CartTable cart=cart/> }
        })
        .forget();
    }
}

fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn closest(el: &Element, attr: &str) -> Option<Element> {
    el.closest(&format!("[{}]", attr)).ok().flatten()
}

fn on_click(event: Event) {
    let Some(target) = target_element(&event) else {
        return;
    };

    if let Some(button) = closest(&target, ADD_TO_CART_ATTR) {
        let name = button.get_attribute(NAME_ATTR);
        let price = button.get_attribute(PRICE_ATTR);
        match (name, price.as_deref().and_then(parse_price_attr)) {
            (Some(name), Some(price)) => {
                with_app(|app| app.cart.add_item(&name, price));
            }
            _ => {
                with_app(|app| {
                    app.logger
                        .warn_builder("add-to-cart button needs data-name and a valid data-price")
                        .field("price", price.unwrap_or_default())
                        .emit()
                });
            }
        }
    } else if closest(&target, CHECKOUT_ATTR).is_some() {
        handle_checkout();
    }
}

/// Move the quantity of `name` up or down by `delta`; dropping to zero
/// removes the line.
pub(crate) fn step_quantity(name: &str, delta: i64) {
    with_app(|app| {
        if let Some(quantity) = app.cart.get(name).map(|item| i64::from(item.quantity)) {
            app.cart.set_quantity(name, quantity + delta);
        }
    });
}

/// Apply the text of a quantity field.
pub(crate) fn edit_quantity(name: &str, raw: &str) {
    with_app(|app| app.cart.set_quantity_input(name, raw));
}

impl App {
    fn submit_order(&mut self) {
        let _ = self.checkout.submit(
            &mut self.cart,
            &mut self.form,
            &self.channel,
            &self.notifier,
        );
    }
}

/// Add one unit of `name` at `price`.
#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(name: &str, price: f64) {
    with_app(|app| match Money::from_decimal(price) {
        Some(price) => {
            app.cart.add_item(name, price);
        }
        None => app
            .logger
            .warn_builder("rejected price")
            .field("name", name)
            .field("price", price.to_string())
            .emit(),
    });
}

#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(name: &str) {
    with_app(|app| app.cart.remove_item(name));
}

/// Set the quantity of `name`. Accepts a number or the raw text of a
/// quantity field.
#[wasm_bindgen(js_name = updateQuantity)]
pub fn update_quantity(name: &str, quantity: JsValue) {
    with_app(|app| {
        if let Some(number) = quantity.as_f64() {
            app.cart.set_quantity(name, quantity_from_number(number));
        } else {
            let raw = quantity.as_string().unwrap_or_default();
            app.cart.set_quantity_input(name, &raw);
        }
    });
}

#[wasm_bindgen(js_name = handleCheckout)]
pub fn handle_checkout() {
    with_app(App::submit_order);
}

